use app::content::{PORTRAIT_PATH, PROJECTS, SITE, SOCIAL_LINKS};
use std::path::PathBuf;
use app::icons::Icon;
use app::pages::{about, projects};

#[test]
fn page_metadata() {
    assert_eq!("About", about::METADATA.title);
    assert!(about::METADATA.description.starts_with("I'm Gan Liu"));
    assert_eq!("Product Experience", projects::METADATA.title);
    assert!(!projects::METADATA.description.is_empty());
    assert_eq!("Gan Liu", SITE.title);
}

#[test]
fn project_serializes_with_icon_name() {
    let value = serde_json::to_value(PROJECTS[0]).unwrap();
    assert_eq!("Lumilib: Curated Knowledge Community Platform", value["name"]);
    assert_eq!("https://www.lumilib.com/main", value["link"]["href"]);
    assert_eq!("Visit Lumilib", value["link"]["label"]);
    assert_eq!("nextjs", value["icon"]);
}

#[test]
fn icon_serialization_matches_name() {
    for icon in Icon::ALL {
        assert_eq!(serde_json::json!(icon.name()), serde_json::to_value(icon).unwrap());
    }
}

#[test]
fn social_links_serialize_in_order() {
    let value = serde_json::to_value(SOCIAL_LINKS).unwrap();
    let hrefs = value
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["href"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            "mailto:gan.liu@mail.mcgill.ca",
            "https://github.com/gumlau",
            "https://x.com/gumliu",
            "https://www.linkedin.com/in/ganliu-dev",
        ],
        hrefs
    );
}

#[test]
fn portrait_is_served_from_the_assets_dir() {
    let path: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "..",
        "public",
        PORTRAIT_PATH.trim_start_matches('/'),
    ]
    .iter()
    .collect();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!([0xff, 0xd8], bytes[..2], "{path:?} is not a JPEG");
}
