use app::content::SITE;
use app::pages::{about, projects};
use app::{format_title, shell, NotFound};
use futures::StreamExt;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_meta::{provide_meta_context, ServerMetaContext, Title};
use leptos_router::location::RequestUrl;
use scraper::{Html, Selector};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = any_spawner::Executor::init_futures_executor();
}

/// Injects the head elements registered while rendering into the document, the way the
/// server does once the body is rendered.
fn render_document(render: impl FnOnce() -> String) -> Html {
    let owner = Owner::new();
    let (meta_context, output) = ServerMetaContext::new();
    let html = owner.with(|| {
        provide_context(meta_context);
        render()
    });
    let html = futures::executor::block_on(async move {
        output
            .inject_meta_context(futures::stream::iter(vec![html]))
            .await
            .collect::<String>()
            .await
    });
    log::debug!("{html}");
    Html::parse_document(&html)
}

fn render_page<F, V>(page: F) -> Html
where
    F: FnOnce() -> V,
    V: IntoView,
{
    render_document(move || {
        provide_meta_context();
        let formatter = view! { <Title formatter=format_title /> }.to_html();
        let body = page().to_html();
        format!("<!DOCTYPE html><html><head><!--HEAD--></head><body>{formatter}{body}</body></html>")
    })
}

fn descriptions(document: &Html) -> Vec<String> {
    document
        .select(&Selector::parse(r#"meta[name="description"]"#).unwrap())
        .map(|meta| meta.value().attr("content").unwrap_or_default().to_string())
        .collect()
}

fn title(document: &Html) -> String {
    document
        .select(&Selector::parse("head title").unwrap())
        .map(|title| title.text().collect::<String>())
        .collect()
}

#[test]
fn title_format() {
    assert_eq!("Gan Liu", format_title(String::new()));
    assert_eq!("About - Gan Liu", format_title(String::from("About")));
}

#[test]
fn about_registers_its_metadata() {
    setup();

    let document = render_page(|| view! { <about::Index /> });
    assert_eq!(vec![about::METADATA.description.to_string()], descriptions(&document));
    assert_eq!("About - Gan Liu", title(&document));
}

#[test]
fn projects_registers_its_metadata() {
    setup();

    let document = render_page(|| view! { <projects::Index /> });
    assert_eq!(vec![projects::METADATA.description.to_string()], descriptions(&document));
    assert_eq!("Product Experience - Gan Liu", title(&document));
}

#[test]
fn unknown_paths_get_the_site_description() {
    setup();

    let document = render_page(|| view! { <NotFound /> });
    assert_eq!(vec![SITE.description.to_string()], descriptions(&document));
}

#[test]
fn shell_emits_a_single_description() {
    setup();

    for (path, metadata) in [
        ("/", about::METADATA),
        ("/about", about::METADATA),
        ("/projects", projects::METADATA),
    ] {
        let document = render_document(move || {
            provide_context(RequestUrl::new(path));
            let options = LeptosOptions::builder().output_name("portfolio").build();
            shell(options).to_html()
        });
        assert_eq!(vec![metadata.description.to_string()], descriptions(&document), "{path}");
        assert_eq!(format_title(metadata.title.to_string()), title(&document), "{path}");
    }
}
