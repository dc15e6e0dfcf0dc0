use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{ProjectCard, SimpleLayout};
use crate::content::{PageMetadata, Project, PROJECTS};

pub const METADATA: PageMetadata = PageMetadata {
    title: "Product Experience",
    description: "A comprehensive showcase of my product development projects, from AI platforms to community-driven applications.",
};

pub const HEADING: &str = "Product Experience Portfolio";

pub const INTRO: &str = "From founding a knowledge curation platform serving 30,000+ readers to developing AI-powered surgical systems, here's a comprehensive showcase of my product development journey across various domains.";

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text={METADATA.title} />
        <Meta name="description" content={METADATA.description} />
        <Projects />
    }
}

#[component]
pub fn Projects(#[prop(default = PROJECTS)] projects: &'static [Project]) -> impl IntoView {
    view! {
        <SimpleLayout title=HEADING intro=INTRO>
            <ul role="list" class="projects">
                {projects
                    .iter()
                    .map(|project| view! { <ProjectCard project={*project} /> })
                    .collect_view()}
            </ul>
        </SimpleLayout>
    }
}
