use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{Project, SocialLink, AUTHOR};
use crate::icons::{IconGlyph, LinkIcon};

fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        String::from(base)
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/about">"About"</A></li>
                <li><A href="/projects">"Projects"</A></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>"\u{2191} Copyright \u{24d2}2025, " {AUTHOR} " \u{2191}"</small></a>
            </p>
        </footer>
    }
}

#[component]
pub fn Container(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class={classes("container", class)}>
            <div class="container-inner">{children()}</div>
        </div>
    }
}

/// Page header (title and intro) above arbitrary content.
#[component]
pub fn SimpleLayout(title: &'static str, intro: &'static str, children: Children) -> impl IntoView {
    view! {
        <Container class="simple-layout">
            <header class="simple-layout-header">
                <h1>{title}</h1>
                <p class="intro">{intro}</p>
            </header>
            <div class="simple-layout-body">{children()}</div>
        </Container>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <li class="card">{children()}</li> }
}

/// The overlay span stretches the click target over the whole card.
#[component]
pub fn CardLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a href=href class="card-link">
            <span class="card-link-overlay"></span>
            <span class="card-link-text">{children()}</span>
        </a>
    }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="card-description">{children()}</p> }
}

#[component]
pub fn SocialLinkItem(link: SocialLink, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <li class={classes("social-link", class)}>
            <a href={link.href}>
                <IconGlyph icon={link.icon} class="social-link-icon" />
                <span class="social-link-label">{link.label}</span>
            </a>
        </li>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <Card>
            <div class="card-badge">
                <IconGlyph icon={project.icon} class="card-badge-icon" />
            </div>
            <h2 class="card-title">
                <CardLink href={project.link.href}>{project.name}</CardLink>
            </h2>
            <CardDescription>{project.description}</CardDescription>
            <p class="card-footer">
                <LinkIcon class="card-footer-icon" />
                <span class="card-footer-label">{project.link.label}</span>
            </p>
        </Card>
    }
}
