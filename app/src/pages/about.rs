use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{Container, SocialLinkItem};
use crate::content::{PageMetadata, SkillCategory, SocialLink, PORTRAIT_PATH, SKILLS, SOCIAL_LINKS};
use crate::icons::{Icon, IconGlyph};

pub const METADATA: PageMetadata = PageMetadata {
    title: "About",
    description: "I'm Gan Liu, an AI Product Developer and Data Scientist with experience in machine learning, product strategy, and business analytics across multiple continents.",
};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text={METADATA.title} />
        <Meta name="description" content={METADATA.description} />
        <About />
    }
}

#[component]
pub fn About(
    #[prop(default = SKILLS)] skills: &'static [SkillCategory],
    #[prop(default = SOCIAL_LINKS)] social_links: &'static [SocialLink],
) -> impl IntoView {
    view! {
        <Container class="about">
            <div class="about-grid">
                <div class="about-portrait">
                    <div class="portrait-frame">
                        <img
                            src={PORTRAIT_PATH}
                            alt=""
                            sizes="(min-width: 1024px) 32rem, 20rem"
                            class="portrait"
                        />
                    </div>
                </div>
                <div class="about-bio">
                    <h1>"AI Product Developer, Data Scientist, and Entrepreneur"</h1>
                    <div class="bio">
                        <p>
                            "I'm a Computer Science student at SUSTech with a passion for building products that solve real-world problems. My journey spans from founding Lumilib, a knowledge curation platform serving 30,000+ readers, to developing machine learning pipelines for agricultural research at McGill University."
                        </p>
                        <p>
                            "Currently, I'm gaining international experience through research at McGill University and business development at WeGo Singapore. My technical expertise includes Python, JavaScript, machine learning, and modern web technologies like Next.js and TypeScript. I'm particularly skilled at bridging the gap between complex technical solutions and user-centered product experiences."
                        </p>
                        <p>
                            "I've been recognized for my work, including winning Silver Prize in the Shokz Cup Competition and securing government funding for innovative AI projects. I'm passionate about using AI and data science to create meaningful impact, whether that's through optimizing agricultural yields, building community platforms, or developing intuitive user interfaces."
                        </p>
                        <p>
                            "Beyond coding, I enjoy presenting at international conferences and have spoken in Dubai and Japan about strategic planning and product insights. I believe in \u{201c}first-hand rather than retold, timeless rather than trending\u{201d} \u{2014} a philosophy that drives both my content curation work and product development approach."
                        </p>
                    </div>
                </div>
                <div class="about-details">
                    <section class="competencies">
                        <h2>
                            <IconGlyph icon=Icon::Wrench class="competencies-icon" />
                            <span>"Core Competencies"</span>
                        </h2>
                        <div class="skills">
                            {skills
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill">
                                            <h3>{skill.label}</h3>
                                            <p>{skill.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                    <ul role="list" class="social-links">
                        {social_links
                            .iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let class = if index == 0 { "" } else { "spaced" };
                                view! { <SocialLinkItem link={*link} class=class /> }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Container>
    }
}
