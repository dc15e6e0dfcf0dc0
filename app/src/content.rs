use serde::Serialize;

use crate::icons::Icon;

/// Title and description a page hands over to the document head.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Passed through as-is, `mailto:` included.
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    /// Either an absolute URL or the `#` placeholder.
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub icon: Icon,
}

pub const AUTHOR: &str = "Gan Liu";

pub const SITE: PageMetadata = PageMetadata {
    title: AUTHOR,
    description: "Gan Liu, AI Product Developer, Data Scientist, and Entrepreneur.",
};

pub const PORTRAIT_PATH: &str = "/images/portrait.jpg";

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        label: "Product Management",
        description: "User Research, Product Strategy, MVP Design, Roadmap Planning, Cross-functional Collaboration",
    },
    SkillCategory {
        label: "AI/ML Product Development",
        description: "LLM Integration, Computer Vision Applications, AI-Human Interaction Design",
    },
    SkillCategory {
        label: "Technical Skills",
        description: "Python, JavaScript, SQL, Git, Cursor, GitHub Copilot, Claude Code",
    },
    SkillCategory {
        label: "Low-code/No-code Platforms",
        description: "Figma, Webflow, Tableau, Power BI (experienced with rapid prototyping workflows)",
    },
    SkillCategory {
        label: "Data & Analytics",
        description: "User Behavior Analysis, A/B Testing, KPI Design, Business Intelligence, BigQuery",
    },
    SkillCategory {
        label: "Design & UX",
        description: "Information Architecture, Interaction Design, User Journey Mapping, Wireframing",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "mailto:gan.liu@mail.mcgill.ca",
        label: "gan.liu@mail.mcgill.ca",
        icon: Icon::Mail,
    },
    SocialLink {
        href: "https://github.com/gumlau",
        label: "Follow on GitHub",
        icon: Icon::GitHub,
    },
    SocialLink {
        href: "https://x.com/gumliu",
        label: "Follow on X",
        icon: Icon::X,
    },
    SocialLink {
        href: "https://www.linkedin.com/in/ganliu-dev",
        label: "Follow on LinkedIn",
        icon: Icon::LinkedIn,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Lumilib: Curated Knowledge Community Platform",
        description: r#"Founded and scaled knowledge curation platform serving 30,000+ active readers with daily, weekly, and monthly content delivery. Built sustainable community ecosystem with 600+ curated articles, focusing on "first-hand rather than retold, timeless rather than trending" content strategy."#,
        link: ProjectLink {
            href: "https://www.lumilib.com/main",
            label: "Visit Lumilib",
        },
        icon: Icon::NextJs,
    },
    Project {
        name: "BotHub: P2P AI Chatbot Platform & Marketplace",
        description: "Built comprehensive chatbot platform combining real-time conversation interface with P2P bot marketplace functionality. Features include multi-bot conversations, bot discovery, rating systems, and integrated payment workflows using Claude API and modern web technologies.",
        link: ProjectLink {
            href: "#",
            label: "Platform Demo",
        },
        icon: Icon::NextJs,
    },
    Project {
        name: "Wego Travel Insights Dashboard",
        description: "Led complete product lifecycle from stakeholder interviews to global deployment for enterprise strategic planning dashboard. Product successfully showcased at industry conferences and adopted company-wide, achieving 300% efficiency improvement in strategic planning.",
        link: ProjectLink {
            href: "https://wego-strategy.vercel.app/",
            label: "View Dashboard",
        },
        icon: Icon::NextJs,
    },
    Project {
        name: "AI-Powered 3D Visualization System for Ophthalmic Surgery",
        description: "Designed system architecture balancing medical safety requirements with intuitive user experience for surgical environments. Led cross-disciplinary team coordination and delivered comprehensive technical documentation, securing 10,000 RMB innovation funding.",
        link: ProjectLink {
            href: "#",
            label: "Technical Documentation",
        },
        icon: Icon::NextJs,
    },
    Project {
        name: "Next.js SEO Blog Starter Template",
        description: "Built and deployed open-source blog template with comprehensive SEO optimization, gaining 53+ GitHub stars and community adoption. Features one-click Vercel deployment, markdown-based content management, and mobile-optimized interface using Next.js 14 and TypeScript.",
        link: ProjectLink {
            href: "https://nextjs-seo-blog-starter.vercel.app",
            label: "View Demo",
        },
        icon: Icon::NextJs,
    },
    Project {
        name: "Biomimetic AUV and Subsea Cable Recognition System",
        description: "Developed biomimetic autonomous underwater vehicle integrated with vision-based cable detection and positioning capabilities. Created virtual underwater dataset and optimized recognition algorithms for complex subsea environments. Supervised by Academician Lin Jian, secured 15,000 RMB government funding.",
        link: ProjectLink {
            href: "https://gumlau.github.io/RayVision/",
            label: "View Project",
        },
        icon: Icon::NextJs,
    },
];
