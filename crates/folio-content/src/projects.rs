//! Project table
//!
//! Indices into [`PROJECTS`] are what desktop icons reference, so the order
//! of this table is part of the desktop configuration.

use serde::Serialize;

/// External link attached to a project
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Kind of gallery entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// One gallery entry (image or video)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub kind: MediaKind,
}

impl MediaItem {
    /// Create an image entry
    pub const fn image(src: &'static str, alt: &'static str) -> Self {
        Self {
            src,
            alt,
            kind: MediaKind::Image,
        }
    }

    /// Create a video entry
    pub const fn video(src: &'static str, alt: &'static str) -> Self {
        Self {
            src,
            alt,
            kind: MediaKind::Video,
        }
    }
}

/// Read-only description of a single project
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub title: &'static str,
    pub category: &'static str,
    /// Preview image used for the desktop icon and cards
    pub thumbnail: &'static str,
    pub description: &'static str,
    /// Year shown next to the title
    pub date: &'static str,
    pub tech_stack: &'static [&'static str],
    pub links: &'static [ProjectLink],
    pub media: &'static [MediaItem],
}

/// The authored project table, in display order
pub static PROJECTS: &[ProjectDescriptor] = &[
    ProjectDescriptor {
        title: "Synto",
        category: "Startup Project",
        thumbnail: "/syntopreview.png",
        description: "Synto is an AI-powered interface that turns blockchain interactions into \
            plain natural-language commands. Send tokens, stake assets, swap coins or create NFTs \
            and liquidity pools by describing what you want, without manual wallet interactions.",
        date: "2025",
        tech_stack: &[
            "Next.js",
            "TailwindCSS",
            "Web3.js",
            "shadcn-ui",
            "TypeScript",
            "Phantom Wallet",
            "OpenAI API",
            "Vercel AI SDK",
            "Solana Agent kit",
            "Neon",
            "Prisma",
        ],
        links: &[
            ProjectLink {
                name: "Website",
                url: "https://synto.fun",
            },
            ProjectLink {
                name: "Launch Video",
                url: "https://www.youtube.com/watch?v=4QUE2KgKDUw",
            },
            ProjectLink {
                name: "X",
                url: "https://x.com/chainSynto",
            },
        ],
        media: &[
            MediaItem::image("/synto1.png", "Synto landing page"),
            MediaItem::image("/synto2.png", "Synto chat interface"),
            MediaItem::image("/synto3.png", "Synto chat interface"),
        ],
    },
    ProjectDescriptor {
        title: "CyberCodex.io",
        category: "Cybersecurity Platform",
        thumbnail: "/Projects/Cybercodex.io/courses.webp",
        description: "CyberCodex.io is a cybersecurity learning platform with interactive \
            courses, hands-on labs and a community. Structured pathways take learners from \
            beginner to advanced through real-world scenarios.",
        date: "2025",
        tech_stack: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
        links: &[ProjectLink {
            name: "Website",
            url: "https://cybercodex.io",
        }],
        media: &[
            MediaItem::video("/Projects/Cybercodex.io/cyberCodex.mp4", "CyberCodex.io demo video"),
            MediaItem::image("/Projects/Cybercodex.io/homepage.webp", "CyberCodex.io homepage"),
            MediaItem::image("/Projects/Cybercodex.io/dashboard.webp", "CyberCodex.io dashboard"),
            MediaItem::image("/Projects/Cybercodex.io/courses.webp", "CyberCodex.io courses page"),
        ],
    },
    ProjectDescriptor {
        title: "First Portfolio",
        category: "Web Development",
        thumbnail: "/Projects/OldPortfolio/home.webp",
        description: "A first portfolio written from scratch in plain HTML, CSS and JavaScript \
            while learning web development, with Swiper scroll animations and an EmailJS \
            contact form.",
        date: "2023",
        tech_stack: &["HTML", "CSS", "JavaScript", "Swiper", "EmailJS", "jsDelivr"],
        links: &[
            ProjectLink {
                name: "Website",
                url: "https://toukoum.github.io/oldPortfolio/",
            },
            ProjectLink {
                name: "GitHub",
                url: "https://github.com/toukoum/portfolio",
            },
        ],
        media: &[
            MediaItem::image("/Projects/OldPortfolio/home.webp", "First Portfolio home"),
            MediaItem::image("/Projects/OldPortfolio/projects.webp", "First Portfolio projects"),
            MediaItem::image("/Projects/OldPortfolio/contact.webp", "First Portfolio contact"),
        ],
    },
    ProjectDescriptor {
        title: "Fitgear",
        category: "Hackathon Winner",
        thumbnail: "/fitgearpreview.png",
        description: "Winner of the Gotta Go Hack IA: a virtual voice seller reachable by QR \
            code, backed by an AI pipeline with a RAG system for natural language questions.",
        date: "2024",
        tech_stack: &["Next.js", "TailwindCSS", "OpenAI API", "Langchain"],
        links: &[],
        media: &[
            MediaItem::image("/fitgear2.png", "Fitgear chatbot"),
            MediaItem::image("/fitgear1.png", "Fitgear landing page"),
        ],
    },
    ProjectDescriptor {
        title: "Server Room (NPCE)",
        category: "Infrastructure & Networking",
        thumbnail: "/projects/BGCLCV/teenCenterPc.webp",
        description: "An enterprise-grade server room and esports network built from an empty \
            space: UniFi switching and cameras, a SonicWall firewall with segmented networks, \
            MXnet media distribution and low-latency esports stations.",
        date: "2024",
        tech_stack: &[
            "MXnet Video Ecosystem",
            "SonicWall",
            "Ubiquiti CloudKey",
            "Ubiquiti Cameras",
            "Ubiquiti UniFi Switches",
        ],
        links: &[],
        media: &[
            MediaItem::image("/projects/BGCLCV/teenCenterPc.webp", "Teen Center PC Setup"),
            MediaItem::image("/projects/BGCLCV/serverRoom.jpeg", "Server Room"),
            MediaItem::image("/projects/BGCLCV/esportsRoom.webp", "Esports Room"),
        ],
    },
    ProjectDescriptor {
        title: "3D Pong",
        category: "42 Project",
        thumbnail: "/transcendancepreview.png",
        description: "Transcendance, the final project of the 42 cursus: a multiplayer 3D pong \
            game with user authentication and real-time gameplay, built from scratch.",
        date: "2023",
        tech_stack: &[
            "Django",
            "Python",
            "JavaScript",
            "Websockets",
            "PostgreSQL",
            "Docker",
            "Nginx",
        ],
        links: &[ProjectLink {
            name: "GitHub",
            url: "https://github.com/toukoum/Transcendance",
        }],
        media: &[
            MediaItem::image("/trans1.png", "Transcendance landing page"),
            MediaItem::image("/trans2.webp", "Transcendance game"),
        ],
    },
    ProjectDescriptor {
        title: "Minishell",
        category: "42 Project",
        thumbnail: "/minishellpreview.png",
        description: "A small Unix shell written in C: process creation, pipes, redirections \
            and the core of command-line behaviour.",
        date: "2023",
        tech_stack: &["C", "Unix", "Bash"],
        links: &[ProjectLink {
            name: "GitHub",
            url: "https://github.com/toukoum/Michelle-42",
        }],
        media: &[MediaItem::image("/minishell1.png", "Minishell prompt")],
    },
    ProjectDescriptor {
        title: "Retro Snake",
        category: "Game Development",
        thumbnail: "/Projects/Snake/snake.webp",
        description: "One of the earliest projects: a classic Snake recreation in C++ with a \
            Bash build script, kept for sentimental value.",
        date: "2023",
        tech_stack: &["C++", "Bash"],
        links: &[],
        media: &[
            MediaItem::image("/Projects/Snake/snake.webp", "Retro Snake gameplay"),
            MediaItem::image("/Projects/Snake/menu.webp", "Retro Snake menu"),
        ],
    },
    ProjectDescriptor {
        title: "Old Portfolio",
        category: "Web Development",
        thumbnail: "/oldportfoliopreview.png",
        description: "The previous portfolio, built with vanilla HTML, CSS and JS and animated \
            with GSAP.",
        date: "2022",
        tech_stack: &["HTML", "CSS", "JavaScript", "GSAP"],
        links: &[ProjectLink {
            name: "Website",
            url: "https://toukoum.github.io/oldPortfolio/",
        }],
        media: &[
            MediaItem::image("/oldport1.png", "Old Portfolio landing page"),
            MediaItem::image("/oldport2.png", "Old Portfolio projects"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_table_is_populated() {
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(PROJECTS[0].title, "Synto");
        assert_eq!(PROJECTS[8].title, "Old Portfolio");
    }

    #[test]
    fn test_every_project_has_media_and_stack() {
        for project in PROJECTS {
            assert!(!project.tech_stack.is_empty(), "{} has no stack", project.title);
            assert!(!project.media.is_empty(), "{} has no media", project.title);
            assert!(project.thumbnail.starts_with('/'));
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&PROJECTS[6]).unwrap();
        assert!(json.contains("\"techStack\":[\"C\",\"Unix\",\"Bash\"]"));
        assert!(json.contains("\"kind\":\"image\""));
    }
}
