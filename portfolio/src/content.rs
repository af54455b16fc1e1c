//! Projects, timeline entries, skills and contact links shown on the page.

use portfolio_config::Locale;

/// A string with an English and an Indonesian version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub id: &'static str,
}

impl Localized {
    /// A string that reads the same in both languages.
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, id: text }
    }

    pub fn get(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Id => self.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: Localized,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

/// One step in the education and work timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
}

/// A tab of the skills switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Database,
    Deploy,
    Other,
}

impl SkillCategory {
    /// Every category, in tab order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Deploy,
        SkillCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Deploy => "Deploy",
            SkillCategory::Other => "Other",
        }
    }

    pub fn technologies(self) -> &'static [Technology] {
        match self {
            SkillCategory::Frontend => &[
                Technology {
                    name: "Next.js",
                    logo: "/icons/nextjs.svg",
                },
                Technology {
                    name: "React",
                    logo: "/icons/react.svg",
                },
                Technology {
                    name: "Static Sites",
                    logo: "/icons/html.svg",
                },
                Technology {
                    name: "Flutter",
                    logo: "/icons/flutter.svg",
                },
            ],
            SkillCategory::Backend => &[
                Technology {
                    name: "Next.js",
                    logo: "/icons/nextjs.svg",
                },
                Technology {
                    name: "Bun JS",
                    logo: "/icons/bun.svg",
                },
                Technology {
                    name: "Express.js",
                    logo: "/icons/express.svg",
                },
            ],
            SkillCategory::Database => &[
                Technology {
                    name: "MySQL",
                    logo: "/icons/mysql.svg",
                },
                Technology {
                    name: "PostgreSQL",
                    logo: "/icons/postgresql.svg",
                },
                Technology {
                    name: "MongoDB",
                    logo: "/icons/mongodb.svg",
                },
            ],
            SkillCategory::Deploy => &[
                Technology {
                    name: "Netlify",
                    logo: "/icons/Netlify.svg",
                },
                Technology {
                    name: "Railway",
                    logo: "/icons/railway.svg",
                },
                Technology {
                    name: "Vercel",
                    logo: "/icons/Vercel.svg",
                },
            ],
            SkillCategory::Other => &[
                Technology {
                    name: "Unity",
                    logo: "/icons/unity.svg",
                },
                Technology {
                    name: "Figma",
                    logo: "/icons/figma.svg",
                },
            ],
        }
    }
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Pemiyos",
        description: Localized {
            en: "Most contribution - Full-featured collaborative project \
                 showcasing comprehensive web development skills",
            id: "Most contribution - Proyek kolaboratif penuh fitur yang \
                 menampilkan keahlian web development komprehensif",
        },
        tags: &["Web", "Featured"],
        link: "https://pemiyos.netlify.app/",
    },
    Project {
        title: "Saga Advisor",
        description: Localized {
            en: "Prototype website - Professional web application built with \
                 modern technologies",
            id: "Website Prototipe - Aplikasi web profesional dibangun dengan \
                 teknologi modern",
        },
        tags: &["Next.js", "Vercel"],
        link: "https://saga-advisor.vercel.app/",
    },
    Project {
        title: "LKS 2025",
        description: Localized {
            en: "Game like Bomb It - Interactive browser game created with \
                 HTML, CSS, and JavaScript",
            id: "Game seperti Bomb It - Game browser interaktif dibuat dengan \
                 HTML, CSS, dan JavaScript",
        },
        tags: &["Game", "HTML/CSS/JS"],
        link: "https://lks-2025-warid.vercel.app/",
    },
    Project {
        title: "Chailly Bot",
        description: Localized {
            en: "Interactive AI assistant bot application with advanced \
                 features and conversational abilities",
            id: "Aplikasi bot AI asistan interaktif dengan fitur canggih dan \
                 kemampuan percakapan",
        },
        tags: &["Bot", "Next.js"],
        link: "https://chaillubot.vercel.app/",
    },
    Project {
        title: "Crossy Road Three.js",
        description: Localized {
            en: "3D game recreation using Three.js and Next.js - Demonstrates \
                 3D graphics and game mechanics",
            id: "Rekreasi game 3D menggunakan Three.js dan Next.js - \
                 Mendemonstrasikan grafis 3D dan mekanik game",
        },
        tags: &["3D", "Game", "Three.js"],
        link: "https://crossy-road-threejs-next.vercel.app/",
    },
    Project {
        title: "Latihan LKS",
        description: Localized {
            en: "Training project for competition preparation with full-stack \
                 implementation",
            id: "Proyek latihan untuk persiapan kompetisi dengan implementasi \
                 full-stack",
        },
        tags: &["Training", "Next.js"],
        link: "https://latihan-lks.vercel.app/",
    },
];

pub static TIMELINE: [Milestone; 4] = [
    Milestone {
        year: 2019,
        title: Localized::same("SMPN 1 Kota Magelang"),
        description: Localized {
            en: "Junior High School",
            id: "Sekolah Menengah Pertama",
        },
    },
    Milestone {
        year: 2022,
        title: Localized::same("SMKN 2 Kota Magelang"),
        description: Localized {
            en: "Vocational High School - PPLG (Software Development)",
            id: "Sekolah Menengah Kejuruan - PPLG (Pengembangan Perangkat \
                 Lunak)",
        },
    },
    Milestone {
        year: 2023,
        title: Localized::same("Magang di PT Teknoreka Inovasi"),
        description: Localized {
            en: "Internship - Applied web development skills in professional \
                 environment",
            id: "Magang - Menerapkan skill web development di lingkungan \
                 profesional",
        },
    },
    Milestone {
        year: 2025,
        title: Localized::same("Bekerja di Reka Solusi Teknologi"),
        description: Localized {
            en: "Full-time Developer - Building digital solutions",
            id: "Developer Full-time - Membangun solusi digital",
        },
    },
];

pub static CONTACT_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com/Warid27",
        icon: "fab fa-github",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/sinatrya_al_warid/",
        icon: "fab fa-instagram",
    },
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/Sinatrya?locale=id_ID",
        icon: "fab fa-facebook",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_picks_the_locale() {
        let text = Localized {
            en: "Junior High School",
            id: "Sekolah Menengah Pertama",
        };
        assert_eq!(text.get(Locale::En), "Junior High School");
        assert_eq!(text.get(Locale::Id), "Sekolah Menengah Pertama");
        assert_eq!(Localized::same("x").get(Locale::Id), "x");
    }

    #[test]
    fn every_skill_category_has_technologies() {
        for category in SkillCategory::ALL {
            assert!(
                !category.technologies().is_empty(),
                "{} is empty",
                category.label()
            );
        }
        assert_eq!(SkillCategory::default(), SkillCategory::Frontend);
    }

    #[test]
    fn categories_list_their_own_technologies() {
        let names = |category: SkillCategory| {
            category
                .technologies()
                .iter()
                .map(|tech| tech.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            names(SkillCategory::Database),
            ["MySQL", "PostgreSQL", "MongoDB"]
        );
        assert_eq!(names(SkillCategory::Other), ["Unity", "Figma"]);
        assert!(SkillCategory::Frontend
            .technologies()
            .iter()
            .all(|tech| tech.logo.starts_with("/icons/")));
    }

    #[test]
    fn timeline_is_in_year_order() {
        assert!(TIMELINE.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn external_links_use_https() {
        let links = PROJECTS
            .iter()
            .map(|p| p.link)
            .chain(CONTACT_LINKS.iter().map(|l| l.href));
        for link in links {
            assert!(link.starts_with("https://"), "{link}");
        }
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
