pub const RESUME_HREF: &str = "/cv.pdf";
pub const EMAIL: &str = "dharanish@example.com";
pub const PHONE: &str = "+91 98765 43210";
pub const PHONE_HREF: &str = "tel:+919876543210";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    /// Declared page order. The active-section scan walks this list front to back.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Projects,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Numbered eyebrow shown above each content section; the hero has none.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::About => Some("01 — ABOUT"),
            Self::Services => Some("02 — SERVICES"),
            Self::Projects => Some("03 — PROJECTS"),
            Self::Contact => Some("04 — CONTACT"),
        }
    }
}

pub struct PersonalInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
}

pub const PERSONAL: PersonalInfo = PersonalInfo {
    name: "A. DHARANISH",
    short_name: "Dharanish",
    title: "COMPUTER SCIENCE ENGINEERING STUDENT",
    role: "FULL STACK DEVELOPER",
    summary: "Computer Science Engineering student with hands-on experience in full stack web development. Skilled in designing and developing responsive user interfaces and building backend services with secure APIs and database integration. Passionate about learning new technologies, problem-solving, and developing real-world applications.",
};

impl PersonalInfo {
    /// First letter of each word in the name, e.g. `A. DHARANISH` -> `AD`.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|letter| letter.is_alphabetic()))
            .collect()
    }

    /// The role split for the two-line hero heading; the last word goes on
    /// its own line.
    pub fn role_lines(&self) -> (&'static str, &'static str) {
        self.role.rsplit_once(' ').unwrap_or((self.role, ""))
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "4+", label: "Projects" },
    Stat { value: "5+", label: "Certifications" },
    Stat { value: "2026", label: "Graduation" },
];

pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillCategory; 5] = [
    SkillCategory {
        name: "Languages",
        items: &["HTML", "CSS", "JavaScript", "Python"],
    },
    SkillCategory {
        name: "Frameworks",
        items: &["React.js", "Node.js", "Express.js"],
    },
    SkillCategory {
        name: "Databases",
        items: &["MongoDB", "MySQL"],
    },
    SkillCategory {
        name: "Tools",
        items: &["Git", "GitHub", "VS Code", "Figma", "Power BI", "Tableau", "Excel"],
    },
    SkillCategory {
        name: "RPA",
        items: &["UiPath Studio"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub score: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "B.E. Computer Science",
        institution: "Suguna College of Engineering, Coimbatore, Tamil Nadu",
        duration: "2022 - 2026",
        score: "CGPA: 8.0/10.0",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "Rasi Matriculation Higher Secondary School, Coimbatore",
        duration: "2021 - 2022",
        score: "Percentage: 72%",
    },
];

pub const CERTIFICATIONS: [&str; 5] = [
    "Python Web Development - ICT Academy (by Infosys)",
    "Full Stack Development - NOVITECH",
    "Full Stack Java Development - Simplilearn",
    "MERN Stack Development - Naan Mudhalvan",
    "Digital Productivity with AI - CSC Academy & UNICEF (95%)",
];

pub struct Project {
    pub title: &'static str,
    pub role: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub points: &'static [&'static str],
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Paysprint Web Page",
        role: Some("Backend Developer"),
        tech: &["Node.js", "Express.js", "MongoDB"],
        points: &[
            "Engineered secure and modular REST APIs for authentication, user validation, and service processing",
            "Developed optimized MongoDB operations and integrated multiple third-party services for real-time dynamic content",
        ],
        icon: "⚡",
        accent: "#667eea",
    },
    Project {
        title: "E-Commerce Website",
        role: None,
        tech: &["React.js", "Node.js", "Express.js", "MongoDB"],
        points: &[
            "Implemented product management, cart functions, authentication, and checkout workflows with proper validation",
            "Built responsive React UI integrated with backend APIs for seamless online shopping experience",
        ],
        icon: "🛍️",
        accent: "#f093fb",
    },
    Project {
        title: "Smart Farming Recommendation System",
        role: None,
        tech: &["HTML", "CSS", "JavaScript", "Python (ML)"],
        points: &[
            "Implemented ML models using Soil Health Card (SHC), Leaf Colour Chart (LCC), and weather datasets",
            "Developed interactive web interface for real-time AI-driven crop recommendations",
        ],
        icon: "🌱",
        accent: "#4facfe",
    },
    Project {
        title: "AI Content Generator",
        role: None,
        tech: &["React.js", "Python", "OpenAI API", "FastAPI"],
        points: &[
            "Built AI-powered content generation tool with multiple templates",
            "Implemented real-time streaming responses and user authentication",
        ],
        icon: "🤖",
        accent: "#ff6b6b",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

// Placeholders until the real profiles are public.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
];

pub const FOOTER_LINKS: [&str; 3] = ["Privacy", "Terms", "Cookies"];

pub fn mailto_href() -> String {
    format!("mailto:{EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_anchor_hrefs_match() {
        let mut ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());

        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn only_the_hero_has_no_section_tag() {
        let untagged: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|section| section.tag().is_none())
            .collect();
        assert_eq!(untagged, vec![Section::Home]);
    }

    #[test]
    fn monogram_and_role_lines_derive_from_personal_info() {
        assert_eq!(PERSONAL.monogram(), "AD");
        assert_eq!(PERSONAL.role_lines(), ("FULL STACK", "DEVELOPER"));

        let single_word = PersonalInfo {
            role: "ENGINEER",
            ..PERSONAL
        };
        assert_eq!(single_word.role_lines(), ("ENGINEER", ""));
    }

    #[test]
    fn resume_is_shipped_by_the_trunk_build() {
        let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let file_name = RESUME_HREF.trim_start_matches('/');

        assert!(manifest_dir.join("public").join(file_name).is_file());

        let index = std::fs::read_to_string(manifest_dir.join("index.html")).expect("index.html readable");
        let directive = format!("rel=\"copy-file\" href=\"public/{file_name}\"");
        assert!(index.contains(&directive), "index.html must copy {file_name} into dist/");
    }

    #[test]
    fn hero_project_count_matches_showcase() {
        assert!(HERO_STATS[0].value.starts_with(&PROJECTS.len().to_string()));
        assert!(PROJECTS.iter().all(|project| !project.tech.is_empty() && !project.points.is_empty()));
    }
}
