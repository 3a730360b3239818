//! Navigable regions of the page and the items of the floating nav bar.

pub const HOME: &str = "home";
pub const BENTO: &str = "bento";
pub const EXPERIENCE: &str = "experience";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const EDUCATION: &str = "education";

/// Page order, top to bottom.
pub const ALL: [&str; 6] = [HOME, BENTO, EXPERIENCE, PROJECTS, SKILLS, EDUCATION];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: HOME,
        label: "Home",
        icon: "extra-home",
    },
    NavItem {
        id: BENTO,
        label: "More",
        icon: "extra-grid",
    },
    NavItem {
        id: EXPERIENCE,
        label: "Experience",
        icon: "extra-briefcase",
    },
    NavItem {
        id: PROJECTS,
        label: "Projects",
        icon: "extra-folder",
    },
    NavItem {
        id: EDUCATION,
        label: "Education",
        icon: "extra-graduation",
    },
];
