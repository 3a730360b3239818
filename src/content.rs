use std::{collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("content file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("couldn't parse {name}: {reason}")]
    Parse { name: String, reason: String },
    #[error("invalid content in {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Reads and deserializes one embedded JSON file.
pub fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let text = std::str::from_utf8(&file.data).map_err(|_| ContentError::Encoding(name.to_string()))?;
    serde_json::from_str(text).map_err(|e| ContentError::Parse {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
    #[serde(default)]
    pub download: bool,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub status: String,
    pub name: String,
    pub tagline: String,
    pub summary: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub label: String,
    pub map_embed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Featured {
    pub badge: String,
    pub title: String,
    pub body: String,
    pub href: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: u32,
    pub unit: String,
    pub meta: Vec<String>,
}

/// The highlight grid under the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bento {
    pub title: String,
    pub subtitle: String,
    pub location: Location,
    pub featured: Featured,
    pub stat: Stat,
    pub stack: Vec<TagGroup>,
    pub toolbox: Vec<TagGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkKind {
    Internship,
    Freelance,
}

impl WorkKind {
    pub fn label(self) -> &'static str {
        match self {
            WorkKind::Internship => "Internship",
            WorkKind::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub company: String,
    pub role: String,
    pub kind: WorkKind,
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course: String,
    pub year: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub personal: Vec<Project>,
    pub academic: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    pub bento: Bento,
    pub experience: Vec<WorkItem>,
    pub projects: Projects,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationItem>,
}

fn unique_ids<'a>(name: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(ContentError::Invalid {
                name: name.to_string(),
                reason: "empty id".to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(ContentError::Invalid {
                name: name.to_string(),
                reason: format!("duplicate id {id}"),
            });
        }
    }
    Ok(())
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let portfolio = Self {
            hero: load("hero.json")?,
            bento: load("bento.json")?,
            experience: load("experience.json")?,
            projects: load("projects.json")?,
            skills: load("skills.json")?,
            education: load("education.json")?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.name.trim().is_empty() {
            return Err(ContentError::Invalid {
                name: "hero.json".to_string(),
                reason: "name is empty".to_string(),
            });
        }
        unique_ids("experience.json", self.experience.iter().map(|w| w.id.as_str()))?;
        unique_ids(
            "projects.json",
            self.projects.personal.iter().map(|p| p.id.as_str()),
        )?;
        unique_ids(
            "projects.json",
            self.projects.academic.iter().map(|p| p.id.as_str()),
        )?;
        unique_ids("skills.json", self.skills.iter().map(|s| s.id.as_str()))?;
        unique_ids("education.json", self.education.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }
}

/// The embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    (*PORTFOLIO).as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let p = portfolio().expect("embedded content should be valid");
        assert!(!p.hero.socials.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.projects.personal.is_empty());
        assert!(!p.projects.academic.is_empty());
        assert_eq!(p.skills.len(), 4);
        assert_eq!(p.education.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let res = load::<Hero>("nope.json");
        assert_eq!(res, Err(ContentError::NotFound("nope.json".to_string())));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        // skills.json is a list, not a hero
        match load::<Hero>("skills.json") {
            Err(ContentError::Parse { name, .. }) => assert_eq!(name, "skills.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut p = Portfolio::load().unwrap();
        let dup = p.education[0].clone();
        p.education.push(dup);
        match p.validate() {
            Err(ContentError::Invalid { name, reason }) => {
                assert_eq!(name, "education.json");
                assert!(reason.contains("duplicate id"));
            }
            other => panic!("expected invalid content, got {other:?}"),
        }
    }

    #[test]
    fn test_project_groups_may_share_ids() {
        let p = Portfolio::load().unwrap();
        assert_eq!(p.projects.personal[0].id, p.projects.academic[0].id);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_social_links() {
        let p = portfolio().unwrap();
        let resume = p
            .hero
            .socials
            .iter()
            .find(|s| s.label == "Resume")
            .expect("resume link");
        assert!(resume.download);
        assert!(!resume.is_external());
        assert!(p
            .hero
            .socials
            .iter()
            .any(|s| s.label == "GitHub" && s.is_external()));
    }
}
