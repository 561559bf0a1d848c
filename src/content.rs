use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::nav::ScrollTarget;

static GLOBAL_CONTENT: LazyLock<Result<Content, ContentError>> = LazyLock::new(Content::load);

/// Number of technologies a project card shows before collapsing the rest into `+N`.
pub const CARD_TECH_PREVIEW: usize = 3;

/// Files the page links from the site root, served out of `public/`.
pub const FAVICON: &str = "/favicon.svg";
pub const HERO_BACKGROUND: &str = "/hero-bg.svg";
pub const HERO_KNIGHT: &str = "/knight-hero.svg";
pub const STATIC_ASSETS: [&str; 3] = [FAVICON, HERO_BACKGROUND, HERO_KNIGHT];

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
    #[error("skill {name} has proficiency {level}, expected 0-100")]
    InvalidLevel { name: String, level: u8 },
    #[error("career progress {0} is outside 0-100")]
    InvalidProgress(u8),
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
    #[error("nav link {label} has invalid target {href}")]
    InvalidNavTarget { label: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub icon: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Tailwind gradient stops used for the project's accent.
    pub color: String,
}

impl Project {
    pub fn preview_technologies(&self) -> &[String] {
        let end = self.technologies.len().min(CARD_TECH_PREVIEW);
        &self.technologies[..end]
    }

    /// Count shown in the card's `+N` badge, if any technologies are hidden.
    pub fn hidden_technologies(&self) -> Option<usize> {
        self.technologies
            .len()
            .checked_sub(CARD_TECH_PREVIEW)
            .filter(|n| *n > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroText {
    pub title_accent: String,
    pub title: String,
    pub subtitle: String,
    pub subtitle_accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutText {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub role: String,
    pub school: String,
    pub career_progress: u8,
    pub speciality: String,
    pub focus: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterText {
    pub tagline: String,
    pub motto: String,
    pub copyright: String,
    pub easter_egg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub initials: String,
    pub brand: String,
    pub github_profile: String,
    pub hero: HeroText,
    pub about: AboutText,
    pub nav: Vec<NavLink>,
    pub hero_socials: Vec<SocialLink>,
    pub contact_socials: Vec<SocialLink>,
    pub footer_socials: Vec<SocialLink>,
    pub contact_info: Vec<ContactInfo>,
    pub contact_quote: String,
    pub skill_stats: Vec<Stat>,
    pub footer: FooterText,
}

/// Everything the page renders, loaded once from the embedded `content/` folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub site: Site,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

fn parse_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: parse_file("site.json")?,
            projects: parse_file("projects.json")?,
            skills: parse_file("skills.json")?,
        };
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(s) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::InvalidLevel {
                name: s.name.clone(),
                level: s.level,
            });
        }
        if self.site.about.career_progress > 100 {
            return Err(ContentError::InvalidProgress(self.site.about.career_progress));
        }
        let mut ids = HashSet::new();
        if let Some(p) = self.projects.iter().find(|p| !ids.insert(p.id)) {
            return Err(ContentError::DuplicateProject(p.id));
        }
        if let Some(link) = self
            .site
            .nav
            .iter()
            .find(|l| ScrollTarget::try_from(l.href.as_str()).is_err())
        {
            return Err(ContentError::InvalidNavTarget {
                label: link.label.clone(),
                href: link.href.clone(),
            });
        }
        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// The page content, parsed on first access.
pub fn content() -> Result<&'static Content, &'static ContentError> {
    GLOBAL_CONTENT.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> &'static Content {
        content().expect("embedded content should load")
    }

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            icon: "extra-code".to_string(),
            category: "Tools".to_string(),
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = loaded();
        assert_eq!(content.skills.len(), 19);
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.site.nav.len(), 5);
        assert_eq!(content.site.nav[0].href, "#");
        assert!(content.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_optional_project_links() {
        let content = loaded();
        let first = content.project(1).expect("project 1 exists");
        assert!(first.github_url.is_some());
        assert_eq!(first.demo_url.as_deref(), Some("https://demo.com"));

        let second = content.project(2).expect("project 2 exists");
        assert!(second.github_url.is_some());
        assert!(second.demo_url.is_none());

        assert!(content.project(42).is_none());
    }

    #[test]
    fn test_card_preview_truncates_technologies() {
        let project = loaded().project(1).expect("project 1 exists");
        assert_eq!(project.technologies.len(), 5);
        assert_eq!(
            project.preview_technologies(),
            &["React", "Node.js", "PostgreSQL"]
        );
        assert_eq!(project.hidden_technologies(), Some(2));
    }

    #[test]
    fn test_short_technology_list_has_no_overflow_badge() {
        let mut project = loaded().project(2).expect("project 2 exists").clone();
        project.technologies.truncate(3);
        assert_eq!(project.preview_technologies().len(), 3);
        assert_eq!(project.hidden_technologies(), None);

        project.technologies.truncate(1);
        assert_eq!(project.preview_technologies(), &["Node.js"]);
        assert_eq!(project.hidden_technologies(), None);
    }

    #[test]
    fn test_validation_rejects_bad_level() {
        let mut content = loaded().clone();
        content.skills.push(skill("Overclocked", 101));
        assert_eq!(
            content.validate(),
            Err(ContentError::InvalidLevel {
                name: "Overclocked".to_string(),
                level: 101
            })
        );

        let mut content = loaded().clone();
        content.skills.push(skill("Boundary", 100));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_duplicate_project() {
        let mut content = loaded().clone();
        let dup = content.projects[0].clone();
        content.projects.push(dup);
        assert_eq!(content.validate(), Err(ContentError::DuplicateProject(1)));
    }

    #[test]
    fn test_validation_rejects_unknown_nav_target() {
        let mut content = loaded().clone();
        content.site.nav.push(NavLink {
            label: "Blog".to_string(),
            href: "#blog".to_string(),
        });
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidNavTarget { .. })
        ));
    }

    #[test]
    fn test_linked_assets_ship_in_public() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in STATIC_ASSETS {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "{} is linked but missing", path.display());
        }
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            parse_file::<Site>("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }
}
