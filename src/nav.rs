use thiserror::Error;

/// Scroll offset (px) above which the navigation bar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// The in-page sections that navigation links can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id rendered on the section, and the fragment that targets it.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "sobre-mi",
            Section::Projects => "proyectos",
            Section::Skills => "habilidades",
            Section::Contact => "contacto",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(Section),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("not an in-page link: {0}")]
    NotFragment(String),
    #[error("no section with id: {0}")]
    UnknownSection(String),
}

impl TryFrom<&str> for ScrollTarget {
    type Error = NavError;

    fn try_from(href: &str) -> Result<Self, Self::Error> {
        let id = href
            .strip_prefix('#')
            .ok_or_else(|| NavError::NotFragment(href.to_string()))?;
        if id.is_empty() {
            return Ok(Self::Top);
        }
        Section::from_id(id)
            .map(Self::Section)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_resolves_to_matching_section() {
        let target = ScrollTarget::try_from("#contacto").expect("contacto is a section");
        assert_eq!(target, ScrollTarget::Section(Section::Contact));
        if let ScrollTarget::Section(s) = target {
            assert_eq!(s.id(), "contacto");
        }

        assert_eq!(
            ScrollTarget::try_from("#sobre-mi"),
            Ok(ScrollTarget::Section(Section::About))
        );
        assert_eq!(
            ScrollTarget::try_from("#habilidades"),
            Ok(ScrollTarget::Section(Section::Skills))
        );
    }

    #[test]
    fn test_bare_hash_scrolls_to_top() {
        assert_eq!(ScrollTarget::try_from("#"), Ok(ScrollTarget::Top));
    }

    #[test]
    fn test_invalid_hrefs() {
        assert_eq!(
            ScrollTarget::try_from("/blog"),
            Err(NavError::NotFragment("/blog".to_string()))
        );
        assert_eq!(
            ScrollTarget::try_from("#missing"),
            Err(NavError::UnknownSection("missing".to_string()))
        );
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(400.0));
    }
}
