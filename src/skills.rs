use std::collections::HashSet;
use std::time::Duration;

use crate::content::Skill;

/// The identity category: selecting it shows every skill.
pub const ALL_CATEGORY: &str = "Todos";

const BAR_STAGGER_MS: u64 = 100;
const CARD_STAGGER_MS: u64 = 50;

/// `Todos` followed by each distinct category in the order it first appears.
pub fn categories(skills: &[Skill]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORY.to_string())
        .chain(
            skills
                .iter()
                .filter(|s| seen.insert(s.category.as_str()))
                .map(|s| s.category.clone()),
        )
        .collect()
}

/// Skills whose category matches exactly, in source order.
pub fn filter_skills<'a>(skills: &'a [Skill], category: &str) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| category == ALL_CATEGORY || s.category == category)
        .collect()
}

pub fn bar_delay(index: usize) -> Duration {
    Duration::from_millis(BAR_STAGGER_MS * index as u64)
}

pub fn card_delay_ms(index: usize) -> u64 {
    CARD_STAGGER_MS * index as u64
}

/// Which proficiency bars have filled for the current category selection.
///
/// Every selection change starts a new generation; fills scheduled under an
/// older generation are dropped when they arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarAnimation {
    generation: u32,
    filled: HashSet<String>,
}

impl BarAnimation {
    pub fn restart(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.filled.clear();
        self.generation
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn fill(&mut self, generation: u32, name: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.filled.insert(name.to_string())
    }

    pub fn is_filled(&self, name: &str) -> bool {
        self.filled.contains(name)
    }

    /// Bar width as a CSS percentage: the skill's level once filled, 0 before.
    pub fn width(&self, skill: &Skill) -> String {
        let pct = if self.is_filled(&skill.name) {
            skill.level
        } else {
            0
        };
        format!("{pct}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;

    fn skills() -> &'static [Skill] {
        &content().expect("embedded content should load").skills
    }

    #[test]
    fn test_all_category_is_identity() {
        let all = filter_skills(skills(), ALL_CATEGORY);
        assert_eq!(all.len(), 19);
        assert!(all.iter().zip(skills()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_frontend_filter() {
        let frontend = filter_skills(skills(), "Frontend");
        let names = frontend.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["React", "TypeScript", "JavaScript", "Tailwind CSS", "HTML/CSS"]
        );
    }

    #[test]
    fn test_filter_is_exact_match() {
        assert!(filter_skills(skills(), "frontend").is_empty());
        assert!(filter_skills(skills(), "Front").is_empty());
        assert_eq!(filter_skills(skills(), "Mobile").len(), 1);
        assert_eq!(filter_skills(skills(), "Database").len(), 4);
    }

    #[test]
    fn test_categories_in_source_order() {
        assert_eq!(
            categories(skills()),
            vec!["Todos", "Frontend", "Backend", "Database", "Mobile", "Tools"]
        );
        assert_eq!(categories(&[]), vec!["Todos"]);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(bar_delay(0), Duration::ZERO);
        assert_eq!(bar_delay(4), Duration::from_millis(400));
        assert_eq!(card_delay_ms(3), 150);
    }

    #[test]
    fn test_stale_fills_are_dropped() {
        let react = &skills()[0];
        let mut bars = BarAnimation::default();
        let first = bars.restart();
        assert!(bars.fill(first, &react.name));
        assert_eq!(bars.width(react), "90%");

        // switching category clears bars and invalidates pending fills
        let second = bars.restart();
        assert_ne!(first, second);
        assert_eq!(bars.width(react), "0%");
        assert!(!bars.fill(first, &react.name));
        assert!(!bars.is_filled(&react.name));

        assert!(bars.fill(second, &react.name));
        assert!(!bars.fill(second, &react.name));
        assert_eq!(bars.width(react), "90%");
    }
}
