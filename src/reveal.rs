/// Intersection ratio at which the About section reveals.
pub const ABOUT_THRESHOLD: f64 = 0.2;
/// Intersection ratio used by every other section.
pub const SECTION_THRESHOLD: f64 = 0.1;

/// One-shot visibility latch: hidden until the first intersection, visible forever after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    /// Feed an intersection observation. Returns `true` only on the hidden → visible transition.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Direction a block travels while fading in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Up,
    UpFar,
    FromLeft,
    FromRight,
}

impl Slide {
    fn hidden(self) -> &'static str {
        match self {
            Slide::Up => "opacity-0 translate-y-8",
            Slide::UpFar => "opacity-0 translate-y-12",
            Slide::FromLeft => "opacity-0 -translate-x-12",
            Slide::FromRight => "opacity-0 translate-x-12",
        }
    }

    fn shown(self) -> &'static str {
        match self {
            Slide::Up | Slide::UpFar => "opacity-100 translate-y-0",
            Slide::FromLeft | Slide::FromRight => "opacity-100 translate-x-0",
        }
    }

    pub fn class(self, visible: bool) -> &'static str {
        if visible {
            self.shown()
        } else {
            self.hidden()
        }
    }
}

/// Full class list for a revealed block: base classes, then the slide state.
pub fn reveal_class(base: &str, slide: Slide, visible: bool) -> String {
    format!("{base} {}", slide.class(visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_exactly_once() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());

        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        assert!(state.observe(true));
        assert!(state.is_revealed());

        // repeated scrolling in and out never flips it back or fires again
        for intersecting in [false, true, false, false, true] {
            assert!(!state.observe(intersecting));
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn test_fallback_starts_revealed() {
        let mut state = RevealState::revealed();
        assert!(state.is_revealed());
        assert!(!state.observe(true));
    }

    #[test]
    fn test_slide_classes() {
        assert_eq!(Slide::Up.class(false), "opacity-0 translate-y-8");
        assert_eq!(Slide::FromLeft.class(false), "opacity-0 -translate-x-12");
        assert_eq!(Slide::FromRight.class(true), "opacity-100 translate-x-0");
        assert_eq!(
            reveal_class("transition-all duration-1000", Slide::UpFar, true),
            "transition-all duration-1000 opacity-100 translate-y-0"
        );
    }
}
