//! Screen switching with a horizontal slide.

/// Seconds every slide transition takes
pub const TRANSITION_DURATION: f64 = 0.5;

/// The static registry of screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Menu,
    TextRecognition,
    HandwritingRecognition,
    Paint,
    Symbols,
    SymbolDetails,
    Register,
    Login,
}

impl ScreenId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::TextRecognition => "text_recognition_screen",
            Self::HandwritingRecognition => "handwriting_recognition_screen",
            Self::Paint => "paint_screen",
            Self::Symbols => "symbols_screen",
            Self::SymbolDetails => "symbol_details_screen",
            Self::Register => "register_screen",
            Self::Login => "login_screen",
        }
    }
}

/// Which way the screens move. `Left` pushes the old screen out to the
/// left and brings the new one in from the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    direction: SlideDirection,
    started_at: f64,
}

/// Tracks the active screen and any slide in progress
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
    transition: Option<Transition>,
    entered: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ScreenId::Menu)
    }
}

impl Navigator {
    pub fn new(initial: ScreenId) -> Self {
        Self {
            current: initial,
            transition: None,
            entered: true,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Switch to `screen`, sliding in `direction`. `now` is in seconds.
    pub fn slide_to(&mut self, screen: ScreenId, direction: SlideDirection, now: f64) {
        log::info!("Sliding {:?} from {} to {}", direction, self.current.name(), screen.name());
        self.transition = Some(Transition {
            direction,
            started_at: now,
        });
        self.current = screen;
        self.entered = true;
    }

    /// Switch to `screen` immediately
    pub fn jump_to(&mut self, screen: ScreenId) {
        log::info!("Switching from {} to {}", self.current.name(), screen.name());
        self.transition = None;
        self.current = screen;
        self.entered = true;
    }

    /// True exactly once after each switch, for "on enter" hooks
    pub fn take_entered(&mut self) -> bool {
        std::mem::take(&mut self.entered)
    }

    /// Fraction of the running transition in `0.0..1.0`, or `None` when idle
    pub fn progress(&self, now: f64) -> Option<f32> {
        let transition = self.transition?;
        let t = ((now - transition.started_at) / TRANSITION_DURATION).max(0.0);
        (t < 1.0).then_some(t as f32)
    }

    /// Horizontal offset of the incoming screen for a viewport `width` wide.
    /// Zero once the transition is over.
    pub fn offset(&self, now: f64, width: f32) -> f32 {
        match (self.progress(now), self.transition) {
            (Some(p), Some(transition)) => {
                let remaining = width * (1.0 - p);
                match transition.direction {
                    SlideDirection::Left => remaining,
                    SlideDirection::Right => -remaining,
                }
            }
            _ => 0.0,
        }
    }

    /// Drop a finished transition
    pub fn finish_if_done(&mut self, now: f64) {
        if self.transition.is_some() && self.progress(now).is_none() {
            self.transition = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_left_enters_from_right() {
        let mut nav = Navigator::default();
        nav.slide_to(ScreenId::Login, SlideDirection::Left, 10.0);

        assert_eq!(nav.current(), ScreenId::Login);
        assert!(nav.is_animating());
        assert_eq!(nav.offset(10.0, 400.0), 400.0);
        assert!((nav.offset(10.25, 400.0) - 200.0).abs() < 0.001);
        assert_eq!(nav.offset(10.5, 400.0), 0.0);
    }

    #[test]
    fn test_slide_right_enters_from_left() {
        let mut nav = Navigator::new(ScreenId::Login);
        nav.slide_to(ScreenId::Menu, SlideDirection::Right, 0.0);
        assert!(nav.offset(0.1, 100.0) < 0.0);
    }

    #[test]
    fn test_transition_finishes_after_duration() {
        let mut nav = Navigator::default();
        nav.slide_to(ScreenId::Symbols, SlideDirection::Left, 1.0);
        nav.finish_if_done(1.2);
        assert!(nav.is_animating());
        nav.finish_if_done(1.6);
        assert!(!nav.is_animating());
        assert_eq!(nav.progress(1.6), None);
    }

    #[test]
    fn test_entered_reported_once() {
        let mut nav = Navigator::default();
        assert!(nav.take_entered());
        assert!(!nav.take_entered());

        nav.jump_to(ScreenId::SymbolDetails);
        assert!(nav.take_entered());
        assert!(!nav.take_entered());
        assert!(!nav.is_animating());
    }
}
