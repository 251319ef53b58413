//! Arrow-key paging

use crate::structure::Direction;

/// Keys the carousel reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Parse a `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Element that had focus when the key was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTarget {
    /// A navigation dot
    Dot,
    /// A slide (rendered item)
    Slide,
    Other,
}

/// What a key press does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextPage,
    PreviousPage,
    /// Move the current slide by this many slides
    StepSlide(i32),
}

impl KeyAction {
    /// Resolve a key press; arrows mirror under RTL
    pub fn resolve(key: Key, target: KeyTarget, direction: Direction) -> Option<Self> {
        let forward = match key {
            Key::ArrowRight => !direction.is_rtl(),
            Key::ArrowLeft => direction.is_rtl(),
            Key::Other => return None,
        };
        match target {
            KeyTarget::Dot if forward => Some(KeyAction::NextPage),
            KeyTarget::Dot => Some(KeyAction::PreviousPage),
            KeyTarget::Slide => Some(KeyAction::StepSlide(if forward { 1 } else { -1 })),
            KeyTarget::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_code("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_code("KeyA"), Key::Other);
    }

    #[test]
    fn test_dot_paging() {
        assert_eq!(
            KeyAction::resolve(Key::ArrowRight, KeyTarget::Dot, Direction::Ltr),
            Some(KeyAction::NextPage)
        );
        assert_eq!(
            KeyAction::resolve(Key::ArrowLeft, KeyTarget::Dot, Direction::Ltr),
            Some(KeyAction::PreviousPage)
        );
        assert_eq!(
            KeyAction::resolve(Key::ArrowLeft, KeyTarget::Dot, Direction::Rtl),
            Some(KeyAction::NextPage)
        );
    }

    #[test]
    fn test_slide_stepping() {
        assert_eq!(
            KeyAction::resolve(Key::ArrowRight, KeyTarget::Slide, Direction::Ltr),
            Some(KeyAction::StepSlide(1))
        );
        assert_eq!(
            KeyAction::resolve(Key::ArrowRight, KeyTarget::Slide, Direction::Rtl),
            Some(KeyAction::StepSlide(-1))
        );
    }

    #[test]
    fn test_ignored() {
        assert_eq!(KeyAction::resolve(Key::Other, KeyTarget::Dot, Direction::Ltr), None);
        assert_eq!(KeyAction::resolve(Key::ArrowLeft, KeyTarget::Other, Direction::Ltr), None);
    }
}
