//! Host-provided description of a carousel root
//!
//! The engine never touches the document. The host queries the root once
//! and hands over what it found; construction validates it here.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Element};

/// Reading direction of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Parse the document `dir` attribute; anything but `rtl` is LTR
    pub fn from_dir_attr(dir: &str) -> Self {
        if dir.eq_ignore_ascii_case("rtl") {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Check for right-to-left
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// What the host found under the carousel root
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Structure {
    /// Id of the root element (controlled by the prev/next buttons)
    pub root_id: String,
    pub has_viewport: bool,
    pub has_list: bool,
    pub has_prev_button: bool,
    pub has_next_button: bool,
    pub has_navigation: bool,
    /// Ids of the real slides, in document order
    pub slide_ids: Vec<String>,
    /// Root carries the card-grid modifier
    pub is_cards: bool,
    pub direction: Direction,
    /// Label template for non-tab navigation dots
    pub navigation_label: Option<String>,
}

impl Structure {
    /// Fail on the first missing required element
    pub fn validate(&self) -> Result<(), CarouselError> {
        let checks = [
            (self.has_viewport, Element::Viewport),
            (self.has_list, Element::List),
            (!self.slide_ids.is_empty(), Element::Slides),
            (self.has_prev_button, Element::PrevButton),
            (self.has_next_button, Element::NextButton),
            (self.has_navigation, Element::Navigation),
        ];
        match checks.iter().find(|(present, _)| !present) {
            Some((_, element)) => Err(CarouselError::MissingElement(*element)),
            None => Ok(()),
        }
    }

    /// Number of real slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_ids.len()
    }

    /// A complete structure with `count` slides named `slide-1..=count`
    pub fn with_slides(count: usize) -> Self {
        Self {
            root_id: "carousel".to_string(),
            has_viewport: true,
            has_list: true,
            has_prev_button: true,
            has_next_button: true,
            has_navigation: true,
            slide_ids: (1..=count).map(|i| format!("slide-{}", i)).collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_structure_validates() {
        assert!(Structure::with_slides(3).validate().is_ok());
    }

    #[test]
    fn test_missing_elements_reported_in_order() {
        let mut s = Structure::with_slides(3);
        s.has_next_button = false;
        s.has_navigation = false;
        assert_eq!(
            s.validate(),
            Err(CarouselError::MissingElement(Element::NextButton))
        );

        let s = Structure::with_slides(0);
        assert_eq!(s.validate(), Err(CarouselError::MissingElement(Element::Slides)));
    }

    #[test]
    fn test_direction_from_attr() {
        assert!(Direction::from_dir_attr("RTL").is_rtl());
        assert!(!Direction::from_dir_attr("ltr").is_rtl());
        assert!(!Direction::from_dir_attr("").is_rtl());
    }

    #[test]
    fn test_structure_from_json() {
        let json = r#"{"rootId":"c1","hasViewport":true,"hasList":true,
            "hasPrevButton":true,"hasNextButton":true,"hasNavigation":true,
            "slideIds":["a","b"],"isCards":true,"direction":"rtl"}"#;
        let s: Structure = serde_json::from_str(json).unwrap();
        assert!(s.validate().is_ok());
        assert_eq!(s.slide_count(), 2);
        assert!(s.is_cards);
        assert!(s.direction.is_rtl());
        assert!(s.navigation_label.is_none());
    }
}
