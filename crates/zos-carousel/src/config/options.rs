//! User-facing carousel options

use serde::{Deserialize, Serialize};

/// Resolved options, immutable after construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Slide shown initially and restored by `reset()` (1-indexed)
    pub current_slide: i32,
    /// Let a sliver of the next slide show at the viewport edge
    pub peek_out: bool,
    /// Show navigation dots
    pub navigation: bool,
    /// Animate page changes
    pub animation: bool,
    /// Wrap from the last page to the first and back
    pub cyclical: bool,
    /// Cards per page on large viewports (card-grid mode)
    pub cards_per_page: i32,
    /// Allow pointer dragging outside the small breakpoint
    pub dragging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            current_slide: 1,
            peek_out: true,
            navigation: true,
            animation: true,
            cyclical: false,
            cards_per_page: 3,
            dragging: true,
        }
    }
}

impl Options {
    /// Overlay every field that `overrides` sets
    pub fn merged(mut self, overrides: &PartialOptions) -> Self {
        if let Some(v) = overrides.current_slide {
            self.current_slide = v;
        }
        if let Some(v) = overrides.peek_out {
            self.peek_out = v;
        }
        if let Some(v) = overrides.navigation {
            self.navigation = v;
        }
        if let Some(v) = overrides.animation {
            self.animation = v;
        }
        if let Some(v) = overrides.cyclical {
            self.cyclical = v;
        }
        if let Some(v) = overrides.cards_per_page {
            self.cards_per_page = v.max(1);
        }
        if let Some(v) = overrides.dragging {
            self.dragging = v;
        }
        self
    }

    /// Resolve defaults < passed < attribute options
    pub fn resolve(passed: &PartialOptions, attributes: &PartialOptions) -> Self {
        Options::default().merged(passed).merged(attributes)
    }

    /// Number of dummy slides on each end (1 for animated cyclical carousels)
    #[inline]
    pub fn buffer(&self) -> i32 {
        if self.cyclical && self.animation {
            1
        } else {
            0
        }
    }
}

/// Options where every field may be left unset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialOptions {
    pub current_slide: Option<i32>,
    pub peek_out: Option<bool>,
    pub navigation: Option<bool>,
    pub animation: Option<bool>,
    pub cyclical: Option<bool>,
    pub cards_per_page: Option<i32>,
    pub dragging: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = Options::default();
        assert_eq!(o.current_slide, 1);
        assert!(o.peek_out);
        assert!(o.navigation);
        assert!(o.animation);
        assert!(!o.cyclical);
        assert_eq!(o.cards_per_page, 3);
        assert!(o.dragging);
    }

    #[test]
    fn test_precedence() {
        let passed = PartialOptions {
            cyclical: Some(true),
            cards_per_page: Some(4),
            ..Default::default()
        };
        let attrs = PartialOptions {
            cards_per_page: Some(2),
            ..Default::default()
        };
        let o = Options::resolve(&passed, &attrs);
        assert!(o.cyclical);
        assert_eq!(o.cards_per_page, 2);
        assert!(o.peek_out);
    }

    #[test]
    fn test_buffer() {
        let mut o = Options::default();
        assert_eq!(o.buffer(), 0);
        o.cyclical = true;
        assert_eq!(o.buffer(), 1);
        o.animation = false;
        assert_eq!(o.buffer(), 0);
    }

    #[test]
    fn test_partial_from_json() {
        let p: PartialOptions = serde_json::from_str(r#"{"peekOut":false,"currentSlide":3}"#).unwrap();
        assert_eq!(p.peek_out, Some(false));
        assert_eq!(p.current_slide, Some(3));
        assert_eq!(p.cyclical, None);
    }
}
