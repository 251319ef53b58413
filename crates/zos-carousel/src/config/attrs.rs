//! Options encoded as data attributes on the carousel root
//!
//! Keys follow the `dataset` camelCase form: `data-carousel-peek-out`
//! arrives as `carouselPeekOut`.

use std::collections::HashMap;

use super::PartialOptions;

const PREFIX: &str = "carousel";

/// Dataset key for an option name (`peekOut` -> `carouselPeekOut`)
pub fn attribute_key(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", PREFIX, first.to_ascii_uppercase(), chars.as_str()),
        None => PREFIX.to_string(),
    }
}

fn read_bool(dataset: &HashMap<String, String>, option: &str) -> Option<bool> {
    let raw = dataset.get(&attribute_key(option))?;
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            log::warn!("ignoring data attribute {}={:?}: expected true or false", option, other);
            None
        }
    }
}

/// Any finite number, truncated to a whole slide or card count
///
/// Range checks happen downstream: slide numbers are clamped or wrapped by
/// the slide state and card counts are raised to at least one.
fn read_number(dataset: &HashMap<String, String>, option: &str) -> Option<i32> {
    let raw = dataset.get(&attribute_key(option))?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v.trunc() as i32),
        _ => {
            log::warn!("ignoring data attribute {}={:?}: expected a number", option, raw);
            None
        }
    }
}

/// Read every option present in `dataset`; invalid values are left unset
pub fn options_from_dataset(dataset: &HashMap<String, String>) -> PartialOptions {
    PartialOptions {
        current_slide: read_number(dataset, "currentSlide"),
        peek_out: read_bool(dataset, "peekOut"),
        navigation: read_bool(dataset, "navigation"),
        animation: read_bool(dataset, "animation"),
        cyclical: read_bool(dataset, "cyclical"),
        cards_per_page: read_number(dataset, "cardsPerPage"),
        dragging: read_bool(dataset, "dragging"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;

    fn dataset(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_attribute_key() {
        assert_eq!(attribute_key("peekOut"), "carouselPeekOut");
        assert_eq!(attribute_key("cyclical"), "carouselCyclical");
    }

    #[test]
    fn test_reads_valid_values() {
        let p = options_from_dataset(&dataset(&[
            ("carouselCyclical", "true"),
            ("carouselPeekOut", "false"),
            ("carouselCardsPerPage", "4"),
        ]));
        assert_eq!(p.cyclical, Some(true));
        assert_eq!(p.peek_out, Some(false));
        assert_eq!(p.cards_per_page, Some(4));
        assert_eq!(p.navigation, None);
    }

    #[test]
    fn test_ignores_invalid_values() {
        let p = options_from_dataset(&dataset(&[
            ("carouselCyclical", "yes"),
            ("carouselCurrentSlide", "abc"),
            ("carouselCardsPerPage", "NaN"),
        ]));
        assert_eq!(p, PartialOptions::default());
    }

    #[test]
    fn test_numbers_are_normalized_later() {
        let p = options_from_dataset(&dataset(&[
            ("carouselCurrentSlide", "-4"),
            ("carouselCardsPerPage", "0"),
        ]));
        assert_eq!(p.current_slide, Some(-4));
        assert_eq!(p.cards_per_page, Some(0));
        assert_eq!(Options::default().merged(&p).cards_per_page, 1);

        let p = options_from_dataset(&dataset(&[("carouselCurrentSlide", "2.5"), ("carouselCardsPerPage", " 4 ")]));
        assert_eq!(p.current_slide, Some(2));
        assert_eq!(p.cards_per_page, Some(4));
    }
}
