//! Error types for carousel construction

use std::fmt;

/// Structural element a carousel root must contain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// Clipping viewport around the slide list
    Viewport,
    /// Slide list that gets translated
    List,
    /// At least one slide inside the list
    Slides,
    /// Previous-page button
    PrevButton,
    /// Next-page button
    NextButton,
    /// Container for navigation dots
    Navigation,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Viewport => "viewport",
            Element::List => "slide list",
            Element::Slides => "slides",
            Element::PrevButton => "previous button",
            Element::NextButton => "next button",
            Element::Navigation => "navigation container",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while constructing a carousel
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselError {
    /// A required structural element is absent from the root
    MissingElement(Element),

    /// Options passed across the JS boundary could not be decoded
    InvalidOptions(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::MissingElement(element) => {
                write!(f, "Carousel is missing its {}", element)
            }
            CarouselError::InvalidOptions(msg) => write!(f, "Invalid carousel options: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}
