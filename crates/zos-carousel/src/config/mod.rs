//! Carousel configuration
//!
//! Options are merged lowest precedence first:
//! built-in defaults, then options passed at construction, then options
//! read from the root's data attributes.

mod attrs;
mod options;
mod tuning;

pub use attrs::{attribute_key, options_from_dataset};
pub use options::{Options, PartialOptions};
pub use tuning::Tuning;
