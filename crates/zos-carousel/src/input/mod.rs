//! Input handling
//!
//! Provides the drag gesture state machine plus keyboard and click
//! routing. Nothing here touches the document; the host forwards raw event
//! data and applies the returned directives.

mod gesture;
mod keyboard;
mod result;
mod session;

pub use gesture::{GestureController, GesturePhase};
pub use keyboard::{Key, KeyAction, KeyTarget};
pub use result::{ClickResult, ClickTarget, GestureDecision, InputResult, PageStep};
pub use session::DragSession;

/// Primary mouse button / pen contact / touch
pub const PRIMARY_BUTTON: i16 = 0;
