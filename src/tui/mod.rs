//! Terminal User Interface module
//!
//! A launcher screen with a floating console panel on top, modelled on the
//! portfolio site's terminal widget.

mod app;
mod completion;
mod input;
mod theme;
mod widgets;

pub use app::App;
pub use completion::CommandPopup;
pub use input::{handle_key, InputAction};
pub use theme::Theme;
