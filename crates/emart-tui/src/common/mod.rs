//! Widgets and helpers shared by the render and runtime paths.

pub mod clipboard;
pub mod scrollbar;
pub mod text;

pub use clipboard::{Clipboard, ClipboardError, Transport};
pub use scrollbar::Scrollbar;
