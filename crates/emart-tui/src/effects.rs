//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state; clipboard writes and quitting happen in
//! the runtime.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the picker.
    Quit,

    /// Copy a picked emoji to the clipboard.
    CopyToClipboard { text: String },
}
