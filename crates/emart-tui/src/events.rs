//! UI event types consumed by the reducer.

use crossterm::event::Event;

/// Events fed to [`crate::update::update`].
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Emitted at the tick cadence. Fires due timers (preview clear).
    Tick,
    /// Prepended every loop iteration with the current terminal size.
    ///
    /// This is the frame boundary where the picker settles its layout.
    Frame { width: u16, height: u16 },
    /// Raw crossterm input.
    Terminal(Event),
}
