//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and returns effects.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::common::Clipboard;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, PickerTerminal};
use crate::{render, update};

/// Tick cadence while something is animating or the user is active.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick cadence when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    terminal: PickerTerminal,
    pub state: AppState,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(state: AppState) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so the layout settles before input is applied.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick renders, which caps the frame rate.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast ticks while a preview clear is due or input is flowing.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll =
            self.state.picker.has_pending_preview_clear() || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::CopyToClipboard { text } => match Clipboard::copy(&text) {
                Ok(transport) => {
                    tracing::debug!(?transport, "copied to clipboard");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard copy failed");
                    self.state.status = Some(err.to_string());
                }
            },
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
