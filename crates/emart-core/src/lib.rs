//! Emoji picker engine: category assembly, section measurement, scroll
//! tracking, search and the "recently used" store.
//!
//! Hosts drive a [`Picker`] with scroll, click, search and frame events and
//! react to the [`PickerEvent`]s it returns.

pub mod assembly;
pub mod category;
pub mod config;
pub mod data;
pub mod emoji;
pub mod error;
pub mod frequently;
pub mod i18n;
pub mod picker;
pub mod preview;
pub mod search;
pub mod section;
pub mod store;
pub mod tracker;

pub use category::Category;
pub use config::Config;
pub use data::EmojiData;
pub use emoji::{CustomEmoji, Emoji, EmojiId, SkinTone};
pub use error::PickerError;
pub use picker::{Picker, PickerEvent, PickerOptions};
pub use store::{FileStore, MemoryStore, PreferenceStore};
