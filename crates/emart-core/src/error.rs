use std::fmt;

/// Configuration errors detected while constructing a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// Include/exclude lists (or the emoji filter) left no category to show.
    NoCategories {
        include: Vec<String>,
        exclude: Vec<String>,
    },
    /// A custom emoji entry without any short name.
    InvalidCustomEmoji { name: String },
    /// A custom emoji whose id is already taken.
    DuplicateCustomEmoji { id: String },
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::NoCategories { include, exclude } => {
                write!(f, "no categories left to show")?;
                if !include.is_empty() {
                    write!(f, " (include: {})", include.join(", "))?;
                }
                if !exclude.is_empty() {
                    write!(f, " (exclude: {})", exclude.join(", "))?;
                }
                Ok(())
            }
            PickerError::InvalidCustomEmoji { name } => {
                write!(f, "custom emoji '{name}' has no short names")
            }
            PickerError::DuplicateCustomEmoji { id } => {
                write!(f, "custom emoji ':{id}:' clashes with an existing emoji")
            }
        }
    }
}

impl std::error::Error for PickerError {}
