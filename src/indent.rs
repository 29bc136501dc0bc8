//! Indentation style configuration.

const SPACES: &str = "        ";

/// Indentation unit inserted once per level at the start of each line.
///
/// Fixed at writer construction; each writer owns its own copy, there is no
/// process-wide default to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the given width (clamped to the 1..=8 range).
    Spaces(u8),
    /// A single tab character.
    Tab,
}

impl Indent {
    /// Four-space indentation, the default.
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// Two-space indentation.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// The string written once per indentation level.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Spaces(width) => {
                let width = (*width).clamp(1, SPACES.len() as u8) as usize;
                &SPACES[..width]
            }
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}
