use core::fmt;
use serde::{Deserialize, Serialize};

/// What the player sees in one cell of the visible board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Unrevealed,
    /// Revealed with this many adjacent mines; zero renders blank.
    Revealed(u8),
    /// Mine shown temporarily by a hint.
    Hint,
    /// Mine the shield absorbed.
    Shielded,
}

impl Token {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Unrevealed)
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Unrevealed => '+',
            Self::Revealed(0) => ' ',
            Self::Revealed(count) if count < 10 => (b'0' + count) as char,
            Self::Revealed(_) => '?',
            Self::Hint => 'M',
            Self::Shielded => 'S',
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::Unrevealed
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so callers can right-align tokens in fixed-width columns
        let mut buf = [0u8; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}
