//! Board configuration.
//!
//! Dimensions are fixed for the lifetime of a board. The verification flag
//! turns on the full-rescan cross-check after every mutation; it can also be
//! flipped later with [`Board::set_verification`](crate::Board::set_verification).

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Environment variable for the column count
pub const ENV_WIDTH: &str = "BRICKFALL_WIDTH";
/// Environment variable for the row count
pub const ENV_HEIGHT: &str = "BRICKFALL_HEIGHT";
/// Environment variable toggling verification ("0", "false" or "off" disable it)
pub const ENV_VERIFY: &str = "BRICKFALL_VERIFY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub verification: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            verification: true,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_verification(mut self, verification: bool) -> Self {
        self.verification = verification;
        self
    }

    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BoardConfig::from_env`] but reads through `lookup`
    ///
    /// Values that fail to parse are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup(ENV_WIDTH)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup(ENV_HEIGHT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let verification = lookup(ENV_VERIFY)
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.verification);

        Self {
            width,
            height,
            verification,
        }
    }

    /// Reject empty boards and dimensions that cannot be addressed with `i32` coordinates
    pub fn validate(&self) -> Result<(), BoardError> {
        let addressable = |n: usize| n > 0 && i32::try_from(n).is_ok();
        let fits = self.width.checked_mul(self.height).is_some();
        if addressable(self.width) && addressable(self.height) && fits {
            Ok(())
        } else {
            Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
