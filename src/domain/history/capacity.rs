//! History capacity value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidCapacityError;

/// Default number of ephemeral entries kept in memory
pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 200;

/// Upper bound on the ephemeral entry count.
/// Validated on creation: always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(usize);

impl Capacity {
    /// Create a capacity from a signed request.
    /// Zero and negative values are rejected.
    pub fn new(requested: i64) -> Result<Self, InvalidCapacityError> {
        if requested <= 0 {
            return Err(InvalidCapacityError {
                input: requested.to_string(),
            });
        }

        usize::try_from(requested)
            .map(Self)
            .map_err(|_| InvalidCapacityError {
                input: requested.to_string(),
            })
    }

    /// Get the capacity as an entry count
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(DEFAULT_MAX_HISTORY_ITEMS)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = InvalidCapacityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(InvalidCapacityError {
                input: value.to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for Capacity {
    type Err = InvalidCapacityError;

    /// Parse a capacity from user input.
    /// Only plain positive integers are accepted; "NaN", "inf", "2.5" and
    /// "0" all fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| InvalidCapacityError {
            input: s.to_string(),
        })?;

        Self::new(value).map_err(|_| InvalidCapacityError {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
