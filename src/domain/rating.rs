//! Rating type
//!
//! Feedback score validated at construction time, so an out-of-range rating
//! never reaches the store.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating
pub const MAX_RATING: i64 = 5;

/// A feedback rating in `[1, 5]`.
///
/// # Example
/// ```
/// use campus_events::domain::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(i64);

impl Rating {
    /// Create a new Rating.
    ///
    /// # Errors
    /// - `DomainError::RatingOutOfRange` if value is outside `[1, 5]`
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(DomainError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
