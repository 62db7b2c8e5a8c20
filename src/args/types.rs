use std::fmt;
use std::num::NonZeroU16;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveU16(NonZeroU16);

impl PositiveU16 {
    /// `value`, raised to 1 when zero.
    #[must_use]
    pub const fn saturating(value: u16) -> Self {
        Self(NonZeroU16::MIN.saturating_add(value.saturating_sub(1)))
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for PositiveU16 {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        NonZeroU16::new(value)
            .map(PositiveU16)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl fmt::Display for PositiveU16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PositiveU16 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveU16::try_from(value)
    }
}

impl From<PositiveU16> for u16 {
    fn from(value: PositiveU16) -> Self {
        value.get()
    }
}
