//! CIM date-time values.

use std::fmt;

/// A CIM date-time: either a timestamp with a UTC offset or an interval.
///
/// The four fields are carried on the wire verbatim, one slot each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateTime {
    /// Microseconds since 0000-01-01 (timestamps) or total microseconds
    /// (intervals).
    pub usec: u64,
    /// Magnitude of the UTC offset in minutes.
    pub utc_offset: u32,
    /// `'+'` or `'-'` for timestamps, `':'` for intervals.
    pub sign: u16,
    /// Number of trailing wildcard characters in the textual form.
    pub wildcards: u16,
}

impl DateTime {
    /// Sign of a timestamp east of UTC.
    pub const SIGN_POSITIVE: u16 = b'+' as u16;

    /// Sign of a timestamp west of UTC.
    pub const SIGN_NEGATIVE: u16 = b'-' as u16;

    /// Sign of an interval.
    pub const SIGN_INTERVAL: u16 = b':' as u16;

    /// Creates a timestamp with the given signed UTC offset in minutes.
    #[must_use]
    pub const fn timestamp(usec: u64, offset_minutes: i32) -> Self {
        Self {
            usec,
            utc_offset: offset_minutes.unsigned_abs(),
            sign: if offset_minutes < 0 {
                Self::SIGN_NEGATIVE
            } else {
                Self::SIGN_POSITIVE
            },
            wildcards: 0,
        }
    }

    /// Creates an interval.
    #[must_use]
    pub const fn interval(usec: u64) -> Self {
        Self {
            usec,
            utc_offset: 0,
            sign: Self::SIGN_INTERVAL,
            wildcards: 0,
        }
    }

    /// Returns a copy with the wildcard count set.
    #[must_use]
    pub const fn with_wildcards(mut self, wildcards: u16) -> Self {
        self.wildcards = wildcards;
        self
    }

    /// Returns `true` for intervals.
    #[must_use]
    pub const fn is_interval(&self) -> bool {
        self.sign == Self::SIGN_INTERVAL
    }

    /// Returns the signed UTC offset in minutes (zero for intervals).
    #[must_use]
    pub const fn utc_offset_minutes(&self) -> i64 {
        match self.sign {
            Self::SIGN_NEGATIVE => -(self.utc_offset as i64),
            Self::SIGN_POSITIVE => self.utc_offset as i64,
            _ => 0,
        }
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::interval(0)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = char::from_u32(u32::from(self.sign)).unwrap_or('?');
        write!(f, "{}{}{:03}", self.usec, sign, self.utc_offset)
    }
}
