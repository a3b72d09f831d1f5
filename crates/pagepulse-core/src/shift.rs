//! The closed shift enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a shift label is not one of the three fixed values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown shift label: {0}")]
pub struct UnknownShift(pub String);

/// One of the three fixed 8-hour operating windows used to bucket activity
/// by time of day, in the operation's local timezone.
///
/// This is a closed enumeration of exactly three values; it is never
/// extended and never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// 06:00–14:00 local.
    Morning,
    /// 14:00–22:00 local.
    Mid,
    /// 22:00–06:00 local.
    Evening,
}

impl Shift {
    /// All shifts in schedule order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Mid, Self::Evening];

    /// The label used on the wire and in display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Mid => "Mid",
            Self::Evening => "Evening",
        }
    }

    /// Human-readable clock window for the shift.
    #[must_use]
    pub const fn window(self) -> &'static str {
        match self {
            Self::Morning => "6:00 AM - 2:00 PM",
            Self::Mid => "2:00 PM - 10:00 PM",
            Self::Evening => "10:00 PM - 6:00 AM",
        }
    }

    /// Position within [`Shift::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Mid => 1,
            Self::Evening => 2,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Shift {
    type Err = UnknownShift;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Mid" => Ok(Self::Mid),
            "Evening" => Ok(Self::Evening),
            _ => Err(UnknownShift(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trips_all_labels() {
        for shift in Shift::ALL {
            assert_eq!(shift.as_str().parse::<Shift>().unwrap(), shift);
        }
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        assert!("Night".parse::<Shift>().is_err());
        assert!("morning".parse::<Shift>().is_err());
        assert!("".parse::<Shift>().is_err());
    }

    #[test]
    fn serde_uses_the_bare_label() {
        let json = serde_json::to_string(&Shift::Evening).unwrap();
        assert_eq!(json, "\"Evening\"");
        let parsed: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Shift::Evening);
    }

    #[test]
    fn all_is_in_schedule_order() {
        assert_eq!(Shift::ALL[0], Shift::Morning);
        assert_eq!(Shift::ALL[1], Shift::Mid);
        assert_eq!(Shift::ALL[2], Shift::Evening);
        for shift in Shift::ALL {
            assert_eq!(Shift::ALL[shift.index()], shift);
        }
    }
}
