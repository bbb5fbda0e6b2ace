use std::{num::ParseIntError, ops::Sub, str::FromStr};

/// a number of clock ticks, as counted by the kernel.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct UserHz(u64);

// === impl UserHz ===

impl UserHz {
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// returns the number of ticks as a float.
    pub fn as_f64(self) -> f64 {
        let Self(ticks) = self;
        ticks as f64
    }

    /// adds two tick counts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (Self(lhs), Self(rhs)) = (self, rhs);
        lhs.checked_add(rhs).map(Self)
    }
}

impl FromStr for UserHz {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Sub for UserHz {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        let (Self(lhs), Self(rhs)) = (self, rhs);
        Self(lhs - rhs)
    }
}

impl From<u64> for UserHz {
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}
