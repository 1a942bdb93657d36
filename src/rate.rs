pub mod off_peak;
pub mod weekday;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use enumset::{EnumSet, enum_set};

pub use self::weekday::Weekday;
use crate::prelude::*;

/// Known tariff names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RateName {
    F2,
    F3,
}

impl RateName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F2 => "F2",
            Self::F3 => "F3",
        }
    }

    /// Catalog entry for the name.
    pub const fn rate(self) -> Rate {
        match self {
            Self::F2 => Rate::F2,
            Self::F3 => Rate::F3,
        }
    }
}

impl Display for RateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "F2" => Ok(Self::F2),
            "F3" => Ok(Self::F3),
            _ => bail!("unknown rate `{s}`"),
        }
    }
}

/// Tariff schedule: the discounted hourly window and the days discounted as a whole.
///
/// Outside of the catalog, only [`Rate::builder`] constructs one, so the hours are always in `0..24`.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rate {
    name: RateName,

    /// First discounted hour, inclusive.
    start_hour: u32,

    /// First full-price hour. May be less than [`Rate::start_hour`],
    /// in which case the window wraps past midnight.
    end_hour: u32,

    /// Days discounted for all 24 hours.
    holidays: EnumSet<Weekday>,
}

impl Rate {
    pub const F2: Self = Self {
        name: RateName::F2,
        start_hour: 19,
        end_hour: 8,
        holidays: enum_set!(Weekday::Sunday | Weekday::Saturday),
    };

    pub const F3: Self =
        Self { name: RateName::F3, start_hour: 23, end_hour: 7, holidays: enum_set!(Weekday::Sunday) };

    /// Used whenever a name cannot be resolved.
    pub const DEFAULT: Self = Self::F2;

    pub const ALL: [Self; 2] = [Self::F2, Self::F3];

    #[must_use]
    pub const fn name(&self) -> RateName {
        self.name
    }

    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    #[must_use]
    pub const fn end_hour(&self) -> u32 {
        self.end_hour
    }

    #[must_use]
    pub const fn holidays(&self) -> EnumSet<Weekday> {
        self.holidays
    }
}

#[bon::bon]
impl Rate {
    #[builder]
    pub fn new(
        name: RateName,
        start_hour: u32,
        end_hour: u32,
        #[builder(default)] holidays: EnumSet<Weekday>,
    ) -> Result<Self> {
        ensure!(start_hour < 24, "start hour `{start_hour}` is out of range");
        ensure!(end_hour < 24, "end hour `{end_hour}` is out of range");
        Ok(Self { name, start_hour, end_hour, holidays })
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<RateName> for Rate {
    fn from(name: RateName) -> Self {
        name.rate()
    }
}

/// Turn any name into a catalog entry, falling back to [`Rate::DEFAULT`].
///
/// The name may come from storage written by an older version, so this never fails.
pub fn resolve(name: &str) -> Rate {
    name.parse::<RateName>().map_or(Rate::DEFAULT, Rate::from)
}
