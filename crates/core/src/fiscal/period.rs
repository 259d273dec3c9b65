//! Month and quarter types.

use serde::{Deserialize, Serialize};

/// Number of months in a reporting year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Number of contiguous months in a quarter.
pub const MONTHS_PER_QUARTER: usize = 3;

const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a month from its 1-based number.
    ///
    /// Returns `None` outside `1..=12`.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Creates a month from its 0-based column index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index + 1).ok().and_then(Self::new)
    }

    /// 1-based month number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based column index (January = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Quarter that contains this month.
    #[must_use]
    pub const fn quarter(self) -> Quarter {
        match self.index() / MONTHS_PER_QUARTER {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("Month out of range: {number}"))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed block of three consecutive months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// January to March.
    Q1,
    /// April to June.
    Q2,
    /// July to September.
    Q3,
    /// October to December.
    Q4,
}

impl Quarter {
    /// All quarters in order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Creates a quarter from its 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Q1),
            1 => Some(Self::Q2),
            2 => Some(Self::Q3),
            3 => Some(Self::Q4),
            _ => None,
        }
    }

    /// 0-based quarter index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
            Self::Q4 => 3,
        }
    }

    /// Column indices of the months in this quarter: `3q, 3q+1, 3q+2`.
    #[must_use]
    pub const fn month_indices(self) -> [usize; MONTHS_PER_QUARTER] {
        let first = self.index() * MONTHS_PER_QUARTER;
        [first, first + 1, first + 2]
    }

    /// The months in this quarter.
    #[must_use]
    pub const fn months(self) -> [Month; MONTHS_PER_QUARTER] {
        let first = match self {
            Self::Q1 => 1,
            Self::Q2 => 4,
            Self::Q3 => 7,
            Self::Q4 => 10,
        };
        [Month(first), Month(first + 1), Month(first + 2)]
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.index() + 1)
    }
}
