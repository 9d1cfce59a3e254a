use std::convert::Infallible;
use std::str::FromStr;

/// Breakfast locations ordered Monday through Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations(Vec<String>);

impl Locations {
    /// One entry per day of the week.
    pub const EXPECTED_LEN: usize = 7;

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Splits on every comma. Entries are kept verbatim, whitespace included.
impl FromStr for Locations {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.split(',').map(str::to_owned).collect()))
    }
}
