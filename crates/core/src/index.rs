//! Transaction index assigned by the state store.

use serde::{Deserialize, Serialize};

/// Monotonically increasing index of a committed transaction.
///
/// Unique per commit; every event derived from a commit carries its index.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Index(u64);

impl Index {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Index {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Index> for u64 {
    fn from(value: Index) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Index::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: Index = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Index::from(42));
    }

    #[test]
    fn orders_by_value() {
        assert!(Index::new(7) < Index::new(8));
        assert_eq!(u64::from(Index::new(9)), 9);
        assert_eq!(Index::new(3).to_string(), "3");
    }
}
