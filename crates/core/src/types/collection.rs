//! Collections served by the API.

use serde::{Deserialize, Serialize};

/// A document collection in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Users,
    Items,
    Orders,
    /// Holds the single active-session record.
    Sessions,
}

impl Collection {
    /// The collection's name in the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Items => "items",
            Self::Orders => "orders",
            Self::Sessions => "sessions",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_names() {
        assert_eq!(Collection::Users.name(), "users");
        assert_eq!(Collection::Items.name(), "items");
        assert_eq!(Collection::Orders.name(), "orders");
        assert_eq!(Collection::Sessions.name(), "sessions");
    }

    #[test]
    fn test_display_matches_store_name() {
        assert_eq!(Collection::Sessions.to_string(), "sessions");
    }
}
