//! Master definitions.
//!
//! A master is the persistent player avatar: a starting life total, a
//! faction, and a list of perk keywords that drive mana-gated bonus
//! damage during simulation (see the perk rule table in `battle`).

use serde::{Deserialize, Serialize};

use super::card::Faction;

/// Unique identifier for a master.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MasterId(pub String);

impl MasterId {
    /// Create a new master ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MasterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MasterId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for MasterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Static master definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Master {
    /// Unique identifier.
    pub id: MasterId,

    /// Master name.
    pub name: String,

    /// Starting life total.
    pub health: i32,

    pub faction: Faction,

    /// Perk keywords, in activation order.
    pub perks: Vec<String>,
}

impl Master {
    /// Create a new master definition.
    #[must_use]
    pub fn new(
        id: impl Into<MasterId>,
        name: impl Into<String>,
        health: i32,
        faction: Faction,
        perks: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            health,
            faction,
            perks: perks.into_iter().map(Into::into).collect(),
        }
    }

    /// Check for a perk keyword.
    #[must_use]
    pub fn has_perk(&self, perk: &str) -> bool {
        self.perks.iter().any(|p| p == perk)
    }
}
