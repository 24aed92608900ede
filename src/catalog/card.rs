//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a card: cost, stats, faction,
//! abilities, synergy tags, and an optional heuristic weight for non-stat
//! value (`effect_power`). Cards are created at catalog load and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Card faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Legion,
    Empires,
    Voidborne,
    Scrat,
    ZenChi,
    Neutral,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Faction::Legion => "Legion",
            Faction::Empires => "Empires",
            Faction::Voidborne => "Voidborne",
            Faction::Scrat => "Scrat",
            Faction::ZenChi => "Zen-Chi",
            Faction::Neutral => "Neutral",
        };
        write!(f, "{name}")
    }
}

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Card type.
///
/// Minions and buildings persist on the board once played; spells resolve
/// immediately and are discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Minion,
    Spell,
    Building,
}

/// Optional special-effect text, one slot per trigger.
///
/// Descriptive only: the simulator weighs non-stat value through
/// `effect_power`, not by parsing these.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialEffects {
    pub on_play: Option<String>,
    pub on_death: Option<String>,
    pub passive: Option<String>,
    pub triggered: Option<String>,
}

impl SpecialEffects {
    /// True when no trigger slot carries text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_play.is_none()
            && self.on_death.is_none()
            && self.passive.is_none()
            && self.triggered.is_none()
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckforge::catalog::{Card, CardType, Faction, Rarity};
///
/// let bolt = Card::new("arcane_bolt", "Arcane Bolt", 3, 6, 0, Faction::Neutral,
///     Rarity::Common, CardType::Spell)
///     .with_ability("Direct_Damage")
///     .with_synergy("Spell");
///
/// assert!(bolt.has_ability("Direct_Damage"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Mana price (positive).
    pub cost: u32,

    /// Attack value; direct damage for spells.
    pub attack: u32,

    /// Health; 0 for pure-damage spells.
    pub health: u32,

    pub faction: Faction,
    pub rarity: Rarity,
    pub card_type: CardType,

    /// Ability keywords. Order irrelevant, treated as a set.
    #[serde(default)]
    pub abilities: Vec<String>,

    /// Synergy tags. Order irrelevant, treated as a set.
    #[serde(default)]
    pub synergies: Vec<String>,

    /// Special-effect text per trigger, when any.
    #[serde(default, skip_serializing_if = "SpecialEffects::is_empty")]
    pub special_effects: SpecialEffects,

    /// Heuristic 1-10 weight of non-stat value (triggered/passive effects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_power: Option<u8>,
}

impl Card {
    /// Create a new card definition.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        cost: u32,
        attack: u32,
        health: u32,
        faction: Faction,
        rarity: Rarity,
        card_type: CardType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            attack,
            health,
            faction,
            rarity,
            card_type,
            abilities: Vec::new(),
            synergies: Vec::new(),
            special_effects: SpecialEffects::default(),
            effect_power: None,
        }
    }

    /// Add an ability keyword (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    /// Add a synergy tag (builder pattern).
    #[must_use]
    pub fn with_synergy(mut self, synergy: impl Into<String>) -> Self {
        self.synergies.push(synergy.into());
        self
    }

    /// Set the effect-power weight (builder pattern).
    #[must_use]
    pub fn with_effect_power(mut self, power: u8) -> Self {
        debug_assert!((1..=10).contains(&power));
        self.effect_power = Some(power);
        self
    }

    /// Check for an ability keyword.
    #[must_use]
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }

    /// Check for a synergy tag.
    #[must_use]
    pub fn has_synergy(&self, synergy: &str) -> bool {
        self.synergies.iter().any(|s| s == synergy)
    }

    /// True when this card's faction fits a master of the given faction
    /// (same faction, or Neutral which fits everywhere).
    #[must_use]
    pub fn fits_faction(&self, faction: Faction) -> bool {
        self.faction == faction || self.faction == Faction::Neutral
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card::new(
            "scrat",
            "Scrat",
            1,
            2,
            1,
            Faction::Scrat,
            Rarity::Common,
            CardType::Minion,
        )
        .with_ability("Fast")
        .with_synergy("Swarm")
    }

    #[test]
    fn test_card_builder() {
        let card = sample_card();
        assert_eq!(card.id, CardId::new("scrat"));
        assert_eq!(card.cost, 1);
        assert!(card.has_ability("Fast"));
        assert!(!card.has_ability("Flying"));
        assert!(card.has_synergy("Swarm"));
    }

    #[test]
    fn test_fits_faction() {
        let card = sample_card();
        assert!(card.fits_faction(Faction::Scrat));
        assert!(!card.fits_faction(Faction::Legion));

        let neutral = Card::new(
            "titan",
            "Titan",
            5,
            8,
            10,
            Faction::Neutral,
            Rarity::Legendary,
            CardType::Minion,
        );
        assert!(neutral.fits_faction(Faction::Legion));
        assert!(neutral.fits_faction(Faction::Scrat));
    }

    #[test]
    fn test_special_effects_empty() {
        assert!(SpecialEffects::default().is_empty());

        let effects = SpecialEffects {
            on_death: Some("Leaves a fiery DOT".into()),
            ..SpecialEffects::default()
        };
        assert!(!effects.is_empty());
    }

    #[test]
    fn test_card_serialization() {
        let card = sample_card().with_effect_power(3);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
