//! Data-driven rule tables for the simulator.
//!
//! Three tables cover the per-entity special cases:
//!
//! - [`AbilityBonuses`]: additive efficiency weights per ability keyword,
//!   used when ordering card plays.
//! - [`PerkRules`]: mana-gated bonus damage per master perk.
//! - [`MasterAffinities`]: per-master thematic tags rewarded by the
//!   master-synergy battle factor.
//!
//! Each table ships with built-in entries and is independently
//! extensible and testable.

use rustc_hash::FxHashMap;

use crate::catalog::{Card, Master};

/// Additive efficiency bonus per ability keyword.
///
/// Abilities missing from the table still contribute a small flat bonus;
/// `effect_power` adds its own weighted term.
#[derive(Clone, Debug)]
pub struct AbilityBonuses {
    bonuses: FxHashMap<String, f64>,
    /// Bonus for any ability without a table entry.
    pub default_bonus: f64,
    /// Weight applied to a card's `effect_power`.
    pub effect_power_weight: f64,
}

impl AbilityBonuses {
    /// Built-in bonus table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut bonuses = FxHashMap::default();
        for (ability, bonus) in [
            ("Fast", 1.2),
            ("Speed", 1.2),
            ("Flying", 1.5),
            ("Armor", 1.0),
            ("Heal", 1.3),
            ("Stealth", 0.8),
            ("Taunt", 0.7),
            ("Lifesteal", 1.1),
        ] {
            bonuses.insert(ability.to_owned(), bonus);
        }
        Self {
            bonuses,
            default_bonus: 0.3,
            effect_power_weight: 0.8,
        }
    }

    /// Add or override an ability weight.
    pub fn set(&mut self, ability: impl Into<String>, bonus: f64) {
        self.bonuses.insert(ability.into(), bonus);
    }

    /// Efficiency score used to order card plays.
    ///
    /// `(attack + health) / max(1, cost)` plus ability bonuses plus the
    /// weighted effect power.
    #[must_use]
    pub fn efficiency(&self, card: &Card) -> f64 {
        let stats = f64::from(card.attack + card.health) / f64::from(card.cost.max(1));

        let ability_bonus: f64 = card
            .abilities
            .iter()
            .map(|a| self.bonuses.get(a).copied().unwrap_or(self.default_bonus))
            .sum();

        let effect_bonus = card
            .effect_power
            .map_or(0.0, |p| f64::from(p) * self.effect_power_weight);

        stats + ability_bonus + effect_bonus
    }
}

impl Default for AbilityBonuses {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One mana-gated perk: fires once the turn's mana reaches the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerkRule {
    pub min_mana: i32,
    pub damage: i32,
}

/// Bonus damage per master perk keyword.
#[derive(Clone, Debug)]
pub struct PerkRules {
    rules: FxHashMap<String, PerkRule>,
}

impl PerkRules {
    /// Built-in perk table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut rules = FxHashMap::default();
        for (perk, min_mana, damage) in [
            ("Lightning_Bolt", 2, 3),
            ("Fireball", 3, 4),
            ("Poison_Volley", 2, 2),
        ] {
            rules.insert(perk.to_owned(), PerkRule { min_mana, damage });
        }
        Self { rules }
    }

    /// Add or override a perk rule.
    pub fn set(&mut self, perk: impl Into<String>, rule: PerkRule) {
        self.rules.insert(perk.into(), rule);
    }

    /// Total bonus damage for a master at the given mana.
    #[must_use]
    pub fn damage_for(&self, master: &Master, mana: i32) -> i32 {
        master
            .perks
            .iter()
            .filter_map(|perk| self.rules.get(perk))
            .filter(|rule| mana >= rule.min_mana)
            .map(|rule| rule.damage)
            .sum()
    }
}

impl Default for PerkRules {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Thematic affinity of one master: the cards that "belong" to it.
///
/// A card matches when it carries one of the synergy tags, one of the
/// abilities, or costs at most `cost_at_most` (when set).
#[derive(Clone, Debug, Default)]
pub struct MasterAffinity {
    pub synergies: Vec<String>,
    pub abilities: Vec<String>,
    pub cost_at_most: Option<u32>,
}

impl MasterAffinity {
    /// Check whether a card matches this affinity.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.synergies.iter().any(|s| card.has_synergy(s))
            || self.abilities.iter().any(|a| card.has_ability(a))
            || self.cost_at_most.is_some_and(|max| card.cost <= max)
    }
}

/// Per-master affinity lookup, keyed by master name.
#[derive(Clone, Debug)]
pub struct MasterAffinities {
    affinities: FxHashMap<String, MasterAffinity>,
    /// Weight per matching card, before the 1.0 cap.
    pub per_card_weight: f64,
}

impl MasterAffinities {
    /// Built-in affinity table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut affinities = FxHashMap::default();
        affinities.insert(
            "Stormbringer".to_owned(),
            MasterAffinity {
                synergies: vec!["Lightning".to_owned()],
                abilities: vec!["Electric".to_owned()],
                cost_at_most: None,
            },
        );
        affinities.insert(
            "Mordar".to_owned(),
            MasterAffinity {
                synergies: vec!["Fire".to_owned()],
                abilities: vec!["Burn".to_owned()],
                cost_at_most: None,
            },
        );
        affinities.insert(
            "King Puff".to_owned(),
            MasterAffinity {
                synergies: vec!["Swarm".to_owned()],
                abilities: Vec::new(),
                cost_at_most: Some(2),
            },
        );
        Self {
            affinities,
            per_card_weight: 0.1,
        }
    }

    /// Add or override a master's affinity.
    pub fn set(&mut self, master_name: impl Into<String>, affinity: MasterAffinity) {
        self.affinities.insert(master_name.into(), affinity);
    }

    /// How well a card set fits a master, in [0, 1].
    #[must_use]
    pub fn deck_synergy<'a>(
        &self,
        master: &Master,
        cards: impl IntoIterator<Item = &'a Card>,
    ) -> f64 {
        let Some(affinity) = self.affinities.get(&master.name) else {
            return 0.0;
        };

        let matching = cards.into_iter().filter(|c| affinity.matches(c)).count();
        (matching as f64 * self.per_card_weight).min(1.0)
    }
}

impl Default for MasterAffinities {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardType, Faction, Rarity};

    fn card(abilities: &[&str], cost: u32, attack: u32, health: u32) -> Card {
        let mut c = Card::new(
            "t",
            "Test",
            cost,
            attack,
            health,
            Faction::Neutral,
            Rarity::Common,
            CardType::Minion,
        );
        for a in abilities {
            c = c.with_ability(*a);
        }
        c
    }

    #[test]
    fn test_efficiency_base() {
        let bonuses = AbilityBonuses::builtin();
        // (4 + 2) / 3 = 2.0, no abilities
        let c = card(&[], 3, 4, 2);
        assert!((bonuses.efficiency(&c) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_zero_cost_clamped() {
        let bonuses = AbilityBonuses::builtin();
        let c = card(&[], 0, 3, 1);
        // Divides by max(1, cost)
        assert!((bonuses.efficiency(&c) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_known_and_unknown_abilities() {
        let bonuses = AbilityBonuses::builtin();
        let known = card(&["Flying"], 1, 1, 0);
        let unknown = card(&["Mystery"], 1, 1, 0);

        assert!((bonuses.efficiency(&known) - 2.5).abs() < 1e-9);
        assert!((bonuses.efficiency(&unknown) - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_effect_power() {
        let bonuses = AbilityBonuses::builtin();
        let c = card(&[], 1, 1, 0).with_effect_power(5);
        // 1.0 + 5 * 0.8
        assert!((bonuses.efficiency(&c) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_perk_damage_mana_gate() {
        let rules = PerkRules::builtin();
        let master = Master::new("s", "Stormbringer", 15, Faction::Empires, ["Lightning_Bolt"]);

        assert_eq!(rules.damage_for(&master, 1), 0);
        assert_eq!(rules.damage_for(&master, 2), 3);
        assert_eq!(rules.damage_for(&master, 10), 3);
    }

    #[test]
    fn test_perk_damage_stacks() {
        let rules = PerkRules::builtin();
        let master = Master::new(
            "m",
            "Multi",
            20,
            Faction::Legion,
            ["Fireball", "Poison_Volley"],
        );

        // Poison_Volley fires at 2, Fireball joins at 3
        assert_eq!(rules.damage_for(&master, 2), 2);
        assert_eq!(rules.damage_for(&master, 3), 6);
    }

    #[test]
    fn test_unknown_perks_ignored() {
        let rules = PerkRules::builtin();
        let master = Master::new("m", "M", 20, Faction::Scrat, ["Puff_Stomp"]);
        assert_eq!(rules.damage_for(&master, 10), 0);
    }

    #[test]
    fn test_affinity_match_and_cap() {
        let affinities = MasterAffinities::builtin();
        let puff = Master::new("king_puff", "King Puff", 16, Faction::Scrat, ["Puff_Stomp"]);

        // Cheap cards match King Puff via the cost cap
        let cheap: Vec<Card> = (0..15).map(|_| card(&[], 1, 1, 1)).collect();
        let synergy = affinities.deck_synergy(&puff, cheap.iter());
        assert!((synergy - 1.0).abs() < 1e-9, "capped at 1.0");

        let few: Vec<Card> = (0..3).map(|_| card(&[], 1, 1, 1)).collect();
        let synergy = affinities.deck_synergy(&puff, few.iter());
        assert!((synergy - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_affinity_unknown_master() {
        let affinities = MasterAffinities::builtin();
        let unknown = Master::new("x", "Nobody", 20, Faction::Neutral, Vec::<String>::new());
        let cards = [card(&[], 1, 1, 1)];
        assert_eq!(affinities.deck_synergy(&unknown, cards.iter()), 0.0);
    }

    #[test]
    fn test_table_extension() {
        let mut bonuses = AbilityBonuses::builtin();
        bonuses.set("Frenzy", 2.0);
        let c = card(&["Frenzy"], 1, 0, 1);
        assert!((bonuses.efficiency(&c) - 3.0).abs() < 1e-9);

        let mut rules = PerkRules::builtin();
        rules.set(
            "Chi_Burst",
            PerkRule {
                min_mana: 4,
                damage: 5,
            },
        );
        let settsu = Master::new("settsu", "Settsu", 17, Faction::ZenChi, ["Chi_Burst"]);
        assert_eq!(rules.damage_for(&settsu, 4), 5);
    }
}
