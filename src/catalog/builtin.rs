//! Built-in card and master dataset.
//!
//! A small fixed collection spanning all factions, cost buckets, and
//! card types, so the engine is usable without an external data
//! provider. Real deployments build a `Catalog` from their own provider
//! via [`Catalog::from_parts`].

use super::card::{Card, CardType, Faction, Rarity};
use super::catalog::Catalog;
use super::master::Master;

/// Build the built-in catalog: 17 cards, 5 masters.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog::from_parts(builtin_cards(), builtin_masters())
}

fn builtin_masters() -> Vec<Master> {
    vec![
        Master::new(
            "stormbringer",
            "Stormbringer",
            15,
            Faction::Empires,
            ["Lightning_Bolt", "Chain_Lightning", "Overcharge"],
        ),
        Master::new(
            "mordar",
            "Mordar",
            20,
            Faction::Legion,
            ["Fireball", "Combustion", "Fire_Imp_Spawn"],
        ),
        Master::new(
            "apep",
            "Apep",
            18,
            Faction::Voidborne,
            ["Poison_Volley", "Snake_Nest", "Slither"],
        ),
        Master::new(
            "king_puff",
            "King Puff",
            16,
            Faction::Scrat,
            ["Puff_Stomp", "Scrat_Pack", "Swarm_Tactics"],
        ),
        Master::new(
            "settsu",
            "Settsu",
            17,
            Faction::ZenChi,
            ["Spirit_Infusion", "Meditation", "Chi_Burst"],
        ),
    ]
}

fn builtin_cards() -> Vec<Card> {
    use CardType::*;
    use Faction::*;
    use Rarity::*;

    vec![
        // 1 mana
        Card::new("scrat", "Scrat", 1, 2, 1, Scrat, Common, Minion)
            .with_ability("Fast")
            .with_synergy("Swarm"),
        Card::new("fire_imp", "Fire Imp", 1, 1, 2, Legion, Common, Minion)
            .with_ability("Burn")
            .with_synergy("Fire")
            .with_synergy("Imp"),
        Card::new("shockrock", "Shockrock", 1, 2, 1, Empires, Common, Minion)
            .with_ability("Electric")
            .with_synergy("Lightning"),
        // 2 mana
        Card::new("assassin", "Assassin", 2, 4, 1, Voidborne, Common, Minion)
            .with_ability("Stealth")
            .with_ability("Fast")
            .with_synergy("Shadow"),
        Card::new("warrior", "Warrior", 2, 3, 3, Empires, Common, Minion)
            .with_ability("Armor")
            .with_synergy("Tank"),
        Card::new("priest", "Priest", 2, 1, 4, ZenChi, Common, Minion)
            .with_ability("Heal")
            .with_synergy("Support"),
        // 3 mana
        Card::new("knight", "Knight", 3, 4, 5, Empires, Rare, Minion)
            .with_ability("Armor")
            .with_ability("Taunt")
            .with_synergy("Tank")
            .with_synergy("Defense"),
        Card::new("demon", "Demon", 3, 5, 3, Legion, Rare, Minion)
            .with_ability("Lifesteal")
            .with_synergy("Demon"),
        Card::new("arcane_bolt", "Arcane Bolt", 3, 6, 0, Neutral, Common, Spell)
            .with_ability("Direct_Damage")
            .with_synergy("Spell"),
        // 4 mana
        Card::new("colossus", "Colossus", 4, 6, 8, Empires, Epic, Minion)
            .with_ability("Slow")
            .with_ability("Massive")
            .with_synergy("Tank")
            .with_synergy("Heavy"),
        Card::new("dragon", "Dragon", 4, 5, 6, Legion, Epic, Minion)
            .with_ability("Flying")
            .with_ability("Fire_Breath")
            .with_synergy("Dragon")
            .with_synergy("Fire"),
        Card::new("void_lord", "Void Lord", 4, 4, 7, Voidborne, Epic, Minion)
            .with_ability("Summon_Void_Minions")
            .with_synergy("Void")
            .with_synergy("Summon"),
        // 5+ mana
        Card::new(
            "legendary_titan",
            "Legendary Titan",
            5,
            8,
            10,
            Neutral,
            Legendary,
            Minion,
        )
        .with_ability("Immunity")
        .with_ability("Area_Damage")
        .with_synergy("Legendary")
        .with_synergy("Massive"),
        Card::new("meteor", "Meteor", 5, 10, 0, Legion, Rare, Spell)
            .with_ability("Area_Damage")
            .with_synergy("Spell")
            .with_synergy("Destruction"),
        // Strategic fillers
        Card::new("scrat_horde", "Scrat Horde", 2, 1, 1, Scrat, Common, Spell)
            .with_ability("Summon_Multiple")
            .with_synergy("Swarm")
            .with_synergy("Scrat"),
        Card::new(
            "healing_shrine",
            "Healing Shrine",
            3,
            0,
            6,
            ZenChi,
            Rare,
            Building,
        )
        .with_ability("Heal_Aura")
        .with_synergy("Support")
        .with_synergy("Building"),
        Card::new(
            "lightning_tower",
            "Lightning Tower",
            4,
            4,
            8,
            Empires,
            Rare,
            Building,
        )
        .with_ability("Auto_Attack")
        .with_ability("Lightning_Chain")
        .with_synergy("Defense")
        .with_synergy("Lightning"),
    ]
}
