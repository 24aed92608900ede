//! Battle simulation: win-rate estimation and static matchup analysis.
//!
//! The simulator is a statistical estimator, not a faithful game engine:
//! it runs many independent simplified matches and averages the
//! outcomes. Per-entity special cases (ability bonuses, master perks,
//! master/deck affinities) live in data-driven tables rather than
//! branching code, so new cards and masters extend the tables without
//! touching control flow.

pub mod factors;
pub mod simulator;
pub mod tables;

pub use factors::BattleFactors;
pub use simulator::{BattleResult, BattleSimulator, Winner, SIMULATION_ROUNDS};
pub use tables::{AbilityBonuses, MasterAffinities, MasterAffinity, PerkRule, PerkRules};
