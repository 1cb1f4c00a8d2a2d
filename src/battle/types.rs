//! Battle data structures.
//!
//! A duel between the player and a single monster: both start at full
//! health, damage is exchanged per attack, and the log records every
//! damage and heal event newest-first.

use crate::constants::*;
use std::collections::VecDeque;

/// Who a log entry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Monster,
}

impl Combatant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Monster => "Monster",
        }
    }
}

/// What happened to the combatant in a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Damage,
    Heal,
}

/// A single battle log event. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The combatant the event happened to (the damage or heal recipient).
    pub actor: Combatant,
    pub kind: LogKind,
    pub amount: u32,
    /// Pre-rendered display text.
    pub text: String,
}

impl LogEntry {
    pub fn damage(actor: Combatant, amount: u32) -> Self {
        Self {
            actor,
            kind: LogKind::Damage,
            amount,
            text: format!("{} takes {} damage", actor.name(), amount),
        }
    }

    pub fn heal(amount: u32) -> Self {
        Self {
            actor: Combatant::Player,
            kind: LogKind::Heal,
            amount,
            text: format!("Player heals {} life points", amount),
        }
    }
}

/// Full duel state. Mutated only by the action handlers in
/// [`crate::battle::logic`]; replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleState {
    pub player_health: u32,
    pub monster_health: u32,
    pub game_over: bool,
    /// Meaningful only while `game_over` is true.
    pub player_won: bool,
    pub heal_used: bool,
    pub attack_count: u32,
    pub special_ready: bool,
    /// Newest entries at the front, except the special attack entry
    /// which lands at the back (see `use_special`).
    pub battle_log: VecDeque<LogEntry>,
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleState {
    pub fn new() -> Self {
        Self {
            player_health: MAX_HEALTH,
            monster_health: MAX_HEALTH,
            game_over: false,
            player_won: false,
            heal_used: false,
            attack_count: 0,
            special_ready: false,
            battle_log: VecDeque::new(),
        }
    }

    /// Health bar fill fraction for the player, in [0.0, 1.0].
    pub fn player_health_ratio(&self) -> f64 {
        self.player_health as f64 / MAX_HEALTH as f64
    }

    /// Health bar fill fraction for the monster, in [0.0, 1.0].
    pub fn monster_health_ratio(&self) -> f64 {
        self.monster_health as f64 / MAX_HEALTH as f64
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_health > 0
    }

    pub fn is_monster_alive(&self) -> bool {
        self.monster_health > 0
    }

    /// Outcome label for the game-over panel.
    pub fn outcome_label(&self) -> &'static str {
        if self.player_won {
            "You Win!"
        } else {
            "You Lose!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_battle_state() {
        let state = BattleState::new();
        assert_eq!(state.player_health, MAX_HEALTH);
        assert_eq!(state.monster_health, MAX_HEALTH);
        assert!(!state.game_over);
        assert!(!state.player_won);
        assert!(!state.heal_used);
        assert_eq!(state.attack_count, 0);
        assert!(!state.special_ready);
        assert!(state.battle_log.is_empty());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(BattleState::default(), BattleState::new());
    }

    #[test]
    fn test_health_ratios() {
        let mut state = BattleState::new();
        assert_eq!(state.player_health_ratio(), 1.0);
        assert_eq!(state.monster_health_ratio(), 1.0);

        state.player_health = 50;
        state.monster_health = 0;
        assert_eq!(state.player_health_ratio(), 0.5);
        assert_eq!(state.monster_health_ratio(), 0.0);
    }

    #[test]
    fn test_alive_flags() {
        let mut state = BattleState::new();
        assert!(state.is_player_alive());
        assert!(state.is_monster_alive());

        state.player_health = 0;
        assert!(!state.is_player_alive());
        assert!(state.is_monster_alive());
    }

    #[test]
    fn test_outcome_label() {
        let mut state = BattleState::new();
        state.game_over = true;
        state.player_won = true;
        assert_eq!(state.outcome_label(), "You Win!");

        state.player_won = false;
        assert_eq!(state.outcome_label(), "You Lose!");
    }

    #[test]
    fn test_damage_log_entry() {
        let entry = LogEntry::damage(Combatant::Monster, 9);
        assert_eq!(entry.actor, Combatant::Monster);
        assert_eq!(entry.kind, LogKind::Damage);
        assert_eq!(entry.amount, 9);
        assert_eq!(entry.text, "Monster takes 9 damage");
    }

    #[test]
    fn test_heal_log_entry() {
        let entry = LogEntry::heal(12);
        assert_eq!(entry.actor, Combatant::Player);
        assert_eq!(entry.kind, LogKind::Heal);
        assert_eq!(entry.amount, 12);
        assert_eq!(entry.text, "Player heals 12 life points");
    }

    #[test]
    fn test_combatant_names() {
        assert_eq!(Combatant::Player.name(), "Player");
        assert_eq!(Combatant::Monster.name(), "Monster");
    }
}
