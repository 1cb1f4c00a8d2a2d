//! Battle action handlers.
//!
//! Each action mutates the [`BattleState`] as one atomic turn and returns
//! `true` if it was applied. Precondition violations (acting after game
//! over, healing twice, firing an unready special) are silent no-ops, not
//! errors: the view is expected to disable the corresponding control, and
//! the `false` return is there for callers that want to check anyway.

use super::types::{BattleState, Combatant, LogEntry};
use crate::constants::*;
use rand::Rng;

/// Player actions, UI-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleInput {
    Attack,
    Heal,
    Special,
    Forfeit,
    Reset,
}

/// Dispatch a player action. Returns true if the action was applied.
pub fn process_input<R: Rng>(state: &mut BattleState, input: BattleInput, rng: &mut R) -> bool {
    match input {
        BattleInput::Attack => attack(state, rng),
        BattleInput::Heal => heal(state, rng),
        BattleInput::Special => use_special(state, rng),
        BattleInput::Forfeit => forfeit(state),
        BattleInput::Reset => {
            reset(state);
            true
        }
    }
}

/// Resolve one attack turn: the player strikes the monster and the monster
/// strikes back, both rolled independently. Both log entries are recorded
/// even if the turn ends the fight.
///
/// On a double KO the player loses: the monster's health is evaluated
/// first, the player's second, and the last writer sets the outcome.
pub fn attack<R: Rng>(state: &mut BattleState, rng: &mut R) -> bool {
    if state.game_over {
        return false;
    }

    let player_damage = rng.gen_range(PLAYER_ATTACK_MIN..PLAYER_ATTACK_MAX);
    let monster_damage = rng.gen_range(MONSTER_ATTACK_MIN..MONSTER_ATTACK_MAX);

    state.monster_health = state.monster_health.saturating_sub(player_damage);
    if state.monster_health == 0 {
        state.game_over = true;
        state.player_won = true;
    }

    state.player_health = state.player_health.saturating_sub(monster_damage);
    if state.player_health == 0 {
        state.game_over = true;
        state.player_won = false;
    }

    // Newest-first: the player's entry ends up at the very front.
    state
        .battle_log
        .push_front(LogEntry::damage(Combatant::Monster, player_damage));
    state
        .battle_log
        .push_front(LogEntry::damage(Combatant::Player, monster_damage));

    state.attack_count += 1;
    if state.attack_count % SPECIAL_UNLOCK_ATTACKS == 0 {
        state.special_ready = true;
    }

    true
}

/// Restore a random amount of player health, capped at max. Single use per
/// game; does not consume an attack turn or advance the special counter.
pub fn heal<R: Rng>(state: &mut BattleState, rng: &mut R) -> bool {
    if state.game_over || state.heal_used {
        return false;
    }

    let amount = rng.gen_range(HEAL_MIN..HEAL_MAX);
    state.player_health = (state.player_health + amount).min(MAX_HEALTH);
    state.battle_log.push_front(LogEntry::heal(amount));
    state.heal_used = true;

    true
}

/// Fire the charged special attack at the monster. The monster does not
/// strike back. Readiness is consumed unconditionally.
///
/// The log entry goes to the BACK of the log, unlike attack and heal.
/// This mirrors the original game's observed behavior; it is likely an
/// inconsistency there, but it is user-visible so it is kept until
/// product says otherwise.
pub fn use_special<R: Rng>(state: &mut BattleState, rng: &mut R) -> bool {
    if state.game_over || !state.special_ready {
        return false;
    }

    let player_damage = rng.gen_range(SPECIAL_ATTACK_MIN..SPECIAL_ATTACK_MAX);
    state.monster_health = state.monster_health.saturating_sub(player_damage);
    state
        .battle_log
        .push_back(LogEntry::damage(Combatant::Monster, player_damage));

    if state.monster_health == 0 {
        state.game_over = true;
        state.player_won = true;
    }

    state.special_ready = false;
    true
}

/// Concede the duel. Drops the player to zero health and ends the game as
/// a loss without producing a log entry.
pub fn forfeit(state: &mut BattleState) -> bool {
    if state.game_over {
        return false;
    }

    state.player_health = 0;
    state.game_over = true;
    state.player_won = false;
    true
}

/// Start a new game. Always succeeds, even mid-fight.
pub fn reset(state: &mut BattleState) {
    *state = BattleState::new();
}
