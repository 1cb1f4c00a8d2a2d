// Health
pub const MAX_HEALTH: u32 = 100;

// Damage draws, half-open ranges fed to gen_range(MIN..MAX)
pub const PLAYER_ATTACK_MIN: u32 = 5;
pub const PLAYER_ATTACK_MAX: u32 = 12;
pub const MONSTER_ATTACK_MIN: u32 = 5;
pub const MONSTER_ATTACK_MAX: u32 = 15;

// Healing (single use per game)
pub const HEAL_MIN: u32 = 5;
pub const HEAL_MAX: u32 = 18;

// Special attack
pub const SPECIAL_ATTACK_MIN: u32 = 8;
pub const SPECIAL_ATTACK_MAX: u32 = 25;
pub const SPECIAL_UNLOCK_ATTACKS: u32 = 3;

// Event loop
pub const INPUT_POLL_INTERVAL_MS: u64 = 50;
