// Experience and leveling
pub const EXPERIENCE_PER_LEVEL: i32 = 100;
pub const EXPERIENCE_START: i32 = 100;
pub const LEVELS_PER_RANK: i32 = 10;
pub const LEVEL_MIN: i32 = 1;
pub const LEVEL_MAX: i32 = 100;
pub const EXPERIENCE_MAX: i32 = EXPERIENCE_PER_LEVEL * LEVEL_MAX;

// Battle rewards
pub const SAME_LEVEL_EXPERIENCE: i32 = 10;
pub const ONE_BELOW_EXPERIENCE: i32 = 5;
pub const STRONGER_ENEMY_EXPERIENCE_FACTOR: i32 = 20;
pub const DEFEAT_LEVEL_GAP: i32 = 5;

// Outcome labels
pub const INVALID_LEVEL_LABEL: &str = "Invalid level";
pub const EASY_FIGHT_LABEL: &str = "Easy fight";
pub const GOOD_FIGHT_LABEL: &str = "A good fight";
pub const INTENSE_FIGHT_LABEL: &str = "An intense fight";
pub const DEFEATED_LABEL: &str = "You've been defeated";
pub const NOT_STRONG_ENOUGH_LABEL: &str = "Not strong enough";

// Simulator defaults
pub const SIM_DEFAULT_RUNS: u32 = 1000;
pub const SIM_DEFAULT_MAX_ACTIONS: u64 = 10_000;
pub const SIM_DEFAULT_TRAINING_CHANCE: f64 = 0.2;
pub const SIM_ENEMY_WINDOW_BELOW: i32 = 4;
pub const SIM_ENEMY_WINDOW_ABOVE: i32 = 6;
