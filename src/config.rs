//! Fixed gameplay constants. Coordinates are screen pixels, origin top-left.

// ── Screen & clock ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const TICKS_PER_SECOND: u32 = 30;

// ── Difficulty ───────────────────────────────────────────────────────────────

pub const INITIAL_SPEED: i32 = 10;
pub const MAX_SPEED: i32 = 23;
/// Score interval between speed-ups (and milestone cues).
pub const SPEED_UP_INTERVAL: u32 = 100;

// ── Jump ─────────────────────────────────────────────────────────────────────

/// Vertical distance covered per tick, both rising and falling.
pub const JUMP_STEP: i32 = 20;
pub const JUMP_HEIGHT: i32 = 150;

// ── Animation ────────────────────────────────────────────────────────────────

/// Fraction of a sprite frame advanced each tick.
pub const ANIMATION_STEP: f32 = 0.25;
pub const PLAYER_FRAMES: usize = 3;
pub const PTERODACTYL_FRAMES: usize = 2;

// ── Entity sizes ─────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 96;
pub const OBSTACLE_SIZE: i32 = 64;
pub const GROUND_TILE_SIZE: i32 = 64;
pub const CLOUD_SIZE: i32 = 96;

// ── Ground lines & spawn positions ───────────────────────────────────────────

/// Bottom edge of the player's sprite when standing.
pub const PLAYER_FOOT_LINE: i32 = SCREEN_HEIGHT - 14;
pub const PLAYER_CENTER_X: i32 = 100;
/// Bottom edge of the cactus sprite.
pub const CACTUS_BASE_LINE: i32 = SCREEN_HEIGHT - 24;
pub const PTERODACTYL_CENTER_Y: i32 = SCREEN_HEIGHT - 250;
pub const GROUND_TOP: i32 = SCREEN_HEIGHT - 64;

/// Enough tiles to cover the screen plus one spare.
pub const GROUND_TILE_COUNT: usize = (SCREEN_WIDTH / GROUND_TILE_SIZE) as usize + 2;
pub const CLOUD_COUNT: usize = 4;
/// Vertical bands a cloud may occupy.
pub const CLOUD_BANDS: [i32; 3] = [50, 100, 150];
/// Initial cloud distance from the right edge.
pub const CLOUD_OFFSETS: [i32; 3] = [30, 120, 210];
