//! All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Cactus, rooted on the ground line.
    Ground,
    /// Pterodactyl, flying at head height.
    Air,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Presentation-side effects fired by state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Death,
    Milestone,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Screen-space rectangle of a movable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Body {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// True once the right edge has scrolled past the left screen border.
    pub fn is_off_left(&self) -> bool {
        self.right() < 0
    }
}

// ── Player & obstacles ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    /// Fractional animation frame; the drawn frame is its integer part.
    pub anim: f32,
    pub is_jumping: bool,
    /// Resting Y coordinate.
    pub ground_y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub body: Body,
    pub kind: ObstacleKind,
    pub anim: f32,
}

// ── Scenery ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundTile {
    pub body: Body,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub cactus: Obstacle,
    pub pterodactyl: Obstacle,
    pub clouds: Vec<Cloud>,
    pub ground: Vec<GroundTile>,
    /// Elapsed RUNNING ticks since the last (re)start.
    pub score: u32,
    /// Horizontal scroll per tick.
    pub speed: i32,
    /// The only obstacle kind that moves and collides.
    pub active: ObstacleKind,
    pub status: GameStatus,
    /// Total ticks processed, including GAME_OVER ones.
    pub frame: u64,
    /// Cues raised since the host last drained them.
    pub cues: Vec<SoundCue>,
}

impl GameState {
    pub fn active_obstacle(&self) -> &Obstacle {
        match self.active {
            ObstacleKind::Ground => &self.cactus,
            ObstacleKind::Air => &self.pterodactyl,
        }
    }
}
