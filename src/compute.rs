//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle and the collision masks) and
//! returns a brand-new `GameState`.  Side effects are limited to the injected
//! RNG and to sound cues queued on the returned state.

use rand::Rng;

use crate::config::*;
use crate::entities::{
    Body, Cloud, GameState, GameStatus, GroundTile, Obstacle, ObstacleKind, Player, SoundCue,
};
use crate::mask::{overlaps, Masks};
use crate::sprites::Frame;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh world: player on the ground, both obstacles parked past the
/// right edge, scenery spread across the screen.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        player: initial_player(),
        cactus: cactus(),
        pterodactyl: pterodactyl(),
        clouds: (0..CLOUD_COUNT).map(|_| spawn_cloud(&mut *rng)).collect(),
        ground: (0..GROUND_TILE_COUNT).map(ground_tile).collect(),
        score: 0,
        speed: INITIAL_SPEED,
        active: roll_obstacle(rng),
        status: GameStatus::Running,
        frame: 0,
        cues: Vec::new(),
    }
}

pub fn initial_player() -> Player {
    let ground_y = PLAYER_FOOT_LINE - PLAYER_SIZE;
    Player {
        body: Body {
            x: PLAYER_CENTER_X - PLAYER_SIZE / 2,
            y: ground_y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
        },
        anim: 0.0,
        is_jumping: false,
        ground_y,
    }
}

fn cactus() -> Obstacle {
    Obstacle {
        body: Body {
            x: SCREEN_WIDTH,
            y: CACTUS_BASE_LINE - OBSTACLE_SIZE,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        },
        kind: ObstacleKind::Ground,
        anim: 0.0,
    }
}

fn pterodactyl() -> Obstacle {
    Obstacle {
        body: Body {
            x: SCREEN_WIDTH,
            y: PTERODACTYL_CENTER_Y - OBSTACLE_SIZE / 2,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        },
        kind: ObstacleKind::Air,
        anim: 0.0,
    }
}

fn ground_tile(index: usize) -> GroundTile {
    GroundTile {
        body: Body {
            x: index as i32 * GROUND_TILE_SIZE,
            y: GROUND_TOP,
            width: GROUND_TILE_SIZE,
            height: GROUND_TILE_SIZE,
        },
    }
}

fn spawn_cloud(rng: &mut impl Rng) -> Cloud {
    Cloud {
        body: Body {
            x: SCREEN_WIDTH - pick(rng, &CLOUD_OFFSETS),
            y: pick(rng, &CLOUD_BANDS),
            width: CLOUD_SIZE,
            height: CLOUD_SIZE,
        },
    }
}

fn pick(rng: &mut impl Rng, options: &[i32]) -> i32 {
    options[rng.gen_range(0..options.len())]
}

/// Uniform choice between the two obstacle kinds.
pub fn roll_obstacle(rng: &mut impl Rng) -> ObstacleKind {
    if rng.gen_bool(0.5) {
        ObstacleKind::Ground
    } else {
        ObstacleKind::Air
    }
}

/// Move an obstacle back to the right screen edge.
fn park(obstacle: &Obstacle) -> Obstacle {
    Obstacle {
        body: Body {
            x: SCREEN_WIDTH,
            ..obstacle.body
        },
        ..obstacle.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Start a jump.  Only possible while running, standing on the ground and not
/// already jumping; otherwise the state is returned unchanged.
pub fn jump(state: &GameState) -> GameState {
    let player = &state.player;
    if state.status != GameStatus::Running
        || player.is_jumping
        || player.body.y != player.ground_y
    {
        return state.clone();
    }
    let mut cues = state.cues.clone();
    cues.push(SoundCue::Jump);
    GameState {
        player: Player {
            is_jumping: true,
            ..player.clone()
        },
        cues,
        ..state.clone()
    }
}

/// Leave GAME_OVER and start a new run.  Scenery keeps its position.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    log::info!("Restarting after a score of {}", state.score);

    let player = Player {
        body: Body {
            y: state.player.ground_y,
            ..state.player.body
        },
        is_jumping: false,
        ..state.player.clone()
    };
    GameState {
        player,
        cactus: park(&state.cactus),
        pterodactyl: park(&state.pterodactyl),
        score: 0,
        speed: INITIAL_SPEED,
        active: roll_obstacle(rng),
        status: GameStatus::Running,
        ..state.clone()
    }
}

// ── Per-entity updates ───────────────────────────────────────────────────────

/// Advance a fractional animation index, wrapping at `frames`.
pub fn advance_frame(anim: f32, frames: usize) -> f32 {
    let next = anim + ANIMATION_STEP;
    if next >= frames as f32 {
        0.0
    } else {
        next
    }
}

/// One tick of jump/fall motion plus the run animation.
///
/// Rising stops on the first step that reaches `ground_y - JUMP_HEIGHT` or
/// beyond; since the step does not divide the height the apex overshoots the
/// target by a few units.  Falling clamps onto `ground_y`.
pub fn advance_player(player: &Player) -> Player {
    let mut y = player.body.y;
    let mut is_jumping = player.is_jumping;

    if is_jumping {
        y -= JUMP_STEP;
        if y <= player.ground_y - JUMP_HEIGHT {
            is_jumping = false;
        }
    } else if y < player.ground_y {
        y = (y + JUMP_STEP).min(player.ground_y);
    } else {
        y = player.ground_y;
    }

    Player {
        body: Body { y, ..player.body },
        anim: advance_frame(player.anim, PLAYER_FRAMES),
        is_jumping,
        ground_y: player.ground_y,
    }
}

/// Scroll an obstacle, but only if it is the active kind.  The pterodactyl
/// flaps while it flies; the cactus has a single frame.
pub fn advance_obstacle(obstacle: &Obstacle, active: ObstacleKind, speed: i32) -> Obstacle {
    if obstacle.kind != active {
        return obstacle.clone();
    }
    let anim = match obstacle.kind {
        ObstacleKind::Air => advance_frame(obstacle.anim, PTERODACTYL_FRAMES),
        ObstacleKind::Ground => obstacle.anim,
    };
    Obstacle {
        body: Body {
            x: obstacle.body.x - speed,
            ..obstacle.body
        },
        anim,
        ..obstacle.clone()
    }
}

pub fn scroll_ground(tile: &GroundTile, speed: i32) -> GroundTile {
    let mut body = tile.body;
    body.x -= speed;
    if body.is_off_left() {
        body.x = SCREEN_WIDTH;
    }
    GroundTile { body }
}

/// Scroll a cloud; once it leaves the screen it re-enters on the right in a
/// freshly rolled band.
pub fn scroll_cloud(cloud: &Cloud, speed: i32, rng: &mut impl Rng) -> Cloud {
    let mut body = cloud.body;
    body.x -= speed;
    if body.is_off_left() {
        body.x = SCREEN_WIDTH;
        body.y = pick(rng, &CLOUD_BANDS);
    }
    Cloud { body }
}

// ── World-level policies ─────────────────────────────────────────────────────

/// Score one tick of survival.  Each positive multiple of
/// `SPEED_UP_INTERVAL` raises a milestone cue and, below the cap, the speed.
pub fn apply_score(state: &GameState) -> GameState {
    let score = state.score + 1;
    let mut speed = state.speed;
    let mut cues = state.cues.clone();

    if score % SPEED_UP_INTERVAL == 0 {
        cues.push(SoundCue::Milestone);
        if speed < MAX_SPEED {
            speed += 1;
            log::info!("Score {}: speed raised to {}", score, speed);
        }
    }

    GameState {
        score,
        speed,
        cues,
        ..state.clone()
    }
}

/// Once the active obstacle has fully left the screen, roll the next kind and
/// park both obstacles at the right edge.
pub fn select_obstacle(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.active_obstacle().body.is_off_left() {
        return state.clone();
    }
    let active = roll_obstacle(rng);
    log::debug!("Obstacle cleared at score {}, next is {:?}", state.score, active);
    GameState {
        cactus: park(&state.cactus),
        pterodactyl: park(&state.pterodactyl),
        active,
        ..state.clone()
    }
}

pub fn player_frame(player: &Player) -> Frame {
    Frame::Dino(player.anim as usize)
}

pub fn obstacle_frame(obstacle: &Obstacle) -> Frame {
    match obstacle.kind {
        ObstacleKind::Ground => Frame::Cactus,
        ObstacleKind::Air => Frame::Pterodactyl(obstacle.anim as usize),
    }
}

/// Pixel-accurate test of the player against the active obstacle.
pub fn collides(state: &GameState, masks: &Masks) -> bool {
    let player = &state.player;
    let obstacle = state.active_obstacle();
    overlaps(
        masks.get(player_frame(player)),
        (player.body.x, player.body.y),
        masks.get(obstacle_frame(obstacle)),
        (obstacle.body.x, obstacle.body.y),
    )
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the world by one tick.
///
/// Order: collision against the current positions first (a hit ends the run
/// and nothing else moves), then score and speed, then every entity, then the
/// obstacle switch.  While GAME_OVER only the frame counter moves.
pub fn tick(state: &GameState, masks: &Masks, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;

    if state.status == GameStatus::GameOver {
        return GameState {
            frame,
            ..state.clone()
        };
    }

    if collides(state, masks) {
        log::info!(
            "Game over on tick {} at score {} (speed {})",
            frame,
            state.score,
            state.speed
        );
        let mut cues = state.cues.clone();
        cues.push(SoundCue::Death);
        return GameState {
            status: GameStatus::GameOver,
            cues,
            frame,
            ..state.clone()
        };
    }

    let scored = apply_score(state);
    let speed = scored.speed;
    let active = scored.active;

    let player = advance_player(&scored.player);
    let cactus = advance_obstacle(&scored.cactus, active, speed);
    let pterodactyl = advance_obstacle(&scored.pterodactyl, active, speed);
    let clouds = scored
        .clouds
        .iter()
        .map(|cloud| scroll_cloud(cloud, speed, &mut *rng))
        .collect();
    let ground = scored
        .ground
        .iter()
        .map(|tile| scroll_ground(tile, speed))
        .collect();

    let moved = GameState {
        player,
        cactus,
        pterodactyl,
        clouds,
        ground,
        frame,
        ..scored
    };
    select_obstacle(&moved, rng)
}

// ── Render contract ──────────────────────────────────────────────────────────

/// One entity as the presentation layer should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawable {
    pub frame: Frame,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Drawable {
    fn new(frame: Frame, body: &Body) -> Self {
        Drawable {
            frame,
            x: body.x,
            y: body.y,
            width: body.width,
            height: body.height,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Back to front.
    pub drawables: Vec<Drawable>,
    pub score: u32,
    pub show_game_over: bool,
}

/// Draw order: clouds, ground, player, cactus, pterodactyl.
pub fn draw_list(state: &GameState) -> Vec<Drawable> {
    let clouds = state
        .clouds
        .iter()
        .map(|cloud| Drawable::new(Frame::Cloud, &cloud.body));
    let ground = state
        .ground
        .iter()
        .map(|tile| Drawable::new(Frame::Ground, &tile.body));
    let foreground = [
        Drawable::new(player_frame(&state.player), &state.player.body),
        Drawable::new(obstacle_frame(&state.cactus), &state.cactus.body),
        Drawable::new(obstacle_frame(&state.pterodactyl), &state.pterodactyl.body),
    ];
    clouds.chain(ground).chain(foreground).collect()
}

pub fn scene(state: &GameState) -> Scene {
    Scene {
        drawables: draw_list(state),
        score: state.score,
        show_game_over: state.status == GameStatus::GameOver,
    }
}
