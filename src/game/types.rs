//! Flappy game data structures and tuning constants.
//!
//! World coordinates follow screen convention: origin top-left, y increasing
//! downward. Geometry is in float world units, not terminal cells; the
//! renderer scales to whatever area it is given.

use rand::Rng;

/// Play field dimensions in world units.
pub const FIELD_WIDTH: f64 = 480.0;
pub const FIELD_HEIGHT: f64 = 640.0;

/// Bird fixed horizontal position (center) and collision radius.
pub const BIRD_X: f64 = 80.0;
pub const BIRD_RADIUS: f64 = 20.0;

/// Velocity change per tick (positive = downward).
pub const GRAVITY: f64 = 0.6;

/// Flap velocity override (negative = upward). Replaces the current
/// velocity, never adds to it.
pub const JUMP_IMPULSE: f64 = -12.0;

/// Pipe geometry and scroll speed (world units per tick).
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 180.0;
pub const PIPE_SPEED: f64 = 3.0;

/// A pipe spawns whenever the frame counter is an exact multiple of this.
pub const SPAWN_PERIOD: u64 = 90;

/// Minimum distance the gate keeps from the top and bottom field edges.
pub const EDGE_MARGIN: f64 = 50.0;

/// Height of the decorative ground band along the bottom of the field.
pub const GROUND_BAND: f64 = 50.0;

/// Frame cadence of the main loop in milliseconds (~60 ticks/second).
pub const FRAME_MS: u64 = 16;

/// Session phase. Exactly one is held at a time and gates which operations
/// are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first activate input.
    Start,
    /// Tick loop running.
    Playing,
    /// Terminal for the run; offers restart.
    GameOver,
}

/// The controllable entity. Horizontal position and radius are fixed; only
/// the vertical state varies.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Vertical position of the center in world units.
    pub y: f64,
    /// Vertical velocity in world units per tick (positive = downward).
    pub vy: f64,
}

/// A pipe pair: top segment, gap, bottom segment.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// X of the left edge; decreases every tick.
    pub x: f64,
    /// Height of the top segment.
    pub top: f64,
    /// Height of the bottom segment. top + PIPE_GAP + bottom == FIELD_HEIGHT.
    pub bottom: f64,
    /// Set once the bird has passed this pipe, preventing double-counting.
    pub scored: bool,
}

/// One game session: the explicit world object every routine operates on.
/// Nothing about the game lives in process globals.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first. Pruned in place every tick.
    pub pipes: Vec<Pipe>,
    /// Pipes passed this run.
    pub score: u32,
    /// Best score across runs. Monotonically non-decreasing for the
    /// lifetime of the process.
    pub best_score: u32,
    /// Ticks elapsed since the run entered Playing.
    pub frame: u64,
}

impl Session {
    /// Create a session on the start screen with a previously loaded best.
    pub fn new(best_score: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            bird: Bird {
                y: FIELD_HEIGHT / 2.0,
                vy: 0.0,
            },
            pipes: Vec::new(),
            score: 0,
            best_score,
            frame: 0,
        }
    }

    /// Reset for a fresh run and enter Playing. Shared by the Start
    /// activate path and the GameOver restart path.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.bird = Bird {
            y: FIELD_HEIGHT / 2.0,
            vy: 0.0,
        };
        self.pipes.clear();
        self.score = 0;
        self.frame = 0;
    }

    /// Spawn a pipe at the right field edge with a uniformly random gate
    /// position, keeping EDGE_MARGIN clear of both field edges.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let top = rng.gen_range(EDGE_MARGIN..FIELD_HEIGHT - PIPE_GAP - EDGE_MARGIN);
        self.pipes.push(Pipe {
            x: FIELD_WIDTH,
            top,
            bottom: FIELD_HEIGHT - (top + PIPE_GAP),
            scored: false,
        });
    }
}
