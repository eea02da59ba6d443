//! State transitions for the flappy game: physics, pipe spawning, collision
//! detection, scoring, and the phase machine.

use super::types::{
    Bird, GamePhase, Pipe, Session, BIRD_RADIUS, BIRD_X, FIELD_HEIGHT, GRAVITY, JUMP_IMPULSE,
    PIPE_GAP, PIPE_SPEED, PIPE_WIDTH, SPAWN_PERIOD,
};
use rand::Rng;

/// Advance the bird one tick: constant gravity, then integrate position.
/// No bounds clamping here; boundaries are the evaluator's concern.
pub fn step_physics(bird: &mut Bird) {
    bird.vy += GRAVITY;
    bird.y += bird.vy;
}

/// Process one game tick. No-op unless the session is Playing.
///
/// Order within a tick: bird physics, boundary check, pipe advance, spawn,
/// then scoring / collision / pruning. Any elimination transitions to
/// GameOver and halts the remainder of the tick. Pipes advance before the
/// spawner runs, so a pipe spawned this tick still sits exactly at the
/// right field edge when the tick ends.
pub fn tick<R: Rng>(session: &mut Session, rng: &mut R) {
    if session.phase != GamePhase::Playing {
        return;
    }

    step_physics(&mut session.bird);

    // Ceiling/ground elimination
    if session.bird.y - BIRD_RADIUS < 0.0 || session.bird.y + BIRD_RADIUS > FIELD_HEIGHT {
        game_over(session);
        return;
    }

    for pipe in &mut session.pipes {
        pipe.x -= PIPE_SPEED;
    }

    session.frame += 1;
    if session.frame % SPAWN_PERIOD == 0 {
        session.spawn_pipe(rng);
    }

    // Scoring and collision use different horizontal thresholds and both
    // run every tick, independently. A pipe scores the first tick its
    // right edge is fully past the bird's leftmost extent.
    for pipe in &mut session.pipes {
        if !pipe.scored && pipe.x + PIPE_WIDTH < BIRD_X - BIRD_RADIUS {
            pipe.scored = true;
            session.score += 1;
        }
    }

    let bird = session.bird;
    if session.pipes.iter().any(|pipe| bird_hits_pipe(&bird, pipe)) {
        game_over(session);
        return;
    }

    // Drop pipes fully past the left edge. retain evaluates every element,
    // so removal never skips a still-active neighbor.
    session.pipes.retain(|p| p.x + PIPE_WIDTH >= 0.0);
}

/// Activate input: flap while Playing, begin the run from Start, ignored
/// once the run has ended (restart is a distinct action).
pub fn jump(session: &mut Session) {
    match session.phase {
        GamePhase::Playing => session.bird.vy = JUMP_IMPULSE,
        GamePhase::Start => session.reset(),
        GamePhase::GameOver => {}
    }
}

/// Explicit restart, only meaningful from the game-over screen.
pub fn restart(session: &mut Session) {
    if session.phase == GamePhase::GameOver {
        session.reset();
    }
}

/// Axis-aligned overlap test: the bird collides when its horizontal extent
/// intersects the pipe's and its vertical extent leaves the gap band.
fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps = BIRD_X + BIRD_RADIUS > pipe.x && BIRD_X - BIRD_RADIUS < pipe.x + PIPE_WIDTH;
    overlaps && (bird.y - BIRD_RADIUS < pipe.top || bird.y + BIRD_RADIUS > pipe.top + PIPE_GAP)
}

/// Elimination: enter GameOver and fold the run's score into the best.
/// Durable persistence of the new best is the caller's concern.
fn game_over(session: &mut Session) {
    session.phase = GamePhase::GameOver;
    if session.score > session.best_score {
        session.best_score = session.score;
    }
}
