//! Per-frame simulation step and the flap command
//!
//! One explicit-Euler tick per rendered frame; the host refresh rate drives
//! simulation speed directly.

use super::collision::{bird_hits_pipe, bird_out_of_bounds};
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::highscores::HighScore;

/// Advance the simulation by one frame.
///
/// Physics only runs while `Playing`; on other phases this is a no-op so
/// the crash pose stays frozen under the game-over message.
pub fn step(state: &mut GameState, best: &mut HighScore) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.bird.vel_y += GRAVITY;
    state.bird.pos.y += state.bird.vel_y;

    let mut crashed = false;
    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED;

        // Score once, the first frame the pipe is fully behind the bird
        if !pipe.passed && pipe.right_edge() < state.bird.pos.x {
            pipe.passed = true;
            state.score += 1;
            if best.raise(state.score) {
                state.high_score = best.value();
            }
        }

        if bird_hits_pipe(&state.bird, pipe) {
            crashed = true;
        }
    }

    if crashed || bird_out_of_bounds(&state.bird, &state.playfield) {
        state.phase = GamePhase::GameOver;
        state.message = Some(GameState::GAME_OVER_MESSAGE);
    }

    state.pipes.retain(|p| p.right_edge() > 0.0);
}

/// Apply the one-button flap command. Valid in any phase: starts the run
/// from the title screen, restarts after a crash, and always kicks the
/// bird upward.
pub fn flap(state: &mut GameState) {
    match state.phase {
        GamePhase::Ready => {
            state.phase = GamePhase::Playing;
            state.message = None;
        }
        GamePhase::GameOver => state.reset_run(),
        GamePhase::Playing => {}
    }

    state.bird.vel_y = JUMP_IMPULSE;
}

/// Drift the cloud layer one frame and drop clouds fully past the left
/// edge. Runs in every phase; the sky keeps moving on the title and
/// game-over screens.
pub fn drift_clouds(state: &mut GameState) {
    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud.speed;
    }
    state.clouds.retain(|c| c.pos.x + c.size * 2.0 > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Cloud, Pipe, Playfield};
    use glam::Vec2;

    fn start_playing() -> (GameState, HighScore) {
        let playfield = Playfield {
            width: 800.0,
            height: 600.0,
        };
        let mut state = GameState::new(playfield, 0);
        state.phase = GamePhase::Playing;
        state.message = None;
        (state, HighScore::new(0))
    }

    #[test]
    fn test_gravity_accumulates_linearly() {
        let (mut state, mut best) = start_playing();
        state.bird.vel_y = 0.0;

        for _ in 0..5 {
            step(&mut state, &mut best);
        }

        assert!((state.bird.vel_y - 5.0 * GRAVITY).abs() < 1e-5);
    }

    #[test]
    fn test_step_is_noop_outside_playing() {
        let (mut state, mut best) = start_playing();

        for phase in [GamePhase::Ready, GamePhase::GameOver] {
            state.phase = phase;
            state.bird.vel_y = 0.0;
            let y_before = state.bird.pos.y;
            step(&mut state, &mut best);
            assert_eq!(state.bird.pos.y, y_before);
            assert_eq!(state.bird.vel_y, 0.0);
        }
    }

    #[test]
    fn test_flap_sets_impulse_in_every_phase() {
        let (mut state, _) = start_playing();

        for phase in [GamePhase::Ready, GamePhase::Playing, GamePhase::GameOver] {
            state.phase = phase;
            state.bird.vel_y = 3.0;
            flap(&mut state);
            assert_eq!(state.bird.vel_y, JUMP_IMPULSE);
            assert_eq!(state.phase, GamePhase::Playing);
        }
    }

    #[test]
    fn test_flap_from_title_clears_message() {
        let playfield = Playfield {
            width: 800.0,
            height: 600.0,
        };
        let mut state = GameState::new(playfield, 0);
        assert_eq!(state.phase, GamePhase::Ready);

        flap(&mut state);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_crash_then_restart() {
        let (mut state, mut best) = start_playing();

        // Let the bird fall until it hits the floor
        let mut steps = 0;
        while state.phase == GamePhase::Playing {
            step(&mut state, &mut best);
            steps += 1;
            assert!(steps < 1_000, "bird never hit the floor");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, Some(GameState::GAME_OVER_MESSAGE));

        flap(&mut state);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.pos.x, BIRD_X);
        assert_eq!(state.bird.pos.y, 300.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.message, None);
        // The restarting flap also launches the bird
        assert_eq!(state.bird.vel_y, JUMP_IMPULSE);
    }

    #[test]
    fn test_scoring_is_idempotent_per_pipe() {
        let (mut state, mut best) = start_playing();
        // Right edge lands at 146.5 after one step, just past the bird at 150
        state.pipes.push(Pipe::new(70.5, 200.0));

        step(&mut state, &mut best);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);

        step(&mut state, &mut best);
        assert_eq!(state.score, 1, "a pipe scores exactly once");
        assert!(state.pipes[0].passed, "passed flag is never unset");
    }

    #[test]
    fn test_right_edge_touching_bird_does_not_score() {
        let (mut state, mut best) = start_playing();
        // After one step the right edge sits exactly at the bird's x
        state.pipes.push(Pipe::new(74.0, 200.0));

        step(&mut state, &mut best);
        assert_eq!(state.score, 0);

        step(&mut state, &mut best);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_high_score_tracks_and_persists_raises() {
        let (mut state, _) = start_playing();
        let mut best = HighScore::new(2);
        state.high_score = 2;

        // Three pipes spaced so each scores on a different frame
        state.pipes.push(Pipe::new(70.0, 200.0));
        state.pipes.push(Pipe::new(90.0, 200.0));
        state.pipes.push(Pipe::new(110.0, 200.0));

        for _ in 0..12 {
            step(&mut state, &mut best);
            if state.phase != GamePhase::Playing {
                break;
            }
        }

        assert_eq!(state.score, 3);
        assert_eq!(state.high_score, 3);
        assert_eq!(best.value(), 3);
    }

    #[test]
    fn test_high_score_never_decreases_across_runs() {
        let (mut state, mut best) = start_playing();
        state.score = 4;
        best.raise(4);
        state.high_score = best.value();

        // New run scores less
        state.reset_run();
        state.pipes.push(Pipe::new(70.5, 200.0));
        step(&mut state, &mut best);

        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 4);
        assert_eq!(best.value(), 4);
    }

    #[test]
    fn test_pipe_collision_ends_the_run() {
        let (mut state, mut best) = start_playing();
        state.bird.pos.y = 100.0;
        state.bird.vel_y = 0.0;
        // Gate well below the bird; bird top pokes above it after one step
        state.pipes.push(Pipe::new(140.0, 150.0));

        step(&mut state, &mut best);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, Some(GameState::GAME_OVER_MESSAGE));
    }

    #[test]
    fn test_prune_boundary_is_exact() {
        let (mut state, mut best) = start_playing();
        // After the -4 scroll: x = -80 (right edge 0, pruned) and
        // x = -79 (right edge 1, retained)
        state.pipes.push(Pipe::new(-76.0, 280.0));
        state.pipes.push(Pipe::new(-75.0, 280.0));

        step(&mut state, &mut best);

        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, -79.0);
    }

    #[test]
    fn test_pruned_pipes_keep_creation_order() {
        let (mut state, mut best) = start_playing();
        state.pipes.push(Pipe::new(-75.0, 280.0));
        state.pipes.push(Pipe::new(300.0, 280.0));
        state.pipes.push(Pipe::new(500.0, 280.0));

        step(&mut state, &mut best);

        let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-79.0, 296.0, 496.0]);
    }

    #[test]
    fn test_clouds_drift_in_any_phase() {
        let (mut state, _) = start_playing();
        state.phase = GamePhase::GameOver;
        state.push_cloud(Cloud {
            pos: Vec2::new(400.0, 100.0),
            size: 50.0,
            speed: 1.5,
        });

        drift_clouds(&mut state);

        assert_eq!(state.clouds[0].pos.x, 398.5);
    }

    #[test]
    fn test_clouds_prune_past_left_edge() {
        let (mut state, _) = start_playing();
        state.push_cloud(Cloud {
            pos: Vec2::new(-120.0, 100.0),
            size: 50.0,
            speed: 2.0,
        });
        state.push_cloud(Cloud {
            pos: Vec2::new(200.0, 100.0),
            size: 50.0,
            speed: 2.0,
        });

        drift_clouds(&mut state);

        assert_eq!(state.clouds.len(), 1);
        assert_eq!(state.clouds[0].pos.x, 198.0);
    }
}
