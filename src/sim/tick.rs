//! Fixed-step simulation tick
//!
//! One tick per rendered frame. Order within a playing tick:
//! commands -> speed -> segments -> object sweep -> player -> survival score.

use super::collision::sweep;
use super::command::CommandQueue;
use super::event::GameEvent;
use super::state::{GamePhase, GameState};

/// Advance the game state by one step
pub fn tick(state: &mut GameState, commands: &mut CommandQueue) {
    for command in commands.drain() {
        state.apply(command);
    }

    // Nothing moves outside a run; frames just re-render the frozen state
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.speed.tick();
    let speed = state.speed.current;
    state.distance += speed;

    state.world.advance_segments(speed, &state.tuning);

    let report = sweep(
        &mut state.world.objects,
        state.player.position(),
        speed,
        &state.tuning,
    );

    if report.coins > 0 {
        state.score.coins += report.coins;
        state.score.raw += report.coins as u64 * state.tuning.coin_value;
        for _ in 0..report.coins {
            state.emit(GameEvent::CoinCollected);
        }
    }

    if let Some(obstacle) = report.hit {
        state.publish_score();
        state.end_run(obstacle);
        return;
    }

    state.player.tick(&state.tuning);

    state.score.raw += state.tuning.survival_bonus;
    state.publish_score();
}
