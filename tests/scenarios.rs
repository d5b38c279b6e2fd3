//! End-to-end gameplay scenarios driven through the command queue

use glam::Vec3;

use street_runner::Tuning;
use street_runner::sim::{
    Command, CommandQueue, GameEvent, GamePhase, GameState, ObjectKind, SpawnedObject, tick,
};

fn ready(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    let mut commands = CommandQueue::new();
    commands.push(Command::AssetsReady);
    tick(&mut state, &mut commands);
    assert_eq!(state.phase, GamePhase::Ready);
    state
}

fn start(state: &mut GameState) {
    let mut commands = CommandQueue::new();
    commands.push(Command::StartOrRestart);
    tick(state, &mut commands);
    assert_eq!(state.phase, GamePhase::Playing);
}

/// Speed the next tick will move objects by
fn next_speed(state: &GameState) -> f32 {
    (state.speed.current + state.speed.acceleration).min(state.speed.max)
}

fn place(state: &mut GameState, id: u32, kind: ObjectKind, pos: Vec3) {
    state.world.objects.push(SpawnedObject { id, kind, pos });
}

#[test]
fn hundred_ticks_add_ten_displayed_points() {
    let mut state = ready(1);
    let mut commands = CommandQueue::new();
    commands.push(Command::StartOrRestart);

    for _ in 0..100 {
        tick(&mut state, &mut commands);
    }

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score.raw, 100);
    assert_eq!(state.display_score(), 10);

    let shown: Vec<u64> = state
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::ScoreChanged(s) => Some(s),
            _ => None,
        })
        .collect();
    assert_eq!(shown, (0..=10).collect::<Vec<u64>>());
}

#[test]
fn jump_goes_up_and_lands() {
    let mut state = ready(2);
    start(&mut state);
    assert!(state.player.grounded);
    assert_eq!(state.player.height, 0.0);

    let mut commands = CommandQueue::new();
    commands.push(Command::Jump);
    state.apply(Command::Jump);
    assert_eq!(state.player.vertical_vel, 0.15);
    assert!(!state.player.grounded);

    let mut ticks = 0;
    while !state.player.grounded {
        tick(&mut state, &mut CommandQueue::new());
        ticks += 1;
        assert!(ticks < 60, "runner never landed");
    }
    assert_eq!(state.player.height, 0.0);

    // A queued jump while grounded starts a new one
    tick(&mut state, &mut commands);
    assert!(!state.player.grounded);
}

#[test]
fn near_coin_collected_far_coin_left() {
    let mut state = ready(3);
    start(&mut state);
    state.world.objects.clear();

    let v = next_speed(&state);
    place(&mut state, 1, ObjectKind::Coin, Vec3::new(0.0, 0.0, 1.0 + v));
    place(&mut state, 2, ObjectKind::Coin, Vec3::new(2.0, 0.0, v));
    let raw = state.score.raw;

    tick(&mut state, &mut CommandQueue::new());

    assert_eq!(state.world.objects.len(), 1);
    assert_eq!(state.world.objects[0].id, 2);
    // 10 for the coin plus the survival point
    assert_eq!(state.score.raw, raw + 11);
}

#[test]
fn obstacle_ends_run_and_freezes_world() {
    let mut state = ready(4);
    start(&mut state);
    state.world.objects.clear();

    let v = next_speed(&state);
    place(&mut state, 7, ObjectKind::Obstacle { size: 2.0 }, Vec3::new(0.0, 0.0, 1.0 + v));
    place(&mut state, 8, ObjectKind::Obstacle { size: 2.0 }, Vec3::new(0.0, 0.5, v));

    tick(&mut state, &mut CommandQueue::new());
    assert_eq!(state.phase, GamePhase::GameOver);

    let speed = state.speed.current;
    let raw = state.score.raw;
    let objects = state.world.objects.clone();

    let mut commands = CommandQueue::new();
    for _ in 0..30 {
        commands.push(Command::MoveLeft);
        commands.push(Command::Jump);
        tick(&mut state, &mut commands);
    }

    assert_eq!(state.speed.current, speed);
    assert_eq!(state.score.raw, raw);
    assert_eq!(state.world.objects, objects);
    assert_eq!(state.player.lane, 0.0);

    let game_overs: Vec<GameEvent> = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GameOverEntered(_)))
        .collect();
    assert_eq!(game_overs, vec![GameEvent::GameOverEntered(state.display_score())]);
}

#[test]
fn segment_past_trailing_edge_recycles_with_fresh_batch() {
    let tuning = Tuning::default();
    let mut state = ready(5);
    state.world.segments[0].z = -50.8;
    let before = state.world.objects.len();

    let recycled = state.world.advance_segments(0.2, &tuning);

    assert_eq!(recycled, 1);
    assert!((state.world.segments[0].z - 199.0).abs() < 1e-3);
    let fresh = &state.world.objects[before..];
    assert_eq!(fresh.len(), 18);
    assert!(fresh.iter().all(|o| o.pos.z >= 198.99 && o.pos.z <= 249.01));
}

#[test]
fn restart_after_game_over_starts_clean() {
    let mut state = ready(6);
    start(&mut state);
    state.world.objects.clear();
    let v = next_speed(&state);
    place(&mut state, 9, ObjectKind::Obstacle { size: 2.0 }, Vec3::new(0.0, 0.0, v));
    tick(&mut state, &mut CommandQueue::new());
    assert_eq!(state.phase, GamePhase::GameOver);

    let mut commands = CommandQueue::new();
    commands.push(Command::StartOrRestart);
    tick(&mut state, &mut commands);

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.runs, 2);
    assert_eq!(state.score.raw, 1);
    assert_eq!(state.time_ticks, 1);
    // Fresh layout: all five segments populated again
    assert_eq!(state.world.objects.len(), 5 * 18);
}

#[test]
fn long_run_keeps_streaming() {
    let mut state = ready(7);
    start(&mut state);

    // The center lane is never blocked, so this run cannot end
    for _ in 0..5000 {
        tick(&mut state, &mut CommandQueue::new());
    }

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.speed.current, 1.5);
    assert!(state.world.recycles > 20);
    let trailing = state.tuning.trailing_boundary();
    let leading = state.tuning.leading_boundary();
    assert!(state
        .world
        .objects
        .iter()
        .all(|o| o.pos.z >= trailing && o.pos.z < leading));
    // Bounded pool: never more than two batches per segment in flight
    assert!(state.world.objects.len() <= 2 * 5 * 18);
}
