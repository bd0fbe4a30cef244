//! Session rules: scattering, collection, battery, phases and restart.

use engine_vacuum::game_state::{
    collectibles::{Collectibles, CAPTURE_RADIUS, COLLECTIBLE_COUNT},
    GameOverReason, GamePhase, GameState, Robot,
};
use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use robovac_framework_common::input::InputSnapshot;

/// One battery charge lasts exactly this many ticks.
const BATTERY_TICKS: usize = 2000;

fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

fn restart_pressed() -> InputSnapshot {
    InputSnapshot {
        restart: true,
        ..InputSnapshot::default()
    }
}

// --- scattering ---

#[test]
fn scatter_places_objects_on_the_integer_grid() {
    let mut rng = StdRng::seed_from_u64(42);
    let collectibles = Collectibles::scatter(&mut rng, COLLECTIBLE_COUNT);

    assert_eq!(collectibles.len(), COLLECTIBLE_COUNT);
    for position in collectibles.positions() {
        assert!(
            (-9.0..=8.0).contains(&position.x),
            "x out of grid: {position:?}"
        );
        assert!(
            (-9.0..=8.0).contains(&position.z),
            "z out of grid: {position:?}"
        );
        assert_eq!(position.x.fract(), 0.0, "x must be integral: {position:?}");
        assert_eq!(position.z.fract(), 0.0, "z must be integral: {position:?}");
        assert_eq!(position.y, 0.2, "objects rest on the floor: {position:?}");
    }
}

#[test]
fn scatter_is_deterministic_for_a_seed() {
    let mut first_rng = StdRng::seed_from_u64(7);
    let mut second_rng = StdRng::seed_from_u64(7);
    let first = Collectibles::scatter(&mut first_rng, COLLECTIBLE_COUNT);
    let second = Collectibles::scatter(&mut second_rng, COLLECTIBLE_COUNT);
    assert_eq!(first, second);
}

// --- collection ---

#[test]
fn objects_within_the_capture_radius_are_removed() {
    let mut collectibles = Collectibles::from_positions(vec![
        Vec3::new(0.0, 0.2, 0.0),
        Vec3::new(0.3, 0.2, 0.3),
        Vec3::new(5.0, 0.2, 5.0),
    ]);
    let robot = Vec3::new(0.0, 0.5, 0.0);

    assert_eq!(collectibles.collect_near(robot), 2);
    assert_eq!(collectibles.len(), 1);
}

#[test]
fn collection_is_idempotent() {
    let mut collectibles = Collectibles::from_positions(vec![Vec3::new(0.0, 0.2, 0.0)]);
    let robot = Vec3::new(0.0, 0.5, 0.0);

    assert_eq!(collectibles.collect_near(robot), 1);
    assert_eq!(
        collectibles.collect_near(robot),
        0,
        "a second pass over the same spot must remove nothing"
    );
}

#[test]
fn an_object_exactly_at_the_radius_stays() {
    let mut collectibles =
        Collectibles::from_positions(vec![Vec3::new(CAPTURE_RADIUS, 0.0, 0.0)]);
    assert_eq!(collectibles.collect_near(Vec3::ZERO), 0);
}

#[test]
fn duplicate_positions_count_separately() {
    let spot = Vec3::new(0.0, 0.2, 0.0);
    let mut collectibles = Collectibles::from_positions(vec![spot, spot]);
    assert_eq!(collectibles.collect_near(Vec3::new(0.0, 0.5, 0.0)), 2);
}

#[test]
fn score_tracks_removed_objects() {
    let mut state = GameState::with_seed(42);
    state.collectibles = Collectibles::from_positions(vec![
        Vec3::new(0.0, 0.2, 0.0),
        Vec3::new(4.0, 0.2, 4.0),
    ]);
    state.update(&idle());
    assert_eq!(state.score, 1, "the object under the robot is collected");
    assert_eq!(state.collectibles.len(), 1);
}

// --- battery and terminal phases ---

#[test]
fn battery_lasts_exactly_two_thousand_ticks() {
    let mut state = GameState::with_seed(42);
    // keep one unreachable object so the floor is never cleared
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(8.0, 0.2, 8.0)]);

    for tick in 0..BATTERY_TICKS - 1 {
        state.update(&idle());
        assert_eq!(
            state.phase,
            GamePhase::Playing,
            "still playing after tick {tick}"
        );
    }
    state.update(&idle());
    assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::Depleted));
    assert!(state.battery.is_depleted());
}

#[test]
fn battery_does_not_drain_during_game_over() {
    let mut state = GameState::with_seed(42);
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(8.0, 0.2, 8.0)]);
    for _ in 0..BATTERY_TICKS {
        state.update(&idle());
    }
    assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::Depleted));

    let battery = state.battery;
    for _ in 0..100 {
        state.update(&idle());
    }
    assert_eq!(state.battery, battery, "game over freezes the battery");
}

#[test]
fn clearing_the_floor_ends_the_game() {
    let mut state = GameState::with_seed(42);
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(0.0, 0.2, 0.0)]);
    state.update(&idle());
    assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::Cleared));
    assert_eq!(state.score, 1);
}

#[test]
fn depletion_wins_when_both_conditions_fire_on_the_same_tick() {
    let mut state = GameState::with_seed(42);
    for _ in 0..BATTERY_TICKS - 1 {
        state.battery.drain();
    }
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(0.0, 0.2, 0.0)]);

    // this tick collects the last object and empties the battery
    state.update(&idle());
    assert_eq!(state.score, 1);
    assert!(state.collectibles.is_empty());
    assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::Depleted));
}

#[test]
fn movement_input_is_ignored_during_game_over() {
    let mut state = GameState::with_seed(42);
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(8.0, 0.2, 8.0)]);
    for _ in 0..BATTERY_TICKS {
        state.update(&idle());
    }
    let position = state.robot.position;

    let forward = InputSnapshot {
        forward: true,
        ..InputSnapshot::default()
    };
    for _ in 0..50 {
        state.update(&forward);
    }
    assert_eq!(state.robot.position, position);
}

// --- restart ---

#[test]
fn restart_resets_the_whole_session() {
    let mut state = GameState::with_seed(42);
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(0.0, 0.2, 0.0)]);
    state.update(&idle());
    assert!(matches!(state.phase, GamePhase::GameOver(_)));

    state.update(&restart_pressed());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert!((state.battery.percent() - 100.0).abs() < f32::EPSILON);
    assert_eq!(state.collectibles.len(), COLLECTIBLE_COUNT);
    assert_eq!(state.robot, Robot::new());
}

#[test]
fn restart_is_ignored_while_playing() {
    let mut state = GameState::with_seed(42);
    // out of reach, so the tick itself collects nothing
    state.collectibles = Collectibles::from_positions(vec![Vec3::new(5.0, 0.2, 5.0)]);
    let before = state.collectibles.clone();
    state.update(&restart_pressed());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(
        state.collectibles, before,
        "mid-game restart must not reshuffle the floor"
    );
    assert!(
        state.battery.percent() < 100.0,
        "the tick still drains the battery"
    );
}
