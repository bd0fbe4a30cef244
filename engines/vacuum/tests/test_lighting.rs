//! Derived light values and the render snapshot.

use engine_vacuum::{
    game_state::{GamePhase, GameState, Robot, WALL_LAMPS},
    lighting::Spotlight,
    render_state::RenderState,
};
use glam::Vec3;
use robovac_framework_common::input::InputSnapshot;

const EPSILON: f32 = 1e-5;

#[test]
fn spotlight_follows_the_robot_heading() {
    let robot = Robot::new();
    let spotlight = Spotlight::from_robot(&robot);

    assert!(spotlight.direction.abs_diff_eq(robot.heading, EPSILON));
    assert!(spotlight
        .position
        .abs_diff_eq(robot.position + robot.heading * 0.5, EPSILON));
}

#[test]
fn spotlight_direction_is_normalized_after_many_turns() {
    let mut robot = Robot::new();
    let turning = InputSnapshot {
        turn_right: true,
        ..InputSnapshot::default()
    };
    for _ in 0..500 {
        robot.apply(&turning);
    }
    let spotlight = Spotlight::from_robot(&robot);
    assert!((spotlight.direction.length() - 1.0).abs() < EPSILON);
}

#[test]
fn cutoff_cosines_span_the_cone() {
    let spotlight = Spotlight::from_robot(&Robot::new());
    assert!(
        (spotlight.cutoff_cos - 55.0_f32.to_radians().cos()).abs() < EPSILON,
        "inner cone is 55 degrees"
    );
    assert!(
        (spotlight.outer_cutoff_cos - 70.0_f32.to_radians().cos()).abs() < EPSILON,
        "outer cone is 70 degrees"
    );
    assert!(spotlight.cutoff_cos > spotlight.outer_cutoff_cos);
    assert_eq!(spotlight.color, Vec3::ONE);
}

#[test]
fn lamps_are_fixed_to_the_back_wall() {
    for lamp in WALL_LAMPS {
        assert_eq!(lamp.position.y, 3.0);
        assert_eq!(lamp.position.z, -9.8);
    }
    assert_eq!(WALL_LAMPS.len(), 3);
}

#[test]
fn render_state_mirrors_the_game_state() {
    let state = GameState::with_seed(42);
    let render_state = RenderState::new(&state);

    assert_eq!(render_state.robot_position, state.robot.position);
    assert_eq!(render_state.robot_heading, state.robot.heading);
    assert_eq!(
        render_state.collectibles.as_slice(),
        state.collectibles.positions()
    );
    assert!((render_state.battery_fraction - 1.0).abs() < EPSILON);
    assert_eq!(render_state.status.phase, GamePhase::Playing);
}

#[test]
fn render_state_update_tracks_changes() {
    let mut state = GameState::with_seed(42);
    let mut render_state = RenderState::new(&state);

    let forward = InputSnapshot {
        forward: true,
        ..InputSnapshot::default()
    };
    for _ in 0..10 {
        state.update(&forward);
    }
    render_state.update(&state);

    assert_eq!(render_state.robot_position, state.robot.position);
    assert!(render_state.battery_fraction < 1.0);
    assert_eq!(
        render_state.collectibles.len(),
        state.collectibles.len()
    );
}

#[test]
fn status_text_reports_each_phase() {
    let mut state = GameState::with_seed(42);
    assert!(state
        .status()
        .to_string()
        .starts_with("Score: 0 | Battery: 100%"));

    state.collectibles =
        engine_vacuum::game_state::Collectibles::from_positions(vec![Vec3::new(0.0, 0.2, 0.0)]);
    state.update(&InputSnapshot::default());
    let text = state.status().to_string();
    assert!(text.contains("All clean!"), "unexpected status: {text}");
    assert!(text.contains("press R") || text.contains("Press R"));
}
