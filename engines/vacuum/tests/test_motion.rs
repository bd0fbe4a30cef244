//! Robot movement: heading rotation, translation and floor clamping.

use engine_vacuum::game_state::robot::{Robot, FLOOR_BOUND, SPEED};
use glam::Vec3;
use robovac_framework_common::input::InputSnapshot;

const EPSILON: f32 = 1e-5;

fn held(update: impl Fn(&mut InputSnapshot)) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    update(&mut input);
    input
}

#[test]
fn idle_robot_stays_put() {
    let mut robot = Robot::new();
    let initial = robot;
    robot.apply(&InputSnapshot::default());
    assert_eq!(robot, initial, "no input must not move the robot");
}

#[test]
fn forward_moves_along_heading() {
    let mut robot = Robot::new();
    let expected = robot.position + robot.heading * SPEED;
    robot.apply(&held(|input| input.forward = true));
    assert!(
        robot.position.abs_diff_eq(expected, EPSILON),
        "one forward tick must advance by the speed constant"
    );
}

#[test]
fn backward_is_the_inverse_of_forward() {
    let mut robot = Robot::new();
    robot.apply(&held(|input| input.forward = true));
    robot.apply(&held(|input| input.backward = true));
    assert!(
        robot.position.abs_diff_eq(Robot::new().position, EPSILON),
        "forward then backward must return to the start"
    );
}

#[test]
fn turning_preserves_heading_length() {
    let mut robot = Robot::new();
    for _ in 0..123 {
        robot.apply(&held(|input| input.turn_left = true));
    }
    assert!(
        (robot.heading.length() - 1.0).abs() < EPSILON,
        "heading must stay a unit vector"
    );
    assert!(
        robot.heading.y.abs() < EPSILON,
        "heading must stay horizontal"
    );
}

#[test]
fn left_turn_swings_the_heading_towards_negative_x() {
    let mut robot = Robot::new();
    robot.apply(&held(|input| input.turn_left = true));
    assert!(robot.heading.x < 0.0);
    assert!(robot.heading.z < 0.0);
}

#[test]
fn ninety_left_turns_rotate_a_quarter_circle() {
    let mut robot = Robot::new();
    for _ in 0..90 {
        robot.apply(&held(|input| input.turn_left = true));
    }
    assert!(
        robot.heading.abs_diff_eq(Vec3::NEG_X, 1e-3),
        "90 one-degree turns must yield a quarter turn, got {:?}",
        robot.heading
    );
}

#[test]
fn opposite_turns_cancel() {
    let mut robot = Robot::new();
    for _ in 0..45 {
        robot.apply(&held(|input| input.turn_right = true));
    }
    for _ in 0..45 {
        robot.apply(&held(|input| input.turn_left = true));
    }
    assert!(robot.heading.abs_diff_eq(Vec3::NEG_Z, 1e-3));
}

#[test]
fn position_is_clamped_to_the_floor() {
    let mut robot = Robot::new();
    // more than enough ticks to cross the whole floor
    for _ in 0..1000 {
        robot.apply(&held(|input| input.forward = true));
    }
    assert!(
        (robot.position.z - -FLOOR_BOUND).abs() < EPSILON,
        "driving into the wall must pin the robot at the bound"
    );

    // the clamp must not block sliding along the wall
    for _ in 0..90 {
        robot.apply(&held(|input| input.turn_left = true));
    }
    let before = robot.position;
    robot.apply(&held(|input| input.forward = true));
    assert!(
        robot.position.x < before.x,
        "the robot must slide along the wall it is pinned against"
    );
}

#[test]
fn clamp_applies_to_backward_movement_too() {
    let mut robot = Robot::new();
    for _ in 0..1000 {
        robot.apply(&held(|input| input.backward = true));
    }
    assert!((robot.position.z - FLOOR_BOUND).abs() < EPSILON);
}

#[test]
fn yaw_matches_the_initial_heading() {
    let robot = Robot::new();
    // heading -Z maps to a half turn of the -Z-facing model space
    assert!((robot.yaw().abs() - std::f32::consts::PI).abs() < EPSILON);
}
