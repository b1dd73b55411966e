// Host-side tests for carousel scroll physics and card transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod physics {
    include!("../src/core/physics.rs");
}

use glam::{Mat4, Vec3};
use physics::*;

const EPS: f32 = 1e-4;

fn carousel() -> CarouselState {
    CarouselState::new(4, PhysicsParams::default())
}

fn settle(state: &mut CarouselState) -> usize {
    for frame in 0..2000 {
        if state.is_settled() {
            return frame;
        }
        state.step();
    }
    panic!("track did not settle: {}", state.track_position());
}

/// Drag from x=0 so that the track ends up at `track`.
fn drag_to(state: &mut CarouselState, track: f32) {
    let px = track / PhysicsParams::default().drag_sensitivity;
    state.pointer_down(0.0, 0.0);
    state.pointer_move(px, 16.0);
}

#[test]
fn new_state_starts_settled_on_first_card() {
    let s = carousel();
    assert_eq!(s.selected_index(), 0);
    assert_eq!(s.track_position(), 0.0);
    assert!(s.is_settled());
    assert!(!s.is_dragging());
}

#[test]
fn selection_converges_exactly_onto_target() {
    let mut s = carousel();
    s.select(2);
    settle(&mut s);
    assert_eq!(s.track_position(), -10.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn settling_is_monotonic() {
    let mut s = carousel();
    s.select(3);
    let mut last = (s.target_position() - s.track_position()).abs();
    let mut frames = 0;
    while !s.is_settled() {
        assert!(frames < 2000, "track did not settle: {}", s.track_position());
        s.step();
        let d = (s.target_position() - s.track_position()).abs();
        assert!(d <= last, "distance grew from {last} to {d}");
        last = d;
        frames += 1;
    }
    // the tail below max_easing shrinks as d * (1 - 0.08 d), so it is slow
    assert!(frames > 500);
    assert_eq!(s.track_position(), -15.0);
}

#[test]
fn easing_per_frame_is_capped() {
    let mut s = carousel();
    s.select(3);
    s.step();
    // distance 15 -> easing min(15 * 0.08, 0.15) = 0.15
    assert!((s.track_position() - (-15.0 * 0.15)).abs() < EPS);
}

#[test]
fn keyboard_navigation_clamps_at_both_ends() {
    let mut s = carousel();
    for _ in 0..10 {
        s.navigate(Nav::Previous);
    }
    assert_eq!(s.selected_index(), 0);
    for _ in 0..10 {
        s.navigate(Nav::Next);
    }
    assert_eq!(s.selected_index(), 3);
}

#[test]
fn select_clamps_out_of_range_index() {
    let mut s = carousel();
    assert_eq!(s.select(99), 3);
    assert_eq!(s.select(usize::MAX), 3);
    assert_eq!(s.select(1), 1);
}

#[test]
fn arrow_keys_map_to_navigation() {
    assert_eq!(Nav::from_key("ArrowLeft"), Some(Nav::Previous));
    assert_eq!(Nav::from_key("ArrowRight"), Some(Nav::Next));
    assert_eq!(Nav::from_key("ArrowUp"), None);
    assert_eq!(Nav::from_key("a"), None);
    assert_eq!(Nav::from_key(""), None);
}

#[test]
fn release_snaps_to_nearest_card() {
    let mut s = carousel();
    drag_to(&mut s, -6.3);
    assert!((s.track_position() + 6.3).abs() < EPS);
    assert_eq!(s.pointer_up(), Some(1));
    assert!(!s.is_dragging());
    settle(&mut s);
    assert_eq!(s.track_position(), -5.0);
}

#[test]
fn release_beyond_either_end_clamps() {
    let mut s = carousel();
    drag_to(&mut s, 4.0);
    assert_eq!(s.pointer_up(), Some(0));

    let mut s = carousel();
    drag_to(&mut s, -40.0);
    assert_eq!(s.pointer_up(), Some(3));
}

#[test]
fn pointer_up_without_drag_keeps_selection() {
    let mut s = carousel();
    s.select(2);
    s.step();
    assert_eq!(s.pointer_up(), None);
    assert_eq!(s.selected_index(), 2);
}

#[test]
fn pointer_move_without_drag_is_ignored() {
    let mut s = carousel();
    s.pointer_move(500.0, 10.0);
    assert_eq!(s.track_position(), 0.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn pointer_move_with_zero_elapsed_time_only_resamples() {
    let mut s = carousel();
    s.pointer_down(100.0, 50.0);
    s.pointer_move(200.0, 50.0);
    assert_eq!(s.track_position(), 0.0);
    // next move measures from the resampled x
    s.pointer_move(210.0, 60.0);
    assert!((s.track_position() - 10.0 * 0.008).abs() < EPS);
    assert!((s.velocity() - 1.0 * 0.008).abs() < EPS);
}

#[test]
fn velocity_decays_by_friction_while_dragging() {
    let mut s = carousel();
    s.pointer_down(0.0, 0.0);
    s.pointer_move(125.0, 1.0);
    assert!((s.velocity() - 1.0).abs() < EPS);
    for _ in 0..5 {
        s.step();
    }
    assert!((s.velocity() - 0.92_f32.powi(5)).abs() < EPS);
    assert!((s.velocity() - 0.6590815).abs() < EPS);
    assert!(s.is_dragging());
}

#[test]
fn dragging_moves_the_track_without_changing_selection() {
    let mut s = carousel();
    s.pointer_down(300.0, 0.0);
    s.pointer_move(100.0, 16.0);
    assert!((s.track_position() - (-200.0 * 0.008)).abs() < EPS);
    assert_eq!(s.selected_index(), 0);
}

#[test]
fn card_offsets_follow_track() {
    let mut s = carousel();
    drag_to(&mut s, -3.0);
    assert!((s.card_offset(0) + 3.0).abs() < EPS);
    assert!((s.card_offset(2) - 7.0).abs() < EPS);
    assert_eq!(s.transforms().count(), 4);
}

#[test]
fn far_card_transform_hits_floors() {
    let t = CardTransform::from_offset(7.0);
    assert!((t.position.x - 7.0).abs() < EPS);
    assert!((t.position.z + 2.8).abs() < EPS);
    assert!((t.scale - 0.8).abs() < EPS);
    assert!((t.opacity - 0.5).abs() < EPS);
    assert!((t.yaw + 0.42).abs() < EPS);
    assert!((t.position.y - (0.56_f32).sin() * 0.15).abs() < EPS);
}

#[test]
fn near_card_transform_is_symmetric_in_depth_scale_and_opacity() {
    let left = CardTransform::from_offset(-1.5);
    let right = CardTransform::from_offset(1.5);
    assert_eq!(left.position.z, right.position.z);
    assert_eq!(left.scale, right.scale);
    assert_eq!(left.opacity, right.opacity);
    assert!((left.scale - 0.91).abs() < EPS);
    assert!((left.opacity - 0.7).abs() < EPS);
    assert!((left.yaw + right.yaw).abs() < EPS);
}

#[test]
fn centered_card_has_identity_model() {
    let t = CardTransform::from_offset(0.0);
    assert_eq!(t.position, Vec3::ZERO);
    assert!(t.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn model_matrix_places_card_at_its_position() {
    let t = CardTransform::from_offset(5.0);
    let origin = t.model_matrix().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(t.position, 1e-5));
}
