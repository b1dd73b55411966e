// Host-side tests for the curved card mesh and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use geometry::*;
use glam::{Vec3, Vec4Swizzles};

#[test]
fn mesh_has_expected_counts() {
    let mesh = curved_card_mesh(3.6, 5.2, 64, 64);
    assert_eq!(mesh.vertices.len(), 65 * 65);
    assert_eq!(mesh.indices.len(), 64 * 64 * 6);
    let max = *mesh.indices.iter().max().unwrap();
    assert!((max as usize) < mesh.vertices.len());
}

#[test]
fn zero_segments_fall_back_to_single_quad() {
    let mesh = curved_card_mesh(2.0, 2.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
}

#[test]
fn corners_map_to_texture_corners() {
    let mesh = curved_card_mesh(3.6, 5.2, 4, 4);
    let top_left = mesh.vertices[0];
    let bottom_right = *mesh.vertices.last().unwrap();
    assert_eq!(top_left.uv, [0.0, 0.0]);
    assert_eq!(bottom_right.uv, [1.0, 1.0]);
    assert!((top_left.position[0] + 1.8).abs() < 1e-5);
    assert!((top_left.position[1] - 2.6).abs() < 1e-5);
    assert!((bottom_right.position[0] - 1.8).abs() < 1e-5);
    assert!((bottom_right.position[1] + 2.6).abs() < 1e-5);
}

#[test]
fn surface_is_displaced_by_bend() {
    let mesh = curved_card_mesh(3.6, 5.2, 8, 8);
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        assert!((z - card_surface_z(x, y)).abs() < 1e-6);
        assert!(z.abs() <= 0.12 + 1e-6);
    }
}

#[test]
fn normals_are_unit_and_face_viewer() {
    let mesh = curved_card_mesh(3.6, 5.2, 16, 16);
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.z > 0.9, "normal {n:?} should point toward +Z");
    }
}

#[test]
fn triangles_wind_counter_clockwise_from_front() {
    let mesh = curved_card_mesh(2.0, 2.0, 1, 1);
    for tri in mesh.indices.chunks_exact(3) {
        let p = |i: u32| Vec3::from(mesh.vertices[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0);
    }
}

#[test]
fn carousel_camera_looks_down_negative_z() {
    let cam = Camera::carousel(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    let view = cam.view_matrix();
    let origin_view = view.transform_point3(Vec3::ZERO);
    assert!((origin_view.z + CAMERA_Z).abs() < 1e-5);
}

#[test]
fn set_viewport_updates_aspect_and_ignores_zero() {
    let mut cam = Camera::carousel(1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_viewport(0, 1080);
    cam.set_viewport(1920, 0);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera::carousel(1.5);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
