use glam::Vec3;
use sprite_camera::camera::{MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};
use sprite_camera::{Camera, CameraMovement};

const EPSILON: f32 = 1e-4;

fn scenario_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y)
}

fn assert_basis_orthonormal(camera: &Camera) {
    let basis = [camera.front(), camera.right(), camera.up()];
    for v in basis {
        assert!((v.length() - 1.0).abs() < EPSILON, "not unit length: {:?}", v);
    }
    assert!(basis[0].dot(basis[1]).abs() < EPSILON, "front·right = {}", basis[0].dot(basis[1]));
    assert!(basis[0].dot(basis[2]).abs() < EPSILON, "front·up = {}", basis[0].dot(basis[2]));
    assert!(basis[1].dot(basis[2]).abs() < EPSILON, "right·up = {}", basis[1].dot(basis[2]));
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let camera = scenario_camera();
        assert!(camera.front().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));
        assert!(camera.right().abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPSILON));
        assert!(camera.up().abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPSILON));
    }

    #[test]
    fn test_forward_one_second() {
        let mut camera = scenario_camera();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(
            camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPSILON),
            "position should be ~(0, 0, 0.5), got {:?}",
            camera.position
        );
    }

    #[test]
    fn test_first_mouse_move_is_suppressed() {
        let mut camera = scenario_camera();
        let initial = (camera.front(), camera.right(), camera.up());

        camera.process_mouse_movement(10.0, 0.0, true);
        assert_eq!((camera.front(), camera.right(), camera.up()), initial);

        camera.process_mouse_movement(0.0, 0.0, true);
        assert!(camera.front().abs_diff_eq(initial.0, EPSILON));

        camera.process_mouse_movement(10.0, 0.0, true);
        assert!(!camera.front().abs_diff_eq(initial.0, EPSILON));
        assert!(camera.front().x > 0.0, "positive x should turn right");
    }

    #[test]
    fn test_scroll_clamps_at_one() {
        let mut camera = scenario_camera();
        for _ in 0..10 {
            camera.process_mouse_scroll(100.0);
        }
        assert_eq!(camera.zoom(), 1.0);
    }
}

#[cfg(test)]
mod invariant_tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_random_mouse_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut camera = scenario_camera();

        for _ in 0..2000 {
            camera.look(rng.gen_range(-400.0..400.0), rng.gen_range(-400.0..400.0));
            assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
            assert_basis_orthonormal(&camera);
        }
    }

    #[test]
    fn test_random_scroll_sequences_keep_zoom_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut camera = scenario_camera();

        for _ in 0..2000 {
            camera.process_mouse_scroll(rng.gen_range(-30.0..30.0));
            assert!(camera.zoom() >= MIN_ZOOM && camera.zoom() <= MAX_ZOOM);
        }
    }

    #[test]
    fn test_movement_follows_rotated_basis() {
        let mut camera = scenario_camera();
        camera.look(0.0, 0.0);
        // 900 px * 0.1 = 90° of yaw: now facing +X
        camera.look(900.0, 0.0);
        assert!(camera.front().abs_diff_eq(Vec3::X, EPSILON));

        let start = camera.position;
        camera.process_keyboard(CameraMovement::Right, 2.0);
        assert!(
            (camera.position - start).abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON),
            "strafing right while facing +X should move toward +Z, moved {:?}",
            camera.position - start
        );
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let mut camera = scenario_camera();
        camera.set_viewport(1280, 720);
        camera.look(0.0, 0.0);
        camera.look(123.0, -45.0);
        camera.process_mouse_scroll(7.5);

        let views: Vec<_> = (0..5).map(|_| camera.view_matrix().to_cols_array()).collect();
        let projections: Vec<_> = (0..5)
            .map(|_| camera.projection_matrix().to_cols_array())
            .collect();

        assert!(views.windows(2).all(|w| w[0] == w[1]));
        assert!(projections.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_custom_world_up() {
        let camera = Camera::with_angles(Vec3::ZERO, Vec3::Z, 0.0, 0.0);
        assert_basis_orthonormal(&camera);
        assert!(camera.up().dot(Vec3::Z) > 0.0);
    }
}
