// Host-side tests for the particle field buffers.

use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(n: usize) -> ParticleField {
    let params = HeartParams::default();
    let mut rng = StdRng::seed_from_u64(1234);
    let targets = sample_targets(n, &params, &mut rng);
    let sprite = glow_sprite(8, params.color_rgb);
    ParticleField::create(targets, params.color_rgb, sprite).unwrap()
}

fn norm(p: [f32; 3]) -> f32 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

#[test]
fn create_yields_n_particles_at_origin() {
    for n in [0usize, 1, 5, 300, PARTICLE_COUNT] {
        let field = make_field(n);
        assert_eq!(field.len(), n);
        assert_eq!(field.positions().len(), n * 3);
        assert_eq!(field.targets().len(), n * 3);
        assert_eq!(field.colors().len(), n * 3);
        assert!(field.positions().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn empty_field_is_a_valid_no_op() {
    let mut field = make_field(0);
    assert!(field.is_empty());
    field.set_current_positions(0.5).unwrap();
    assert!(field.positions().is_empty());
    field.dispose();
}

#[test]
fn colors_use_the_theme_hue_for_every_particle() {
    let field = make_field(50);
    for c in field.colors().chunks_exact(3) {
        assert_eq!(c, &HEART_COLOR[..]);
    }
}

#[test]
fn ragged_target_buffer_is_rejected() {
    let sprite = glow_sprite(4, HEART_COLOR);
    let err = ParticleField::create(vec![1.0, 2.0], HEART_COLOR, sprite).err();
    assert_eq!(err, Some(FieldError::RaggedBuffer(2)));
}

#[test]
fn set_current_positions_scales_every_target() {
    let mut field = make_field(200);
    field.set_current_positions(0.25).unwrap();
    for i in 0..field.len() {
        let p = field.position(i).unwrap();
        let t = field.target(i).unwrap();
        for axis in 0..3 {
            assert!((p[axis] - t[axis] * 0.25).abs() < 1e-6);
        }
    }
}

#[test]
fn full_progress_matches_targets_exactly() {
    let mut field = make_field(200);
    field.set_current_positions(0.6).unwrap();
    field.set_current_positions(1.0).unwrap();
    assert_eq!(field.positions(), field.targets());
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let mut field = make_field(20);
    field.set_current_positions(3.0).unwrap();
    assert_eq!(field.positions(), field.targets());
    field.set_current_positions(-1.0).unwrap();
    assert!(field.positions().iter().all(|&v| v == 0.0));
    field.set_current_positions(f32::NAN).unwrap();
    assert!(field.positions().iter().all(|&v| v == 0.0));
}

#[test]
fn buffers_are_updated_in_place() {
    let mut field = make_field(100);
    let before = field.positions().as_ptr();
    for k in 0..10 {
        field.set_current_positions(k as f32 / 10.0).unwrap();
    }
    assert_eq!(before, field.positions().as_ptr());
}

#[test]
fn dirty_flag_tracks_position_writes() {
    let mut field = make_field(10);
    assert!(field.take_dirty(), "fresh field needs an initial upload");
    assert!(!field.take_dirty());
    field.set_current_positions(0.5).unwrap();
    assert!(field.take_dirty());
    assert!(!field.take_dirty());
}

#[test]
fn current_is_scalar_multiple_of_target() {
    let mut field = make_field(100);
    field.set_current_positions(0.9375).unwrap();
    for i in 0..field.len() {
        let p = norm(field.position(i).unwrap());
        let t = norm(field.target(i).unwrap());
        assert!((p - 0.9375 * t).abs() < 1e-4);
    }
}

#[test]
fn dispose_twice_is_harmless() {
    let mut field = make_field(100);
    field.dispose();
    field.dispose();
    assert!(field.is_disposed());
    assert!(field.sprite().is_none());
    assert!(field.positions().is_empty());
    assert!(!field.take_dirty());
    assert_eq!(field.len(), 100);
}

#[test]
fn disposed_field_rejects_position_writes() {
    let mut field = make_field(10);
    field.dispose();
    assert_eq!(field.set_current_positions(0.5), Err(FieldError::Disposed));
    assert!(field.position(0).is_none());
}
