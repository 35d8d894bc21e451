// Host-side tests for scoped teardown, configuration and the step-flow contract.

use heart_core::*;
use std::cell::Cell;
use std::rc::Rc;

struct Tracked {
    releases: Rc<Cell<u32>>,
}

impl Release for Tracked {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn tracked() -> (Owned<Tracked>, Rc<Cell<u32>>) {
    let releases = Rc::new(Cell::new(0));
    let owned = Owned::new(Tracked {
        releases: releases.clone(),
    });
    (owned, releases)
}

#[test]
fn owned_releases_exactly_once() {
    let (mut owned, releases) = tracked();
    assert!(!owned.is_released());
    owned.release();
    owned.release();
    assert!(owned.is_released());
    assert!(owned.get().is_none());
    drop(owned);
    assert_eq!(releases.get(), 1);
}

#[test]
fn owned_releases_on_drop() {
    let (owned, releases) = tracked();
    drop(owned);
    assert_eq!(releases.get(), 1);
}

#[test]
fn into_inner_hands_over_without_releasing() {
    let (owned, releases) = tracked();
    let inner = owned.into_inner();
    assert!(inner.is_some());
    assert_eq!(releases.get(), 0);
    let mut moved = Owned::new(inner.unwrap());
    moved.release();
    assert_eq!(releases.get(), 1);
}

#[test]
fn owned_field_is_disposed_on_release() {
    let params = HeartParams::default();
    let sprite = glow_sprite(4, params.color_rgb);
    let field = ParticleField::create(vec![1.0; 30], params.color_rgb, sprite).unwrap();
    let mut owned = Owned::new(field);
    assert_eq!(owned.get().map(|f| f.len()), Some(10));
    if let Some(f) = owned.get_mut() {
        f.set_current_positions(1.0).unwrap();
    }
    owned.release();
    assert!(owned.get().is_none());
}

#[test]
fn liveness_is_shared_and_one_way() {
    let a = Liveness::new();
    let b = a.clone();
    assert!(b.is_alive());
    a.kill();
    assert!(!b.is_alive());
    a.kill();
    assert!(!a.is_alive());
}

#[test]
fn default_params_are_valid() {
    assert_eq!(HeartParams::default().validate(), Ok(()));
}

#[test]
fn invalid_params_are_rejected() {
    let base = HeartParams::default();
    let p = HeartParams {
        build_duration_sec: 0.0,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ParamsError::BuildDuration(0.0)));

    let p = HeartParams {
        max_pixel_ratio: 0.5,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ParamsError::PixelRatioCap(0.5)));

    let p = HeartParams {
        sprite_size_px: 0,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ParamsError::SpriteSize(0)));

    let p = HeartParams {
        sprite_size_px: 32768,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ParamsError::SpriteSize(32768)));

    let p = HeartParams {
        sprite_size_px: MAX_SPRITE_SIZE_PX,
        ..base.clone()
    };
    assert_eq!(p.validate(), Ok(()));

    let p = HeartParams {
        sway_amplitude: -0.1,
        ..base
    };
    assert!(matches!(
        p.validate(),
        Err(ParamsError::Amplitude {
            name: "sway_amplitude",
            ..
        })
    ));
}

#[test]
fn entering_success_activates_and_leaving_deactivates() {
    assert_eq!(signal_for(Step::Letter, Step::Success), Some(Signal::Activate));
    assert_eq!(signal_for(Step::Success, Step::Intro), Some(Signal::Deactivate));
    assert_eq!(signal_for(Step::Success, Step::Rejected), Some(Signal::Deactivate));
    assert_eq!(signal_for(Step::Intro, Step::Envelope), None);
    assert_eq!(signal_for(Step::Success, Step::Success), None);
}

#[test]
fn step_names_parse_case_insensitively() {
    assert_eq!(Step::from_name("success"), Some(Step::Success));
    assert_eq!(Step::from_name(" Letter "), Some(Step::Letter));
    assert_eq!(Step::from_name("ENVELOPE"), Some(Step::Envelope));
    assert_eq!(Step::from_name("confetti"), None);
}
