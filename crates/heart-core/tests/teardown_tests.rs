// Host-side tests for the release order of a mounted effect.

use heart_core::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

struct Part {
    name: &'static str,
    log: Log,
}

impl Release for Part {
    fn release(&mut self) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Stand-in for the rendered scene: records its own release and any frame
/// work that reaches it.
struct FakeScene {
    log: Log,
    liveness: Liveness,
    field: Owned<ParticleField>,
    renders: usize,
    alive_at_release: Option<bool>,
}

impl FrameTarget for FakeScene {
    fn set_current_positions(&mut self, progress: f32) {
        if let Some(f) = self.field.get_mut() {
            f.set_current_positions(progress).unwrap();
        }
    }
    fn set_transform(&mut self, _transform: FieldTransform) {}
    fn render(&mut self) {
        self.renders += 1;
    }
}

impl Release for FakeScene {
    fn release(&mut self) {
        self.alive_at_release = Some(self.liveness.is_alive());
        self.field.release();
        self.log.borrow_mut().push("scene");
    }
}

type TestMount = Mounted<Part, Part, FakeScene>;

fn build(log: &Log, liveness: &Liveness) -> (TestMount, Rc<RefCell<FakeScene>>) {
    let params = HeartParams::default();
    let sprite = glow_sprite(4, params.color_rgb);
    let field = ParticleField::create(vec![1.0; 3 * 50], params.color_rgb, sprite).unwrap();
    let scene = Rc::new(RefCell::new(FakeScene {
        log: log.clone(),
        liveness: liveness.clone(),
        field: Owned::new(field),
        renders: 0,
        alive_at_release: None,
    }));
    let listener = Owned::new(Part {
        name: "listener",
        log: log.clone(),
    });
    let canvas = Owned::new(Part {
        name: "canvas",
        log: log.clone(),
    });
    let mounted = Mounted::new(liveness.clone(), listener, canvas, scene.clone());
    (mounted, scene)
}

#[test]
fn release_runs_listener_then_canvas_then_scene_after_frames_stop() {
    let log: Log = Rc::default();
    let liveness = Liveness::new();
    let (mounted, scene) = build(&log, &liveness);
    let mut owned = Owned::new(mounted);
    assert!(owned.get().map(|m| m.is_live()).unwrap_or(false));

    owned.release();
    assert_eq!(*log.borrow(), vec!["listener", "canvas", "scene"]);
    assert!(!liveness.is_alive());
    assert_eq!(scene.borrow().alive_at_release, Some(false));
    assert!(scene.borrow().field.is_released());
}

#[test]
fn repeated_release_and_drop_tear_down_once() {
    let log: Log = Rc::default();
    let liveness = Liveness::new();
    let (mounted, _scene) = build(&log, &liveness);
    let mut owned = Owned::new(mounted);
    owned.release();
    owned.release();
    drop(owned);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn teardown_mid_build_leaves_pending_frame_inert() {
    let log: Log = Rc::default();
    let liveness = Liveness::new();
    let (mounted, scene) = build(&log, &liveness);
    let scheduler = Rc::new(ManualScheduler::new());
    let driver = AnimationDriver::new(&HeartParams::default(), liveness.clone());
    start_loop(scheduler.clone(), Rc::new(RefCell::new(driver)), scene.clone());

    scheduler.tick(0.0);
    scheduler.tick(0.1);
    assert_eq!(scene.borrow().renders, 2);

    let mut owned = Owned::new(mounted);
    owned.release();
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.tick(0.2), 1);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scene.borrow().renders, 2);
}
