// Host-side tests for the particle field, its mesh renderer and the scene task.

use glam::Vec2;
use portfolio_core::constants::*;
use portfolio_core::*;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear(f32, f32),
    Circle(Vec2, f32, Rgba),
    Line(Vec2, Vec2, f32, Rgba),
}

#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl RecordingCanvas {
    fn lines(&self) -> Vec<(Vec2, Vec2, f32, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, w, c) => Some((*a, *b, *w, *c)),
                _ => None,
            })
            .collect()
    }

    fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(..)))
            .count()
    }
}

impl Canvas2d for RecordingCanvas {
    fn clear_rect(&mut self, _x: f32, _y: f32, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba) {
        self.ops.push(Op::Line(from, to, line_width, color));
    }
}

fn still(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        size: 1.0,
        opacity: 0.5,
    }
}

fn field_of(surface: Surface, particles: Vec<Particle>) -> ParticleField {
    ParticleField::with_particles(surface, FieldConfig::default(), particles, 7).unwrap()
}

#[test]
fn particle_count_follows_area_and_cap() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count_for(Surface::new(1000, 1000), &cfg), 66);
    assert_eq!(particle_count_for(Surface::new(2000, 1000), &cfg), 80);
    assert_eq!(particle_count_for(Surface::new(100, 100), &cfg), 0);
    assert_eq!(particle_count_for(Surface::new(0, 900), &cfg), 0);

    let field = ParticleField::with_defaults(Surface::new(1000, 1000), 1);
    assert_eq!(field.len(), 66);
    let capped = ParticleField::with_defaults(Surface::new(2000, 1000), 1);
    assert_eq!(capped.len(), 80);
}

#[test]
fn reset_stays_within_ranges() {
    let surface = Surface::new(800, 600);
    let mut rng = StdRng::seed_from_u64(99);
    let mut p = Particle::random(&mut rng, surface);
    for _ in 0..10_000 {
        p.reset(&mut rng, surface);
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.size >= 0.5 && p.size <= 2.5, "size {}", p.size);
        assert!(p.opacity >= 0.1 && p.opacity <= 0.6, "opacity {}", p.opacity);
        assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
    }
}

#[test]
fn reset_particle_uses_current_surface() {
    let mut field = ParticleField::with_defaults(Surface::new(1000, 1000), 3);
    field.resize(Surface::new(50, 40));
    for i in 0..field.len() {
        field.reset_particle(i);
    }
    for p in field.particles() {
        assert!(p.position.x < 50.0 && p.position.y < 40.0);
    }
    // Out-of-range index is ignored.
    field.reset_particle(10_000);
}

#[test]
fn bounce_scenario_at_left_edge() {
    let surface = Surface::new(800, 600);
    let mut p = Particle {
        position: Vec2::new(0.0, 300.0),
        velocity: Vec2::new(-0.1, 0.0),
        size: 1.0,
        opacity: 0.3,
    };
    p.update(surface);
    assert!((p.position.x + 0.1).abs() < 1e-6);
    assert!((p.velocity.x - 0.1).abs() < 1e-6);

    let before = p.position.x;
    for _ in 0..3 {
        p.update(surface);
    }
    assert!(p.position.x > before);
    assert!(p.velocity.x > 0.0);
    assert_eq!(p.position.y, 300.0);
}

#[test]
fn update_flips_velocity_only_when_leaving_bounds() {
    let surface = Surface::new(320, 240);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..5_000 {
        let mut p = Particle::random(&mut rng, surface);
        // Push some particles right up against an edge.
        if rng.gen_bool(0.5) {
            p.position.x = if rng.gen_bool(0.5) { 0.05 } else { 319.95 };
        }
        let before = p;
        p.update(surface);
        let nx = before.position.x + before.velocity.x;
        let ny = before.position.y + before.velocity.y;
        let out_x = nx < 0.0 || nx > 320.0;
        let out_y = ny < 0.0 || ny > 240.0;
        assert_eq!(p.velocity.x == -before.velocity.x && before.velocity.x != 0.0, out_x);
        assert_eq!(p.velocity.y == -before.velocity.y && before.velocity.y != 0.0, out_y);
        assert!(p.position.x >= -PARTICLE_MAX_SPEED && p.position.x <= 320.0 + PARTICLE_MAX_SPEED);
        assert!(p.position.y >= -PARTICLE_MAX_SPEED && p.position.y <= 240.0 + PARTICLE_MAX_SPEED);
    }
}

#[test]
fn resize_does_not_reclamp_positions() {
    let mut field = field_of(
        Surface::new(800, 600),
        vec![Particle {
            position: Vec2::new(700.0, 500.0),
            velocity: Vec2::new(0.1, 0.1),
            size: 1.0,
            opacity: 0.2,
        }],
    );
    field.resize(Surface::new(400, 300));
    assert_eq!(field.particles()[0].position, Vec2::new(700.0, 500.0));
    assert_eq!(field.len(), 1);

    // New bounds take effect on the next update: both axes are outside and flip.
    field.update();
    let p = field.particles()[0];
    assert!(p.velocity.x < 0.0 && p.velocity.y < 0.0);
    assert!(p.position.x > 400.0);
}

#[test]
fn connect_draws_only_pairs_within_threshold() {
    let surface = Surface::new(1000, 1000);
    let field = field_of(
        surface,
        vec![still(100.0, 100.0), still(200.0, 100.0), still(250.0, 100.0), still(900.0, 900.0)],
    );
    let mut canvas = RecordingCanvas::default();
    field.connect(&mut canvas, None);
    let lines = canvas.lines();
    // (0,1)=100, (0,2)=150 excluded, (1,2)=50, far particle unconnected.
    assert_eq!(lines.len(), 2);
    let (a, b, w, c) = lines[0];
    assert_eq!((a, b), (Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)));
    assert_eq!(w, LINK_LINE_WIDTH);
    assert_eq!((c.r, c.g, c.b), (108, 99, 255));
    assert!((c.a - 0.06 * (1.0 - 100.0 / 150.0)).abs() < 1e-6);
}

#[test]
fn link_opacity_falls_off_monotonically() {
    let mut prev = link_opacity(0.0, LINK_DISTANCE, LINK_MAX_OPACITY);
    assert!((prev - LINK_MAX_OPACITY).abs() < 1e-7);
    for d in 1..150 {
        let a = link_opacity(d as f32, LINK_DISTANCE, LINK_MAX_OPACITY);
        assert!(a < prev, "opacity not decreasing at {d}");
        assert!(a > 0.0);
        prev = a;
    }
}

#[test]
fn pointer_link_opacity_vanishes_at_threshold() {
    assert_eq!(link_opacity(200.0, POINTER_LINK_DISTANCE, POINTER_LINK_MAX_OPACITY), 0.0);
    for d in [0.0_f32, 50.0, 150.0, 199.0, 199.99] {
        assert!(link_opacity(d, POINTER_LINK_DISTANCE, POINTER_LINK_MAX_OPACITY) > 0.0);
    }
}

#[test]
fn pointer_links_use_distinct_color_and_threshold() {
    let field = field_of(Surface::new(1000, 1000), vec![still(0.0, 0.0), still(500.0, 0.0)]);

    let mut none = RecordingCanvas::default();
    field.connect(&mut none, None);
    assert!(none.lines().is_empty());

    let mut canvas = RecordingCanvas::default();
    field.connect(&mut canvas, Some(Vec2::new(300.0, 0.0)));
    let lines = canvas.lines();
    // 300 from the first particle (too far), 200 from the second (exactly at threshold).
    assert!(lines.is_empty());

    let mut near = RecordingCanvas::default();
    field.connect(&mut near, Some(Vec2::new(400.0, 0.0)));
    let lines = near.lines();
    assert_eq!(lines.len(), 1);
    let (from, to, w, c) = lines[0];
    assert_eq!(from, Vec2::new(500.0, 0.0));
    assert_eq!(to, Vec2::new(400.0, 0.0));
    assert_eq!(w, POINTER_LINE_WIDTH);
    assert_eq!((c.r, c.g, c.b), (0, 212, 255));
    assert!((c.a - 0.12 * 0.5).abs() < 1e-6);
}

#[test]
fn clumped_particles_link_every_pair_once() {
    let n = 12;
    let field = field_of(Surface::new(100, 100), (0..n).map(|_| still(10.0, 10.0)).collect());
    let mut canvas = RecordingCanvas::default();
    field.connect(&mut canvas, None);
    assert_eq!(canvas.lines().len(), n * (n - 1) / 2);
}

#[test]
fn step_draws_particles_before_links() {
    let mut field = ParticleField::with_defaults(Surface::new(1200, 900), 11);
    let mut canvas = RecordingCanvas::default();
    field.step(&mut canvas, Some(Vec2::new(600.0, 450.0)));
    assert_eq!(canvas.circles(), field.len());
    let first_line = canvas
        .ops
        .iter()
        .position(|op| matches!(op, Op::Line(..)))
        .unwrap_or(canvas.ops.len());
    assert!(canvas.ops[first_line..]
        .iter()
        .all(|op| matches!(op, Op::Line(..))));
    // Circles are drawn at post-update positions.
    let positions: Vec<Vec2> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Circle(p, _, _) => Some(*p),
            _ => None,
        })
        .collect();
    let expected: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(positions, expected);
}

#[test]
fn seeded_fields_are_reproducible() {
    let surface = Surface::new(1280, 720);
    let mut a = ParticleField::with_defaults(surface, 42);
    let mut b = ParticleField::with_defaults(surface, 42);
    let c = ParticleField::with_defaults(surface, 43);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
    for _ in 0..500 {
        a.update();
        b.update();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn config_validation_rejects_unbounded_or_invalid_values() {
    assert!(FieldConfig::default().validate().is_ok());
    let too_many = FieldConfig::default().with_max_particles(PARTICLE_HARD_CAP + 1);
    assert_eq!(
        too_many.validate(),
        Err(ConfigError::TooManyParticles {
            requested: PARTICLE_HARD_CAP + 1,
            cap: PARTICLE_HARD_CAP
        })
    );
    let zero_area = FieldConfig {
        area_per_particle: 0,
        ..FieldConfig::default()
    };
    assert_eq!(zero_area.validate(), Err(ConfigError::ZeroArea));
    let bad_dist = FieldConfig {
        link_distance: f32::NAN,
        ..FieldConfig::default()
    };
    assert!(matches!(
        bad_dist.validate(),
        Err(ConfigError::InvalidDistance { name: "link_distance", .. })
    ));
    let bad_alpha = FieldConfig {
        pointer_link_max_opacity: 1.5,
        ..FieldConfig::default()
    };
    assert!(matches!(
        bad_alpha.validate(),
        Err(ConfigError::OpacityOutOfRange { .. })
    ));
    assert!(ParticleField::new(Surface::new(10, 10), too_many, 0).is_err());
}

#[test]
fn configured_cap_limits_population() {
    let cfg = FieldConfig::default().with_max_particles(10);
    let field = ParticleField::new(Surface::new(4000, 4000), cfg, 9).unwrap();
    assert_eq!(field.len(), 10);
}

#[test]
fn scene_clears_then_steps_with_tracked_pointer() {
    let surface = Surface::new(640, 480);
    let pointer = PointerTracker::new();
    let field = field_of(surface, vec![still(100.0, 100.0), still(120.0, 100.0)]);
    let mut scene = ParticleScene::new(RecordingCanvas::default(), field, pointer.clone());

    scene.render();
    assert_eq!(scene.canvas.ops[0], Op::Clear(640.0, 480.0));
    assert_eq!(scene.canvas.lines().len(), 1);

    pointer.record(110.0, 100.0);
    scene.canvas.ops.clear();
    scene.render();
    // One mesh line plus one pointer line per particle.
    assert_eq!(scene.canvas.lines().len(), 3);

    scene.resize(Surface::new(320, 200));
    scene.canvas.ops.clear();
    scene.render();
    assert_eq!(scene.canvas.ops[0], Op::Clear(320.0, 200.0));
}

#[test]
fn pointer_tracker_is_absent_until_first_move() {
    let tracker = PointerTracker::new();
    let reader = tracker.clone();
    assert_eq!(reader.position(), None);
    tracker.record(12.0, -3.0);
    assert_eq!(reader.position(), Some(Vec2::new(12.0, -3.0)));
    tracker.record(5000.0, 5000.0);
    assert_eq!(reader.position(), Some(Vec2::new(5000.0, 5000.0)));
}

#[test]
fn rgba_renders_css() {
    assert_eq!(Rgba::from_rgb([108, 99, 255], 0.5).css(), "rgba(108, 99, 255, 0.5)");
}
