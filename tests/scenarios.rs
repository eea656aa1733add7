//! End-to-end scenarios through the public `World` / `TickScheduler` API

use bounce_arena::sim::{
    Clock, Geometry, HeadlessSurface, ManualClock, ShapeId, TickScheduler, World,
};
use bounce_arena::{CollisionMode, ScheduleMode, Settings};
use glam::Vec2;

const ARENA: Vec2 = Vec2::new(800.0, 400.0);

fn world_with(settings: Settings) -> (World, HeadlessSurface) {
    (World::new(settings), HeadlessSurface::new(ARENA))
}

fn circle(world: &mut World, surface: &mut HeadlessSurface, center: Vec2) -> ShapeId {
    world.spawn_at(Geometry::circle(30.0), center - Vec2::splat(30.0), surface)
}

#[test]
fn free_fall_single_tick() {
    let (mut world, mut surface) = world_with(Settings::default());
    let id = world.spawn_at(Geometry::circle(30.0), Vec2::new(60.0, 60.0), &mut surface);

    world.step_shape(id, 0.5, &mut surface);

    let shape = world.get(id).unwrap();
    assert!((shape.vel.y - 15.0).abs() < 1e-6);
    assert!((shape.pos.y - 67.5).abs() < 1e-6);
}

#[test]
fn floor_clamps_and_bounces() {
    let (mut world, mut surface) = world_with(Settings::default());
    let id = world.spawn_at(Geometry::circle(30.0), Vec2::new(60.0, 350.0), &mut surface);
    world.get_mut(id).unwrap().vel = Vec2::new(0.0, 40.0);

    world.step_shape(id, 0.0, &mut surface);

    let shape = world.get(id).unwrap();
    assert_eq!(shape.pos.y, 340.0);
    assert!((shape.vel.y - (-36.0)).abs() < 1e-4);
}

#[test]
fn overlapping_circles_separate_to_radius_sum() {
    let (mut world, mut surface) = world_with(Settings::default());
    let a = circle(&mut world, &mut surface, Vec2::new(100.0, 100.0));
    let b = circle(&mut world, &mut surface, Vec2::new(110.0, 100.0));

    world.step_shape(a, 0.0, &mut surface);

    let distance = world.get(a).unwrap().center().distance(world.get(b).unwrap().center());
    assert!((distance - 60.0).abs() < 1e-4, "distance {distance}");
}

#[test]
fn self_only_collisions_move_one_shape_per_step() {
    let settings = Settings {
        collisions: CollisionMode::SelfOnly,
        ..Settings::default()
    };
    let (mut world, mut surface) = world_with(settings);
    let a = circle(&mut world, &mut surface, Vec2::new(100.0, 100.0));
    let b = circle(&mut world, &mut surface, Vec2::new(110.0, 100.0));

    world.step_shape(a, 0.0, &mut surface);
    assert!((world.get(a).unwrap().center().x - 75.0).abs() < 1e-4);
    assert_eq!(world.get(b).unwrap().center(), Vec2::new(110.0, 100.0));

    // `b` then corrects itself on its own step
    world.step_shape(b, 0.0, &mut surface);
    assert!((world.get(b).unwrap().center().x - 122.5).abs() < 1e-4);
}

#[test]
fn rectangle_drag_excludes_drag_time() {
    let settings = Settings {
        schedule: ScheduleMode::PerEntity,
        ..Settings::default()
    };
    let clock = ManualClock::new(0.0);
    let (mut world, mut surface) = world_with(settings.clone());
    let id = world.spawn_at(Geometry::rectangle(80.0, 40.0), Vec2::new(100.0, 100.0), &mut surface);
    let mut scheduler = TickScheduler::new(&settings);
    scheduler.start(&mut world, clock.now());

    world.on_pointer_down(id, Vec2::new(105.0, 105.0));
    world.on_pointer_move(id, Vec2::new(120.0, 80.0));
    scheduler.advance(&mut world, &mut surface, clock.now());

    let shape = world.get(id).unwrap();
    assert_eq!(shape.pos, Vec2::new(115.0, 75.0));
    assert_eq!(shape.vel, Vec2::ZERO);
    assert_eq!(surface.positions()[&id], Vec2::new(115.0, 75.0));

    // Held for five seconds: no physics at all
    clock.advance(5.0);
    scheduler.advance(&mut world, &mut surface, clock.now());
    assert_eq!(world.get(id).unwrap().vel, Vec2::ZERO);
    assert_eq!(world.get(id).unwrap().pos, Vec2::new(115.0, 75.0));

    world.on_pointer_up(id, Vec2::new(120.0, 80.0));
    scheduler.advance(&mut world, &mut surface, clock.now());
    assert_eq!(world.captured(), None);

    // First step after release only sees the 20 ms since letting go
    clock.advance(0.02);
    scheduler.advance(&mut world, &mut surface, clock.now());
    let vy = world.get(id).unwrap().vel.y;
    assert!((vy - 30.0 * 0.02).abs() < 1e-3, "vy {vy}");
}

#[test]
fn shapes_of_different_kinds_pass_through_each_other() {
    let (mut world, mut surface) = world_with(Settings::default());
    let c = world.spawn_at(Geometry::circle(30.0), Vec2::new(100.0, 100.0), &mut surface);
    world.spawn_at(Geometry::rectangle(80.0, 40.0), Vec2::new(110.0, 110.0), &mut surface);

    world.step_shape(c, 0.0, &mut surface);
    assert_eq!(world.get(c).unwrap().pos, Vec2::new(100.0, 100.0));
}

#[test]
fn shared_schedule_bounces_off_floor() {
    let (mut world, mut surface) = world_with(Settings::default());
    let clock = ManualClock::new(0.0);
    let id = world.spawn_at(Geometry::circle(30.0), Vec2::new(60.0, 60.0), &mut surface);
    let mut scheduler = TickScheduler::new(world.settings());
    scheduler.start(&mut world, clock.now());

    // Ten simulated seconds in 16 ms frames
    let mut bounced = false;
    for _ in 0..(10_000 / 16) {
        clock.advance(0.016);
        scheduler.advance(&mut world, &mut surface, clock.now());
        let shape = world.get(id).unwrap();
        assert!(shape.pos.y >= 0.0 && shape.pos.y <= 340.0 + 1e-3);
        bounced |= shape.vel.y < 0.0;
    }

    assert!(bounced);
}

#[test]
fn arena_resize_is_seen_next_tick() {
    let (mut world, mut surface) = world_with(Settings::default());
    let id = world.spawn_at(Geometry::rectangle(80.0, 40.0), Vec2::new(700.0, 300.0), &mut surface);

    surface.resize(Vec2::new(400.0, 200.0));
    world.step_shape(id, 0.0, &mut surface);

    assert_eq!(world.get(id).unwrap().pos, Vec2::new(320.0, 160.0));
}

#[test]
fn unlaid_out_arena_leaves_position_finite() {
    let (mut world, _) = world_with(Settings::default());
    let mut surface = HeadlessSurface::new(Vec2::ZERO);
    let id = world.spawn_at(Geometry::circle(30.0), Vec2::new(60.0, 60.0), &mut surface);

    world.on_pointer_down(id, Vec2::new(70.0, 70.0));
    world.on_pointer_move(id, Vec2::new(-500.0, 900.0));
    world.drain_pointer_events(&mut surface, 0.0);
    assert_eq!(world.get(id).unwrap().pos, Vec2::new(-510.0, 890.0));

    world.on_pointer_up(id, Vec2::new(-500.0, 900.0));
    world.drain_pointer_events(&mut surface, 0.0);
    world.step_shape(id, 0.1, &mut surface);

    let shape = world.get(id).unwrap();
    assert!(shape.pos.is_finite());
    assert!(shape.vel.is_finite());
}
