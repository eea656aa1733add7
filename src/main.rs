//! Bounce Arena entry point
//!
//! Headless native runner: spawns a scene, drives the scheduler from the
//! wall clock and logs where every shape ends up.
//!
//! Usage: bounce-arena [settings.json] [--seconds N] [--scatter SEED COUNT]

use std::path::Path;
use std::time::Duration;

use glam::Vec2;

use bounce_arena::sim::{ArenaSurface, Clock, HeadlessSurface, MonotonicClock, TickScheduler, World};
use bounce_arena::{Color, Scene, Settings};

struct Options {
    settings: Settings,
    seconds: f64,
    scatter: Option<(u64, usize)>,
}

fn parse_args() -> Options {
    let mut options = Options {
        settings: Settings::default(),
        seconds: 3.0,
        scatter: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seconds" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    options.seconds = v;
                }
            }
            "--scatter" => {
                let seed = args.next().and_then(|v| v.parse().ok()).unwrap_or(0);
                let count = args.next().and_then(|v| v.parse().ok()).unwrap_or(8);
                options.scatter = Some((seed, count));
            }
            path => options.settings = Settings::load(Path::new(path)),
        }
    }

    options
}

fn main() {
    env_logger::init();
    log::info!("Bounce Arena (headless) starting...");

    let options = parse_args();
    let settings = options.settings;

    let mut surface = HeadlessSurface::new(settings.arena());
    let mut world = World::new(settings.clone());
    let scene = match options.scatter {
        Some((seed, count)) => Scene::scattered(seed, count, settings.arena()),
        None => Scene::classic(),
    };
    let ids = scene.spawn(&mut world, &mut surface);

    let clock = MonotonicClock::new();
    let mut scheduler = TickScheduler::new(&settings);
    scheduler.start(&mut world, clock.now());

    let interval = Duration::from_secs_f32(settings.tick_interval);
    let mut dragged = false;

    while clock.now() < options.seconds {
        let now = clock.now();

        // Pick up the first shape halfway through, carry it to the middle
        // of the arena and let go a quarter second later
        if let Some(&first) = ids.first() {
            let half = options.seconds / 2.0;
            if !dragged && now >= half {
                if let Some(shape) = world.get(first) {
                    let grip = shape.pos + shape.extent() * 0.5;
                    world.on_pointer_down(first, grip);
                    world.on_pointer_move(first, surface.extent() * 0.5);
                    dragged = true;
                }
            } else if dragged && world.captured() == Some(first) && now >= half + 0.25 {
                world.on_pointer_up(first, surface.extent() * 0.5);
                world.change_all_colors(Color::from_name("HotPink"), &mut surface);
            }
        }

        scheduler.advance(&mut world, &mut surface, now);
        std::thread::sleep(interval);
    }

    scheduler.stop(&mut world);

    for shape in world.shapes() {
        let shown = surface.shape_position(shape.id).unwrap_or(Vec2::NAN);
        println!(
            "shape {:>2} {:?}: pos ({:7.2}, {:7.2}) vel ({:7.2}, {:7.2})",
            shape.id,
            shape.kind(),
            shown.x,
            shown.y,
            shape.vel.x,
            shape.vel.y
        );
    }
    println!(
        "{} steps, {} position updates",
        scheduler.steps, surface.publish_count
    );
}
