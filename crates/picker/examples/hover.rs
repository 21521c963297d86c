//! Hover and click — headless picking demo.
//!
//! Builds a small scene (a collider, a sprite, a spinning arm with a child, a
//! screen-space button, a particle emitter and some particles), sweeps two
//! pointers across it, and prints what each pointer is over every frame.
//!
//! Run with: `RUST_LOG=debug cargo run -p picker --example hover [config.json]`

use picker::prelude::*;

// ── Spin component ──────────────────────────────────────────────────────

struct Spin {
    speed: f32,
}

fn spin_system(world: &mut World) {
    for entity in world.entities_with::<Spin>() {
        let speed = world.get::<Spin>(entity).map_or(0.0, |s| s.speed);
        if let Some(transform) = world.get_mut::<Transform>(entity) {
            transform.rotation += speed;
        }
    }
}

const FRAMES: u32 = 12;

fn main() {
    env_logger::init();

    let config = std::env::args()
        .nth(1)
        .map(PickerConfig::load_or_default)
        .unwrap_or_default();
    let mut scene = Scene::with_config("hover", config);
    scene.schedule.add_system_with_priority(-1, spin_system);
    let viewport = Viewport::new(800.0, 600.0);

    let rock = scene.world.spawn((
        Transform::from_xy(300.0, 300.0),
        Collider::new(Shape::circle(60.0)),
    ));
    let crate_sprite = scene.world.spawn((
        Transform::from_xy(500.0, 300.0).with_scale(2.0),
        Graphics::new().with(Drawable::new("crate", 32.0, 32.0)),
    ));
    let arm = scene
        .world
        .spawn((Transform::from_xy(400.0, 150.0), Spin { speed: 0.3 }));
    let tip = scene.world.spawn_child(
        arm,
        (Transform::from_xy(80.0, 0.0), Collider::new(Shape::rect(20.0, 20.0))),
    );
    let button = scene
        .world
        .spawn((Transform::from_xy(60.0, 560.0).in_screen_space(),));
    let emitter = scene.world.spawn((
        Transform::from_xy(650.0, 450.0),
        Graphics::new().with(Drawable::new("glow", 16.0, 16.0)),
        ParticleEmitter,
    ));
    for i in 0..5 {
        scene.world.spawn((
            Transform::from_xy(650.0 + i as f32 * 4.0, 450.0),
            Particle,
        ));
    }

    let names = [
        (rock, "rock"),
        (crate_sprite, "crate"),
        (arm, "arm"),
        (tip, "tip"),
        (button, "button"),
        (emitter, "emitter"),
    ];
    let name_of = |e: Entity| {
        names
            .iter()
            .find(|(n, _)| *n == e)
            .map_or("?", |(_, name)| *name)
    };

    for frame in 0..FRAMES {
        let t = frame as f32 / (FRAMES - 1) as f32;
        let mouse = Vec2::new(40.0, 300.0).lerp(Vec2::new(760.0, 300.0), t);
        let touch = Vec2::new(60.0, 560.0).lerp(Vec2::new(650.0, 450.0), t);

        let pointers = scene.pointers_mut();
        pointers.move_screen(PRIMARY_POINTER, mouse, &viewport);
        pointers.move_screen(1, touch, &viewport);
        if frame == 3 {
            pointers.press(PRIMARY_POINTER);
        }
        if frame == 4 {
            pointers.release(PRIMARY_POINTER);
        }

        scene.step();

        let hits = scene.picker().last();
        for pointer in [PRIMARY_POINTER, 1] {
            let over: Vec<&str> = hits.entities_under(pointer).into_iter().map(name_of).collect();
            println!("frame {frame:2} pointer {pointer}: {over:?}");
        }
        if let Some(selected) = scene.selection().selected() {
            println!("          selected: {}", name_of(selected));
        }
    }

    #[cfg(feature = "diagnostics")]
    if let Some(snapshot) = scene.snapshot() {
        println!("{}", snapshot.to_json());
    }
}
