//! # Picking — Which Entities Are Under Which Pointers
//!
//! [`PickerSystem`] runs once per frame, after transforms are resolved. It
//! scans every live entity, tests each pointer of the frame's
//! [`PointerSnapshot`] against the entity's geometry, and records every
//! containment in a [`HitMap`].
//!
//! ## Geometry rules
//!
//! Each entity is checked against three independent rules. More than one may
//! fire for the same pointer, in which case the pointer is listed once per
//! rule.
//!
//! ```text
//!  Particle?  ── yes ──▶ skipped
//!     │ no
//!     ├─ Collider with a shape      ─▶ shape.contains(p)
//!     ├─ Graphics with shown items  ─▶ local bounds × world matrix
//!     └─ neither of the above,
//!        or a ParticleEmitter       ─▶ fallback box × world matrix
//! ```
//!
//! `p` is the pointer's world position, or its screen position when the
//! entity's [`Transform`] lives on the [`CoordPlane::Screen`] plane.
//!
//! ## Generations
//!
//! Hits are written into `current` while the scan runs. When it finishes,
//! `current` is moved into `last` and a fresh empty map takes its place.
//! Consumers read [`PickerSystem::last`]; the reference it returns cannot
//! outlive the next [`tick`](PickerSystem::tick).

use std::collections::HashMap;

use crate::collider::Collider;
use crate::config::PickerConfig;
use crate::ecs::{Entity, GlobalTransform, Schedule, World};
use crate::graphics::{Anchor, Graphics, Particle, ParticleEmitter};
use crate::input::{PointerId, PointerSnapshot, Pointers};
use crate::math::{BoundingBox, CoordPlane, Transform, Vec2};

/// Runs after transform propagation and before anything that reads hits.
pub const PICKER_PRIORITY: i32 = 99;

// ── HitMap ──────────────────────────────────────────────────────────────

/// Entity → pointers over it, in the order the hits were recorded.
///
/// Entities are kept in the order they were first hit. A pointer may appear
/// more than once in one entity's list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    hits: HashMap<Entity, Vec<PointerId>>,
    order: Vec<Entity>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entity: Entity, pointer: PointerId) {
        self.hits
            .entry(entity)
            .or_insert_with(|| {
                self.order.push(entity);
                Vec::new()
            })
            .push(pointer);
    }

    /// Pointers over `entity`. Empty if it was not hit.
    pub fn pointers(&self, entity: Entity) -> &[PointerId] {
        self.hits.get(&entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entities under `pointer`, in first-hit order.
    pub fn entities_under(&self, pointer: PointerId) -> Vec<Entity> {
        self.iter()
            .filter(|(_, pointers)| pointers.contains(&pointer))
            .map(|(entity, _)| entity)
            .collect()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.hits.contains_key(&entity)
    }

    /// Hit entities in first-hit order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &[PointerId])> + '_ {
        self.order.iter().map(|&e| (e, self.pointers(e)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── Stats ───────────────────────────────────────────────────────────────

/// Counters for one [`PickerSystem::tick`].
#[cfg(feature = "diagnostics")]
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct PickStats {
    pub entities_scanned: u32,
    pub particles_skipped: u32,
    pub collider_hits: u32,
    pub graphics_hits: u32,
    pub fallback_hits: u32,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Collider,
    Graphics,
    Fallback,
}

// ── PickerSystem ────────────────────────────────────────────────────────

/// The per-scene hit tester. Lives in the world as a resource.
pub struct PickerSystem {
    current: HitMap,
    last: HitMap,
    config: PickerConfig,
    frame: u64,
    #[cfg(feature = "diagnostics")]
    stats: PickStats,
}

impl PickerSystem {
    pub fn new() -> Self {
        Self::with_config(PickerConfig::default())
    }

    pub fn with_config(config: PickerConfig) -> Self {
        Self {
            current: HitMap::new(),
            last: HitMap::new(),
            config,
            frame: 0,
            #[cfg(feature = "diagnostics")]
            stats: PickStats::default(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config;
    }

    /// Append `pointer` to `entity`'s list in the map being built.
    ///
    /// Repeated calls with the same pair are kept. Anything recorded between
    /// ticks shows up in `last` after the next one.
    pub fn record_hit(&mut self, entity: Entity, pointer: PointerId) {
        self.current.push(entity, pointer);
    }

    /// Hit-test every live entity against `pointers`, then move the result
    /// into `last`. Call exactly once per frame.
    pub fn tick(&mut self, world: &World, pointers: &PointerSnapshot) {
        #[cfg(feature = "diagnostics")]
        {
            self.stats = PickStats::default();
        }

        for entity in world.entities() {
            if world.has::<Particle>(entity) {
                #[cfg(feature = "diagnostics")]
                {
                    self.stats.particles_skipped += 1;
                }
                continue;
            }
            let Some(transform) = world.get::<Transform>(entity) else {
                continue;
            };
            #[cfg(feature = "diagnostics")]
            {
                self.stats.entities_scanned += 1;
            }

            let matrix = world
                .get::<GlobalTransform>(entity)
                .map_or_else(|| transform.affine(), |g| g.affine);
            let plane = transform.coord_plane;

            let shape = world
                .get::<Collider>(entity)
                .and_then(|c| c.resolve(&matrix));
            // A shape with no points has no bounds and contains nothing.
            let collider = shape.as_ref().and_then(|s| s.bounds().map(|b| (s, b)));
            if let Some((shape, broad)) = collider {
                self.test_pointers(entity, plane, pointers, Rule::Collider, |p| {
                    broad.contains(p) && shape.contains(p)
                });
            }

            let bounds = world
                .get::<Graphics>(entity)
                .and_then(Graphics::local_bounds)
                .map(|b| b.transform(&matrix));
            if let Some(bounds) = bounds {
                self.test_pointers(entity, plane, pointers, Rule::Graphics, |p| {
                    bounds.contains(p)
                });
            }

            if (bounds.is_none() && shape.is_none()) || world.has::<ParticleEmitter>(entity) {
                let anchor = world.get::<Anchor>(entity).copied().unwrap_or_default().0;
                let size = self.config.fallback_size;
                let fallback =
                    BoundingBox::from_dimension(size.x, size.y, anchor, Vec2::ZERO).transform(&matrix);
                self.test_pointers(entity, plane, pointers, Rule::Fallback, |p| {
                    fallback.contains(p)
                });
            }
        }

        self.last = std::mem::take(&mut self.current);
        self.frame += 1;
        log::debug!(
            "Picker frame {}: {} pointer(s), {} entit(y/ies) hit",
            self.frame,
            pointers.len(),
            self.last.len()
        );
    }

    fn test_pointers(
        &mut self,
        entity: Entity,
        plane: CoordPlane,
        pointers: &PointerSnapshot,
        rule: Rule,
        contains: impl Fn(Vec2) -> bool,
    ) {
        for (id, coords) in pointers.iter() {
            if !contains(coords.in_plane(plane)) {
                continue;
            }
            log::trace!("{entity:?} under pointer {id} ({rule:?})");
            self.record_hit(entity, id);
            #[cfg(feature = "diagnostics")]
            match rule {
                Rule::Collider => self.stats.collider_hits += 1,
                Rule::Graphics => self.stats.graphics_hits += 1,
                Rule::Fallback => self.stats.fallback_hits += 1,
            }
        }
    }

    /// The finished hits of the most recent tick.
    pub fn last(&self) -> &HitMap {
        &self.last
    }

    /// Hits recorded since the last tick. Empty outside of a tick unless
    /// [`record_hit`](Self::record_hit) was called directly.
    pub fn current(&self) -> &HitMap {
        &self.current
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[cfg(feature = "diagnostics")]
    pub fn stats(&self) -> &PickStats {
        &self.stats
    }
}

impl Default for PickerSystem {
    fn default() -> Self {
        Self::new()
    }
}

// ── Systems ─────────────────────────────────────────────────────────────

/// Tick the world's [`PickerSystem`] against this frame's pointer snapshot.
pub fn picker_system(world: &mut World) {
    let Some(mut picker) = world.resource_remove::<PickerSystem>() else {
        log::debug!("picker_system: no PickerSystem resource, skipping");
        return;
    };
    match world.get_resource::<Pointers>() {
        Some(pointers) => picker.tick(world, pointers.snapshot()),
        None => {
            log::debug!("picker_system: no Pointers resource, ticking with no pointers");
            picker.tick(world, &PointerSnapshot::new());
        }
    }
    world.insert_resource(picker);
}

/// Add a [`PickerSystem`] (and [`Pointers`], if missing) to `world` and
/// schedule [`picker_system`] at [`PICKER_PRIORITY`].
///
/// Returns `false` if the scene already had a picker, in which case nothing
/// changes.
pub fn install_picker(world: &mut World, schedule: &mut Schedule) -> bool {
    if world.has_resource::<PickerSystem>() {
        return false;
    }
    world.insert_resource(PickerSystem::new());
    if !world.has_resource::<Pointers>() {
        world.insert_resource(Pointers::new());
    }
    if !schedule.contains("picker_system") {
        schedule.add_system_with_priority(PICKER_PRIORITY, picker_system);
    }
    log::info!("Picker installed");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::Shape;
    use crate::ecs::propagate_transforms;
    use crate::graphics::Drawable;
    use crate::input::PointerCoords;

    fn world_at(x: f32, y: f32) -> PointerCoords {
        PointerCoords::new(Vec2::new(x, y), Vec2::new(-9999.0, -9999.0))
    }

    fn screen_at(x: f32, y: f32) -> PointerCoords {
        PointerCoords::new(Vec2::new(-9999.0, -9999.0), Vec2::new(x, y))
    }

    fn snapshot(pointers: &[(PointerId, PointerCoords)]) -> PointerSnapshot {
        PointerSnapshot::from_pointers(pointers.iter().copied())
    }

    #[test]
    fn collider_scenario() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(300.0, 300.0),
            Collider::new(Shape::circle(60.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(1, world_at(310.0, 305.0)), (2, world_at(1000.0, 1000.0))]));

        assert_eq!(picker.last().pointers(e), &[1]);
        assert_eq!(picker.last().entities_under(1), vec![e]);
        assert!(picker.last().entities_under(2).is_empty());
    }

    #[test]
    fn collider_suppresses_fallback() {
        let mut world = World::new();
        // Pointer is inside the 100x100 box but outside the small circle.
        let e = world.spawn((Transform::from_xy(0.0, 0.0), Collider::new(Shape::circle(5.0))));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(40.0, 40.0))]));
        assert!(!picker.last().contains(e));
    }

    #[test]
    fn empty_collider_falls_back() {
        let mut world = World::new();
        let e = world.spawn((Transform::from_xy(0.0, 0.0), Collider::empty()));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(40.0, 40.0))]));
        assert_eq!(picker.last().pointers(e), &[0]);
    }

    #[test]
    fn fallback_box_is_100_units_around_origin() {
        let mut world = World::new();
        let e = world.spawn((Transform::from_xy(200.0, 200.0),));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[
                (0, world_at(249.0, 151.0)),
                (1, world_at(250.0, 250.0)),
                (2, world_at(251.0, 200.0)),
                (3, world_at(200.0, 149.0)),
            ]),
        );
        assert_eq!(picker.last().pointers(e), &[0, 1]);
    }

    #[test]
    fn fallback_respects_anchor_and_scale() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(0.0, 0.0).with_scale(2.0),
            Anchor(Vec2::ZERO),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, world_at(-10.0, 10.0)), (1, world_at(190.0, 190.0))]),
        );
        assert_eq!(picker.last().pointers(e), &[1]);
    }

    #[test]
    fn configured_fallback_size_is_used() {
        let mut world = World::new();
        let e = world.spawn((Transform::from_xy(0.0, 0.0),));
        let mut picker = PickerSystem::with_config(PickerConfig {
            fallback_size: Vec2::new(10.0, 10.0),
        });
        picker.tick(&world, &snapshot(&[(0, world_at(20.0, 0.0)), (1, world_at(4.0, 4.0))]));
        assert_eq!(picker.last().pointers(e), &[1]);
    }

    #[test]
    fn screen_plane_uses_screen_position_only() {
        let mut world = World::new();
        let f = world.spawn((Transform::from_xy(50.0, 50.0).in_screen_space(),));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, screen_at(60.0, 60.0)), (1, world_at(60.0, 60.0))]),
        );
        assert_eq!(picker.last().pointers(f), &[0]);
    }

    #[test]
    fn graphics_bounds_are_transformed() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(500.0, 0.0).with_scale(2.0),
            Graphics::new().with(Drawable::new("sprite", 10.0, 10.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, world_at(509.0, 9.0)), (1, world_at(540.0, 0.0))]),
        );
        // 540 is inside the fallback box but graphics suppress it.
        assert_eq!(picker.last().pointers(e), &[0]);
    }

    #[test]
    fn hidden_graphics_fall_back() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Graphics::new().with(Drawable::new("sprite", 2.0, 2.0).hidden()),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(40.0, 0.0))]));
        assert_eq!(picker.last().pointers(e), &[0]);
    }

    #[test]
    fn emitter_with_graphics_records_both_rules() {
        let mut world = World::new();
        let g = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Graphics::new().with(Drawable::new("glow", 20.0, 20.0)),
            ParticleEmitter,
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(4, world_at(1.0, 1.0)), (5, world_at(30.0, 30.0))]));
        assert_eq!(picker.last().pointers(g), &[4, 4, 5]);
        #[cfg(feature = "diagnostics")]
        {
            assert_eq!(picker.stats().graphics_hits, 1);
            assert_eq!(picker.stats().fallback_hits, 2);
        }
    }

    #[test]
    fn collider_and_graphics_both_record() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Collider::new(Shape::circle(10.0)),
            Graphics::new().with(Drawable::new("sprite", 20.0, 20.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(0.0, 0.0))]));
        assert_eq!(picker.last().pointers(e), &[0, 0]);
    }

    #[test]
    fn particles_are_never_hit() {
        let mut world = World::new();
        let p = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Collider::new(Shape::circle(50.0)),
            Particle,
        ));
        let mut picker = PickerSystem::new();
        let pointers = snapshot(&[(0, world_at(0.0, 0.0))]);
        picker.tick(&world, &pointers);
        picker.tick(&world, &pointers);
        assert!(!picker.last().contains(p));
        assert!(!picker.current().contains(p));
        #[cfg(feature = "diagnostics")]
        assert_eq!(picker.stats().particles_skipped, 1);
    }

    #[test]
    fn entities_without_transform_are_ignored() {
        let mut world = World::new();
        let e = world.spawn((Collider::new(Shape::circle(50.0)),));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(0.0, 0.0))]));
        assert!(!picker.last().contains(e));
        assert!(picker.last().is_empty());
    }

    #[test]
    fn swap_moves_current_into_last_and_clears() {
        let world = World::new();
        let mut picker = PickerSystem::new();
        let a = Entity {
            index: 3,
            generation: 0,
        };
        picker.record_hit(a, 1);
        picker.record_hit(a, 1);
        picker.record_hit(a, 2);
        let before = picker.current().clone();

        picker.tick(&world, &PointerSnapshot::new());
        assert_eq!(picker.last(), &before);
        assert_eq!(picker.last().pointers(a), &[1, 1, 2]);
        assert!(picker.current().is_empty());
        assert_eq!(picker.frame(), 1);

        picker.tick(&world, &PointerSnapshot::new());
        assert!(picker.last().is_empty());
    }

    #[test]
    fn two_pointers_over_one_entity_in_snapshot_order() {
        let mut world = World::new();
        let e = world.spawn((Transform::from_xy(0.0, 0.0),));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(7, world_at(1.0, 1.0)), (3, world_at(-1.0, -1.0))]));
        assert_eq!(picker.last().pointers(e), &[7, 3]);
    }

    #[test]
    fn hit_map_keeps_first_hit_order() {
        let mut world = World::new();
        let a = world.spawn((Transform::from_xy(0.0, 0.0),));
        let b = world.spawn((Transform::from_xy(10.0, 0.0),));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(5.0, 0.0))]));
        let entities: Vec<_> = picker.last().entities().collect();
        assert_eq!(entities, vec![a, b]);
        assert_eq!(picker.last().len(), 2);
        assert_eq!(picker.last().entities_under(0), vec![a, b]);
    }

    #[test]
    fn child_uses_global_transform() {
        let mut world = World::new();
        let parent = world.spawn((Transform::from_xy(1000.0, 0.0),));
        let child = world.spawn_child(
            parent,
            (Transform::from_xy(0.0, 0.0), Collider::new(Shape::circle(5.0))),
        );
        propagate_transforms(&mut world);

        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(1001.0, 0.0)), (1, world_at(1.0, 0.0))]));
        assert_eq!(picker.last().pointers(child), &[0]);
    }

    #[test]
    fn picker_system_ticks_resource_against_frozen_snapshot() {
        let mut world = World::new();
        let mut schedule = Schedule::new();
        assert!(install_picker(&mut world, &mut schedule));
        assert!(!install_picker(&mut world, &mut schedule));
        assert_eq!(schedule.len(), 1);

        let e = world.spawn((Transform::from_xy(0.0, 0.0),));
        let pointers = world.resource_mut::<Pointers>();
        pointers.move_to(0, world_at(0.0, 0.0));
        pointers.capture_frame();
        // Moves after the capture are not seen this frame.
        pointers.move_to(0, world_at(5000.0, 0.0));

        schedule.run(&mut world);
        let picker = world.resource::<PickerSystem>();
        assert_eq!(picker.last().pointers(e), &[0]);
        assert_eq!(picker.frame(), 1);
    }

    #[test]
    fn picker_system_without_picker_is_a_no_op() {
        let mut world = World::new();
        picker_system(&mut world);
        assert!(!world.has_resource::<PickerSystem>());
    }

    #[test]
    fn picker_system_without_pointers_still_swaps() {
        let mut world = World::new();
        let mut schedule = Schedule::new();
        install_picker(&mut world, &mut schedule);
        let e = world.spawn((Transform::from_xy(0.0, 0.0),));
        let pointers = world.resource_mut::<Pointers>();
        pointers.move_to(0, world_at(0.0, 0.0));
        pointers.capture_frame();
        schedule.run(&mut world);
        assert!(world.resource::<PickerSystem>().last().contains(e));

        world.resource_remove::<Pointers>();
        world.despawn(e);
        world.resource_mut::<PickerSystem>().record_hit(e, 4);
        schedule.run(&mut world);
        assert!(world.resource::<PickerSystem>().last().contains(e));
        schedule.run(&mut world);

        let picker = world.resource::<PickerSystem>();
        assert_eq!(picker.frame(), 3);
        assert!(picker.last().is_empty());
        assert!(picker.current().is_empty());
    }

    #[test]
    fn screen_plane_collider_uses_screen_position() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(50.0, 50.0).in_screen_space(),
            Collider::new(Shape::circle(20.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, screen_at(60.0, 55.0)), (1, world_at(60.0, 55.0))]),
        );
        assert_eq!(picker.last().pointers(e), &[0]);
    }

    #[test]
    fn screen_plane_graphics_use_screen_position() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(50.0, 50.0).in_screen_space(),
            Graphics::new().with(Drawable::new("button", 40.0, 20.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, screen_at(65.0, 55.0)), (1, world_at(65.0, 55.0))]),
        );
        assert_eq!(picker.last().pointers(e), &[0]);
    }

    #[test]
    fn world_plane_collider_ignores_screen_position() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(50.0, 50.0),
            Collider::new(Shape::circle(20.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(
            &world,
            &snapshot(&[(0, screen_at(50.0, 50.0)), (1, world_at(50.0, 50.0))]),
        );
        assert_eq!(picker.last().pointers(e), &[1]);
    }

    #[test]
    fn emitter_with_collider_records_both_rules() {
        let mut world = World::new();
        let g = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Collider::new(Shape::circle(10.0)),
            ParticleEmitter,
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(2, world_at(3.0, 0.0)), (6, world_at(40.0, 0.0))]));
        assert_eq!(picker.last().pointers(g), &[2, 2, 6]);
        #[cfg(feature = "diagnostics")]
        {
            assert_eq!(picker.stats().collider_hits, 1);
            assert_eq!(picker.stats().fallback_hits, 2);
        }
    }

    #[test]
    fn child_of_transformless_group_is_hit_at_its_position() {
        let mut world = World::new();
        let group = world.spawn_empty();
        let child = world.spawn_child(group, (Transform::from_xy(500.0, 500.0),));
        propagate_transforms(&mut world);

        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(500.0, 500.0)), (1, world_at(0.0, 0.0))]));
        assert_eq!(picker.last().pointers(child), &[0]);
    }

    #[test]
    fn orphaned_child_follows_its_own_transform() {
        let mut world = World::new();
        let parent = world.spawn((Transform::from_xy(1000.0, 0.0),));
        let orphan = world.spawn_child(parent, (Transform::from_xy(0.0, 0.0),));
        propagate_transforms(&mut world);

        world.despawn(parent);
        world.get_mut::<Transform>(orphan).unwrap().translation = Vec2::new(-500.0, 0.0);
        propagate_transforms(&mut world);

        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(-500.0, 0.0)), (1, world_at(1000.0, 0.0))]));
        assert_eq!(picker.last().pointers(orphan), &[0]);
    }

    #[test]
    fn unpropagated_child_falls_back_to_local_transform() {
        let mut world = World::new();
        let group = world.spawn_empty();
        let child = world.spawn_child(group, (Transform::from_xy(300.0, 0.0),));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(300.0, 0.0))]));
        assert_eq!(picker.last().pointers(child), &[0]);
    }

    #[test]
    fn empty_polygon_collider_contains_nothing_and_keeps_graphics_rule() {
        let mut world = World::new();
        let e = world.spawn((
            Transform::from_xy(0.0, 0.0),
            Collider::new(Shape::polygon(Vec::new())),
            Graphics::new().with(Drawable::new("sprite", 10.0, 10.0)),
        ));
        let mut picker = PickerSystem::new();
        picker.tick(&world, &snapshot(&[(0, world_at(1.0, 1.0)), (1, world_at(30.0, 0.0))]));
        assert_eq!(picker.last().pointers(e), &[0]);
    }
}
