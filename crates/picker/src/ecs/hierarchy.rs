//! # Entity Hierarchies — Parent/Child Relationships
//!
//! [`Parent`], [`Children`] and [`GlobalTransform`] express entity
//! hierarchies. [`propagate_transforms`] resolves every entity's world matrix
//! once per frame; the picker reads [`GlobalTransform`] afterwards, which is
//! why propagation is scheduled at [`TRANSFORM_PRIORITY`], ahead of
//! [`PICKER_PRIORITY`](crate::picking::PICKER_PRIORITY).
//!
//! ```ignore
//! let parent = world.spawn((Transform::from_xy(100.0, 50.0),));
//! let child = world.spawn_child(parent, (Transform::from_xy(10.0, 0.0),));
//! propagate_transforms(&mut world);
//! // child's GlobalTransform now places it at (110, 50).
//! ```

use std::collections::VecDeque;

use crate::ecs::{Entity, World};
use crate::math::{Affine2, Transform};

/// Schedule priority of [`propagate_transforms`].
pub const TRANSFORM_PRIORITY: i32 = 0;

/// Marks an entity as a child of another entity.
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub Entity);

/// The child entities of a parent.
#[derive(Debug, Clone)]
pub struct Children(pub Vec<Entity>);

/// The world matrix computed by [`propagate_transforms`].
///
/// Roots get their local [`Transform`]; children get
/// `parent_global * child_local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform {
    pub affine: Affine2,
}

impl Default for GlobalTransform {
    fn default() -> Self {
        Self {
            affine: Affine2::IDENTITY,
        }
    }
}

/// Propagate local transforms down the hierarchy, breadth first so parents
/// are resolved before their children.
///
/// Every entity without a live [`Parent`] is a root. Entities with no
/// [`Transform`] (logic-only groups) contribute the identity matrix, so their
/// children still get a world matrix built from their own transforms.
pub fn propagate_transforms(world: &mut World) {
    let mut queue: VecDeque<(Entity, Affine2)> = world
        .entities()
        .filter(|&e| !has_live_parent(world, e))
        .filter(|&e| world.has::<Transform>(e) || world.has::<Children>(e))
        .map(|e| (e, Affine2::IDENTITY))
        .collect();

    while let Some((entity, parent_affine)) = queue.pop_front() {
        let local = world
            .get::<Transform>(entity)
            .map(Transform::affine)
            .unwrap_or(Affine2::IDENTITY);
        let affine = parent_affine * local;
        world.insert(entity, GlobalTransform { affine });
        enqueue_children(world, entity, affine, &mut queue);
    }
}

fn has_live_parent(world: &World, entity: Entity) -> bool {
    world
        .get::<Parent>(entity)
        .is_some_and(|p| world.is_alive(p.0))
}

fn enqueue_children(
    world: &World,
    entity: Entity,
    affine: Affine2,
    queue: &mut VecDeque<(Entity, Affine2)>,
) {
    if let Some(children) = world.get::<Children>(entity) {
        queue.extend(
            children
                .0
                .iter()
                .filter(|&&child| world.is_alive(child))
                .map(|&child| (child, affine)),
        );
    }
}
