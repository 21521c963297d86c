//! # World — Entities, Components, Resources
//!
//! The [`World`] owns every entity of one scene, the components attached to
//! them, and scene-wide resources such as [`Pointers`](crate::input::Pointers)
//! and the [`PickerSystem`](crate::picking::PickerSystem).
//!
//! ## Storage
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ World                                                │
//! │                                                      │
//! │  allocator: EntityAllocator   (ids + generations)    │
//! │  alive:     Vec<Entity>       (spawn order)          │
//! │                                                      │
//! │  components: HashMap<TypeId, ComponentMap>           │
//! │    ComponentMap = HashMap<u32, Box<dyn Any>>         │
//! │    keyed by entity index                             │
//! │                                                      │
//! │  resources:  HashMap<TypeId, Box<dyn Any>>           │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Components are stored sparsely, one map per component type. Every
//! capability the picker looks at is optional, so the hot path is a handful
//! of `get::<T>()` lookups per entity rather than a query over a fixed
//! component signature. `alive` keeps spawn order so that a linear scan
//! visits entities in a deterministic order every frame.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::entity::{Entity, EntityAllocator};

type ComponentMap = HashMap<u32, Box<dyn Any + Send + Sync>>;

/// The container for one scene's entities, components and resources.
pub struct World {
    allocator: EntityAllocator,
    /// Live entities in spawn order.
    alive: Vec<Entity>,
    components: HashMap<TypeId, ComponentMap>,
    resources: HashMap<TypeId, Box<dyn Any>>,
    #[cfg(feature = "diagnostics")]
    spawned_this_frame: u32,
    #[cfg(feature = "diagnostics")]
    despawned_this_frame: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            alive: Vec::new(),
            components: HashMap::new(),
            resources: HashMap::new(),
            #[cfg(feature = "diagnostics")]
            spawned_this_frame: 0,
            #[cfg(feature = "diagnostics")]
            despawned_this_frame: 0,
        }
    }

    // ── Resources ────────────────────────────────────────────────────

    /// Insert a resource, replacing any existing resource of the same type.
    pub fn insert_resource<T: 'static>(&mut self, value: T) {
        self.resources.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a resource.
    ///
    /// # Panics
    ///
    /// Panics if the resource was never inserted.
    pub fn resource<T: 'static>(&self) -> &T {
        self.get_resource::<T>().unwrap_or_else(|| {
            panic!("Resource `{}` not found", std::any::type_name::<T>())
        })
    }

    /// Get a resource mutably.
    ///
    /// # Panics
    ///
    /// Panics if the resource was never inserted.
    pub fn resource_mut<T: 'static>(&mut self) -> &mut T {
        self.get_resource_mut::<T>().unwrap_or_else(|| {
            panic!("Resource `{}` not found", std::any::type_name::<T>())
        })
    }

    pub fn get_resource<T: 'static>(&self) -> Option<&T> {
        self.resources
            .get(&TypeId::of::<T>())
            .and_then(|r| r.downcast_ref::<T>())
    }

    pub fn get_resource_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.resources
            .get_mut(&TypeId::of::<T>())
            .and_then(|r| r.downcast_mut::<T>())
    }

    pub fn has_resource<T: 'static>(&self) -> bool {
        self.resources.contains_key(&TypeId::of::<T>())
    }

    /// Take a resource out of the world.
    ///
    /// Systems that need a resource mutably while reading the rest of the
    /// world take it out, work, and put it back with
    /// [`insert_resource`](Self::insert_resource).
    pub fn resource_remove<T: 'static>(&mut self) -> Option<T> {
        self.resources
            .remove(&TypeId::of::<T>())
            .and_then(|r| r.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    // ── Entity Management ────────────────────────────────────────────

    pub fn entity_count(&self) -> usize {
        self.allocator.alive_count()
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    /// Live entities in spawn order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive.iter().copied()
    }

    /// Live entities that have a `T`, in spawn order.
    pub fn entities_with<T: 'static + Send + Sync>(&self) -> Vec<Entity> {
        let Some(map) = self.components.get(&TypeId::of::<T>()) else {
            return Vec::new();
        };
        self.alive
            .iter()
            .copied()
            .filter(|e| map.contains_key(&e.index))
            .collect()
    }

    pub fn spawn_empty(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.alive.push(entity);
        #[cfg(feature = "diagnostics")]
        {
            self.spawned_this_frame += 1;
        }
        entity
    }

    /// Spawn an entity with a tuple of components.
    ///
    /// ```ignore
    /// let e = world.spawn((Transform::from_xy(10.0, 20.0), Collider::new(Shape::circle(8.0))));
    /// ```
    pub fn spawn<B: SpawnBundle>(&mut self, bundle: B) -> Entity {
        let entity = self.spawn_empty();
        bundle.insert_into(self, entity);
        entity
    }

    /// Spawn a child entity under `parent`. Adds [`Parent`] to the child and
    /// records it in the parent's [`Children`]. The child's world matrix is
    /// resolved by the next [`propagate_transforms`].
    ///
    /// [`Parent`]: crate::ecs::Parent
    /// [`Children`]: crate::ecs::Children
    /// [`propagate_transforms`]: crate::ecs::propagate_transforms
    ///
    /// # Panics
    ///
    /// Panics if the parent is not alive.
    pub fn spawn_child<B: SpawnBundle>(&mut self, parent: Entity, bundle: B) -> Entity {
        use crate::ecs::hierarchy::{Children, Parent};

        assert!(
            self.is_alive(parent),
            "Cannot spawn child on dead parent {parent:?}"
        );

        let child = self.spawn(bundle);
        self.insert(child, Parent(parent));
        match self.get_mut::<Children>(parent) {
            Some(children) => children.0.push(child),
            None => self.insert(parent, Children(vec![child])),
        }
        child
    }

    /// Despawn an entity and drop all of its components.
    ///
    /// Its children are detached and become roots; its parent forgets it.
    /// Returns `false` if the entity was already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        use crate::ecs::hierarchy::{Children, Parent};

        if !self.is_alive(entity) {
            return false;
        }
        if let Some(parent) = self.get::<Parent>(entity).map(|p| p.0) {
            if let Some(children) = self.get_mut::<Children>(parent) {
                children.0.retain(|&c| c != entity);
            }
        }
        let children = self
            .get::<Children>(entity)
            .map(|c| c.0.clone())
            .unwrap_or_default();
        for child in children {
            if self.get::<Parent>(child).is_some_and(|p| p.0 == entity) {
                self.remove::<Parent>(child);
            }
        }

        if !self.allocator.deallocate(entity) {
            return false;
        }
        for map in self.components.values_mut() {
            map.remove(&entity.index);
        }
        self.alive.retain(|&e| e != entity);
        #[cfg(feature = "diagnostics")]
        {
            self.despawned_this_frame += 1;
        }
        true
    }

    /// Despawn an entity and all of its descendants.
    pub fn despawn_recursive(&mut self, entity: Entity) -> bool {
        use crate::ecs::hierarchy::Children;

        if !self.is_alive(entity) {
            return false;
        }

        let mut to_despawn = vec![entity];
        let mut i = 0;
        while i < to_despawn.len() {
            if let Some(children) = self.get::<Children>(to_despawn[i]) {
                to_despawn.extend(children.0.iter().copied());
            }
            i += 1;
        }
        for e in to_despawn {
            self.despawn(e);
        }
        true
    }

    // ── Per-Entity Component Access ──────────────────────────────────

    /// Returns `None` if the entity is dead or has no `T`.
    pub fn get<T: 'static + Send + Sync>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components
            .get(&TypeId::of::<T>())?
            .get(&entity.index)?
            .downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static + Send + Sync>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components
            .get_mut(&TypeId::of::<T>())?
            .get_mut(&entity.index)?
            .downcast_mut::<T>()
    }

    pub fn has<T: 'static + Send + Sync>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }

    /// Attach a component, replacing any existing one of the same type.
    ///
    /// # Panics
    ///
    /// Panics if the entity is not alive.
    pub fn insert<T: 'static + Send + Sync>(&mut self, entity: Entity, component: T) {
        assert!(
            self.is_alive(entity),
            "Cannot insert component `{}` on dead entity {entity:?}",
            std::any::type_name::<T>()
        );
        self.components
            .entry(TypeId::of::<T>())
            .or_default()
            .insert(entity.index, Box::new(component));
    }

    /// Detach a component. Returns `true` if it was present.
    pub fn remove<T: 'static + Send + Sync>(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.components
            .get_mut(&TypeId::of::<T>())
            .is_some_and(|map| map.remove(&entity.index).is_some())
    }

    /// Entity pool counters for the current frame; resets them.
    #[cfg(feature = "diagnostics")]
    pub(crate) fn take_frame_counters(&mut self) -> (u32, u32) {
        let counters = (self.spawned_this_frame, self.despawned_this_frame);
        self.spawned_this_frame = 0;
        self.despawned_this_frame = 0;
        counters
    }

    #[cfg(feature = "diagnostics")]
    pub(crate) fn total_slots(&self) -> usize {
        self.allocator.total_slots()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

// ── Spawn Bundles ────────────────────────────────────────────────────

/// A tuple of components that can be spawned together.
pub trait SpawnBundle {
    fn insert_into(self, world: &mut World, entity: Entity);
}

macro_rules! impl_spawn_bundle {
    ($($name:ident),+) => {
        impl<$($name: 'static + Send + Sync),+> SpawnBundle for ($($name,)+) {
            #[allow(non_snake_case)]
            fn insert_into(self, world: &mut World, entity: Entity) {
                let ($($name,)+) = self;
                $(world.insert(entity, $name);)+
            }
        }
    };
}

impl_spawn_bundle!(A);
impl_spawn_bundle!(A, B);
impl_spawn_bundle!(A, B, C);
impl_spawn_bundle!(A, B, C, D);
impl_spawn_bundle!(A, B, C, D, E);
impl_spawn_bundle!(A, B, C, D, E, F);
impl_spawn_bundle!(A, B, C, D, E, F, G);
impl_spawn_bundle!(A, B, C, D, E, F, G, H);
