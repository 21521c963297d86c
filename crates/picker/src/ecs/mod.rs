//! # Entity Component System
//!
//! The runtime the picker scans every frame: generational entity ids,
//! sparse optional components, scene resources and a priority schedule.
//!
//! - [`entity`] — Generational entity ids
//! - [`world`] — Entities, components and resources
//! - [`system`] — System trait and priority schedule
//! - [`hierarchy`] — Parent/child links and world-matrix propagation

pub mod entity;
pub mod hierarchy;
pub mod system;
pub mod world;

pub use entity::Entity;
pub use hierarchy::{Children, GlobalTransform, Parent, TRANSFORM_PRIORITY, propagate_transforms};
pub use system::{Schedule, System};
pub use world::{SpawnBundle, World};
