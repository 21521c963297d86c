//! # Picker — Per-Frame Pointer Hit Testing
//!
//! Answers, once per frame, which entities lie under which pointers (mouse
//! cursor, touch contacts). A small ECS carries the entities; the
//! [`PickerSystem`](picking::PickerSystem) scans them after transforms are
//! resolved and publishes a hit map that selection and highlighting read.
//!
//! Start with `use picker::prelude::*` and build a [`Scene`](scene::Scene).

pub mod collider;
pub mod config;
pub mod ecs;
pub mod graphics;
pub mod input;
pub mod math;
pub mod picking;
pub mod prelude;
pub mod scene;
pub mod selection;

#[cfg(feature = "diagnostics")]
pub mod diag;
