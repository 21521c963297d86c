//! Convenience re-exports — `use picker::prelude::*` for the common items.

pub use crate::collider::{Collider, Shape};
pub use crate::config::{ConfigError, PickerConfig};
pub use crate::ecs::{
    Children, Entity, GlobalTransform, Parent, Schedule, System, World, propagate_transforms,
};
pub use crate::graphics::{Anchor, Drawable, Graphics, Particle, ParticleEmitter};
pub use crate::input::{
    Input, PRIMARY_POINTER, PointerCoords, PointerId, PointerSnapshot, Pointers, Viewport,
};
pub use crate::math::{Affine2, BoundingBox, CoordPlane, Transform, Vec2};
pub use crate::picking::{HitMap, PICKER_PRIORITY, PickerSystem, install_picker, picker_system};
pub use crate::scene::Scene;
pub use crate::selection::{SELECTION_PRIORITY, Selection, install_selection, selection_system};
#[cfg(feature = "diagnostics")]
pub use crate::diag::PickSnapshot;
#[cfg(feature = "diagnostics")]
pub use crate::picking::PickStats;
