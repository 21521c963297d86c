//! # Scene — One World, One Picker, One Frame Loop
//!
//! A [`Scene`] bundles a [`World`] with the [`Schedule`] that drives it. Every
//! scene gets its own [`PickerSystem`], so hit maps never leak between scenes.
//!
//! ```text
//!  step()
//!   ├─ Pointers::capture_frame      freeze pointer positions
//!   ├─ schedule.run
//!   │    0   propagate_transforms
//!   │    99  picker_system           current → last
//!   │    100 selection_system        reads last
//!   ├─ Pointers::end_frame          clear just-pressed state
//!   └─ frame += 1
//! ```

use crate::config::PickerConfig;
use crate::ecs::{Schedule, TRANSFORM_PRIORITY, World, propagate_transforms};
use crate::input::Pointers;
use crate::picking::{PickerSystem, install_picker};
use crate::selection::{Selection, install_selection};

pub struct Scene {
    pub name: String,
    pub world: World,
    pub schedule: Schedule,
    frame: u64,
}

impl Scene {
    /// A scene with transform propagation, picking and selection installed.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut world = World::new();
        let mut schedule = Schedule::new();
        schedule.add_system_with_priority(TRANSFORM_PRIORITY, propagate_transforms);
        install_picker(&mut world, &mut schedule);
        install_selection(&mut world, &mut schedule);
        log::info!("Scene '{name}' ready ({} systems)", schedule.len());
        Self {
            name,
            world,
            schedule,
            frame: 0,
        }
    }

    pub fn with_config(name: impl Into<String>, config: PickerConfig) -> Self {
        let mut scene = Self::new(name);
        scene.world.resource_mut::<PickerSystem>().set_config(config);
        scene
    }

    /// Run one frame.
    pub fn step(&mut self) {
        if let Some(pointers) = self.world.get_resource_mut::<Pointers>() {
            pointers.capture_frame();
        }
        self.schedule.run(&mut self.world);
        if let Some(pointers) = self.world.get_resource_mut::<Pointers>() {
            pointers.end_frame();
        }
        self.frame += 1;
    }

    /// Completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pointers_mut(&mut self) -> &mut Pointers {
        self.world.resource_mut::<Pointers>()
    }

    pub fn picker(&self) -> &PickerSystem {
        self.world.resource::<PickerSystem>()
    }

    pub fn selection(&self) -> &Selection {
        self.world.resource::<Selection>()
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        self.world.resource_mut::<Selection>()
    }

    /// Diagnostics for the frame just run.
    #[cfg(feature = "diagnostics")]
    pub fn snapshot(&mut self) -> Option<crate::diag::PickSnapshot> {
        crate::diag::PickSnapshot::capture(&mut self.world, &self.schedule)
    }
}
