//! Hover highlighting and click selection on top of the picker.
//!
//! [`selection_system`] runs right after [`picker_system`] and only reads the
//! picker's finished `last` map.
//!
//! [`picker_system`]: crate::picking::picker_system

use crate::ecs::{Entity, Schedule, World};
use crate::input::Pointers;
use crate::picking::PickerSystem;

/// Runs after [`PICKER_PRIORITY`](crate::picking::PICKER_PRIORITY).
pub const SELECTION_PRIORITY: i32 = 100;

/// Which entities are hovered, and which one is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    highlighted: Vec<Entity>,
    selected: Option<Entity>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities under any pointer last frame, ordered by entity id.
    pub fn highlighted(&self) -> &[Entity] {
        &self.highlighted
    }

    pub fn selected(&self) -> Option<Entity> {
        self.selected
    }

    pub fn select(&mut self, entity: Entity) {
        if self.selected != Some(entity) {
            log::debug!("Selected {entity}");
        }
        self.selected = Some(entity);
    }

    /// Select the live entity with the given id. Returns `false` (and leaves
    /// the selection alone) if there is none.
    pub fn select_by_id(&mut self, world: &World, id: u32) -> bool {
        match world.entities().find(|e| e.index() == id) {
            Some(entity) => {
                self.select(entity);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Refresh highlights from the picker and apply clicks.
///
/// A pointer pressed this frame selects the first highlighted entity under
/// it. Pressing over empty space keeps the current selection.
pub fn selection_system(world: &mut World) {
    let Some(mut selection) = world.resource_remove::<Selection>() else {
        log::debug!("selection_system: no Selection resource, skipping");
        return;
    };

    if let Some(picker) = world.get_resource::<PickerSystem>() {
        let hits = picker.last();
        let mut highlighted: Vec<Entity> = hits.entities().collect();
        highlighted.sort_by_key(|e| e.index());
        selection.highlighted = highlighted;

        if let Some(pointers) = world.get_resource::<Pointers>() {
            let mut pressed: Vec<_> = pointers.buttons.iter_just_pressed().collect();
            pressed.sort_unstable();
            let clicked = pressed.into_iter().find_map(|id| {
                selection
                    .highlighted
                    .iter()
                    .copied()
                    .find(|&e| hits.pointers(e).contains(&id))
            });
            if let Some(entity) = clicked {
                selection.select(entity);
            }
        }
    }

    if selection.selected.is_some_and(|e| !world.is_alive(e)) {
        selection.clear();
    }

    world.insert_resource(selection);
}

/// Add a [`Selection`] resource and schedule [`selection_system`]. Returns
/// `false` if the scene already had one.
pub fn install_selection(world: &mut World, schedule: &mut Schedule) -> bool {
    if world.has_resource::<Selection>() {
        return false;
    }
    world.insert_resource(Selection::new());
    schedule.add_system_with_priority(SELECTION_PRIORITY, selection_system);
    true
}
