//! Diagnostics snapshot of one scene's picker.
//!
//! Enabled by the `diagnostics` feature flag. [`PickSnapshot::capture`]
//! gathers the finished hit map, the picker's counters, entity pool figures
//! and system timings into one serialisable value, and
//! [`PickSnapshot::to_json`] renders it for a log line or an external
//! inspector.

use serde::Serialize;

use crate::ecs::{Schedule, World};
use crate::picking::{PickStats, PickerSystem};

// ── Snapshot types (wire format) ────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PickSnapshot {
    pub frame: u64,
    pub hits: Vec<HitSnapshot>,
    pub stats: PickStats,
    pub entity_pool: EntityPoolSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_timings: Vec<SystemTimingSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HitSnapshot {
    pub id: u32,
    pub generation: u32,
    pub pointers: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityPoolSnapshot {
    pub alive: usize,
    pub total_slots: usize,
    pub spawned_this_frame: u32,
    pub despawned_this_frame: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemTimingSnapshot {
    pub name: String,
    pub duration_us: f64,
}

impl PickSnapshot {
    /// Collect a snapshot. Returns `None` if the world has no picker.
    ///
    /// Resets the world's per-frame spawn/despawn counters.
    pub fn capture(world: &mut World, schedule: &Schedule) -> Option<Self> {
        let (spawned_this_frame, despawned_this_frame) = world.take_frame_counters();
        let picker = world.get_resource::<PickerSystem>()?;

        let hits = picker
            .last()
            .iter()
            .map(|(entity, pointers)| HitSnapshot {
                id: entity.index(),
                generation: entity.generation(),
                pointers: pointers.to_vec(),
            })
            .collect();

        Some(Self {
            frame: picker.frame(),
            hits,
            stats: *picker.stats(),
            entity_pool: EntityPoolSnapshot {
                alive: world.entity_count(),
                total_slots: world.total_slots(),
                spawned_this_frame,
                despawned_this_frame,
            },
            system_timings: schedule
                .timings()
                .iter()
                .map(|t| SystemTimingSnapshot {
                    name: t.name.clone(),
                    duration_us: t.duration_us,
                })
                .collect(),
        })
    }

    pub fn to_json(&self) -> String {
        // Only plain data and strings; serialisation cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
