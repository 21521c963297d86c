//! # System — Functions That Operate on the World
//!
//! A system is a function that takes `&mut World`. A [`Schedule`] runs its
//! systems once per frame, ordered by priority: lower priorities run first,
//! equal priorities keep the order they were added in.
//!
//! The frame pipeline relies on that ordering:
//!
//! ```text
//!  0   propagate_transforms   world matrices resolved
//!  99  picker_system          pointers hit-tested against resolved geometry
//!  100 selection_system       reads the picker's finished hit map
//! ```

use super::world::World;

/// A system that can be executed on a [`World`].
///
/// Any `FnMut(&mut World)` implements this trait.
pub trait System {
    fn run(&mut self, world: &mut World);
}

impl<F: FnMut(&mut World)> System for F {
    fn run(&mut self, world: &mut World) {
        (self)(world);
    }
}

struct ScheduledSystem {
    name: String,
    priority: i32,
    system: Box<dyn System>,
}

/// Wall-clock time of one system during the last [`Schedule::run`].
#[cfg(feature = "diagnostics")]
#[derive(Debug, Clone)]
pub struct SystemTiming {
    pub name: String,
    pub duration_us: f64,
}

/// A priority-ordered list of systems.
pub struct Schedule {
    systems: Vec<ScheduledSystem>,
    #[cfg(feature = "diagnostics")]
    timings: Vec<SystemTiming>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
            #[cfg(feature = "diagnostics")]
            timings: Vec::new(),
        }
    }

    /// Add a system at priority 0.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.add_system_with_priority(0, system);
    }

    /// Add a system at the given priority. Lower runs earlier.
    pub fn add_system_with_priority<S: System + 'static>(&mut self, priority: i32, system: S) {
        let name = short_system_name(std::any::type_name::<S>());
        // Insert after every system with priority <= ours to keep ties stable.
        let at = self.systems.partition_point(|s| s.priority <= priority);
        self.systems.insert(
            at,
            ScheduledSystem {
                name,
                priority,
                system: Box::new(system),
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.iter().any(|s| s.name == name)
    }

    /// Names of the scheduled systems in run order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name.as_str()).collect()
    }

    /// Run every system once, in priority order.
    pub fn run(&mut self, world: &mut World) {
        #[cfg(feature = "diagnostics")]
        {
            self.timings.clear();
            for s in &mut self.systems {
                let start = std::time::Instant::now();
                s.system.run(world);
                self.timings.push(SystemTiming {
                    name: s.name.clone(),
                    duration_us: start.elapsed().as_secs_f64() * 1_000_000.0,
                });
            }
        }
        #[cfg(not(feature = "diagnostics"))]
        {
            for s in &mut self.systems {
                s.system.run(world);
            }
        }
    }

    /// Per-system timings from the most recent `run()`.
    #[cfg(feature = "diagnostics")]
    pub fn timings(&self) -> &[SystemTiming] {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the module path from a type name (`picker::picking::picker_system`
/// → `picker_system`, closures → `<closure>`).
fn short_system_name(full: &str) -> String {
    let name = full.rsplit("::").next().unwrap_or(full);
    if name.contains("closure") {
        "<closure>".to_string()
    } else {
        name.to_string()
    }
}
