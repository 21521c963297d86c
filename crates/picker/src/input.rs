//! Pointer input state.
//!
//! The window/input layer feeds pointer motion and button events into the
//! [`Pointers`] resource as they arrive. At the start of each frame
//! [`Pointers::capture_frame`] freezes the positions into a
//! [`PointerSnapshot`]; everything that runs during the frame (the picker in
//! particular) sees that snapshot and nothing newer.
//!
//! Each pointer carries two positions: where it is on the viewport
//! (`screen`) and what world point is under it (`world`).

use std::collections::HashSet;
use std::hash::Hash;

use crate::math::{CoordPlane, Vec2};

/// Identifies one pointing device: the mouse, or one touch contact.
pub type PointerId = u32;

/// The mouse, or the first touch.
pub const PRIMARY_POINTER: PointerId = 0;

/// Tracks the state of a set of inputs (keys, buttons, touch contacts).
///
/// - `pressed`: currently held down
/// - `just_pressed`: pressed this frame (not held last frame)
/// - `just_released`: released this frame
pub struct Input<T: Eq + Hash + Copy> {
    pressed: HashSet<T>,
    just_pressed: HashSet<T>,
    just_released: HashSet<T>,
}

impl<T: Eq + Hash + Copy> Input<T> {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    pub fn just_pressed(&self, input: T) -> bool {
        self.just_pressed.contains(&input)
    }

    pub fn just_released(&self, input: T) -> bool {
        self.just_released.contains(&input)
    }

    /// Every input pressed this frame.
    pub fn iter_just_pressed(&self) -> impl Iterator<Item = T> + '_ {
        self.just_pressed.iter().copied()
    }

    pub fn press(&mut self, input: T) {
        if self.pressed.insert(input) {
            self.just_pressed.insert(input);
        }
    }

    pub fn release(&mut self, input: T) {
        if self.pressed.remove(&input) {
            self.just_released.insert(input);
        }
    }

    /// Clear per-frame state. Called once at the end of each frame.
    pub fn clear_just(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl<T: Eq + Hash + Copy> Default for Input<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pointer position in both coordinate spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerCoords {
    pub world: Vec2,
    pub screen: Vec2,
}

impl PointerCoords {
    pub fn new(world: Vec2, screen: Vec2) -> Self {
        Self { world, screen }
    }

    /// The position to test geometry living in `plane` against.
    pub fn in_plane(&self, plane: CoordPlane) -> Vec2 {
        match plane {
            CoordPlane::World => self.world,
            CoordPlane::Screen => self.screen,
        }
    }
}

/// Maps viewport pixels to world units.
///
/// `camera` is the world point shown at the centre of the viewport; `zoom` is
/// pixels per world unit. Both spaces have y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
    pub camera: Vec2,
    pub zoom: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            camera: Vec2::new(width, height) * 0.5,
            zoom: 1.0,
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.camera + (screen - self.size * 0.5) / self.zoom
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.camera) * self.zoom + self.size * 0.5
    }
}

/// Frozen pointer positions for one frame, in the order pointers were first
/// seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    pointers: Vec<(PointerId, PointerCoords)>,
}

impl PointerSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot directly, e.g. in tests or replays.
    pub fn from_pointers(pointers: impl IntoIterator<Item = (PointerId, PointerCoords)>) -> Self {
        let mut snapshot = Self::new();
        for (id, coords) in pointers {
            snapshot.set(id, coords);
        }
        snapshot
    }

    fn set(&mut self, id: PointerId, coords: PointerCoords) {
        match self.pointers.iter_mut().find(|(p, _)| *p == id) {
            Some((_, existing)) => *existing = coords,
            None => self.pointers.push((id, coords)),
        }
    }

    pub fn get(&self, id: PointerId) -> Option<PointerCoords> {
        self.pointers
            .iter()
            .find(|(p, _)| *p == id)
            .map(|&(_, coords)| coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointerId, PointerCoords)> + '_ {
        self.pointers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

/// Live pointer state for one scene.
///
/// The input layer calls the `move_*`, [`press`](Self::press) and
/// [`release`](Self::release) methods as events arrive; the scene calls
/// [`capture_frame`](Self::capture_frame) and [`end_frame`](Self::end_frame)
/// around each tick.
#[derive(Default)]
pub struct Pointers {
    live: PointerSnapshot,
    frame: PointerSnapshot,
    pub buttons: Input<PointerId>,
}

impl Pointers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer's position in both spaces.
    pub fn move_to(&mut self, id: PointerId, coords: PointerCoords) {
        self.live.set(id, coords);
    }

    /// Record a pointer's screen position, deriving the world position
    /// through the viewport.
    pub fn move_screen(&mut self, id: PointerId, screen: Vec2, viewport: &Viewport) {
        self.move_to(id, PointerCoords::new(viewport.screen_to_world(screen), screen));
    }

    /// Forget a pointer (touch lifted, mouse left the window). It stops
    /// appearing in snapshots from the next capture on.
    pub fn remove(&mut self, id: PointerId) {
        self.live.pointers.retain(|(p, _)| *p != id);
        self.buttons.release(id);
    }

    pub fn press(&mut self, id: PointerId) {
        self.buttons.press(id);
    }

    pub fn release(&mut self, id: PointerId) {
        self.buttons.release(id);
    }

    /// Latest known position, which may be newer than this frame's snapshot.
    pub fn live(&self, id: PointerId) -> Option<PointerCoords> {
        self.live.get(id)
    }

    /// Freeze the live positions for the coming frame.
    pub fn capture_frame(&mut self) {
        self.frame = self.live.clone();
    }

    /// Positions as captured at the start of this frame.
    pub fn snapshot(&self) -> &PointerSnapshot {
        &self.frame
    }

    pub fn end_frame(&mut self) {
        self.buttons.clear_just();
    }
}
