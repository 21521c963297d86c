//! Drawable bookkeeping for picking.
//!
//! The renderer is not part of this crate; what the picker needs from it is
//! the set of drawables currently shown on an entity and their local bounds.
//! [`Graphics`] carries exactly that. Marker components for particle
//! entities and the optional fallback [`Anchor`] also live here.

use crate::math::{BoundingBox, Vec2};

/// One named drawable on an entity (a sprite, a text block, a shape).
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub name: String,
    /// Size in local units.
    pub size: Vec2,
    /// Offset of the anchor point from the entity origin.
    pub offset: Vec2,
    pub visible: bool,
}

impl Drawable {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            visible: true,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The drawables attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphics {
    /// Where each drawable is pinned, in fractions of its size.
    pub anchor: Vec2,
    drawables: Vec<Drawable>,
}

impl Graphics {
    pub fn new() -> Self {
        Self {
            anchor: Vec2::splat(0.5),
            drawables: Vec::new(),
        }
    }

    pub fn with(mut self, drawable: Drawable) -> Self {
        self.add(drawable);
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    /// Add a drawable, replacing one with the same name.
    pub fn add(&mut self, drawable: Drawable) {
        match self.drawables.iter_mut().find(|d| d.name == drawable.name) {
            Some(existing) => *existing = drawable,
            None => self.drawables.push(drawable),
        }
    }

    /// Returns `false` if no drawable has that name.
    pub fn show(&mut self, name: &str) -> bool {
        self.set_visible(name, true)
    }

    /// Returns `false` if no drawable has that name.
    pub fn hide(&mut self, name: &str) -> bool {
        self.set_visible(name, false)
    }

    fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.drawables.iter_mut().find(|d| d.name == name) {
            Some(d) => {
                d.visible = visible;
                true
            }
            None => false,
        }
    }

    /// The drawables currently shown.
    pub fn current(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables.iter().filter(|d| d.visible)
    }

    /// Union of the local bounds of every shown drawable, or `None` when
    /// nothing is shown.
    pub fn local_bounds(&self) -> Option<BoundingBox> {
        self.current()
            .map(|d| BoundingBox::from_dimension(d.size.x, d.size.y, self.anchor, d.offset))
            .reduce(|a, b| a.combine(&b))
    }
}

impl Default for Graphics {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor of the synthetic fallback box, in fractions of the box size.
/// Entities without one use the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor(pub Vec2);

impl Default for Anchor {
    fn default() -> Self {
        Self(Vec2::splat(0.5))
    }
}

// ── Particles ───────────────────────────────────────────────────────────

/// Marks a single particle. Never picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle;

/// Marks a particle emitter. Always gets the fallback box, even when it has
/// graphics or a collider, so an emitter stays selectable while it has no
/// visible particles of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleEmitter;
