//! Math types and glam re-exports.
//!
//! Everything the picker touches is 2D: positions are [`Vec2`], world matrices
//! are [`Affine2`]. Both coordinate spaces put the origin at the top-left with
//! y growing downward, so a [`BoundingBox`] is described by its
//! `left`/`top`/`right`/`bottom` edges.

pub use glam::{Affine2, Mat2, Vec2};

/// Which space an entity's geometry lives in.
///
/// World-space geometry moves with the camera; screen-space geometry is pinned
/// to the viewport (HUD elements, cursors, overlays). The picker tests each
/// entity against the pointer position taken from the matching space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoordPlane {
    #[default]
    World,
    Screen,
}

/// A 2D transform: translation, rotation (radians) and scale, tagged with the
/// coordinate plane it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub coord_plane: CoordPlane,
}

impl Transform {
    /// Identity transform in world space.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
        coord_plane: CoordPlane::World,
    };

    /// A world-space transform at the given position.
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self {
            translation: Vec2::new(x, y),
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    /// Return a copy with uniform scale applied.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    /// Return a copy pinned to the viewport.
    pub fn in_screen_space(mut self) -> Self {
        self.coord_plane = CoordPlane::Screen;
        self
    }

    /// The local model matrix (scale, then rotate, then translate).
    pub fn affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An axis-aligned rectangle, edges inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A `width` × `height` box placed so that the point `anchor` (in
    /// fractions of the box size, `(0.5, 0.5)` = centre) sits at `pos`.
    ///
    /// ```
    /// # use picker::math::{BoundingBox, Vec2};
    /// let b = BoundingBox::from_dimension(100.0, 100.0, Vec2::splat(0.5), Vec2::ZERO);
    /// assert_eq!(b, BoundingBox::new(-50.0, -50.0, 50.0, 50.0));
    /// ```
    pub fn from_dimension(width: f32, height: f32, anchor: Vec2, pos: Vec2) -> Self {
        let left = pos.x - width * anchor.x;
        let top = pos.y - height * anchor.y;
        Self::new(left, top, left + width, top + height)
    }

    /// The smallest box containing every point. `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min.x, min.y, max.x, max.y))
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }

    /// The smallest box containing both.
    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Transform the four corners and return their axis-aligned bounds.
    ///
    /// Rotated boxes grow: a square rotated 45° yields its circumscribed
    /// square, not the diamond itself.
    pub fn transform(&self, matrix: &Affine2) -> Self {
        let [a, b, c, d] = self.corners().map(|p| matrix.transform_point2(p));
        let min = a.min(b).min(c).min(d);
        let max = a.max(b).max(c).max(d);
        Self::new(min.x, min.y, max.x, max.y)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}
