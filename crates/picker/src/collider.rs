//! Collider geometry and point containment.
//!
//! A [`Collider`] holds an optional [`Shape`] in the entity's local space.
//! The picker resolves it against the entity's world matrix and asks the
//! resolved shape whether a pointer lies inside. A collider without a shape
//! (for example, one whose geometry has not been assigned yet) resolves to
//! `None` and is treated as "no collider" by the picker.

use crate::math::{Affine2, BoundingBox, Vec2};

/// Collision geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// A simple (non self-intersecting) polygon. Winding does not matter.
    Polygon { points: Vec<Vec2> },
    /// Contains a point if any part does.
    Composite(Vec<Shape>),
}

impl Shape {
    /// A circle centred on the entity origin.
    pub fn circle(radius: f32) -> Self {
        Self::circle_at(Vec2::ZERO, radius)
    }

    pub fn circle_at(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// A `width` × `height` rectangle centred on the entity origin.
    pub fn rect(width: f32, height: f32) -> Self {
        let b = BoundingBox::from_dimension(width, height, Vec2::splat(0.5), Vec2::ZERO);
        Self::Polygon {
            points: b.corners().to_vec(),
        }
    }

    pub fn polygon(points: impl Into<Vec<Vec2>>) -> Self {
        Self::Polygon {
            points: points.into(),
        }
    }

    /// Map the shape through a world matrix.
    ///
    /// Circles stay circles: the centre is transformed and the radius is
    /// scaled by the larger of the two axis scales.
    pub fn to_world(&self, matrix: &Affine2) -> Shape {
        match self {
            Shape::Circle { center, radius } => {
                let m = matrix.matrix2;
                let scale = m.x_axis.length().max(m.y_axis.length());
                Shape::Circle {
                    center: matrix.transform_point2(*center),
                    radius: radius * scale,
                }
            }
            Shape::Polygon { points } => Shape::Polygon {
                points: points.iter().map(|&p| matrix.transform_point2(p)).collect(),
            },
            Shape::Composite(parts) => {
                Shape::Composite(parts.iter().map(|s| s.to_world(matrix)).collect())
            }
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle { center, radius } => center.distance_squared(point) <= radius * radius,
            Shape::Polygon { points } => polygon_contains(points, point),
            Shape::Composite(parts) => parts.iter().any(|s| s.contains(point)),
        }
    }

    /// Axis-aligned bounds. `None` for degenerate shapes with no points.
    pub fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Shape::Circle { center, radius } => Some(BoundingBox::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            )),
            Shape::Polygon { points } => BoundingBox::from_points(points.iter().copied()),
            Shape::Composite(parts) => parts
                .iter()
                .filter_map(Shape::bounds)
                .reduce(|a, b| a.combine(&b)),
        }
    }
}

/// Even-odd crossing test.
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Collision geometry attached to an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collider {
    shape: Option<Shape>,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self { shape: Some(shape) }
    }

    /// A collider with no geometry yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn set(&mut self, shape: Shape) {
        self.shape = Some(shape);
    }

    pub fn clear(&mut self) {
        self.shape = None;
    }

    /// The shape in world space, or `None` if no shape is set.
    pub fn resolve(&self, matrix: &Affine2) -> Option<Shape> {
        self.shape.as_ref().map(|s| s.to_world(matrix))
    }
}
