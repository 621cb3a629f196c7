use std::f32::consts::TAU;

use crate::geom::{Rect, Vec2};
use crate::theme::Color;

/// A single drawable: the display list is the renderer's whole output, so
/// a backend can rasterize or serialize a chart without knowing which
/// chart it is.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    /// Closed outline in SVG path syntax (sector wedges).
    Path {
        d: String,
        fill: Color,
    },
    Rect {
        rect: Rect,
        fill: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Color,
    },
    Text {
        pos: Vec2,
        size: f32,
        fill: Color,
        anchor: TextAnchor,
        content: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Hover hit geometry. Angles are radians from the +x axis, y-down,
/// normalized to `[0, 2π)`; a sector covers the half-open span
/// `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    Rect(Rect),
    Sector {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
    },
}

impl HitShape {
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            HitShape::Rect(rect) => rect.contains(point),
            HitShape::Sector {
                center,
                radius,
                start,
                end,
            } => {
                let d = point - *center;
                if d.length() > *radius {
                    return false;
                }
                let angle = d.y.atan2(d.x).rem_euclid(TAU);
                angle >= *start && angle < *end
            }
        }
    }
}

/// One hoverable region and the tooltip text it carries.
#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    pub shape: HitShape,
    pub tooltip: String,
}

/// A rendered chart: canvas dimensions, draw-ordered primitives, and the
/// hit targets layered over them. Targets are assumed non-overlapping;
/// hit-testing returns the first match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
    pub targets: Vec<HitTarget>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
            targets: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn hit_test(&self, point: Vec2) -> Option<&HitTarget> {
        self.targets.iter().find(|t| t.shape.contains(point))
    }
}
