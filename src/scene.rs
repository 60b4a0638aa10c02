//! A recording [`Surface`].
//!
//! A `Scene` keeps the draw operations of the most recent frame. Hosts
//! that cannot hand out a long-lived canvas (a retained-mode toolkit that
//! only paints inside a callback, say) let the editor draw into a scene
//! and replay it when they paint.

use kurbo::{BezPath, Circle, Size};

use crate::surface::{Fill, Stroke, Surface};

/// One recorded drawing operation.
#[derive(Clone, Debug)]
pub enum DrawOp {
    Clear,
    Stroke(BezPath, Stroke),
    FillCircle(Circle, Fill),
}

// kurbo's `BezPath` has no `PartialEq`; compare the elements instead.
impl PartialEq for DrawOp {
    fn eq(&self, other: &DrawOp) -> bool {
        match (self, other) {
            (DrawOp::Clear, DrawOp::Clear) => true,
            (DrawOp::Stroke(p0, s0), DrawOp::Stroke(p1, s1)) => {
                p0.elements() == p1.elements() && s0 == s1
            }
            (DrawOp::FillCircle(c0, f0), DrawOp::FillCircle(c1, f1)) => {
                c0.center == c1.center && c0.radius == c1.radius && f0 == f1
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    size: Size,
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(size: Size) -> Scene {
        Scene {
            size,
            ops: Vec::new(),
        }
    }

    /// The operations of the current frame, in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&BezPath, &Stroke)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke(path, style) => Some((path, style)),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = (&Circle, &Fill)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillCircle(circle, style) => Some((circle, style)),
            _ => None,
        })
    }
}

impl Surface for Scene {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Starts a new frame; earlier operations are discarded.
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke(&mut self, path: &BezPath, style: &Stroke) {
        self.ops.push(DrawOp::Stroke(path.clone(), style.clone()));
    }

    fn fill_circle(&mut self, circle: Circle, style: &Fill) {
        self.ops.push(DrawOp::FillCircle(circle, style.clone()));
    }
}
