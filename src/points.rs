//! The ordered sequence of control points.

use kurbo::{BezPath, Point};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::casteljau;
use crate::error::CurveError;

/// The control points of a single Bézier curve.
///
/// Order is significant: the first and last points are the endpoints of
/// the curve, and the points are evaluated and drawn in sequence order.
/// Points carry no identity beyond their position and index.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", transparent)
)]
pub struct ControlPoints {
    points: Vec<Point>,
}

impl ControlPoints {
    pub fn new() -> ControlPoints {
        ControlPoints::default()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// `true` if there are enough points to describe a curve.
    pub fn has_curve(&self) -> bool {
        self.points.len() > 1
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Remove the point at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Overwrite the point at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(pt) => {
                *pt = point;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the index of the first point strictly within `radius` of `pos`.
    ///
    /// Points are tested in sequence order, so overlapping points resolve
    /// to the lowest index.
    pub fn hit_test(&self, pos: Point, radius: f64) -> Option<usize> {
        let max_dist2 = radius * radius;
        self.points
            .iter()
            .position(|pt| (*pt - pos).hypot2() < max_dist2)
    }

    /// `true` if `index` is the first or last point.
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.points.len()
    }

    /// The control polygon: a polyline through every point in order.
    pub fn polygon(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pts = self.points.iter();
        if let Some(first) = pts.next() {
            path.move_to(*first);
            for pt in pts {
                path.line_to(*pt);
            }
        }
        path
    }

    /// The curve, flattened to `segments + 1` samples.
    pub fn curve(&self, segments: usize) -> Result<BezPath, CurveError> {
        casteljau::to_bez_path(&self.points, segments)
    }

    /// Evaluate the curve at `t`.
    pub fn eval(&self, t: f64) -> Result<Point, CurveError> {
        casteljau::evaluate(&self.points, t)
    }
}

impl From<Vec<Point>> for ControlPoints {
    fn from(points: Vec<Point>) -> ControlPoints {
        ControlPoints { points }
    }
}

impl std::iter::FromIterator<Point> for ControlPoints {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> ControlPoints {
        ControlPoints {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> ControlPoints {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn hit_radius_is_exclusive() {
        let points = pts(&[(100.0, 100.0)]);
        assert_eq!(points.hit_test(Point::new(105.0, 100.0), 6.0), Some(0));
        assert_eq!(points.hit_test(Point::new(103.0, 104.0), 6.0), Some(0));
        assert_eq!(points.hit_test(Point::new(106.1, 100.0), 6.0), None);
        assert_eq!(points.hit_test(Point::new(106.0, 100.0), 6.0), None);
    }

    #[test]
    fn overlapping_hits_pick_lowest_index() {
        let points = pts(&[(0.0, 0.0), (50.0, 50.0), (51.0, 50.0)]);
        assert_eq!(points.hit_test(Point::new(51.0, 50.0), 6.0), Some(1));
        assert_eq!(points.hit_test(Point::new(200.0, 200.0), 6.0), None);
        assert_eq!(ControlPoints::new().hit_test(Point::ORIGIN, 6.0), None);
    }

    #[test]
    fn remove_keeps_order() {
        let mut points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(points.remove(1), Some(Point::new(1.0, 1.0)));
        assert_eq!(points, pts(&[(0.0, 0.0), (2.0, 2.0)]));
        assert_eq!(points.remove(5), None);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut points = pts(&[(0.0, 0.0)]);
        assert!(!points.set(1, Point::new(9.0, 9.0)));
        assert!(points.set(0, Point::new(9.0, 9.0)));
        assert_eq!(points.get(0), Some(Point::new(9.0, 9.0)));
    }

    #[test]
    fn endpoints() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(points.is_endpoint(0));
        assert!(!points.is_endpoint(1));
        assert!(points.is_endpoint(2));
        let single = pts(&[(0.0, 0.0)]);
        assert!(single.is_endpoint(0));
    }

    #[test]
    fn polygon_visits_every_point() {
        assert!(ControlPoints::new().polygon().elements().is_empty());
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(points.polygon().elements().len(), 3);
        assert!(points.has_curve());
        assert!(!pts(&[(0.0, 0.0)]).has_curve());
    }
}
