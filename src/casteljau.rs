//! Evaluation of Bézier curves of arbitrary degree.
//!
//! Curves are evaluated with de Casteljau's algorithm: the control points
//! are repeatedly replaced by the affine interpolation of each adjacent
//! pair until a single point remains. The reduction is done in place over
//! a reusable buffer, so a curve with thousands of control points costs no
//! stack depth.

use kurbo::{BezPath, Point};

use crate::error::CurveError;

/// Evaluate the Bézier curve defined by `points` at parameter `t`.
///
/// `t` is conventionally in `0.0..=1.0`; values outside that range
/// extrapolate the curve.
///
/// # Errors
///
/// Returns [`CurveError::EmptyControlPoints`] if `points` is empty.
pub fn evaluate(points: &[Point], t: f64) -> Result<Point, CurveError> {
    Casteljau::new().eval(points, t)
}

/// Sample the curve at `segments + 1` evenly spaced parameters from `0` to `1`.
pub fn sample(points: &[Point], segments: usize) -> Result<Vec<Point>, CurveError> {
    if segments == 0 {
        return Err(CurveError::ZeroSegments);
    }
    let mut casteljau = Casteljau::with_capacity(points.len());
    (0..=segments)
        .map(|i| casteljau.eval(points, i as f64 / segments as f64))
        .collect()
}

/// Flatten the curve into a polyline through `segments + 1` samples.
pub fn to_bez_path(points: &[Point], segments: usize) -> Result<BezPath, CurveError> {
    let samples = sample(points, segments)?;
    let mut path = BezPath::new();
    path.move_to(samples[0]);
    for pt in &samples[1..] {
        path.line_to(*pt);
    }
    Ok(path)
}

/// A de Casteljau evaluator that keeps its scratch buffer between calls.
#[derive(Clone, Debug, Default)]
pub struct Casteljau {
    buf: Vec<Point>,
}

impl Casteljau {
    pub fn new() -> Casteljau {
        Casteljau::default()
    }

    pub fn with_capacity(capacity: usize) -> Casteljau {
        Casteljau {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Evaluate the curve through `points` at `t`.
    ///
    /// Each reduction step writes `(1 - t) * p[i] + t * p[i + 1]` into slot
    /// `i`, then drops the last slot; after `len - 1` steps slot zero holds
    /// the point on the curve.
    pub fn eval(&mut self, points: &[Point], t: f64) -> Result<Point, CurveError> {
        if points.is_empty() {
            return Err(CurveError::EmptyControlPoints);
        }
        self.buf.clear();
        self.buf.extend_from_slice(points);
        let mt = 1.0 - t;
        while self.buf.len() > 1 {
            for i in 0..self.buf.len() - 1 {
                let (p0, p1) = (self.buf[i], self.buf[i + 1]);
                // not `Point::lerp`, which rounds differently
                self.buf[i] = Point::new(mt * p0.x + t * p1.x, mt * p0.y + t * p1.y);
            }
            self.buf.pop();
        }
        Ok(self.buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// The textbook recursive formulation, for comparison.
    fn recursive(points: &[Point], t: f64) -> Point {
        if points.len() == 1 {
            return points[0];
        }
        let next: Vec<_> = points
            .windows(2)
            .map(|w| {
                Point::new(
                    (1.0 - t) * w[0].x + t * w[1].x,
                    (1.0 - t) * w[0].y + t * w[1].y,
                )
            })
            .collect();
        recursive(&next, t)
    }

    #[test]
    fn single_point_is_constant() {
        let p = Point::new(3.5, -2.0);
        for &t in &[-1.0, 0.0, 0.25, 1.0, 7.0] {
            assert_eq!(evaluate(&[p], t), Ok(p));
        }
    }

    #[test]
    fn linear_interpolation() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(30.0, -40.0);
        assert_eq!(evaluate(&[a, b], 0.0), Ok(a));
        assert_eq!(evaluate(&[a, b], 1.0), Ok(b));
        assert_eq!(evaluate(&[a, b], 0.5), Ok(Point::new(20.0, -10.0)));
    }

    #[test]
    fn quadratic_midpoint() {
        let pts = [Point::new(0., 0.), Point::new(1., 2.), Point::new(2., 0.)];
        assert_eq!(evaluate(&pts, 0.5), Ok(Point::new(1.0, 1.0)));
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert_eq!(evaluate(&[a, b], 2.0), Ok(Point::new(20.0, 20.0)));
        assert_eq!(evaluate(&[a, b], -1.0), Ok(Point::new(-10.0, -10.0)));
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(evaluate(&[], 0.5), Err(CurveError::EmptyControlPoints));
        assert_eq!(sample(&[], 10), Err(CurveError::EmptyControlPoints));
        assert_eq!(
            sample(&[Point::ORIGIN], 0),
            Err(CurveError::ZeroSegments)
        );
    }

    #[test]
    fn matches_recursive_formulation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for n in 1..12 {
            let pts: Vec<_> = (0..n)
                .map(|_| Point::new(rng.gen_range(0.0, 800.0), rng.gen_range(0.0, 600.0)))
                .collect();
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                assert_eq!(evaluate(&pts, t), Ok(recursive(&pts, t)));
            }
        }
    }

    #[test]
    fn high_degree_does_not_overflow() {
        let pts = vec![Point::new(4.0, 2.0); 5000];
        let p = evaluate(&pts, 0.3).unwrap();
        approx::assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn samples_include_endpoints() {
        let pts = [Point::new(0., 0.), Point::new(50., 100.), Point::new(100., 0.)];
        let samples = sample(&pts, 200).unwrap();
        assert_eq!(samples.len(), 201);
        assert_eq!(samples[0], pts[0]);
        assert_eq!(samples[200], pts[2]);
        assert_eq!(samples[100], Point::new(50.0, 50.0));
    }

    #[test]
    fn path_is_a_polyline() {
        let pts = [Point::new(0., 0.), Point::new(10., 10.)];
        let path = to_bez_path(&pts, 4).unwrap();
        assert_eq!(path.elements().len(), 5);
    }
}
