//! The textual readout of the control points.

use crate::points::ControlPoints;

/// A sink for the coordinate readout.
///
/// The editor calls [`show`](Readout::show) after every change to the
/// control points.
pub trait Readout {
    fn show(&mut self, text: &str);
}

/// Keeps only the latest readout.
impl Readout for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Keeps every readout, oldest first.
impl Readout for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}

impl<T: Readout + ?Sized> Readout for &mut T {
    fn show(&mut self, text: &str) {
        (**self).show(text)
    }
}

/// Format the points as a pretty-printed JSON array of `["x", "y"]` pairs,
/// each coordinate with one decimal place.
pub fn format_points(points: &ControlPoints) -> String {
    let pairs: Vec<[String; 2]> = points
        .iter()
        .map(|pt| [one_decimal(pt.x), one_decimal(pt.y)])
        .collect();
    serde_json::to_string_pretty(&pairs).unwrap_or_default()
}

/// Format `x` with one decimal place, rounding exact ties away from zero.
///
/// `{:.1}` rounds ties to even. The only doubles exactly halfway between
/// two tenths have a fractional part of `.25` or `.75`, i.e. `4x` is an
/// integer and `2x` is not; both products are exact.
fn one_decimal(x: f64) -> String {
    // no "-0.0"
    let x = if x == 0.0 { 0.0 } else { x };
    let is_tie = (x * 4.0).fract() == 0.0 && (x * 2.0).fract() != 0.0;
    if !is_tie {
        return format!("{:.1}", x);
    }
    // `10x` is exact for |x| < 2^48
    let tenths = (x.abs() * 10.0).round() as u64;
    let sign = if x < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn empty() {
        assert_eq!(format_points(&ControlPoints::new()), "[]");
    }

    #[test]
    fn one_decimal_place() {
        let points: ControlPoints = vec![Point::new(10.0, 12.345), Point::new(99.96, 0.04)].into();
        let expected = r#"[
  [
    "10.0",
    "12.3"
  ],
  [
    "100.0",
    "0.0"
  ]
]"#;
        assert_eq!(format_points(&points), expected);
    }

    #[test]
    fn ties_round_away_from_zero() {
        let points: ControlPoints = vec![Point::new(10.25, 0.75)].into();
        assert_eq!(
            format_points(&points),
            "[\n  [\n    \"10.3\",\n    \"0.8\"\n  ]\n]"
        );
        assert_eq!(one_decimal(2.25), "2.3");
        assert_eq!(one_decimal(-2.25), "-2.3");
        assert_eq!(one_decimal(-0.75), "-0.8");
        assert_eq!(one_decimal(0.125), "0.1");
        assert_eq!(one_decimal(-0.0), "0.0");
        assert_eq!(one_decimal(-0.04), "-0.0");
        assert_eq!(one_decimal(7.0), "7.0");
    }

    #[test]
    fn sinks() {
        let mut latest = String::from("stale");
        latest.show("[]");
        assert_eq!(latest, "[]");

        let mut history = Vec::new();
        history.show("a");
        history.show("b");
        assert_eq!(history, vec!["a".to_string(), "b".to_string()]);
    }
}
