//! Small sketch constructors shared by the panel builders.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Vector3};

/// Axis aligned rectangle spanning `(x0, y0)` to `(x1, y1)`.
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Sketch<()> {
    Sketch::polygon(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]], None)
}

/// Closed polygon through the given points, counter-clockwise.
pub fn polygon(points: &[[f64; 2]]) -> Sketch<()> {
    Sketch::polygon(points, None)
}

/// Circle of `radius` centered at `(cx, cy)`.
pub fn circle_at(cx: f64, cy: f64, radius: f64, segments: usize) -> Sketch<()> {
    Sketch::circle(radius, segments, None).transform(&Matrix4::new_translation(&Vector3::new(
        cx, cy, 0.0,
    )))
}

/// Move a sketch within its plane.
pub fn shifted(sketch: &Sketch<()>, dx: f64, dy: f64) -> Sketch<()> {
    sketch.transform(&Matrix4::new_translation(&Vector3::new(dx, dy, 0.0)))
}

/// Union of all sketches, empty when there are none.
pub fn union_all<I>(sketches: I) -> Sketch<()>
where
    I: IntoIterator<Item = Sketch<()>>,
{
    let mut iter = sketches.into_iter();
    let Some(first) = iter.next() else {
        return Sketch::new();
    };
    iter.fold(first, |merged, s| merged.union(&s))
}

/// Flat `(min_x, min_y, max_x, max_y)` bounds of a sketch's polygons.
pub fn bounds(sketch: &Sketch<()>) -> Option<(f64, f64, f64, f64)> {
    let mp = sketch.to_multipolygon();
    let mut coords = mp
        .0
        .iter()
        .flat_map(|poly| poly.exterior().0.iter())
        .peekable();
    coords.peek()?;

    let mut b = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in coords {
        b.0 = b.0.min(c.x);
        b.1 = b.1.min(c.y);
        b.2 = b.2.max(c.x);
        b.3 = b.3.max(c.y);
    }
    Some(b)
}

/// Compare sketch bounds within the boolean snapping tolerance.
#[cfg(test)]
pub(crate) fn assert_bounds(sketch: &Sketch<()>, expected: (f64, f64, f64, f64)) {
    let b = bounds(sketch).expect("sketch has no polygons");
    let tol = crate::outline::VERTEX_TOLERANCE;
    assert!(
        (b.0 - expected.0).abs() < tol
            && (b.1 - expected.1).abs() < tol
            && (b.2 - expected.2).abs() < tol
            && (b.3 - expected.3).abs() < tol,
        "bounds {:?} != expected {:?}",
        b,
        expected
    );
}
