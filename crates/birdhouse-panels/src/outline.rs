//! Closed cut contours extracted from a panel sketch.

use csgrs::sketch::Sketch;

/// Vertices closer than this are merged.
const MIN_VERTEX_DISTANCE: f64 = 1e-5;

/// Boolean operations snap vertices to a grid; compare within this.
pub const VERTEX_TOLERANCE: f64 = 1e-4;

/// A closed contour; the closing edge is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub points: Vec<[f64; 2]>,
    /// Interior cutout rather than an outer edge
    pub is_hole: bool,
}

impl Ring {
    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let [x0, y0] = self.points[i];
                let [x1, y1] = self.points[(i + 1) % n];
                x0 * y1 - x1 * y0
            })
            .sum::<f64>()
            / 2.0
    }

    /// Whether the ring passes through `(x, y)`.
    pub fn has_vertex(&self, x: f64, y: f64) -> bool {
        self.points
            .iter()
            .any(|p| (p[0] - x).abs() < VERTEX_TOLERANCE && (p[1] - y).abs() < VERTEX_TOLERANCE)
    }

    /// Total cut length, closing edge included.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let [x0, y0] = self.points[i];
                let [x1, y1] = self.points[(i + 1) % n];
                ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
            })
            .sum()
    }
}

/// All contours of one panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub rings: Vec<Ring>,
}

impl Outline {
    pub fn from_sketch(sketch: &Sketch<()>) -> Self {
        let mut rings = Vec::new();
        let mp = sketch.to_multipolygon();
        for poly in &mp.0 {
            if let Some(ring) = ring_from_coords(poly.exterior().0.iter().map(|c| [c.x, c.y]), false)
            {
                rings.push(ring);
            }
            for interior in poly.interiors() {
                if let Some(ring) = ring_from_coords(interior.0.iter().map(|c| [c.x, c.y]), true) {
                    rings.push(ring);
                }
            }
        }
        Self { rings }
    }

    pub fn exteriors(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter().filter(|r| !r.is_hole)
    }

    pub fn holes(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter().filter(|r| r.is_hole)
    }

    /// Material area: outer rings minus holes.
    pub fn area(&self) -> f64 {
        self.exteriors().map(|r| r.signed_area().abs()).sum::<f64>()
            - self.holes().map(|r| r.signed_area().abs()).sum::<f64>()
    }

    /// Laser path length over every ring.
    pub fn cut_length(&self) -> f64 {
        self.rings.iter().map(Ring::perimeter).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

fn ring_from_coords<I>(coords: I, is_hole: bool) -> Option<Ring>
where
    I: Iterator<Item = [f64; 2]>,
{
    let mut points: Vec<[f64; 2]> = Vec::new();
    for p in coords {
        if let Some(last) = points.last() {
            if distance(*last, p) < MIN_VERTEX_DISTANCE {
                continue;
            }
        }
        points.push(p);
    }

    // geo closes rings by repeating the first vertex
    if points.len() > 1 && distance(points[0], points[points.len() - 1]) < MIN_VERTEX_DISTANCE {
        points.pop();
    }

    (points.len() > 2).then_some(Ring { points, is_hole })
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}
