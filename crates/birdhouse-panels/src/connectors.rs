//! Finger joint connectors
//!
//! A connector is a rectangular tab `2 * thickness` wide across the edge and
//! `thickness` high along it, centered on the edge line so that half of it
//! lies on each side. Unioned with a panel it becomes a tab protruding by
//! `thickness`; subtracted from a panel it becomes a slot of that depth.
//!
//! Rows are repeated every `2 * thickness`. The `start` phase shifts the row
//! by whole thicknesses, so phase 0 and phase 1 rows over the same edge are
//! complementary and interlock.

use csgrs::sketch::Sketch;

use crate::shapes::{rect, union_all};

/// Number of connectors that fit along `length`. Partial space is ignored.
pub fn connector_count(thickness: f64, length: f64) -> usize {
    if !(thickness.is_finite() && length.is_finite()) || thickness <= 0.0 || length <= 0.0 {
        return 0;
    }
    (length / (thickness * 2.0)).floor() as usize
}

/// Along-edge `(lo, hi)` interval of every connector in a row.
pub fn connector_spans(thickness: f64, length: f64, start: u32) -> Vec<(f64, f64)> {
    (0..connector_count(thickness, length))
        .map(|i| {
            let center = thickness * (i as f64 * 2.0 + start as f64) + thickness / 2.0;
            (center - thickness / 2.0, center + thickness / 2.0)
        })
        .collect()
}

/// Row of connectors along the `v` axis, centered on `u = 0`.
///
/// Returns an empty sketch when nothing fits, including for a non-positive
/// thickness.
pub fn distribute_connectors(thickness: f64, length: f64, start: u32) -> Sketch<()> {
    union_all(
        connector_spans(thickness, length, start)
            .into_iter()
            .map(|(lo, hi)| rect(-thickness, lo, thickness, hi)),
    )
}

/// Row of connectors along the `u` axis, centered on `v = 0`.
pub fn distribute_connectors_horizontal(thickness: f64, length: f64, start: u32) -> Sketch<()> {
    union_all(
        connector_spans(thickness, length, start)
            .into_iter()
            .map(|(lo, hi)| rect(lo, -thickness, hi, thickness)),
    )
}
