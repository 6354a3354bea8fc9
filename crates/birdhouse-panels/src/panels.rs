//! Panel profiles
//!
//! Every panel is drawn flat in its own `(u, v)` plane with non-negative
//! coordinates and later extruded by the wall thickness. Joints come from
//! two operations: slots and tabs from connector rows, and the footprint of
//! a neighbouring panel subtracted where it passes through this panel's slab.

pub mod types;

pub use types::{PanelKind, SlideLevel, SlideSpan};

use birdhouse_core::Dimensions;
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use tracing::debug;

use crate::connectors::{
    connector_count, distribute_connectors, distribute_connectors_horizontal,
};
use crate::outline::Outline;
use crate::shapes::{circle_at, polygon, rect, shifted, union_all};

/// Phase of the slot rows cut into the front and back plates.
const PLATE_SLOT_PHASE: u32 = 1;

/// One flat part of the birdhouse.
#[derive(Debug, Clone)]
pub struct Panel {
    pub kind: PanelKind,
    pub sketch: Sketch<()>,
    /// Slots, tabs or footprint notches cut along the joints
    pub connectors: usize,
}

impl Panel {
    pub fn name(&self) -> &'static str {
        self.kind.file_stem()
    }

    pub fn outline(&self) -> Outline {
        Outline::from_sketch(&self.sketch)
    }
}

/// Front plate: pentagon with two entrance holes and slots on both
/// vertical edges.
pub fn front_plate(dims: &Dimensions, hole_segments: usize) -> Panel {
    let w = dims.width;
    let hm = dims.front_height_middle;
    let hs = dims.front_height_side;
    let t = dims.wall_thickness;

    let body = polygon(&[[0.0, 0.0], [w, 0.0], [w, hs], [w / 2.0, hm], [0.0, hs]]);
    let r = dims.hole_radius;
    let holes = circle_at(w / 2.0, hm * 0.5, r, hole_segments)
        .union(&circle_at(w / 2.0, hm * 0.75, r, hole_segments));

    let slots = distribute_connectors(t, hs, PLATE_SLOT_PHASE);
    let sketch = body
        .difference(&holes)
        .difference(&slots)
        .difference(&shifted(&slots, w, 0.0));

    let connectors = 2 * connector_count(t, hs);
    debug!("front plate: {} slots, eave {:.1}mm", connectors, hs);

    Panel {
        kind: PanelKind::FrontPlate,
        sketch,
        connectors,
    }
}

/// Back plate: full-height pentagon reaching the ridge, slotted on both
/// vertical edges.
pub fn back_plate(dims: &Dimensions) -> Panel {
    let w = dims.width;
    let sh = dims.side_height;
    let t = dims.wall_thickness;

    let body = polygon(&[
        [0.0, 0.0],
        [w, 0.0],
        [w, sh],
        [w / 2.0, dims.height],
        [0.0, sh],
    ]);
    let slots = distribute_connectors(t, sh, PLATE_SLOT_PHASE);
    let sketch = body.difference(&slots).difference(&shifted(&slots, w, 0.0));

    let connectors = 2 * connector_count(t, sh);
    debug!("back plate: {} slots", connectors);

    Panel {
        kind: PanelKind::BackPlate,
        sketch,
        connectors,
    }
}

/// Where each slide sits inside the side plates.
pub fn slide_spans(dims: &Dimensions) -> [SlideSpan; 3] {
    let t = dims.wall_thickness;
    let open_front = dims.depth - t;
    [
        SlideSpan {
            level: SlideLevel::Bottom,
            z: dims.bottom_slide_level,
            y0: 0.0,
            length: open_front,
        },
        SlideSpan {
            level: SlideLevel::Mid,
            z: dims.mid_slide_level,
            y0: 0.0,
            length: open_front,
        },
        SlideSpan {
            level: SlideLevel::Top,
            z: dims.top_slide_level,
            y0: t,
            length: dims.depth - 2.0 * t,
        },
    ]
}

/// Horizontal slide between the side plates with tabs on both long edges.
pub fn slide(dims: &Dimensions, span: &SlideSpan) -> Panel {
    let t = dims.wall_thickness;
    let w = dims.width;

    let tabs = distribute_connectors(t, span.length, span.level.phase());
    let sketch = rect(t, 0.0, t + dims.slide_width, span.length)
        .union(&shifted(&tabs, t, 0.0))
        .union(&shifted(&tabs, w - t, 0.0));

    let connectors = 2 * connector_count(t, span.length);
    debug!(
        "{}: {} tabs, {:.1}mm long at z={:.1}",
        span.level.kind(),
        connectors,
        span.length,
        span.z
    );

    Panel {
        kind: span.level.kind(),
        sketch,
        connectors,
    }
}

/// Region of the front plate inside a side plate's slab, in side plate
/// coordinates (`u` = depth, `v` = height).
fn front_footprint(dims: &Dimensions) -> Sketch<()> {
    let t = dims.wall_thickness;
    let base = dims.front_base;
    let strip = rect(0.0, base, t, dims.side_height);
    let slots = shifted(
        &distribute_connectors(t, dims.front_height_side, PLATE_SLOT_PHASE),
        0.0,
        base,
    );
    strip.difference(&slots)
}

fn back_footprint(dims: &Dimensions) -> Sketch<()> {
    let t = dims.wall_thickness;
    let strip = rect(dims.depth - t, 0.0, dims.depth, dims.side_height);
    let slots = shifted(
        &distribute_connectors(t, dims.side_height, PLATE_SLOT_PHASE),
        dims.depth,
        0.0,
    );
    strip.difference(&slots)
}

/// Slide tabs passing through a side plate.
fn slide_footprint(dims: &Dimensions, span: &SlideSpan) -> Sketch<()> {
    let t = dims.wall_thickness;
    let strip = rect(span.y0, span.z, span.y0 + span.length, span.z + t);
    let tabs = shifted(
        &distribute_connectors_horizontal(t, span.length, span.level.phase()),
        span.y0,
        span.z,
    );
    strip.intersection(&tabs)
}

/// Side plate: plain rectangle minus the footprints of the front, the back
/// and the three slides. Both sides are cut from the same drawing.
pub fn side_plate(dims: &Dimensions) -> Panel {
    let t = dims.wall_thickness;
    let spans = slide_spans(dims);

    let footprints = union_all(
        [front_footprint(dims), back_footprint(dims)]
            .into_iter()
            .chain(spans.iter().map(|span| slide_footprint(dims, span))),
    );
    let sketch = rect(0.0, 0.0, dims.depth, dims.side_height).difference(&footprints);

    let front_tabs = connector_count(t, dims.front_height_side);
    let back_tabs = connector_count(t, dims.side_height);
    let slide_slots: usize = spans
        .iter()
        .map(|span| connector_count(t, span.length))
        .sum();
    let connectors = front_tabs + back_tabs + slide_slots;
    debug!(
        "side plate: {} front tabs, {} back tabs, {} slide slots",
        front_tabs, back_tabs, slide_slots
    );

    Panel {
        kind: PanelKind::SidePlate,
        sketch,
        connectors,
    }
}

/// Roof half. `u` runs front to back, `v` from the eave up the slope to the
/// ridge, where a finger row meets the other half.
fn roof(dims: &Dimensions, kind: PanelKind, phase: u32) -> Panel {
    let t = dims.wall_thickness;
    let depth = dims.roof_depth;
    let slope = dims.roof_slope;

    let ridge = shifted(
        &distribute_connectors_horizontal(t, depth, phase),
        0.0,
        slope,
    );
    let sketch = rect(0.0, 0.0, depth, slope).union(&ridge);

    let connectors = connector_count(t, depth);
    debug!("{}: {} ridge fingers, slope {:.1}mm", kind, connectors, slope);

    Panel {
        kind,
        sketch,
        connectors,
    }
}

pub fn roof_left(dims: &Dimensions) -> Panel {
    roof(dims, PanelKind::RoofLeft, 0)
}

pub fn roof_right(dims: &Dimensions) -> Panel {
    roof(dims, PanelKind::RoofRight, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{assert_bounds, bounds};
    use birdhouse_core::BirdhouseParameters;

    fn dims() -> Dimensions {
        Dimensions::from(&BirdhouseParameters::default())
    }

    #[test]
    fn test_front_plate_bounds_and_holes() {
        let panel = front_plate(&dims(), 64);
        assert_bounds(&panel.sketch, (0.0, 0.0, 60.0, 125.0));

        let outline = panel.outline();
        assert_eq!(outline.exteriors().count(), 1);
        assert_eq!(outline.holes().count(), 2);
        assert_eq!(panel.connectors, 22);
    }

    #[test]
    fn test_front_plate_slot_depth() {
        let panel = front_plate(&dims(), 64);
        let outline = panel.outline();
        let exterior = outline.exteriors().next().unwrap();
        // bottom of the first slot on the left edge
        assert!(exterior.has_vertex(4.0, 4.0));
        assert!(exterior.has_vertex(56.0, 8.0));
    }

    #[test]
    fn test_back_plate_reaches_ridge() {
        let panel = back_plate(&dims());
        assert_bounds(&panel.sketch, (0.0, 0.0, 60.0, 160.0));
        assert_eq!(panel.outline().holes().count(), 0);
        assert_eq!(panel.connectors, 32);
    }

    #[test]
    fn test_slide_tabs_protrude() {
        let d = dims();
        let spans = slide_spans(&d);
        let bottom = slide(&d, &spans[0]);
        assert_bounds(&bottom.sketch, (0.0, 0.0, 60.0, 56.0));
        assert_eq!(bottom.connectors, 14);

        let top = slide(&d, &spans[2]);
        assert_eq!(top.kind, PanelKind::TopSlide);
        assert_bounds(&top.sketch, (0.0, 0.0, 60.0, 52.0));
    }

    #[test]
    fn test_slide_phases_differ() {
        let d = dims();
        let spans = slide_spans(&d);
        let bottom = slide(&d, &spans[0]).outline();
        let mid = slide(&d, &spans[1]).outline();
        let b = bottom.exteriors().next().unwrap();
        let m = mid.exteriors().next().unwrap();
        assert!(b.has_vertex(0.0, 0.0));
        assert!(!m.has_vertex(0.0, 0.0));
        assert!(m.has_vertex(0.0, 4.0));
    }

    #[test]
    fn test_side_plate_has_slide_slots() {
        let panel = side_plate(&dims());
        assert_bounds(&panel.sketch, (0.0, 0.0, 60.0, 130.0));
        // mid and top slide tabs pass through closed slots
        assert!(panel.outline().holes().count() > 0);
        assert!(panel.connectors > 0);
    }

    #[test]
    fn test_side_plate_keeps_tab_where_front_has_slot() {
        let d = dims();
        let side = side_plate(&d).outline();
        let front_slot_bottom = d.front_base + 4.0;
        let exterior = side.exteriors().next().unwrap();
        // the first tab sits flush with the side plate's front edge
        assert!(exterior.has_vertex(0.0, front_slot_bottom));
        assert!(exterior.has_vertex(0.0, front_slot_bottom + 4.0));
    }

    #[test]
    fn test_roof_halves_interlock() {
        let d = dims();
        let left = roof_left(&d);
        let right = roof_right(&d);
        let (_, _, _, left_top) = bounds(&left.sketch).unwrap();
        assert!((left_top - (d.roof_slope + 4.0)).abs() < 1e-4);

        let l = left.outline();
        let r = right.outline();
        let slope = d.roof_slope;
        let ridge_tip = |o: &Outline, u: f64| {
            o.exteriors().next().unwrap().has_vertex(u, slope + 4.0)
        };
        assert!(ridge_tip(&l, 0.0));
        assert!(!ridge_tip(&r, 0.0));
        assert!(ridge_tip(&r, 4.0));
    }
}
