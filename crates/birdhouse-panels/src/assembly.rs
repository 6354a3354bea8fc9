//! Assembly placement
//!
//! Each flat panel is extruded by the wall thickness along its normal and
//! moved into position with a rigid transform. Assembly coordinates: `x`
//! across the front, `y` from the front face towards the back, `z` up from
//! the ground.

use birdhouse_core::Dimensions;
use csgrs::mesh::Mesh;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::panels::{slide_spans, Panel, PanelKind};

/// Rigid placement of a panel's `(u, v)` plane in assembly space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Vector3<f64>,
    pub u_axis: Vector3<f64>,
    pub v_axis: Vector3<f64>,
}

impl Placement {
    pub fn new(origin: Vector3<f64>, u_axis: Vector3<f64>, v_axis: Vector3<f64>) -> Self {
        Self {
            origin,
            u_axis: u_axis.normalize(),
            v_axis: v_axis.normalize(),
        }
    }

    /// Extrusion direction, `u x v`.
    pub fn normal(&self) -> Vector3<f64> {
        self.u_axis.cross(&self.v_axis)
    }

    pub fn matrix(&self) -> Matrix4<f64> {
        let (u, v, n, o) = (self.u_axis, self.v_axis, self.normal(), self.origin);
        Matrix4::new(
            u.x, v.x, n.x, o.x, //
            u.y, v.y, n.y, o.y, //
            u.z, v.z, n.z, o.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Map a local `(u, v, w)` point, `w` along the normal.
    pub fn apply(&self, u: f64, v: f64, w: f64) -> Point3<f64> {
        self.matrix().transform_point(&Point3::new(u, v, w))
    }
}

/// Display color of a part, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const WOOD: Color = Color::rgb(222, 184, 135);
const WOOD_DARK: Color = Color::rgb(160, 120, 80);
const SLIDE: Color = Color::rgb(205, 170, 125);
const ROOF: Color = Color::rgb(139, 69, 19);

/// Where a panel copy goes and how it is shown.
#[derive(Debug, Clone)]
pub struct PartSlot {
    pub name: &'static str,
    pub kind: PanelKind,
    pub placement: Placement,
    pub color: Color,
}

/// A placed, extruded panel copy.
#[derive(Debug, Clone)]
pub struct AssemblyPart {
    pub name: String,
    pub kind: PanelKind,
    pub color: Color,
    pub mesh: Mesh<()>,
}

/// Placement of every panel copy, in build order.
pub fn part_slots(dims: &Dimensions) -> Vec<PartSlot> {
    let t = dims.wall_thickness;
    let x = Vector3::x();
    let y = Vector3::y();
    let z = Vector3::z();

    let mut slots = vec![
        PartSlot {
            name: "front_plate",
            kind: PanelKind::FrontPlate,
            placement: Placement::new(Vector3::new(0.0, t, dims.front_base), x, z),
            color: WOOD,
        },
        PartSlot {
            name: "back_plate",
            kind: PanelKind::BackPlate,
            placement: Placement::new(Vector3::new(0.0, dims.depth, 0.0), x, z),
            color: WOOD,
        },
        PartSlot {
            name: "side_left",
            kind: PanelKind::SidePlate,
            placement: Placement::new(Vector3::zeros(), y, z),
            color: WOOD_DARK,
        },
        PartSlot {
            name: "side_right",
            kind: PanelKind::SidePlate,
            placement: Placement::new(Vector3::new(dims.width - t, 0.0, 0.0), y, z),
            color: WOOD_DARK,
        },
    ];

    for span in slide_spans(dims) {
        let kind = span.level.kind();
        slots.push(PartSlot {
            name: kind.file_stem(),
            kind,
            placement: Placement::new(Vector3::new(0.0, span.y0, span.z), x, y),
            color: SLIDE,
        });
    }

    let a = FRAC_1_SQRT_2;
    let left_up = Vector3::new(a, 0.0, a);
    let right_up = Vector3::new(-a, 0.0, a);
    slots.push(PartSlot {
        name: "roof_left",
        kind: PanelKind::RoofLeft,
        placement: Placement::new(
            Vector3::new(0.0, dims.depth + t, dims.side_height) - left_up * t,
            -y,
            left_up,
        ),
        color: ROOF,
    });
    slots.push(PartSlot {
        name: "roof_right",
        kind: PanelKind::RoofRight,
        placement: Placement::new(
            Vector3::new(dims.width, -t, dims.side_height) - right_up * t,
            y,
            right_up,
        ),
        color: ROOF,
    });

    slots
}

/// Extrude a panel and move it into place.
pub fn place(panel: &Panel, slot: &PartSlot, thickness: f64) -> AssemblyPart {
    let mesh = panel.sketch.extrude(thickness).transform(&slot.placement.matrix());
    AssemblyPart {
        name: slot.name.to_string(),
        kind: slot.kind,
        color: slot.color,
        mesh,
    }
}
