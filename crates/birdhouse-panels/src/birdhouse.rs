//! Birdhouse model: every panel built once from validated parameters.

use birdhouse_core::{BirdhouseParameters, Dimensions, Result};
use tracing::{debug, info};

use crate::assembly::{part_slots, place, AssemblyPart};
use crate::panels::{
    back_plate, front_plate, roof_left, roof_right, side_plate, slide, slide_spans, Panel,
    PanelKind,
};

pub struct Birdhouse {
    params: BirdhouseParameters,
    dims: Dimensions,
    panels: Vec<Panel>,
}

impl Birdhouse {
    pub fn build(params: BirdhouseParameters) -> Result<Self> {
        params.validate()?;
        let dims = Dimensions::from(&params);
        debug!("Derived dimensions: {:?}", dims);

        let mut panels = vec![
            front_plate(&dims, params.hole_segments),
            back_plate(&dims),
            side_plate(&dims),
        ];
        panels.extend(slide_spans(&dims).iter().map(|span| slide(&dims, span)));
        panels.push(roof_left(&dims));
        panels.push(roof_right(&dims));

        info!(
            "Built {} panels for a {}x{}x{}mm birdhouse ({}mm stock)",
            panels.len(),
            params.width,
            params.depth,
            params.height,
            params.wall_thickness
        );

        Ok(Self {
            params,
            dims,
            panels,
        })
    }

    pub fn params(&self) -> &BirdhouseParameters {
        &self.params
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Extruded copies of every panel in assembly position.
    pub fn assembly(&self) -> Vec<AssemblyPart> {
        part_slots(&self.dims)
            .iter()
            .filter_map(|slot| {
                self.panel(slot.kind)
                    .map(|panel| place(panel, slot, self.dims.wall_thickness))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_all_panels_in_order() {
        let house = Birdhouse::build(BirdhouseParameters::default()).unwrap();
        let kinds: Vec<PanelKind> = house.panels().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PanelKind::ALL.to_vec());
    }

    #[test]
    fn test_invalid_parameters_are_reported() {
        let params = BirdhouseParameters {
            wall_thickness: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            Birdhouse::build(params),
            Err(birdhouse_core::Error::Parameter(_))
        ));
    }

    #[test]
    fn test_assembly_has_nine_parts() {
        let house = Birdhouse::build(BirdhouseParameters::default()).unwrap();
        let parts = house.assembly();
        assert_eq!(parts.len(), 9);
        assert_eq!(
            parts.iter().filter(|p| p.kind == PanelKind::SidePlate).count(),
            2
        );
    }
}
