//! Whole-model checks on the reference birdhouse

use birdhouse_core::BirdhouseParameters;
use birdhouse_panels::{Birdhouse, PanelKind};

fn reference() -> Birdhouse {
    Birdhouse::build(BirdhouseParameters::default()).expect("reference birdhouse builds")
}

#[test]
fn test_every_panel_has_a_single_outer_contour() {
    let house = reference();
    for panel in house.panels() {
        let outline = panel.outline();
        assert_eq!(
            outline.exteriors().count(),
            1,
            "{} should be one connected part",
            panel.name()
        );
        assert!(outline.area() > 0.0, "{} has no material", panel.name());
    }
}

#[test]
fn test_only_front_and_side_have_holes() {
    let house = reference();
    for panel in house.panels() {
        let holes = panel.outline().holes().count();
        match panel.kind {
            PanelKind::FrontPlate => assert_eq!(holes, 2),
            PanelKind::SidePlate => assert!(holes > 0),
            _ => assert_eq!(holes, 0, "{} should not have holes", panel.name()),
        }
    }
}

#[test]
fn test_front_slots_remove_material() {
    let house = reference();
    let dims = house.dimensions();
    let front = house.panel(PanelKind::FrontPlate).unwrap();

    // pentagon area minus 22 slots of 4x4 minus two holes
    let pentagon = dims.width * dims.front_height_side
        + 0.5 * dims.width * (dims.front_height_middle - dims.front_height_side);
    let slots = 22.0 * 16.0;
    let area = front.outline().area();
    assert!(area < pentagon - slots);
    assert!(area > pentagon - slots - 2.0 * std::f64::consts::PI * 100.0);
}

#[test]
fn test_roof_halves_are_mirror_phases() {
    let house = reference();
    let left = house.panel(PanelKind::RoofLeft).unwrap().outline();
    let right = house.panel(PanelKind::RoofRight).unwrap().outline();
    // same material, fingers shifted by one thickness
    assert!((left.area() - right.area()).abs() < 1e-3);
    assert_ne!(left, right);
}

#[test]
fn test_thicker_stock_means_fewer_connectors() {
    let thin = reference();
    let thick = Birdhouse::build(BirdhouseParameters {
        wall_thickness: 6.0,
        ..Default::default()
    })
    .unwrap();

    let count = |house: &Birdhouse, kind| house.panel(kind).unwrap().connectors;
    assert!(count(&thick, PanelKind::FrontPlate) < count(&thin, PanelKind::FrontPlate));
    assert!(count(&thick, PanelKind::SidePlate) < count(&thin, PanelKind::SidePlate));
}

#[test]
fn test_widest_valid_front_keeps_both_holes() {
    let house = Birdhouse::build(BirdhouseParameters {
        width: 90.0,
        space_top: 45.0,
        ..Default::default()
    })
    .unwrap();
    let front = house.panel(PanelKind::FrontPlate).unwrap().outline();
    assert_eq!(front.exteriors().count(), 1);
    assert_eq!(front.holes().count(), 2);
}

#[test]
fn test_low_mid_slide_is_rejected() {
    let result = Birdhouse::build(BirdhouseParameters {
        space_bottom: 6.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(birdhouse_core::Error::Parameter(_))));
}

#[test]
fn test_slides_match_derived_width() {
    let house = reference();
    let dims = house.dimensions();
    for kind in [PanelKind::BottomSlide, PanelKind::MidSlide, PanelKind::TopSlide] {
        let outline = house.panel(kind).unwrap().outline();
        let body = outline.exteriors().next().unwrap();
        // a tab-free stretch of the long edge lies on the slide body
        assert!(body.points.iter().any(|p| {
            (p[0] - (dims.wall_thickness + dims.slide_width)).abs() < 1e-4
        }));
    }
}
