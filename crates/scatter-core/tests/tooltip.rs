// File: crates/scatter-core/tests/tooltip.rs
// Purpose: Pointer-driven tooltip transitions reflected into the scene graph.

mod common;

use common::two_riders;
use scatter_core::{ChartBuilder, ChartOptions, Point, Theme, TooltipController};

#[test]
fn hover_shows_then_hides_tooltip() {
    let records = two_riders();
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).unwrap();
    let mut scene = chart.to_scene(&Theme::light());
    let mut ctl = TooltipController::new();

    // Pointer over the second dot, in outer-surface coordinates.
    let p = chart.points[1].pos;
    let page = Point::new(p.x + chart.frame.left, p.y + chart.frame.top);
    let state = ctl.pointer_move(&chart, &records, page).clone();
    scene.set_tooltip(state.to_element());

    let tip = scene.find_by_id("tooltip").unwrap();
    assert_eq!(tip.style("opacity"), Some("0.8"));
    assert_eq!(tip.get_attr("data-year"), Some("1996"));
    let body = tip.text_content();
    assert!(body.contains("B: Y"), "tooltip body was {body:?}");
    assert!(body.contains("Time: 36:50"));
    assert!(body.contains("Admitted"));

    // Moving inside the same dot keeps position; leaving hides it.
    let nudged = ctl.pointer_move(&chart, &records, Point::new(page.x + 2.0, page.y)).clone();
    assert_eq!(nudged, state);

    let hidden = ctl.pointer_move(&chart, &records, Point::new(5.0, 5.0)).clone();
    scene.set_tooltip(hidden.to_element());
    assert_eq!(scene.find_by_id("tooltip").unwrap().style("opacity"), Some("0"));
}

#[test]
fn moving_between_dots_switches_content() {
    let records = two_riders();
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).unwrap();
    let mut ctl = TooltipController::new();
    let outer = |i: usize| {
        let p = chart.points[i].pos;
        Point::new(p.x + chart.frame.left, p.y + chart.frame.top)
    };

    assert_eq!(ctl.pointer_move(&chart, &records, outer(0)).hovered(), Some(0));
    let s = ctl.pointer_move(&chart, &records, outer(1)).clone();
    assert_eq!(s.hovered(), Some(1));
    assert!(s.to_element().text_content().starts_with("B: Y"));
    assert!(!ctl.pointer_leave().is_visible());
}
