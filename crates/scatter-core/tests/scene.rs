// File: crates/scatter-core/tests/scene.rs
// Purpose: End-to-end chart construction and scene graph properties.

mod common;

use common::{rec, sample, two_riders};
use scatter_core::{ChartBuilder, ChartOptions, Theme};

fn attr_f64(el: &scatter_core::Element, key: &str) -> f64 {
    el.get_attr(key).expect(key).parse().expect("numeric attribute")
}

#[test]
fn two_record_scenario() {
    let records = two_riders();
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).expect("build");
    assert_eq!(chart.x_domain(), (1993.0, 1997.0));

    let scene = chart.to_scene(&Theme::light());
    let dots = scene.dots();
    assert_eq!(dots.len(), 2);
    assert_ne!(dots[0].style("fill"), dots[1].style("fill"));

    let legend = scene.find_by_id("legend").expect("legend group");
    let rows = legend.select_class("legend-label");
    assert_eq!(rows.len(), 2);
    let labels: Vec<String> = rows.iter().map(|r| r.text_content()).collect();
    assert_eq!(labels, vec!["No doping allegations", "Doping allegations"]);
}

#[test]
fn scene_carries_required_ids_and_attributes() {
    let chart = ChartBuilder::new(ChartOptions::default()).build(&two_riders()).unwrap();
    let scene = chart.to_scene(&Theme::light());

    for id in ["title", "x-axis", "y-axis", "legend", "tooltip"] {
        assert!(scene.find_by_id(id).is_some(), "missing #{id}");
    }
    assert_eq!(scene.title.text_content(), "Doping in Professional Bicycle Racing");

    let dot = scene.dots()[1];
    assert_eq!(dot.get_attr("data-xvalue"), Some("1996"));
    assert_eq!(dot.get_attr("data-yvalue"), Some("1980-01-01T00:36:50.000Z"));
    assert_eq!(dot.get_attr("r"), Some("7"));
    assert_eq!(scene.tooltip.style("opacity"), Some("0"));

    let svg = scene.to_svg();
    assert!(svg.contains("<title id=\"title\">Doping in Professional Bicycle Racing</title>"));
    assert!(svg.contains("id=\"x-axis\""));
    assert_eq!(svg.matches("class=\"dot\"").count(), 2);

    let html = scene.to_html();
    assert!(html.contains("<div id=\"tooltip\" class=\"tooltip\" style=\"opacity: 0\"/>"));
    assert!(html.find("<main>").unwrap() < html.find("id=\"tooltip\"").unwrap());
}

#[test]
fn x_position_increases_with_year() {
    let chart = ChartBuilder::new(ChartOptions::default()).build(&sample()).unwrap();
    let scene = chart.to_scene(&Theme::light());
    let mut pts: Vec<(f64, f64)> = scene
        .dots()
        .iter()
        .map(|d| (attr_f64(d, "data-xvalue"), attr_f64(d, "cx")))
        .collect();
    pts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    assert!(pts.windows(2).all(|w| w[0].0 == w[1].0 || w[0].1 < w[1].1));
}

#[test]
fn y_position_increases_with_finish_time() {
    let records = sample();
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).unwrap();
    let mut pts: Vec<_> = chart.points.iter().map(|p| (p.time, p.pos.y)).collect();
    pts.sort_by_key(|p| p.0);
    assert!(pts.windows(2).all(|w| w[0].0 == w[1].0 || w[0].1 < w[1].1));
    // slowest time sits at the bottom of the plot
    assert_eq!(pts.last().unwrap().1, chart.frame.height());
}

#[test]
fn all_clean_dataset_uses_one_category() {
    let records = vec![
        rec(1999, "37:00", "C", "FRA", ""),
        rec(2001, "38:00", "D", "GER", ""),
        rec(2003, "39:00", "E", "BEL", ""),
    ];
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).unwrap();
    let scene = chart.to_scene(&Theme::light());
    let rows = scene.find_by_id("legend").unwrap().select_class("legend-label");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text_content(), "No doping allegations");

    let fills: std::collections::HashSet<_> = scene.dots().iter().filter_map(|d| d.style("fill")).collect();
    assert_eq!(fills.len(), 1);
}

#[test]
fn clock_tick_label_matches_point_on_tick() {
    let records = vec![
        rec(2000, "36:30", "F", "ITA", ""),
        rec(2001, "36:50", "G", "ITA", ""),
        rec(2002, "37:20", "H", "ITA", "Suspended"),
    ];
    let chart = ChartBuilder::new(ChartOptions::default()).build(&records).unwrap();
    let tick = chart
        .y_axis
        .ticks
        .iter()
        .find(|t| t.label == "36:50")
        .expect("36:50 tick");
    let point = chart.points.iter().find(|p| p.time.clock() == "36:50").unwrap();
    assert!((tick.px - point.pos.y).abs() < 1e-9);

    let scene = chart.to_scene(&Theme::light());
    let y_axis = scene.find_by_id("y-axis").unwrap();
    assert!(y_axis.select_tag("text").iter().any(|t| t.text_content() == "36:50"));
}

#[test]
fn year_labels_are_not_grouped() {
    let chart = ChartBuilder::new(ChartOptions::default()).build(&sample()).unwrap();
    let scene = chart.to_scene(&Theme::light());
    let x_axis = scene.find_by_id("x-axis").unwrap();
    let labels: Vec<String> = x_axis.select_tag("text").iter().map(|t| t.text_content()).collect();
    assert!(labels.contains(&"2000".to_string()));
    assert!(labels.iter().all(|l| l.len() == 4 && l.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn options_flow_into_scene() {
    let mut opts = ChartOptions::default();
    opts.width = 600;
    opts.height = 400;
    opts.dot_radius = 4.0;
    opts.y_label = "Minutes".into();
    let chart = ChartBuilder::new(opts).build(&two_riders()).unwrap();
    let scene = chart.to_scene(&Theme::dark());
    assert_eq!(scene.svg.get_attr("width"), Some("600"));
    assert_eq!(scene.dots()[0].get_attr("r"), Some("4"));
    assert!(scene.svg.select_tag("text").iter().any(|t| t.text_content() == "Minutes"));
    assert_eq!(chart.frame.width(), 520.0);
}

#[test]
fn theme_colours_reach_ticks_and_dots() {
    let chart = ChartBuilder::new(ChartOptions::default()).build(&two_riders()).unwrap();
    let theme = Theme::dark();
    let scene = chart.to_scene(&theme);
    let tick_hex = scatter_core::theme::hex(theme.tick);
    let axis_hex = scatter_core::theme::hex(theme.axis_line);

    let y_axis = scene.find_by_id("y-axis").unwrap();
    let lines = y_axis.select_tag("line");
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.get_attr("stroke") == Some(tick_hex.as_str())));
    let domain = y_axis.select_class("domain");
    assert_eq!(domain[0].get_attr("stroke"), Some(axis_hex.as_str()));

    let stroke_hex = scatter_core::theme::hex(theme.dot_stroke);
    assert!(scene.dots().iter().all(|d| d.style("stroke") == Some(stroke_hex.as_str())));
}
