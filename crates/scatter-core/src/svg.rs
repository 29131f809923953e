// File: crates/scatter-core/src/svg.rs
// Summary: Converts a built `Chart` into the SVG scene graph (title, axes, dots, legend, tooltip).

use crate::axis::{Axis, Orientation, TICK_PADDING, TICK_SIZE};
use crate::chart::{Chart, LEGEND_SWATCH};
use crate::scene::{Element, Scene};
use crate::theme::{hex, rgb, Theme};
use crate::tooltip::TooltipState;

/// Pixel value as compact text: at most three decimals, no "-0".
pub(crate) fn px(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { r.to_string() }
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", px(x), px(y))
}

fn axis_group(axis: &Axis, transform: Option<String>, theme: &Theme) -> Element {
    let stroke = hex(theme.axis_line);
    let tick_stroke = hex(theme.tick);
    let label = hex(theme.axis_label);
    let (r0, r1) = axis.range;
    let (anchor, domain_path) = match axis.orientation {
        Orientation::Bottom => ("middle", format!("M{},{}V0H{}V{}", px(r0), px(TICK_SIZE), px(r1), px(TICK_SIZE))),
        Orientation::Left => ("end", format!("M{},{}H0V{}H{}", px(-TICK_SIZE), px(r0), px(r1), px(-TICK_SIZE))),
    };
    let class = match axis.orientation {
        Orientation::Bottom => "x axis",
        Orientation::Left => "y axis",
    };

    let mut g = Element::new("g")
        .id(axis.id)
        .class(class)
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor);
    if let Some(t) = transform {
        g = g.attr("transform", t);
    }
    g = g.child(Element::new("path").class("domain").attr("stroke", &stroke).attr("d", domain_path));

    let ticks = axis.ticks.iter().map(|t| {
        let (pos, line, text) = match axis.orientation {
            Orientation::Bottom => (
                translate(t.px, 0.0),
                Element::new("line").attr("stroke", &tick_stroke).attr("y2", px(TICK_SIZE)),
                Element::new("text").attr("fill", &label).attr("y", px(TICK_SIZE + TICK_PADDING)).attr("dy", "0.71em"),
            ),
            Orientation::Left => (
                translate(0.0, t.px),
                Element::new("line").attr("stroke", &tick_stroke).attr("x2", px(-TICK_SIZE)),
                Element::new("text").attr("fill", &label).attr("x", px(-(TICK_SIZE + TICK_PADDING))).attr("dy", "0.32em"),
            ),
        };
        Element::new("g")
            .class("tick")
            .attr("opacity", 1)
            .attr("transform", pos)
            .child(line)
            .child(text.text(t.label.clone()))
    });
    g.children(ticks)
}

impl Chart {
    /// Build the scene graph for this chart, with the tooltip hidden.
    pub fn to_scene(&self, theme: &Theme) -> Scene {
        let opts = &self.options;
        let (w, h) = (self.frame.width(), self.frame.height());

        let title = Element::new("title").id("title").text(opts.title.clone());

        let x_axis = axis_group(&self.x_axis, Some(translate(0.0, h)), theme);
        let y_axis = axis_group(&self.y_axis, None, theme);

        let y_title = Element::new("text")
            .attr("transform", format!("rotate({})", px(self.y_title.rotate_deg)))
            .attr("x", px(self.y_title.x))
            .attr("y", px(self.y_title.y))
            .attr("style", format!("font-size: {}px", px(self.y_title.font_size)))
            .attr("fill", hex(theme.title))
            .text(self.y_title.text.clone());

        let dots = self.points.iter().map(|p| {
            Element::new("circle")
                .class("dot")
                .attr("r", px(opts.dot_radius as f64))
                .attr("cx", px(p.pos.x))
                .attr("cy", px(p.pos.y))
                .attr("data-xvalue", p.year)
                .attr("data-yvalue", p.time.iso())
                .attr("data-index", p.index)
                .attr("style", format!("fill: {}; stroke: {}", hex(rgb(p.color)), hex(theme.dot_stroke)))
        });

        let legend_rows = self.legend.iter().map(|entry| {
            Element::new("g")
                .class("legend-label")
                .attr("transform", translate(0.0, entry.offset_y))
                .child(
                    Element::new("rect")
                        .attr("x", px(w - LEGEND_SWATCH))
                        .attr("width", px(LEGEND_SWATCH))
                        .attr("height", px(LEGEND_SWATCH))
                        .attr("style", format!("fill: {}", hex(rgb(entry.color)))),
                )
                .child(
                    Element::new("text")
                        .attr("x", px(w - LEGEND_SWATCH - 4.0))
                        .attr("y", 9)
                        .attr("dy", "6px")
                        .attr("style", "text-anchor: end")
                        .attr("fill", hex(theme.axis_label))
                        .text(entry.label),
                )
        });
        let legend = Element::new("g").id("legend").children(legend_rows);

        let plot = Element::new("g")
            .attr("transform", translate(self.frame.left, self.frame.top))
            .child(x_axis)
            .child(y_axis)
            .child(y_title)
            .children(dots)
            .child(legend);

        let svg = Element::new("svg")
            .attr("width", opts.width)
            .attr("height", opts.height)
            .class("svg")
            .attr("style", format!("background: {}", hex(theme.background)))
            .child(plot);

        Scene { title, svg, tooltip: TooltipState::Hidden.to_element() }
    }
}
