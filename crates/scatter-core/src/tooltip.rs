// File: crates/scatter-core/src/tooltip.rs
// Summary: Two-state tooltip (hidden/visible) driven synchronously by pointer events.

use crate::chart::Chart;
use crate::geometry::Point;
use crate::record::Record;
use crate::scene::{escape, Element, Node};
use crate::svg::px;

pub const VISIBLE_OPACITY: f64 = 0.8;
/// The tooltip sits this many pixels above the pointer.
pub const POINTER_OFFSET_Y: f64 = 20.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        /// Record index of the hovered point.
        index: usize,
        year: i32,
        html: String,
        left: f64,
        top: f64,
    },
}

impl TooltipState {
    pub fn opacity(&self) -> f64 {
        match self {
            TooltipState::Hidden => 0.0,
            TooltipState::Visible { .. } => VISIBLE_OPACITY,
        }
    }

    pub fn is_visible(&self) -> bool { matches!(self, TooltipState::Visible { .. }) }

    pub fn hovered(&self) -> Option<usize> {
        match self {
            TooltipState::Visible { index, .. } => Some(*index),
            TooltipState::Hidden => None,
        }
    }

    /// The `div#tooltip` overlay reflecting this state.
    pub fn to_element(&self) -> Element {
        let el = Element::new("div").id("tooltip").class("tooltip");
        match self {
            TooltipState::Hidden => el.attr("style", "opacity: 0"),
            TooltipState::Visible { year, html, left, top, .. } => {
                let mut el = el.attr("data-year", year).attr(
                    "style",
                    format!("opacity: {}; left: {}px; top: {}px", VISIBLE_OPACITY, px(*left), px(*top)),
                );
                el.children.push(Node::Raw(html.clone()));
                el
            }
        }
    }
}

/// Tooltip body: name, nationality, year and clock time, then the allegation if any.
pub fn tooltip_html(record: &Record) -> String {
    let mut html = format!(
        "{}: {}<br/>Year: {}, Time: {}",
        escape(&record.name),
        escape(&record.nationality),
        record.year,
        record.finish_time.clock(),
    );
    if record.has_allegation() {
        html.push_str("<br/><br/>");
        html.push_str(&escape(&record.doping));
    }
    html
}

#[derive(Debug, Default)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &TooltipState { &self.state }

    /// Pointer entered the point for `record` (index `index`) at page position `page`.
    pub fn pointer_enter(&mut self, index: usize, record: &Record, page: Point) -> &TooltipState {
        tracing::trace!(index, year = record.year, "tooltip shown");
        self.state = TooltipState::Visible {
            index,
            year: record.year,
            html: tooltip_html(record),
            left: page.x,
            top: page.y - POINTER_OFFSET_Y,
        };
        &self.state
    }

    pub fn pointer_leave(&mut self) -> &TooltipState {
        if self.state.is_visible() {
            tracing::trace!("tooltip hidden");
        }
        self.state = TooltipState::Hidden;
        &self.state
    }

    /// Feed a raw pointer position; hit-tests the chart and issues enter/leave transitions.
    /// Moving within the same point keeps the tooltip where it was first shown.
    pub fn pointer_move(&mut self, chart: &Chart, records: &[Record], page: Point) -> &TooltipState {
        match chart.point_at(page) {
            Some(i) if self.state.hovered() == Some(i) => &self.state,
            Some(i) => match records.get(i) {
                Some(record) => self.pointer_enter(i, record, page),
                None => self.pointer_leave(),
            },
            None => self.pointer_leave(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FinishTime;

    fn rider(doping: &str) -> Record {
        Record {
            year: 1996,
            finish_time: FinishTime::parse("36:50").unwrap(),
            name: "Bjarne Riis".into(),
            nationality: "DEN".into(),
            doping: doping.into(),
        }
    }

    #[test]
    fn hidden_by_default() {
        let c = TooltipController::new();
        assert_eq!(c.state().opacity(), 0.0);
        assert_eq!(c.state().to_element().style("opacity"), Some("0"));
    }

    #[test]
    fn enter_then_leave() {
        let mut c = TooltipController::new();
        let r = rider("Admitted");
        let s = c.pointer_enter(3, &r, Point::new(100.0, 80.0)).clone();
        assert_eq!(s.opacity(), VISIBLE_OPACITY);
        let el = s.to_element();
        assert_eq!(el.get_attr("data-year"), Some("1996"));
        assert_eq!(el.style("left"), Some("100px"));
        assert_eq!(el.style("top"), Some("60px"));
        assert!(el.text_content().contains("Bjarne Riis: DEN"));
        assert!(el.text_content().ends_with("<br/><br/>Admitted"));
        assert_eq!(c.pointer_leave().opacity(), 0.0);
    }

    #[test]
    fn html_escapes_and_omits_empty_allegation() {
        let mut r = rider("");
        r.name = "A <b>".into();
        assert_eq!(tooltip_html(&r), "A &lt;b&gt;: DEN<br/>Year: 1996, Time: 36:50");
    }
}
