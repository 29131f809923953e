// File: crates/scatter-core/src/scene.rs
// Summary: Minimal SVG/HTML element tree with queries and escaped serialization.

use std::fmt::Write as _;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-escaped markup, emitted verbatim.
    Raw(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Set (or replace) an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn id(self, id: &str) -> Self { self.attr("id", id) }
    pub fn class(self, class: &str) -> Self { self.attr("class", class) }

    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    pub fn children(mut self, els: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(els.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Value of one property inside the `style` attribute (`"opacity: 0.8; left: 4px"`).
    pub fn style(&self, prop: &str) -> Option<&str> {
        self.get_attr("style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(k, _)| k.trim() == prop)
            .map(|(_, v)| v.trim())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search for an element with `id`, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find_by_id(id))
    }

    /// All descendants (and `self`) carrying `class`, in document order.
    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |e| if e.has_class(class) { out.push(e) });
        out
    }

    /// All descendants (and `self`) with tag `tag`, in document order.
    pub fn select_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |e| if e.tag == tag { out.push(e) });
        out
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        f(self);
        for e in self.elements() {
            e.walk(f);
        }
    }

    /// Concatenated text of all descendant text nodes (raw markup included as-is).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for n in &self.children {
            match n {
                Node::Element(e) => out.push_str(&e.text_content()),
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
            }
        }
        out
    }

    pub fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for n in &self.children {
            match n {
                Node::Element(e) => e.write_markup(out),
                Node::Text(t) => out.push_str(&escape(t)),
                Node::Raw(r) => out.push_str(r),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }
}

/// Escape text for XML/HTML attribute and text positions.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The rendered artifact: page title, chart SVG and the tooltip overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: Element,
    pub svg: Element,
    pub tooltip: Element,
}

impl Scene {
    /// Find an element by id anywhere in the scene.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.title
            .find_by_id(id)
            .or_else(|| self.svg.find_by_id(id))
            .or_else(|| self.tooltip.find_by_id(id))
    }

    pub fn dots(&self) -> Vec<&Element> {
        self.svg.select_class("dot")
    }

    pub fn set_tooltip(&mut self, tooltip: Element) {
        self.tooltip = tooltip;
    }

    /// Standalone SVG document; the title is embedded as the first child.
    pub fn to_svg(&self) -> String {
        let mut svg = self.svg.clone();
        svg.set_attr("xmlns", "http://www.w3.org/2000/svg");
        svg.children.insert(0, Node::Element(self.title.clone()));
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.write_markup(&mut out);
        out.push('\n');
        out
    }

    /// HTML page body: `<main>` holding title and SVG, followed by the tooltip.
    pub fn to_html(&self) -> String {
        let main = Element::new("main")
            .child(self.title.clone())
            .child(self.svg.clone());
        let mut out = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"></head><body>");
        main.write_markup(&mut out);
        self.tooltip.write_markup(&mut out);
        out.push_str("</body></html>\n");
        out
    }
}
