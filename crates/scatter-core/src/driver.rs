// File: crates/scatter-core/src/driver.rs
// Summary: Load-then-render lifecycle (Idle -> Loaded -> Rendered, or Idle -> Failed).
// Notes:
// - Failures are logged once here and nowhere else; callers only see `None`.

use std::path::Path;

use crate::chart::{Chart, ChartBuilder};
use crate::error::Result;
use crate::loader::{fetch_records, load_file};
use crate::record::Record;
use crate::scene::Scene;
use crate::theme;
use crate::types::ChartOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Loaded,
    Rendered,
    Failed,
}

/// Everything produced by a successful run.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub records: Vec<Record>,
    pub chart: Chart,
    pub scene: Scene,
}

pub struct Driver {
    client: reqwest::Client,
    options: ChartOptions,
    stage: Stage,
}

impl Driver {
    pub fn new(options: ChartOptions) -> Self {
        Self::with_client(reqwest::Client::new(), options)
    }

    pub fn with_client(client: reqwest::Client, options: ChartOptions) -> Self {
        Self { client, options, stage: Stage::Idle }
    }

    pub fn stage(&self) -> Stage { self.stage }

    /// Fetch `url` once and render. Any failure is logged once and yields `None`.
    pub async fn run(&mut self, url: &str) -> Option<Rendered> {
        if !self.ready() {
            return None;
        }
        let fetched = fetch_records(&self.client, url).await;
        let result = fetched.and_then(|records| self.render(records));
        self.settle(url, result)
    }

    /// Same lifecycle for a local JSON or CSV file.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Option<Rendered> {
        if !self.ready() {
            return None;
        }
        let path = path.as_ref();
        let result = load_file(path).and_then(|records| self.render(records));
        self.settle(&path.display().to_string(), result)
    }

    /// Same lifecycle for records that are already in memory.
    pub fn run_with_records(&mut self, records: Vec<Record>) -> Option<Rendered> {
        if !self.ready() {
            return None;
        }
        let result = self.render(records);
        self.settle("memory", result)
    }

    fn settle(&mut self, source: &str, result: Result<Rendered>) -> Option<Rendered> {
        match result {
            Ok(out) => Some(out),
            Err(e) => {
                self.transition(Stage::Failed);
                tracing::error!(source, error = %e, "failed to load dataset; chart not rendered");
                None
            }
        }
    }

    fn render(&mut self, records: Vec<Record>) -> Result<Rendered> {
        self.transition(Stage::Loaded);
        let chart = ChartBuilder::new(self.options.clone()).build(&records)?;
        let scene = chart.to_scene(&theme::find(&self.options.theme));
        self.transition(Stage::Rendered);
        Ok(Rendered { records, chart, scene })
    }

    /// Both end stages are terminal; a driver runs at most once.
    fn ready(&self) -> bool {
        if self.stage != Stage::Idle {
            tracing::warn!(stage = ?self.stage, "driver already ran");
            return false;
        }
        true
    }

    fn transition(&mut self, next: Stage) {
        tracing::debug!(from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }
}
