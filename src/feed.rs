//! Turns successive snapshots into bounded per-widget sample windows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::snapshot::{CpuDataType, Data};
use crate::sparkline::PlotSample;
use crate::window::BoundedWindow;

pub const DEFAULT_HISTORY_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Samples kept per series.
    pub history_len: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}

impl FeedConfig {
    #[must_use]
    pub fn with_history_len(mut self, history_len: usize) -> Self {
        self.history_len = history_len;
        self
    }
}

/// `(tick, value)` pairs of one series.
pub type History = BoundedWindow<(f64, f64)>;

/// Rolling sample windows fed from telemetry snapshots.
///
/// Every ingested snapshot advances a tick counter used as the x position.
/// Sections missing from a snapshot push nothing for that tick.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    config: FeedConfig,
    tick: u64,
    cpu: IndexMap<CpuDataType, History>,
    memory: History,
    swap: History,
    network_rx: History,
    network_tx: History,
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new(FeedConfig::default())
    }
}

impl SnapshotFeed {
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            tick: 0,
            cpu: IndexMap::new(),
            memory: History::new(config.history_len),
            swap: History::new(config.history_len),
            network_rx: History::new(config.history_len),
            network_tx: History::new(config.history_len),
        }
    }

    pub fn ingest(&mut self, data: &Data) {
        self.tick += 1;
        let x = self.tick as f64;
        let limit = self.config.history_len;

        for entry in data.cpu.iter().flatten() {
            self.cpu
                .entry(entry.data_type)
                .or_insert_with(|| History::new(limit))
                .push((x, entry.cpu_usage));
        }
        if let Some(percent) = data.memory.as_ref().and_then(|memory| memory.percent()) {
            self.memory.push((x, percent));
        }
        if let Some(percent) = data.swap.as_ref().and_then(|swap| swap.percent()) {
            self.swap.push((x, percent));
        }
        if let Some(network) = &data.network {
            self.network_rx.push((x, network.rx as f64));
            self.network_tx.push((x, network.tx as f64));
        }

        trace!(
            tick = self.tick,
            cpu_series = self.cpu.len(),
            has_memory = data.memory.is_some(),
            has_network = data.network.is_some(),
            "ingest snapshot"
        );
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> FeedConfig {
        self.config
    }

    /// CPU series seen so far, in first-seen order.
    pub fn cpu_kinds(&self) -> impl Iterator<Item = CpuDataType> + '_ {
        self.cpu.keys().copied()
    }

    #[must_use]
    pub fn cpu_history(&self, kind: CpuDataType) -> Option<&History> {
        self.cpu.get(&kind)
    }

    /// Sample for one CPU series; empty when the series was never reported.
    #[must_use]
    pub fn cpu_sample<C>(&self, kind: CpuDataType) -> PlotSample<C> {
        match self.cpu.get(&kind) {
            Some(history) => to_sample(history),
            None => PlotSample::new(Vec::new(), Vec::new()),
        }
    }

    #[must_use]
    pub fn memory_sample<C>(&self) -> PlotSample<C> {
        to_sample(&self.memory)
    }

    #[must_use]
    pub fn swap_sample<C>(&self) -> PlotSample<C> {
        to_sample(&self.swap)
    }

    #[must_use]
    pub fn network_rx_sample<C>(&self) -> PlotSample<C> {
        to_sample(&self.network_rx)
    }

    #[must_use]
    pub fn network_tx_sample<C>(&self) -> PlotSample<C> {
        to_sample(&self.network_tx)
    }

    #[must_use]
    pub fn latest_network_rate(&self) -> Option<(f64, f64)> {
        let (_, rx) = self.network_rx.latest()?;
        let (_, tx) = self.network_tx.latest()?;
        Some((*rx, *tx))
    }
}

fn to_sample<C>(history: &History) -> PlotSample<C> {
    let (x, y) = history.iter().copied().unzip();
    PlotSample::new(x, y)
}
