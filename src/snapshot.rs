//! Telemetry snapshot delivered by the collector once per interval.
//!
//! Every section is optional: `None` means the collector could not read it
//! this tick and must be treated as unknown, never as zero.

use std::net::IpAddr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RingsError, RingsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuDataType {
    Avg,
    Cpu(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuData {
    pub data_type: CpuDataType,
    pub cpu_usage: f64,
}

/// One, five and fifteen minute load averages.
pub type LoadAvgHarvest = [f32; 3];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemHarvest {
    pub mem_total_in_kib: u64,
    pub mem_used_in_kib: u64,
    pub use_percent: Option<f64>,
}

impl MemHarvest {
    #[must_use]
    pub fn used_bytes(&self) -> u64 {
        self.mem_used_in_kib.saturating_mul(1024)
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.mem_total_in_kib.saturating_mul(1024)
    }

    /// Reported percentage, or used/total when the collector left it out.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        self.use_percent.or_else(|| {
            (self.mem_total_in_kib > 0)
                .then(|| self.mem_used_in_kib as f64 / self.mem_total_in_kib as f64 * 100.0)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempHarvest {
    pub name: String,
    pub temperature: f32,
}

/// Interface counters; `rx`/`tx` are per-second rates, `total_*` cumulative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkHarvest {
    pub rx: u64,
    pub tx: u64,
    pub total_rx: u64,
    pub total_tx: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessHarvest {
    pub pid: i64,
    /// Parent pid; `0` is the root of the tree.
    pub parent_pid: Option<i64>,
    pub cpu_usage_percent: f64,
    pub mem_usage_percent: f64,
    pub mem_usage_bytes: u64,
    pub name: String,
    pub command: String,
    pub read_bytes_per_sec: u64,
    pub write_bytes_per_sec: u64,
    pub total_read_bytes: u64,
    pub total_write_bytes: u64,
    /// Human readable state and its single-letter code, e.g. `("Sleeping", 'S')`.
    pub process_state: (String, char),
    #[serde(default)]
    pub uid: Option<u32>,
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskHarvest {
    pub name: String,
    pub mount_point: String,
    pub free_space: Option<u64>,
    pub used_space: Option<u64>,
    pub total_space: Option<u64>,
}

impl DiskHarvest {
    #[must_use]
    pub fn use_percent(&self) -> Option<f64> {
        match (self.used_space, self.total_space) {
            (Some(used), Some(total)) if total > 0 => Some(used as f64 / total as f64 * 100.0),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoData {
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Per-device I/O counters; a device may report `None` for a tick.
pub type IoHarvest = IndexMap<String, Option<IoData>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryHarvest {
    pub charge_percent: f64,
    pub secs_until_full: Option<i64>,
    pub secs_until_empty: Option<i64>,
    pub power_consumption_rate_watts: f64,
    pub health_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    /// Collection time in milliseconds.
    pub last_collection_time: u64,
    pub cpu: Option<Vec<CpuData>>,
    pub load_avg: Option<LoadAvgHarvest>,
    pub memory: Option<MemHarvest>,
    pub swap: Option<MemHarvest>,
    pub temperature_sensors: Option<Vec<TempHarvest>>,
    pub network: Option<NetworkHarvest>,
    pub list_of_processes: Option<Vec<ProcessHarvest>>,
    pub disks: Option<Vec<DiskHarvest>>,
    pub io: Option<IoHarvest>,
    /// Uptime in humantime notation, e.g. `"3h 12m 5s"`.
    pub uptime: Option<String>,
    pub hostname: Option<String>,
    pub kernel_name: Option<String>,
    pub kernel_version: Option<String>,
    pub os_version: Option<String>,
    pub local_ip: Option<IpAddr>,
    pub list_of_batteries: Option<Vec<BatteryHarvest>>,
    /// ZFS ARC usage.
    pub arc: Option<MemHarvest>,
    /// Accelerator memory, keyed by device name.
    pub gpu: Option<Vec<(String, MemHarvest)>>,
}

impl Data {
    pub fn from_json_str(input: &str) -> RingsResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RingsError::Snapshot(format!("failed to parse snapshot json: {e}")))
    }

    pub fn to_json(&self) -> RingsResult<String> {
        serde_json::to_string(self)
            .map_err(|e| RingsError::Snapshot(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn average_cpu(&self) -> Option<f64> {
        self.cpu
            .as_ref()?
            .iter()
            .find(|entry| entry.data_type == CpuDataType::Avg)
            .map(|entry| entry.cpu_usage)
    }

    /// Per-core usage as `(core index, percent)`.
    pub fn core_usage(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cpu
            .iter()
            .flatten()
            .filter_map(|entry| match entry.data_type {
                CpuDataType::Cpu(index) => Some((index, entry.cpu_usage)),
                CpuDataType::Avg => None,
            })
    }

    #[must_use]
    pub fn hottest_sensor(&self) -> Option<&TempHarvest> {
        self.temperature_sensors
            .as_ref()?
            .iter()
            .filter(|sensor| sensor.temperature.is_finite())
            .max_by(|a, b| a.temperature.total_cmp(&b.temperature))
    }
}
