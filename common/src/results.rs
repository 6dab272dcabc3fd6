use crate::config::Mode;

/// One fio measurement for a single (mode, queue depth) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub mode: Mode,
    pub queue_depth: usize,
    pub latency_us: Option<f64>,
    pub iops: f64,
    pub bandwidth_kbps: f64,
    pub cpu_user_pct: f64,
    pub cpu_sys_pct: f64,
    pub disk_util_pct: Option<f64>,
}

/// The plotted metrics. Fixed set, one plot each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    LatencyUs,
    Iops,
    BandwidthKbps,
    CpuUserPct,
    CpuSysPct,
    DiskUtilPct,
}

pub const METRICS: &[Metric] = &[
    Metric::LatencyUs,
    Metric::Iops,
    Metric::BandwidthKbps,
    Metric::CpuUserPct,
    Metric::CpuSysPct,
    Metric::DiskUtilPct,
];

impl Metric {
    /// Identifier used in generated file names
    pub fn id(&self) -> &'static str {
        match self {
            Metric::LatencyUs => "latency_us",
            Metric::Iops => "iops",
            Metric::BandwidthKbps => "bandwidth_kbps",
            Metric::CpuUserPct => "cpu_user_pct",
            Metric::CpuSysPct => "cpu_sys_pct",
            Metric::DiskUtilPct => "disk_util_pct",
        }
    }

    /// Axis label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::LatencyUs => "Mean latency (us)",
            Metric::Iops => "IOPS",
            Metric::BandwidthKbps => "Bandwidth (KB/s)",
            Metric::CpuUserPct => "User CPU (%)",
            Metric::CpuSysPct => "System CPU (%)",
            Metric::DiskUtilPct => "Disk utilization (%)",
        }
    }
}

impl ResultRecord {
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::LatencyUs => self.latency_us,
            Metric::Iops => Some(self.iops),
            Metric::BandwidthKbps => Some(self.bandwidth_kbps),
            Metric::CpuUserPct => Some(self.cpu_user_pct),
            Metric::CpuSysPct => Some(self.cpu_sys_pct),
            Metric::DiskUtilPct => self.disk_util_pct,
        }
    }
}

/// Append-only, ordered collection of sweep results.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultTable {
    records: Vec<ResultRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Modes in order of first appearance
    pub fn modes(&self) -> Vec<Mode> {
        let mut modes = Vec::new();
        for record in &self.records {
            if !modes.contains(&record.mode) {
                modes.push(record.mode);
            }
        }
        modes
    }

    /// `(queue_depth, value)` points for one mode, skipping records without the metric
    pub fn series(&self, mode: Mode, metric: Metric) -> Vec<(usize, f64)> {
        self.records
            .iter()
            .filter(|x| x.mode == mode)
            .filter_map(|x| x.metric(metric).map(|value| (x.queue_depth, value)))
            .collect()
    }
}
