use std::fmt;

pub const DEFAULT_MODES: &[Mode] = &[Mode::Randread, Mode::Randwrite];
pub const DEFAULT_IO_DEPTHS: &[usize] = &[1, 2, 4, 6, 8, 12, 16, 24, 32, 48, 64, 96, 128, 192, 256];

/// Everything a single sweep + render run needs, passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub name: String,
    pub filename: String,
    pub output: String,
    pub modes: Vec<Mode>,
    pub io_depths: Vec<usize>,
    pub job: JobShape,
    pub programs: Programs,
}

/// Per-invocation fio parameters that stay fixed across the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct JobShape {
    pub io_engine: String,
    pub direct: bool,
    pub block_size: String,
    pub size: String,
    pub num_jobs: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Programs {
    pub fio: String,
    pub gnuplot: String,
}

/// Access pattern handed to fio as `--rw`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
    #[default]
    Randread,
    Randwrite,
}

impl SweepConfig {
    pub fn new(name: String, filename: String, output: String) -> Self {
        Self {
            name,
            filename,
            output,
            modes: DEFAULT_MODES.to_vec(),
            io_depths: DEFAULT_IO_DEPTHS.to_vec(),
            job: JobShape::default(),
            programs: Programs::default(),
        }
    }
}

impl Default for JobShape {
    fn default() -> Self {
        Self {
            io_engine: "libaio".to_owned(),
            direct: true,
            block_size: "4k".to_owned(),
            size: "1G".to_owned(),
            num_jobs: 1,
        }
    }
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            fio: "fio".to_owned(),
            gnuplot: "gnuplot".to_owned(),
        }
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Write => "write",
            Mode::Randread => "randread",
            Mode::Randwrite => "randwrite",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
