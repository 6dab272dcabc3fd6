use common::config::{JobShape, Mode, SweepConfig};


/// A single fio invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fio {
    pub name: String,
    pub filename: String,
    pub mode: Mode,
    pub io_depth: usize,
    pub job: JobShape,
}

fn int(item: bool) -> u8 {
    if item { 1 } else { 0 }
}

impl Fio {
    pub fn new(config: &SweepConfig, mode: Mode, io_depth: usize) -> Self {
        Fio {
            name: config.name.clone(),
            filename: config.filename.clone(),
            mode,
            io_depth,
            job: config.job.clone(),
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "--name",
            "--filename",
            "--ioengine",
            "--direct",
            "--bs",
            "--size",
            "--numjobs",
            "--rw",
            "--iodepth",
        ]
        .into_iter()
        .zip(vec![
            self.name.clone(),
            self.filename.clone(),
            self.job.io_engine.clone(),
            int(self.job.direct).to_string(),
            self.job.block_size.clone(),
            self.job.size.clone(),
            self.job.num_jobs.to_string(),
            self.mode.to_string(),
            self.io_depth.to_string(),
        ])
        .map(|(arg, value)| format!("{arg}={value}"))
        .collect::<Vec<_>>();

        args.push("--output-format=json".to_owned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fixed_job_args() {
        let config = SweepConfig::new("ssd".to_owned(), "/mnt/t.bin".to_owned(), "out".to_owned());
        let fio = Fio::new(&config, Mode::Randwrite, 64);
        assert_eq!(
            fio.args(),
            vec![
                "--name=ssd",
                "--filename=/mnt/t.bin",
                "--ioengine=libaio",
                "--direct=1",
                "--bs=4k",
                "--size=1G",
                "--numjobs=1",
                "--rw=randwrite",
                "--iodepth=64",
                "--output-format=json",
            ]
        );
    }
}
