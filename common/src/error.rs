use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {code}, err: {stderr}")]
    Execution {
        program: String,
        code: i32,
        stderr: String,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Parse(err.to_string())
    }
}
