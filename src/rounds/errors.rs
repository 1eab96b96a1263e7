use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundsLoadError {
    #[error("failed to read the rounds file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line} of the rounds file is not a valid round: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line} of the rounds file has a coordinate outside of the globe: ({lat}, {lng})")]
    InvalidCoordinate { line: usize, lat: f64, lng: f64 },
    #[error("the rounds file contains no rounds")]
    Empty,
}
