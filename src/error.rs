use thiserror::Error;

pub type RingsResult<T> = Result<T, RingsError>;

#[derive(Debug, Error)]
pub enum RingsError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid telemetry snapshot: {0}")]
    Snapshot(String),
}
