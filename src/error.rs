use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
