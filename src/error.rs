/// Failures of the fetch layer. The classification engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request failed with status: {0}")]
    Status(u16),
    #[error("Unexpected payload: {0}")]
    Payload(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl WeatherError {
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }
}
