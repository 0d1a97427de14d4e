use thiserror::Error;

/// Failures surfaced by the estimation core. Every variant is returned to
/// the caller as-is; there is no retry path.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90], longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("courier age {0} outside accepted range 18..=65")]
    InvalidAge(u8),

    #[error("courier rating {0} outside accepted range 1.0..=5.0")]
    InvalidRating(f32),

    #[error("model output shape {got:?} is not a single scalar")]
    BadOutputShape { got: Vec<i64> },

    #[error("inference failed: {0}")]
    Inference(#[from] anyhow::Error),
}

impl EstimateError {
    /// True when the failure came from the request rather than the model.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCoordinate { .. } | Self::InvalidAge(_) | Self::InvalidRating(_)
        )
    }
}
