use crate::error::EstimateError;
use crate::features::{DeliveryRequest, FeatureVector};
use crate::geo;

/// Anything that turns a feature vector into an ETA in minutes. The
/// production implementation wraps the TorchScript artifact; tests swap in
/// fixed-value stubs.
pub trait Predictor {
    fn predict_minutes(&self, features: &FeatureVector) -> Result<f32, EstimateError>;
}

/// Outcome of one estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub minutes: f32,
    pub distance_km: f64,
}

/// Validate, measure, assemble, predict. Stateless; runs once per request.
pub fn estimate(
    predictor: &dyn Predictor,
    request: &DeliveryRequest,
) -> Result<PredictionResult, EstimateError> {
    request.validate()?;

    let distance_km = geo::haversine_km(request.restaurant, request.destination);
    let features = FeatureVector::new(request.age as f32, request.rating, distance_km as f32);
    let minutes = predictor.predict_minutes(&features)?;

    Ok(PredictionResult {
        minutes,
        distance_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use anyhow::anyhow;

    struct FixedStub(f32);

    impl Predictor for FixedStub {
        fn predict_minutes(&self, _features: &FeatureVector) -> Result<f32, EstimateError> {
            Ok(self.0)
        }
    }

    struct FailingStub;

    impl Predictor for FailingStub {
        fn predict_minutes(&self, _features: &FeatureVector) -> Result<f32, EstimateError> {
            Err(EstimateError::Inference(anyhow!("forward failed")))
        }
    }

    fn bangalore_request() -> DeliveryRequest {
        DeliveryRequest {
            age: 30,
            rating: 4.0,
            restaurant: Coordinate {
                lat: 12.9715987,
                lon: 77.594566,
            },
            destination: Coordinate {
                lat: 12.2958104,
                lon: 76.6393805,
            },
        }
    }

    #[test]
    fn test_stub_scalar_passes_through() {
        let result = estimate(&FixedStub(27.5), &bangalore_request()).unwrap();
        assert_eq!(result.minutes, 27.5);
        assert!((result.distance_km - 128.0).abs() < 1.0);
    }

    #[test]
    fn test_predictor_error_propagates() {
        let err = estimate(&FailingStub, &bangalore_request()).unwrap_err();
        assert!(matches!(err, EstimateError::Inference(_)));
    }

    #[test]
    fn test_invalid_request_never_reaches_predictor() {
        struct PanicStub;
        impl Predictor for PanicStub {
            fn predict_minutes(&self, _features: &FeatureVector) -> Result<f32, EstimateError> {
                panic!("predictor must not be called for invalid input");
            }
        }

        let mut request = bangalore_request();
        request.age = 17;
        let err = estimate(&PanicStub, &request).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidAge(17)));
    }
}
