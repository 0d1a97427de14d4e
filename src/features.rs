use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::EstimateError;
use crate::geo::Coordinate;

/// Input layout the pretrained artifact was trained on: a sequence of
/// 3 timesteps carrying 1 feature each.
pub const SEQ_LEN: usize = 3;
pub const FEATURES_PER_STEP: usize = 1;

/// Courier bounds enforced in the core, mirroring the client form limits.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=65;
pub const RATING_RANGE: RangeInclusive<f32> = 1.0..=5.0;

/// One prediction request as the client submits it.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRequest {
    pub age: u8,
    pub rating: f32,
    pub restaurant: Coordinate,
    pub destination: Coordinate,
}

impl DeliveryRequest {
    /// Field checks the presentation layer cannot be trusted to have done.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(EstimateError::InvalidAge(self.age));
        }
        if !RATING_RANGE.contains(&self.rating) {
            return Err(EstimateError::InvalidRating(self.rating));
        }
        self.restaurant.validate()?;
        self.destination.validate()
    }
}

/// Model input in training order: age, then rating, then distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    age: f32,
    rating: f32,
    distance_km: f32,
}

impl FeatureVector {
    pub fn new(age: f32, rating: f32, distance_km: f32) -> Self {
        Self {
            age,
            rating,
            distance_km,
        }
    }

    /// The sequence the model consumes, one feature per step. The order is
    /// fixed by the trained artifact; reordering silently breaks predictions.
    pub fn as_steps(&self) -> [f32; SEQ_LEN] {
        [self.age, self.rating, self.distance_km]
    }
}
