use anyhow::{bail, Context, Result};
use tch::{kind::Kind, CModule, Device, Tensor};

use crate::error::EstimateError;
use crate::features::{FeatureVector, FEATURES_PER_STEP, SEQ_LEN};
use crate::predict::Predictor;

/// Pretrained delivery-time regressor loaded from a TorchScript artifact.
/// Load once at startup and share the handle for the process lifetime.
pub struct DeliveryModel {
    module: CModule,
    device: Device,
}

impl DeliveryModel {
    /// Load the artifact and probe it with a zeros forward. The module must
    /// accept a (1, SEQ_LEN, 1) float tensor and emit exactly one value;
    /// anything else fails here instead of on the first request.
    pub fn load(model_path: &str) -> Result<Self> {
        let device = Device::Cpu;

        let module = CModule::load_on_device(model_path, device)
            .with_context(|| format!("failed to load TorchScript artifact {}", model_path))?;

        let dummy = Tensor::zeros(
            [1, SEQ_LEN as i64, FEATURES_PER_STEP as i64],
            (Kind::Float, device),
        );
        let out = module
            .forward_ts(&[dummy])
            .context("probe forward failed")?;
        let sz = out.size();
        if sz.iter().product::<i64>() != 1 {
            bail!("unexpected model output size: {:?}", sz);
        }

        Ok(Self { module, device })
    }
}

impl Predictor for DeliveryModel {
    fn predict_minutes(&self, features: &FeatureVector) -> Result<f32, EstimateError> {
        let steps = features.as_steps();
        let input = Tensor::from_slice(&steps)
            .reshape([1, SEQ_LEN as i64, FEATURES_PER_STEP as i64])
            .to_device(self.device);

        let out = self
            .module
            .forward_ts(&[input])
            .map_err(anyhow::Error::from)?;

        let sz = out.size();
        if sz.iter().product::<i64>() != 1 {
            return Err(EstimateError::BadOutputShape { got: sz });
        }

        let minutes = out.reshape([-1]).double_value(&[0]) as f32;
        Ok(minutes)
    }
}
