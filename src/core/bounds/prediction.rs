use crate::core::bounds::margin::MarginSpec;
use crate::core::bounds::{ensure_bounds_shape, override_absent, parse_neg_value, BoundsFn};
use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::presence;
use crate::core::options::Options;
use crate::core::predictor::{predict_single, AuxiliaryPredictor, PredictorRegistry};
use anyhow::{Context, Result};
use log::info;
use ndarray::{Array2, Array3, ArrayView3, Axis};
use std::fmt;
use std::sync::Arc;

/// 보조 예측기의 출력에 margin을 붙인 구간 (K = 1)
///
/// dense 라벨을 쓸 수 없는 완전 약지도 학습용.
pub struct PredictionBounds {
    margin: MarginSpec,
    net: Arc<dyn AuxiliaryPredictor>,
    net_name: String,
}

impl PredictionBounds {
    pub fn new(margin: MarginSpec, net: Arc<dyn AuxiliaryPredictor>, net_name: &str) -> Self {
        Self {
            margin,
            net,
            net_name: net_name.to_string(),
        }
    }

    /// 옵션: `margin`, `mode`, `net`
    pub fn from_options(options: &Options, predictors: &PredictorRegistry) -> Result<Self, ConfigError> {
        let margin = MarginSpec::from_options(options)?;
        let net_name: String = options.required("net")?;
        let net = predictors.get(&net_name)?;
        info!("PredictionBounds 초기화: {}", options);
        Ok(Self::new(margin, net, &net_name))
    }
}

impl fmt::Debug for PredictionBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionBounds")
            .field("margin", &self.margin)
            .field("net", &self.net_name)
            .finish()
    }
}

impl BoundsFn for PredictionBounds {
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        _weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>> {
        let value = predict_single(self.net.as_ref(), image)
            .with_context(|| format!("예측기 `{}` 실패: {}", self.net_name, filename))?;

        let c = target.len_of(Axis(0));
        if value.len() != c {
            return Err(BoundsError::shape("예측값", &[c], value.shape()).into());
        }

        let res = self.margin.apply(value.insert_axis(Axis(1)).view());
        ensure_bounds_shape(&res, c)?;
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "PredictionBounds"
    }
}

/// dense 라벨에 없는 클래스의 구간을 `neg_value`로 바꾼 PredictionBounds
#[derive(Debug)]
pub struct TagsPredictions {
    inner: PredictionBounds,
    neg_value: Array2<f32>,
}

impl TagsPredictions {
    pub fn new(inner: PredictionBounds, neg_value: Array2<f32>) -> Self {
        Self { inner, neg_value }
    }

    pub fn from_options(options: &Options, predictors: &PredictorRegistry) -> Result<Self, ConfigError> {
        let inner = PredictionBounds::from_options(options, predictors)?;
        let neg_value = parse_neg_value(options)?;
        info!("TagsPredictions 초기화: {}", options);
        Ok(Self::new(inner, neg_value))
    }
}

impl BoundsFn for TagsPredictions {
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>> {
        let positive_class = presence(target);
        let res = self.inner.compute(image, target, weak_target, filename)?;
        Ok(override_absent(res, &positive_class, &self.neg_value)?)
    }

    fn name(&self) -> &'static str {
        "TagsPredictions"
    }
}
