//! # 보조 예측기
//!
//! 정답 라벨 없이 이미지만으로 클래스별 스칼라(예: 영역 크기)를 예측하는
//! 추론 전용 모델의 경계면.

pub mod threshold;

#[cfg(test)]
mod __tests__;

pub use threshold::ThresholdPredictor;

use crate::core::error::{BoundsError, ConfigError};
use anyhow::{bail, Result};
use ndarray::{Array1, Array2, ArrayView3, ArrayView4, Axis};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// 추론 전용 예측기
///
/// `&self`만 받으므로 파라미터를 바꿀 수 없고, 여러 샘플에서 동시에 호출될 수 있다.
pub trait AuxiliaryPredictor: Send + Sync {
    /// (1, 채널, W, H) 배치 -> (1, C) 예측
    fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>>;
}

impl<F> AuxiliaryPredictor for F
where
    F: Fn(ArrayView4<f32>) -> Result<Array2<f32>> + Send + Sync,
{
    fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>> {
        self(batch)
    }
}

/// 이름(`net` 옵션) -> 예측기 레지스트리
#[derive(Clone, Default)]
pub struct PredictorRegistry {
    predictors: BTreeMap<String, Arc<dyn AuxiliaryPredictor>>,
}

impl PredictorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, predictor: impl AuxiliaryPredictor + 'static) {
        self.predictors.insert(name.to_string(), Arc::new(predictor));
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn AuxiliaryPredictor>, ConfigError> {
        self.predictors
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPredictor(name.to_string()))
    }
}

impl fmt::Debug for PredictorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.predictors.keys()).finish()
    }
}

/// 배치 축을 붙여 예측한 뒤 다시 떼어낸다: (C,) 크기의 예측값
pub fn predict_single(predictor: &dyn AuxiliaryPredictor, image: ArrayView3<f32>) -> Result<Array1<f32>> {
    let out = predictor.predict(image.insert_axis(Axis(0)))?;
    if out.nrows() != 1 {
        bail!(BoundsError::shape(
            "예측기 출력 배치",
            &[1, out.ncols()],
            out.shape(),
        ));
    }
    Ok(out.row(0).to_owned())
}
