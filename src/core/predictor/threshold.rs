use crate::core::predictor::AuxiliaryPredictor;
use anyhow::{bail, Result};
use ndarray::{Array2, ArrayView4, Axis};
use serde::{Deserialize, Serialize};

/// 밝기 구간 기반 크기 예측기
///
/// 채널 평균 밝기가 클래스 c의 구간 `[lo, hi)`에 드는 픽셀 수를 그 클래스의
/// 예측 크기로 본다. 합성 데이터처럼 클래스마다 밝기가 분리된 경우의 기준선.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPredictor {
    pub windows: Vec<(f32, f32)>,
}

impl ThresholdPredictor {
    pub fn new(windows: Vec<(f32, f32)>) -> Result<Self> {
        if windows.is_empty() {
            bail!("ThresholdPredictor: 클래스 구간이 비어 있음");
        }
        if let Some((lo, hi)) = windows.iter().find(|(lo, hi)| lo > hi) {
            bail!("ThresholdPredictor: 잘못된 구간 [{}, {})", lo, hi);
        }
        Ok(Self { windows })
    }

    pub fn num_classes(&self) -> usize {
        self.windows.len()
    }
}

impl AuxiliaryPredictor for ThresholdPredictor {
    fn predict(&self, batch: ArrayView4<f32>) -> Result<Array2<f32>> {
        let b = batch.len_of(Axis(0));
        let mut out = Array2::<f32>::zeros((b, self.windows.len()));

        for (i, sample) in batch.axis_iter(Axis(0)).enumerate() {
            let intensity = match sample.mean_axis(Axis(0)) {
                Some(m) => m,
                None => bail!("ThresholdPredictor: 채널이 없는 이미지"),
            };
            for (c, &(lo, hi)) in self.windows.iter().enumerate() {
                out[[i, c]] = intensity.iter().filter(|&&v| v >= lo && v < hi).count() as f32;
            }
        }

        Ok(out)
    }
}
