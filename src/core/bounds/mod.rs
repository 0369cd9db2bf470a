//! # 경계 엔진
//!
//! 샘플 하나(이미지, dense 라벨, weak 라벨, 식별자)로부터 클래스별 구간
//! 배열 (C, K, 2)을 만드는 정책들. 바깥 정책은 안쪽 정책을 소유하고 그 결과를
//! 후처리한다 (TagBounds -> ConstantBounds, PreciseTags/PreciseUpper ->
//! PreciseBounds, TagsPredictions -> PredictionBounds).
//!
//! 모든 정책은 생성 후 불변이며 `Send + Sync`라서 여러 샘플에서 동시에
//! 호출할 수 있다.

pub mod box_bounds;
pub mod constant;
pub mod factory;
pub mod margin;
pub mod precise;
pub mod prediction;

#[cfg(test)]
mod __tests__;

pub use box_bounds::BoxBounds;
pub use constant::{ConstantBounds, TagBounds};
pub use factory::{build_bounds, BoundsContext, BOUNDS_POLICIES};
pub use margin::{MarginMode, MarginSpec};
pub use precise::{PreciseBounds, PreciseTags, PreciseUpper};
pub use prediction::{PredictionBounds, TagsPredictions};

use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::Sample;
use crate::core::options::Options;
use anyhow::Result;
use ndarray::{Array1, Array2, Array3, ArrayView3, Axis};
use rayon::prelude::*;

/// 경계 정책 공통 계약
pub trait BoundsFn: Send + Sync {
    /// (C, K, 2) 구간 배열. lower <= upper.
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>>;

    fn name(&self) -> &'static str;

    fn compute_sample(&self, sample: &Sample) -> Result<Array3<f32>> {
        self.compute(
            sample.image.view(),
            sample.target.view(),
            sample.weak_target.view(),
            &sample.filename,
        )
    }
}

impl<B: BoundsFn + ?Sized> BoundsFn for Box<B> {
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>> {
        (**self).compute(image, target, weak_target, filename)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// 여러 샘플을 rayon으로 병렬 계산. 하나라도 실패하면 전체 실패.
pub fn compute_batch<B: BoundsFn + ?Sized>(
    bounds: &B,
    samples: &[Sample],
) -> Result<Vec<Array3<f32>>> {
    samples
        .par_iter()
        .map(|sample| bounds.compute_sample(sample))
        .collect()
}

/// 결과 shape가 (C, K, 2)인지 확인
pub(crate) fn ensure_bounds_shape(res: &Array3<f32>, c: usize) -> Result<(), BoundsError> {
    let shape = res.shape();
    if shape[0] != c || shape[2] != 2 {
        return Err(BoundsError::shape("경계 배열", &[c, shape[1], 2], shape));
    }
    Ok(())
}

/// 존재하지 않는 클래스의 (K, 2) 행 전체를 `neg_value`로 교체
pub(crate) fn override_absent(
    mut res: Array3<f32>,
    present: &Array1<bool>,
    neg_value: &Array2<f32>,
) -> Result<Array3<f32>, BoundsError> {
    let (c, k, two) = res.dim();
    if neg_value.dim() != (k, two) {
        return Err(BoundsError::shape("neg_value", &[k, two], neg_value.shape()));
    }
    if present.len() != c {
        return Err(BoundsError::shape("존재 마스크", &[c], present.shape()));
    }

    for (mut row, &p) in res.axis_iter_mut(Axis(0)).zip(present.iter()) {
        if !p {
            row.assign(neg_value);
        }
    }
    Ok(res)
}

/// `neg_value` 옵션을 (K, 2) 배열로 읽는다
pub(crate) fn parse_neg_value(options: &Options) -> Result<Array2<f32>, ConfigError> {
    let rows: Vec<Vec<f32>> = options.required("neg_value")?;
    let k = rows.len();
    if k == 0 || rows.iter().any(|r| r.len() != 2) {
        return Err(ConfigError::InvalidValue {
            key: "neg_value".to_string(),
            reason: "(K, 2) 모양의 [[low, high], ...] 이어야 함".to_string(),
        });
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r[0].is_nan() || r[1].is_nan() || r[0] < 0.0 || r[0] > r[1])
    {
        return Err(ConfigError::InvalidValue {
            key: "neg_value".to_string(),
            reason: format!(
                "{}번째 행 [{}, {}]: 0 <= low <= high 이어야 함",
                i, row[0], row[1]
            ),
        });
    }
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((k, 2), flat).map_err(|e| ConfigError::InvalidValue {
        key: "neg_value".to_string(),
        reason: e.to_string(),
    })
}
