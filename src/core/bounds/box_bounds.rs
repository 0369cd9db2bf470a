use crate::core::bounds::{ensure_bounds_shape, BoundsFn};
use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::class_mass;
use crate::core::options::Options;
use anyhow::Result;
use log::info;
use ndarray::{Array3, ArrayView3, Axis};

/// weak 라벨(박스)의 크기에 두 배율을 곱한 구간
///
/// dense 라벨은 읽지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBounds {
    low_mult: f32,
    high_mult: f32,
}

impl BoxBounds {
    pub fn new(low_mult: f32, high_mult: f32) -> Result<Self, ConfigError> {
        if low_mult.is_nan() || high_mult.is_nan() || low_mult < 0.0 || low_mult > high_mult {
            return Err(ConfigError::InvalidValue {
                key: "margins".to_string(),
                reason: format!(
                    "0 <= low_mult({}) <= high_mult({}) 이어야 함",
                    low_mult, high_mult
                ),
            });
        }
        Ok(Self { low_mult, high_mult })
    }

    /// 옵션: `margins` = [low_mult, high_mult]
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let margins: Vec<f32> = options.required("margins")?;
        if margins.len() != 2 {
            return Err(ConfigError::LengthMismatch {
                what: "margins".to_string(),
                expected: 2,
                actual: margins.len(),
            });
        }
        let bounds = Self::new(margins[0], margins[1])?;
        info!("BoxBounds 초기화: {}", options);
        Ok(bounds)
    }

    pub fn margins(&self) -> (f32, f32) {
        (self.low_mult, self.high_mult)
    }
}

impl BoundsFn for BoxBounds {
    fn compute(
        &self,
        _image: ArrayView3<f32>,
        _target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        _filename: &str,
    ) -> Result<Array3<f32>> {
        let c = weak_target.len_of(Axis(0));
        let box_sizes = class_mass(weak_target);

        let mut res = Array3::<f32>::zeros((c, 1, 2));
        for (i, &size) in box_sizes.iter().enumerate() {
            res[[i, 0, 0]] = size * self.low_mult;
            res[[i, 0, 1]] = size * self.high_mult;
        }

        ensure_bounds_shape(&res, c)?;
        if let Some(i) = (0..c).find(|&i| res[[i, 0, 0]] > res[[i, 0, 1]]) {
            return Err(BoundsError::Order {
                class: i,
                lower: res[[i, 0, 0]],
                upper: res[[i, 0, 1]],
            }
            .into());
        }
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "BoxBounds"
    }
}
