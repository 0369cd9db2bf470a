use crate::core::bounds::{ensure_bounds_shape, BoundsFn};
use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::{ensure_same_shape, idc_mask, masked_presence};
use crate::core::options::Options;
use anyhow::Result;
use log::{debug, info};
use ndarray::{Array1, Array3, ArrayView3, Axis};
use std::collections::BTreeMap;

/// 설정값으로 만든 고정 구간 (C, 1, 2)
///
/// 나열되지 않은 클래스는 (0, 0). 호출 인자는 보지 않는다.
#[derive(Debug, Clone)]
pub struct ConstantBounds {
    c: usize,
    constant: Array3<f32>,
}

impl ConstantBounds {
    pub fn new(c: usize, values: &BTreeMap<usize, (f32, f32)>) -> Result<Self, ConfigError> {
        if c == 0 {
            return Err(ConfigError::InvalidValue {
                key: "C".to_string(),
                reason: "클래스 수는 양수여야 함".to_string(),
            });
        }

        let mut constant = Array3::<f32>::zeros((c, 1, 2));
        for (&i, &(low, high)) in values {
            if i >= c {
                return Err(ConfigError::InvalidValue {
                    key: "values".to_string(),
                    reason: format!("클래스 {} >= C({})", i, c),
                });
            }
            if low.is_nan() || high.is_nan() || low < 0.0 || low > high {
                return Err(ConfigError::InvalidValue {
                    key: "values".to_string(),
                    reason: format!("클래스 {}: 0 <= low({}) <= high({}) 이어야 함", i, low, high),
                });
            }
            constant[[i, 0, 0]] = low;
            constant[[i, 0, 1]] = high;
        }

        Ok(Self { c, constant })
    }

    /// 옵션: `C`, `values`
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let c: usize = options.required("C")?;
        let values: BTreeMap<usize, (f32, f32)> = options.required("values")?;
        let bounds = Self::new(c, &values)?;
        info!("ConstantBounds 초기화: {}", options);
        Ok(bounds)
    }

    pub fn num_classes(&self) -> usize {
        self.c
    }
}

impl BoundsFn for ConstantBounds {
    fn compute(
        &self,
        _image: ArrayView3<f32>,
        _target: ArrayView3<f32>,
        _weak_target: ArrayView3<f32>,
        _filename: &str,
    ) -> Result<Array3<f32>> {
        Ok(self.constant.clone())
    }

    fn name(&self) -> &'static str {
        "ConstantBounds"
    }
}

/// 클래스 존재 태그로 가린 고정 구간
///
/// dense/weak 라벨의 존재 마스크를 idc로 제한해 비교하고, dense 라벨에
/// 없는 클래스의 구간은 0으로 만든다.
#[derive(Debug, Clone)]
pub struct TagBounds {
    inner: ConstantBounds,
    idc: Vec<usize>,
    idc_mask: Array1<bool>,
    ignore_disp: bool,
}

impl TagBounds {
    pub fn new(inner: ConstantBounds, idc: Vec<usize>, ignore_disp: bool) -> Result<Self, ConfigError> {
        let idc_mask = idc_mask(inner.num_classes(), &idc)?;
        Ok(Self {
            inner,
            idc,
            idc_mask,
            ignore_disp,
        })
    }

    /// 옵션: `C`, `values`, `idc`, `ignore_disp`(기본 false)
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let inner = ConstantBounds::from_options(options)?;
        let idc: Vec<usize> = options.required("idc")?;
        let ignore_disp = options.optional("ignore_disp")?.unwrap_or(false);
        let bounds = Self::new(inner, idc, ignore_disp)?;
        info!("TagBounds 초기화: {}", options);
        Ok(bounds)
    }

    pub fn idc(&self) -> &[usize] {
        &self.idc
    }
}

impl BoundsFn for TagBounds {
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>> {
        ensure_same_shape(target, weak_target)?;
        let c = self.inner.num_classes();
        if target.len_of(Axis(0)) != c {
            return Err(BoundsError::shape("dense 라벨 클래스 축", &[c], &target.shape()[..1]).into());
        }

        let masked_positive = masked_presence(target, &self.idc_mask);
        let masked_weak = masked_presence(weak_target, &self.idc_mask);
        if masked_positive != masked_weak {
            if !self.ignore_disp {
                return Err(BoundsError::Consistency {
                    filename: filename.to_string(),
                }
                .into());
            }
            debug!("{}: 태그 불일치 무시", filename);
        }

        let mut res = self.inner.compute(image, target, weak_target, filename)?;
        for (mut row, &p) in res.axis_iter_mut(Axis(0)).zip(masked_positive.iter()) {
            if !p {
                row.fill(0.0);
            }
        }

        ensure_bounds_shape(&res, c)?;
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "TagBounds"
    }
}
