use crate::core::bounds::margin::MarginSpec;
use crate::core::bounds::{ensure_bounds_shape, override_absent, parse_neg_value, BoundsFn};
use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::presence;
use crate::core::measure::{MeasureFn, MeasurementRegistry};
use crate::core::options::Options;
use anyhow::Result;
use log::info;
use ndarray::{Array2, Array3, ArrayView3, Axis};
use std::fmt;

/// dense 라벨을 측정해 margin을 붙인 구간
pub struct PreciseBounds {
    margin: MarginSpec,
    measure: MeasureFn,
    fn_name: String,
}

impl PreciseBounds {
    pub fn new(margin: MarginSpec, measure: MeasureFn, fn_name: &str) -> Self {
        Self {
            margin,
            measure,
            fn_name: fn_name.to_string(),
        }
    }

    /// 옵션: `margin`, `mode`, `fn`
    pub fn from_options(options: &Options, registry: &MeasurementRegistry) -> Result<Self, ConfigError> {
        let margin = MarginSpec::from_options(options)?;
        let fn_name: String = options.required("fn")?;
        let measure = registry.get(&fn_name)?;
        info!("PreciseBounds 초기화: {}", options);
        Ok(Self::new(margin, measure, &fn_name))
    }

    pub fn margin(&self) -> MarginSpec {
        self.margin
    }
}

impl fmt::Debug for PreciseBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreciseBounds")
            .field("margin", &self.margin)
            .field("fn", &self.fn_name)
            .finish()
    }
}

impl BoundsFn for PreciseBounds {
    fn compute(
        &self,
        _image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        _weak_target: ArrayView3<f32>,
        _filename: &str,
    ) -> Result<Array3<f32>> {
        let c = target.len_of(Axis(0));
        let value: Array2<f32> = (self.measure)(target);
        if value.nrows() != c {
            return Err(BoundsError::shape(
                format!("측정 함수 `{}` 출력", self.fn_name),
                &[c, value.ncols()],
                value.shape(),
            )
            .into());
        }

        let res = self.margin.apply(value.view());
        ensure_bounds_shape(&res, c)?;
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "PreciseBounds"
    }
}

/// dense 라벨에 없는 클래스의 구간을 `neg_value`로 바꾼 PreciseBounds
#[derive(Debug)]
pub struct PreciseTags {
    inner: PreciseBounds,
    neg_value: Array2<f32>,
}

impl PreciseTags {
    pub fn new(inner: PreciseBounds, neg_value: Array2<f32>) -> Self {
        Self { inner, neg_value }
    }

    /// 옵션: PreciseBounds 옵션 + `neg_value` ((K, 2))
    pub fn from_options(options: &Options, registry: &MeasurementRegistry) -> Result<Self, ConfigError> {
        let inner = PreciseBounds::from_options(options, registry)?;
        let neg_value = parse_neg_value(options)?;
        info!("PreciseTags 초기화: {}", options);
        Ok(Self::new(inner, neg_value))
    }
}

impl BoundsFn for PreciseTags {
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
        "PreciseTags"
    }
}

/// 존재 클래스의 하한을 1, 없는 클래스의 하한을 0으로 고정
///
/// 상한은 PreciseBounds 결과 그대로.
#[derive(Debug)]
pub struct PreciseUpper {
    inner: PreciseBounds,
}

impl PreciseUpper {
    pub fn new(inner: PreciseBounds) -> Self {
        Self { inner }
    }

    pub fn from_options(options: &Options, registry: &MeasurementRegistry) -> Result<Self, ConfigError> {
        let inner = PreciseBounds::from_options(options, registry)?;
        info!("PreciseUpper 초기화: {}", options);
        Ok(Self::new(inner))
    }
}

impl BoundsFn for PreciseUpper {
    fn compute(
        &self,
        image: ArrayView3<f32>,
        target: ArrayView3<f32>,
        weak_target: ArrayView3<f32>,
        filename: &str,
    ) -> Result<Array3<f32>> {
        let mut res = self.inner.compute(image, target, weak_target, filename)?;
        let positive_class = presence(target);
        let c = res.len_of(Axis(0));
        if positive_class.len() != c {
            return Err(BoundsError::shape("존재 마스크", &[c], positive_class.shape()).into());
        }

        for (mut row, &p) in res.axis_iter_mut(Axis(0)).zip(positive_class.iter()) {
            row.column_mut(0).fill(if p { 1.0 } else { 0.0 });
        }
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "PreciseUpper"
    }
}
