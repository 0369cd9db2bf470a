use crate::core::bounds::*;
use crate::core::error::ConfigError;
use crate::core::measure::MeasurementRegistry;
use crate::core::options::Options;
use crate::core::predictor::PredictorRegistry;

/// 생성 가능한 경계 정책 이름
pub const BOUNDS_POLICIES: [&str; 8] = [
    "ConstantBounds",
    "TagBounds",
    "PreciseBounds",
    "PreciseTags",
    "PreciseUpper",
    "BoxBounds",
    "PredictionBounds",
    "TagsPredictions",
];

/// 경계 정책 생성에 주입되는 협력자들
#[derive(Debug, Clone, Default)]
pub struct BoundsContext {
    pub measurements: MeasurementRegistry,
    pub predictors: PredictorRegistry,
}

impl BoundsContext {
    /// 기본 측정 함수, 예측기 없음
    pub fn with_defaults() -> Self {
        Self {
            measurements: MeasurementRegistry::with_defaults(),
            predictors: PredictorRegistry::new(),
        }
    }

    pub fn with_predictors(mut self, predictors: PredictorRegistry) -> Self {
        self.predictors = predictors;
        self
    }
}

/// 정책 이름과 옵션으로 경계 정책 생성
///
/// 구성 오류는 여기서 즉시 실패한다.
pub fn build_bounds(
    name: &str,
    options: &Options,
    ctx: &BoundsContext,
) -> Result<Box<dyn BoundsFn>, ConfigError> {
    let bounds: Box<dyn BoundsFn> = match name {
        "ConstantBounds" => Box::new(ConstantBounds::from_options(options)?),
        "TagBounds" => Box::new(TagBounds::from_options(options)?),
        "PreciseBounds" => Box::new(PreciseBounds::from_options(options, &ctx.measurements)?),
        "PreciseTags" => Box::new(PreciseTags::from_options(options, &ctx.measurements)?),
        "PreciseUpper" => Box::new(PreciseUpper::from_options(options, &ctx.measurements)?),
        "BoxBounds" => Box::new(BoxBounds::from_options(options)?),
        "PredictionBounds" => Box::new(PredictionBounds::from_options(options, &ctx.predictors)?),
        "TagsPredictions" => Box::new(TagsPredictions::from_options(options, &ctx.predictors)?),
        other => return Err(ConfigError::UnknownBounds(other.to_string())),
    };
    Ok(bounds)
}
