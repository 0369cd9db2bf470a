use crate::core::error::ConfigError;
use crate::core::options::Options;
use ndarray::{Array3, ArrayView2};
use std::fmt;
use std::str::FromStr;

/// margin 계산 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginMode {
    /// margin = 측정값 * 비율
    Percentage,
    /// margin = 상수
    Abs,
}

impl FromStr for MarginMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(MarginMode::Percentage),
            "abs" => Ok(MarginMode::Abs),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for MarginMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginMode::Percentage => write!(f, "percentage"),
            MarginMode::Abs => write!(f, "abs"),
        }
    }
}

/// 측정값 주위로 구간을 만드는 규칙
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginSpec {
    pub margin: f32,
    pub mode: MarginMode,
}

impl MarginSpec {
    pub fn new(margin: f32, mode: MarginMode) -> Self {
        Self { margin, mode }
    }

    /// `margin`, `mode` 옵션에서 생성
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let margin: f32 = options.required("margin")?;
        let mode: String = options.required("mode")?;
        if margin.is_nan() || margin < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "margin".to_string(),
                reason: format!("음수 또는 NaN: {}", margin),
            });
        }
        Ok(Self::new(margin, mode.parse()?))
    }

    /// (C, K) 측정값 -> (C, K, 2) 구간, 양 끝을 0 아래로 자른다
    pub fn apply(&self, value: ArrayView2<f32>) -> Array3<f32> {
        let (c, k) = value.dim();
        let mut res = Array3::<f32>::zeros((c, k, 2));

        for ((i, j), &v) in value.indexed_iter() {
            let margin = match self.mode {
                MarginMode::Percentage => v * self.margin,
                MarginMode::Abs => self.margin,
            };
            res[[i, j, 0]] = (v - margin).max(0.0);
            res[[i, j, 1]] = (v + margin).max(0.0);
        }

        res
    }
}
