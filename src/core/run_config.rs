//! 실행 설정 파일 (JSON)
//!
//! ```json
//! {
//!   "bounds": {"name": "PreciseBounds", "options": {"margin": 0.1, "mode": "percentage", "fn": "soft_size"}},
//!   "scheduler": {"name": "StealWeight", "options": {"to_steal": 0.05}},
//!   "losses": [[{"kind": "CrossEntropy", "idc": [0, 1]}, {"kind": "NaivePenalty", "idc": [1]}]],
//!   "weights": [[1.0, 0.0]]
//! }
//! ```

use crate::core::error::ConfigError;
use crate::core::options::Options;
use crate::core::scheduler::{LossGroups, WeightGroups};
use crate::core::toy::ToyConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 이름 + 옵션으로 지정된 정책
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub name: String,
    #[serde(default)]
    pub options: Options,
}

/// 훈련 실행 하나의 경계/스케줄러 구성
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub bounds: PolicyConfig,
    pub scheduler: PolicyConfig,
    pub losses: LossGroups,
    pub weights: WeightGroups,
    #[serde(default)]
    pub toy: ToyConfig,
}

impl RunConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: RunConfig = serde_json::from_str(s).context("실행 설정 파싱 실패")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("실행 설정 읽기 실패: {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// 손실 그룹과 가중치 그룹이 위치별로 짝지어지는지 확인
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.losses.len() != self.weights.len() {
            return Err(ConfigError::LengthMismatch {
                what: "losses / weights 그룹 수".to_string(),
                expected: self.losses.len(),
                actual: self.weights.len(),
            });
        }
        for (l, w) in self.losses.iter().zip(&self.weights) {
            if l.len() != w.len() {
                return Err(ConfigError::LengthMismatch {
                    what: "losses / weights 그룹 길이".to_string(),
                    expected: l.len(),
                    actual: w.len(),
                });
            }
        }
        Ok(())
    }
}
