use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 손실 함수 종류 태그
///
/// 스케줄러는 이 태그로만 대상 손실을 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossKind {
    CrossEntropy,
    PartialCrossEntropy,
    NaivePenalty,
    LogBarrierLoss,
}

impl LossKind {
    pub const ALL: [LossKind; 4] = [
        LossKind::CrossEntropy,
        LossKind::PartialCrossEntropy,
        LossKind::NaivePenalty,
        LossKind::LogBarrierLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LossKind::CrossEntropy => "CrossEntropy",
            LossKind::PartialCrossEntropy => "PartialCrossEntropy",
            LossKind::NaivePenalty => "NaivePenalty",
            LossKind::LogBarrierLoss => "LogBarrierLoss",
        }
    }
}

impl FromStr for LossKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LossKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownLossKind(s.to_string()))
    }
}

impl fmt::Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 훈련 루프가 들고 있는 손실 함수 핸들
///
/// 종류 태그와 스케줄러가 건드릴 수 있는 수치 파라미터만 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossHandle {
    pub kind: LossKind,
    /// 손실이 적용되는 클래스
    #[serde(default)]
    pub idc: Vec<usize>,
    /// 온도 파라미터 (log-barrier 계열)
    #[serde(default)]
    pub t: Option<f32>,
}

impl LossHandle {
    pub fn new(kind: LossKind) -> Self {
        Self {
            kind,
            idc: Vec::new(),
            t: None,
        }
    }

    pub fn with_idc(mut self, idc: Vec<usize>) -> Self {
        self.idc = idc;
        self
    }

    pub fn with_t(mut self, t: f32) -> Self {
        self.t = Some(t);
        self
    }

    pub fn temperature(&self) -> Option<f32> {
        self.t
    }
}

impl fmt::Display for LossHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.t {
            Some(t) => write!(f, "{}(t={})", self.kind, t),
            None => write!(f, "{}", self.kind),
        }
    }
}
