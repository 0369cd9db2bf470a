//! 경계/스케줄러 계층의 에러 분류
//!
//! 모든 에러는 즉시 호출자(훈련 루프)로 전파된다. 재시도 가능한 에러는 없다.

use thiserror::Error;

/// 구성 단계 에러 - 생성 시점에 즉시 실패
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("필수 옵션 누락: `{0}`")]
    MissingKey(String),

    #[error("옵션 `{key}` 값이 잘못됨: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("알 수 없는 margin 모드: `{0}` (percentage 또는 abs)")]
    UnknownMode(String),

    #[error("등록되지 않은 측정 함수: `{0}`")]
    UnknownMeasurement(String),

    #[error("등록되지 않은 예측기: `{0}`")]
    UnknownPredictor(String),

    #[error("알 수 없는 경계 정책: `{0}`")]
    UnknownBounds(String),

    #[error("알 수 없는 스케줄러: `{0}`")]
    UnknownScheduler(String),

    #[error("알 수 없는 손실 종류: `{0}`")]
    UnknownLossKind(String),

    #[error("길이 불일치: {what} (기대 {expected}, 실제 {actual})")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
}

/// 경계 계산 중 발생하는 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    /// dense/weak 라벨의 클래스 존재 여부가 불일치
    #[error("라벨 간 태그 불일치: {filename}")]
    Consistency { filename: String },

    /// 내부 shape 불변식 위반
    #[error("shape 불변식 위반: {what} (기대 {expected:?}, 실제 {actual:?})")]
    Shape {
        what: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// lower > upper (음수 질량 등)
    #[error("구간 순서 위반: 클래스 {class} lower {lower} > upper {upper}")]
    Order { class: usize, lower: f32, upper: f32 },
}

impl BoundsError {
    pub fn shape(what: impl Into<String>, expected: &[usize], actual: &[usize]) -> Self {
        BoundsError::Shape {
            what: what.into(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}
