//! 약지도 분할 학습을 위한 제약 구간 엔진과 손실 가중치 스케줄러
//!
//! 샘플마다 클래스별 (lower, upper) 구간을 만들어 제약 손실에 넘기고,
//! 에폭마다 손실 가중치와 온도 파라미터를 조정한다.

pub mod core;

// 핵심 모듈들 재수출
pub use self::core::{
    // 경계 엔진
    build_bounds, compute_batch, BoundsContext, BoundsFn,
    // 스케줄러
    build_scheduler, LossHandle, LossKind, WeightScheduler,
    // 에러 및 설정
    BoundsError, ConfigError, Options, RunConfig,
};

/// (C, K, 2) 구간 배열
pub type Bounds = ndarray::Array3<f32>;
