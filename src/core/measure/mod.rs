//! # 클래스별 측정 함수
//!
//! (C, W, H) 지시자 배열을 (C, K) 측정값으로 바꾸는 함수들과,
//! 이름으로 조회하는 레지스트리.

pub mod functions;
pub mod registry;

#[cfg(test)]
mod __tests__;

pub use functions::{soft_centroid, soft_dist_centroid, soft_size};
pub use registry::{MeasureFn, MeasurementRegistry};
