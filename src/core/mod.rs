//! # 핵심 모듈
//!
//! 경계 엔진(bounds)과 가중치 스케줄러(scheduler), 그리고 둘이 쓰는 설정/라벨 유틸리티

pub mod bounds;
pub mod error;
pub mod labels;
pub mod measure;
pub mod options;
pub mod predictor;
pub mod run_config;
pub mod scheduler;
pub mod toy;

// 주요 타입들 재수출
pub use bounds::{build_bounds, compute_batch, BoundsContext, BoundsFn};
pub use error::{BoundsError, ConfigError};
pub use labels::{LabelMap, Sample};
pub use options::Options;
pub use run_config::{PolicyConfig, RunConfig};
pub use scheduler::{build_scheduler, LossGroups, LossHandle, LossKind, WeightGroups, WeightScheduler};
