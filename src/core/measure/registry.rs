use crate::core::error::ConfigError;
use crate::core::measure::functions::{soft_centroid, soft_dist_centroid, soft_size};
use ndarray::{Array2, ArrayView3};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// (C, W, H) -> (C, K) 측정 함수
pub type MeasureFn = Arc<dyn Fn(ArrayView3<f32>) -> Array2<f32> + Send + Sync>;

/// 이름 -> 측정 함수 레지스트리
///
/// 시작 시점에 채워지며, 경계 정책 생성 시 조회된다.
#[derive(Clone, Default)]
pub struct MeasurementRegistry {
    functions: BTreeMap<String, MeasureFn>,
}

impl MeasurementRegistry {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 측정 함수들이 등록된 레지스트리
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("soft_size", soft_size);
        registry.register("soft_centroid", soft_centroid);
        registry.register("soft_dist_centroid", soft_dist_centroid);
        registry
    }

    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(ArrayView3<f32>) -> Array2<f32> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Result<MeasureFn, ConfigError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownMeasurement(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl fmt::Debug for MeasurementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.functions.keys()).finish()
    }
}
