//! 이름 붙은 옵션 맵 - 경계 정책과 스케줄러의 생성 인자
//!
//! JSON 객체를 감싸며, 필수 키가 없으면 키 이름을 담은 에러로 즉시 실패한다.

use crate::core::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 값에서 생성 (객체 또는 null만 허용)
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ConfigError::InvalidValue {
                key: "<options>".to_string(),
                reason: format!("객체가 아님: {}", other),
            }),
        }
    }

    /// 빌더 스타일 삽입
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// 필수 옵션 - 없으면 `MissingKey`
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        match self.0.get(key) {
            Some(value) => decode(key, value),
            None => Err(ConfigError::MissingKey(key.to_string())),
        }
    }

    /// 선택 옵션 - 없으면 `None`, 있는데 타입이 틀리면 에러
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.0.get(key).map(|value| decode(key, value)).transpose()
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T, ConfigError> {
    T::deserialize(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
