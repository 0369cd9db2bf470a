use crate::core::error::ConfigError;
use crate::core::options::Options;
use crate::core::scheduler::{LossGroups, ScheduleStep, WeightGroups, WeightScheduler};
use anyhow::Result;
use log::info;

/// 항등 스케줄러
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DummyScheduler;

impl<O> WeightScheduler<O> for DummyScheduler {
    fn step(
        &self,
        _epoch: usize,
        optimizer: O,
        loss_fns: LossGroups,
        loss_weights: WeightGroups,
    ) -> Result<ScheduleStep<O>> {
        Ok((optimizer, loss_fns, loss_weights))
    }

    fn name(&self) -> &'static str {
        "DummyScheduler"
    }
}

/// 각 그룹의 i번째 가중치에 `to_add[i]`를 더한다
#[derive(Debug, Clone, PartialEq)]
pub struct AddWeightLoss {
    to_add: Vec<f32>,
}

impl AddWeightLoss {
    pub fn new(to_add: Vec<f32>) -> Self {
        Self { to_add }
    }

    /// 옵션: `to_add`
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self::new(options.required("to_add")?))
    }

    pub fn to_add(&self) -> &[f32] {
        &self.to_add
    }
}

impl<O> WeightScheduler<O> for AddWeightLoss {
    fn step(
        &self,
        epoch: usize,
        optimizer: O,
        loss_fns: LossGroups,
        loss_weights: WeightGroups,
    ) -> Result<ScheduleStep<O>> {
        if let Some(group) = loss_weights.iter().find(|w| w.len() != self.to_add.len()) {
            return Err(ConfigError::LengthMismatch {
                what: "AddWeightLoss to_add / 가중치 그룹".to_string(),
                expected: self.to_add.len(),
                actual: group.len(),
            }
            .into());
        }

        let new_weights: WeightGroups = loss_weights
            .iter()
            .map(|w| w.iter().zip(&self.to_add).map(|(a, b)| a + b).collect())
            .collect();

        info!(
            "[epoch {}] 손실 가중치 변경: {:?} -> {:?}",
            epoch, loss_weights, new_weights
        );

        Ok((optimizer, loss_fns, new_weights))
    }

    fn name(&self) -> &'static str {
        "AddWeightLoss"
    }
}

/// 가중치 하한 (첫 번째 항이 사라지지 않도록)
pub const STEAL_FLOOR: f32 = 0.1;

/// 두 항 (데이터 항, 제약 항) 사이에서 `to_steal` 만큼 가중치를 옮긴다
///
/// 첫 번째 가중치는 [`STEAL_FLOOR`] 아래로 내려가지 않고, 두 번째는 상한 없이 커진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StealWeight {
    to_steal: f32,
}

impl StealWeight {
    pub fn new(to_steal: f32) -> Self {
        Self { to_steal }
    }

    /// 옵션: `to_steal`
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self::new(options.required("to_steal")?))
    }
}

impl<O> WeightScheduler<O> for StealWeight {
    fn step(
        &self,
        epoch: usize,
        optimizer: O,
        loss_fns: LossGroups,
        loss_weights: WeightGroups,
    ) -> Result<ScheduleStep<O>> {
        let mut new_weights = WeightGroups::with_capacity(loss_weights.len());
        for w in &loss_weights {
            match w.as_slice() {
                [a, b] => new_weights.push(vec![
                    (a - self.to_steal).max(STEAL_FLOOR),
                    b + self.to_steal,
                ]),
                _ => {
                    return Err(ConfigError::LengthMismatch {
                        what: "StealWeight 가중치 그룹".to_string(),
                        expected: 2,
                        actual: w.len(),
                    }
                    .into())
                }
            }
        }

        info!(
            "[epoch {}] 손실 가중치 변경: {:?} -> {:?}",
            epoch, loss_weights, new_weights
        );

        Ok((optimizer, loss_fns, new_weights))
    }

    fn name(&self) -> &'static str {
        "StealWeight"
    }
}
