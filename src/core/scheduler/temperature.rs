use crate::core::error::ConfigError;
use crate::core::options::Options;
use crate::core::scheduler::{LossGroups, LossKind, ScheduleStep, WeightGroups, WeightScheduler};
use anyhow::Result;
use log::{debug, info};

/// 대상 종류 손실의 온도 `t`에 `mu`를 곱한다 (제자리 변경)
///
/// 반복 호출하면 곱이 누적된다. 가중치는 그대로.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplyT {
    target_loss: LossKind,
    mu: f32,
}

impl MultiplyT {
    pub fn new(target_loss: LossKind, mu: f32) -> Self {
        Self { target_loss, mu }
    }

    /// 옵션: `target_loss`, `mu`
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let target: String = options.required("target_loss")?;
        let mu: f32 = options.required("mu")?;
        Ok(Self::new(target.parse()?, mu))
    }
}

impl<O> WeightScheduler<O> for MultiplyT {
    fn step(
        &self,
        epoch: usize,
        optimizer: O,
        mut loss_fns: LossGroups,
        loss_weights: WeightGroups,
    ) -> Result<ScheduleStep<O>> {
        // 바꾸기 전에 대상 핸들이 모두 t를 가지는지 확인
        let missing_t = loss_fns
            .iter()
            .flatten()
            .any(|l| l.kind == self.target_loss && l.t.is_none());
        if missing_t {
            return Err(ConfigError::InvalidValue {
                key: "target_loss".to_string(),
                reason: format!("{} 핸들에 온도 파라미터 t가 없음", self.target_loss),
            }
            .into());
        }

        let mut updated = 0usize;
        for loss in loss_fns.iter_mut().flatten() {
            if loss.kind != self.target_loss {
                continue;
            }
            if let Some(t) = loss.t.as_mut() {
                debug!("{}: t {} -> {}", loss.kind, *t, *t * self.mu);
                *t *= self.mu;
                updated += 1;
            }
        }

        info!(
            "[epoch {}] {} 핸들 {}개의 t에 {} 곱함",
            epoch, self.target_loss, updated, self.mu
        );

        Ok((optimizer, loss_fns, loss_weights))
    }

    fn name(&self) -> &'static str {
        "MultiplyT"
    }
}
