//! # 손실 가중치 스케줄러
//!
//! 에폭 경계마다 한 번 호출되어 (옵티마이저, 손실 함수 그룹, 가중치 그룹)을
//! 다음 에폭용으로 바꾼다. 가중치는 새 값으로 돌려주고, 손실 핸들은 제자리에서
//! 바뀔 수 있다 (MultiplyT). 호출은 순차적이어야 한다.

pub mod factory;
pub mod loss;
pub mod temperature;
pub mod weights;


pub use factory::{build_scheduler, SCHEDULERS};
pub use loss::{LossHandle, LossKind};
pub use temperature::MultiplyT;
pub use weights::{AddWeightLoss, DummyScheduler, StealWeight};

use anyhow::Result;

/// 위치로 짝지어진 손실 함수 그룹
pub type LossGroups = Vec<Vec<LossHandle>>;

/// 손실 가중치 그룹
pub type WeightGroups = Vec<Vec<f32>>;

/// 스케줄러 한 단계의 결과: 다음 에폭부터 쓸 (옵티마이저, 손실, 가중치)
pub type ScheduleStep<O> = (O, LossGroups, WeightGroups);

/// 에폭 경계 변환
///
/// `O`는 훈련 루프의 옵티마이저 핸들이며 스케줄러는 내용을 보지 않는다.
pub trait WeightScheduler<O>: Send + Sync {
    fn step(
        &self,
        epoch: usize,
        optimizer: O,
        loss_fns: LossGroups,
        loss_weights: WeightGroups,
    ) -> Result<ScheduleStep<O>>;

    fn name(&self) -> &'static str;
}
