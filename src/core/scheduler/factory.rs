use crate::core::error::ConfigError;
use crate::core::options::Options;
use crate::core::scheduler::{
    AddWeightLoss, DummyScheduler, MultiplyT, StealWeight, WeightScheduler,
};
use log::info;

/// 생성 가능한 스케줄러 이름
pub const SCHEDULERS: [&str; 4] = ["DummyScheduler", "AddWeightLoss", "StealWeight", "MultiplyT"];

/// 이름과 옵션으로 스케줄러 생성
pub fn build_scheduler<O>(
    name: &str,
    options: &Options,
) -> Result<Box<dyn WeightScheduler<O>>, ConfigError>
where
    O: 'static,
{
    let scheduler: Box<dyn WeightScheduler<O>> = match name {
        "DummyScheduler" => Box::new(DummyScheduler),
        "AddWeightLoss" => Box::new(AddWeightLoss::from_options(options)?),
        "StealWeight" => Box::new(StealWeight::from_options(options)?),
        "MultiplyT" => Box::new(MultiplyT::from_options(options)?),
        other => return Err(ConfigError::UnknownScheduler(other.to_string())),
    };
    info!("{} 초기화: {}", name, options);
    Ok(scheduler)
}
