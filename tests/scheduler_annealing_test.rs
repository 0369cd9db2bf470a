//! 여러 에폭에 걸친 스케줄러 동작 테스트

use weakseg::core::scheduler::{LossGroups, WeightGroups, SCHEDULERS};
use weakseg::{build_scheduler, LossHandle, LossKind, Options, WeightScheduler};
use approx::assert_relative_eq;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Adam {
    lr: f32,
}

fn 제약_손실() -> LossGroups {
    vec![vec![
        LossHandle::new(LossKind::PartialCrossEntropy).with_idc(vec![0, 1]),
        LossHandle::new(LossKind::LogBarrierLoss).with_idc(vec![1]).with_t(5.0),
    ]]
}

fn 에폭_실행(
    scheduler: &dyn WeightScheduler<Adam>,
    epochs: usize,
    mut loss_fns: LossGroups,
    mut weights: WeightGroups,
) -> (Adam, LossGroups, WeightGroups) {
    let mut optimizer = Adam { lr: 5e-4 };
    for epoch in 0..epochs {
        let (o, l, w) = scheduler.step(epoch, optimizer, loss_fns, weights).unwrap();
        optimizer = o;
        loss_fns = l;
        weights = w;
    }
    (optimizer, loss_fns, weights)
}

#[test]
fn 로그_배리어_온도_어닐링_테스트() {
    let opts = Options::from_value(json!({"target_loss": "LogBarrierLoss", "mu": 1.1})).unwrap();
    let scheduler = build_scheduler::<Adam>("MultiplyT", &opts).unwrap();

    let (optimizer, loss_fns, weights) = 에폭_실행(scheduler.as_ref(), 20, 제약_손실(), vec![vec![1.0, 0.01]]);

    assert_eq!(optimizer, Adam { lr: 5e-4 });
    assert_eq!(weights, vec![vec![1.0, 0.01]]);
    assert_eq!(loss_fns[0][0].temperature(), None);
    assert_relative_eq!(
        loss_fns[0][1].temperature().unwrap(),
        5.0 * 1.1f32.powi(20),
        max_relative = 1e-4
    );

    println!("✅ 온도 어닐링: t = {:?}", loss_fns[0][1].temperature());
}

#[test]
fn 가중치_이동_어닐링_테스트() {
    let opts = Options::from_value(json!({"to_steal": 0.05})).unwrap();
    let scheduler = build_scheduler::<Adam>("StealWeight", &opts).unwrap();

    let (_, _, weights) = 에폭_실행(scheduler.as_ref(), 10, 제약_손실(), vec![vec![1.0, 0.0]]);
    assert_relative_eq!(weights[0][0], 0.5, epsilon = 1e-5);
    assert_relative_eq!(weights[0][1], 0.5, epsilon = 1e-5);

    let (_, _, weights) = 에폭_실행(scheduler.as_ref(), 40, 제약_손실(), vec![vec![1.0, 0.0]]);
    assert_eq!(weights[0][0], 0.1);
    assert_relative_eq!(weights[0][1], 2.0, epsilon = 1e-5);
}

#[test]
fn 가중치_더하기_어닐링_테스트() {
    let opts = Options::from_value(json!({"to_add": [0.0, 0.01]})).unwrap();
    let scheduler = build_scheduler::<Adam>("AddWeightLoss", &opts).unwrap();

    let (_, _, weights) = 에폭_실행(scheduler.as_ref(), 100, 제약_손실(), vec![vec![1.0, 0.0]]);
    assert_eq!(weights[0][0], 1.0);
    assert_relative_eq!(weights[0][1], 1.0, epsilon = 1e-4);
}

#[test]
fn 항등_스케줄러는_상태를_바꾸지_않음_테스트() {
    let scheduler = build_scheduler::<Adam>(SCHEDULERS[0], &Options::new()).unwrap();
    let (optimizer, loss_fns, weights) = 에폭_실행(scheduler.as_ref(), 50, 제약_손실(), vec![vec![0.3, 0.7]]);

    assert_eq!(optimizer, Adam { lr: 5e-4 });
    assert_eq!(loss_fns, 제약_손실());
    assert_eq!(weights, vec![vec![0.3, 0.7]]);
}
