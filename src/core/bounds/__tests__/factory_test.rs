use super::{빈_이미지, 사각형_라벨};
use crate::core::bounds::{build_bounds, compute_batch, BoundsContext, BOUNDS_POLICIES};
use crate::core::error::{BoundsError, ConfigError};
use crate::core::labels::Sample;
use crate::core::options::Options;
use crate::core::predictor::{PredictorRegistry, ThresholdPredictor};
use serde_json::json;

fn 전체_옵션() -> Options {
    Options::from_value(json!({
        "C": 2,
        "values": {"1": [10, 20]},
        "idc": [1],
        "margin": 0.1,
        "mode": "abs",
        "fn": "soft_size",
        "neg_value": [[0.0, 0.0]],
        "margins": [0.5, 1.0],
        "net": "toy"
    }))
    .unwrap()
}

fn 컨텍스트() -> BoundsContext {
    let mut predictors = PredictorRegistry::new();
    predictors.register("toy", ThresholdPredictor::new(vec![(0.0, 0.5), (0.5, 2.0)]).unwrap());
    BoundsContext::with_defaults().with_predictors(predictors)
}

#[test]
fn 모든_정책_생성_테스트() {
    let ctx = 컨텍스트();
    let opts = 전체_옵션();
    let t = 사각형_라벨(2, 8, &[(0, (0, 8), (0, 4)), (1, (0, 8), (4, 8))]);

    for name in BOUNDS_POLICIES {
        let bounds = build_bounds(name, &opts, &ctx).unwrap();
        assert_eq!(bounds.name(), name);

        let res = bounds.compute(빈_이미지(8).view(), t.view(), t.view(), "x").unwrap();
        assert_eq!(res.shape()[0], 2);
        assert_eq!(res.shape()[2], 2);
    }
}

#[test]
fn 감싼_정책_생성_및_neg_value_검증_테스트() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
    let ctx = 컨텍스트();

    for name in ["PreciseTags", "PreciseUpper", "TagsPredictions"] {
        let bounds = build_bounds(name, &전체_옵션(), &ctx).unwrap();
        assert_eq!(bounds.name(), name);
    }

    let inverted = 전체_옵션().with("neg_value", json!([[2.0, 1.0]]));
    for name in ["PreciseTags", "TagsPredictions"] {
        assert!(matches!(
            build_bounds(name, &inverted, &ctx),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "neg_value"
        ));
    }

    let negative_box = 전체_옵션().with("margins", json!([-1.0, 0.5]));
    assert!(build_bounds("BoxBounds", &negative_box, &ctx).is_err());
}

#[test]
fn 알_수_없는_정책_거부_테스트() {
    assert_eq!(
        build_bounds("LooseBounds", &전체_옵션(), &컨텍스트()).err(),
        Some(ConfigError::UnknownBounds("LooseBounds".to_string()))
    );
}

#[test]
fn 병렬_배치_계산_테스트() {
    let bounds = build_bounds("TagBounds", &전체_옵션(), &컨텍스트()).unwrap();

    let samples: Vec<Sample> = (0..16)
        .map(|i| {
            let rects = if i % 2 == 0 {
                vec![(1, (0, 2), (0, 2))]
            } else {
                vec![(0, (0, 2), (0, 2))]
            };
            let t = 사각형_라벨(2, 4, &rects);
            Sample {
                image: 빈_이미지(4),
                weak_target: t.clone(),
                target: t,
                filename: format!("{:05}", i),
            }
        })
        .collect();

    let results = compute_batch(&bounds, &samples).unwrap();
    assert_eq!(results.len(), 16);
    for (i, res) in results.iter().enumerate() {
        let expected = if i % 2 == 0 { (10.0, 20.0) } else { (0.0, 0.0) };
        assert_eq!((res[[1, 0, 0]], res[[1, 0, 1]]), expected);
    }
}

#[test]
fn 배치_중_하나라도_실패하면_전체_실패_테스트() {
    let bounds = build_bounds("TagBounds", &전체_옵션(), &컨텍스트()).unwrap();

    let good = 사각형_라벨(2, 4, &[(1, (0, 2), (0, 2))]);
    let bad_weak = 사각형_라벨(2, 4, &[(0, (0, 2), (0, 2))]);
    let samples = vec![
        Sample {
            image: 빈_이미지(4),
            target: good.clone(),
            weak_target: good.clone(),
            filename: "ok".to_string(),
        },
        Sample {
            image: 빈_이미지(4),
            target: good,
            weak_target: bad_weak,
            filename: "broken".to_string(),
        },
    ];

    let err = compute_batch(&bounds, &samples).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BoundsError>(),
        Some(&BoundsError::Consistency {
            filename: "broken".to_string()
        })
    );
}
