use crate::core::error::ConfigError;
use crate::core::predictor::*;
use anyhow::Result;
use ndarray::{s, Array2, Array3, ArrayView4};

fn 두_배치_예측(_batch: ArrayView4<f32>) -> Result<Array2<f32>> {
    Ok(Array2::zeros((2, 3)))
}

#[test]
fn 밝기_구간_예측_테스트() {
    let mut image = Array3::<f32>::zeros((1, 8, 8));
    image.slice_mut(s![0, 0..2, 0..3]).fill(125.0);
    image.slice_mut(s![0, 6..8, 6..8]).fill(255.0);

    let predictor = ThresholdPredictor::new(vec![(0.0, 60.0), (60.0, 200.0)]).unwrap();
    let pred = predict_single(&predictor, image.view()).unwrap();

    assert_eq!(pred.len(), 2);
    assert_eq!(pred[0], 64.0 - 6.0 - 4.0);
    assert_eq!(pred[1], 6.0);
}

#[test]
fn 잘못된_구간_거부_테스트() {
    assert!(ThresholdPredictor::new(vec![]).is_err());
    assert!(ThresholdPredictor::new(vec![(5.0, 1.0)]).is_err());
}

#[test]
fn 레지스트리_조회_테스트() {
    let mut registry = PredictorRegistry::new();
    registry.register("toy", ThresholdPredictor::new(vec![(0.0, 1.0)]).unwrap());

    assert!(registry.get("toy").is_ok());
    assert_eq!(
        registry.get("unet.pkl").err(),
        Some(ConfigError::UnknownPredictor("unet.pkl".to_string()))
    );
}

#[test]
fn 배치_축_불일치_거부_테스트() {
    let image = Array3::<f32>::zeros((1, 4, 4));
    let err = predict_single(&두_배치_예측, image.view()).unwrap_err();
    assert!(err.to_string().contains("예측기 출력 배치"));
}
