use crate::core::labels::{class_mass, presence};
use crate::core::toy::*;
use ndarray::{array, s, Array2};

#[test]
fn 박스화_테스트() {
    let mut mask = Array2::<f32>::zeros((6, 6));
    mask[[1, 2]] = 1.0;
    mask[[3, 4]] = 1.0;
    let target = one_hot(&mask);
    let weak = boxify(&target);

    // 전경 박스: x 1..=3, y 2..=4 -> 9 픽셀
    assert_eq!(class_mass(weak.view()), array![36.0, 9.0]);
    assert_eq!(weak[[1, 2, 3]], 1.0);
    assert_eq!(weak[[1, 0, 0]], 0.0);
}

#[test]
fn 빈_클래스_박스화_테스트() {
    let mask = Array2::<f32>::zeros((4, 4));
    let weak = boxify(&one_hot(&mask));
    assert_eq!(class_mass(weak.view()), array![16.0, 0.0]);
}

#[test]
fn 토이_샘플_생성_테스트() {
    let config = ToyConfig {
        width: 48,
        height: 40,
        radius: 6,
        max_noise: 0,
        seed: 7,
    };
    let samples = generate(&config, 5).unwrap();
    assert_eq!(samples.len(), 5);

    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.filename, format!("{:05}", i));
        assert_eq!(sample.image.shape(), &[1, 48, 40]);
        assert_eq!(sample.target.shape(), &[2, 48, 40]);

        // one-hot 합은 모든 픽셀에서 1
        let total = sample.target.sum_axis(ndarray::Axis(0));
        assert!(total.iter().all(|&v| v == 1.0));

        // weak 박스는 dense 라벨을 포함하고 존재 여부가 같다
        assert_eq!(presence(sample.target.view()), presence(sample.weak_target.view()));
        let dense = class_mass(sample.target.view());
        let weak = class_mass(sample.weak_target.view());
        assert!(weak[1] >= dense[1]);

        // 잡음이 없으면 목표 원 픽셀은 정확히 125
        let fg = sample.target.slice(s![1, .., ..]);
        for (&label, &v) in fg.iter().zip(sample.image.slice(s![0, .., ..]).iter()) {
            if label > 0.0 {
                assert_eq!(v, TARGET_INTENSITY);
            }
        }
    }
}

#[test]
fn 같은_시드는_같은_데이터_테스트() {
    let config = ToyConfig::default();
    let a = generate(&config, 3).unwrap();
    let b = generate(&config, 3).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.image, y.image);
        assert_eq!(x.target, y.target);
    }
}

#[test]
fn 너무_작은_이미지_거부_테스트() {
    let config = ToyConfig {
        width: 10,
        height: 10,
        radius: 5,
        ..ToyConfig::default()
    };
    assert!(generate(&config, 1).is_err());
}
