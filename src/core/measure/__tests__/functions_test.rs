use crate::core::measure::*;
use approx::assert_relative_eq;
use ndarray::{s, Array3};

#[test]
fn 중앙_정사각형_무게중심_테스트() {
    let mut t = Array3::<f32>::zeros((1, 100, 100));
    t.slice_mut(s![0, 40..60, 40..60]).fill(1.0);

    let res = soft_centroid(t.view());
    assert_eq!(res.shape(), &[1, 2]);
    assert_relative_eq!(res[[0, 0]], 49.5);
    assert_relative_eq!(res[[0, 1]], 49.5);
}

#[test]
fn 세로선_무게중심_테스트() {
    let mut t = Array3::<f32>::zeros((1, 100, 100));
    t.slice_mut(s![0, .., 20]).fill(1.0);

    let res = soft_centroid(t.view());
    assert_relative_eq!(res[[0, 0]], 49.5);
    assert_relative_eq!(res[[0, 1]], 20.0);
}

#[test]
fn 빈_맵_무게중심_테스트() {
    let t = Array3::<f32>::zeros((2, 100, 100));
    let res = soft_centroid(t.view());
    assert!(res.iter().all(|&v| v == 0.0));
}

#[test]
fn 영역_크기_테스트() {
    let mut t = Array3::<f32>::zeros((2, 10, 10));
    t.slice_mut(s![1, 0..3, 0..4]).fill(1.0);

    let res = soft_size(t.view());
    assert_eq!(res.shape(), &[2, 1]);
    assert_eq!(res[[0, 0]], 0.0);
    assert_eq!(res[[1, 0]], 12.0);
}

#[test]
fn 무게중심_거리_테스트() {
    // w 방향으로 0..2, h는 한 열: |0-0.5| = |1-0.5| = 0.5
    let mut t = Array3::<f32>::zeros((1, 4, 4));
    t.slice_mut(s![0, 0..2, 3]).fill(1.0);

    let res = soft_dist_centroid(t.view());
    assert_relative_eq!(res[[0, 0]], 0.5);
    assert_relative_eq!(res[[0, 1]], 0.0);
}
