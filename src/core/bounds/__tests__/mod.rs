mod factory_test;

use ndarray::{s, Array3};

/// 클래스 c마다 (w0..w1, h0..h1) 사각형을 채운 (C, W, H) 라벨
pub(super) fn 사각형_라벨(c: usize, wh: usize, rects: &[(usize, (usize, usize), (usize, usize))]) -> Array3<f32> {
    let mut t = Array3::<f32>::zeros((c, wh, wh));
    for &(k, (w0, w1), (h0, h1)) in rects {
        t.slice_mut(s![k, w0..w1, h0..h1]).fill(1.0);
    }
    t
}

pub(super) fn 빈_이미지(wh: usize) -> Array3<f32> {
    Array3::<f32>::zeros((1, wh, wh))
}
