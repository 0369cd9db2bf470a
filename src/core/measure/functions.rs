use crate::core::labels::class_mass;
use ndarray::{Array2, ArrayView3, Axis};

/// 클래스별 영역 크기 (K = 1)
pub fn soft_size(target: ArrayView3<f32>) -> Array2<f32> {
    class_mass(target).insert_axis(Axis(1))
}

/// 질량 가중 무게중심 (K = 2, (w, h) 순서)
///
/// 빈 클래스는 (0, 0).
pub fn soft_centroid(target: ArrayView3<f32>) -> Array2<f32> {
    let c = target.len_of(Axis(0));
    let mut out = Array2::<f32>::zeros((c, 2));

    for (k, channel) in target.axis_iter(Axis(0)).enumerate() {
        let (mut total, mut sw, mut sh) = (0.0f64, 0.0f64, 0.0f64);
        for ((w, h), &v) in channel.indexed_iter() {
            let v = v as f64;
            total += v;
            sw += w as f64 * v;
            sh += h as f64 * v;
        }
        if total > 0.0 {
            out[[k, 0]] = (sw / total) as f32;
            out[[k, 1]] = (sh / total) as f32;
        }
    }

    out
}

/// 무게중심으로부터의 평균 절대 거리 (K = 2, 축별)
pub fn soft_dist_centroid(target: ArrayView3<f32>) -> Array2<f32> {
    let centroids = soft_centroid(target);
    let c = target.len_of(Axis(0));
    let mut out = Array2::<f32>::zeros((c, 2));

    for (k, channel) in target.axis_iter(Axis(0)).enumerate() {
        let (cw, ch) = (centroids[[k, 0]] as f64, centroids[[k, 1]] as f64);
        let (mut total, mut dw, mut dh) = (0.0f64, 0.0f64, 0.0f64);
        for ((w, h), &v) in channel.indexed_iter() {
            let v = v as f64;
            total += v;
            dw += (w as f64 - cw).abs() * v;
            dh += (h as f64 - ch).abs() * v;
        }
        if total > 0.0 {
            out[[k, 0]] = (dw / total) as f32;
            out[[k, 1]] = (dh / total) as f32;
        }
    }

    out
}
