//! # 합성 토이 데이터
//!
//! 잡음 섞인 배경 위에 원 두 개(방해 원 255, 목표 원 125)를 그린 이미지와
//! 목표 원의 one-hot 라벨을 만든다. weak 라벨은 클래스별 바운딩 박스.

#[cfg(test)]
mod __tests__;

use crate::core::labels::{LabelMap, Sample};
use anyhow::{bail, Result};
use ndarray::{s, Array2, Array3, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 토이 데이터 생성 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToyConfig {
    pub width: usize,
    pub height: usize,
    /// 원 반지름
    pub radius: usize,
    /// 잡음 표준편차 상한 (샘플마다 [0, max_noise) 에서 뽑는다)
    pub max_noise: u32,
    pub seed: u64,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            radius: 10,
            max_noise: 100,
            seed: 0,
        }
    }
}

/// 목표 원 밝기
pub const TARGET_INTENSITY: f32 = 125.0;
/// 방해 원 밝기
pub const DISTRACTOR_INTENSITY: f32 = 255.0;

/// `n`개의 샘플 생성. 파일명은 `00000`, `00001`, ...
pub fn generate(config: &ToyConfig, n: usize) -> Result<Vec<Sample>> {
    let (w, h, r) = (config.width, config.height, config.radius);
    if w <= 2 * r || h <= 2 * r {
        bail!("토이 이미지({}x{})가 반지름 {} 원을 담기에 너무 작음", w, h, r);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    Ok((0..n).map(|i| gen_sample(&mut rng, config, i)).collect())
}

fn gen_sample(rng: &mut StdRng, config: &ToyConfig, index: usize) -> Sample {
    let (w, h, r) = (config.width, config.height, config.radius);

    let mut image = Array2::<f32>::zeros((w, h));
    let mut gt = Array2::<f32>::zeros((w, h));

    let (ax, ay) = (rng.gen_range(r..w - r), rng.gen_range(r..h - r));
    draw_disk(&mut image, ax, ay, r, DISTRACTOR_INTENSITY);

    let (cx, cy) = (rng.gen_range(r..w - r), rng.gen_range(r..h - r));
    draw_disk(&mut image, cx, cy, r, TARGET_INTENSITY);
    draw_disk(&mut gt, cx, cy, r, 1.0);

    let sigma = if config.max_noise > 0 {
        rng.gen_range(0..config.max_noise) as f32
    } else {
        0.0
    };
    image.mapv_inplace(|v| v + (gaussian(rng) * sigma).clamp(-255.0, 255.0));

    let target = one_hot(&gt);
    let weak_target = boxify(&target);

    Sample {
        image: image.insert_axis(Axis(0)),
        target,
        weak_target,
        filename: format!("{:05}", index),
    }
}

fn draw_disk(canvas: &mut Array2<f32>, cx: usize, cy: usize, r: usize, value: f32) {
    let r2 = (r * r) as i64;
    for ((x, y), v) in canvas.indexed_iter_mut() {
        let (dx, dy) = (x as i64 - cx as i64, y as i64 - cy as i64);
        if dx * dx + dy * dy <= r2 {
            *v = value;
        }
    }
}

/// Box-Muller 표준정규 난수
fn gaussian(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}

/// 이진 마스크 -> (2, W, H) one-hot (배경, 전경)
pub fn one_hot(mask: &Array2<f32>) -> LabelMap {
    let (w, h) = mask.dim();
    let mut out = Array3::<f32>::zeros((2, w, h));
    out.slice_mut(s![1, .., ..]).assign(mask);
    out.slice_mut(s![0, .., ..]).assign(&mask.mapv(|v| 1.0 - v));
    out
}

/// 클래스별 바운딩 박스를 채운 weak 라벨
///
/// 빈 클래스는 빈 채로 둔다.
pub fn boxify(target: &LabelMap) -> LabelMap {
    let mut weak = Array3::<f32>::zeros(target.raw_dim());

    for (c, channel) in target.axis_iter(Axis(0)).enumerate() {
        let mut extent: Option<(usize, usize, usize, usize)> = None;
        for ((x, y), &v) in channel.indexed_iter() {
            if v > 0.0 {
                extent = Some(match extent {
                    None => (x, x, y, y),
                    Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
                });
            }
        }
        if let Some((x0, x1, y0, y1)) = extent {
            weak.slice_mut(s![c, x0..=x1, y0..=y1]).fill(1.0);
        }
    }

    weak
}
