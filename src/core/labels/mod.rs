//! # 라벨 맵 유틸리티
//!
//! (C, W, H) 지시자 배열에 대한 클래스별 질량과 존재 마스크.

pub mod presence;


pub use presence::*;

use ndarray::Array3;

/// dense/weak 라벨 맵: (C, W, H)
pub type LabelMap = Array3<f32>;

/// 입력 이미지: (채널, W, H)
pub type Image = Array3<f32>;

/// 훈련 샘플 하나: 이미지, dense/weak 라벨, 식별자
#[derive(Debug, Clone)]
pub struct Sample {
    pub image: Image,
    pub target: LabelMap,
    pub weak_target: LabelMap,
    pub filename: String,
}
