use crate::core::error::{BoundsError, ConfigError};
use ndarray::{Array1, ArrayView3, Axis};

/// 클래스별 총 질량 (공간 축 합계)
pub fn class_mass(target: ArrayView3<f32>) -> Array1<f32> {
    target.sum_axis(Axis(2)).sum_axis(Axis(1))
}

/// 클래스 존재 마스크: 질량 > 0
pub fn presence(target: ArrayView3<f32>) -> Array1<bool> {
    class_mass(target).mapv(|m| m > 0.0)
}

/// 관심 클래스(idc)만 남긴 존재 마스크
pub fn masked_presence(target: ArrayView3<f32>, idc_mask: &Array1<bool>) -> Array1<bool> {
    let present = presence(target);
    ndarray::Zip::from(&present)
        .and(idc_mask)
        .map_collect(|&p, &keep| p && keep)
}

/// C개 클래스에 대한 idc 지시 마스크
pub fn idc_mask(c: usize, idc: &[usize]) -> Result<Array1<bool>, ConfigError> {
    let mut mask = Array1::from_elem(c, false);
    for &i in idc {
        if i >= c {
            return Err(ConfigError::InvalidValue {
                key: "idc".to_string(),
                reason: format!("클래스 {} >= C({})", i, c),
            });
        }
        mask[i] = true;
    }
    Ok(mask)
}

/// 두 라벨 맵의 shape가 같은지 확인
pub fn ensure_same_shape(
    target: ArrayView3<f32>,
    weak_target: ArrayView3<f32>,
) -> Result<(), BoundsError> {
    if target.shape() != weak_target.shape() {
        return Err(BoundsError::shape(
            "weak 라벨 shape",
            target.shape(),
            weak_target.shape(),
        ));
    }
    Ok(())
}
