//! ASHRAE(Hyland-Wexler) 포화 수증기압 상관식.
//! 빙점 이하(얼음 위)와 빙점 위(물 위)의 두 구간을 나누어 계산하며 0°C에서 이어진다.
//! 유효 범위 -100~200°C, ASHRAE 기준표 대비 300ppm 이내.

use crate::units::temperature::celsius_to_kelvin;

use super::{humidity, PsychroError, MAX_TEMP_C, MIN_TEMP_C};

// ln(pws) = N0/T + N1 + N2·T + N3·T² + N4·T³ + N5·T⁴ + N6·ln(T), T[K]
// 얼음 위(-100~0°C) 계수
const ICE_N: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

// ln(pws) = N0/T + N1 + N2·T + N3·T² + N4·T³ + N5·ln(T), T[K]
// 물 위(0~200°C) 계수
const WATER_N: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// 건구온도(°C)에서의 포화 수증기압(Pa)을 계산한다.
pub fn saturation_vapor_pressure_pa(t_c: f64) -> Result<f64, PsychroError> {
    if !(MIN_TEMP_C..=MAX_TEMP_C).contains(&t_c) {
        return Err(PsychroError::InvalidInput(
            "온도가 상관식 유효 범위(-100~200°C)를 벗어났습니다.",
        ));
    }
    let t_k = celsius_to_kelvin(t_c);
    let ln_pws = if t_c <= 0.0 {
        ICE_N[0] / t_k
            + ICE_N[1]
            + ICE_N[2] * t_k
            + ICE_N[3] * t_k.powi(2)
            + ICE_N[4] * t_k.powi(3)
            + ICE_N[5] * t_k.powi(4)
            + ICE_N[6] * t_k.ln()
    } else {
        WATER_N[0] / t_k
            + WATER_N[1]
            + WATER_N[2] * t_k
            + WATER_N[3] * t_k.powi(2)
            + WATER_N[4] * t_k.powi(3)
            + WATER_N[5] * t_k.ln()
    };
    Ok(ln_pws.exp())
}

/// 주어진 온도·전압에서 포화 상태의 습도비(kg수증기/kg건공기)를 계산한다.
pub fn saturation_humidity_ratio(t_c: f64, pressure_pa: f64) -> Result<f64, PsychroError> {
    let pws = saturation_vapor_pressure_pa(t_c)?;
    humidity::humidity_ratio_from_vapor_pressure(pws, pressure_pa)
}
