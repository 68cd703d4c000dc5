//! 습도비·수증기 분압·상대습도·엔탈피 등 습공기의 대수 관계식 모음.
//! 모든 함수는 순수 함수이며 SI(Pa, °C) 기준으로 계산한다.

use crate::units::temperature::celsius_to_kelvin;

use super::{saturation, PsychroError};

/// 수증기/건공기 분자량 비.
pub const MW_RATIO: f64 = 0.621945;
/// 건공기 기체상수 [J/(kg·K)].
pub const R_DRY_AIR: f64 = 287.042;
/// 건공기 정압비열 [kJ/(kg·K)].
pub const CP_DRY_AIR: f64 = 1.006;
/// 수증기 정압비열 [kJ/(kg·K)].
pub const CP_VAPOR: f64 = 1.86;
/// 0°C 기준 증발잠열 [kJ/kg].
pub const LATENT_HEAT_0C: f64 = 2501.0;

/// 수증기 분압(Pa)과 전압(Pa)으로 습도비를 계산한다.
/// 분압이 전압 이상이면 물리적으로 불가능한 상태이므로 오류를 돌려준다.
pub fn humidity_ratio_from_vapor_pressure(
    vapor_pressure_pa: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    if vapor_pressure_pa < 0.0 {
        return Err(PsychroError::InvalidInput(
            "수증기 분압은 음수가 될 수 없습니다.",
        ));
    }
    if vapor_pressure_pa >= pressure_pa {
        return Err(PsychroError::InvalidInput(
            "수증기 분압이 전압 이상입니다. 물리적으로 불가능한 상태입니다.",
        ));
    }
    Ok(MW_RATIO * vapor_pressure_pa / (pressure_pa - vapor_pressure_pa))
}

/// 습도비와 전압(Pa)으로 수증기 분압(Pa)을 계산한다. 위 함수의 역산.
pub fn vapor_pressure_from_humidity_ratio(
    humidity_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    if humidity_ratio < 0.0 {
        return Err(PsychroError::InvalidInput("습도비는 음수가 될 수 없습니다."));
    }
    Ok(pressure_pa * humidity_ratio / (MW_RATIO + humidity_ratio))
}

/// 상대습도(0~1)로부터 수증기 분압(Pa)을 계산한다.
pub fn vapor_pressure_from_rel_hum(t_c: f64, rel_hum: f64) -> Result<f64, PsychroError> {
    if !(0.0..=1.0).contains(&rel_hum) {
        return Err(PsychroError::InvalidInput("상대습도는 0~1 범위여야 합니다."));
    }
    Ok(rel_hum * saturation::saturation_vapor_pressure_pa(t_c)?)
}

/// 수증기 분압(Pa)으로부터 상대습도(0~1)를 계산한다.
pub fn rel_hum_from_vapor_pressure(t_c: f64, vapor_pressure_pa: f64) -> Result<f64, PsychroError> {
    if vapor_pressure_pa < 0.0 {
        return Err(PsychroError::InvalidInput(
            "수증기 분압은 음수가 될 수 없습니다.",
        ));
    }
    Ok(vapor_pressure_pa / saturation::saturation_vapor_pressure_pa(t_c)?)
}

/// 상대습도(0~1)로부터 습도비를 계산한다.
pub fn humidity_ratio_from_rel_hum(
    t_c: f64,
    rel_hum: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    let pv = vapor_pressure_from_rel_hum(t_c, rel_hum)?;
    humidity_ratio_from_vapor_pressure(pv, pressure_pa)
}

/// 습도비로부터 상대습도(0~1)를 계산한다.
pub fn rel_hum_from_humidity_ratio(
    t_c: f64,
    humidity_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    let pv = vapor_pressure_from_humidity_ratio(humidity_ratio, pressure_pa)?;
    rel_hum_from_vapor_pressure(t_c, pv)
}

/// 포화도 = 습도비 / 같은 온도·압력의 포화 습도비.
pub fn degree_of_saturation(
    t_c: f64,
    humidity_ratio: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    if humidity_ratio < 0.0 {
        return Err(PsychroError::InvalidInput("습도비는 음수가 될 수 없습니다."));
    }
    let ws = saturation::saturation_humidity_ratio(t_c, pressure_pa)?;
    Ok(humidity_ratio / ws)
}

/// 습공기 비엔탈피 [kJ/kg건공기]. 건공기 현열 + 수증기(잠열 + 현열) 항.
pub fn moist_air_enthalpy_kj_per_kg(t_c: f64, humidity_ratio: f64) -> f64 {
    CP_DRY_AIR * t_c + humidity_ratio * (LATENT_HEAT_0C + CP_VAPOR * t_c)
}

/// 습공기 비체적 [m³/kg건공기]. 이상기체 관계식.
/// 1.607858은 분자량 비의 역수(1/0.621945)다.
pub fn moist_air_specific_volume_m3_per_kg(
    t_c: f64,
    humidity_ratio: f64,
    pressure_pa: f64,
) -> f64 {
    R_DRY_AIR * celsius_to_kelvin(t_c) * (1.0 + 1.607858 * humidity_ratio) / pressure_pa
}

/// 습공기 밀도 [kg/m³] = (1 + 습도비) / 비체적.
pub fn moist_air_density_kg_per_m3(t_c: f64, humidity_ratio: f64, pressure_pa: f64) -> f64 {
    (1.0 + humidity_ratio) / moist_air_specific_volume_m3_per_kg(t_c, humidity_ratio, pressure_pa)
}
