//! 습공기 상태 해석기. 습도 관측값 하나를 표준 습도비로 정규화한 뒤
//! 나머지 모든 물성을 그 습도비에서만 유도한다. 각 물성이 서로 다른
//! (오래된) 관측값에서 계산되어 어긋나는 일을 원천적으로 막는다.

use crate::units::pressure::{kpa_to_pa, pa_to_kpa};

use super::{
    dew_point, humidity, wet_bulb, PsychroError, SolverSettings, MAX_TEMP_C, MIN_TEMP_C,
};

/// 포화 상태에서 부동소수점 오차로 상대습도가 1을 극미하게 넘는 경우의 허용치.
const REL_HUM_EPSILON: f64 = 1e-9;
/// 온도 순서 불변식 검사용 허용치 [°C].
const TEMP_ORDER_EPSILON_C: f64 = 1e-6;

/// 습도 관측값의 종류. 셋 중 정확히 하나로 상태를 지정한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidityInput {
    /// 상대습도(0~1)
    RelativeHumidity(f64),
    /// 습구온도(°C)
    WetBulbC(f64),
    /// 노점온도(°C)
    DewPointC(f64),
}

/// 상태의 출처. 혼합으로 만들어진 상태는 다시 혼합의 입력이 될 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    Primary,
    Mixed,
}

/// 해석이 끝난 습공기 상태. 생성 후에는 수정하지 않으며,
/// 입력이 바뀌면 resolve를 다시 호출해 새 상태를 만든다.
#[derive(Debug, Clone)]
pub struct AirState {
    /// 대기압 [kPa]
    pub pressure_kpa: f64,
    /// 건구온도 [°C]
    pub dry_bulb_c: f64,
    /// 습도비 [kg수증기/kg건공기]. 모든 파생 물성의 기준값.
    pub humidity_ratio: f64,
    /// 습구온도 [°C]
    pub wet_bulb_c: f64,
    /// 노점온도 [°C]
    pub dew_point_c: f64,
    /// 상대습도 (0~1)
    pub rel_hum: f64,
    /// 비엔탈피 [kJ/kg건공기]
    pub enthalpy_kj_per_kg: f64,
    /// 비체적 [m³/kg건공기]
    pub specific_volume_m3_per_kg: f64,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 수증기 분압 [kPa]
    pub vapor_pressure_kpa: f64,
    /// 포화 수증기압 [kPa]
    pub sat_vapor_pressure_kpa: f64,
    /// 포화도 (습도비/포화 습도비)
    pub degree_of_saturation: f64,
    /// 상태의 출처(기본/혼합)
    pub origin: StateOrigin,
}

/// 건구온도·대기압과 습도 관측값 하나로 완전한 상태를 해석한다.
pub fn resolve(
    dry_bulb_c: f64,
    pressure_kpa: f64,
    input: HumidityInput,
    solver: &SolverSettings,
) -> Result<AirState, PsychroError> {
    validate_base_inputs(dry_bulb_c, pressure_kpa)?;
    let pressure_pa = kpa_to_pa(pressure_kpa);
    // 1단계: 관측값을 표준 습도비로 정규화한다. 세 분기 중 정확히 하나만 탄다.
    let humidity_ratio = match input {
        HumidityInput::RelativeHumidity(rh) => {
            humidity::humidity_ratio_from_rel_hum(dry_bulb_c, rh, pressure_pa)?
        }
        HumidityInput::WetBulbC(t_wb) => {
            if t_wb > dry_bulb_c {
                return Err(PsychroError::InvalidInput(
                    "습구온도가 건구온도보다 높습니다.",
                ));
            }
            if t_wb < MIN_TEMP_C {
                return Err(PsychroError::InvalidInput(
                    "습구온도가 상관식 유효 범위(-100°C~)를 벗어났습니다.",
                ));
            }
            wet_bulb::humidity_ratio_from_wet_bulb(dry_bulb_c, t_wb, pressure_pa)?
        }
        HumidityInput::DewPointC(t_dp) => {
            if t_dp > dry_bulb_c {
                return Err(PsychroError::InvalidInput(
                    "노점온도가 건구온도보다 높습니다.",
                ));
            }
            dew_point::humidity_ratio_from_dew_point(t_dp, pressure_pa)?
        }
    };
    complete_from_ratio(
        dry_bulb_c,
        pressure_kpa,
        humidity_ratio,
        solver,
        StateOrigin::Primary,
    )
}

/// 2단계: 표준 습도비에서 나머지 모든 물성을 유도한다. 혼합 계산도 이 단계를 공유한다.
pub(crate) fn complete_from_ratio(
    dry_bulb_c: f64,
    pressure_kpa: f64,
    humidity_ratio: f64,
    solver: &SolverSettings,
    origin: StateOrigin,
) -> Result<AirState, PsychroError> {
    validate_base_inputs(dry_bulb_c, pressure_kpa)?;
    if humidity_ratio < 0.0 {
        return Err(PsychroError::InvalidState {
            field: "humidity_ratio",
            value: humidity_ratio,
        });
    }
    let pressure_pa = kpa_to_pa(pressure_kpa);
    let vapor_pressure_pa =
        humidity::vapor_pressure_from_humidity_ratio(humidity_ratio, pressure_pa)?;
    let sat_vapor_pressure_pa = super::saturation::saturation_vapor_pressure_pa(dry_bulb_c)?;
    let rel_hum = snap_rel_hum(vapor_pressure_pa / sat_vapor_pressure_pa)?;
    let wet_bulb_c =
        wet_bulb::wet_bulb_from_humidity_ratio(dry_bulb_c, humidity_ratio, pressure_pa, solver)?;
    let dew_point_c =
        dew_point::dew_point_from_humidity_ratio(dry_bulb_c, humidity_ratio, pressure_pa, solver)?;
    let state = AirState {
        pressure_kpa,
        dry_bulb_c,
        humidity_ratio,
        wet_bulb_c,
        dew_point_c,
        rel_hum,
        enthalpy_kj_per_kg: humidity::moist_air_enthalpy_kj_per_kg(dry_bulb_c, humidity_ratio),
        specific_volume_m3_per_kg: humidity::moist_air_specific_volume_m3_per_kg(
            dry_bulb_c,
            humidity_ratio,
            pressure_pa,
        ),
        density_kg_per_m3: humidity::moist_air_density_kg_per_m3(
            dry_bulb_c,
            humidity_ratio,
            pressure_pa,
        ),
        vapor_pressure_kpa: pa_to_kpa(vapor_pressure_pa),
        sat_vapor_pressure_kpa: pa_to_kpa(sat_vapor_pressure_pa),
        degree_of_saturation: humidity::degree_of_saturation(
            dry_bulb_c,
            humidity_ratio,
            pressure_pa,
        )?,
        origin,
    };
    validate_invariants(&state)?;
    Ok(state)
}

fn validate_base_inputs(dry_bulb_c: f64, pressure_kpa: f64) -> Result<(), PsychroError> {
    if !(MIN_TEMP_C..=MAX_TEMP_C).contains(&dry_bulb_c) {
        return Err(PsychroError::InvalidInput(
            "건구온도가 상관식 유효 범위(-100~200°C)를 벗어났습니다.",
        ));
    }
    if !pressure_kpa.is_finite() || pressure_kpa <= 0.0 {
        return Err(PsychroError::InvalidInput("대기압은 0보다 커야 합니다."));
    }
    Ok(())
}

fn snap_rel_hum(rel_hum: f64) -> Result<f64, PsychroError> {
    if !(0.0..=1.0 + REL_HUM_EPSILON).contains(&rel_hum) {
        return Err(PsychroError::InvalidState {
            field: "rel_hum",
            value: rel_hum,
        });
    }
    Ok(rel_hum.min(1.0))
}

/// 물리 불변식 검사: 습도비 ≥ 0, 노점 ≤ 습구 ≤ 건구.
fn validate_invariants(state: &AirState) -> Result<(), PsychroError> {
    if state.humidity_ratio < 0.0 {
        return Err(PsychroError::InvalidState {
            field: "humidity_ratio",
            value: state.humidity_ratio,
        });
    }
    if state.wet_bulb_c > state.dry_bulb_c + TEMP_ORDER_EPSILON_C {
        return Err(PsychroError::InvalidState {
            field: "wet_bulb_c",
            value: state.wet_bulb_c,
        });
    }
    if state.dew_point_c > state.wet_bulb_c + TEMP_ORDER_EPSILON_C {
        return Err(PsychroError::InvalidState {
            field: "dew_point_c",
            value: state.dew_point_c,
        });
    }
    Ok(())
}
