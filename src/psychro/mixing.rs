//! 두 습공기 흐름의 단열 혼합 계산.
//! 건구온도와 습도비를 질량 유량비로 선형 가중 평균한 뒤 상태를 다시 해석한다.
//! 비열이 같고 압력 손실이 없다는 덕트 혼합의 표준 단순화 가정을 따른다.

use super::state::{self, AirState, StateOrigin};
use super::{PsychroError, SolverSettings};

/// 혼합 대상 두 상태의 압력 차이 허용 한도 [kPa].
const PRESSURE_MATCH_TOLERANCE_KPA: f64 = 1e-6;

/// 혼합 계산에서 발생 가능한 오류.
#[derive(Debug)]
pub enum MixError {
    /// 질량비가 0~100% 범위를 벗어남
    RatioOutOfRange(f64),
    /// 혼합으로 만들어진 상태를 다시 혼합하려 함
    MixedSource,
    /// 두 상태의 압력이 서로 다름
    PressureMismatch { a_kpa: f64, b_kpa: f64 },
    /// 혼합 결과 상태의 재해석 실패
    Psychro(PsychroError),
}

impl std::fmt::Display for MixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixError::RatioOutOfRange(r) => {
                write!(f, "질량비가 0~100% 범위를 벗어났습니다: {r}")
            }
            MixError::MixedSource => write!(f, "혼합 상태는 다시 혼합할 수 없습니다."),
            MixError::PressureMismatch { a_kpa, b_kpa } => {
                write!(f, "두 상태의 압력이 다릅니다: {a_kpa} kPa / {b_kpa} kPa")
            }
            MixError::Psychro(e) => write!(f, "혼합 상태 재해석 실패: {e}"),
        }
    }
}

impl std::error::Error for MixError {}

impl From<PsychroError> for MixError {
    fn from(value: PsychroError) -> Self {
        MixError::Psychro(value)
    }
}

/// 두 기본 상태를 질량비 ratio_a(%) : (100 - ratio_a)(%)로 단열 혼합한 상태를 계산한다.
/// 압력이 다른 두 상태의 혼합은 호출 측 오류이며 평균을 내지 않는다.
pub fn mix(
    a: &AirState,
    b: &AirState,
    ratio_a_percent: f64,
    solver: &SolverSettings,
) -> Result<AirState, MixError> {
    if !(0.0..=100.0).contains(&ratio_a_percent) {
        return Err(MixError::RatioOutOfRange(ratio_a_percent));
    }
    if a.origin == StateOrigin::Mixed || b.origin == StateOrigin::Mixed {
        return Err(MixError::MixedSource);
    }
    if (a.pressure_kpa - b.pressure_kpa).abs() > PRESSURE_MATCH_TOLERANCE_KPA {
        return Err(MixError::PressureMismatch {
            a_kpa: a.pressure_kpa,
            b_kpa: b.pressure_kpa,
        });
    }
    let fraction_a = ratio_a_percent / 100.0;
    let fraction_b = 1.0 - fraction_a;
    // 건구온도·습도비 모두 건공기 1kg당 값이므로 질량비로 선형 평균한다.
    let dry_bulb_c = a.dry_bulb_c * fraction_a + b.dry_bulb_c * fraction_b;
    let humidity_ratio = a.humidity_ratio * fraction_a + b.humidity_ratio * fraction_b;
    state::complete_from_ratio(
        dry_bulb_c,
        a.pressure_kpa,
        humidity_ratio,
        solver,
        StateOrigin::Mixed,
    )
    .map_err(MixError::Psychro)
}
