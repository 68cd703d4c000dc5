//! 습공기(psychrometrics) 계산 모듈 모음.
//! 포화 수증기압 상관식, 습도 대수 관계식, 습구/노점 반복 해법,
//! 상태 해석기, 단열 혼합 계산으로 구성한다.

pub mod dew_point;
pub mod humidity;
pub mod mixing;
pub mod saturation;
pub mod state;
pub mod wet_bulb;

pub use mixing::{mix, MixError};
pub use state::{resolve, AirState, HumidityInput, StateOrigin};

use serde::{Deserialize, Serialize};

/// 상관식 유효 온도 하한(°C).
pub const MIN_TEMP_C: f64 = -100.0;
/// 상관식 유효 온도 상한(°C).
pub const MAX_TEMP_C: f64 = 200.0;

/// 습도비 하한 [kg수증기/kg건공기]. 완전 건조 공기(w=0)도 유한한
/// 습구/노점 온도를 갖도록 반복 해법 내부에서만 적용한다.
pub const MIN_HUMIDITY_RATIO: f64 = 1e-7;

/// 반복 해법(이분법)의 허용 오차와 반복 횟수 설정.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverSettings {
    /// 습구온도 해법의 습도비 잔차 허용 오차 [kg/kg]
    pub humidity_ratio_tolerance: f64,
    /// 이분법 탐색 구간 허용 오차 [°C]
    pub temperature_tolerance_c: f64,
    /// 최대 반복 횟수
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            humidity_ratio_tolerance: 1e-6,
            temperature_tolerance_c: 1e-4,
            max_iterations: 100,
        }
    }
}

/// 습공기 계산에서 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum PsychroError {
    /// 물리적으로 불가능하거나 유효 범위를 벗어난 입력
    InvalidInput(&'static str),
    /// 반복 해법이 허용 횟수 내에 수렴하지 못함
    ConvergenceFailure(&'static str),
    /// 계산 결과가 물리 불변식을 위반함
    InvalidState { field: &'static str, value: f64 },
}

impl std::fmt::Display for PsychroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PsychroError::InvalidInput(msg) => write!(f, "잘못된 입력: {msg}"),
            PsychroError::ConvergenceFailure(msg) => write!(f, "수렴 실패: {msg}"),
            PsychroError::InvalidState { field, value } => {
                write!(f, "물리 불변식 위반: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for PsychroError {}
