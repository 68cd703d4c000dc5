//! ICAO 표준 대기 근사에 따른 고도-대기압 변환.

/// 해수면 표준 대기압 [kPa].
pub const STANDARD_PRESSURE_KPA: f64 = 101.325;

/// 고도 입력 유효 범위 [m]. 표준 대기 근사는 대류권에서만 쓴다.
const MIN_ELEVATION_M: f64 = -500.0;
const MAX_ELEVATION_M: f64 = 11_000.0;

/// 고도-대기압 변환 오류.
#[derive(Debug)]
pub enum AtmosphereError {
    /// 고도가 유효 범위를 벗어남
    OutOfRange(&'static str),
}

impl std::fmt::Display for AtmosphereError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtmosphereError::OutOfRange(msg) => write!(f, "범위를 벗어남: {msg}"),
        }
    }
}

impl std::error::Error for AtmosphereError {}

/// 고도(m)로부터 대기압(kPa)을 계산한다.
pub fn pressure_kpa_from_elevation_m(elevation_m: f64) -> Result<f64, AtmosphereError> {
    if !(MIN_ELEVATION_M..=MAX_ELEVATION_M).contains(&elevation_m) {
        return Err(AtmosphereError::OutOfRange(
            "고도는 -500~11000 m 범위에서만 변환할 수 있습니다.",
        ));
    }
    Ok(STANDARD_PRESSURE_KPA * (1.0 - 2.25577e-5 * elevation_m).powf(5.2559))
}
