/// 섭씨 값을 켈빈으로 변환한다.
pub fn celsius_to_kelvin(value_c: f64) -> f64 {
    value_c + 273.15
}

/// 켈빈 값을 섭씨로 변환한다.
pub fn kelvin_to_celsius(value_k: f64) -> f64 {
    value_k - 273.15
}
