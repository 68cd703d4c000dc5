const PA_PER_KPA: f64 = 1000.0;

/// kPa 값을 Pa로 변환한다.
pub fn kpa_to_pa(value_kpa: f64) -> f64 {
    value_kpa * PA_PER_KPA
}

/// Pa 값을 kPa로 변환한다.
pub fn pa_to_kpa(value_pa: f64) -> f64 {
    value_pa / PA_PER_KPA
}
