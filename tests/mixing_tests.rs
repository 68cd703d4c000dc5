//! 단열 혼합 테스트. 항등/경계 성질과 기준 시나리오, 오류 분기를 확인한다.
use psychro_engineering_toolbox::psychro::{
    mix, resolve, HumidityInput, MixError, SolverSettings, StateOrigin,
};

const P_ATM_KPA: f64 = 101.325;

#[test]
fn fifty_fifty_mix_averages_dry_bulb_and_ratio() {
    // 30°C/40% + 10°C/90%를 50:50으로 혼합하면 건구 20°C,
    // 습도비는 두 습도비의 산술 평균이 된다.
    let solver = SolverSettings::default();
    let a = resolve(30.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.4), &solver).expect("a");
    let b = resolve(10.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.9), &solver).expect("b");
    let m = mix(&a, &b, 50.0, &solver).expect("mix");

    assert!((m.dry_bulb_c - 20.0).abs() < 1e-9, "db={}", m.dry_bulb_c);
    let expected_w = 0.5 * (a.humidity_ratio + b.humidity_ratio);
    assert!(
        (m.humidity_ratio - expected_w).abs() < 1e-12,
        "w={} expected={}",
        m.humidity_ratio,
        expected_w
    );
    assert_eq!(m.origin, StateOrigin::Mixed);
    assert!(m.dew_point_c <= m.wet_bulb_c && m.wet_bulb_c <= m.dry_bulb_c + 1e-6);
}

#[test]
fn mixing_a_state_with_itself_is_identity() {
    let solver = SolverSettings::default();
    let a = resolve(25.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.5), &solver).expect("a");
    let m = mix(&a, &a, 50.0, &solver).expect("mix");
    assert!((m.dry_bulb_c - a.dry_bulb_c).abs() < 1e-9);
    assert!((m.humidity_ratio - a.humidity_ratio).abs() < 1e-12);
    assert!((m.wet_bulb_c - a.wet_bulb_c).abs() < 1e-6);
    assert!((m.dew_point_c - a.dew_point_c).abs() < 1e-6);
    assert!((m.enthalpy_kj_per_kg - a.enthalpy_kj_per_kg).abs() < 1e-9);
}

#[test]
fn boundary_ratios_return_the_sources() {
    let solver = SolverSettings::default();
    let a = resolve(30.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.4), &solver).expect("a");
    let b = resolve(10.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.9), &solver).expect("b");

    let all_a = mix(&a, &b, 100.0, &solver).expect("ratio 100");
    assert!((all_a.dry_bulb_c - a.dry_bulb_c).abs() < 1e-9);
    assert!((all_a.humidity_ratio - a.humidity_ratio).abs() < 1e-12);

    let all_b = mix(&a, &b, 0.0, &solver).expect("ratio 0");
    assert!((all_b.dry_bulb_c - b.dry_bulb_c).abs() < 1e-9);
    assert!((all_b.humidity_ratio - b.humidity_ratio).abs() < 1e-12);
}

#[test]
fn rejects_ratio_outside_percent_range() {
    let solver = SolverSettings::default();
    let a = resolve(25.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.5), &solver).expect("a");
    assert!(matches!(
        mix(&a, &a, 120.0, &solver),
        Err(MixError::RatioOutOfRange(_))
    ));
    assert!(matches!(
        mix(&a, &a, -1.0, &solver),
        Err(MixError::RatioOutOfRange(_))
    ));
}

#[test]
fn rejects_mixing_a_mixed_state() {
    // 혼합 그래프는 기본 상태를 뿌리로 한 깊이 1의 별 모양만 허용한다.
    let solver = SolverSettings::default();
    let a = resolve(30.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.4), &solver).expect("a");
    let b = resolve(10.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.9), &solver).expect("b");
    let m = mix(&a, &b, 50.0, &solver).expect("mix");
    assert!(matches!(
        mix(&m, &a, 50.0, &solver),
        Err(MixError::MixedSource)
    ));
}

#[test]
fn rejects_pressure_mismatch() {
    let solver = SolverSettings::default();
    let a = resolve(30.0, P_ATM_KPA, HumidityInput::RelativeHumidity(0.4), &solver).expect("a");
    let b = resolve(10.0, 90.0, HumidityInput::RelativeHumidity(0.9), &solver).expect("b");
    assert!(matches!(
        mix(&a, &b, 50.0, &solver),
        Err(MixError::PressureMismatch { .. })
    ));
}
