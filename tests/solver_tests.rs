//! 습구/노점 반복 해법 테스트. 정방향 계산값을 역방향으로 되찾는지와
//! 수렴 실패가 명시적 오류로 보고되는지 확인한다.
use psychro_engineering_toolbox::psychro::{
    dew_point::{dew_point_from_humidity_ratio, humidity_ratio_from_dew_point},
    wet_bulb::{humidity_ratio_from_wet_bulb, wet_bulb_from_humidity_ratio},
    PsychroError, SolverSettings,
};

const P_ATM: f64 = 101_325.0;

#[test]
fn wet_bulb_round_trip() {
    let solver = SolverSettings::default();
    let w = humidity_ratio_from_wet_bulb(25.0, 18.0, P_ATM).expect("w from wb");
    let wb = wet_bulb_from_humidity_ratio(25.0, w, P_ATM, &solver).expect("wb from w");
    assert!((wb - 18.0).abs() < 0.01, "wb={wb}");

    let w2 = humidity_ratio_from_wet_bulb(30.0, 22.0, P_ATM).expect("w from wb");
    let wb2 = wet_bulb_from_humidity_ratio(30.0, w2, P_ATM, &solver).expect("wb from w");
    assert!((wb2 - 22.0).abs() < 0.01, "wb2={wb2}");
}

#[test]
fn wet_bulb_round_trip_below_freezing() {
    // 빙점 이하 계수 분기 확인
    let solver = SolverSettings::default();
    let w = humidity_ratio_from_wet_bulb(-5.0, -7.0, P_ATM).expect("w from wb");
    assert!(w > 0.0);
    let wb = wet_bulb_from_humidity_ratio(-5.0, w, P_ATM, &solver).expect("wb from w");
    assert!((wb + 7.0).abs() < 0.05, "wb={wb}");
}

#[test]
fn dew_point_round_trip() {
    let solver = SolverSettings::default();
    let w = humidity_ratio_from_dew_point(10.0, P_ATM).expect("w from dp");
    let dp = dew_point_from_humidity_ratio(25.0, w, P_ATM, &solver).expect("dp from w");
    assert!((dp - 10.0).abs() < 0.01, "dp={dp}");

    let w2 = humidity_ratio_from_dew_point(-15.0, P_ATM).expect("w from dp");
    let dp2 = dew_point_from_humidity_ratio(5.0, w2, P_ATM, &solver).expect("dp from w");
    assert!((dp2 + 15.0).abs() < 0.01, "dp2={dp2}");
}

#[test]
fn rejects_wet_bulb_above_dry_bulb() {
    assert!(matches!(
        humidity_ratio_from_wet_bulb(20.0, 25.0, P_ATM),
        Err(PsychroError::InvalidInput(_))
    ));
}

#[test]
fn iteration_cap_is_an_error_not_a_guess() {
    let strict = SolverSettings {
        humidity_ratio_tolerance: 1e-12,
        temperature_tolerance_c: 1e-12,
        max_iterations: 3,
    };
    assert!(matches!(
        dew_point_from_humidity_ratio(25.0, 0.009, P_ATM, &strict),
        Err(PsychroError::ConvergenceFailure(_))
    ));
    assert!(matches!(
        wet_bulb_from_humidity_ratio(25.0, 0.009, P_ATM, &strict),
        Err(PsychroError::ConvergenceFailure(_))
    ));
}

#[test]
fn tightened_tolerance_still_converges() {
    let tight = SolverSettings {
        humidity_ratio_tolerance: 1e-9,
        temperature_tolerance_c: 1e-7,
        max_iterations: 200,
    };
    let wb = wet_bulb_from_humidity_ratio(25.0, 0.009882, P_ATM, &tight).expect("tight wb");
    assert!((wb - 18.0).abs() < 0.3, "wb={wb}");
}

#[test]
fn bone_dry_air_keeps_finite_solutions() {
    // w = 0 도 유한한 습구/노점으로 표현되어야 한다.
    let solver = SolverSettings::default();
    let wb = wet_bulb_from_humidity_ratio(25.0, 0.0, P_ATM, &solver).expect("dry wb");
    let dp = dew_point_from_humidity_ratio(25.0, 0.0, P_ATM, &solver).expect("dry dp");
    assert!(wb.is_finite() && dp.is_finite());
    assert!(wb <= 25.0 && wb >= -100.0, "wb={wb}");
    assert!(dp <= wb, "dp={dp} wb={wb}");
}
