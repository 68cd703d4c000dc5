//! 세션 저장소 테스트. 자동 이름 부여, 참조 검증, 혼합 관계 기록을 확인한다.
use psychro_engineering_toolbox::psychro::{
    resolve, HumidityInput, MixError, SolverSettings,
};
use psychro_engineering_toolbox::session::{PointStore, SessionError};

const P_ATM_KPA: f64 = 101.325;

fn sample_state(dry_bulb_c: f64, rel_hum: f64) -> psychro_engineering_toolbox::psychro::AirState {
    resolve(
        dry_bulb_c,
        P_ATM_KPA,
        HumidityInput::RelativeHumidity(rel_hum),
        &SolverSettings::default(),
    )
    .expect("resolve")
}

#[test]
fn names_are_monotonic() {
    let mut store = PointStore::new();
    let first = store.add(sample_state(30.0, 0.4)).name.clone();
    let second = store.add(sample_state(10.0, 0.9)).name.clone();
    assert_eq!(first, "Point 1");
    assert_eq!(second, "Point 2");

    let solver = SolverSettings::default();
    let mixed = store.mix("Point 1", "Point 2", 50.0, &solver).expect("mix");
    assert_eq!(mixed.name, "Point 3");
    assert_eq!(store.points().len(), 3);
    assert_eq!(store.mixes().len(), 1);
    let link = &store.mixes()[0];
    assert_eq!(link.result, "Point 3");
    assert_eq!(link.source_a, "Point 1");
    assert_eq!(link.source_b, "Point 2");
}

#[test]
fn rejects_unknown_and_identical_references() {
    let mut store = PointStore::new();
    store.add(sample_state(25.0, 0.5));
    let solver = SolverSettings::default();
    assert!(matches!(
        store.mix("Point 1", "Point 9", 50.0, &solver),
        Err(SessionError::UnknownPoint(_))
    ));
    assert!(matches!(
        store.mix("Point 1", "Point 1", 50.0, &solver),
        Err(SessionError::IdenticalSources(_))
    ));
}

#[test]
fn mixed_points_cannot_be_mixed_again() {
    let mut store = PointStore::new();
    store.add(sample_state(30.0, 0.4));
    store.add(sample_state(10.0, 0.9));
    let solver = SolverSettings::default();
    store.mix("Point 1", "Point 2", 50.0, &solver).expect("mix");
    assert!(matches!(
        store.mix("Point 3", "Point 1", 50.0, &solver),
        Err(SessionError::Mix(MixError::MixedSource))
    ));
}
