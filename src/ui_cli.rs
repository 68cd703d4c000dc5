use std::io::{self, Write};

use crate::app::AppError;
use crate::atmosphere;
use crate::config::Config;
use crate::psychro::state::{self, AirState, HumidityInput};
use crate::session::PointStore;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ResolveState,
    MixStates,
    ElevationPressure,
    ListPoints,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Psychro Engineering Toolbox ===");
    println!("1) 습공기 상태 계산");
    println!("2) 두 상태 단열 혼합");
    println!("3) 고도 → 대기압 변환");
    println!("4) 저장된 상태 목록");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ResolveState),
            "2" => return Ok(MenuChoice::MixStates),
            "3" => return Ok(MenuChoice::ElevationPressure),
            "4" => return Ok(MenuChoice::ListPoints),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 습공기 상태 계산 메뉴를 처리한다. 해석 결과는 세션 저장소에 추가된다.
pub fn handle_resolve(cfg: &Config, store: &mut PointStore) -> Result<(), AppError> {
    println!("\n-- 습공기 상태 계산 --");
    let pressure_kpa = read_pressure(cfg)?;
    let dry_bulb_c = read_f64("건구온도 [°C]: ")?;
    println!("습도 입력 방식: 1) 상대습도(%)  2) 습구온도(°C)  3) 노점온도(°C)");
    let input = loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => {
                let rh_pct = read_f64("상대습도 [%]: ")?;
                break HumidityInput::RelativeHumidity(rh_pct / 100.0);
            }
            "2" => break HumidityInput::WetBulbC(read_f64("습구온도 [°C]: ")?),
            "3" => break HumidityInput::DewPointC(read_f64("노점온도 [°C]: ")?),
            _ => println!("잘못된 선택입니다."),
        }
    };
    let resolved = state::resolve(dry_bulb_c, pressure_kpa, input, &cfg.solver)?;
    let point = store.add(resolved);
    println!("저장됨: {}", point.name);
    print_state(&point.state);
    Ok(())
}

/// 두 상태 단열 혼합 메뉴를 처리한다. 기본 상태끼리만 혼합할 수 있다.
pub fn handle_mix(cfg: &Config, store: &mut PointStore) -> Result<(), AppError> {
    println!("\n-- 두 상태 단열 혼합 --");
    if store.points().len() < 2 {
        println!("저장된 상태가 2개 이상 필요합니다. 먼저 상태를 계산하세요.");
        return Ok(());
    }
    handle_list(store);
    let name_a = read_line("첫 번째 상태 이름: ")?;
    let name_b = read_line("두 번째 상태 이름: ")?;
    let ratio = read_f64("첫 번째 상태의 질량비 [%]: ")?;
    let point = store.mix(name_a.trim(), name_b.trim(), ratio, &cfg.solver)?;
    println!("저장됨: {}", point.name);
    print_state(&point.state);
    Ok(())
}

/// 고도 → 대기압 변환 메뉴를 처리한다.
pub fn handle_elevation() -> Result<(), AppError> {
    println!("\n-- 고도 → 대기압 변환 --");
    let elevation_m = read_f64("고도 [m]: ")?;
    let pressure_kpa = atmosphere::pressure_kpa_from_elevation_m(elevation_m)?;
    println!("대기압: {pressure_kpa:.3} kPa (ICAO 표준 대기)");
    Ok(())
}

/// 저장된 상태와 혼합 관계를 표 형태로 출력한다.
pub fn handle_list(store: &PointStore) {
    if store.points().is_empty() {
        println!("저장된 상태가 없습니다.");
        return;
    }
    println!(
        "\n{:<10} {:>9} {:>9} {:>9} {:>10} {:>8} {:>10}",
        "이름", "건구[°C]", "습구[°C]", "노점[°C]", "습도비", "RH[%]", "h[kJ/kg]"
    );
    for point in store.points() {
        let s = &point.state;
        println!(
            "{:<10} {:>9.2} {:>9.2} {:>9.2} {:>10.6} {:>8.1} {:>10.2}",
            point.name,
            s.dry_bulb_c,
            s.wet_bulb_c,
            s.dew_point_c,
            s.humidity_ratio,
            s.rel_hum * 100.0,
            s.enthalpy_kj_per_kg
        );
    }
    for link in store.mixes() {
        println!(
            "{} = {} ({:.0}%) + {} ({:.0}%)",
            link.result,
            link.source_a,
            link.ratio_a_percent,
            link.source_b,
            100.0 - link.ratio_a_percent
        );
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 설정: 기본 대기압 {:.3} kPa, 습도비 허용오차 {:e}, 온도 허용오차 {:e} °C, 최대 반복 {}회",
        cfg.default_pressure_kpa,
        cfg.solver.humidity_ratio_tolerance,
        cfg.solver.temperature_tolerance_c,
        cfg.solver.max_iterations
    );
    println!("1) 기본 대기압 변경  2) 최대 반복 횟수 변경");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            cfg.default_pressure_kpa = read_f64("기본 대기압 [kPa]: ")?;
            println!("저장되었습니다.");
        }
        "2" => {
            cfg.solver.max_iterations = read_f64("최대 반복 횟수: ")? as u32;
            println!("저장되었습니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 해석된 상태를 원본 차트 표 구성대로 출력한다.
pub fn print_state(state: &AirState) {
    println!("\n[차트 물성]");
    println!("  대기압        : {:>11.3} kPa", state.pressure_kpa);
    println!("  건구온도      : {:>11.2} °C", state.dry_bulb_c);
    println!("  습구온도      : {:>11.2} °C", state.wet_bulb_c);
    println!("  노점온도      : {:>11.2} °C", state.dew_point_c);
    println!("  비엔탈피      : {:>11.2} kJ/kg", state.enthalpy_kj_per_kg);
    println!("  상대습도      : {:>11.2} %", state.rel_hum * 100.0);
    println!("  습도비        : {:>11.6} kg/kg", state.humidity_ratio);
    println!(
        "  비체적        : {:>11.4} m³/kg",
        state.specific_volume_m3_per_kg
    );
    println!("\n[기타 물성]");
    println!("  밀도          : {:>11.4} kg/m³", state.density_kg_per_m3);
    println!(
        "  절대습도      : {:>11.6} kg/m³",
        state.humidity_ratio * state.density_kg_per_m3
    );
    println!(
        "  포화도        : {:>11.2} %",
        state.degree_of_saturation * 100.0
    );
    println!("  수증기 분압   : {:>11.3} kPa", state.vapor_pressure_kpa);
    println!(
        "  포화 수증기압 : {:>11.3} kPa",
        state.sat_vapor_pressure_kpa
    );
}

fn read_pressure(cfg: &Config) -> Result<f64, AppError> {
    println!(
        "대기압 입력: 1) 직접 입력(kPa)  2) 고도(m)로 환산  (엔터=기본 {:.3} kPa)",
        cfg.default_pressure_kpa
    );
    loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "" => return Ok(cfg.default_pressure_kpa),
            "1" => return read_f64("대기압 [kPa]: "),
            "2" => {
                let elevation_m = read_f64("고도 [m]: ")?;
                let pressure_kpa = atmosphere::pressure_kpa_from_elevation_m(elevation_m)?;
                println!("환산 대기압: {pressure_kpa:.3} kPa");
                return Ok(pressure_kpa);
            }
            _ => println!("잘못된 선택입니다."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
