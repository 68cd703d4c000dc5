use clap::{Parser, Subcommand};

use psychro_engineering_toolbox::psychro::mixing;
use psychro_engineering_toolbox::psychro::state::{self, HumidityInput};
use psychro_engineering_toolbox::{app, atmosphere, config, ui_cli};

/// 습공기(psychrometrics) 상태 계산 툴박스.
/// 부명령 없이 실행하면 대화형 메뉴를 연다.
#[derive(Debug, Parser)]
#[command(name = "psychro_engineering_toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 건구온도와 습도 관측값 하나로 전체 상태를 계산한다
    Resolve {
        /// 건구온도 [°C]
        #[arg(long)]
        dry_bulb: f64,
        /// 대기압 [kPa]. 생략하면 설정의 기본값을 사용한다
        #[arg(long)]
        pressure: Option<f64>,
        /// 고도 [m]. 압력 대신 지정하면 ICAO 표준 대기로 환산한다
        #[arg(long, conflicts_with = "pressure")]
        elevation: Option<f64>,
        /// 상대습도 [%]
        #[arg(long)]
        rel_hum: Option<f64>,
        /// 습구온도 [°C]
        #[arg(long)]
        wet_bulb: Option<f64>,
        /// 노점온도 [°C]
        #[arg(long)]
        dew_point: Option<f64>,
    },
    /// 두 상태를 질량비로 단열 혼합한 상태를 계산한다
    Mix {
        /// 첫 번째 흐름의 건구온도 [°C]
        #[arg(long)]
        dry_bulb_a: f64,
        /// 첫 번째 흐름의 상대습도 [%]
        #[arg(long)]
        rel_hum_a: Option<f64>,
        /// 첫 번째 흐름의 습구온도 [°C]
        #[arg(long)]
        wet_bulb_a: Option<f64>,
        /// 첫 번째 흐름의 노점온도 [°C]
        #[arg(long)]
        dew_point_a: Option<f64>,
        /// 두 번째 흐름의 건구온도 [°C]
        #[arg(long)]
        dry_bulb_b: f64,
        /// 두 번째 흐름의 상대습도 [%]
        #[arg(long)]
        rel_hum_b: Option<f64>,
        /// 두 번째 흐름의 습구온도 [°C]
        #[arg(long)]
        wet_bulb_b: Option<f64>,
        /// 두 번째 흐름의 노점온도 [°C]
        #[arg(long)]
        dew_point_b: Option<f64>,
        /// 첫 번째 흐름의 질량비 [%]
        #[arg(long)]
        ratio: f64,
        /// 공통 대기압 [kPa]. 생략하면 설정의 기본값을 사용한다
        #[arg(long)]
        pressure: Option<f64>,
        /// 고도 [m]. 압력 대신 지정하면 ICAO 표준 대기로 환산한다
        #[arg(long, conflicts_with = "pressure")]
        elevation: Option<f64>,
    },
    /// 고도를 대기압으로 환산한다
    Pressure {
        /// 고도 [m]
        #[arg(long)]
        elevation: f64,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 부명령 또는 대화형 메뉴를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command {
        None => app::run(&mut cfg)?,
        Some(Command::Resolve {
            dry_bulb,
            pressure,
            elevation,
            rel_hum,
            wet_bulb,
            dew_point,
        }) => {
            let pressure_kpa = resolve_pressure(pressure, elevation, &cfg)?;
            let input = humidity_input(rel_hum, wet_bulb, dew_point)?;
            let resolved = state::resolve(dry_bulb, pressure_kpa, input, &cfg.solver)?;
            ui_cli::print_state(&resolved);
        }
        Some(Command::Mix {
            dry_bulb_a,
            rel_hum_a,
            wet_bulb_a,
            dew_point_a,
            dry_bulb_b,
            rel_hum_b,
            wet_bulb_b,
            dew_point_b,
            ratio,
            pressure,
            elevation,
        }) => {
            let pressure_kpa = resolve_pressure(pressure, elevation, &cfg)?;
            let input_a = humidity_input(rel_hum_a, wet_bulb_a, dew_point_a)?;
            let input_b = humidity_input(rel_hum_b, wet_bulb_b, dew_point_b)?;
            let state_a = state::resolve(dry_bulb_a, pressure_kpa, input_a, &cfg.solver)?;
            let state_b = state::resolve(dry_bulb_b, pressure_kpa, input_b, &cfg.solver)?;
            let mixed = mixing::mix(&state_a, &state_b, ratio, &cfg.solver)?;
            ui_cli::print_state(&mixed);
        }
        Some(Command::Pressure { elevation }) => {
            let pressure_kpa = atmosphere::pressure_kpa_from_elevation_m(elevation)?;
            println!("{pressure_kpa:.3} kPa");
        }
    }
    Ok(())
}

fn resolve_pressure(
    pressure: Option<f64>,
    elevation: Option<f64>,
    cfg: &config::Config,
) -> Result<f64, Box<dyn std::error::Error>> {
    match (pressure, elevation) {
        (Some(p), _) => Ok(p),
        (None, Some(elev)) => Ok(atmosphere::pressure_kpa_from_elevation_m(elev)?),
        (None, None) => Ok(cfg.default_pressure_kpa),
    }
}

/// 세 가지 습도 관측값 중 정확히 하나만 지정되었는지 확인한다.
fn humidity_input(
    rel_hum_pct: Option<f64>,
    wet_bulb_c: Option<f64>,
    dew_point_c: Option<f64>,
) -> Result<HumidityInput, Box<dyn std::error::Error>> {
    match (rel_hum_pct, wet_bulb_c, dew_point_c) {
        (Some(rh), None, None) => Ok(HumidityInput::RelativeHumidity(rh / 100.0)),
        (None, Some(t), None) => Ok(HumidityInput::WetBulbC(t)),
        (None, None, Some(t)) => Ok(HumidityInput::DewPointC(t)),
        _ => Err("습도 관측값(rel-hum/wet-bulb/dew-point)은 정확히 하나만 지정해야 합니다.".into()),
    }
}
