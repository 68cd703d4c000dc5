use crate::atmosphere::AtmosphereError;
use crate::config::{self, Config};
use crate::psychro::{MixError, PsychroError};
use crate::session::{PointStore, SessionError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 습공기 계산 오류
    Psychro(PsychroError),
    /// 혼합 계산 오류
    Mix(MixError),
    /// 세션 저장소 오류
    Session(SessionError),
    /// 고도-대기압 변환 오류
    Atmosphere(AtmosphereError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Psychro(e) => write!(f, "습공기 계산 오류: {e}"),
            AppError::Mix(e) => write!(f, "혼합 계산 오류: {e}"),
            AppError::Session(e) => write!(f, "세션 오류: {e}"),
            AppError::Atmosphere(e) => write!(f, "고도 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<PsychroError> for AppError {
    fn from(value: PsychroError) -> Self {
        AppError::Psychro(value)
    }
}

impl From<MixError> for AppError {
    fn from(value: MixError) -> Self {
        AppError::Mix(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        AppError::Session(value)
    }
}

impl From<AtmosphereError> for AppError {
    fn from(value: AtmosphereError) -> Self {
        AppError::Atmosphere(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 해석된 상태는 세션 저장소에 쌓이고 프로그램 종료와 함께 사라진다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut store = PointStore::new();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::ResolveState => ui_cli::handle_resolve(config, &mut store)?,
            MenuChoice::MixStates => ui_cli::handle_mix(config, &mut store)?,
            MenuChoice::ElevationPressure => ui_cli::handle_elevation()?,
            MenuChoice::ListPoints => ui_cli::handle_list(&store),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
