//! 이름 붙은 상태 목록과 혼합 관계를 관리하는 세션 저장소.
//! 계산 코어는 이 저장소를 소유하지 않으며, 호출 측(CLI)이 수명을 관리한다.

use crate::psychro::mixing::{self, MixError};
use crate::psychro::state::AirState;
use crate::psychro::SolverSettings;

/// 이름이 부여된 습공기 상태.
#[derive(Debug, Clone)]
pub struct NamedPoint {
    pub name: String,
    pub state: AirState,
}

/// 혼합 관계 기록. 상태의 소유권은 상태 목록에 있고 여기서는 이름으로만 참조한다.
#[derive(Debug, Clone)]
pub struct MixLink {
    pub result: String,
    pub source_a: String,
    pub source_b: String,
    pub ratio_a_percent: f64,
}

/// 세션 저장소 오류.
#[derive(Debug)]
pub enum SessionError {
    /// 존재하지 않는 상태 이름을 참조함
    UnknownPoint(String),
    /// 같은 상태를 혼합의 양쪽 입력으로 지정함
    IdenticalSources(String),
    /// 혼합 계산 실패
    Mix(MixError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownPoint(name) => {
                write!(f, "존재하지 않는 상태입니다: {name}")
            }
            SessionError::IdenticalSources(name) => {
                write!(f, "같은 상태를 두 번 지정했습니다: {name}")
            }
            SessionError::Mix(e) => write!(f, "혼합 실패: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<MixError> for SessionError {
    fn from(value: MixError) -> Self {
        SessionError::Mix(value)
    }
}

/// 순서가 보존되는 상태 목록 + 혼합 관계 + 단조 증가 이름 카운터.
#[derive(Debug)]
pub struct PointStore {
    points: Vec<NamedPoint>,
    mixes: Vec<MixLink>,
    next_number: u32,
}

impl PointStore {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            mixes: Vec::new(),
            next_number: 1,
        }
    }

    /// 상태를 추가하고 자동 부여된 이름의 항목을 돌려준다.
    /// 이름 번호는 삭제와 무관하게 단조 증가한다.
    pub fn add(&mut self, state: AirState) -> &NamedPoint {
        let name = self.next_name();
        self.points.push(NamedPoint { name, state });
        self.points.last().expect("방금 추가한 상태")
    }

    /// 이름으로 상태를 찾는다.
    pub fn get(&self, name: &str) -> Option<&NamedPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    /// 추가된 순서의 상태 목록.
    pub fn points(&self) -> &[NamedPoint] {
        &self.points
    }

    /// 기록된 혼합 관계 목록.
    pub fn mixes(&self) -> &[MixLink] {
        &self.mixes
    }

    /// 저장된 두 기본 상태를 혼합해 결과를 저장하고 혼합 관계를 기록한다.
    pub fn mix(
        &mut self,
        name_a: &str,
        name_b: &str,
        ratio_a_percent: f64,
        solver: &SolverSettings,
    ) -> Result<&NamedPoint, SessionError> {
        if name_a == name_b {
            return Err(SessionError::IdenticalSources(name_a.to_string()));
        }
        let a = self
            .get(name_a)
            .ok_or_else(|| SessionError::UnknownPoint(name_a.to_string()))?;
        let b = self
            .get(name_b)
            .ok_or_else(|| SessionError::UnknownPoint(name_b.to_string()))?;
        let mixed = mixing::mix(&a.state, &b.state, ratio_a_percent, solver)?;
        let name = self.next_name();
        self.mixes.push(MixLink {
            result: name.clone(),
            source_a: name_a.to_string(),
            source_b: name_b.to_string(),
            ratio_a_percent,
        });
        self.points.push(NamedPoint { name, state: mixed });
        Ok(self.points.last().expect("방금 추가한 상태"))
    }

    fn next_name(&mut self) -> String {
        let name = format!("Point {}", self.next_number);
        self.next_number += 1;
        name
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
