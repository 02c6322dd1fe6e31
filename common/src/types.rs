//! MBTI 유형과 성향 축 정의
//!
//! - MbtiType: 16가지 MBTI 유형
//! - Axis: 4개의 성향 축 (E/I, N/S, T/F, P/J)
//! - Pole: 축의 한쪽 극 (E, I, N, S, T, F, P, J)
//!
//! 축별 극 구성은 `POLE_MEMBERS` 상수 테이블 하나에만 정의한다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MBTI 16유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Enfj,
    Enfp,
    Entj,
    Entp,
    Esfj,
    Esfp,
    Estj,
    Estp,
    Infj,
    Infp,
    Intj,
    Intp,
    Isfj,
    Isfp,
    Istj,
    Istp,
}

impl MbtiType {
    /// 알파벳 순서의 전체 유형
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Esfj,
        MbtiType::Esfp,
        MbtiType::Estj,
        MbtiType::Estp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Isfj,
        MbtiType::Isfp,
        MbtiType::Istj,
        MbtiType::Istp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Esfp => "ESFP",
            MbtiType::Estj => "ESTJ",
            MbtiType::Estp => "ESTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Isfp => "ISFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Istp => "ISTP",
        }
    }

    /// `ALL` 안에서의 위치 (행 데이터 배열 인덱스로 사용)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 해당 축에서 이 유형이 속한 극
    pub fn pole_on(&self, axis: Axis) -> Pole {
        let (a, b) = axis.poles();
        if a.members().contains(self) {
            a
        } else {
            b
        }
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        MbtiType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == upper)
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// 성향 축의 한쪽 극
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    N,
    S,
    T,
    F,
    P,
    J,
}

use MbtiType::*;

/// 극별 소속 유형 (축마다 16유형이 8+8로 정확히 나뉜다)
pub const POLE_MEMBERS: [(Pole, [MbtiType; 8]); 8] = [
    (Pole::E, [Enfj, Enfp, Entj, Entp, Esfj, Esfp, Estj, Estp]),
    (Pole::I, [Infj, Infp, Intj, Intp, Isfj, Isfp, Istj, Istp]),
    (Pole::N, [Enfj, Enfp, Entj, Entp, Infj, Infp, Intj, Intp]),
    (Pole::S, [Esfj, Esfp, Estj, Estp, Isfj, Isfp, Istj, Istp]),
    (Pole::T, [Entj, Entp, Estj, Estp, Intj, Intp, Istj, Istp]),
    (Pole::F, [Enfj, Enfp, Esfj, Esfp, Infj, Infp, Isfj, Isfp]),
    (Pole::P, [Enfp, Entp, Esfp, Estp, Infp, Intp, Isfp, Istp]),
    (Pole::J, [Enfj, Entj, Esfj, Estj, Infj, Intj, Isfj, Istj]),
];

impl Pole {
    pub fn letter(&self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::N => 'N',
            Pole::S => 'S',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::P => 'P',
            Pole::J => 'J',
        }
    }

    pub fn members(&self) -> &'static [MbtiType; 8] {
        POLE_MEMBERS
            .iter()
            .find(|(pole, _)| pole == self)
            .map(|(_, members)| members)
            .unwrap_or(&POLE_MEMBERS[0].1)
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// 성향 축
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    EI,
    NS,
    TF,
    PJ,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::NS, Axis::TF, Axis::PJ];

    /// (A극, B극)
    pub fn poles(&self) -> (Pole, Pole) {
        match self {
            Axis::EI => (Pole::E, Pole::I),
            Axis::NS => (Pole::N, Pole::S),
            Axis::TF => (Pole::T, Pole::F),
            Axis::PJ => (Pole::P, Pole::J),
        }
    }

    /// 화면 표시용 라벨 ("E vs I" 등)
    pub fn label(&self) -> String {
        let (a, b) = self.poles();
        format!("{} vs {}", a, b)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Axis {
    type Err = Error;

    /// "EI", "E vs I", "e/i", "ie" 모두 허용
    fn from_str(s: &str) -> Result<Self> {
        let letters: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_uppercase()
            .replace("VS", "");

        Axis::ALL
            .iter()
            .copied()
            .find(|axis| {
                let (a, b) = axis.poles();
                letters == format!("{}{}", a, b) || letters == format!("{}{}", b, a)
            })
            .ok_or_else(|| Error::UnknownAxis(s.to_string()))
    }
}
