//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("데이터 로드 실패: {0}")]
    DataLoad(String),

    #[error("필수 컬럼이 없습니다: {0}")]
    MissingColumn(String),

    #[error("{country}의 {column} 값이 올바르지 않습니다: {value}")]
    InvalidValue {
        country: String,
        column: String,
        value: String,
    },

    #[error("찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("알 수 없는 MBTI 유형: {0}")]
    UnknownType(String),

    #[error("알 수 없는 성향 축: {0}. E vs I, N vs S, T vs F, P vs J 중에서 선택하세요")]
    UnknownAxis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
