use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("데이터 파일을 찾을 수 없습니다: {0}")]
    DataFileNotFound(String),

    #[error("데이터 로드 오류: {0}")]
    DataLoad(String),

    #[error("지오코딩 오류: {0}")]
    Geocode(String),

    #[error("선택 오류: {0}")]
    Selection(String),

    #[error("내보내기 오류: {0}")]
    Export(String),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] mbti_atlas_common::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
