//! CSV 데이터 소스
//!
//! 프로세스 안에서 한 번만 읽고, 이후 호출은 같은 테이블 핸들을 돌려준다.
//! 전역 상태는 두지 않는다. 핸들은 호출자가 들고 다닌다.

use crate::config::Config;
use crate::error::{AtlasError, Result};
use mbti_atlas_common::MbtiTable;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct DataSource {
    path: PathBuf,
    row_sum_tolerance: f64,
    table: OnceCell<Arc<MbtiTable>>,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>, row_sum_tolerance: f64) -> Self {
        Self {
            path: path.into(),
            row_sum_tolerance,
            table: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_path.clone(), config.row_sum_tolerance)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// 테이블 로드 (첫 호출에서만 파일을 읽는다)
    pub fn load(&self) -> Result<Arc<MbtiTable>> {
        self.table.get_or_try_init(|| self.read()).cloned()
    }

    fn read(&self) -> Result<Arc<MbtiTable>> {
        if !self.path.exists() {
            return Err(AtlasError::DataFileNotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path)?;
        let table = MbtiTable::from_csv_reader(BufReader::new(file))
            .map_err(|e| AtlasError::DataLoad(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            rows = table.len(),
            "MBTI 테이블 로드 완료"
        );

        // 합계 1.0 불변식은 경고만 한다
        for warning in table.row_sum_warnings(self.row_sum_tolerance) {
            tracing::warn!(
                country = %warning.country,
                total = warning.total,
                "MBTI 비율 합계가 1.0과 다릅니다"
            );
        }

        Ok(Arc::new(table))
    }
}
