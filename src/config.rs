use crate::error::{AtlasError, Result};
use mbti_atlas_common::population::KOREA_POPULATION;
use mbti_atlas_common::ContinentMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "MBTI_ATLAS_DATA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub anchor_country: String,
    pub total_population: u64,
    pub top_n: usize,
    pub geocoder_url: String,
    pub user_agent: String,
    pub geocode_timeout_seconds: u64,
    pub row_sum_tolerance: f64,
    /// 대륙 매핑 JSON (없으면 내장 매핑)
    pub continent_map: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("countriesMBTI.csv"),
            anchor_country: "South Korea".into(),
            total_population: KOREA_POPULATION,
            top_n: 10,
            geocoder_url: "https://nominatim.openstreetmap.org/search".into(),
            user_agent: "mbti_map".into(),
            geocode_timeout_seconds: 10,
            row_sum_tolerance: 0.01,
            continent_map: None,
        }
    }
}

impl Config {
    /// 설정 파일을 읽고 환경변수를 반영한다
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self::default()
        };

        if let Ok(path) = std::env::var(DATA_ENV_VAR) {
            if !path.trim().is_empty() {
                config.data_path = PathBuf::from(path);
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AtlasError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("mbti-atlas"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = path;
        self.save()
    }

    /// 설정된 대륙 매핑 (없으면 내장 매핑)
    pub fn continent_map(&self) -> Result<ContinentMap> {
        match &self.continent_map {
            Some(path) => Ok(ContinentMap::from_file(path)?),
            None => Ok(ContinentMap::builtin()),
        }
    }

    pub fn geocode_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.geocode_timeout_seconds)
    }
}
