//! 지오코딩 결과 캐시
//!
//! 국가명을 키로 좌표(또는 "찾을 수 없음")를 저장해
//! 같은 국가에 대한 네트워크 호출을 반복하지 않는다.

use crate::error::Result;
use mbti_atlas_common::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".geocode-cache.json";

/// 캐시 파일 구조
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeCache {
    /// 버전 (호환성 확인용)
    version: u32,
    /// 국가명 → 조회 결과
    entries: HashMap<String, CacheEntry>,
}

/// 캐시 엔트리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// None이면 "찾을 수 없음"이 확정된 국가
    pub coordinates: Option<Coordinates>,
    /// 조회 시각 (RFC 3339)
    pub resolved_at: String,
}

impl GeocodeCache {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// 캐시 파일 읽기. 없거나 깨졌으면 빈 캐시
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, GeocodeCache>(reader) {
            Ok(cache) => {
                if cache.version != Self::CURRENT_VERSION {
                    tracing::warn!("지오코딩 캐시 버전 불일치, 새로 만듭니다");
                    return Self::default();
                }
                cache
            }
            Err(e) => {
                tracing::warn!(error = %e, "지오코딩 캐시를 읽을 수 없어 무시합니다");
                Self::default()
            }
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        std::fs::create_dir_all(folder)?;
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// 캐시 파일 삭제. 파일이 있었으면 true
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn get(&self, country: &str) -> Option<&CacheEntry> {
        self.entries.get(country)
    }

    pub fn insert(&mut self, country: String, coordinates: Option<Coordinates>) {
        self.entries.insert(
            country,
            CacheEntry {
                coordinates,
                resolved_at: chrono::Local::now().to_rfc3339(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 좌표가 있는 엔트리 수
    pub fn resolved_count(&self) -> usize {
        self.entries.values().filter(|e| e.coordinates.is_some()).count()
    }
}

impl Default for GeocodeCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}
