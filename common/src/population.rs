//! 인구 기반 추정치

/// 한국 인구 (5,115만 명 기준)
pub const KOREA_POPULATION: u64 = 51_150_000;

/// 비율 × 전체 인구
pub fn estimate(proportion: f64, total_population: u64) -> f64 {
    proportion * total_population as f64
}
