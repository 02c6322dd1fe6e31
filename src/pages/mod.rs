//! 대시보드 페이지별 리포트
//!
//! 각 페이지는 로드된 테이블에서 표/지도 데이터를 만들고,
//! 화면 출력과 내보내기는 `PageReport`를 통해 처리한다.

pub mod landmarks;
pub mod top_types;
pub mod profile;
pub mod continents;
pub mod my_mbti;

pub use continents::{AnchorAxis, ContinentReport};
pub use landmarks::LandmarkReport;
pub use my_mbti::MyMbtiReport;
pub use top_types::{SkippedMarker, TopCountriesReport};

use mbti_atlas_common::ReportSheet;
use serde::Serialize;

pub trait PageReport: Serialize {
    /// 페이지 제목
    fn title(&self) -> String;

    /// 표 데이터
    fn sheets(&self) -> Vec<ReportSheet>;

    /// 표 아래에 붙는 요약 문장
    fn summary(&self) -> Vec<String> {
        Vec::new()
    }

    /// 터미널 출력용 텍스트
    fn render_text(&self) -> String {
        let mut parts = vec![self.title()];
        for sheet in self.sheets() {
            parts.push(sheet.to_text());
        }
        let summary = self.summary();
        if !summary.is_empty() {
            parts.push(summary.join("\n"));
        }
        parts.join("\n\n")
    }
}
