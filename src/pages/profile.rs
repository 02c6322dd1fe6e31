use super::PageReport;
use mbti_atlas_common::{Cell, CountryProfile, ReportSheet};

impl PageReport for CountryProfile {
    fn title(&self) -> String {
        format!("📊 {}의 MBTI 비율 (내림차순)", self.country)
    }

    fn sheets(&self) -> Vec<ReportSheet> {
        let mut sheet = ReportSheet::new(self.country.as_str(), &["MBTI 유형", "비율(소수)", "비율", "색상"]);
        for bar in &self.bars {
            sheet.push_row(vec![
                Cell::text(bar.mbti.code()),
                Cell::text(format!("{}", bar.value)),
                Cell::text(bar.label.as_str()),
                Cell::text(bar.color.css()),
            ]);
        }
        vec![sheet]
    }

    fn summary(&self) -> Vec<String> {
        self.bars
            .first()
            .map(|top| vec![format!("가장 많은 유형: {} ({})", top.mbti, top.label)])
            .unwrap_or_default()
    }
}
