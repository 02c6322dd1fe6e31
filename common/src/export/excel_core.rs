//! Excel 생성 (공통 라이브러리)
//!
//! ReportSheet 하나를 워크시트 하나로 기록한다.

use super::sheet::{Cell, ReportSheet};
use rust_xlsxwriter::*;

/// Excel 시트 이름에 쓸 수 없는 문자를 치환하고 31자로 자른다
pub fn sanitize_sheet_name(title: &str, index: usize) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(31)
        .collect();

    let trimmed = cleaned.trim_matches('\'').trim().to_string();
    if trimmed.is_empty() {
        format!("Sheet{}", index + 1)
    } else {
        trimmed
    }
}

/// 이미 쓴 이름과 겹치지 않는 시트 이름 (Excel은 대소문자를 구분하지 않는다)
pub fn unique_sheet_name(name: String, used: &[String]) -> String {
    let taken = |candidate: &str| used.iter().any(|u| u.to_lowercase() == candidate.to_lowercase());
    if !taken(&name) {
        return name;
    }

    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let base: String = name.chars().take(31 - suffix.chars().count()).collect();
        let candidate = format!("{}{}", base, suffix);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Excel을 버퍼에 생성
pub fn generate_excel_buffer(sheets: &[ReportSheet]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let percent_format = Format::new()
        .set_num_format("0.00%")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let number_format = Format::new()
        .set_num_format("#,##0")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let text_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let mut used_names: Vec<String> = Vec::new();

    for (index, sheet) in sheets.iter().enumerate() {
        let name = unique_sheet_name(sanitize_sheet_name(&sheet.title, index), &used_names);
        used_names.push(name.clone());

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&name)
            .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, header, &header_format)
                .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
            worksheet
                .set_column_width(col as u16, 18)
                .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
        }

        for (r, row) in sheet.rows.iter().enumerate() {
            let row_idx = (r + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(s) => worksheet.write_string_with_format(row_idx, col, s, &text_format),
                    Cell::Percent(v) => worksheet.write_number_with_format(row_idx, col, *v, &percent_format),
                    Cell::Number(v) => worksheet.write_number_with_format(row_idx, col, v.round(), &number_format),
                }
                .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("E vs I", 0), "E vs I");
        assert_eq!(sanitize_sheet_name("a/b:c", 0), "a_b_c");
        assert_eq!(sanitize_sheet_name("", 2), "Sheet3");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), 0).chars().count(), 31);
    }

    #[test]
    fn test_unique_sheet_name() {
        let used = vec!["Top10".to_string(), "Sheet2".to_string()];
        assert_eq!(unique_sheet_name("Summary".into(), &used), "Summary");
        assert_eq!(unique_sheet_name("top10".into(), &used), "top10 (2)");
        assert_eq!(unique_sheet_name("SHEET2".into(), &used), "SHEET2 (2)");

        let used = vec!["Top10".to_string(), "Top10 (2)".to_string()];
        assert_eq!(unique_sheet_name("Top10".into(), &used), "Top10 (3)");

        let long = "x".repeat(31);
        let renamed = unique_sheet_name(long.clone(), &[long]);
        assert_eq!(renamed.chars().count(), 31);
        assert!(renamed.ends_with(" (2)"));
    }

    #[test]
    fn test_colliding_titles_still_build() {
        // 두 번째 시트가 첫 시트의 이름 "Sheet2"와 겹치는 경우
        let first = ReportSheet::new("Sheet2", &["A"]);
        let second = ReportSheet::new("", &["A"]);
        let third = ReportSheet::new("sheet2", &["A"]);
        let buffer = generate_excel_buffer(&[first, second, third]).unwrap();
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_generate_excel_buffer() {
        let mut sheet = ReportSheet::new("Top10", &["Country", "INTJ"]);
        sheet.push_row(vec![Cell::text("Japan"), Cell::Percent(0.05)]);
        let buffer = generate_excel_buffer(&[sheet.clone(), sheet]).unwrap();
        // xlsx 파일은 zip 형식
        assert_eq!(&buffer[0..2], b"PK");
    }
}
