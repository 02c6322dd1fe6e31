//! 표시용 숫자 포맷

/// 0.1234 → "12.34%"
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// 소수점 없이 반올림하고 천 단위 쉼표를 붙인다 (1234567.6 → "1,234,568")
///
/// 반올림은 `{:.0}`에 맡긴다. .5는 짝수 쪽으로 간다 (2.5 → "2").
pub fn thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if value < 0.0 && digits.bytes().any(|b| b != b'0') {
        format!("-{}", out)
    } else {
        out
    }
}
