//! Fixed-width text helpers shared by plain output and the dashboard.

/// Cut `s` to `width` characters, or pad it with spaces up to `width`.
pub fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len > width {
        s.chars().take(width).collect()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}
