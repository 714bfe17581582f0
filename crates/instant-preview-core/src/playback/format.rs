/// Render seconds as `mm:ss`.
///
/// Fractions are truncated and minutes are unbounded. NaN, infinite and
/// negative inputs render as `00:00`.
///
/// ```
/// use instant_preview_core::format_time;
///
/// assert_eq!(format_time(65.9), "01:05");
/// assert_eq!(format_time(f64::NAN), "00:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
