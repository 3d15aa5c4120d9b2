//! Fixed-point price rendering.

/// Render a value held in tenths of a currency unit as `£{units}.{tenths}m`.
///
/// Integer arithmetic only, so `55` is always `£5.5m` and never subject to
/// float rounding.
pub fn format_price(tenths: i64) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{}£{}.{}m", sign, abs / 10, abs % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(55), "£5.5m");
        assert_eq!(format_price(100), "£10.0m");
        assert_eq!(format_price(0), "£0.0m");
        assert_eq!(format_price(9), "£0.9m");
        assert_eq!(format_price(-5), "-£0.5m");
    }
}
