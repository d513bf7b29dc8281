use crate::utils::error::{CatalogError, Result};
use chrono::FixedOffset;

// Real-world UTC offsets run from -12:00 to +14:00.
const MIN_OFFSET_MINUTES: i32 = -720;
const MAX_OFFSET_MINUTES: i32 = 840;

/// Formats a signed UTC offset in minutes as an ISO-8601-style timezone
/// string: `"Z"` for zero, otherwise sign-prefixed `HH:MM`. Non-integer
/// offsets and offsets outside the real-world range are rejected.
pub fn format_time_zone(offset: f64) -> Result<String> {
    if offset == 0.0 {
        return Ok("Z".to_string());
    }

    if offset != offset.trunc() {
        return Err(CatalogError::InvalidOffset { offset });
    }

    let minutes = offset as i32;
    if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        return Err(CatalogError::InvalidOffset { offset });
    }

    let (sign, abs) = if minutes < 0 {
        ('-', -minutes)
    } else {
        ('+', minutes)
    };
    let mins = abs % 60;
    let hours = (abs - mins) / 60;

    Ok(format!(
        "{}{}:{}",
        sign,
        format_number(hours as u64, 2),
        format_number(mins as u64, 2)
    ))
}

/// Zero-pads `value` to `length` digits and keeps only the LAST `length`
/// characters, so values with more digits than `length` are truncated,
/// not expanded.
pub fn format_number(value: u64, length: usize) -> String {
    let padded = format!("{}{}", "0".repeat(length), value);
    padded[padded.len() - length..].to_string()
}

/// Bridge from chrono's fixed offset. Sub-minute offsets are rejected the
/// same way non-integer minute counts are.
pub fn format_fixed_offset(offset: FixedOffset) -> Result<String> {
    format_time_zone(offset.local_minus_utc() as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_is_zulu() {
        assert_eq!(format_time_zone(0.0).unwrap(), "Z");
    }

    #[test]
    fn negative_and_positive_offsets() {
        assert_eq!(format_time_zone(-300.0).unwrap(), "-05:00");
        assert_eq!(format_time_zone(90.0).unwrap(), "+01:30");
        assert_eq!(format_time_zone(840.0).unwrap(), "+14:00");
        assert_eq!(format_time_zone(-720.0).unwrap(), "-12:00");
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        assert!(format_time_zone(841.0).is_err());
        assert!(format_time_zone(-721.0).is_err());
    }

    #[test]
    fn non_integer_offsets_are_rejected() {
        assert!(format_time_zone(1.5).is_err());
        assert!(format_time_zone(f64::NAN).is_err());
        assert!(format_time_zone(f64::INFINITY).is_err());
    }

    #[test]
    fn format_number_pads_and_truncates() {
        assert_eq!(format_number(5, 2), "05");
        assert_eq!(format_number(123, 2), "23");
        assert_eq!(format_number(7, 4), "0007");
    }

    #[test]
    fn fixed_offset_bridge() {
        let plus_one_thirty = FixedOffset::east_opt(90 * 60).unwrap();
        assert_eq!(format_fixed_offset(plus_one_thirty).unwrap(), "+01:30");

        // 30-second offsets have no minute representation.
        let odd = FixedOffset::east_opt(90).unwrap();
        assert!(format_fixed_offset(odd).is_err());
    }
}
