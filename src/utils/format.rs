use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

const MS_PER_SEC: i64 = 1_000;
const MS_PER_MIN: i64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: i64 = 60 * MS_PER_MIN;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Format a countdown as "Xs Ydk Zsn" (saat / dakika / saniye).
/// Hours wrap at a day; each unit is a floor division of the remainder.
pub fn format_remaining(ms: i64) -> String {
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MIN;
    let seconds = (ms % MS_PER_MIN) / MS_PER_SEC;
    format!("{}s {}dk {}sn", hours, minutes, seconds)
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Right-pad to a display width; Turkish letters are single-width but
/// byte lengths differ, so `format!("{:<n}")` alone is not enough for spans.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_floors_each_unit() {
        assert_eq!(format_remaining(0), "0s 0dk 0sn");
        assert_eq!(format_remaining(999), "0s 0dk 0sn");
        assert_eq!(format_remaining(65 * MS_PER_MIN), "1s 5dk 0sn");
        assert_eq!(
            format_remaining(10 * MS_PER_HOUR + 59 * MS_PER_MIN + 59 * MS_PER_SEC + 500),
            "10s 59dk 59sn"
        );
    }

    #[test]
    fn pad_counts_characters_not_bytes() {
        assert_eq!(pad_to_width("Öğle", 6), "Öğle  ");
        assert_eq!(pad_to_width("İkindi", 3), "İkindi");
    }

    #[test]
    fn time_is_zero_padded() {
        let t = NaiveTime::from_hms_opt(5, 3, 0).unwrap();
        assert_eq!(format_time(t), "05:03");
    }
}
