use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;

/// Hijri month names as written in Turkish (index 0 = Muharrem = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharrem",
    "Safer",
    "Rebiülevvel",
    "Rebiülahir",
    "Cemaziyelevvel",
    "Cemaziyelahir",
    "Recep",
    "Şaban",
    "Ramazan",
    "Şevval",
    "Zilkade",
    "Zilhicce",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "?"
    }
}

/// Hijri date string for a Gregorian day, e.g. "1 Ramazan 1447".
/// `None` when the date is outside the converter's range.
pub fn hijri_string(date: NaiveDate) -> Option<String> {
    let hd = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .ok()?;
    Some(format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(hijri_month_name(9), "Ramazan");
        assert_eq!(hijri_month_name(12), "Zilhicce");
        assert_eq!(hijri_month_name(0), "?");
        assert_eq!(hijri_month_name(13), "?");
    }

    #[test]
    fn converts_a_date_in_range() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let s = hijri_string(date).unwrap();
        assert!(s.ends_with("1447"), "{}", s);
    }
}
