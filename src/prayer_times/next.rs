use chrono::{Days, FixedOffset, NaiveDateTime, Utc};

use crate::models::{NextPrayer, PrayerName, Timings};
use crate::utils::format::format_remaining;

/// Wall-clock time at a fixed UTC offset (minutes east).
pub fn local_now(utc_offset_minutes: i32) -> NaiveDateTime {
    let now = Utc::now();
    match FixedOffset::east_opt(utc_offset_minutes * 60) {
        Some(offset) => now.with_timezone(&offset).naive_local(),
        None => now.naive_utc(),
    }
}

/// The next prayer after `now`. If every prayer today has passed, Fajr of
/// the following day.
pub fn next_prayer(timings: &Timings, now: NaiveDateTime) -> NextPrayer {
    let today = now.date();

    let upcoming = timings
        .iter()
        .map(|(name, time)| (name, today.and_time(time)))
        .filter(|(_, at)| *at > now)
        .min_by_key(|(_, at)| *at);

    let (name, at, tomorrow) = match upcoming {
        Some((name, at)) => (name, at, false),
        None => {
            let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
            let fajr = PrayerName::Fajr;
            (fajr, tomorrow.and_time(timings.get(fajr)), true)
        }
    };

    let remaining_ms = (at - now).num_milliseconds();
    NextPrayer {
        name,
        localized: name.localized(),
        at,
        remaining: format_remaining(remaining_ms),
        remaining_ms,
        tomorrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample() -> Timings {
        Timings::new(t(5, 30), t(7, 0), t(12, 45), t(16, 10), t(19, 5), t(20, 30))
    }

    #[test]
    fn evening_picks_maghrib() {
        let next = next_prayer(&sample(), at(18, 0, 0));
        assert_eq!(next.name, PrayerName::Maghrib);
        assert_eq!(next.localized, "Akşam");
        assert!(!next.tomorrow);
        assert_eq!(next.remaining_ms, 65 * 60 * 1000);
        assert_eq!(next.remaining, "1s 5dk 0sn");
    }

    #[test]
    fn picks_earliest_future_prayer_only() {
        let next = next_prayer(&sample(), at(6, 15, 0));
        assert_eq!(next.name, PrayerName::Sunrise);

        let next = next_prayer(&sample(), at(12, 44, 30));
        assert_eq!(next.name, PrayerName::Dhuhr);
        assert_eq!(next.remaining, "0s 0dk 30sn");
    }

    #[test]
    fn prayer_at_exactly_now_is_not_next() {
        let next = next_prayer(&sample(), at(16, 10, 0));
        assert_eq!(next.name, PrayerName::Maghrib);
    }

    #[test]
    fn after_isha_falls_back_to_tomorrows_fajr() {
        let now = at(23, 0, 0);
        let next = next_prayer(&sample(), now);
        assert_eq!(next.name, PrayerName::Fajr);
        assert!(next.tomorrow);
        assert_eq!(next.at, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap().and_time(t(5, 30)));
        assert_eq!(next.remaining, "6s 30dk 0sn");
    }

    #[test]
    fn before_fajr_is_todays_fajr() {
        let next = next_prayer(&sample(), at(0, 10, 0));
        assert_eq!(next.name, PrayerName::Fajr);
        assert!(!next.tomorrow);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let now = at(14, 0, 0);
        assert_eq!(next_prayer(&sample(), now), next_prayer(&sample(), now));
    }
}
