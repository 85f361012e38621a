use chrono::NaiveDateTime;
use log::{debug, info};

use crate::models::{DayTimings, TrackedCity, COUNTRY};
use crate::prayer_times::next_prayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A fetch should be issued for the city.
    Requested,
    /// Already tracked or already being fetched; nothing changes.
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Added,
    /// The request was cancelled (replaced or removed) before the answer came.
    Stale,
    /// The fetch produced no data.
    Unavailable,
}

/// Tracked cities in display order (soonest next prayer first) plus the
/// names with a fetch in flight.
#[derive(Debug, Default)]
pub struct Dashboard {
    cities: Vec<TrackedCity>,
    pending: Vec<String>,
}

pub fn track(city: &str, day: DayTimings, now: NaiveDateTime) -> TrackedCity {
    let next = next_prayer(&day.timings, now);
    TrackedCity {
        city: city.to_string(),
        country: COUNTRY,
        timings: day.timings,
        date: day.date,
        next,
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cities(&self) -> &[TrackedCity] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.city == city)
    }

    pub fn is_pending(&self, city: &str) -> bool {
        self.pending.iter().any(|p| p == city)
    }

    /// Start adding `city`. Duplicates leave the state untouched.
    pub fn begin_add(&mut self, city: &str) -> AddOutcome {
        if self.contains(city) || self.is_pending(city) {
            debug!("Rejecting duplicate city {}", city);
            return AddOutcome::Duplicate;
        }
        self.pending.push(city.to_string());
        AddOutcome::Requested
    }

    /// Clear everything and start adding `city` as the only entry.
    /// Outstanding requests become stale.
    pub fn begin_replace(&mut self, city: &str) {
        self.cities.clear();
        self.pending.clear();
        self.pending.push(city.to_string());
    }

    /// Apply a fetch result. Only a still-pending request may add a city.
    pub fn complete_add(
        &mut self,
        city: &str,
        data: Option<DayTimings>,
        now: NaiveDateTime,
    ) -> CompleteOutcome {
        let Some(idx) = self.pending.iter().position(|p| p == city) else {
            debug!("Dropping stale result for {}", city);
            return CompleteOutcome::Stale;
        };
        self.pending.remove(idx);

        let Some(day) = data else {
            return CompleteOutcome::Unavailable;
        };
        self.insert(track(city, day, now));
        CompleteOutcome::Added
    }

    /// Remove a tracked city, or cancel its pending fetch.
    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.cities.len() + self.pending.len();
        self.cities.retain(|c| c.city != city);
        self.pending.retain(|p| p != city);
        let removed = before != self.cities.len() + self.pending.len();
        if removed {
            info!("Removed {}", city);
            self.sort();
        }
        removed
    }

    /// Recompute every city's next prayer. Order is left as is.
    pub fn tick(&mut self, now: NaiveDateTime) {
        for city in &mut self.cities {
            city.next = next_prayer(&city.timings, now);
        }
    }

    fn insert(&mut self, city: TrackedCity) {
        info!("Tracking {} (next: {} in {})", city.city, city.next.localized, city.next.remaining);
        self.cities.push(city);
        self.sort();
    }

    /// Stable: equal countdowns keep insertion order.
    fn sort(&mut self) {
        self.cities.sort_by_key(|c| c.next.remaining_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timings;
    use chrono::{NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn day(maghrib: NaiveTime) -> DayTimings {
        DayTimings {
            timings: Timings::new(t(5, 30), t(7, 0), t(12, 45), t(16, 10), maghrib, t(20, 30)),
            date: now().date(),
        }
    }

    fn add(d: &mut Dashboard, city: &str, maghrib: NaiveTime) {
        assert_eq!(d.begin_add(city), AddOutcome::Requested);
        assert_eq!(d.complete_add(city, Some(day(maghrib)), now()), CompleteOutcome::Added);
    }

    fn names(d: &Dashboard) -> Vec<&str> {
        d.cities().iter().map(|c| c.city.as_str()).collect()
    }

    #[test]
    fn duplicate_add_is_rejected_without_change() {
        let mut d = Dashboard::new();
        add(&mut d, "Konya", t(18, 40));

        assert_eq!(d.begin_add("Konya"), AddOutcome::Duplicate);
        assert_eq!(names(&d), vec!["Konya"]);
        assert!(!d.has_pending());
    }

    #[test]
    fn duplicate_of_pending_request_is_rejected() {
        let mut d = Dashboard::new();
        assert_eq!(d.begin_add("Van"), AddOutcome::Requested);
        assert_eq!(d.begin_add("Van"), AddOutcome::Duplicate);
    }

    #[test]
    fn soonest_prayer_comes_first() {
        let mut d = Dashboard::new();
        add(&mut d, "Edirne", t(19, 20));
        add(&mut d, "Van", t(18, 10));
        add(&mut d, "Ankara", t(18, 45));
        assert_eq!(names(&d), vec!["Van", "Ankara", "Edirne"]);
    }

    #[test]
    fn equal_countdowns_keep_insertion_order() {
        let mut d = Dashboard::new();
        add(&mut d, "Bolu", t(18, 30));
        add(&mut d, "Düzce", t(18, 30));
        add(&mut d, "Rize", t(18, 5));
        add(&mut d, "Sinop", t(18, 30));
        assert_eq!(names(&d), vec!["Rize", "Bolu", "Düzce", "Sinop"]);
    }

    #[test]
    fn replace_clears_and_tracks_exactly_one() {
        let mut d = Dashboard::new();
        add(&mut d, "Bursa", t(18, 50));
        add(&mut d, "İzmir", t(19, 0));
        assert_eq!(d.begin_add("Muş"), AddOutcome::Requested);

        d.begin_replace("Sivas");
        assert!(d.is_empty());
        assert_eq!(d.complete_add("Muş", Some(day(t(18, 20))), now()), CompleteOutcome::Stale);
        assert_eq!(d.complete_add("Sivas", Some(day(t(18, 25))), now()), CompleteOutcome::Added);
        assert_eq!(names(&d), vec!["Sivas"]);
    }

    #[test]
    fn replace_with_the_tracked_city_is_allowed() {
        let mut d = Dashboard::new();
        add(&mut d, "Bursa", t(18, 50));
        d.begin_replace("Bursa");
        assert_eq!(d.complete_add("Bursa", Some(day(t(18, 50))), now()), CompleteOutcome::Added);
        assert_eq!(names(&d), vec!["Bursa"]);
    }

    #[test]
    fn late_result_after_remove_is_dropped() {
        let mut d = Dashboard::new();
        assert_eq!(d.begin_add("Kars"), AddOutcome::Requested);
        assert!(d.remove("Kars"));
        assert_eq!(d.complete_add("Kars", Some(day(t(18, 0))), now()), CompleteOutcome::Stale);
        assert!(d.is_empty());
    }

    #[test]
    fn unavailable_data_leaves_state_untouched() {
        let mut d = Dashboard::new();
        assert_eq!(d.begin_add("Hatay"), AddOutcome::Requested);
        assert_eq!(d.complete_add("Hatay", None, now()), CompleteOutcome::Unavailable);
        assert!(d.is_empty());
        assert!(!d.has_pending());
        // a retry is a fresh request, not a duplicate
        assert_eq!(d.begin_add("Hatay"), AddOutcome::Requested);
    }

    #[test]
    fn tick_refreshes_countdowns() {
        let mut d = Dashboard::new();
        add(&mut d, "Ordu", t(19, 5));
        assert_eq!(d.cities()[0].next.remaining, "1s 5dk 0sn");

        d.tick(now() + chrono::Duration::seconds(61));
        assert_eq!(d.cities()[0].next.remaining, "1s 3dk 59sn");
    }
}
