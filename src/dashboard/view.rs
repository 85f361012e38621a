//! View model for the dashboard, keyed by city name.
//!
//! Each tick builds a fresh [`DashboardView`] from the state, diffs it
//! against what the [`CardStore`] currently holds, and applies only the
//! resulting patches. Cards that are already correct are left alone.

use chrono::NaiveDateTime;

use crate::dashboard::state::Dashboard;
use crate::models::{PrayerName, TrackedCity};
use crate::utils::format::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// The next prayer.
    Active,
    Passed,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRow {
    pub name: PrayerName,
    pub time: String,
    pub status: RowStatus,
    /// İmsak and Akşam rows are emphasised.
    pub accent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextBlock {
    pub label: &'static str,
    pub remaining: String,
    pub tomorrow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCard {
    pub city: String,
    /// Country and the day the timings belong to.
    pub footer: String,
    pub next: NextBlock,
    pub rows: Vec<TimingRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Nothing tracked: show the city selection prompt.
    Placeholder,
    Cards(Vec<CityCard>),
}

impl DashboardView {
    pub fn build(dashboard: &Dashboard, now: NaiveDateTime) -> Self {
        if dashboard.is_empty() {
            return DashboardView::Placeholder;
        }
        DashboardView::Cards(dashboard.cities().iter().map(|c| card(c, now)).collect())
    }
}

fn card(city: &TrackedCity, now: NaiveDateTime) -> CityCard {
    let today = now.date();
    let rows = city
        .timings
        .iter()
        .map(|(name, time)| {
            let status = if name == city.next.name {
                RowStatus::Active
            } else if today.and_time(time) < now {
                RowStatus::Passed
            } else {
                RowStatus::Upcoming
            };
            TimingRow {
                name,
                time: format_time(time),
                status,
                accent: matches!(name, PrayerName::Fajr | PrayerName::Maghrib),
            }
        })
        .collect();

    CityCard {
        city: city.city.clone(),
        footer: format!("{} · {}", city.country, city.date.format("%d/%m/%Y")),
        next: NextBlock {
            label: city.next.localized,
            remaining: city.next.remaining.clone(),
            tomorrow: city.next.tomorrow,
        },
        rows,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    ShowPlaceholder,
    Insert { index: usize, card: CityCard },
    Remove { city: String },
    UpdateNext { city: String, next: NextBlock },
    UpdateRows { city: String, rows: Vec<TimingRow> },
    Reorder { order: Vec<String> },
}

fn cards_of(view: &DashboardView) -> &[CityCard] {
    match view {
        DashboardView::Placeholder => &[],
        DashboardView::Cards(cards) => cards,
    }
}

/// Minimal set of patches that turns `old` into `new`.
pub fn diff(old: &DashboardView, new: &DashboardView) -> Vec<Patch> {
    let new_cards = match new {
        DashboardView::Placeholder => {
            return if *old == DashboardView::Placeholder {
                Vec::new()
            } else {
                vec![Patch::ShowPlaceholder]
            };
        }
        DashboardView::Cards(cards) => cards,
    };
    let old_cards = cards_of(old);
    let mut patches = Vec::new();

    for old_card in old_cards {
        if !new_cards.iter().any(|c| c.city == old_card.city) {
            patches.push(Patch::Remove {
                city: old_card.city.clone(),
            });
        }
    }

    // Order the store will have after removals and inserts, before any reorder.
    let mut order: Vec<&str> = old_cards
        .iter()
        .map(|c| c.city.as_str())
        .filter(|name| new_cards.iter().any(|c| c.city == *name))
        .collect();

    for (index, new_card) in new_cards.iter().enumerate() {
        match old_cards.iter().find(|c| c.city == new_card.city) {
            None => {
                order.insert(index.min(order.len()), new_card.city.as_str());
                patches.push(Patch::Insert {
                    index,
                    card: new_card.clone(),
                });
            }
            Some(old_card) => {
                if old_card.next != new_card.next {
                    patches.push(Patch::UpdateNext {
                        city: new_card.city.clone(),
                        next: new_card.next.clone(),
                    });
                }
                if old_card.rows != new_card.rows {
                    patches.push(Patch::UpdateRows {
                        city: new_card.city.clone(),
                        rows: new_card.rows.clone(),
                    });
                }
            }
        }
    }

    let wanted: Vec<&str> = new_cards.iter().map(|c| c.city.as_str()).collect();
    if order != wanted {
        patches.push(Patch::Reorder {
            order: wanted.iter().map(|s| s.to_string()).collect(),
        });
    }
    patches
}

/// Counters for how the store has been touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub built: usize,
    pub updated: usize,
    pub removed: usize,
}

/// The rendered dashboard. Cards are created once and then patched in place.
#[derive(Debug)]
pub struct CardStore {
    view: DashboardView,
    stats: StoreStats,
}

impl Default for CardStore {
    fn default() -> Self {
        Self {
            view: DashboardView::Placeholder,
            stats: StoreStats::default(),
        }
    }
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn stats(&self) -> StoreStats {
        self.stats
    }

    /// Diff against `target` and apply. Returns the number of patches.
    pub fn reconcile(&mut self, target: &DashboardView) -> usize {
        let patches = diff(&self.view, target);
        let count = patches.len();
        for patch in patches {
            self.apply(patch);
        }
        count
    }

    fn card_mut(&mut self, city: &str) -> Option<&mut CityCard> {
        match &mut self.view {
            DashboardView::Cards(cards) => cards.iter_mut().find(|c| c.city == city),
            DashboardView::Placeholder => None,
        }
    }

    pub fn apply(&mut self, patch: Patch) {
        match patch {
            Patch::ShowPlaceholder => {
                self.view = DashboardView::Placeholder;
            }
            Patch::Insert { index, card } => {
                match &mut self.view {
                    DashboardView::Cards(cards) => {
                        let at = index.min(cards.len());
                        cards.insert(at, card);
                    }
                    DashboardView::Placeholder => self.view = DashboardView::Cards(vec![card]),
                }
                self.stats.built += 1;
            }
            Patch::Remove { city } => {
                if let DashboardView::Cards(cards) = &mut self.view {
                    cards.retain(|c| c.city != city);
                    self.stats.removed += 1;
                }
            }
            Patch::UpdateNext { city, next } => {
                if let Some(card) = self.card_mut(&city) {
                    card.next = next;
                    self.stats.updated += 1;
                }
            }
            Patch::UpdateRows { city, rows } => {
                if let Some(card) = self.card_mut(&city) {
                    card.rows = rows;
                    self.stats.updated += 1;
                }
            }
            Patch::Reorder { order } => {
                if let DashboardView::Cards(cards) = &mut self.view {
                    cards.sort_by_key(|c| {
                        order.iter().position(|o| *o == c.city).unwrap_or(usize::MAX)
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayTimings, Timings};
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn day(maghrib: NaiveTime) -> Option<DayTimings> {
        Some(DayTimings {
            timings: Timings::new(t(5, 30), t(7, 0), t(12, 45), t(16, 10), maghrib, t(20, 30)),
            date: now().date(),
        })
    }

    fn dashboard(cities: &[(&str, NaiveTime)]) -> Dashboard {
        let mut d = Dashboard::new();
        for (name, maghrib) in cities {
            d.begin_add(name);
            d.complete_add(name, day(*maghrib), now());
        }
        d
    }

    #[test]
    fn empty_dashboard_is_a_placeholder() {
        let view = DashboardView::build(&Dashboard::new(), now());
        assert_eq!(view, DashboardView::Placeholder);
        assert!(diff(&DashboardView::Placeholder, &view).is_empty());
    }

    #[test]
    fn rows_follow_prayer_order_with_statuses() {
        let d = dashboard(&[("Ankara", t(19, 5))]);
        let DashboardView::Cards(cards) = DashboardView::build(&d, now()) else {
            panic!("expected cards");
        };
        let statuses: Vec<RowStatus> = cards[0].rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                RowStatus::Passed,
                RowStatus::Passed,
                RowStatus::Passed,
                RowStatus::Passed,
                RowStatus::Active,
                RowStatus::Upcoming,
            ]
        );
        let accented: Vec<PrayerName> =
            cards[0].rows.iter().filter(|r| r.accent).map(|r| r.name).collect();
        assert_eq!(accented, vec![PrayerName::Fajr, PrayerName::Maghrib]);
        assert_eq!(cards[0].next.label, "Akşam");
        assert_eq!(cards[0].rows[4].time, "19:05");
    }

    #[test]
    fn same_tick_twice_touches_nothing() {
        let d = dashboard(&[("Ankara", t(19, 5)), ("Van", t(18, 10))]);
        let mut store = CardStore::new();
        assert_eq!(store.reconcile(&DashboardView::build(&d, now())), 2);
        assert_eq!(store.stats().built, 2);

        assert_eq!(store.reconcile(&DashboardView::build(&d, now())), 0);
        assert_eq!(store.stats().built, 2);
        assert_eq!(store.stats().updated, 0);
    }

    #[test]
    fn countdown_tick_updates_in_place() {
        let mut d = dashboard(&[("Ankara", t(19, 5))]);
        let mut store = CardStore::new();
        store.reconcile(&DashboardView::build(&d, now()));

        let later = now() + Duration::seconds(1);
        d.tick(later);
        let patches = diff(store.view(), &DashboardView::build(&d, later));
        assert_eq!(patches.len(), 1);
        assert!(matches!(&patches[0], Patch::UpdateNext { city, .. } if city == "Ankara"));

        store.reconcile(&DashboardView::build(&d, later));
        assert_eq!(store.stats().built, 1);
        assert_eq!(store.stats().updated, 1);
    }

    #[test]
    fn passing_a_prayer_updates_rows_without_rebuilding() {
        let mut d = dashboard(&[("Ankara", t(18, 1))]);
        let mut store = CardStore::new();
        store.reconcile(&DashboardView::build(&d, now()));

        let later = now() + Duration::minutes(2);
        d.tick(later);
        let patches = diff(store.view(), &DashboardView::build(&d, later));
        assert!(patches.iter().any(|p| matches!(p, Patch::UpdateRows { .. })));
        assert!(!patches.iter().any(|p| matches!(p, Patch::Insert { .. })));

        store.reconcile(&DashboardView::build(&d, later));
        assert_eq!(store.stats().built, 1);
    }

    #[test]
    fn structural_changes_insert_and_remove_by_name() {
        let mut d = dashboard(&[("Ankara", t(19, 5))]);
        let mut store = CardStore::new();
        store.reconcile(&DashboardView::build(&d, now()));

        d.begin_add("Van");
        d.complete_add("Van", day(t(18, 10)), now());
        let patches = diff(store.view(), &DashboardView::build(&d, now()));
        assert_eq!(patches.len(), 1);
        assert!(matches!(&patches[0], Patch::Insert { index: 0, card } if card.city == "Van"));
        store.reconcile(&DashboardView::build(&d, now()));
        assert_eq!(store.view(), &DashboardView::build(&d, now()));

        d.remove("Ankara");
        let patches = diff(store.view(), &DashboardView::build(&d, now()));
        assert_eq!(patches, vec![Patch::Remove { city: "Ankara".to_string() }]);
        store.reconcile(&DashboardView::build(&d, now()));

        d.remove("Van");
        store.reconcile(&DashboardView::build(&d, now()));
        assert_eq!(store.view(), &DashboardView::Placeholder);
    }

    #[test]
    fn reorder_is_emitted_when_positions_change() {
        let old = DashboardView::build(&dashboard(&[("Van", t(18, 10)), ("Ankara", t(19, 5))]), now());
        let DashboardView::Cards(mut cards) = old.clone() else {
            panic!("expected cards");
        };
        cards.reverse();
        let new = DashboardView::Cards(cards);

        let patches = diff(&old, &new);
        assert_eq!(
            patches,
            vec![Patch::Reorder {
                order: vec!["Ankara".to_string(), "Van".to_string()]
            }]
        );

        let mut store = CardStore::new();
        store.reconcile(&old);
        store.reconcile(&new);
        assert_eq!(store.view(), &new);
    }
}
