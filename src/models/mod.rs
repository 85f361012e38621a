pub mod city;
pub mod prayer;
pub mod province;
pub mod ramadan;

pub use city::{DayTimings, NextPrayer, TrackedCity, COUNTRY};
pub use prayer::{PrayerName, Timings};
pub use province::Province;
pub use ramadan::{DailyRecord, RamadanDay};
