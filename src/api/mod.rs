pub mod aladhan;
pub mod error;

pub use aladhan::PrayerApi;
