pub mod next;
pub mod ramadan;

pub use next::{local_now, next_prayer};
pub use ramadan::{filter_ramadan_days, RamadanWindow};
