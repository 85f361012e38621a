use chrono::NaiveDate;

use crate::models::Timings;

/// One calendar day as returned by the monthly endpoint.
#[derive(Debug, Clone)]
pub struct DailyRecord {
    /// Gregorian date in the API's `DD-MM-YYYY` form.
    pub date: String,
    pub timings: Timings,
}

#[derive(Debug, Clone)]
pub struct RamadanDay {
    /// 1-based day of the month of fasting.
    pub day: u32,
    pub date: NaiveDate,
    pub timings: Timings,
}

impl RamadanDay {
    /// `DD/MM/YYYY`, the form shown on each grid card.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
