use log::debug;

use crate::dashboard::state::Dashboard;
use crate::models::RamadanDay;

/// State of the Ramadan grid. It always follows the most recently added city.
#[derive(Debug, Clone, Default)]
pub enum ImsakiyePanel {
    #[default]
    Idle,
    Loading { city: String },
    Loaded { city: String, days: Vec<RamadanDay> },
    Failed { city: String },
}

impl ImsakiyePanel {
    pub fn city(&self) -> Option<&str> {
        match self {
            ImsakiyePanel::Idle => None,
            ImsakiyePanel::Loading { city }
            | ImsakiyePanel::Loaded { city, .. }
            | ImsakiyePanel::Failed { city } => Some(city.as_str()),
        }
    }

    pub fn begin(&mut self, city: &str) {
        *self = ImsakiyePanel::Loading {
            city: city.to_string(),
        };
    }

    /// Apply a fetch result. Ignored unless the panel is still waiting on
    /// `city` and the city is still tracked. Returns whether it was applied.
    pub fn complete(
        &mut self,
        city: &str,
        days: Option<Vec<RamadanDay>>,
        dashboard: &Dashboard,
    ) -> bool {
        let waiting = matches!(self, ImsakiyePanel::Loading { city: c } if c.as_str() == city);
        if !waiting || !dashboard.contains(city) {
            debug!("Dropping stale Ramadan calendar for {}", city);
            return false;
        }
        *self = match days {
            Some(days) => ImsakiyePanel::Loaded {
                city: city.to_string(),
                days,
            },
            None => ImsakiyePanel::Failed {
                city: city.to_string(),
            },
        };
        true
    }

    /// Forget a city that stopped being tracked.
    pub fn forget(&mut self, city: &str) {
        if self.city() == Some(city) {
            *self = ImsakiyePanel::Idle;
        }
    }
}
