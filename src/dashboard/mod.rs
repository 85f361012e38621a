pub mod imsakiye;
pub mod state;
pub mod view;

pub use imsakiye::ImsakiyePanel;
pub use state::{AddOutcome, CompleteOutcome, Dashboard};
pub use view::{CardStore, DashboardView};
