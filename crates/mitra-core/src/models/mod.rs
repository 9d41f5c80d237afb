mod activity;
mod cadence;
mod chain_state;
mod degradation_event;
mod mitra;
mod probability;
mod series;
mod summary;

pub use activity::ActivityRecord;
pub use cadence::{whole_months_between, Cadence};
pub use chain_state::{ChainStage, ChainState};
pub use degradation_event::DegradationEvent;
pub use mitra::MitraProfile;
pub use probability::PurchaseProbability;
pub use series::{FrequencySeries, SeriesPoint};
pub use summary::{SummaryRecord, SummarySource};
