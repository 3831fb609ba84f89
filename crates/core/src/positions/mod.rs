//! Position history - domain model, store trait and CSV import.

mod positions_import;
mod positions_model;
mod positions_traits;

pub use positions_import::{parse_positions_csv, read_positions_csv};
pub use positions_model::PositionHistory;
pub use positions_traits::PositionStore;
