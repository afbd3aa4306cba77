pub mod record_table;
pub mod score_panel;

pub use record_table::*;
pub use score_panel::*;
