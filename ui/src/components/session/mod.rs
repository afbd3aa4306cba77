pub mod profile_card;
pub mod user_session_panel;

pub use profile_card::*;
pub use user_session_panel::*;
