pub mod error_banner;
pub mod loading_indicator;
pub mod status_chip;

pub use error_banner::*;
pub use loading_indicator::*;
pub use status_chip::*;
