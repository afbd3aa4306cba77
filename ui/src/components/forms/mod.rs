pub mod form_state;
pub mod login_form;
pub mod reset_password_form;
pub mod signup_form;

pub use form_state::*;
pub use login_form::*;
pub use reset_password_form::*;
pub use signup_form::*;
