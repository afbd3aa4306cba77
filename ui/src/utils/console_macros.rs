//! Browser console logging.
//!
//! In the browser every line goes through `gloo_console` with a
//! `[timestamp]` prefix. On other targets (host-side tests) the same calls
//! are routed to `tracing` so nothing touches JS bindings.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Log,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: ConsoleLevel, message: &str) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        ConsoleLevel::Debug => gloo_console::debug!(line),
        ConsoleLevel::Info => gloo_console::info!(line),
        ConsoleLevel::Log => gloo_console::log!(line),
        ConsoleLevel::Warn => gloo_console::warn!(line),
        ConsoleLevel::Error => gloo_console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: ConsoleLevel, message: &str) {
    match level {
        ConsoleLevel::Debug => tracing::debug!("{}", message),
        ConsoleLevel::Info | ConsoleLevel::Log => tracing::info!("{}", message),
        ConsoleLevel::Warn => tracing::warn!("{}", message),
        ConsoleLevel::Error => tracing::error!("{}", message),
    }
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Debug,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Info,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Log,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Warn,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Error,
            &format!($($arg)*),
        )
    };
}
