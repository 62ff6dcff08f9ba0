/// Conditional logging module for development builds
///
/// The `dev_log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Warnings and errors should
/// keep using `log::warn!` and `log::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use track_crossings::logging::dev_log;
///
/// let trains = 3;
/// dev_log!("Simulating {} trains", trains);
/// ```
/// Conditionally log at debug level in development builds
///
/// This macro expands to `log::debug!` in debug builds or when the
/// `console_logging` feature is enabled. In production release builds,
/// it compiles to nothing.
#[macro_export]
macro_rules! dev_log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg),+);
        }
    };
}

pub use dev_log;
