/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Failures in the browser layer
/// should continue using `leptos::logging::error!` and `leptos::logging::warn!`.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// On wasm the message goes to the browser console, natively to stderr so the
/// graph code can log from unit tests as well.
///
/// # Examples
///
/// ```rust
/// use metro_map::log;
///
/// log!("Loaded {} stations", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!($($arg),+).into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", format!($($arg),+));
        }
        // Keep the arguments type-checked and used when logging is compiled out
        #[cfg(not(any(debug_assertions, feature = "console_logging")))]
        {
            let _ = || format!($($arg),+);
        }
    };
}
