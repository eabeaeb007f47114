//! This module provides observability hooks for the vector's capacity and
//! ownership machinery.
//!
//! Growth and transfer decisions are invisible from the public API, so this
//! module provides structured logging hooks to make them transparent and
//! debuggable. The `log_metric!` macro is the primary tool.
//!
//! It is a zero-cost abstraction: the `#[cfg(debug_assertions)]` attribute
//! ensures that the macro and all calls to it are completely compiled out of
//! release builds, imposing no performance penalty in production.

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use vektor::log_metric;
/// let new_capacity = 4096;
/// log_metric!("event"="ensure_capacity", "outcome"="grown", "capacity"=&new_capacity);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("VEKTOR_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}
