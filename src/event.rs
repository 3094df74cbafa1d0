//! Log callback system.
//!
//! The crate never writes to stdout/stderr on its own. Hosts that want
//! diagnostics install a callback with [`set_log_callback`]; messages below
//! the configured minimum level are dropped before formatting reaches the
//! callback.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(0);

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Set the minimum level forwarded to the callback.
pub fn set_min_log_level(level: LogLevel) {
    MIN_LEVEL.store(level.as_u8(), Ordering::Relaxed);
}

/// Check whether messages at `level` would currently be forwarded.
#[must_use]
pub fn log_enabled(level: LogLevel) -> bool {
    level.as_u8() >= MIN_LEVEL.load(Ordering::Relaxed)
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if !log_enabled(level) {
        return;
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a lazily formatted log message.
///
/// The closure only runs when the level is enabled.
pub fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if log_enabled(level) {
        emit_log(level, &message());
    }
}
