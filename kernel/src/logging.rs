//! Kernel logging with configurable log levels.
//!
//! Records go to the firmware console, one line each, prefixed with the
//! level. The threshold starts at Info and can be moved by the boot command
//! line (`loglevel=`).
//!
//! Log levels are similar to log4j:
//! - TRACE: Fine-grained debugging information
//! - DEBUG: Debugging information
//! - INFO: Informational messages
//! - WARN: Warning messages
//! - ERROR: Error messages

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use crate::console::{Console, FmtWriter};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Case-insensitive level name, as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, LogLevel); 5] = [
            ("trace", LogLevel::Trace),
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warn", LogLevel::Warn),
            ("error", LogLevel::Error),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, level)| level)
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }
}

/// Global log level filter. Messages below this level are suppressed.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Get the current log level threshold.
pub fn get_log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set the log level threshold. Messages below this level will be suppressed.
pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Check if a message at the given level should be logged.
#[inline]
pub fn should_log(level: LogLevel) -> bool {
    level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Write one record, unfiltered.
pub fn write_record<C: Console + ?Sized>(out: &mut C, level: LogLevel, args: fmt::Arguments) {
    let mut w = FmtWriter(out);
    let _ = w.write_str(level.tag());
    let _ = w.write_fmt(args);
    let _ = w.write_str("\r\n");
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments) {
    write_record(&mut *crate::console::stdout(), level, args);
}

/// Internal macro for kernel logging with level filtering.
#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        let level = $level;
        if $crate::logging::should_log(level) {
            $crate::logging::_log(level, format_args!($($arg)*));
        }
    }};
}

/// Log a trace-level message (finest granularity).
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {
        $crate::klog!($crate::logging::LogLevel::Trace, $($arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {
        $crate::klog!($crate::logging::LogLevel::Debug, $($arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {
        $crate::klog!($crate::logging::LogLevel::Info, $($arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {
        $crate::klog!($crate::logging::LogLevel::Warn, $($arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {
        $crate::klog!($crate::logging::LogLevel::Error, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Capture;

    #[test]
    fn test_from_name() {
        assert_eq!(LogLevel::from_name("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_name("Info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_name("ERROR"), Some(LogLevel::Error));
        assert_eq!(LogLevel::from_name("verbose"), None);
        assert_eq!(LogLevel::from_name(""), None);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_u8_round_trip_and_clamp() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    // The only test that touches the global threshold.
    #[test]
    fn test_threshold() {
        let saved = get_log_level();

        set_log_level(LogLevel::Warn);
        assert_eq!(get_log_level(), LogLevel::Warn);
        assert!(!should_log(LogLevel::Info));
        assert!(should_log(LogLevel::Warn));
        assert!(should_log(LogLevel::Error));

        set_log_level(LogLevel::Trace);
        assert!(should_log(LogLevel::Trace));

        set_log_level(saved);
    }

    #[test]
    fn test_write_record_format() {
        let mut cap = Capture::<64>::new();
        write_record(&mut cap, LogLevel::Info, format_args!("bss {:#x} bytes", 0x40));
        assert_eq!(cap.as_str(), Some("[INFO]  bss 0x40 bytes\r\n"));

        cap.clear();
        write_record(&mut cap, LogLevel::Error, format_args!("boom"));
        assert_eq!(cap.as_str(), Some("[ERROR] boom\r\n"));
    }
}
