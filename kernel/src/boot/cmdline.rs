use crate::logging::LogLevel;

/// Settings picked from the boot command line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BootArgs {
    pub log_level: Option<LogLevel>,
}

/// Command line baked in at build time from `SBIBOOT_CMDLINE`.
/// The image has no device tree walk yet, so this is the only source.
pub fn builtin() -> &'static str {
    option_env!("SBIBOOT_CMDLINE").unwrap_or("")
}

/// Parse kernel command line arguments.
///
/// Recognised: `loglevel=<trace|debug|info|warn|error>` and `quiet`.
/// Unknown parameters are ignored; the last setting wins.
pub fn parse_cmdline(s: &str) -> BootArgs {
    let mut args = BootArgs::default();
    for param in s.split_whitespace() {
        if let Some(v) = param.strip_prefix("loglevel=") {
            if let Some(level) = LogLevel::from_name(v) {
                args.log_level = Some(level);
            }
        } else if param == "quiet" {
            args.log_level = Some(LogLevel::Error);
        }
    }
    args
}

/// Push parsed settings into the running kernel.
pub fn apply(args: &BootArgs) {
    if let Some(level) = args.log_level {
        crate::logging::set_log_level(level);
    }
}
