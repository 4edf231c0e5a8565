//! Bootstrap core for a supervisor-mode image started by OpenSBI.
//!
//! Everything that does not need to run on the target lives here so it can
//! be tested on the host. Tests run in a std environment, while the image
//! itself stays no_std.

#![cfg_attr(not(test), no_std)]

pub mod boot;
pub mod console;
pub mod format;
pub mod logging;
pub mod mem;
pub mod sbi;
