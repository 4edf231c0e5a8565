//! Early boot: where memory is, how to clear it, and which knobs were set.

pub mod bss;
pub mod cmdline;
pub mod layout;
