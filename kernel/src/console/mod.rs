//! Byte sinks for early output.
//!
//! The only real device is the firmware console: one SBI call per byte.

use core::fmt;

use crate::sbi::{self, Firmware};

/// Anything that can swallow output one byte at a time.
pub trait Console {
    fn put_byte(&mut self, byte: u8);

    fn put_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put_byte(b);
        }
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    #[inline]
    fn put_byte(&mut self, byte: u8) {
        (**self).put_byte(byte)
    }
}

/// Console output through the legacy SBI putchar service.
pub struct SbiConsole<F> {
    firmware: F,
}

impl<F: Firmware> SbiConsole<F> {
    pub const fn new(firmware: F) -> Self {
        Self { firmware }
    }

    /// Emit one byte via SBI.
    ///
    /// The firmware error code is dropped, so a failed write goes unnoticed.
    #[inline]
    pub fn write_char(&mut self, ch: u8) {
        let _ = sbi::console_putchar(&self.firmware, ch);
    }
}

impl<F: Firmware> Console for SbiConsole<F> {
    #[inline]
    fn put_byte(&mut self, byte: u8) {
        self.write_char(byte)
    }
}

/// Fixed-capacity in-memory sink. Bytes past capacity are counted, not kept.
pub struct Capture<const N: usize> {
    buf: heapless::Vec<u8, N>,
    dropped: usize,
}

impl<const N: usize> Capture<N> {
    pub const fn new() -> Self {
        Self { buf: heapless::Vec::new(), dropped: 0 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.buf).ok()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Default for Capture<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Console for Capture<N> {
    fn put_byte(&mut self, byte: u8) {
        if self.buf.push(byte).is_err() {
            self.dropped += 1;
        }
    }
}

/// `core::fmt` on top of any [`Console`]. Bytes go out untranslated.
pub struct FmtWriter<'a, C: ?Sized>(pub &'a mut C);

impl<C: Console + ?Sized> fmt::Write for FmtWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod shared {
    use super::SbiConsole;
    use crate::sbi::OpenSbi;
    use spin::{Mutex, MutexGuard};

    static STDOUT: Mutex<SbiConsole<OpenSbi>> = Mutex::new(SbiConsole::new(OpenSbi));

    /// The shared firmware console.
    pub fn stdout() -> MutexGuard<'static, SbiConsole<OpenSbi>> {
        STDOUT.lock()
    }
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use shared::stdout;
