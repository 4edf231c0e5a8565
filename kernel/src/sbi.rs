//! RISC-V Supervisor Binary Interface (SBI) calls into OpenSBI.
//!
//! Ref: https://github.com/riscv-non-isa/riscv-sbi-doc

/// Legacy Console Putchar extension.
pub const EID_CONSOLE_PUTCHAR: usize = 0x01;
pub const FID_CONSOLE_PUTCHAR: usize = 0;

/// Raw `(a0, a1)` pair handed back by firmware.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SbiRet {
    pub error: isize,
    pub value: isize,
}

/// The error type which is returned from SBI.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SbiError {
    Failed,
    NotSupported,
    InvalidParam,
    Denied,
    InvalidAddress,
    AlreadyAvailable,
    AlreadyStarted,
    AlreadyStopped,
    Unknown(isize),
}

impl SbiError {
    pub const fn from_code(code: isize) -> Self {
        match code {
            -1 => SbiError::Failed,
            -2 => SbiError::NotSupported,
            -3 => SbiError::InvalidParam,
            -4 => SbiError::Denied,
            -5 => SbiError::InvalidAddress,
            -6 => SbiError::AlreadyAvailable,
            -7 => SbiError::AlreadyStarted,
            -8 => SbiError::AlreadyStopped,
            other => SbiError::Unknown(other),
        }
    }
}

pub type SbiResult<T = isize> = Result<T, SbiError>;

impl SbiRet {
    pub const fn success(value: isize) -> Self {
        Self { error: 0, value }
    }

    pub fn into_result(self) -> SbiResult {
        match self.error {
            0 => Ok(self.value),
            code => Err(SbiError::from_code(code)),
        }
    }
}

/// Something that services SBI calls. [`OpenSbi`] on hardware.
pub trait Firmware {
    /// Issue one call: `args` land in `a0..a5`, `fid` in `a6`, `eid` in `a7`.
    ///
    /// # Safety
    ///
    /// Firmware may read or write memory named by the arguments; the caller
    /// must make sure any such pointers are valid for what `eid`/`fid` does.
    unsafe fn call(&self, args: [usize; 6], fid: usize, eid: usize) -> SbiRet;
}

/// The M-mode firmware we were launched by.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[derive(Copy, Clone, Debug, Default)]
pub struct OpenSbi;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
impl Firmware for OpenSbi {
    #[inline(always)]
    unsafe fn call(&self, args: [usize; 6], fid: usize, eid: usize) -> SbiRet {
        let [a0, a1, a2, a3, a4, a5] = args;
        sbi_call(a0, a1, a2, a3, a4, a5, fid, eid)
    }
}

/// Trap into firmware with `ecall` and wait for it to come back.
///
/// No `nomem`/`readonly` option: firmware may touch any memory, so the
/// compiler must not move loads or stores across the call.
///
/// # Safety
///
/// See [`Firmware::call`].
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub unsafe fn sbi_call(
    arg0: usize,
    arg1: usize,
    arg2: usize,
    arg3: usize,
    arg4: usize,
    arg5: usize,
    fid: usize,
    eid: usize,
) -> SbiRet {
    let error: isize;
    let value: isize;
    core::arch::asm!(
        "ecall",
        inlateout("a0") arg0 as isize => error,
        inlateout("a1") arg1 as isize => value,
        in("a2") arg2,
        in("a3") arg3,
        in("a4") arg4,
        in("a5") arg5,
        in("a6") fid,
        in("a7") eid,
        options(nostack)
    );
    SbiRet { error, value }
}

/// Legacy putchar. The result is returned as-is; see `console::SbiConsole`
/// for the caller that drops it.
#[inline]
pub fn console_putchar<F: Firmware + ?Sized>(fw: &F, ch: u8) -> SbiRet {
    // SAFETY: putchar takes a byte by value, no memory is shared.
    unsafe {
        fw.call(
            [ch as usize, 0, 0, 0, 0, 0],
            FID_CONSOLE_PUTCHAR,
            EID_CONSOLE_PUTCHAR,
        )
    }
}
