/// Addresses handed over by the link step.
///
/// Built once by the entry routine from linker symbol addresses and passed
/// around by reference. Nothing here is read from memory.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MemoryLayout {
    pub bss_start: usize,
    pub bss_end: usize,
    pub stack_top: usize,
}

impl MemoryLayout {
    pub const fn new(bss_start: usize, bss_end: usize, stack_top: usize) -> Self {
        Self { bss_start, bss_end, stack_top }
    }

    /// Size of `.bss`; `end - start`, unchecked like the rest of boot.
    #[inline]
    pub const fn bss_len(&self) -> usize {
        self.bss_end - self.bss_start
    }

    /// The boot stack sits above `.bss`, so zeroing `.bss` never hits it.
    #[inline]
    pub fn stack_above_bss(&self) -> bool {
        self.stack_top > self.bss_end
    }
}
