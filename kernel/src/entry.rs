use core::arch::global_asm;

// First instructions after OpenSBI hands over. No stack yet, so no Rust:
// point sp at the reserved boot stack and jump to rust_start for good.
global_asm!(
    r#"
    .section .text.entry
    .globl _start
_start:
    la   sp, __stack_top
    j    rust_start
"#
);
