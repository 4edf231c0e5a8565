#![no_std]
#![no_main]

mod entry;

use core::fmt::Write;

use sbiboot_lib::boot::{bss, cmdline, layout::MemoryLayout};
use sbiboot_lib::console::{FmtWriter, SbiConsole};
use sbiboot_lib::sbi::OpenSbi;
use sbiboot_lib::{kdebug, kinfo, kprintf, kwarn};

extern "C" {
    static __bss: u8;
    static __bss_end: u8;
    static __stack_top: u8;
}

/// Linker symbol addresses; their contents are never read.
fn memory_layout() -> MemoryLayout {
    unsafe {
        MemoryLayout::new(
            &raw const __bss as usize,
            &raw const __bss_end as usize,
            &raw const __stack_top as usize,
        )
    }
}

#[no_mangle]
extern "C" fn rust_start() -> ! {
    let layout = memory_layout();
    // SAFETY: nothing has touched a static yet, and the boot stack sits
    // above __bss_end.
    unsafe { bss::clear_bss(&layout) };

    cmdline::apply(&cmdline::parse_cmdline(cmdline::builtin()));
    kdebug!(
        "bss [{:#x}, {:#x}) cleared, stack top {:#x}",
        layout.bss_start,
        layout.bss_end,
        layout.stack_top
    );
    if !layout.stack_above_bss() {
        kwarn!("boot stack top {:#x} is not above .bss", layout.stack_top);
    }

    kprintf!("\n\nHello %s\n", "World!");
    kprintf!("1 + 2 = %d, %x\n", 1 + 2, 0x1234abcd);

    kinfo!("nothing left to do, parking hart");
    loop {
        unsafe { riscv::asm::wfi(); }
    }
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // Not the shared stdout: the panic may have happened while it was held.
    let mut con = SbiConsole::new(OpenSbi);
    let mut out = FmtWriter(&mut con);
    let _ = write!(out, "\r\n*** KERNEL PANIC ***\r\n");
    if let Some(loc) = info.location() {
        let _ = write!(
            out,
            "at {}:{}:{}\r\n",
            loc.file(),
            loc.line(),
            loc.column()
        );
    }

    let _ = write!(out, "{}\r\n", info.message());

    loop {
        unsafe { riscv::asm::wfi(); }
    }
}
