// kernel/build.rs
use std::path::PathBuf;

fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();

    // Baked into the image through option_env!
    println!("cargo:rerun-if-env-changed=SBIBOOT_CMDLINE");

    // Only use linker script for riscv target (the actual image), not for host tests
    if target.contains("riscv") {
        // Rebuild if the script changes
        println!("cargo:rerun-if-changed=memory.ld");

        // Absolute path to memory.ld (robust across cargo working dirs)
        let script = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap()).join("memory.ld");

        // Inject the linker arg for THIS crate's binary
        println!("cargo:rustc-link-arg-bins=-T{}", script.display());
        println!("cargo:rustc-link-arg-bins=-Map=sbiboot.map");
    }
}
