//! Freestanding byte primitives.
//!
//! These work on raw pointers with no bounds checking. Every function is
//! `unsafe`: the caller guarantees the ranges are valid for the access.

/// The primitive set used by boot code. Swappable so tests can check the
/// freestanding loops against the host's own routines.
pub trait MemoryPrimitives {
    /// Write `value` into `count` bytes starting at `dest`. Returns `dest`.
    ///
    /// # Safety
    /// `dest..dest + count` must be valid for writes.
    unsafe fn fill(dest: *mut u8, value: u8, count: usize) -> *mut u8;

    /// Copy `count` bytes from `src` to `dest`. Returns `dest`.
    ///
    /// # Safety
    /// Both ranges must be valid for `count` bytes and must not overlap.
    unsafe fn copy(dest: *mut u8, src: *const u8, count: usize) -> *mut u8;

    /// Copy a zero-terminated string, terminator included. Returns `dest`.
    ///
    /// # Safety
    /// `src` must be zero-terminated and `dest` large enough to hold it.
    unsafe fn copy_string(dest: *mut u8, src: *const u8) -> *mut u8;

    /// Compare two zero-terminated strings. Zero if equal, otherwise the
    /// difference of the first mismatching bytes.
    ///
    /// # Safety
    /// Both pointers must reference zero-terminated strings.
    unsafe fn compare_strings(a: *const u8, b: *const u8) -> i32;
}

/// Plain byte loops, no dependency on anything outside this crate.
pub struct Freestanding;

impl MemoryPrimitives for Freestanding {
    unsafe fn fill(dest: *mut u8, value: u8, count: usize) -> *mut u8 {
        let mut p = dest;
        for _ in 0..count {
            p.write(value);
            p = p.add(1);
        }
        dest
    }

    unsafe fn copy(dest: *mut u8, src: *const u8, count: usize) -> *mut u8 {
        let mut d = dest;
        let mut s = src;
        for _ in 0..count {
            d.write(s.read());
            d = d.add(1);
            s = s.add(1);
        }
        dest
    }

    unsafe fn copy_string(dest: *mut u8, src: *const u8) -> *mut u8 {
        let mut d = dest;
        let mut s = src;
        while *s != 0 {
            d.write(*s);
            d = d.add(1);
            s = s.add(1);
        }
        d.write(0);
        dest
    }

    unsafe fn compare_strings(a: *const u8, b: *const u8) -> i32 {
        let mut a = a;
        let mut b = b;
        while *a != 0 && *b != 0 && *a == *b {
            a = a.add(1);
            b = b.add(1);
        }
        i32::from(*a) - i32::from(*b)
    }
}

/// See [`MemoryPrimitives::fill`].
///
/// # Safety
/// Same contract as the trait method.
#[inline]
pub unsafe fn fill(dest: *mut u8, value: u8, count: usize) -> *mut u8 {
    Freestanding::fill(dest, value, count)
}

/// See [`MemoryPrimitives::copy`].
///
/// # Safety
/// Same contract as the trait method.
#[inline]
pub unsafe fn copy(dest: *mut u8, src: *const u8, count: usize) -> *mut u8 {
    Freestanding::copy(dest, src, count)
}

/// See [`MemoryPrimitives::copy_string`].
///
/// # Safety
/// Same contract as the trait method.
#[inline]
pub unsafe fn copy_string(dest: *mut u8, src: *const u8) -> *mut u8 {
    Freestanding::copy_string(dest, src)
}

/// See [`MemoryPrimitives::compare_strings`].
///
/// # Safety
/// Same contract as the trait method.
#[inline]
pub unsafe fn compare_strings(a: *const u8, b: *const u8) -> i32 {
    Freestanding::compare_strings(a, b)
}
