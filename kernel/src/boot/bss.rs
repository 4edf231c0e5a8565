use super::layout::MemoryLayout;
use crate::mem::{Freestanding, MemoryPrimitives};

/// Zero `.bss`.
///
/// # Safety
///
/// - `layout` must describe a writable region that nothing else is using.
/// - Must run before any code reads a zero-initialized static.
#[inline]
pub unsafe fn clear_bss(layout: &MemoryLayout) {
    clear_bss_with::<Freestanding>(layout)
}

/// [`clear_bss`] over an arbitrary primitive set.
///
/// # Safety
///
/// Same as [`clear_bss`].
pub unsafe fn clear_bss_with<M: MemoryPrimitives>(layout: &MemoryLayout) {
    M::fill(layout.bss_start as *mut u8, 0, layout.bss_len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::tests::Host;

    fn layout_over(buf: &mut [u8], from: usize, to: usize) -> MemoryLayout {
        let base = buf.as_mut_ptr() as usize;
        MemoryLayout::new(base + from, base + to, base + buf.len())
    }

    #[test]
    fn test_clear_bss_zeroes_region() {
        let mut region = [0xa5u8; 64];
        let layout = layout_over(&mut region, 0, 64);
        unsafe { clear_bss(&layout) };
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_bss_leaves_neighbours() {
        let mut image = [0x5au8; 48];
        let layout = layout_over(&mut image, 8, 40);
        unsafe { clear_bss(&layout) };
        assert_eq!(&image[..8], &[0x5a; 8]);
        assert!(image[8..40].iter().all(|&b| b == 0));
        assert_eq!(&image[40..], &[0x5a; 8]);
    }

    #[test]
    fn test_clear_bss_any_prior_contents() {
        let mut region: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let len = region.len();
        let layout = layout_over(&mut region, 0, len);
        unsafe { clear_bss(&layout) };
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_bss_empty_region() {
        let mut region = [7u8; 4];
        let layout = layout_over(&mut region, 2, 2);
        unsafe { clear_bss(&layout) };
        assert_eq!(region, [7; 4]);
    }

    #[test]
    fn test_clear_bss_idempotent() {
        let mut region = [0xffu8; 32];
        let layout = layout_over(&mut region, 0, 32);
        unsafe {
            clear_bss(&layout);
            clear_bss(&layout);
        }
        assert_eq!(region, [0; 32]);
    }

    #[test]
    fn test_clear_bss_with_host_primitives() {
        let mut ours = [0xc3u8; 40];
        let mut host = [0xc3u8; 40];
        let a = layout_over(&mut ours, 4, 36);
        let b = layout_over(&mut host, 4, 36);
        unsafe {
            clear_bss(&a);
            clear_bss_with::<Host>(&b);
        }
        assert_eq!(ours, host);
    }
}
