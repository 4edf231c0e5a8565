//! A printf with four directives and no allocation.
//!
//! `%s` string, `%d` signed decimal, `%x` eight hex digits, `%%` a literal
//! percent. Everything else in the format is copied through byte for byte.

use core::ffi::CStr;

use crate::console::Console;

/// One positional argument.
///
/// Integers carry 32 bits; `%d` and `%x` reinterpret either variant the way
/// C varargs would.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Arg<'a> {
    /// Printed up to the first zero byte or the end of the slice.
    Str(&'a [u8]),
    Int(i32),
    Hex(u32),
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s.as_bytes())
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(s: &'a CStr) -> Self {
        Arg::Str(s.to_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(s)
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Int(v)
    }
}

impl<'a> Arg<'a> {
    fn as_int(&self) -> i32 {
        match *self {
            Arg::Int(v) => v,
            Arg::Hex(v) => v as i32,
            Arg::Str(_) => panic!("%d given a string argument"),
        }
    }

    fn as_hex(&self) -> u32 {
        match *self {
            Arg::Int(v) => v as u32,
            Arg::Hex(v) => v,
            Arg::Str(_) => panic!("%x given a string argument"),
        }
    }

    fn as_bytes(self) -> &'a [u8] {
        match self {
            Arg::Str(s) => s,
            _ => panic!("%s given an integer argument"),
        }
    }
}

/// What follows a `%`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Directive {
    /// `%%`, or a lone `%` closing the format.
    Percent,
    Str,
    Int,
    Hex,
    /// Consumed and ignored.
    Unknown(u8),
}

impl Directive {
    pub fn parse(byte: Option<u8>) -> Self {
        match byte {
            None | Some(b'%') => Directive::Percent,
            Some(b's') => Directive::Str,
            Some(b'd') => Directive::Int,
            Some(b'x') => Directive::Hex,
            Some(other) => Directive::Unknown(other),
        }
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render `fmt` with `args` into `out`.
///
/// `fmt` ends at its first zero byte or at the end of the slice. Running out
/// of arguments, or handing a string to `%d`/`%x` (or an integer to `%s`),
/// panics. Extra arguments are ignored.
pub fn format_and_write<C: Console + ?Sized>(out: &mut C, fmt: &[u8], args: &[Arg<'_>]) {
    let mut bytes = fmt.iter().copied().take_while(|&b| b != 0);
    let mut args = args.iter();
    let mut next_arg = |d: u8| {
        match args.next() {
            Some(a) => *a,
            None => panic!("missing argument for %{}", d as char),
        }
    };

    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.put_byte(b);
            continue;
        }
        match Directive::parse(bytes.next()) {
            Directive::Percent => out.put_byte(b'%'),
            Directive::Str => write_str(out, next_arg(b's').as_bytes()),
            Directive::Int => write_dec(out, next_arg(b'd').as_int()),
            Directive::Hex => write_hex(out, next_arg(b'x').as_hex()),
            Directive::Unknown(_) => {}
        }
    }
}

fn write_str<C: Console + ?Sized>(out: &mut C, s: &[u8]) {
    for &b in s.iter().take_while(|&&b| b != 0) {
        out.put_byte(b);
    }
}

/// Signed decimal, most significant digit first.
///
/// `i32::MIN` has no positive counterpart: the wrapping negation leaves it
/// negative and it prints as `-0`.
fn write_dec<C: Console + ?Sized>(out: &mut C, value: i32) {
    let mut value = value;
    if value < 0 {
        out.put_byte(b'-');
        value = value.wrapping_neg();
    }

    let mut divisor: i32 = 1;
    while value / divisor > 9 {
        divisor *= 10;
    }

    while divisor > 0 {
        out.put_byte((i32::from(b'0') + value / divisor) as u8);
        value %= divisor;
        divisor /= 10;
    }
}

/// Always eight lowercase digits.
fn write_hex<C: Console + ?Sized>(out: &mut C, value: u32) {
    for i in (0..8).rev() {
        let nibble = (value >> (i * 4)) & 0xf;
        out.put_byte(HEX_DIGITS[nibble as usize]);
    }
}

/// printf-style output on the firmware console.
///
/// ```ignore
/// kprintf!("1 + 2 = %d, %x\n", 1 + 2, 0x1234abcd);
/// ```
#[macro_export]
macro_rules! kprintf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format_and_write(
            &mut *$crate::console::stdout(),
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::format::Arg::from($arg)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Capture;

    fn render(fmt: &str, args: &[Arg<'_>]) -> String {
        let mut cap = Capture::<256>::new();
        format_and_write(&mut cap, fmt.as_bytes(), args);
        assert_eq!(cap.dropped(), 0);
        String::from_utf8(cap.as_bytes().to_vec()).unwrap()
    }

    fn render_bytes(fmt: &[u8], args: &[Arg<'_>]) -> Vec<u8> {
        let mut cap = Capture::<256>::new();
        format_and_write(&mut cap, fmt, args);
        cap.as_bytes().to_vec()
    }

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(render("plain text\n", &[]), "plain text\n");
        assert_eq!(render("", &[]), "");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(render("100%%", &[]), "100%");
        assert_eq!(render("%%%%", &[]), "%%");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(render("50%", &[]), "50%");
        assert_eq!(render_bytes(b"50%\0ignored", &[]), b"50%");
    }

    #[test]
    fn test_format_stops_at_nul() {
        assert_eq!(render_bytes(b"ab\0cd", &[]), b"ab");
    }

    #[test]
    fn test_string() {
        assert_eq!(render("%s", &["World!".into()]), "World!");
        assert_eq!(render("Hello %s\n", &["World!".into()]), "Hello World!\n");
        assert_eq!(render("[%s]", &["".into()]), "[]");
    }

    #[test]
    fn test_string_stops_at_nul() {
        let s: &[u8] = b"abc\0def";
        assert_eq!(render("%s", &[s.into()]), "abc");
        assert_eq!(render("%s", &[c"cstr".into()]), "cstr");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(render("%d", &[0.into()]), "0");
        assert_eq!(render("%d", &[7.into()]), "7");
        assert_eq!(render("%d", &[10.into()]), "10");
        assert_eq!(render("%d", &[(-123).into()]), "-123");
        assert_eq!(render("%d", &[1000000.into()]), "1000000");
        assert_eq!(render("%d", &[i32::MAX.into()]), "2147483647");
        assert_eq!(render("%d", &[(i32::MIN + 1).into()]), "-2147483647");
    }

    #[test]
    fn test_decimal_most_negative_wraps() {
        assert_eq!(render("%d", &[i32::MIN.into()]), "-0");
    }

    #[test]
    fn test_hex_is_fixed_width() {
        assert_eq!(render("%x", &[0.into()]), "00000000");
        assert_eq!(render("%x", &[0x1234abcd.into()]), "1234abcd");
        assert_eq!(render("%x", &[Arg::Hex(0xdeadbeef)]), "deadbeef");
        assert_eq!(render("%x", &[Arg::Hex(0xf)]), "0000000f");
    }

    #[test]
    fn test_integer_reinterpretation() {
        assert_eq!(render("%x", &[(-1).into()]), "ffffffff");
        assert_eq!(render("%d", &[Arg::Hex(0xffff_fffe)]), "-2");
    }

    #[test]
    fn test_unknown_directive_is_silent() {
        assert_eq!(render("a%qb", &[]), "ab");
        // No argument is consumed by the unknown directive
        assert_eq!(render("%z%d", &[5.into()]), "5");
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            render("1 + 2 = %d, %x\n", &[(1 + 2).into(), 0x1234abcd.into()]),
            "1 + 2 = 3, 1234abcd\n"
        );
        assert_eq!(
            render("%s=%d (%x) 100%%", &["n".into(), (-5).into(), Arg::Hex(255)]),
            "n=-5 (000000ff) 100%"
        );
    }

    #[test]
    fn test_extra_args_ignored() {
        assert_eq!(render("x", &[1.into(), "y".into()]), "x");
    }

    #[test]
    #[should_panic(expected = "missing argument")]
    fn test_missing_argument_panics() {
        render("%d", &[]);
    }

    #[test]
    #[should_panic(expected = "string argument")]
    fn test_string_for_int_panics() {
        render("%d", &["1".into()]);
    }

    #[test]
    #[should_panic(expected = "integer argument")]
    fn test_int_for_string_panics() {
        render("%s", &[1.into()]);
    }

    #[test]
    fn test_directive_parse() {
        assert_eq!(Directive::parse(None), Directive::Percent);
        assert_eq!(Directive::parse(Some(b'%')), Directive::Percent);
        assert_eq!(Directive::parse(Some(b's')), Directive::Str);
        assert_eq!(Directive::parse(Some(b'd')), Directive::Int);
        assert_eq!(Directive::parse(Some(b'x')), Directive::Hex);
        assert_eq!(Directive::parse(Some(b'X')), Directive::Unknown(b'X'));
    }
}
