//! C library `snprintf("%.17g")`, compiled from `sprintf.c` by the build script.

use crate::registry::Method;

const MAX_LEN: usize = 32;

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn dtoa_bench_sprintf(
            value: f64,
            buffer: *mut libc::c_char,
            size: libc::size_t,
        ) -> libc::c_int;
    }
}

/// Check if the C shim was compiled
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(c_implementation_active)]
pub fn convert(value: f64, buffer: &mut String) {
    let mut bytes = [0u8; MAX_LEN];
    let written = unsafe {
        ffi::dtoa_bench_sprintf(value, bytes.as_mut_ptr().cast(), bytes.len())
    };
    let len = usize::try_from(written).unwrap_or(0).min(MAX_LEN - 1);
    // %g output is plain ASCII.
    if let Ok(text) = std::str::from_utf8(&bytes[..len]) {
        buffer.push_str(text);
    }
}

// Stub for missing C compiler; never registered.
#[cfg(not(c_implementation_active))]
pub fn convert(_value: f64, _buffer: &mut String) {}

pub fn describe() -> Method {
    Method {
        name: "sprintf",
        description: "C library snprintf with %.17g",
        max_len: MAX_LEN,
        convert,
    }
}
