//! `core::fmt` float formatting.

use crate::registry::Method;
use std::fmt::Write as _;

/// `{}` of `f64::MIN_POSITIVE / 2^52` spells out every leading zero.
const DISPLAY_MAX_LEN: usize = 327;
const LOWER_EXP_MAX_LEN: usize = 24;

pub fn convert_display(value: f64, buffer: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(buffer, "{value}");
}

pub fn convert_lower_exp(value: f64, buffer: &mut String) {
    let _ = write!(buffer, "{value:e}");
}

pub fn describe_display() -> Method {
    Method {
        name: "core-display",
        description: "core::fmt Display, shortest round-trip digits in positional notation",
        max_len: DISPLAY_MAX_LEN,
        convert: convert_display,
    }
}

pub fn describe_lower_exp() -> Method {
    Method {
        name: "core-exp",
        description: "core::fmt LowerExp, shortest round-trip digits in scientific notation",
        max_len: LOWER_EXP_MAX_LEN,
        convert: convert_lower_exp,
    }
}
