use crate::registry::Method;
use lexical_core::FormattedSize;

const MAX_LEN: usize = <f64 as FormattedSize>::FORMATTED_SIZE_DECIMAL;

pub fn convert(value: f64, buffer: &mut String) {
    let mut bytes = [0u8; MAX_LEN];
    let written = lexical_core::write(value, &mut bytes);
    // SAFETY: lexical only emits ASCII digits, sign, '.' and 'e'.
    buffer.push_str(unsafe { std::str::from_utf8_unchecked(written) });
}

pub fn describe() -> Method {
    Method {
        name: "lexical",
        description: "lexical-core float writer",
        max_len: MAX_LEN,
        convert,
    }
}
