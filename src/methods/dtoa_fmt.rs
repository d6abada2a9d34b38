use crate::registry::Method;

pub fn convert(value: f64, buffer: &mut String) {
    buffer.push_str(dtoa::Buffer::new().format_finite(value));
}

pub fn describe() -> Method {
    Method {
        name: "dtoa",
        description: "Grisu-based shortest formatting (dtoa crate)",
        max_len: 25,
        convert,
    }
}
