use crate::registry::Method;

pub fn convert(value: f64, buffer: &mut String) {
    buffer.push_str(ryu::Buffer::new().format_finite(value));
}

pub fn describe() -> Method {
    Method {
        name: "ryu",
        description: "Ryu shortest round-trip formatting (ryu crate)",
        max_len: 24,
        convert,
    }
}
