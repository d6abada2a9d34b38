//! Conversion routines under test.
//!
//! Each submodule wraps one formatter and exposes a `describe()` function
//! returning its [`Method`]. The list below is the single place where methods
//! are composed into a run; nothing registers itself.

pub mod core_fmt;
pub mod dtoa_fmt;
pub mod lexical_fmt;
pub mod null;
pub mod ryu_fmt;
pub mod sprintf;

use crate::registry::Method;

/// Every method available in this build, in no particular order.
pub fn describe_all() -> Vec<Method> {
    let mut methods = vec![
        core_fmt::describe_display(),
        core_fmt::describe_lower_exp(),
        dtoa_fmt::describe(),
        lexical_fmt::describe(),
        null::describe(),
        ryu_fmt::describe(),
    ];

    if sprintf::C_IMPL_AVAILABLE {
        methods.push(sprintf::describe());
    }

    methods
}
