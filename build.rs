//! Build script: compiles the C conversion shims and records toolchain names.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-env-changed=DTOA_BENCH_MACHINE");

    println!("cargo:rustc-env=DTOA_BENCH_RUSTC={}", rustc_short_version());

    let build = cc::Build::new();
    let compiler = match build.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(e) => {
            println!("cargo:warning=No C compiler found ({e}). C conversion methods disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C conversion methods disabled.");
        return;
    };

    let mut build = cc::Build::new();

    // Auto-detect all C files in src/ directory
    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // No -ffast-math here: the shims must format exactly what libc produces.
    build.opt_level(3).compile("dtoa_bench_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}

/// `rustc 1.82.0 (f6e511eec 2024-10-15)` becomes `rustc1.82`.
fn rustc_short_version() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .unwrap_or_default();

    let mut parts = version
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) if !major.is_empty() => format!("rustc{major}.{minor}"),
        _ => "rustc".to_string(),
    }
}
