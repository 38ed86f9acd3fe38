//! Locates and links the system cairo library.
//!
//! pkg-config is authoritative when a `.pc` file is installed. Otherwise we
//! scan the usual library directories; distributions often ship only the
//! versioned shared object (`libcairo.so.2`) without the dev symlink, in
//! which case a symlink is staged under `OUT_DIR` so the linker can find it
//! by its plain name.

use std::env;
use std::path::{Path, PathBuf};

const LIB_DIRS: &[&str] = &[
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/lib/x86_64-linux-gnu",
    "/usr/lib64",
    "/usr/lib",
    "/usr/local/lib",
    "/opt/homebrew/lib",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CAIRO_LIB_DIR");

    if let Ok(dir) = env::var("CAIRO_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
        println!("cargo:rustc-link-lib=cairo");
        return;
    }

    if pkg_config::Config::new()
        .atleast_version("1.12")
        .probe("cairo")
        .is_ok()
    {
        // pkg-config emitted the link flags itself
        return;
    }

    for dir in LIB_DIRS {
        let dir = Path::new(dir);
        if dir.join("libcairo.so").exists() || dir.join("libcairo.dylib").exists() {
            println!("cargo:rustc-link-search=native={}", dir.display());
            println!("cargo:rustc-link-lib=cairo");
            return;
        }
        for versioned in ["libcairo.so.2", "libcairo.2.dylib"] {
            let target = dir.join(versioned);
            if target.exists() {
                if let Some(staged) = stage_link(&target, versioned) {
                    println!("cargo:rustc-link-search=native={}", staged.display());
                    println!("cargo:rustc-link-lib=cairo");
                    return;
                }
            }
        }
    }

    // Nothing found; let the linker report the real error.
    println!("cargo:rustc-link-lib=cairo");
}

fn stage_link(target: &Path, versioned: &str) -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let link = if versioned.ends_with(".dylib") {
        out_dir.join("libcairo.dylib")
    } else {
        out_dir.join("libcairo.so")
    };
    if !link.exists() {
        #[cfg(unix)]
        std::os::unix::fs::symlink(target, &link).ok()?;
        #[cfg(not(unix))]
        std::fs::copy(target, &link).ok()?;
    }
    Some(out_dir)
}
