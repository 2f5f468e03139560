fn main() {
    // ── libvips linking ──────────────────────────────────────────────────────
    //
    // The libvips-rs bindings crate ships no build script of its own.
    // We must tell cargo where to find the library for each platform.
    //
    // Linux: install the distribution's libvips development package
    // (e.g. `libvips-dev` on Debian/Ubuntu, `vips-devel` on Fedora).
    //
    // The VIPS_DIR environment variable points at a non-system install
    // (its `lib/` directory is added to the search path).
    link_libvips();
}

fn link_libvips() {
    // Re-run whenever the override env-var changes.
    println!("cargo:rerun-if-env-changed=VIPS_DIR");

    if let Ok(vips_dir) = std::env::var("VIPS_DIR") {
        let lib_dir = std::path::Path::new(&vips_dir).join("lib");
        if lib_dir.exists() {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        } else {
            println!("cargo:warning=VIPS_DIR is set but '{}' does not exist.", lib_dir.display());
        }
    }

    if cfg!(target_os = "windows") {
        // GLib symbols (g_free, g_object_unref, …) called directly by
        // libvips_rs's image.rs must also be explicitly linked.
        println!("cargo:rustc-link-lib=dylib=libvips");
        println!("cargo:rustc-link-lib=dylib=libglib-2.0");
        println!("cargo:rustc-link-lib=dylib=libgobject-2.0");
    } else {
        println!("cargo:rustc-link-lib=dylib=vips");
        println!("cargo:rustc-link-lib=dylib=glib-2.0");
        println!("cargo:rustc-link-lib=dylib=gobject-2.0");
    }
}
