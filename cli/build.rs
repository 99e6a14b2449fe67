fn main() {
    // Release builds stamp the version from CI, local builds use the crate version.
    let version = std::env::var("WORKSHOP_CONSOLE_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rerun-if-env-changed=WORKSHOP_CONSOLE_VERSION");
    println!("cargo:rustc-env=APP_VERSION={}", version);
}
