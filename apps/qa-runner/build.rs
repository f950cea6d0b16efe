//! Build script for the QA runner
//!
//! Forwards the ESP-IDF build environment to rustc, and warns early when
//! building for a target that has no ESP-IDF.

fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();

    if !target.ends_with("-espidf") {
        println!("cargo:warning==============================================");
        println!("cargo:warning= Building for target: {}", target);
        println!("cargo:warning= This crate requires an ESP-IDF target,");
        println!("cargo:warning= e.g. xtensa-esp32-espidf or xtensa-esp32s3-espidf");
        println!("cargo:warning=");
        println!("cargo:warning= Install the ESP toolchain:");
        println!("cargo:warning=   cargo install espup ldproxy");
        println!("cargo:warning=   espup install");
        println!("cargo:warning=");
        println!("cargo:warning= Then build with:");
        println!("cargo:warning=   cargo xtask build qa-runner --chip esp32s3");
        println!("cargo:warning==============================================");
    }

    // Rerun if target changes
    println!("cargo:rerun-if-env-changed=TARGET");

    embuild::espidf::sysenv::output();
}
