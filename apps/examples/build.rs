//! Build script for the example binaries

fn main() {
    embuild::espidf::sysenv::output();
}
