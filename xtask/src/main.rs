//! Build and flash helper for the ESP-IDF app crates.
//!
//! This binary provides a small command surface for building or flashing the
//! app crates under `apps/` without requiring manual target or feature setup.
//!
//! # Overview
//!
//! - Resolves a short target name to an app manifest, binary and features
//! - Injects the `xtensa-<chip>-espidf` target and `-Zbuild-std=std,panic_abort`
//! - Links through `ldproxy` and flashes with `espflash`
//! - Uses the ESP toolchain via `rustup run esp`
//!
//! # Usage
//!
//! ```ignore
//! cargo xtask run qa-runner --chip esp32s3
//! cargo xtask build ex-beacon
//! cargo xtask run ex-probe --debug
//! cargo xtask run ex-beacon -- --extra-arg
//! ```
//!
//! # Targets
//!
//! - qa-runner | qa
//! - ex-beacon | beacon
//! - ex-probe | ex-probe-inject
//!
//! # Notes
//!
//! - If no command is supplied, `build` is assumed.
//! - `--chip` selects `esp32` (default) or `esp32s3`.
//! - `--debug` selects a debug build (release is the default).
//! - `--` passes arguments to the target binary.
//! - `ESP_IDF_VERSION` and `CARGO_TARGET_DIR` are defaulted if not set by the
//!   caller. `MCU` always follows `--chip`.

use std::{env, error::Error, path::Path, process::Command};

const XTASK_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Operational mode for the xtask invocation.
#[derive(Clone, Copy)]
enum Mode {
    Run,
    Build,
}

/// Cargo build profile selection.
#[derive(Clone, Copy)]
enum Profile {
    Release,
    Debug,
}

/// Supported chips, each mapped to its ESP-IDF Rust target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chip {
    Esp32,
    Esp32s3,
}

impl Chip {
    fn parse(name: &str) -> Result<Self, Box<dyn Error>> {
        match name.to_ascii_lowercase().as_str() {
            "esp32" => Ok(Chip::Esp32),
            "esp32s3" | "esp32-s3" => Ok(Chip::Esp32s3),
            _ => Err(format!("unsupported chip: {name} (expected esp32 or esp32s3)").into()),
        }
    }

    fn target(self) -> &'static str {
        match self {
            Chip::Esp32 => "xtensa-esp32-espidf",
            Chip::Esp32s3 => "xtensa-esp32s3-espidf",
        }
    }

    fn mcu(self) -> &'static str {
        match self {
            Chip::Esp32 => "esp32",
            Chip::Esp32s3 => "esp32s3",
        }
    }
}

/// An app binary: manifest relative to the repo root, bin name, features.
#[derive(Debug, PartialEq, Eq)]
struct AppTarget {
    manifest: &'static str,
    bin: &'static str,
    features: &'static str,
}

const QA_RUNNER: AppTarget = AppTarget {
    manifest: "apps/qa-runner/Cargo.toml",
    bin: "qa-runner",
    features: "",
};

const EX_BEACON: AppTarget = AppTarget {
    manifest: "apps/examples/Cargo.toml",
    bin: "beacon",
    features: "beacon-example",
};

const EX_PROBE: AppTarget = AppTarget {
    manifest: "apps/examples/Cargo.toml",
    bin: "probe_inject",
    features: "probe-example",
};

fn main() {
    if let Err(err) = run() {
        eprintln!("xtask: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "-h" | "--help" | "help") {
        print_usage();
        return Ok(());
    }

    let mut mode = Mode::Build;
    let mut profile = Profile::Release;
    let mut chip = Chip::Esp32;
    let mut target: Option<&'static AppTarget> = None;
    let mut pass_args: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "run" => mode = Mode::Run,
            "build" => mode = Mode::Build,
            "--debug" => profile = Profile::Debug,
            "--release" => profile = Profile::Release,
            "--chip" => {
                let name = iter.next().ok_or("--chip needs a value")?;
                chip = Chip::parse(&name)?;
            }
            "--" => {
                pass_args.extend(iter);
                break;
            }
            _ if target.is_none() => target = Some(resolve_target(&arg)?),
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let target = target.ok_or("missing <target>")?;
    run_cargo(mode, profile, chip, target, &pass_args)
}

fn print_usage() {
    eprintln!(
        "Usage:\n  cargo xtask run <target> [--chip esp32|esp32s3] [--debug|--release] [--] [args...]\n  cargo xtask build <target> [--chip esp32|esp32s3] [--debug|--release]\n\nTargets:\n  qa-runner | qa\n  ex-beacon | ex-probe\n\nNotes:\n  - If no command is supplied, `build` is assumed (no flashing).\n  - Use `--` to pass args to the target binary.\n",
    );
}

fn resolve_target(arg: &str) -> Result<&'static AppTarget, Box<dyn Error>> {
    match arg.trim_end_matches(['/', '\\']).to_ascii_lowercase().as_str() {
        "qa" | "qa-runner" | "apps/qa-runner" => Ok(&QA_RUNNER),
        "ex-beacon" | "beacon" | "apps/examples" | "examples" => Ok(&EX_BEACON),
        "ex-probe" | "probe" | "ex-probe-inject" | "probe-inject" => Ok(&EX_PROBE),
        _ => Err(format!("unknown target: {arg}\nUse `cargo xtask --help` to list targets.").into()),
    }
}

fn cargo_args(
    mode: Mode,
    profile: Profile,
    chip: Chip,
    app: &AppTarget,
    manifest_path: &Path,
    pass_args: &[String],
) -> Vec<String> {
    let target = chip.target();
    let mut args = vec![
        match mode {
            Mode::Run => "run".to_string(),
            Mode::Build => "build".to_string(),
        },
        "--manifest-path".to_string(),
        manifest_path.display().to_string(),
        "--target".to_string(),
        target.to_string(),
        "-Zbuild-std=std,panic_abort".to_string(),
        "--bin".to_string(),
        app.bin.to_string(),
    ];

    if matches!(profile, Profile::Release) {
        args.push("--release".to_string());
    }

    if !app.features.is_empty() {
        args.push("--features".to_string());
        args.push(app.features.to_string());
    }

    args.push("--config".to_string());
    args.push(format!("target.{target}.linker='ldproxy'"));
    args.push("--config".to_string());
    args.push(format!("target.{target}.rustflags=[\"--cfg\",\"espidf_time64\"]"));

    if matches!(mode, Mode::Run) {
        args.push("--config".to_string());
        args.push(format!("target.{target}.runner='espflash flash --monitor'"));
    }

    if !pass_args.is_empty() {
        args.push("--".to_string());
        args.extend(pass_args.iter().cloned());
    }

    args
}

fn run_cargo(
    mode: Mode,
    profile: Profile,
    chip: Chip,
    app: &AppTarget,
    pass_args: &[String],
) -> Result<(), Box<dyn Error>> {
    let repo_root = Path::new(XTASK_MANIFEST_DIR)
        .parent()
        .ok_or("xtask manifest directory has no parent")?;
    let manifest_path = repo_root.join(app.manifest);
    if !manifest_path.is_file() {
        return Err(format!("manifest not found: {}", manifest_path.display()).into());
    }

    let cargo_args = cargo_args(mode, profile, chip, app, &manifest_path, pass_args);

    let mut command = Command::new("rustup");
    command.arg("run").arg("esp").arg("cargo");
    command.args(&cargo_args);

    if env::var_os("ESP_IDF_VERSION").is_none() {
        command.env("ESP_IDF_VERSION", "v5.2.3");
    }
    command.env("MCU", chip.mcu());
    if env::var_os("CARGO_TARGET_DIR").is_none() {
        command.env("CARGO_TARGET_DIR", repo_root.join("target"));
    }

    println!("xtask: rustup run esp cargo {}", cargo_args.join(" "));

    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("cargo failed (status: {status:?})").into())
    }
}
