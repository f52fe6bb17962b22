//! Build script for tablet-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monitor.toml and compiles it into the image

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tablet_core::MonitorConfig;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate monitor.toml
fn load_config() -> MonitorConfig {
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: monitor.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a monitor.toml configuration file.        ║\n\
            ║  Please create one in the tablet-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read monitor.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax and types; missing keys fall back to defaults
    let config: MonitorConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid monitor.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    // Value ranges, shared with the firmware's own checks
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in monitor.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!("cargo:warning=monitor.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `monitor_config.rs` with the validated values as a constant
fn generate_config(config: &MonitorConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let cal = &config.calibration;

    // `{:?}` keeps a decimal point on every float, so each is a valid f64 literal
    let source = format!(
        "/// Values from monitor.toml\n\
         pub const MONITOR_CONFIG: tablet_core::MonitorConfig = tablet_core::MonitorConfig {{\n    \
             bus: tablet_core::BusSettings {{\n        \
                 display_address: {:#04x},\n        \
                 frequency: {},\n        \
                 timeout_ms: {},\n    \
             }},\n    \
             sample_period_ms: {},\n    \
             calibration: tablet_core::Calibration {{\n        \
                 volts_per_count: {:?},\n        \
                 percent_per_volt: {:?},\n        \
                 span_gain: {:?},\n        \
                 span_offset: {:?},\n    \
             }},\n\
         }};\n",
        config.bus.display_address,
        config.bus.frequency,
        config.bus.timeout_ms,
        config.sample_period_ms,
        cal.volts_per_count,
        cal.percent_per_volt,
        cal.span_gain,
        cal.span_offset,
    );

    fs::write(out_dir.join("monitor_config.rs"), source).unwrap();
}
