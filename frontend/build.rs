// Desktop builds on Linux link against libxdo and WebKitGTK; fail early with a
// readable message instead of a linker error.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if is_desktop && is_linux {
        let missing: Vec<&str> = [("libxdo", "libxdo"), ("webkit2gtk-4.1", "webkit2gtk")]
            .into_iter()
            .filter(|(pc, lib)| !has_library(pc, lib))
            .map(|(pc, _)| pc)
            .collect();
        if !missing.is_empty() {
            report_missing(&missing);
        }
    }
}

fn has_library(pkg_config_name: &str, ldconfig_hint: &str) -> bool {
    // libxdo often ships without a .pc file, so fall back to the linker cache.
    std::process::Command::new("pkg-config")
        .args(["--exists", pkg_config_name])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(ldconfig_hint))
            .unwrap_or(false)
}

fn report_missing(missing: &[&str]) {
    eprintln!();
    eprintln!("  error: the neonfolio desktop build on Linux needs: {}", missing.join(", "));
    eprintln!();
    eprintln!("  Install the development packages, then run again:");
    eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel webkit2gtk4.1-devel");
    eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev libwebkit2gtk-4.1-dev");
    eprintln!();
    eprintln!("  Then: cargo run -p neonfolio-frontend --features desktop");
    eprintln!();
    std::process::exit(1);
}
