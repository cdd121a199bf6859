//! Neonfolio - cyberpunk resume page (Dioxus).
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(any(target_arch = "wasm32", feature = "desktop"))]
fn main() {
    use dioxus::logger::tracing::Level;
    use neonfolio_frontend::app::App;

    #[cfg(not(target_arch = "wasm32"))]
    dotenv::dotenv().ok();

    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger was already initialised: {err}");
    }
    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // A native build of the web feature only hands over to the Dioxus CLI.
    // Reference types stay off so wasm-bindgen finds its intrinsics; the flag
    // is exported in the same shell that runs dx so its cargo child sees it.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{rustflags} -C target-feature=-reference-types")
    };
    let quoted = rustflags.replace('\'', "'\"'\"'");
    let status = std::process::Command::new("sh")
        .args(["-c", &format!("export RUSTFLAGS='{quoted}'; exec dx serve")])
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {e}");
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            eprintln!("Or build the desktop app: cargo run -p neonfolio-frontend --features desktop");
            std::process::exit(1);
        }
    }
}
