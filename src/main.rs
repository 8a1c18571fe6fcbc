//! Curve Motion Editor (headless).
//!
//! Spielt ein JSON-Szenario (Formkurve, Easing-Punkte, Modus) über den
//! Intent-Fluss ab und gibt die aufgezeichnete Trajektorie als JSON aus.
//!
//! Aufruf: `Curve-Motion-Editor <szenario.json> [--write-config]`

use curve_motion_editor::{scenario, EngineOptions, Scenario};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Curve Motion Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let mut args = std::env::args().skip(1);
        let Some(scenario_path) = args.next() else {
            anyhow::bail!("Aufruf: Curve-Motion-Editor <szenario.json> [--write-config]");
        };
        let write_config = args.any(|a| a == "--write-config");

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EngineOptions::config_path();
        let options = EngineOptions::load_from_file(&config_path);
        if write_config {
            options.save_to_file(&config_path)?;
        }

        let scenario = Scenario::load_from_file(std::path::Path::new(&scenario_path))?;
        let report = scenario::run(options, &scenario)?;

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
