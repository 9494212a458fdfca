use std::path::Path;

use vantage::options::{ControllerMode, Options};
use vantage::Viewer;

/// Resolve the single CLI argument: a controller name, a TOML preset
/// path, or nothing (defaults).
fn resolve_options(arg: Option<&str>) -> Result<Options, String> {
    match arg {
        None | Some("orbit") => Ok(Options::default()),
        Some("flying") => {
            let mut options = Options::default();
            options.camera.mode = ControllerMode::Flying;
            Ok(options)
        }
        Some(path) => Options::load(Path::new(path))
            .map_err(|e| format!("failed to load preset {path}: {e}")),
    }
}

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let options = match resolve_options(arg.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: vantage [orbit|flying|<preset.toml>]");
            std::process::exit(1);
        }
    };

    log::info!("controller: {:?}", options.camera.mode);

    if let Err(e) = Viewer::builder()
        .with_options(options)
        .with_title("Vantage")
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
