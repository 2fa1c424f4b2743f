use link_grid::{demo, GridConfig};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = GridConfig::load_from_file(&path)?;
            info!("Loaded configuration from {}", path);
            config
        }
        None => GridConfig::from_env(),
    };
    config.validate()?;

    let grid = demo::build_mesh(&config.mesh)?;
    demo::run_script(&grid, &config)?;
    Ok(())
}
