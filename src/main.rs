use bivium_icons::Config;
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();

    match bivium_icons::generate(&config.output_dir) {
        Ok(written) => {
            info!(
                "All {} Bivium icons created in {}",
                written.len(),
                config.output_dir.display()
            );
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
