pub mod app;
pub mod context;

use color_eyre::Result;
use app::{App, WindowConfig};
use context::config::ContextConfig;

/// `info` everywhere, but every validation message down to verbose
fn default_log_filter() -> String {
    format!("info,{}=trace", context::vk::VALIDATION_LOG_TARGET)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter()),
    )
    .init();

    let config = ContextConfig::from_env()?;
    log::info!(
        "Validation {} (layers: {:?})",
        if config.enable_validation { "enabled" } else { "disabled" },
        config.validation_layers,
    );

    let app = App::new(config, WindowConfig::default());
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Metadata};

    fn enabled(filter: &env_logger::filter::Filter, target: &str, level: Level) -> bool {
        filter.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn default_filter_shows_verbose_validation_messages() {
        let filter = env_logger::filter::Builder::new()
            .parse(&default_log_filter())
            .build();

        assert!(enabled(&filter, context::vk::VALIDATION_LOG_TARGET, Level::Trace));
        assert!(enabled(&filter, "vkboot::context", Level::Info));
        assert!(!enabled(&filter, "vkboot::context", Level::Debug));
    }
}
