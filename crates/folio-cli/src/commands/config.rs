//! Building a `PagingConfig` from a file, flags and environment.

use anyhow::Context;
use folio_core::PagingConfig;
use tracing::debug;

use crate::cli::SettingsArgs;
use crate::error::{CliError, CliResult};
use crate::input::read_file;

/// Resolve settings with precedence flags > config file > defaults.
///
/// The config file must be valid on its own; flags then override individual
/// keys and the merged result is validated again.
pub fn resolve_config(settings: &SettingsArgs) -> CliResult<PagingConfig> {
    let mut config = match &settings.config {
        Some(path) => {
            let content = read_file(path)?;
            let loaded = PagingConfig::from_toml_str(&content)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            debug!(path = %path.display(), "Loaded paging config");
            loaded
        },
        None => PagingConfig::default(),
    };

    if let Some(per_page) = settings.per_page {
        config.per_page = per_page;
    }
    if let Some(template) = &settings.template {
        config.template = Some(template.clone());
    }
    if let Some(format) = &settings.output_path_template {
        config.output_path_template = Some(format.clone());
    }

    config.validate().map_err(CliError::from)?;
    debug!(?config, "Resolved paging config");
    Ok(config)
}

/// `folio config`: print the effective configuration as TOML.
pub fn show_config(settings: &SettingsArgs) -> CliResult<()> {
    let config = resolve_config(settings)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
