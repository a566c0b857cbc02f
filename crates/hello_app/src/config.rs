use std::fs;
use std::path::Path;

use anyhow::Context;
use hello_core::PageConfig;
use page_logging::page_info;

use crate::Cli;

/// Reads a RON page configuration; without a path the defaults are used.
/// Fields missing from the file keep their defaults.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: PageConfig =
        ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    page_info!("Loaded page config from {:?}", path);
    Ok(config)
}

/// Command-line flags win over the config file.
pub(crate) fn apply_overrides(config: &mut PageConfig, cli: &Cli) {
    if cli.reduced_motion {
        config.animator.reduced_motion = true;
    }
    if let Some(base_delay_ms) = cli.base_delay_ms {
        config.animator.base_delay_ms = base_delay_ms;
    }
    if let Some(tick_interval_ms) = cli.tick_interval_ms {
        config.animator.tick_interval_ms = tick_interval_ms;
    }
    if let Some(page_url) = &cli.page_url {
        config.page_url = page_url.clone();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.ron");
        fs::write(
            &path,
            "(animator: (base_delay_ms: 500, reduced_motion: true), page_url: \"https://example.com/\")",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.animator.base_delay_ms, 500);
        assert!(config.animator.reduced_motion);
        assert_eq!(config.animator.tick_interval_ms, 60);
        assert_eq!(config.page_url, "https://example.com/");
        assert_eq!(config.title_text, "Yes, Hello! Bet!");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.ron");
        fs::write(&path, "(animator: oops").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let cli = Cli::parse_from([
            "yeshello",
            "index.html",
            "--reduced-motion",
            "--tick-interval-ms",
            "25",
            "--page-url",
            "https://yeshello.lol/x",
        ]);
        let mut config = PageConfig::default();
        apply_overrides(&mut config, &cli);

        assert!(config.animator.reduced_motion);
        assert_eq!(config.animator.tick_interval_ms, 25);
        assert_eq!(config.animator.base_delay_ms, 1200);
        assert_eq!(config.page_url, "https://yeshello.lol/x");
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), PageConfig::default());
    }
}
