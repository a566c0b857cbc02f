mod config;
mod input;
mod logging;
mod render;
mod services;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hello_core::{Glossary, PageState, PageViewModel};
use hello_engine::{load_page_file, run_realtime, PageRuntime};
use page_logging::{page_info, page_warn};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::logging::{LogDestination, LogLevel, LogSettings};
use crate::render::RenderMode;

#[derive(Parser, Debug)]
#[command(name = "yeshello")]
#[command(about = "Play the YesHello.lol page script in the terminal", long_about = None)]
pub(crate) struct Cli {
    /// HTML page to load
    pub page: PathBuf,

    /// RON file with a page configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Charset of the page file when it has no BOM
    #[arg(long)]
    pub charset: Option<String>,

    /// Show every message in its final state right away
    #[arg(long)]
    pub reduced_motion: bool,

    /// Base delay between message starts, in milliseconds
    #[arg(long)]
    pub base_delay_ms: Option<u64>,

    /// Per-character reveal interval, in milliseconds
    #[arg(long)]
    pub tick_interval_ms: Option<u64>,

    /// Link used by the copy and share buttons
    #[arg(long)]
    pub page_url: Option<String>,

    /// Fallback clipboard file used when no system clipboard works
    #[arg(long, default_value = "yeshello-clipboard.txt")]
    pub clipboard_file: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log file, truncated on start
    #[arg(long, default_value = "yeshello.log")]
    pub log_file: PathBuf,

    /// Print each frame as a JSON line instead of text
    #[arg(long)]
    pub json: bool,

    /// Read page interactions (emoji, copy, share, ...) from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(&LogSettings {
        destination: cli.log,
        level: cli.log_level,
        file: cli.log_file.clone(),
    });

    let mut page_config = config::load_config(cli.config.as_deref())?;
    config::apply_overrides(&mut page_config, &cli);

    let snapshot = load_page_file(&cli.page, cli.charset.as_deref())
        .with_context(|| format!("loading page {}", cli.page.display()))?;

    let mut runtime = PageRuntime::new(
        PageState::new(page_config, Glossary::builtin()),
        services::host_services(&cli.clipboard_file),
    );
    runtime.load(snapshot);

    let (msg_tx, msg_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();

    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            page_warn!("Could not listen for ctrl-c: {}", err);
            return;
        }
        on_ctrl_c.cancel();
    });

    if cli.interactive {
        // Detached: a read still blocked at exit must not keep the process alive.
        input::spawn_stdin_reader(msg_tx, shutdown.clone())
            .context("starting stdin reader")?;
    } else {
        drop(msg_tx);
    }

    let mode = if cli.json {
        RenderMode::Json
    } else {
        RenderMode::Text
    };
    let render = |view: &PageViewModel| render::print_frame(view, mode);
    let runtime = run_realtime(runtime, msg_rx, shutdown, render).await;

    page_info!("page script finished, {} timers left", runtime.pending_timers());
    Ok(())
}
