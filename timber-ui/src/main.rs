use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use gpui::Application;
use tracing::{debug, error, info};

use timber_ui::{
    app,
    components::WindowPreferences,
    config::{CliOverrides, Settings, env_lookup},
    logging, open_main_window, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Board-footage calculator for lumber purchases.
///
/// Keeps a running total of board feet for the current session and can ask
/// a text-generation backend for advice on what to build with it.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML settings file. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Advisory backend to use.
    #[arg(long)]
    backend: Option<String>,

    /// Model name passed to the advisory backend.
    #[arg(long)]
    model: Option<String>,

    /// Log filter, e.g. `debug` or `timber_core=trace,info`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not log to stdout.
    #[arg(long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())?.apply_overrides(CliOverrides {
        backend: cli.backend,
        model: cli.model,
        log_level: cli.log_level,
        log_file: cli.log_file,
    });

    logging::init_default_logging(settings.logging.level.as_deref());
    if let Some(path) = &settings.logging.file {
        logging::enable_file_logging(path)?;
    }
    if cli.quiet {
        logging::set_stdout_enabled(false)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let advisor_config = settings.advisor_config(env_lookup);
    debug!(backend = %advisor_config.backend, model = %advisor_config.model, "building advisor");
    let advisor = Arc::new(runtime.block_on(app::build_advisor(&advisor_config))?);
    let handle = runtime.handle().clone();

    info!("starting TimberTrack");
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx);
            if let Err(error) =
                open_main_window(cx, advisor, handle, WindowPreferences::default())
            {
                error!(%error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
