use anyhow::{Context, Result};
use clap::Parser;
use modelt::catalog::{CatalogProvider, CatalogSnapshot, CommandProvider, FileProvider};
use modelt::cli::CliArgs;
use modelt::config::{self, EditorConfig};
use modelt::export;
use modelt::logging;
use modelt::runtime::Runtime;
use modelt::state::{ExitMode, Session};
use modelt::terminal::Terminal;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config_path = args.config.clone().or_else(config::config_file);
    let config_result = config_path
        .as_deref()
        .map(EditorConfig::read)
        .transpose()
        .map(Option::flatten);
    let settings = match &config_result {
        Ok(Some(loaded)) => loaded.clone(),
        _ => EditorConfig::default(),
    };

    let log_dir = args.log_dir.clone().or_else(config::logs_dir);
    logging::init(log_dir.as_deref(), &settings.log_filter);
    match config_result {
        Ok(Some(_)) => tracing::info!(path = ?config_path, "loaded config"),
        Ok(None) => tracing::debug!(path = ?config_path, "no config file, using defaults"),
        Err(e) => tracing::warn!(error = %e, "ignoring config, using defaults"),
    }

    let snapshot = if args.offline {
        CatalogSnapshot::builtin()
    } else {
        let provider = select_provider(&args, &settings);
        CatalogSnapshot::load(provider.as_ref())
            .context("could not load the field and model catalog")?
    };

    let format = args.format.unwrap_or(settings.export_format);
    let session = Session::start(snapshot);
    let terminal = Terminal::new().context("failed to open terminal")?;
    let mut runtime = Runtime::new(session, terminal);
    runtime.run().context("terminal session failed")?;

    let session = runtime.into_session();
    if session.exit_mode() == Some(ExitMode::Export) {
        let stdout = std::io::stdout();
        export::write_to(&mut stdout.lock(), session.export_document(), format)
            .context("failed to print the model")?;
    }
    tracing::info!(exit = ?session.exit_mode(), "session finished");
    Ok(())
}

fn select_provider(args: &CliArgs, settings: &EditorConfig) -> Box<dyn CatalogProvider> {
    if let (Some(types), Some(models)) = (&args.types_file, &args.models_file) {
        return Box::new(FileProvider::new(types.clone(), models.clone()));
    }
    let program = args.provider.clone().unwrap_or_else(|| settings.provider.clone());
    Box::new(CommandProvider::new(program))
}
