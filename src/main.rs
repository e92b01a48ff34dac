use clap::Parser;
use std::io;
use triangle_check::utils::{logger, validation::Validate};
use triangle_check::{ArgsSource, CliConfig, PromptSession, ReaderSource, TriangleError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.validate().and_then(|_| config.input_settings()) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let stdout = io::stdout();
    let result = if config.batch_mode() {
        let source = ArgsSource::new(config.sides.iter().cloned());
        PromptSession::new(source, settings, stdout.lock()).run()
    } else {
        let source = ReaderSource::new(io::stdin().lock());
        PromptSession::new(source, settings, stdout.lock()).run()
    };

    match result {
        Ok(verdict) => tracing::debug!("Session finished: {:?}", verdict),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: TriangleError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
