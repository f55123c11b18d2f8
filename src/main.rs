use anyhow::Context;
use clap::Parser;
use std::io;
use vtm_xp::adapters::presenter_for;
use vtm_xp::utils::{logger, validation::Validate};
use vtm_xp::{calculate_once, CliConfig, Command, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose, &settings.logging);

    tracing::info!("Starting vtm-xp");
    tracing::debug!("Resolved settings: {:?}", settings);

    let presenter = presenter_for(&settings.display);

    match config.command {
        Some(Command::Calc(args)) => {
            if let Err(e) = args.validate() {
                tracing::error!("❌ Input validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }

            let mut stdout = io::stdout().lock();
            calculate_once(&args.to_input(), presenter.as_ref(), &mut stdout)
                .context("Failed to print the result")?;
        }
        None => {
            let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), presenter);
            let summary = session.run().context("Interactive session failed")?;
            tracing::debug!("Completed {} calculation(s)", summary.calculations);
        }
    }

    Ok(())
}
