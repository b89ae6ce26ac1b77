//! Soundlab CLI
//!
//! Command-line interface for the Soundlab sound toolkit.

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use soundlab::cli::{commands, Cli, Commands, Options};
use soundlab::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("Soundlab v{}", env!("CARGO_PKG_VERSION"));

    let options = cli.options();
    let result = match cli.command {
        Some(cmd) => handle_command(cmd, options),
        None => {
            println!("Soundlab v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{} ({})", e, e.error_code());
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands, options: Options) -> Result<()> {
    match cmd {
        Commands::Tone {
            freq,
            duration,
            output,
        } => commands::tone(freq, duration, &output, options),
        Commands::Melody {
            notes,
            duration,
            output,
        } => commands::melody(&notes, duration, &output, options),
        Commands::Twinkle { output } => commands::twinkle(&output, options),
        Commands::Volume {
            input,
            output,
            factor,
        } => commands::volume(&input, &output, factor, options),
        Commands::Reverse { input, output } => commands::reverse(&input, &output, options),
        Commands::Flipflop { input, output } => commands::flipflop(&input, &output, options),
        Commands::Static {
            input,
            output,
            probability,
        } => commands::static_noise(&input, &output, probability, options),
        Commands::Echo {
            input,
            output,
            delay,
        } => commands::echo(&input, &output, delay, options),
        Commands::Speed {
            input,
            output,
            rate,
        } => commands::speed(&input, &output, rate, options),
        Commands::Overlay { inputs, output } => commands::overlay(&inputs, &output, options),
        Commands::Chain {
            input,
            output,
            chain,
        } => commands::chain(&input, &output, &chain, options),
        Commands::Info { input } => commands::info(&input),
    }
}
