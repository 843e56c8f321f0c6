use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Host run directory holding horsedebug.cfg
    #[arg(global = true, long, default_value = ".")]
    run_dir: PathBuf,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Scan(cmd::scan::ScanArgs),
    Inspect(cmd::inspect::InspectArgs),
    Toggle,
    Stats,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Scan(args) => cmd::scan::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Toggle => cmd::toggle::run(&cli.run_dir),
        Commands::Stats => {
            reports::print_stat_table();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
