use clap::Parser;
use colored::Colorize;
use designlint_core::cli::{self, Cli};
use designlint_core::exit::DesignLintExit;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("designlint_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("designlint_core=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> DesignLintExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(DesignLintExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            DesignLintExit::for_error(&e)
        }
    }
}
