//! The `tsbench` binary.

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsbench_cli::actions::ActionRegistry;
use tsbench_cli::config::WorkflowConfig;
use tsbench_cli::scheduler::JobScheduler;
use tsbench_cli::{CliError, RunContext};

/// Benchmark data generator and ingestion engine for a TSDB.
#[derive(Parser, Debug)]
#[command(name = "tsbench", version, disable_help_flag = true)]
struct Args {
    /// Sink host, overriding env and config file.
    #[arg(short = 'h', long)]
    host: Option<String>,

    /// Sink port.
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Sink user.
    #[arg(short = 'u', long)]
    user: Option<String>,

    /// Sink password.
    #[arg(short = 'p', long)]
    password: Option<String>,

    /// Workflow configuration file.
    #[arg(short = 'c', long, default_value = "tsbench.yaml")]
    config_file: String,

    /// Verbose logging (debug level).
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print help.
    #[arg(short = '?', long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(args: &Args) -> Result<WorkflowConfig, CliError> {
    let text = std::fs::read_to_string(&args.config_file).map_err(|source| {
        CliError::ConfigFile { path: args.config_file.clone(), source }
    })?;
    let mut config = WorkflowConfig::from_yaml(&text, &args.config_file)?;
    // Precedence: CLI > environment > YAML.
    config.apply_env()?;
    config.apply_cli(
        args.host.as_deref(),
        args.port,
        args.user.as_deref(),
        args.password.as_deref(),
    );
    Ok(config)
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = load_config(args)?;
    let context = Arc::new(RunContext::new(config));

    let stop = Arc::clone(&context.stop);
    if let Err(e) = ctrlc::set_handler(move || {
        tracing::warn!("interrupt received, stopping");
        stop.store(true, Ordering::Release);
    }) {
        tracing::warn!(error = %e, "could not install signal handler");
    }

    let actions = Arc::new(ActionRegistry::with_builtins());
    let scheduler = JobScheduler::new(Arc::clone(&context), actions);
    let result = scheduler.run();

    if context.stopped() && result.is_ok() {
        return Err(CliError::Interrupted);
    }
    result
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Interrupted) => {
            tracing::warn!("run interrupted");
            // Conventional exit code for SIGINT.
            ExitCode::from(130)
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
