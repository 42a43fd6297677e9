//! AOC CLI - Command-line interface for running the registered grid puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` wins over both
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    log::debug!("resolved config: {:?}", config);

    // Build registry with tag filtering
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);
    executor.inputs().check_dir()?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    formatter.print_missing(&executor.missing_inputs(&work_items));

    if !config.quiet {
        println!(
            "Running {} solver(s) with inputs from {}...",
            work_items.len(),
            executor.inputs().input_dir().display()
        );
    }

    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
