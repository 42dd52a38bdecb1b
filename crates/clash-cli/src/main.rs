use anyhow::{Context, Result};
use clap::Parser;
use clash_core::CategoryTable;
use clash_store::EventFile;
use tracing_subscriber::EnvFilter;

use clash_cli::commands::{
    add, categories, clear, conflicts, day, edit, list, remove, show, util::load_calendar,
};
use clash_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_events_path(cli.events);
    tracing::debug!(?config, "loaded configuration");

    let file = EventFile::new(&config.events_path);
    let category_table = CategoryTable::default();
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Conflicts { json } => {
            conflicts::run(&mut stdout, &load_calendar(&file)?, json)?;
        }
        Commands::Day { date, json } => {
            day::run(&mut stdout, &load_calendar(&file)?, date, json)?;
        }
        Commands::Show { id } => {
            show::run(&mut stdout, &load_calendar(&file)?, &id, &category_table)?;
        }
        Commands::List(args) => {
            list::run(&mut stdout, &load_calendar(&file)?, &args)?;
        }
        Commands::Add(args) => {
            add::run(&mut stdout, &file, args, &config, &category_table)?;
        }
        Commands::Edit(args) => {
            edit::run(&mut stdout, &file, &args, &config, &category_table)?;
        }
        Commands::Remove { id } => {
            remove::run(&mut stdout, &file, &id)?;
        }
        Commands::Clear => {
            clear::run(&mut stdout, &file)?;
        }
        Commands::Categories => {
            categories::run(&mut stdout, &category_table)?;
        }
    }

    Ok(())
}
