use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finfit_cli::cli::{
    handle_budget_command, handle_entry_command, handle_ingest_command, handle_ledger_command,
    handle_payroll_command, handle_report_command, handle_routine_command, handle_workout_command,
    EntryCommands, IngestArgs, LedgerCommands, PayrollCommands, ReportCommands, WorkoutCommands,
};
use finfit_cli::config::{paths::FinfitPaths, settings::Settings};
use finfit_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finfit",
    version,
    about = "Payroll ledger, budget and gym log in plain markdown files",
    long_about = "finfit reads CFDI Nómina payroll documents into a markdown ledger, \
                  summarizes pay by month, quincena and year, and keeps a gym log \
                  with personal records next to a simple monthly budget."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directories and default files
    Init,

    /// Show current configuration and paths
    Config,

    /// Ingest payroll documents into the ledger
    Ingest(IngestArgs),

    /// Payroll documents and aggregates
    #[command(subcommand)]
    Payroll(PayrollCommands),

    /// Manual ledger entries
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Ledger listing and summaries
    #[command(subcommand)]
    Ledger(LedgerCommands),

    /// Gym sessions, reports and PRs
    #[command(subcommand, alias = "gym")]
    Workout(WorkoutCommands),

    /// Daily budget & routine reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the budget summary
    Budget {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a routine day as a markdown table
    Routine {
        /// Routine day (push, legs, pull) or "all"
        #[arg(default_value = "all")]
        day: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "finfit_cli=debug"
    } else {
        "finfit_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FinfitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing finfit at: {}", paths.base_dir().display());
            finfit_cli::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Drop payroll XML files into: {}", paths.inbox_dir().display());
            println!("Edit your budget in:         {}", paths.budget_file().display());
            println!();
            println!("Run 'finfit ingest' to record them in the ledger.");
        }
        Some(Commands::Config) => {
            println!("finfit Configuration");
            println!("====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Document inbox:    {}", paths.inbox_dir().display());
            println!("Document archive:  {}", paths.archive_dir().display());
            println!("Ledger directory:  {}", paths.ledger_dir().display());
            println!("Report directory:  {}", paths.report_dir().display());
            println!("Fitness logs:      {}", paths.fitness_dir().display());
            println!("Fitness reports:   {}", paths.fitness_report_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency:   {}", settings.default_currency);
            println!("  Week start: {}", settings.week_start);
            match &settings.budget_file {
                Some(path) => println!("  Budget:     {}", path.display()),
                None => println!("  Budget:     {}", paths.budget_file().display()),
            }
            let days: Vec<&str> = settings
                .catalog
                .days()
                .iter()
                .map(|d| d.name.as_str())
                .collect();
            println!("  Routines:   {}", days.join(", "));
        }
        Some(Commands::Ingest(args)) => {
            handle_ingest_command(&storage, &settings, args)?;
        }
        Some(Commands::Payroll(cmd)) => {
            handle_payroll_command(&storage, cmd)?;
        }
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Workout(cmd)) => {
            handle_workout_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget { json }) => {
            handle_budget_command(&storage, &settings, json)?;
        }
        Some(Commands::Routine { day }) => {
            handle_routine_command(&settings, &day)?;
        }
        None => {
            println!("finfit - payroll ledger, budget and gym log");
            println!();
            println!("Run 'finfit --help' for usage information.");
            if !storage.is_initialized() {
                println!("Run 'finfit init' to set up your data directory.");
            }
        }
    }

    Ok(())
}
