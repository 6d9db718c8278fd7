use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use vidly::commands;
use vidly::config;
use vidly::data_provider::FixtureCatalog;
use vidly::tui;
use vidly::types::{SortField, SortOrder, SortSpec};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "vidly")]
#[command(about = "Movie catalog browser", long_about = "Movie catalog browser\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortFieldArg {
    /// Sort by title
    #[value(name = "title")]
    Title,
    /// Sort by genre name
    #[value(name = "genre")]
    Genre,
    /// Sort by rating
    #[value(name = "rating")]
    Rating,
    /// Sort by daily rental rate
    #[value(name = "rate")]
    Rate,
}

impl SortFieldArg {
    /// Convert CLI enum to types::SortField
    fn to_sort_field(self) -> SortField {
        match self {
            SortFieldArg::Title => SortField::Title,
            SortFieldArg::Genre => SortField::Genre,
            SortFieldArg::Rating => SortField::Rating,
            SortFieldArg::Rate => SortField::Rate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrderArg {
    /// Ascending
    #[value(name = "asc")]
    Asc,
    /// Descending
    #[value(name = "desc")]
    Desc,
}

impl SortOrderArg {
    /// Convert CLI enum to types::SortOrder
    fn to_sort_order(self) -> SortOrder {
        match self {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List movies in the catalog
    List {
        /// Show only titles starting with this text
        #[arg(short, long)]
        search: Option<String>,

        /// Show only movies in this genre
        #[arg(short, long, conflicts_with = "search")]
        genre: Option<String>,

        /// Sort by: title, genre, rating, rate
        #[arg(long, default_value = "title")]
        sort: SortFieldArg,

        /// Sort direction: asc, desc
        #[arg(long, default_value = "asc")]
        order: SortOrderArg,

        /// Page to display (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Movies per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// List genres with movie counts
    Genres,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("page_size: {}", cfg.page_size);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("header_fg: {:?}", cfg.display.header_fg);
    println!("liked_fg: {:?}", cfg.display.liked_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(
    provider: &FixtureCatalog,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::List {
            search,
            genre,
            sort,
            order,
            page,
            page_size,
        } => {
            let sort = SortSpec::new(sort.to_sort_field(), order.to_sort_order());
            commands::list::run(provider, search, genre, sort, page, page_size, config)
        }
        Commands::Genres => commands::genres::run(provider, config),
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let provider = FixtureCatalog::new();

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = tui::run(&provider, &config) {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.unwrap();

    // Handle Config command separately (doesn't need a provider)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&provider, command, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
