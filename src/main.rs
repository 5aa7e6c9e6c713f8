use anyhow::Result;
use clap::{Parser, Subcommand};
use mealweek_recipe::Category;

/// mealweek - The week's meals at a glance
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Weekly meal plan and recipe site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the week starting today
    Week {
        /// Weekday name or 0-6 (Sunday first) to treat as today
        #[arg(long)]
        day: Option<String>,
    },
    /// List recipes by category
    Recipes {
        /// Only this category (breakfast, lunch, dinner)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Validate the recipe catalog and weekly schedule
    Check,
    /// List image paths referenced by recipes
    Images {
        /// Only images absent from the images directory
        #[arg(long)]
        missing: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealweek::config::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    mealweek::observability::init_observability(
        "mealweek",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mealweek::cli::serve(config, host, port).await,
        Commands::Week { day } => mealweek::cli::week(&config, day),
        Commands::Recipes { category } => mealweek::cli::recipes(&config, category),
        Commands::Check => mealweek::cli::check(&config),
        Commands::Images { missing } => mealweek::cli::images(&config, missing),
    }
}
