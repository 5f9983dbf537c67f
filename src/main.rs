use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use calckitchen::{export, format_quantity, RecipeScaler, ScalerConfig};

#[derive(Parser)]
#[command(name = "calckitchen")]
#[command(about = "Scale recipe ingredients and render friendly quantities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a list of ingredients, one per line
    Scale {
        /// Ingredient file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Read the ingredients from a recipe page instead
        #[arg(long, conflicts_with = "input")]
        url: Option<String>,

        /// Multiply every quantity by this factor
        #[arg(short, long, allow_negative_numbers = true, conflicts_with_all = ["servings", "to"])]
        factor: Option<f64>,

        /// Servings the recipe makes (defaults to the page's yield with --url)
        #[arg(short, long, requires = "to")]
        servings: Option<f64>,

        /// Servings wanted
        #[arg(short, long)]
        to: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show how a decimal quantity is displayed
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Scaled lines only
    Text,
    /// Summary with header and notes
    Clipboard,
    /// Full parse results
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = ScalerConfig::load()?;
    debug!("{:#?}", config);

    match cli.command {
        Commands::Scale {
            input,
            url,
            factor,
            servings,
            to,
            format,
        } => {
            let mut builder = RecipeScaler::builder().config(config.clone());

            builder = match (url, input) {
                (Some(url), _) => builder.url(url),
                (None, Some(path)) => builder.text(std::fs::read_to_string(path)?),
                (None, None) => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    builder.text(text)
                }
            };

            builder = match (factor, servings, to) {
                (Some(factor), _, _) => builder.factor(factor),
                (None, Some(original), Some(desired)) => builder.servings(original, desired),
                (None, None, Some(desired)) => builder.desired_servings(desired),
                _ => builder,
            };

            let recipe = builder.build().await?;

            let output = match format {
                OutputFormat::Text => export::to_text(&recipe),
                OutputFormat::Clipboard => export::to_clipboard_text(&recipe, config.export.decimals),
                OutputFormat::Json => export::to_json(&recipe)?,
            };
            println!("{}", output.trim_end());
        }

        Commands::Format { value } => {
            println!("{}", format_quantity(value));
        }
    }

    Ok(())
}
