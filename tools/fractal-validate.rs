//! Validate a single field from the command line
//!
//! Prints `ok` (or the sanitized value) and exits 0 when the value is
//! accepted; prints the rejection message and exits 1 otherwise.
//!
//! ```text
//! fractal-validate address D7P2jVEK6JGiGepUGTAHqELKK8QJ8GCahZ
//! fractal-validate tags "art,music,demo"
//! fractal-validate sanitize "  some\tvalue "
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fractal_validation::utils::init_logging_from_config;
use fractal_validation::{
    sanitize_query_param, validate_address, validate_description, validate_feed_url,
    validate_hash, validate_price, validate_protobuf_action_type, validate_public_key,
    validate_quantity, validate_tags, validate_title, LoggingConfig, ValidationResult,
    ValidatorConfig,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Field {
    Address,
    Hash,
    PublicKey,
    Title,
    Description,
    FeedUrl,
    Quantity,
    Price,
    /// Comma-separated tag list
    Tags,
    ActionType,
    /// Print the sanitized query parameter
    Sanitize,
}

#[derive(Debug, Parser)]
#[command(name = "fractal-validate", version, about = "Validate a Fractal Engine input field")]
struct Args {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file
    #[arg(long)]
    log_filter: Option<String>,

    /// Field type to validate
    #[arg(value_enum)]
    field: Field,

    /// Raw value
    value: String,
}

fn parse_number(field: &str, value: &str) -> anyhow::Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{} is not a number: {}", field, e))
}

fn check(field: Field, value: &str) -> anyhow::Result<ValidationResult<()>> {
    let result = match field {
        Field::Address => validate_address(value),
        Field::Hash => validate_hash(value),
        Field::PublicKey => validate_public_key(value),
        Field::Title => validate_title(value),
        Field::Description => validate_description(value),
        Field::FeedUrl => validate_feed_url(value),
        Field::Quantity => validate_quantity("quantity", parse_number("quantity", value)?),
        Field::Price => validate_price("price", parse_number("price", value)?),
        Field::Tags => {
            let tags: Vec<&str> = if value.is_empty() {
                Vec::new()
            } else {
                value.split(',').collect()
            };
            validate_tags(&tags)
        }
        Field::ActionType => {
            let code: u32 = value
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("action type is not a number: {}", e))?;
            validate_protobuf_action_type(code)
        }
        Field::Sanitize => Ok(()),
    };
    Ok(result)
}

fn load_config(args: &Args) -> anyhow::Result<ValidatorConfig> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)?,
        None => ValidatorConfig::default(),
    };

    if let Some(filter) = &args.log_filter {
        config.logging = LoggingConfig {
            filter: Some(filter.clone()),
            ..config.logging
        };
    }

    Ok(config)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging_from_config(&config.logging);

    debug!(field = ?args.field, "validating value");

    if args.field == Field::Sanitize {
        println!("{}", sanitize_query_param(&args.value));
        return Ok(ExitCode::SUCCESS);
    }

    match check(args.field, &args.value)? {
        Ok(()) => {
            info!(field = ?args.field, "value accepted");
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            info!(field = ?args.field, error = %err, "value rejected");
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
