//! Tag extractor: count the non-stop-word words of a text file

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;
use tag_extractor::cli::{self, Cli, Commands, ConfigAction};
use tag_extractor::config::Config;
use tag_extractor::error::{Result, TagExtractorError};
use tag_extractor::output::{ReportGenerator, TagReport};
use tag_extractor::processing::{ExtractionRequest, TagPipeline};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Extract {
            text,
            stop_words,
            output,
            save,
            no_color,
        } => {
            if let Some(format) = output {
                config.output.format = cli::parse_output_format(&format)
                    .map_err(TagExtractorError::InvalidInput)?;
            }
            if no_color {
                config.output.color_output = false;
            }

            if let Err(e) = cli::validate_file_extension(&text, &["txt", "text"]) {
                warn!("{}: {}", text.display(), e);
            }

            let mut request = ExtractionRequest::new(text);
            if let Some(path) = stop_words {
                request = request.with_stop_words(path);
            }

            let pipeline = TagPipeline::new(config.bundled_stop_words());
            let result = pipeline.run(&request)?;
            let report = TagReport::from_result(&result);

            let generator = ReportGenerator::from_config(&config.output);
            print!("{}", generator.generate_report(&report, config.output.format)?);

            if let Some(path) = save {
                let path = cli::resolve_save_path(path, config.output.format);
                generator.save_report(&report, config.output.format, &path)?;
                println!("Saved to: {}", cli::saved_location(&path).display());
            }
        }

        Commands::Config { action } => {
            let location = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration ({})\n", location.display());
                    println!("Bundled stop words: {}", config.bundled_stop_words().display());
                    println!("Output format: {:?}", config.output.format);
                    println!("Colored output: {}", config.output.color_output);
                    println!("Pretty JSON: {}", config.output.pretty_json);
                    println!("Tag column width: {}", config.output.tag_column_width);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", location.display());
                }

                Some(ConfigAction::Reset) => {
                    info!("Resetting configuration at {}", location.display());
                    Config::default().save_to(&location)?;
                    println!("Configuration reset to defaults");
                }
            }
        }
    }

    Ok(())
}
