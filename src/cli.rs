use crate::config::Config;
use crate::{log_debug, log_info, log_warn};
use crate::theme::{self, ConvertOptions, TargetTheme};
use crate::ui;
use anyhow::{Context, Result};
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, crate_version};
use std::path::PathBuf;

const LOG_FILE: &str = "vsc-to-tm-debug.log";

/// CLI structure defining the available arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version = crate_version!(),
    about = "Convert a VS Code color theme into a TextMate .tmTheme",
    long_about = "Reads a VS Code color theme (JSON with comments and trailing commas allowed), \
                  maps its editor colors onto TextMate default settings and writes the result \
                  as an XML property list.",
    styles = get_styles(),
)]
pub struct Cli {
    /// VS Code theme to read
    #[arg(value_name = "INPUT", help = "VS Code theme file to read")]
    pub input: PathBuf,

    /// Path of the .tmTheme to write
    #[arg(value_name = "OUTPUT", help = "Path of the .tmTheme file to write")]
    pub output: PathBuf,

    /// Override the theme name
    #[arg(long, help = "Override the theme name written to the output")]
    pub name: Option<String>,

    /// Attach a generated UUID
    #[arg(long, help = "Attach a freshly generated UUID to the output theme")]
    pub uuid: bool,

    /// Custom configuration file
    #[arg(long, value_name = "PATH", help = "Read configuration from this file")]
    pub config: Option<PathBuf>,

    /// Log debug messages to a file
    #[arg(short = 'l', long = "log", help = "Log debug messages to a file")]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(long = "log-file", help = "Specify a custom log file path")]
    pub log_file: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,
}

impl Cli {
    /// Build conversion options from the configuration and command-line overrides
    pub fn convert_options(&self, config: &Config) -> ConvertOptions {
        let mut options = config.convert_options();
        options.name.clone_from(&self.name);
        if self.uuid || config.include_uuid {
            options.uuid = Some(generate_uuid());
        }
        options
    }
}

/// TextMate themes conventionally carry uppercase UUIDs
fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string().to_uppercase()
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and run the conversion
pub fn main() -> Result<()> {
    let cli = parse_args();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)
            .with_context(|| format!("Failed to open log file {log_file}"))?;
        crate::logger::set_verbose_logging(config.verbose_logging);
    } else {
        crate::logger::disable_logging();
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    log_debug!("Running with arguments: {:?}", cli);
    run(&cli, &config)
}

/// Convert the input theme and report the outcome
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let options = cli.convert_options(config);

    let converted = theme::convert_file(&cli.input, &cli.output, &options).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    report(cli, &converted);
    Ok(())
}

fn report(cli: &Cli, converted: &TargetTheme) {
    ui::print_conversion(
        &cli.input.display().to_string(),
        &cli.output.display().to_string(),
    );

    let default_keys = converted.defaults().map_or(0, |rule| rule.settings.len());
    ui::print_success(&format!(
        "Converted {} ({} rules, {} default settings)",
        converted.name.as_deref().unwrap_or("unnamed theme"),
        converted.rules().len(),
        default_keys
    ));

    log_info!(
        "Converted {} -> {}: {} rules",
        cli.input.display(),
        cli.output.display(),
        converted.rules().len()
    );

    let missing = theme::missing_defaults(converted);
    if !missing.is_empty() {
        log_warn!("Default settings missing: {:?}", missing);
        ui::print_warning(&format!(
            "Default settings missing: {}",
            missing.join(", ")
        ));
    }
}
