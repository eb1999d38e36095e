use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::info;

use std::io;
use std::path::PathBuf;

use crate::config::{self, Config, ConfigError};
use crate::media::{Engine, Strictness};

use super::convert::{parse_breakpoints, parse_expressions, resolve_support_flags};
use super::output::{self, ConfigData, OutputMode, ParseData, QueryData};

#[derive(Parser)]
#[command(name = "mediaq")]
#[command(about = "Translate breakpoint conditions like >phone or <=tablet into CSS media queries")]
#[command(version)]
pub struct Cli {
    /// Path to config file (overrides MEDIAQ_CONFIG env var and default locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (auto-enabled when stdout is piped)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Force text output even when stdout is piped
    #[arg(long, global = true, conflicts_with = "json")]
    pub no_json: bool,

    /// Suppress all output on success (errors still go to stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.json, self.no_json, self.quiet)
    }
}

/// breakpoint/expression overrides shared by query and parse
#[derive(clap::Args, Debug, Default)]
pub struct OverrideArgs {
    /// Add or override a breakpoint for this call (e.g. -b custom=678px)
    #[arg(short = 'b', long = "breakpoint", value_name = "NAME=VALUE", action = ArgAction::Append)]
    pub breakpoints: Vec<String>,

    /// Add or override a media expression for this call (e.g. -e hover="(hover: hover)")
    #[arg(short = 'e', long = "expression", value_name = "NAME=VALUE", action = ArgAction::Append)]
    pub expressions: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose conditions into one media query
    Query {
        /// Conditions such as >phone, <=tablet, height>=40em, retina2x
        #[arg(required = true)]
        conditions: Vec<String>,

        /// Decide statically against the reference breakpoint (no media query support)
        #[arg(long = "static", conflicts_with = "dynamic")]
        static_mode: bool,

        /// Emit a media query even if the config disables media support
        #[arg(long, conflicts_with = "static_mode")]
        dynamic: bool,

        /// Breakpoint standing in for the viewport in static mode
        #[arg(long, value_name = "NAME")]
        reference: Option<String>,

        /// Warn about and drop conditions that cannot be resolved
        #[arg(long)]
        lenient: bool,

        /// Wrap this content in the resulting block
        #[arg(long, value_name = "CSS")]
        content: Option<String>,

        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Show how a single condition resolves
    Parse {
        /// Condition such as >phone or height<=40em
        condition: String,

        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "settings.static_breakpoint", "breakpoints.wide")
        key: String,
        /// Value to set
        value: String,
    },
    /// Show the default configuration
    Default,
    /// Verify configuration for errors
    Verify,
}

pub fn execute(cli: Cli) -> Result<()> {
    let output_mode = cli.output_mode();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Query {
            conditions,
            static_mode,
            dynamic,
            reference,
            lenient,
            content,
            overrides,
        } => {
            let config = config::load(config_path)?;
            let mut engine = Engine::from_config(&config);

            if let Some(media_support) = resolve_support_flags(static_mode, dynamic) {
                engine.set_media_support(media_support);
            }
            if let Some(reference) = reference {
                engine.fallback_mut().breakpoint = reference;
            }
            if lenient {
                engine.set_strictness(Strictness::Lenient);
            }

            let breakpoints = parse_breakpoints(&overrides.breakpoints)?;
            let expressions = parse_expressions(&overrides.expressions)?;

            let media = engine
                .with_context(&breakpoints, &expressions, |engine| engine.media(&conditions))
                .with_context(|| format!("failed to compose `{}`", conditions.join(" ")))?;
            info!(conditions = ?conditions, outcome = ?media, "composed");

            match output_mode {
                OutputMode::Json => {
                    output::print_json(&QueryData::new(&conditions, &media, content.as_deref()));
                }
                OutputMode::Text => match content {
                    Some(content) => {
                        if let Some(rendered) = media.render(&content) {
                            println!("{}", rendered);
                        }
                    }
                    None => match media.query() {
                        Some(query) => println!("{}", query),
                        None if media.applies() => println!("unconditional"),
                        None => println!("suppressed"),
                    },
                },
                OutputMode::Quiet => {}
            }
            Ok(())
        }

        Commands::Parse {
            condition,
            overrides,
        } => {
            let config = config::load(config_path)?;
            let mut engine = Engine::from_config(&config);

            let breakpoints = parse_breakpoints(&overrides.breakpoints)?;
            let expressions = parse_expressions(&overrides.expressions)?;

            let data = engine.with_context(&breakpoints, &expressions, |engine| {
                match engine.scope().tables().expression(&condition) {
                    Some(literal) => Ok(ParseData::expression(&condition, literal)),
                    None => engine
                        .parse(&condition)
                        .map(|parsed| ParseData::dynamic(&condition, &parsed)),
                }
            })?;

            match output_mode {
                OutputMode::Json => output::print_json(&data),
                OutputMode::Text => {
                    if let (Some(dimension), Some(prefix), Some(value)) =
                        (&data.dimension, data.prefix, &data.value)
                    {
                        println!("dimension: {}", dimension);
                        println!("prefix:    {}", prefix);
                        println!("value:     {}", value);
                    }
                    println!("clause:    {}", data.clause);
                }
                OutputMode::Quiet => {}
            }
            Ok(())
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = config::load(config_path)?;
                print_config(&config, output_mode)
            }
            ConfigCommands::Path => {
                let path = config::get_config_path(config_path);
                match output_mode {
                    OutputMode::Json => output::print_json(&ConfigData {
                        path: path.display().to_string(),
                        exists: path.exists(),
                        valid: None,
                        key: None,
                        value: None,
                    }),
                    OutputMode::Text => println!("{}", path.display()),
                    OutputMode::Quiet => {}
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                let path = config::get_config_path(config_path);
                let mut config = if path.exists() {
                    config::load_from(&path)?
                } else {
                    Config::default()
                };
                config::set_value(&mut config, &key, &value)?;
                config::save(&config, &path)?;

                match output_mode {
                    OutputMode::Json => output::print_json(&ConfigData {
                        path: path.display().to_string(),
                        exists: true,
                        valid: None,
                        key: Some(key),
                        value: Some(value),
                    }),
                    OutputMode::Text => println!("Set {} = {}", key, value),
                    OutputMode::Quiet => {}
                }
                Ok(())
            }
            ConfigCommands::Default => print_config(&Config::default(), output_mode),
            ConfigCommands::Verify => {
                let path = config::get_config_path(config_path);
                let exists = path.exists();
                let errors = if exists {
                    config::verify_file(&path)?
                } else if config_path.is_some() {
                    return Err(ConfigError::NotFound(path).into());
                } else {
                    config::verify(&Config::default())
                };

                if !errors.is_empty() {
                    return Err(ConfigError::Invalid(errors).into());
                }

                match output_mode {
                    OutputMode::Json => output::print_json(&ConfigData {
                        path: path.display().to_string(),
                        exists,
                        valid: Some(true),
                        key: None,
                        value: None,
                    }),
                    OutputMode::Text if exists => {
                        println!("✓ Configuration is valid: {}", path.display())
                    }
                    OutputMode::Text => println!("✓ No config file, defaults are valid"),
                    OutputMode::Quiet => {}
                }
                Ok(())
            }
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "mediaq", &mut io::stdout());
            Ok(())
        }
    }
}

fn print_config(config: &Config, output_mode: OutputMode) -> Result<()> {
    match output_mode {
        OutputMode::Json => output::print_json(config),
        OutputMode::Text => {
            let json =
                serde_json::to_string_pretty(config).context("failed to serialize config")?;
            println!("{}", json);
        }
        OutputMode::Quiet => {}
    }
    Ok(())
}
