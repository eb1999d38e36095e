mod schema;

pub use schema::{
    default_breakpoints, default_media_expressions, default_unit_intervals, Config, Settings,
    DEFAULT_STATIC_BREAKPOINT, DEFAULT_STATIC_EXPRESSIONS,
};

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::media::{parse_literal, Unit};

pub const CONFIG_ENV_VAR: &str = "MEDIAQ_CONFIG";

/// config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "mediaq.json5";

const CONFIG_DIR_NAME: &str = "mediaq";
const CONFIG_FILE_NAME: &str = "config.json5";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unknown config key `{0}`; valid keys are settings.media_support, settings.static_breakpoint, settings.static_expressions, settings.strict, breakpoints.<name>, media_expressions.<name>, unit_intervals.<unit>")]
    UnknownKey(String),

    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("config is invalid:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}

/// resolve which config file to use
///
/// order: explicit path, `MEDIAQ_CONFIG`, `./mediaq.json5` when it exists,
/// then `<config dir>/mediaq/config.json5`
pub fn get_config_path(override_path: Option<&Path>) -> PathBuf {
    pick_config_path(
        override_path,
        env::var_os(CONFIG_ENV_VAR),
        Path::new(LOCAL_CONFIG_FILE),
        dirs::config_dir(),
    )
}

fn pick_config_path(
    override_path: Option<&Path>,
    env_path: Option<OsString>,
    local: &Path,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    if local.exists() {
        return local.to_path_buf();
    }

    match config_dir {
        Some(dir) => dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        None => local.to_path_buf(),
    }
}

/// load the config, falling back to defaults when the file does not exist
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    let path = get_config_path(override_path);

    if !path.exists() {
        // an explicitly requested file has to be there
        if override_path.is_some() {
            return Err(ConfigError::NotFound(path).into());
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    load_from(&path)
}

/// read and parse a JSON5 config file
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config = parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(
        path = %path.display(),
        breakpoints = config.breakpoints.len(),
        expressions = config.media_expressions.len(),
        "loaded config"
    );
    Ok(config)
}

/// parse config text; JSON5 is a superset of JSON so plain JSON works too
pub fn parse(content: &str) -> Result<Config, String> {
    json5::from_str(content).map_err(|e| e.to_string())
}

pub fn save(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }
    }

    let content = serde_json::to_string_pretty(config).context("failed to serialize config")?;

    fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// check cross-table consistency and return one message per problem
pub fn verify(config: &Config) -> Vec<String> {
    let mut errors = Vec::new();
    let settings = &config.settings;

    if !config.breakpoints.contains_key(&settings.static_breakpoint) {
        errors.push(format!(
            "settings.static_breakpoint: unknown breakpoint '{}'",
            settings.static_breakpoint
        ));
    }

    for (i, name) in settings.static_expressions.iter().enumerate() {
        if !config.media_expressions.contains_key(name) {
            errors.push(format!(
                "settings.static_expressions[{}]: unknown media expression '{}'",
                i, name
            ));
        }
    }

    for (name, value) in &config.breakpoints {
        if !config.unit_intervals.contains_key(&value.unit) {
            errors.push(format!(
                "breakpoints.{}: no unit interval defined for {}",
                name,
                value.unit.describe()
            ));
        }
        if config.media_expressions.contains_key(name) {
            errors.push(format!(
                "breakpoints.{}: name is also a media expression",
                name
            ));
        }
    }

    for (name, literal) in &config.media_expressions {
        if literal.trim().is_empty() {
            errors.push(format!("media_expressions.{}: expression is empty", name));
        }
    }

    for (unit, interval) in &config.unit_intervals {
        if !interval.is_finite() || *interval < 0.0 {
            errors.push(format!(
                "unit_intervals.{}: interval must be a non-negative number, got {}",
                unit.describe(),
                interval
            ));
        }
    }

    errors
}

/// load a config file and verify it
pub fn verify_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let config = load_from(path)?;
    Ok(verify(&config))
}

pub fn set_value(config: &mut Config, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };

    // names may contain dots, so only split off the table
    let (table, name) = key.split_once('.').unwrap_or((key, ""));

    match (table, name) {
        ("settings", "media_support") => {
            config.settings.media_support = parse_bool(value).map_err(invalid)?;
        }
        ("settings", "strict") => {
            config.settings.strict = parse_bool(value).map_err(invalid)?;
        }
        ("settings", "static_breakpoint") => {
            config.settings.static_breakpoint = value.trim().to_string();
        }
        ("settings", "static_expressions") => {
            config.settings.static_expressions = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        ("breakpoints", name) if !name.is_empty() => {
            let length = parse_literal(value.trim()).map_err(|e| invalid(e.to_string()))?;
            config.breakpoints.insert(name.to_string(), length);
        }
        ("media_expressions", name) if !name.is_empty() => {
            if value.trim().is_empty() {
                return Err(invalid("expression must not be empty".to_string()));
            }
            config
                .media_expressions
                .insert(name.to_string(), value.to_string());
        }
        ("unit_intervals", unit) if !unit.is_empty() => {
            // the unitless entry is addressed by name since its suffix is empty
            let unit = match unit {
                "unitless" => Unit::Unitless,
                other => Unit::parse(other).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?,
            };
            let interval: f64 = value
                .trim()
                .parse()
                .map_err(|_| invalid("expected a number".to_string()))?;
            if !interval.is_finite() || interval < 0.0 {
                return Err(invalid("interval must be non-negative".to_string()));
            }
            config.unit_intervals.insert(unit, interval);
        }
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }

    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err("use true/false, yes/no, 1/0, or on/off".to_string()),
    }
}
