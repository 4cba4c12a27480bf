#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use chrono::Local;
use eyre::{Context, Result};
use log::LevelFilter;
use regex::{Captures, Regex};

use super::{Configuration, LogConfig};

pub fn load_configuration(config_path: &str) -> Result<Configuration> {
    let raw = fs::read_to_string(config_path).wrap_err(format!("reading {}", config_path))?;
    toml::from_str(&raw).wrap_err("parsing configuration")
}

/// Route `log` records to the configured file. The chat screen owns the
/// terminal, so nothing is ever logged to stdout or stderr.
pub fn init_logger(config: &LogConfig) -> Result<()> {
    let path = resolve_path(&config.file.path)
        .wrap_err(format!("resolving log file path {}", config.file.path))?;
    init_parent_dir(&path)?;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.file.append)
        .truncate(!config.file.append)
        .open(&path)
        .wrap_err(format!("opening log file {}", path))?;

    let mut builder = env_logger::Builder::new();
    builder.filter(None, LevelFilter::from_str(&config.level)?);
    for filter in &config.filters {
        let level = LevelFilter::from_str(&filter.level)
            .wrap_err(format!("log level of {}", filter.module))?;
        builder.filter(Some(&filter.module), level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}/{}:{} {} [{}] - {}",
                record.module_path().unwrap_or("unknown"),
                basename(record.file().unwrap_or("unknown")),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Expand `$VAR` and `${VAR}` (unset variables expand to nothing) and make
/// the result absolute.
pub fn resolve_path(path: &str) -> Result<String> {
    let env_var = Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").wrap_err("compiling regex")?;
    let expanded = env_var.replace_all(path, |caps: &Captures| {
        std::env::var(&caps[1]).unwrap_or_default()
    });

    let absolute = std::path::absolute(&*expanded)
        .wrap_err(format!("resolving path {}", expanded))?;
    Ok(absolute.to_string_lossy().into_owned())
}

/// The first existing file of:
/// * $XDG_CONFIG_HOME/roomchat/config.toml
/// * $HOME/.config/roomchat/config.toml
/// * $HOME/.roomchat.toml
pub fn lookup_config_path() -> Option<String> {
    let var = |key: &str| std::env::var(key).unwrap_or_else(|_| ".".to_string());
    [
        format!("{}/roomchat/config.toml", var("XDG_CONFIG_HOME")),
        format!("{}/.config/roomchat/config.toml", var("HOME")),
        format!("{}/.roomchat.toml", var("HOME")),
    ]
    .into_iter()
    .find(|candidate| Path::new(candidate).exists())
}

pub(crate) fn init_parent_dir(path: &str) -> Result<()> {
    let Some(dir) = Path::new(path).parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).wrap_err(format!("creating directory {}", dir.display()))
}
