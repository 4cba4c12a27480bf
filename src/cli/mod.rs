#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

pub mod commands;

use clap::{Parser, Subcommand};
use eyre::{Context, Result};

use crate::config::{Configuration, load_configuration, lookup_config_path};

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    long_about = r#"A terminal chat client for a text-generation endpoint

Conversations are kept in a local store and can be resumed at any time.

Default configuration file location looks up in the following order:
    * $XDG_CONFIG_HOME/roomchat/config.toml
    * $HOME/.config/roomchat/config.toml
    * $HOME/.roomchat.toml
"#
)]
pub struct Command {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    subcommand: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Open the chat screen (default)
    Chat,
    /// List saved conversations
    List,
    /// Print the transcript of a conversation
    Show { id: String },
    /// Send one message and print the reply
    Send {
        /// Continue this conversation instead of starting a new one
        #[arg(long, value_name = "ID")]
        conversation: Option<String>,
        text: String,
    },
    /// Delete a conversation and its messages
    Delete { id: String },
    /// Check that the endpoint is reachable
    Health,
}

impl Command {
    pub fn new() -> Command {
        Self::parse()
    }

    /// Read `--config`, else the first file found by [`lookup_config_path`].
    /// Without either every setting keeps its default.
    pub fn get_config(&self) -> Result<Configuration> {
        match self.config.clone().or_else(lookup_config_path) {
            Some(path) => load_configuration(&path).wrap_err("loading configuration"),
            None => Ok(Configuration::default()),
        }
    }

    pub fn subcommand(&self) -> Commands {
        self.subcommand.clone().unwrap_or(Commands::Chat)
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}
