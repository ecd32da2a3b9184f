//! # Config Command Implementation
//!
//! This module implements the `config` subcommand, which reads and writes
//! `.gyt/config.json`.
//!
//! ## Forms
//!
//! - `gyt config` prints the whole configuration as JSON
//! - `gyt config KEY` prints one value (or a JSON sub-tree for a section)
//! - `gyt config KEY VALUE` sets a value, creating sections as needed

use anyhow::Result;
use clap::Args;
use console::style;
use serde_json::Value;

use gyt::error::Error;
use gyt::suggestions;

use super::Context;

/// Get or set configuration values
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key (e.g., user.name)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Config value
    #[arg(value_name = "VALUE", requires = "key")]
    pub value: Option<String>,
}

/// Execute the `config` command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;

    match (args.key, args.value) {
        (Some(key), Some(value)) => {
            repo.set_config(&key, &value).map_err(suggestions::explain)?;
            println!("{}", style(format!("Set {} = {}", key, value)).green());
        }
        (Some(key), None) => {
            let config = repo.config()?;
            let found = config
                .get(&key)
                .map_err(suggestions::explain)?
                .ok_or_else(|| {
                    suggestions::explain(Error::ConfigKeyNotFound { key: key.clone() })
                })?;
            println!("{}", render_entry(&key, found)?);
        }
        (None, _) => {
            let config = repo.config()?;
            println!("{}", config.to_pretty_json()?);
        }
    }
    Ok(())
}

/// `key = value` for scalars, `key = ` followed by pretty JSON for sections.
fn render_entry(key: &str, value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => format!("{} = {}", key, s),
        Value::Object(_) | Value::Array(_) => {
            format!("{} = {}", key, serde_json::to_string_pretty(value)?)
        }
        other => format!("{} = {}", key, other),
    })
}
