//! The `config` command.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::VersoConfig;
use crate::error::{Result, VersoError};

/// What `verso config` should do, resolved by the CLI from its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    Get(String),
    Set(String, String),
}

/// Reads or updates one config key. The caller persists the config after a
/// successful `Set`; this function only mutates the in-memory value.
pub fn run(config: &mut VersoConfig, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.add_message(CmdMessage::info(format!(
                "collection = {}",
                config.collection.as_deref().unwrap_or("(unset)")
            )));
            result.add_message(CmdMessage::info(format!(
                "manifest_file = {}",
                config.manifest_file
            )));
            result.add_message(CmdMessage::info(format!("image_ext = {}", config.image_ext)));
            result.add_message(CmdMessage::info(format!(
                "placeholder = {}",
                config.placeholder
            )));
        }
        ConfigAction::Get(key) => {
            let value = match key.as_str() {
                "collection" => config
                    .collection
                    .clone()
                    .unwrap_or_else(|| "(unset)".to_string()),
                "manifest_file" => config.manifest_file.clone(),
                "image_ext" => config.image_ext.clone(),
                "placeholder" => config.placeholder.clone(),
                _ => return Err(VersoError::Api(format!("Unknown config key: {}", key))),
            };
            result.add_message(CmdMessage::info(value));
        }
        ConfigAction::Set(key, value) => {
            let stored = match key.as_str() {
                "collection" => {
                    config.collection = if value.is_empty() {
                        None
                    } else {
                        Some(value.clone())
                    };
                    value
                }
                "manifest_file" => {
                    config.manifest_file = value.clone();
                    value
                }
                "image_ext" => {
                    config.set_image_ext(&value);
                    config.image_ext.clone()
                }
                "placeholder" => {
                    config.placeholder = value.clone();
                    value
                }
                _ => return Err(VersoError::Api(format!("Unknown config key: {}", key))),
            };
            result.add_message(CmdMessage::success(format!("Set {} = {}", key, stored)));
        }
    }

    Ok(result)
}
