use crate::commands::{CmdMessage, CmdResult};
use crate::config::JotConfig;
use crate::error::{JotError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultColor(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = JotConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if key != "default-color" {
                return Err(JotError::Api(format!("Unknown config key: {}", key)));
            }
        }
        ConfigAction::SetDefaultColor(value) => {
            config.set_default_color(&value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-color set to {}",
                config.default_color
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette;

    #[test]
    fn set_then_show_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::SetDefaultColor("purple".to_string()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().default_color, palette::PURPLE);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("font".to_string())).is_err());
    }

    #[test]
    fn invalid_color_is_rejected_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(
            dir.path(),
            ConfigAction::SetDefaultColor("mauve".to_string())
        )
        .is_err());
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), JotConfig::default());
    }
}
