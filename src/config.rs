use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit editor command; when unset the environment decides
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,
    #[serde(default = "default_true")]
    pub color: bool,
    /// Whether `list` offers to copy a viewed prompt to the clipboard
    #[serde(default = "default_true")]
    pub copy_on_list: bool,
}

fn default_true() -> bool {
    true
}

fn default_store_file() -> PathBuf {
    app_dir().join("prompts.json")
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompta")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            store_file: default_store_file(),
            color: true,
            copy_on_list: true,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.store_file.as_os_str().is_empty() {
            return Err(AppError::System(
                "Store file path cannot be empty".to_string(),
            ));
        }

        if let Some(editor) = &self.editor
            && editor.trim().is_empty()
        {
            return Err(AppError::System(
                "Editor command cannot be blank; remove the key to use the environment".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {e}")))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Resolve the editor command: explicit config value, then $VISUAL,
    /// then $EDITOR, then the platform default. The process environment
    /// is never mutated.
    pub fn resolve_editor(&self) -> String {
        if let Some(editor) = &self.editor
            && !editor.trim().is_empty()
        {
            return editor.clone();
        }

        for var in ["VISUAL", "EDITOR"] {
            if let Ok(editor) = std::env::var(var)
                && !editor.trim().is_empty()
            {
                return editor;
            }
        }

        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    }
}
