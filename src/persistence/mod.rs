use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use tracing::{
    info,
    warn,
};

use crate::core::{
    ChooserError,
    ChooserOptions,
};

const APP_NAME: &str = "ontology-chooser";
pub const OPTIONS_FILE: &str = "chooser.json";

pub fn get_app_config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn default_options_path() -> PathBuf {
    get_app_config_dir().join(OPTIONS_FILE)
}

pub fn load_options(path: &Path) -> Result<ChooserOptions, ChooserError> {
    if !path.exists() {
        return Ok(ChooserOptions::default());
    }

    let json = fs::read_to_string(path)?;
    let options: ChooserOptions = serde_json::from_str(&json)?;
    info!("Options loaded from: {}", path.display());
    Ok(options)
}

pub fn load_options_or_default(path: &Path) -> ChooserOptions {
    match load_options(path) {
        Ok(options) => options,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            ChooserOptions::default()
        }
    }
}

pub fn save_options(options: &ChooserOptions, path: &Path) -> Result<(), ChooserError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(options)?;
    fs::write(path, json)?;
    info!("Options saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldDescriptor;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = load_options(&dir.path().join(OPTIONS_FILE)).unwrap();
        assert_eq!(options, ChooserOptions::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(OPTIONS_FILE);
        let options = ChooserOptions {
            min_length: 4,
            spinner: None,
            fields: vec![FieldDescriptor {
                name: "species".to_string(),
                rel: "ontology-1132-name".to_string(),
            }],
            ..Default::default()
        };

        save_options(&options, &path).unwrap();
        assert_eq!(load_options(&path).unwrap(), options);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE);
        fs::write(&path, "{ minLength: ").unwrap();

        assert!(matches!(load_options(&path), Err(ChooserError::Json(_))));
        assert_eq!(load_options_or_default(&path), ChooserOptions::default());
    }
}
