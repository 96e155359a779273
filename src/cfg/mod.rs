use std::fs;

use serde::Deserialize;

use crate::errors::{HjError, HjErrorKind, HjResult};
use crate::pathlib::FilePath;
use crate::span::Source;

pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `<root>/config.toml`. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HjConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub color: Option<bool>,
}

impl HjConfig {
    pub fn load(root: &FilePath) -> HjResult<HjConfig> {
        let path = root / CONFIG_FILE;
        if !path.is_file() {
            log::debug!("no config at {}, using defaults", path);
            return Ok(HjConfig::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config = HjConfig::from_toml(&contents).map_err(|mut err| {
            err.src = vec![Source::from(path.clone())];
            err
        })?;
        log::debug!("loaded config from {}: {:?}", path, config);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> HjResult<HjConfig> {
        Ok(toml::from_str(contents)?)
    }

    pub fn log_level(&self) -> HjResult<Option<log::LevelFilter>> {
        match &self.log_level {
            Some(level) => level.parse().map(Some).map_err(|_| HjError {
                msg: format!(
                    "invalid log level `{}` (expected one of off, error, warn, info, debug, trace)",
                    level
                ),
                src: vec![],
                kind: HjErrorKind::Config,
            }),
            None => Ok(None),
        }
    }
}
