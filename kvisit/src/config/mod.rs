mod decorator_kind;
mod error;

use std::path::{Path, PathBuf};

use kvisit_base::consts;
use kvisit_cli::config::LogConfig;
use kvisit_visitor::Record;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{decorator_kind::DecoratorKind, error::Error};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_record")]
    pub record: Record,

    #[serde(default = "default_decorators")]
    pub decorators: Vec<DecoratorKind>,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record: default_record(),
            decorators: default_decorators(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Commented configuration printed by `kvisit default-config`.
    pub const TEMPLATE: &'static str = include_str!("template.yaml");

    /// Returns the first existing configuration file among the default
    /// locations.
    pub fn search_config_file_path() -> Option<PathBuf> {
        Self::default_path()
            .into_iter()
            .chain(kvisit_base::fallback_project_config_directories().into_iter().map(|mut path| {
                path.push(kvisit_base::CLI_CONFIG_NAME);
                path
            }))
            .find(|path| path.try_exists().unwrap_or(false))
    }

    #[inline]
    pub fn default_path() -> Option<PathBuf> {
        kvisit_base::PROJECT_CONFIG_DIR.as_ref().map(|dir| dir.join(kvisit_base::CLI_CONFIG_NAME))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }
}

fn default_record() -> Record {
    Record {
        namespace: consts::DEFAULT_NAMESPACE.to_string(),
        name: consts::DEFAULT_NAME.to_string(),
        auxiliary: consts::DEFAULT_AUXILIARY.to_string(),
    }
}

fn default_decorators() -> Vec<DecoratorKind> {
    vec![DecoratorKind::Name, DecoratorKind::Auxiliary]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_template_matches_default() {
        let config: Config = serde_yaml::from_str(Config::TEMPLATE).expect("template is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("empty mapping is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_record_keeps_missing_fields_empty() {
        let config: Config =
            serde_yaml::from_str("record:\n  name: nginx\ndecorators: [validate]\n").unwrap();
        assert_eq!(config.record.name, "nginx");
        assert!(config.record.namespace.is_empty());
        assert_eq!(config.decorators, vec![DecoratorKind::Validate]);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("kvisit-config-{}.yaml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(b"record:\n  namespace: kube-system\n  name: coredns\ndecorators: []\n")
                .unwrap();
        }

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.record.namespace, "kube-system");
        assert_eq!(config.record.name, "coredns");
        assert!(config.decorators.is_empty());
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Config::load("/nonexistent-kvisit-dir/config.yaml").unwrap_err();
        assert!(matches!(err, Error::OpenConfig { .. } | Error::ResolveFilePath { .. }));
    }
}
