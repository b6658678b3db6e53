use crate::consts;
use crate::game::CollisionPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    pub(crate) game: GameConfig,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("termsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    /// Whether the edges of the terminal wrap around or are walls
    pub(crate) collision: CollisionPolicy,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path to the high score table.  Relative paths are relative to the
    /// current directory.
    pub(crate) high_scores_file: PathBuf,

    /// If set, log messages are appended to this file
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: PathBuf::from(consts::HIGH_SCORES_FILE),
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.collision, CollisionPolicy::Wrap);
        assert_eq!(cfg.files.high_scores_file, PathBuf::from("highscores.txt"));
        assert_eq!(cfg.files.log_file, None);
    }

    #[test]
    fn full_config() {
        let cfg = toml::from_str::<Config>(concat!(
            "[game]\n",
            "collision = \"wall\"\n",
            "\n",
            "[files]\n",
            "high-scores-file = \"/var/games/snake.txt\"\n",
            "log-file = \"/tmp/snake.log\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                game: GameConfig {
                    collision: CollisionPolicy::Wall
                },
                files: FileConfig {
                    high_scores_file: PathBuf::from("/var/games/snake.txt"),
                    log_file: Some(PathBuf::from("/tmp/snake.log")),
                },
            }
        );
    }

    #[test]
    fn partial_files_section() {
        let cfg = toml::from_str::<Config>("[files]\nlog-file = \"snake.log\"\n").unwrap();
        assert_eq!(cfg.files.high_scores_file, PathBuf::from("highscores.txt"));
        assert_eq!(cfg.files.log_file, Some(PathBuf::from("snake.log")));
    }

    #[test]
    fn unknown_key() {
        let r = toml::from_str::<Config>("[game]\nspeed = 3\n");
        assert!(r.is_err());
    }

    #[test]
    fn load_missing() {
        let tmpdir = TempDir::new().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_invalid() {
        let tmpdir = TempDir::new().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\ncollision = \"sideways\"\n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }
}
