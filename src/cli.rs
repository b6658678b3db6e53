use crate::config::{Config, ConfigError};
use crate::game::CollisionPolicy;
use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: termsnake [<options>]

Play snake in the terminal.  Arrow keys steer, Space pauses, Q quits, and R
restarts.

Options:
  -c, --config <FILE>       Read configuration from <FILE>
      --wrap                Leaving the screen re-enters on the other side
      --wall                Leaving the screen ends the game
      --high-scores <FILE>  Keep the high score table in <FILE>
      --log-file <FILE>     Write log messages to <FILE>
  -v, --verbose             Log debug messages as well
  -h, --help                Show this help and exit
  -V, --version             Show the program version and exit
";

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliAction {
    Run(Arguments),
    Help,
    Version,
}

impl CliAction {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliAction, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("wrap") => args.collision = Some(CollisionPolicy::Wrap),
                Arg::Long("wall") => args.collision = Some(CollisionPolicy::Wall),
                Arg::Long("high-scores") => {
                    args.high_scores_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('v') | Arg::Long("verbose") => args.verbose = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(CliAction::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliAction::Version),
                Arg::Value(v) => {
                    return Err(lexopt::Error::UnexpectedArgument(v));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliAction::Run(args))
    }
}

/// Settings given on the command line.  Anything left unset falls back to
/// the configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) collision: Option<CollisionPolicy>,
    pub(crate) high_scores_file: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) verbose: bool,
}

impl Arguments {
    /// Load the configuration file named on the command line, or the
    /// default one if none was named, and apply the command line's
    /// overrides to it.
    ///
    /// An explicitly-named file must exist; the default one may be absent.
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(policy) = self.collision {
            config.game.collision = policy;
        }
        if let Some(ref path) = self.high_scores_file {
            config.files.high_scores_file.clone_from(path);
        }
        if self.log_file.is_some() {
            config.files.log_file.clone_from(&self.log_file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    fn parse(args: &[&str]) -> Result<CliAction, lexopt::Error> {
        CliAction::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), CliAction::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        let action = parse(&[
            "--config",
            "snake.toml",
            "--wall",
            "--high-scores=/tmp/hs.txt",
            "--log-file",
            "snake.log",
            "-v",
        ])
        .unwrap();
        assert_eq!(
            action,
            CliAction::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                collision: Some(CollisionPolicy::Wall),
                high_scores_file: Some(PathBuf::from("/tmp/hs.txt")),
                log_file: Some(PathBuf::from("snake.log")),
                verbose: true,
            })
        );
    }

    #[test]
    fn last_policy_wins() {
        let Ok(CliAction::Run(args)) = parse(&["--wall", "--wrap"]) else {
            panic!("expected Run");
        };
        assert_eq!(args.collision, Some(CollisionPolicy::Wrap));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["--wall", "-h"]).unwrap(), CliAction::Help);
        assert_eq!(parse(&["--version"]).unwrap(), CliAction::Version);
    }

    #[test]
    fn bad_args() {
        assert!(parse(&["--speed", "3"]).is_err());
        assert!(parse(&["extra"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn overrides() {
        let args = Arguments {
            config: None,
            collision: Some(CollisionPolicy::Wall),
            high_scores_file: Some(PathBuf::from("hs.txt")),
            log_file: None,
            verbose: false,
        };
        let mut config = Config::default();
        config.files.log_file = Some(PathBuf::from("from-config.log"));
        args.apply(&mut config);
        assert_eq!(config.game.collision, CollisionPolicy::Wall);
        assert_eq!(
            config.files,
            FileConfig {
                high_scores_file: PathBuf::from("hs.txt"),
                log_file: Some(PathBuf::from("from-config.log")),
            }
        );
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let args = Arguments {
            config: Some(tmpdir.path().join("nope.toml")),
            ..Arguments::default()
        };
        assert!(args.load_config().is_err());
    }

    #[test]
    fn explicit_config_is_read() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let path = tmpdir.path().join("snake.toml");
        fs_err::write(&path, "[game]\ncollision = \"wall\"\n").unwrap();
        let args = Arguments {
            config: Some(path),
            high_scores_file: Some(PathBuf::from("elsewhere.txt")),
            ..Arguments::default()
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.game.collision, CollisionPolicy::Wall);
        assert_eq!(config.files.high_scores_file, PathBuf::from("elsewhere.txt"));
    }
}
