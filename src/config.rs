use crate::errors::{FileOperation, IoError};
use clap::ArgMatches;
use std::{io, path::PathBuf};

/// Everything one invocation needs, resolved from the command line and the
/// process environment. There is no configuration file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub class_name: String,
    pub verbose: bool,
    pub base_dir: PathBuf,
}
impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, IoError> {
        Self::resolve(matches, std::env::current_dir())
    }

    fn resolve(matches: &ArgMatches, cwd: io::Result<PathBuf>) -> Result<Self, IoError> {
        let base_dir =
            cwd.map_err(|error| IoError::new(FileOperation::Stat, PathBuf::from("."), error))?;

        let class_name = matches
            .get_one::<String>("classname")
            .cloned()
            .unwrap_or_default();

        Ok(Self {
            class_name,
            verbose: matches.get_flag("verbose"),
            base_dir,
        })
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};

    fn command() -> Command {
        Command::new("mkplugin")
            .arg(Arg::new("classname").required(true))
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue),
            )
    }

    #[test]
    fn test_from_matches() {
        let matches = command().get_matches_from(["mkplugin", "-v", "EmailArchiver"]);

        let settings = Settings::from_matches(&matches).unwrap();

        assert_eq!(settings.class_name, "EmailArchiver");
        assert!(settings.verbose);
        assert_eq!(settings.default_log_filter(), log::LevelFilter::Debug);
        assert_eq!(settings.base_dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_quiet_by_default() {
        let matches = command().get_matches_from(["mkplugin", "EmailArchiver"]);

        let settings = Settings::from_matches(&matches).unwrap();

        assert_eq!(settings.default_log_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_unreadable_working_directory() {
        let matches = command().get_matches_from(["mkplugin", "EmailArchiver"]);
        let cwd = Err(io::Error::new(io::ErrorKind::NotFound, "deleted"));

        let error = Settings::resolve(&matches, cwd).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Stat));
        assert_eq!(error.path, PathBuf::from("."));
    }
}
