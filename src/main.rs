use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, Arg,
    ArgAction, Command,
};
use mkplugin::config::Settings;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("classname")
                .help("Name of the plugin class; also used for the output folder")
                .required(true),
        )
}

/// Parse failures that mean the argument count was wrong.
fn is_usage_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument | ErrorKind::TooManyValues
    )
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> ExitCode {
    let mut command = cli();

    let matches = match command.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) if is_usage_error(error.kind()) => {
            println!("Usage: provide classname for new plugin");
            println!("{}", command.render_usage());
            return ExitCode::from(1);
        }
        Err(error) => {
            // e.g. a class name that is not valid UTF-8
            let _ = error.print();
            return ExitCode::from(1);
        }
    };

    let settings = match Settings::from_matches(&matches) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            return ExitCode::from(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(settings.default_log_filter())
        .parse_default_env()
        .init();

    log::debug!("resolved settings: {:?}", settings);

    match mkplugin::new_plugin_in(&settings.base_dir, &settings.class_name) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_kind(args: &[&str]) -> ErrorKind {
        cli().try_get_matches_from(args).unwrap_err().kind()
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert!(is_usage_error(parse_kind(&["mkplugin"])));
        assert!(is_usage_error(parse_kind(&["mkplugin", "One", "Two"])));
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_is_not_usage_error() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let kind = cli()
            .try_get_matches_from([OsStr::new("mkplugin"), OsStr::from_bytes(&[0xff, 0xfe])])
            .unwrap_err()
            .kind();

        assert_eq!(kind, ErrorKind::InvalidUtf8);
        assert!(!is_usage_error(kind));
    }
}
