use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("ensaluti")
        .about("Minimal email/password authentication service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ENSALUTI_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("cors-origin")
                .long("cors-origin")
                .help("Allowed CORS origins, comma separated")
                .default_value("http://localhost:3000")
                .env("ENSALUTI_CORS_ORIGINS")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("cors-credentials")
                .long("cors-credentials")
                .help("Allow credentials on cross-origin requests")
                .env("ENSALUTI_CORS_CREDENTIALS")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ENSALUTI_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ensaluti");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Minimal email/password authentication service"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_port_and_origins() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "ensaluti",
            "--port",
            "8080",
            "--cors-origin",
            "http://localhost:3000,https://app.ensaluti.dev",
        ]);

        assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(8080));
        assert_eq!(
            matches
                .get_many::<String>("cors-origin")
                .map(|origins| origins.cloned().collect::<Vec<_>>()),
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://app.ensaluti.dev".to_string()
            ])
        );
        assert!(!matches.get_flag("cors-credentials"));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ENSALUTI_PORT", Some("443")),
                ("ENSALUTI_CORS_ORIGINS", Some("https://app.ensaluti.dev")),
                ("ENSALUTI_CORS_CREDENTIALS", Some("true")),
                ("ENSALUTI_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);
                assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(443));
                assert_eq!(
                    matches
                        .get_many::<String>("cors-origin")
                        .map(|origins| origins.cloned().collect::<Vec<_>>()),
                    Some(vec!["https://app.ensaluti.dev".to_string()])
                );
                assert!(matches.get_flag("cors-credentials"));
                assert_eq!(matches.get_one::<u8>("verbosity").map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_defaults() {
        temp_env::with_vars(
            [
                ("ENSALUTI_PORT", None::<String>),
                ("ENSALUTI_CORS_ORIGINS", None),
                ("ENSALUTI_CORS_CREDENTIALS", None),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);
                assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(8080));
                assert_eq!(
                    matches
                        .get_many::<String>("cors-origin")
                        .map(|origins| origins.cloned().collect::<Vec<_>>()),
                    Some(vec!["http://localhost:3000".to_string()])
                );
                assert!(!matches.get_flag("cors-credentials"));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ENSALUTI_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("ENSALUTI_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["ensaluti".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
