use crate::cli::actions::Action;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        cors_origins: matches
            .get_many::<String>("cors-origin")
            .map_or_else(Vec::new, |origins| origins.cloned().collect()),
        cors_credentials: matches.get_flag("cors-credentials"),
    })
}
