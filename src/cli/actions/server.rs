use crate::api;
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            cors_origins,
            cors_credentials,
        } => {
            let globals = GlobalArgs::new(cors_origins, cors_credentials);

            api::new(port, &globals).await?;
        }
    }

    Ok(())
}
