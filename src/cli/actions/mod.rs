pub mod server;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        cors_origins: Vec<String>,
        cors_credentials: bool,
    },
}
