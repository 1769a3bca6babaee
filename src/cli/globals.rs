#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub cors_origins: Vec<String>,
    pub cors_credentials: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(cors_origins: Vec<String>, cors_credentials: bool) -> Self {
        Self {
            cors_origins,
            cors_credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(vec!["http://localhost:3000".to_string()], false);
        assert_eq!(args.cors_origins, vec!["http://localhost:3000"]);
        assert!(!args.cors_credentials);
    }
}
