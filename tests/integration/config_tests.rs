//! Configuration loading tests

#[cfg(test)]
mod tests {
    use chat_relay::config::{Config, GatewayConfig};
    use chat_relay::server::HttpServer;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_then_env_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  port: 8080\nrate_limit:\n  max_requests: 20\nproviders:\n  anthropic:\n    default_model: claude-3-5-haiku-latest"
        )
        .unwrap();

        let mut config = Config::from_file(file.path()).await.unwrap();
        let env: HashMap<&str, &str> = [
            ("RELAY_PORT", "9090"),
            ("CLAUDE_API_KEY", "secret"),
        ]
        .into_iter()
        .collect();
        config
            .gateway
            .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server().port, 9090);
        assert_eq!(config.rate_limit().max_requests, 20);
        assert_eq!(config.providers().anthropic.default_model, "claude-3-5-haiku-latest");
        assert_eq!(config.providers().anthropic.api_key.as_deref(), Some("secret"));
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server: [not, a, map]").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_example_config_parses() {
        let example = include_str!("../../config/gateway.yaml.example");
        let gateway: GatewayConfig = serde_yaml::from_str(example).unwrap();
        assert!(gateway.validate().is_ok());
        assert!(gateway.providers.gemini.api_key.is_none());
    }

    #[actix_web::test]
    async fn test_server_builds_without_api_keys() {
        let server = HttpServer::new(&Config::default()).await.unwrap();
        assert_eq!(server.state().routes.len(), 3);
    }
}
