use aicode_client::config::{AppConfig, BackendConfig, Config, LogsConfig};
use std::collections::HashMap;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        backend: BackendConfig {
            base_url: base_url.to_string(),
            timeout_secs: 60,
            default_headers: HashMap::new(),
        },
        app: AppConfig {
            locale: "zh-CN".to_string(),
            mount_anchor: "#app".to_string(),
        },
        logs: LogsConfig {
            level: "debug".to_string(),
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config YAML file into the temp directory and return its path
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write test config");
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r##"
backend:
  base_url: "http://localhost:8123/api"
  timeout_secs: 30
  default_headers:
    X-Client: "aicode-tests"

app:
  locale: "en-US"
  mount_anchor: "#root"

logs:
  level: "debug"
"##;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
backend:
  base_url: 42
  timeout_secs: "not-a-number"
"#;
