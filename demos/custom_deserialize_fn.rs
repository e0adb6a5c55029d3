//! Example demonstrating custom deserializer functions

use dotconf::{DotConf, DotEnv};
use serde::Deserialize;

// Custom deserializer for comma-separated strings
fn comma_separated(s: &str) -> Result<Vec<String>, String> {
    Ok(s.split(',').map(|s| s.trim().to_string()).collect())
}

#[derive(Debug, Deserialize)]
struct Limits {
    requests_per_minute: u32,
    burst: u32,
}

#[derive(Debug, DotConf)]
struct Config {
    // Default: uses FromValue
    pub app_name: String,
    pub port: u16,

    // Uses serde_json::from_str (JSON format)
    #[conf(deserializer = "serde_json::from_str")]
    pub json_tags: Vec<String>,

    // JSON into a struct of your own
    #[conf(deserializer = "serde_json::from_str")]
    pub limits: Limits,

    // Uses custom function (comma-separated)
    #[conf(deserializer = "comma_separated")]
    pub comma_tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let mut env = DotEnv::from_contents(
        r#"
APP_NAME=my-app
PORT=8080
JSON_TAGS='["prod","api","v2"]'
LIMITS='{"requests_per_minute": 600, "burst": 20}'
COMMA_TAGS=tag1, tag2, tag3
"#,
    );
    env.setup()?;

    let config = Config::from_dotenv(&env)?;

    println!("Configuration loaded:");
    println!("  App Name: {}", config.app_name);
    println!("  Port: {}", config.port);
    println!("  JSON Tags: {:?}", config.json_tags);
    println!(
        "  Limits: {} req/min (burst {})",
        config.limits.requests_per_minute, config.limits.burst
    );
    println!("  Comma Tags: {:?}", config.comma_tags);

    Ok(())
}
