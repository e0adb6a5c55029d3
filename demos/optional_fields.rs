//! Example demonstrating Option<T> for optional fields

use dotconf::{DotConf, DotEnv};

#[derive(Debug, DotConf)]
struct Config {
    // Required field
    pub app_name: String,

    // Optional fields - None if not set
    pub api_key: Option<String>,
    pub port: Option<u16>,
    pub debug: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    // Define only some keys
    let mut env = DotEnv::from_contents("APP_NAME=my-application\nPORT=8080\n");
    env.setup()?;

    let config = Config::from_dotenv(&env)?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // None
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Debug: {:?}", config.debug); // None

    Ok(())
}
