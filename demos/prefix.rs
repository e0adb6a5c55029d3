//! Example demonstrating prefix attribute

use dotconf::{DotConf, DotEnv};

#[derive(Debug, DotConf)]
#[conf(prefix = "MYAPP_")]
struct Config {
    // Keys are prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    pub database_url: String,
    pub api_key: String,

    #[conf(default = 8080)]
    pub port: u16,

    #[conf(default)]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    let mut env = DotEnv::from_contents(
        "MYAPP_DATABASE_URL=postgres://localhost/db\nMYAPP_API_KEY='secret-key-123'\nMYAPP_PORT=3000\n",
    );
    env.setup()?;

    let config = Config::from_dotenv(&env)?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
