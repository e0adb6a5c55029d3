//! Basic usage example

use dotconf::DotConf;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, DotConf)]
struct Config {
    // Required field: loaded from the DATABASE_URL key
    pub database_url: String,

    // With default value
    #[conf(default = "127.0.0.1:8080".to_string())]
    pub server_addr: String,

    // Numeric type
    #[conf(default = 10)]
    pub max_connections: u32,

    // Boolean type
    #[conf(default = false)]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Write a .env file for demonstration
    let mut dotenv = NamedTempFile::new()?;
    writeln!(dotenv, "# local development settings")?;
    writeln!(dotenv, "export DATABASE_URL=postgres://localhost/mydb")?;
    writeln!(dotenv, "SERVER_ADDR=\"0.0.0.0:3000\"  # listen everywhere")?;
    writeln!(dotenv, "MAX_CONNECTIONS: 32")?;

    // Load configuration
    let config = Config::from_dotenv_file(dotenv.path())?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
