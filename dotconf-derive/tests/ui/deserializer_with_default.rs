// A deserializer cannot be combined with a default value

use dotconf::DotConf;
use std::time::Duration;

fn parse_duration_secs(s: &str) -> Result<Duration, String> {
    s.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| format!("Failed to parse: {}", e))
}

#[derive(DotConf)]
struct Config {
    #[conf(deserializer = "parse_duration_secs", default = Duration::from_secs(60))]
    pub timeout: Duration,
}

fn main() {
    let _ = parse_duration_secs("60");
}
