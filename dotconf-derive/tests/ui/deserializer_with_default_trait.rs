// A deserializer cannot be combined with `default` either

use dotconf::DotConf;

fn parse_list(s: &str) -> Result<Vec<String>, String> {
    Ok(s.split(',').map(|s| s.trim().to_string()).collect())
}

#[derive(DotConf)]
struct Config {
    #[conf(deserializer = "parse_list", default)]
    pub items: Vec<String>,
}

fn main() {
    let _ = parse_list("a,b");
}
