// Unsupported conf keys are reported at the offending key

use dotconf::DotConf;

#[derive(DotConf)]
struct Config {
    #[conf(from_file)]
    pub api_key: String,
}

fn main() {}
