// Option<T> fields default to None, so an explicit default is rejected

use dotconf::DotConf;

#[derive(DotConf)]
struct Config {
    #[conf(default = "fallback".to_string())]
    pub optional_field: Option<String>,
}

fn main() {}
