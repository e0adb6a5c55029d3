// Option<T> fields default to None, so `default` is rejected as well

use dotconf::DotConf;

#[derive(DotConf)]
struct Config {
    #[conf(default)]
    pub optional_field: Option<String>,
}

fn main() {}
