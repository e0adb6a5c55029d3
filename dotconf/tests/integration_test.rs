//! Integration tests

use dotconf::{DotConf, DotEnv, DotEnvError};
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn dotenv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn loaded(contents: &str) -> DotEnv {
    let mut env = DotEnv::from_contents(contents);
    env.setup().unwrap();
    env
}

#[test]
fn test_reference_dotenv_file() {
    let file = dotenv_file("s=hello\nS3_BUCKET=YOURS3BUCKET\nHASH=\"#\"\nINT=1\n");

    let mut env = DotEnv::from_file(file.path());
    env.setup().unwrap();

    assert_eq!(env.string("s").unwrap(), "hello");
    assert_eq!(env.string("S3_BUCKET").unwrap(), "YOURS3BUCKET");
    assert_eq!(env.string("HASH").unwrap(), "#");
    assert_eq!(env.int("INT").unwrap(), 1);
    assert!(env.string("this-message-does-not-exist").is_err());
}

#[test]
fn test_mixed_file() {
    let file = dotenv_file(
        r#"# Application settings
export APP_NAME=demo
GREETING="hello # world"   # greeting shown on start
NOTE=plain # trailing comment
QUOTE="a\"b"
WIN_DIR="C:\Users\"
MULTI="line1\nline2"
SINGLE='single # quoted'
debug: true
ratio: 1.0

this line has no separator
APP_NAME=override
"#,
    );

    let env = DotEnv::load(file.path()).unwrap();

    assert_eq!(env.string("APP_NAME").unwrap(), "override");
    assert_eq!(env.string("GREETING").unwrap(), "hello # world");
    assert_eq!(env.string("NOTE").unwrap(), "plain");
    assert_eq!(env.string("QUOTE").unwrap(), "a\"b");
    assert_eq!(env.string("WIN_DIR").unwrap(), r"C:\Users\");
    assert_eq!(env.string("MULTI").unwrap(), "line1\nline2");
    assert_eq!(env.string("SINGLE").unwrap(), "single # quoted");
    assert!(env.bool("debug").unwrap());
    assert_eq!(env.int("ratio").unwrap(), 1);
    assert_eq!(env.len(), 9);
}

#[test]
fn test_missing_file() {
    let result = DotEnv::load("/nonexistent/dir/.env");
    match result {
        Err(DotEnvError::Read { origin, source }) => {
            assert_eq!(origin, "/nonexistent/dir/.env");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Read error, got {other:?}"),
    }
}

#[test]
fn test_setup_retried_after_file_appears() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");

    let mut env = DotEnv::from_file(&path);
    assert_eq!(env.origin(), path.display().to_string());
    assert!(env.setup().is_err());
    assert!(env.string("READY").unwrap_err().is_missing());

    std::fs::write(&path, "READY=1\n").unwrap();
    env.setup().unwrap();
    assert!(env.bool("READY").unwrap());
}

#[test]
fn test_missing_and_type_errors_are_distinct() {
    let env = loaded("INT=abc\nFLAG=notabool\n");

    assert!(matches!(env.int("INT"), Err(DotEnvError::Parse { .. })));
    assert!(matches!(env.bool("FLAG"), Err(DotEnvError::Parse { .. })));
    assert!(matches!(env.int("NOPE"), Err(DotEnvError::Missing { .. })));
    assert!(matches!(env.bool("NOPE"), Err(DotEnvError::Missing { .. })));
    assert!(matches!(env.string("NOPE"), Err(DotEnvError::Missing { .. })));
}

#[test]
fn test_parse_error_does_not_leak_value() {
    let env = loaded("API_PORT=hunter2-secret\n");
    let err = env.int("API_PORT").unwrap_err();
    assert!(err.to_string().contains("API_PORT"));
    assert!(!err.to_string().contains("hunter2-secret"));
}

#[derive(Debug, DotConf)]
struct BasicConfig {
    pub database_url: String,
    pub api_key: String,
}

#[derive(Debug, DotConf)]
struct ConfigWithDefaults {
    #[conf(default = "127.0.0.1:8080".to_string())]
    pub server_addr: String,

    #[conf(default = 10)]
    pub max_connections: u32,

    #[conf(default = false)]
    pub debug_mode: bool,
}

#[derive(Debug, DotConf)]
struct ConfigWithCustomNames {
    #[conf(name = "DB_CONNECTION_STRING")]
    pub database_url: String,

    #[conf(name = "REDIS_URL")]
    pub cache_url: String,
}

#[test]
fn test_basic_config() {
    let env = loaded("DATABASE_URL=postgres://localhost/test\nAPI_KEY=test_api_key\n");

    let config = BasicConfig::from_dotenv(&env).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/test");
    assert_eq!(config.api_key, "test_api_key");
}

#[test]
fn test_missing_required_field() {
    let env = loaded("DATABASE_URL=postgres://localhost/test\n");

    let err = BasicConfig::from_dotenv(&env).unwrap_err();
    let err = err.downcast_ref::<DotEnvError>().unwrap();
    assert!(matches!(err, DotEnvError::Missing { name } if name == "API_KEY"));
}

#[test]
fn test_config_with_defaults() {
    let env = loaded("");

    let config = ConfigWithDefaults::from_dotenv(&env).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:8080");
    assert_eq!(config.max_connections, 10);
    assert!(!config.debug_mode);
}

#[test]
fn test_config_override_defaults() {
    let env = loaded("SERVER_ADDR=0.0.0.0:9090\nMAX_CONNECTIONS=20.0\nDEBUG_MODE=T\n");

    let config = ConfigWithDefaults::from_dotenv(&env).unwrap();
    assert_eq!(config.server_addr, "0.0.0.0:9090");
    assert_eq!(config.max_connections, 20);
    assert!(config.debug_mode);
}

#[test]
fn test_invalid_value_does_not_fall_back_to_default() {
    let env = loaded("MAX_CONNECTIONS=many\n");

    let err = ConfigWithDefaults::from_dotenv(&env).unwrap_err();
    let err = err.downcast_ref::<DotEnvError>().unwrap();
    assert!(matches!(err, DotEnvError::Parse { .. }));
}

#[test]
fn test_custom_names() {
    let env = loaded("DB_CONNECTION_STRING=postgres://localhost/db\nREDIS_URL=redis://localhost\n");

    let config = ConfigWithCustomNames::from_dotenv(&env).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/db");
    assert_eq!(config.cache_url, "redis://localhost");
}

#[derive(Debug, DotConf)]
struct ConfigWithJson {
    #[conf(deserializer = "serde_json::from_str")]
    pub tags: Vec<String>,

    #[conf(deserializer = "serde_json::from_str")]
    pub metadata: Option<HashMap<String, String>>,
}

#[test]
fn test_json_deserialization() {
    let env = loaded("TAGS='[\"production\",\"api\"]'\n");

    let config = ConfigWithJson::from_dotenv(&env).unwrap();
    assert_eq!(config.tags, vec!["production", "api"]);
    assert_eq!(config.metadata, None);
}

#[test]
fn test_json_deserialization_error() {
    let env = loaded("TAGS=not-json\n");

    let err = ConfigWithJson::from_dotenv(&env).unwrap_err();
    let err = err.downcast_ref::<DotEnvError>().unwrap();
    assert!(matches!(err, DotEnvError::Parse { name, .. } if name == "TAGS"));
}

fn parse_duration_secs(s: &str) -> Result<Duration, String> {
    s.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| format!("Failed to parse: {}", e))
}

#[derive(Debug, DotConf)]
struct ConfigWithCustomFn {
    #[conf(deserializer = "parse_duration_secs")]
    pub timeout: Duration,

    #[conf(deserializer = "parse_duration_secs")]
    pub retry_after: Option<Duration>,
}

#[test]
fn test_custom_deserializer_function() {
    let env = loaded("TIMEOUT=30\nRETRY_AFTER=5\n");

    let config = ConfigWithCustomFn::from_dotenv(&env).unwrap();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.retry_after, Some(Duration::from_secs(5)));
}

#[derive(Debug, DotConf)]
#[conf(prefix = "APP_")]
struct PrefixedConfig {
    pub name: String,

    #[conf(name = "DATABASE_CONNECTION_STRING")]
    pub database_url: String,

    pub version: Option<String>,

    #[conf(default)]
    pub workers: usize,
}

#[test]
fn test_prefix_with_custom_name() {
    let env = loaded(
        "APP_NAME=my-application\nAPP_DATABASE_CONNECTION_STRING=postgres://localhost/db\nAPP_VERSION=1.0.0\n",
    );

    let config = PrefixedConfig::from_dotenv(&env).unwrap();
    assert_eq!(config.name, "my-application");
    assert_eq!(config.database_url, "postgres://localhost/db");
    assert_eq!(config.version.as_deref(), Some("1.0.0"));
    assert_eq!(config.workers, 0);
}

#[test]
fn test_from_dotenv_file() {
    let file = dotenv_file("export DATABASE_URL=postgres://localhost/file\nAPI_KEY=\"key # with hash\"\n");

    let config = BasicConfig::from_dotenv_file(file.path()).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/file");
    assert_eq!(config.api_key, "key # with hash");
}

#[test]
fn test_from_dotenv_file_missing() {
    let err = BasicConfig::from_dotenv_file("/nonexistent/.env").unwrap_err();
    let err = err.downcast_ref::<DotEnvError>().unwrap();
    assert!(matches!(err, DotEnvError::Read { .. }));
}
