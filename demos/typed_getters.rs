//! Example using the typed getters directly, without the derive macro

use dotconf::{DotEnv, DotEnvError};
use std::io::Cursor;

fn main() -> anyhow::Result<()> {
    // Any closure producing a reader works as a source; it runs on every setup
    let mut env = DotEnv::new(|| {
        Ok(Cursor::new(
            "s=hello\nS3_BUCKET=YOURS3BUCKET\nHASH=\"#\"\nINT=1.0\nENABLED=True\n",
        ))
    });
    env.setup()?;

    println!("s         = {}", env.string("s")?);
    println!("S3_BUCKET = {}", env.string("S3_BUCKET")?);
    println!("HASH      = {}", env.string("HASH")?);
    println!("INT       = {}", env.int("INT")?);
    println!("ENABLED   = {}", env.bool("ENABLED")?);

    // Missing keys and malformed values are reported differently
    match env.int("TIMEOUT") {
        Err(DotEnvError::Missing { .. }) => println!("TIMEOUT   = 30 (default)"),
        Err(e) => return Err(e.into()),
        Ok(timeout) => println!("TIMEOUT   = {timeout}"),
    }

    let retries: u8 = env.get_or("RETRIES", 3)?;
    println!("RETRIES   = {retries}");

    Ok(())
}
