use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_STORAGE_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let storage_dir = match env::var("STORAGE_DIR") {
            Ok(raw) if raw.trim().is_empty() => {
                return Err(Error::Config("STORAGE_DIR must not be empty".to_string()))
            }
            Ok(raw) => PathBuf::from(raw),
            Err(_) => PathBuf::from(DEFAULT_STORAGE_DIR),
        };

        Ok(Self { storage_dir })
    }
}
