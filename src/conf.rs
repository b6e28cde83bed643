use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub api_url: String,
    pub service_name: String,
    pub listen_port: String,
    pub search_debounce_ms: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobtrack")?
            .set_default("listen_port", "3000")?
            .set_default("search_debounce_ms", 250u64)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        while s.api_url.ends_with('/') {
            s.api_url.pop();
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
