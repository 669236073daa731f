use crate::err::Error;
use config::{Config, Environment, File};
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;
use std::time::Duration;

/// MySQL listens here; not read from the environment, where `DB_PORT` may be a Docker link URL.
pub const DB_PORT: u16 = 3306;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port_http: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_max_connections: u32,
    /// Seconds to wait for a database connection before giving up.
    pub db_connect_timeout: u64,
    pub timezone: String,
    pub log_level: String,
    pub init_schema: bool,
}

impl Settings {
    /// Load settings from defaults, an optional config file and the process environment.
    ///
    /// # Arguments
    /// * `config_file` - Config file path, `config.toml` in the working directory if `None`
    /// * `address` - Bind address override
    /// * `port_http` - HTTP port override
    pub fn new(
        config_file: Option<String>,
        address: Option<String>,
        port_http: Option<u16>,
    ) -> Result<Self, Error> {
        Self::from_environment(config_file, Environment::default(), address, port_http)
    }

    /// Same as `new`, reading environment variables from `env` instead.
    pub fn from_environment(
        config_file: Option<String>,
        env: Environment,
        address: Option<String>,
        port_http: Option<u16>,
    ) -> Result<Self, Error> {
        // An explicitly named file has to exist, the default one is optional
        let file = match &config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("config").required(false),
        };

        let builder = Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port_http", 8080)?
            .set_default("db_max_connections", 10)?
            .set_default("db_connect_timeout", 30)?
            .set_default("timezone", "America/Toronto")?
            .set_default("log_level", "info")?
            .set_default("init_schema", false)?
            .add_source(file)
            .add_source(env)
            .set_override_option("address", address)?
            .set_override_option("port_http", port_http)?;

        let config = builder.build()?;

        Ok(Settings {
            address: config.get("address")?,
            port_http: config.get("port_http")?,
            db_user: config.get("db_user")?,
            db_password: config.get("db_password")?,
            db_host: config.get("db_host")?,
            db_port: DB_PORT,
            db_name: config.get("db_name")?,
            db_max_connections: config.get("db_max_connections")?,
            db_connect_timeout: config.get("db_connect_timeout")?,
            timezone: config.get("timezone")?,
            log_level: config.get("log_level")?,
            init_schema: config.get("init_schema")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port_http)
    }

    /// Connection string for logs, password masked.
    ///
    /// The pool connects through `connect_options` so passwords need no URL escaping.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:****@{}:{}/{}",
            self.db_user, self.db_host, self.db_port, self.db_name
        )
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    pub fn print(&self) {
        tracing::info!("Address: {}", self.bind_address());
        tracing::info!("Database: {}", self.database_url());
        tracing::info!("Max DB connections: {}", self.db_max_connections);
        tracing::info!("Timezone: {}", self.timezone);
        if self.init_schema {
            tracing::info!("Schema bootstrap enabled");
        }
    }
}
