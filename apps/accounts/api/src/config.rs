use core_config::{
    AppInfo, FromEnv, app_info,
    database::{DatabaseConfig, StoreKind},
    mail::MailConfig,
    server::ServerConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub store: StoreKind,
    /// Present only when `store` is Postgres
    pub database: Option<DatabaseConfig>,
    pub mail: MailConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let store = StoreKind::from_env()?; // USER_STORE, defaults to postgres
        let database = match store {
            StoreKind::Postgres => Some(DatabaseConfig::from_env()?), // DATABASE_URL required
            StoreKind::Memory => None,
        };
        let mail = MailConfig::from_env()?; // MAIL_TRANSPORT defaults to log
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            store,
            database,
            mail,
            server,
            environment,
        })
    }
}
