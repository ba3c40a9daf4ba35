#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CargoEnv {
    Development,
    Production,
    Test,
}

impl CargoEnv {
    // label reported by the metrics endpoint and handed to sentry
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoEnv::Development => "development",
            CargoEnv::Production => "production",
            CargoEnv::Test => "test",
        }
    }
}

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "backend-api")]
pub struct AppConfig {
    #[clap(long, env, value_enum, default_value = "development")]
    pub cargo_env: CargoEnv,

    #[clap(long, env, default_value = "3000")]
    pub port: u16,

    // the k8s service name, override it when running outside the cluster
    #[clap(long, env, default_value = "postgres-service")]
    pub db_host: String,

    #[clap(long, env, default_value = "5432")]
    pub db_port: u16,

    #[clap(long, env, default_value = "microservices")]
    pub db_name: String,

    #[clap(long, env, default_value = "postgres")]
    pub db_user: String,

    #[clap(long, env, default_value = "postgres")]
    pub db_password: String,

    #[clap(long, env, default_value = "10")]
    pub db_max_connections: u32,

    // how long a request queues for a pooled connection before giving up
    #[clap(long, env, default_value = "5")]
    pub db_acquire_timeout_secs: u64,

    // upper bound on the data probe so a slow db can't stall /api/data
    #[clap(long, env, default_value = "3")]
    pub db_query_timeout_secs: u64,

    // whole-request deadline, anything slower gets a json 408
    #[clap(long, env, default_value = "30")]
    pub http_timeout_secs: u64,

    // status used when /api/data falls back to the canned payload, 200 keeps the
    // frontend rendering something
    #[clap(long, env, default_value = "200", value_parser = clap::value_parser!(u16).range(200..=599))]
    pub degraded_status: u16,

    #[clap(long, env)]
    pub sentry_dsn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_the_deployment() {
        let config = AppConfig::try_parse_from(["backend-api"]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.db_host, "postgres-service");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_name, "microservices");
        assert_eq!(config.db_user, "postgres");
        assert_eq!(config.db_password, "postgres");
        assert_eq!(config.cargo_env, CargoEnv::Development);
        assert_eq!(config.degraded_status, 200);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "backend-api",
            "--port",
            "8080",
            "--db-host",
            "localhost",
            "--cargo-env",
            "production",
            "--degraded-status",
            "503",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.cargo_env.as_str(), "production");
        assert_eq!(config.degraded_status, 503);
    }

    #[test]
    fn rejects_non_http_degraded_status() {
        assert!(AppConfig::try_parse_from(["backend-api", "--degraded-status", "42"]).is_err());
    }
}
