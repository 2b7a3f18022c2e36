use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::partnership::scoring::{
    DecisionWeights, NormalizationBasis, ScoringConfig, SelectionPolicy, DEFAULT_CSR_BASIS,
};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let data_dir = env::var("APP_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig {
                dir: PathBuf::from(data_dir),
            },
            scoring: load_scoring()?,
        })
    }
}

fn load_scoring() -> Result<ScoringConfig, ConfigError> {
    let selection = match env::var("APP_SELECTION_POLICY") {
        Ok(raw) => SelectionPolicy::parse(&raw).ok_or(ConfigError::InvalidSelectionPolicy(raw))?,
        Err(_) => SelectionPolicy::default(),
    };

    let basis = match env::var("APP_CSR_BASIS") {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or(ConfigError::InvalidCsrBasis(raw))?,
        Err(_) => DEFAULT_CSR_BASIS,
    };

    let normalization = match env::var("APP_CSR_NORMALIZATION") {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "fixed" => NormalizationBasis::Fixed(basis),
            "pool_max" | "pool-max" | "max" => NormalizationBasis::PoolMaximum,
            _ => return Err(ConfigError::InvalidNormalization(raw)),
        },
        Err(_) => NormalizationBasis::Fixed(basis),
    };

    let mut weights = match env::var("APP_DECISION_WEIGHTS") {
        Ok(raw) => parse_weights(&raw).ok_or(ConfigError::InvalidWeights(raw))?,
        Err(_) => DecisionWeights::default(),
    };

    if let Ok(raw) = env::var("APP_SCORE_PRECISION") {
        weights.precision = raw
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|precision| *precision <= DecisionWeights::MAX_PRECISION)
            .ok_or(ConfigError::InvalidPrecision(raw))?;
    }

    Ok(ScoringConfig {
        selection,
        normalization,
        weights,
    })
}

/// Accepts `equal` or three comma-separated `ngo,csr,supplier` weights.
fn parse_weights(raw: &str) -> Option<DecisionWeights> {
    if raw.trim().eq_ignore_ascii_case("equal") {
        return Some(DecisionWeights::equal());
    }

    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let [ngo, csr, supplier] = parts.as_slice() else {
        return None;
    };

    let weights = DecisionWeights {
        ngo: *ngo,
        csr: *csr,
        supplier: *supplier,
        ..DecisionWeights::default()
    };
    weights.is_valid().then_some(weights)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the NGO, CSR and supplier exports live.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSelectionPolicy(String),
    InvalidNormalization(String),
    InvalidCsrBasis(String),
    InvalidWeights(String),
    InvalidPrecision(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSelectionPolicy(value) => write!(
                f,
                "APP_SELECTION_POLICY must be 'highest' or 'first' (got '{}')",
                value
            ),
            ConfigError::InvalidNormalization(value) => write!(
                f,
                "APP_CSR_NORMALIZATION must be 'fixed' or 'pool_max' (got '{}')",
                value
            ),
            ConfigError::InvalidCsrBasis(value) => write!(
                f,
                "APP_CSR_BASIS must be a positive number (got '{}')",
                value
            ),
            ConfigError::InvalidWeights(value) => write!(
                f,
                "APP_DECISION_WEIGHTS must be 'equal' or three non-negative numbers 'ngo,csr,supplier' (got '{}')",
                value
            ),
            ConfigError::InvalidPrecision(value) => write!(
                f,
                "APP_SCORE_PRECISION must be an integer between 0 and {} (got '{}')",
                DecisionWeights::MAX_PRECISION,
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
