/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可, 画像ディレクトリなど)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IMAGES_DIR: &str = "images";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    // Root directory served under /images
    pub images_dir: PathBuf,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let images_dir = lookup("IMAGES_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR));

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(s) => s
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            images_dir,
            request_timeout_seconds,
        })
    }
}
