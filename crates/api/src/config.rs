use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// SMTP connection settings live in [`mindseye_mail::SmtpConfig`] and are
/// loaded separately; everything the HTTP layer needs is here.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served at `/data`. Unset disables the route.
    pub assets_dir: Option<PathBuf>,
    /// Largest `per_page` the portfolio endpoint honours. Unset means no cap.
    pub portfolio_max_per_page: Option<i64>,
    pub inquiry: InquiryConfig,
}

/// Where contact inquiries go, and what to tell the submitter if they can't.
#[derive(Debug, Clone)]
pub struct InquiryConfig {
    /// Studio mailbox that receives inquiries.
    pub recipient: String,
    /// Address shown to submitters when relaying fails.
    pub fallback_contact: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `ASSETS_DIR`               | unset                      |
    /// | `PORTFOLIO_MAX_PER_PAGE`   | unset (uncapped)           |
    /// | `INQUIRY_RECIPIENT`        | required                   |
    /// | `INQUIRY_FALLBACK_CONTACT` | `INQUIRY_RECIPIENT`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let assets_dir = std::env::var("ASSETS_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let portfolio_max_per_page: Option<i64> = std::env::var("PORTFOLIO_MAX_PER_PAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|n| *n > 0)
                    .expect("PORTFOLIO_MAX_PER_PAGE must be a positive integer")
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assets_dir,
            portfolio_max_per_page,
            inquiry: InquiryConfig::from_env(),
        }
    }
}

impl InquiryConfig {
    pub fn from_env() -> Self {
        let recipient =
            std::env::var("INQUIRY_RECIPIENT").expect("INQUIRY_RECIPIENT must be set");
        let fallback_contact =
            std::env::var("INQUIRY_FALLBACK_CONTACT").unwrap_or_else(|_| recipient.clone());
        Self {
            recipient,
            fallback_contact,
        }
    }
}
