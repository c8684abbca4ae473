use propdesk_core::dates;
use propdesk_core::pagination::{PageRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
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
    /// Page size when the index request has no `perPage` (default: `10`).
    pub default_per_page: i64,
    /// Upper bound for a requested `perPage` (default: `100`).
    pub max_per_page: i64,
    /// strftime pattern for dates in CSV exports (default: `%-m/%-d/%Y`).
    pub export_date_format: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DEFAULT_PER_PAGE`     | `10`                       |
    /// | `MAX_PER_PAGE`         | `100`                      |
    /// | `EXPORT_DATE_FORMAT`   | `%-m/%-d/%Y`               |
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

        let max_per_page: i64 = std::env::var("MAX_PER_PAGE")
            .map(|v| v.parse::<i64>().expect("MAX_PER_PAGE must be a valid integer"))
            .unwrap_or(MAX_PER_PAGE)
            .max(1);

        let default_per_page: i64 = std::env::var("DEFAULT_PER_PAGE")
            .map(|v| v.parse::<i64>().expect("DEFAULT_PER_PAGE must be a valid integer"))
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, max_per_page);

        let export_date_format = std::env::var("EXPORT_DATE_FORMAT")
            .unwrap_or_else(|_| dates::DEFAULT_DISPLAY_FORMAT.into());
        assert!(
            dates::is_valid_display_format(&export_date_format),
            "EXPORT_DATE_FORMAT is not a valid date format: {export_date_format}"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_per_page,
            max_per_page,
            export_date_format,
        }
    }

    /// Clamp raw `page` / `perPage` query values against the configured sizes.
    pub fn page_request(&self, page: Option<i64>, per_page: Option<i64>) -> PageRequest {
        PageRequest::new(page, per_page, self.default_per_page, self.max_per_page)
    }
}
