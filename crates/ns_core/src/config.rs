use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveTime;
use clap::Args;

use crate::{Error, Result};

pub const DEFAULT_APP_NAME: &str = "News Summarizer API";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_DIGEST_LIMIT: usize = 10;

/// Runtime settings, built once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub environment: String,
    pub news_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub remote_timeout: Duration,
    pub daily_digest_time: NaiveTime,
    pub summary_sentences: usize,
    pub provider_country: String,
    pub data_dir: PathBuf,
    pub storage: String,
    pub digest_limit: usize,
    pub summary_concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: "development".to_string(),
            news_api_key: None,
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            remote_timeout: Duration::from_secs(15),
            daily_digest_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
            summary_sentences: 3,
            provider_country: "us".to_string(),
            data_dir: PathBuf::from("data"),
            storage: "file".to_string(),
            digest_limit: DEFAULT_DIGEST_LIMIT,
            summary_concurrency: 4,
        }
    }
}

impl Settings {
    /// Directory holding one JSON document per digest date
    pub fn daily_dir(&self) -> PathBuf {
        self.data_dir.join("daily")
    }

    pub fn remote_configured(&self) -> bool {
        self.openai_api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// Parses a 24h `HH:MM` time of day.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| Error::Config(format!("Invalid time of day '{}': {}", value, e)))
}

#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    #[arg(long, env = "APP_NAME", default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// NewsAPI key. Without it the sample article source is used
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// Key for the OpenAI-compatible summarization endpoint. Without it only
    /// the frequency summarizer runs
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Seconds before a remote summarization attempt is abandoned
    #[arg(long, env = "REMOTE_TIMEOUT_SECS", default_value_t = 15)]
    pub remote_timeout_secs: u64,

    /// Local time of day (HH:MM) at which the daily digest is generated
    #[arg(long, env = "DAILY_DIGEST_TIME", default_value = "07:00")]
    pub daily_digest_time: String,

    #[arg(long, env = "SUMMARY_SENTENCES", default_value_t = 3)]
    pub summary_sentences: usize,

    #[arg(long, env = "PROVIDER_COUNTRY", default_value = "us")]
    pub provider_country: String,

    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Digest storage backend: file, memory or sqlite
    #[arg(long, env = "DIGEST_STORAGE", default_value = "file")]
    pub storage: String,

    #[arg(long, env = "DIGEST_LIMIT", default_value_t = DEFAULT_DIGEST_LIMIT)]
    pub digest_limit: usize,

    #[arg(long, env = "SUMMARY_CONCURRENCY", default_value_t = 4)]
    pub summary_concurrency: usize,
}

impl SettingsArgs {
    pub fn into_settings(self) -> Result<Settings> {
        if self.summary_sentences == 0 {
            return Err(Error::Config("summary_sentences must be positive".to_string()));
        }
        if self.digest_limit == 0 {
            return Err(Error::Config("digest_limit must be positive".to_string()));
        }

        Ok(Settings {
            app_name: self.app_name,
            environment: self.environment,
            news_api_key: self.news_api_key.filter(|key| !key.trim().is_empty()),
            openai_api_key: self.openai_api_key.filter(|key| !key.trim().is_empty()),
            openai_model: self.openai_model,
            openai_base_url: self.openai_base_url,
            remote_timeout: Duration::from_secs(self.remote_timeout_secs),
            daily_digest_time: parse_time_of_day(&self.daily_digest_time)?,
            summary_sentences: self.summary_sentences,
            provider_country: self.provider_country,
            data_dir: self.data_dir,
            storage: self.storage,
            digest_limit: self.digest_limit,
            summary_concurrency: self.summary_concurrency.max(1),
        })
    }
}

/// Loads `.env` from the working directory if present. Missing files are fine,
/// variables may be set system-wide. Runs before logging is installed, so the
/// caller reports the error.
pub fn load_dotenv() -> Result<()> {
    dotenv_result(dotenvy::dotenv().map(|_| ()))
}

pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<()> {
    dotenv_result(dotenvy::from_path(path))
}

fn dotenv_result(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Err(e) if !e.not_found() => Err(Error::Config(format!("Failed to load .env: {}", e))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: SettingsArgs,
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("07:00").unwrap(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(parse_time_of_day(" 23:45 ").unwrap(), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("seven").is_err());
    }

    #[test]
    fn test_args_into_settings() {
        let cli = TestCli::parse_from([
            "test",
            "--openai-api-key", "sk-test",
            "--daily-digest-time", "06:30",
            "--summary-sentences", "2",
        ]);
        let settings = cli.settings.into_settings().unwrap();
        assert!(settings.remote_configured());
        assert_eq!(settings.summary_sentences, 2);
        assert_eq!(settings.daily_digest_time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(settings.daily_dir(), settings.data_dir.join("daily"));
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let cli = TestCli::parse_from(["test", "--openai-api-key", "  "]);
        let settings = cli.settings.into_settings().unwrap();
        assert!(!settings.remote_configured());
        assert!(settings.openai_api_key.is_none());
    }

    #[test]
    fn test_zero_sentences_rejected() {
        let cli = TestCli::parse_from(["test", "--summary-sentences", "0"]);
        assert!(matches!(cli.settings.into_settings(), Err(Error::Config(_))));
    }

    #[test]
    fn test_dotenv_missing_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_from(dir.path().join(".env")).is_ok());
    }

    #[test]
    fn test_dotenv_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NSUM_TEST_KEY='unterminated\n").unwrap();
        assert!(matches!(load_dotenv_from(&path), Err(Error::Config(_))));
    }
}
