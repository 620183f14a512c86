use std::{env, path::PathBuf};

const DEFAULT_API_URL: &str = "http://0.0.0.0:8000";
const DEFAULT_STORE_DIR: &str = ".studyquiz";

pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
    pub store_dir: PathBuf,
}

impl Config {
    /// Reads `STUDYQUIZ_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("STUDYQUIZ_API_URL").unwrap_or(DEFAULT_API_URL.to_string()),
            token: var("STUDYQUIZ_TOKEN"),
            store_dir: var("STUDYQUIZ_STORE_DIR")
                .unwrap_or(DEFAULT_STORE_DIR.to_string())
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.store_dir, PathBuf::from(".studyquiz"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(|key| match key {
            "STUDYQUIZ_API_URL" => Some("https://api.example.com".into()),
            "STUDYQUIZ_TOKEN" => Some("secret".into()),
            _ => None,
        });
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }
}
