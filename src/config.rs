use crate::errors::LoadError;
use crate::source::{FileSource, HttpSource, Source};
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEEKS_PATH: &str = "data/weeks.json";

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// File served at `/weeks.json`.
    pub weeks_path: PathBuf,
    /// When set, loads fetch this URL instead of reading `weeks_path`.
    pub weeks_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let weeks_path = lookup("WEEKS_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WEEKS_PATH));
        let weeks_url = lookup("WEEKS_URL").filter(|value| !value.trim().is_empty());

        Self {
            port,
            weeks_path,
            weeks_url,
        }
    }

    pub fn source(&self) -> Result<Source, LoadError> {
        match &self.weeks_url {
            Some(url) => Ok(Source::Http(HttpSource::new(url.trim())?)),
            None => Ok(Source::File(FileSource::new(&self.weeks_path))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.weeks_path, PathBuf::from("data/weeks.json"));
        assert_eq!(config.weeks_url, None);
        assert!(matches!(config.source(), Ok(Source::File(_))));
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, 8080);
        assert_eq!(config(&[("PORT", "3000")]).port, 3000);
    }

    #[test]
    fn url_selects_http_source() {
        let config = config(&[
            ("WEEKS_URL", "http://127.0.0.1:9000/weeks.json"),
            ("WEEKS_PATH", "/srv/weeks.json"),
        ]);
        assert_eq!(config.weeks_path, PathBuf::from("/srv/weeks.json"));
        match config.source() {
            Ok(Source::Http(source)) => assert_eq!(source.url(), "http://127.0.0.1:9000/weeks.json"),
            other => panic!("expected http source, got {other:?}"),
        }
    }

    #[test]
    fn blank_url_is_ignored() {
        assert_eq!(config(&[("WEEKS_URL", "  ")]).weeks_url, None);
    }
}
