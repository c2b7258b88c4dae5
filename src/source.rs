use crate::errors::LoadError;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use std::future::Future;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

/// Raw result of fetching the weeks resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the weeks data comes from. Every call must read fresh data.
pub trait WeeksSource {
    /// Name used in diagnostics, e.g. `weeks.json`.
    fn resource(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Fetched, LoadError>> + Send;
}

impl<T: WeeksSource + ?Sized> WeeksSource for &T {
    fn resource(&self) -> String {
        (**self).resource()
    }

    fn fetch(&self) -> impl Future<Output = Result<Fetched, LoadError>> + Send {
        (**self).fetch()
    }
}

/// Fetches over HTTP, bypassing every cache on the way.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WeeksSource for HttpSource {
    fn resource(&self) -> String {
        resource_name(&self.url)
    }

    async fn fetch(&self) -> Result<Fetched, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("_", cache_buster())])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Fetched { status, body })
    }
}

/// Reads the weeks file straight from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WeeksSource for FileSource {
    fn resource(&self) -> String {
        resource_name(&self.path.to_string_lossy())
    }

    async fn fetch(&self) -> Result<Fetched, LoadError> {
        let body = fs::read(&self.path).await?;
        Ok(Fetched::ok(body))
    }
}

/// The source picked by configuration.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl WeeksSource for Source {
    fn resource(&self) -> String {
        match self {
            Self::Http(source) => source.resource(),
            Self::File(source) => source.resource(),
        }
    }

    async fn fetch(&self) -> Result<Fetched, LoadError> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }
}

fn resource_name(location: &str) -> String {
    let trimmed = location.split(['?', '#']).next().unwrap_or(location);
    trimmed
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
        .to_string()
}
