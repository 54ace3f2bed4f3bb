use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::SourceSettings;
use crate::error::CatalogError;

/// Where source files are read from.
#[derive(Debug, Clone)]
pub enum Origin {
    Remote {
        client: reqwest::Client,
        base_url: String,
    },
    Local {
        dir: PathBuf,
    },
}

impl Origin {
    pub fn from_settings(settings: &SourceSettings) -> Result<Self, CatalogError> {
        match &settings.base_url {
            Some(base_url) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(settings.timeout_secs))
                    .build()
                    .map_err(|e| CatalogError::Configuration(e.to_string()))?;
                Ok(Origin::Remote {
                    client,
                    base_url: base_url.trim_end_matches('/').to_string(),
                })
            }
            None => Ok(Origin::Local {
                dir: settings.data_dir.clone(),
            }),
        }
    }

    /// Fetch one source as text. Non-success HTTP statuses are errors.
    pub async fn fetch(&self, name: &str) -> Result<String, CatalogError> {
        let start = Instant::now();
        let text = match self {
            Origin::Remote { client, base_url } => {
                let url = format!("{}/{}", base_url, name.trim_start_matches('/'));
                let unreachable = |e: reqwest::Error| CatalogError::SourceUnreachable {
                    source_name: name.to_string(),
                    reason: e.to_string(),
                };
                let response = client.get(&url).send().await.map_err(unreachable)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::SourceStatus {
                        source_name: name.to_string(),
                        status: status.as_u16(),
                    });
                }
                response.text().await.map_err(unreachable)?
            }
            Origin::Local { dir } => tokio::fs::read_to_string(dir.join(name))
                .await
                .map_err(|error| CatalogError::SourceRead {
                    source_name: name.to_string(),
                    error,
                })?,
        };
        debug!(
            "Fetched {} ({} bytes) in {}ms",
            name,
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }
}

/// Raw text of every source, primaries in configured order.
pub struct FetchedSources {
    pub primary: Vec<(String, String)>,
    pub extras: String,
}

/// Fetch all primaries and the extras file concurrently.
///
/// Nothing is returned unless every fetch succeeds; the first failure
/// aborts the remaining tasks.
pub async fn fetch_all(settings: &SourceSettings) -> Result<FetchedSources, CatalogError> {
    let origin = Arc::new(Origin::from_settings(settings)?);
    let names: Vec<String> = settings
        .primary
        .iter()
        .cloned()
        .chain(std::iter::once(settings.extras.clone()))
        .collect();

    info!("Fetching {} sources", names.len());

    let mut tasks = JoinSet::new();
    for (slot, name) in names.iter().cloned().enumerate() {
        let origin = Arc::clone(&origin);
        tasks.spawn(async move {
            let text = origin.fetch(&name).await?;
            Ok::<_, CatalogError>((slot, text))
        });
    }

    let mut texts: Vec<Option<String>> = vec![None; names.len()];
    while let Some(joined) = tasks.join_next().await {
        let (slot, text) = joined??;
        texts[slot] = Some(text);
    }

    let mut texts: Vec<String> = texts.into_iter().map(Option::unwrap_or_default).collect();
    let extras = texts.pop().unwrap_or_default();
    let primary = names.into_iter().zip(texts).collect();

    Ok(FetchedSources { primary, extras })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_origin_reads_files() {
        let origin = Origin::Local {
            dir: PathBuf::from("tests/fixtures"),
        };
        let text = origin.fetch("universities-3.csv").await.unwrap();
        assert!(text.contains("Mountain Institute of Technology"));
    }

    #[tokio::test]
    async fn missing_local_file_is_an_error() {
        let origin = Origin::Local {
            dir: PathBuf::from("tests/fixtures"),
        };
        let err = origin.fetch("nope.csv").await.unwrap_err();
        assert!(matches!(err, CatalogError::SourceRead { ref source_name, .. } if source_name == "nope.csv"));
    }

    #[tokio::test]
    async fn fetch_all_keeps_configured_order() {
        let settings = SourceSettings::local("tests/fixtures");
        let fetched = fetch_all(&settings).await.unwrap();
        let names: Vec<_> = fetched.primary.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, crate::config::DEFAULT_PRIMARY);
        assert!(fetched.primary[2].1.contains("Mountain Institute"));
        assert!(fetched.extras.contains("Unknown College"));
    }
}
