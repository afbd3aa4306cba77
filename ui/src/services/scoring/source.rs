use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::try_join_all;
use lru::LruCache;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

use super::errors::{ScoringError, ScoringResult};
use super::norm_table::{NormTable, NormTableKey};
use super::report::{score, NormTables, RawScores, ScoreReport};
use crate::records::AnswerSumRequest;

/// Where norm tables come from
#[async_trait(?Send)]
pub trait NormTableSource {
    async fn load(&self, key: &NormTableKey) -> ScoringResult<Rc<NormTable>>;
}

/// A norm table source shared between components
#[derive(Clone)]
pub struct SharedNormTableSource(Rc<dyn NormTableSource>);

impl SharedNormTableSource {
    pub fn new(source: impl NormTableSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> &dyn NormTableSource {
        self.0.as_ref()
    }
}

impl PartialEq for SharedNormTableSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fetches `{base_url}/{relative_path}` as JSON
pub struct HttpNormTableSource {
    http_client: Client,
    base_url: String,
}

impl HttpNormTableSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, key: &NormTableKey) -> ScoringResult<String> {
        Ok(format!("{}/{}", self.base_url, key.relative_path()?))
    }
}

#[async_trait(?Send)]
impl NormTableSource for HttpNormTableSource {
    #[instrument(skip(self), err)]
    async fn load(&self, key: &NormTableKey) -> ScoringResult<Rc<NormTable>> {
        let path = key.relative_path()?;
        let url = self.url_for(key)?;

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScoringError::Fetch {
                path: path.clone(),
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ScoringError::NotFound { path }),
            status if !status.is_success() => {
                return Err(ScoringError::Fetch {
                    path,
                    message: format!("HTTP {}", status),
                })
            }
            _ => {}
        }

        let body = response.text().await.map_err(|e| ScoringError::Fetch {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let table = NormTable::from_json(&body)?;
        info!("Loaded norm table {} ({} columns)", path, table.columns().len());
        Ok(Rc::new(table))
    }
}

/// Keeps recently used tables in memory in front of another source
pub struct CachedNormTableSource<S> {
    inner: S,
    cache: RefCell<LruCache<String, Rc<NormTable>>>,
}

impl<S: NormTableSource> CachedNormTableSource<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[async_trait(?Send)]
impl<S: NormTableSource> NormTableSource for CachedNormTableSource<S> {
    async fn load(&self, key: &NormTableKey) -> ScoringResult<Rc<NormTable>> {
        let cache_key = key.cache_key()?;
        if let Some(table) = self.cache.borrow_mut().get(&cache_key) {
            debug!("Norm table cache hit: {}", cache_key);
            return Ok(Rc::clone(table));
        }

        let table = self.inner.load(key).await?;
        self.cache.borrow_mut().put(cache_key, Rc::clone(&table));
        Ok(table)
    }
}

/// Score an assessment against the norm group of its patient.
///
/// Only the tables the raw scores need are loaded.
pub async fn score_assessment(
    source: &dyn NormTableSource,
    record: &AnswerSumRequest,
    raw: &RawScores,
) -> ScoringResult<ScoreReport> {
    let keys: Vec<NormTableKey> = raw
        .required_tables()
        .into_iter()
        .map(|kind| NormTableKey {
            gender: record.gender,
            age: record.age,
            kind,
            respondent: record.respondent,
            setting: record.setting,
        })
        .collect();

    let loaded = try_join_all(keys.iter().map(|key| source.load(key))).await?;

    let mut tables = NormTables::default();
    for (key, table) in keys.iter().zip(loaded) {
        tables.set(key.kind, table);
    }

    score(raw, &tables)
}
