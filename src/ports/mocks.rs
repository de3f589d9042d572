//! Call-recording mock implementations of the port traits, shared between
//! unit tests and the integration suite. Deterministic, no network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::MarketRecord;
use crate::ports::icon_source::{IconSource, IconSourceError, MetadataEntry, OffchainMetadata};
use crate::ports::market_feed::{FeedError, MarketFeed};

/// Mock market feed with a queue of scripted responses.
#[derive(Debug, Default)]
pub struct MockMarketFeed {
    responses: Mutex<Vec<Result<Vec<MarketRecord>, String>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockMarketFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch returning `markets`.
    pub fn with_markets(self, markets: Vec<MarketRecord>) -> Self {
        self.responses.lock().unwrap().push(Ok(markets));
        self
    }

    /// Queue a transport failure.
    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    /// Number of fetch calls made.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl MarketFeed for MockMarketFeed {
    async fn fetch_markets(&self) -> Result<Vec<MarketRecord>, FeedError> {
        *self.calls.lock().unwrap() += 1;
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(FeedError::Http("no response configured".to_string()));
        }
        responses.remove(0).map_err(FeedError::Http)
    }
}

/// Mock icon source with configurable metadata, off-chain docs, and images.
#[derive(Debug, Default)]
pub struct MockIconSource {
    metadata: Mutex<HashMap<String, MetadataEntry>>,
    offchain: Mutex<HashMap<String, OffchainMetadata>>,
    images: Mutex<HashMap<String, Vec<u8>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockIconSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the metadata entry returned for `mint`.
    pub fn with_metadata(self, mint: &str, entry: MetadataEntry) -> Self {
        self.metadata.lock().unwrap().insert(mint.to_string(), entry);
        self
    }

    /// Configure the off-chain document returned for `uri`.
    pub fn with_offchain(self, uri: &str, doc: OffchainMetadata) -> Self {
        self.offchain.lock().unwrap().insert(uri.to_string(), doc);
        self
    }

    /// Configure the image bytes returned for `url`.
    pub fn with_image(self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.lock().unwrap().insert(url.to_string(), bytes);
        self
    }

    /// All recorded calls, as "kind:argument" strings in call order.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Total number of network calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, kind: &str, arg: &str) {
        self.calls.lock().unwrap().push(format!("{kind}:{arg}"));
    }
}

#[async_trait]
impl IconSource for MockIconSource {
    async fn token_metadata(&self, mint: &str) -> Result<Option<MetadataEntry>, IconSourceError> {
        self.record("metadata", mint);
        Ok(self.metadata.lock().unwrap().get(mint).cloned())
    }

    async fn offchain_metadata(&self, uri: &str) -> Result<OffchainMetadata, IconSourceError> {
        self.record("offchain", uri);
        self.offchain
            .lock()
            .unwrap()
            .get(uri)
            .cloned()
            .ok_or_else(|| IconSourceError::Http("no response configured".to_string()))
    }

    async fn image_bytes(&self, url: &str) -> Result<Vec<u8>, IconSourceError> {
        self.record("image", url);
        self.images
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| IconSourceError::Http("no response configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_market_feed_queues_responses() {
        let feed = MockMarketFeed::new()
            .with_markets(vec![MarketRecord::default()])
            .with_error("connection reset");

        assert_eq!(feed.fetch_markets().await.unwrap().len(), 1);
        assert!(feed.fetch_markets().await.is_err());
        assert!(feed.fetch_markets().await.is_err());
        assert_eq!(feed.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_icon_source_records_calls() {
        let source = MockIconSource::new()
            .with_metadata("MintA", MetadataEntry::default())
            .with_image("http://img/a.png", vec![1, 2, 3]);

        assert!(source.token_metadata("MintA").await.unwrap().is_some());
        assert!(source.token_metadata("MintB").await.unwrap().is_none());
        assert!(source.offchain_metadata("http://meta/a.json").await.is_err());
        assert_eq!(source.image_bytes("http://img/a.png").await.unwrap(), vec![1, 2, 3]);

        assert_eq!(source.call_count(), 4);
        assert_eq!(
            source.recorded_calls(),
            vec![
                "metadata:MintA",
                "metadata:MintB",
                "offchain:http://meta/a.json",
                "image:http://img/a.png",
            ]
        );
    }
}
