use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use crate::{
    pkg::internal::{
        adaptors::companies::{self, Company},
        client::ApiClient,
    },
    prelude::Result,
};

/// Debounced company-name lookup for the autocomplete. Every call
/// supersedes the one before it: a query that has been superseded, before
/// or after its request went out, resolves to `None`, so a stale response
/// can never overwrite a newer suggestion list.
#[derive(Debug, Clone)]
pub struct CompanySearch {
    client: ApiClient,
    debounce: Duration,
    generation: Arc<AtomicU64>,
}

impl CompanySearch {
    pub fn new(client: ApiClient, debounce: Duration) -> Self {
        CompanySearch {
            client,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn lookup(&self, query: &str) -> Result<Option<Vec<Company>>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.superseded(generation) {
            tracing::debug!("search for {:?} superseded before request", query);
            return Ok(None);
        }

        let results = companies::search_by_name(&self.client, query).await?;
        if self.superseded(generation) {
            tracing::debug!("search for {:?} superseded after response", query);
            return Ok(None);
        }
        Ok(Some(results))
    }

    fn superseded(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions_body() -> &'static str {
        r#"[{"id":"c-1","companyName":"Acme","companyURL":"https://acme.example"}]"#
    }

    #[tokio::test]
    async fn single_lookup_returns_suggestions() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/company/search?companyName=ac")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(suggestions_body())
            .create_async()
            .await;

        let search = CompanySearch::new(ApiClient::new(&server.url()), Duration::from_millis(5));
        let results = search.lookup("ac").await.unwrap();
        assert_eq!(results.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn superseded_lookup_yields_none() {
        let mut server = mockito::Server::new_async().await;
        let stale = server
            .mock("GET", "/company/search?companyName=a")
            .expect(0)
            .create_async()
            .await;
        let _fresh = server
            .mock("GET", "/company/search?companyName=ac")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(suggestions_body())
            .create_async()
            .await;

        let search = CompanySearch::new(ApiClient::new(&server.url()), Duration::from_millis(80));
        let first = search.clone();
        let first_task = tokio::spawn(async move { first.lookup("a").await });

        // Let the first lookup enter its debounce window, then type again.
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = search.lookup("ac").await.unwrap();

        assert_eq!(second.unwrap().len(), 1);
        assert_eq!(first_task.await.unwrap().unwrap(), None);
        stale.assert_async().await;
    }

    #[tokio::test]
    async fn empty_result_is_a_hit_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/company/search?companyName=zzz")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let search = CompanySearch::new(ApiClient::new(&server.url()), Duration::from_millis(5));
        let results = search.lookup("zzz").await.unwrap();
        assert_eq!(results, Some(vec![]));
    }
}
