use std::time::Duration;

use crate::pkg::internal::{
    adaptors::{companies::Company, jobs::Job, EntityAdaptor},
    client::ApiClient,
    views::search::CompanySearch,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub company_search: CompanySearch,
}

impl AppState {
    pub fn new(api_url: &str, search_debounce: Duration) -> AppState {
        let api = ApiClient::new(api_url);
        AppState {
            company_search: CompanySearch::new(api.clone(), search_debounce),
            api,
        }
    }

    pub fn companies(&self) -> EntityAdaptor<Company> {
        EntityAdaptor::new(self.api.clone())
    }

    pub fn jobs(&self) -> EntityAdaptor<Job> {
        EntityAdaptor::new(self.api.clone())
    }
}
