use serde::{Deserialize, Serialize};

use crate::{
    pkg::internal::{
        adaptors::EntityRecord,
        client::ApiClient,
        forms::{FieldErrors, Rules, ValidateDraft},
    },
    prelude::Result,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    #[serde(flatten)]
    pub draft: CompanyDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    #[serde(default)]
    pub company_name: String,
    #[serde(default, rename = "companyURL")]
    pub company_url: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub recruiter_name: String,
    #[serde(default)]
    pub recruiter_email: String,
    #[serde(default)]
    pub recruiter_number: String,
    /// Star rating, 0 through 5.
    #[serde(default)]
    pub rate: u8,
}

impl EntityRecord for Company {
    type Draft = CompanyDraft;

    const SEGMENT: &'static str = "company";
    const NOUN: &'static str = "Company";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_parts(id: String, draft: CompanyDraft) -> Self {
        Company { id, draft }
    }

    fn into_parts(self) -> (String, CompanyDraft) {
        (self.id, self.draft)
    }
}

impl ValidateDraft for CompanyDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "companyName", &self.company_name)
            .required("Company name is required")
            .max_len(100);
        Rules::field(&mut errors, "companyURL", &self.company_url)
            .required("Company URL is required")
            .max_len(150)
            .absolute_url();
        Rules::field(&mut errors, "companyAddress", &self.company_address).max_len(255);
        Rules::field(&mut errors, "recruiterName", &self.recruiter_name).max_len(100);
        Rules::field(&mut errors, "recruiterEmail", &self.recruiter_email)
            .max_len(150)
            .email();
        Rules::field(&mut errors, "recruiterNumber", &self.recruiter_number).max_len(50);
        if self.rate > 5 {
            errors.push("rate", "Rate must be between 0 and 5");
        }
        errors
    }
}

/// `GET {base}/company/search?companyName={q}`. Substring search backing
/// the related-company autocomplete; empty vec when nothing matches.
pub async fn search_by_name(client: &ApiClient, query: &str) -> Result<Vec<Company>> {
    let url = client.url("/company/search");
    let response = client
        .http()
        .get(url)
        .query(&[("companyName", query)])
        .send()
        .await?;
    ApiClient::read_json(response).await
}
