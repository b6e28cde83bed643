use chrono::{DateTime, Utc};
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
pub struct Application {
    pub id: String,
    /// Assigned by the server on create; never sent back on update.
    #[serde(default, skip_serializing, rename = "dateCreated")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: ApplicationDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub status: String,
}

impl EntityRecord for Application {
    type Draft = ApplicationDraft;

    const SEGMENT: &'static str = "application";
    const NOUN: &'static str = "Application";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_parts(id: String, draft: ApplicationDraft) -> Self {
        Application {
            id,
            date_created: None,
            draft,
        }
    }

    fn into_parts(self) -> (String, ApplicationDraft) {
        (self.id, self.draft)
    }
}

impl ValidateDraft for ApplicationDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "companyId", &self.company_id)
            .required("Related company is required");
        Rules::field(&mut errors, "jobId", &self.job_id).required("Related job is required");
        Rules::field(&mut errors, "status", &self.status).max_len(255);
        errors
    }
}

/// Row of the combined listing, `GET {base}/application/lists`: one
/// application joined with its company name and job title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

pub async fn lists_with_names(client: &ApiClient) -> Result<Vec<ApplicationRow>> {
    let url = client.url("/application/lists");
    let response = client.http().get(url).send().await?;
    ApiClient::read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::EntityAdaptor;

    #[tokio::test]
    async fn create_payload_excludes_id_and_creation_timestamp() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/application/create")
            .match_body(mockito::Matcher::JsonString(
                r#"{"companyId":"c-1","jobId":"j-1","status":"applied"}"#.into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"a-1","companyId":"c-1","jobId":"j-1","status":"applied","dateCreated":"2024-03-01T09:30:00Z"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let adaptor = EntityAdaptor::<Application>::new(ApiClient::new(&server.url()));
        let draft = ApplicationDraft {
            company_id: "c-1".into(),
            job_id: "j-1".into(),
            status: "applied".into(),
        };
        let created = adaptor.create(&draft).await.unwrap();
        assert_eq!(created.id, "a-1");
        assert!(created.date_created.is_some());
    }

    #[tokio::test]
    async fn update_payload_excludes_creation_timestamp() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", "/application/a-1")
            .match_body(mockito::Matcher::JsonString(
                r#"{"id":"a-1","companyId":"c-1","jobId":"j-1","status":"interview"}"#.into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"a-1","companyId":"c-1","jobId":"j-1","status":"interview"}"#)
            .expect(1)
            .create_async()
            .await;

        let adaptor = EntityAdaptor::<Application>::new(ApiClient::new(&server.url()));
        let record = Application::from_parts(
            "a-1".into(),
            ApplicationDraft {
                company_id: "c-1".into(),
                job_id: "j-1".into(),
                status: "interview".into(),
            },
        );
        adaptor.update(&record).await.unwrap();
    }

    #[tokio::test]
    async fn combined_listing_parses_joined_rows() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/application/lists")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"a-1","companyName":"Acme","jobTitle":"Backend Engineer","status":"applied","dateCreated":"2024-03-01T09:30:00Z"}]"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let rows = lists_with_names(&client).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name, "Acme");
        assert_eq!(rows[0].job_title, "Backend Engineer");
    }
}
