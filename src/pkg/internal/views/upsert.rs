use crate::pkg::internal::{
    adaptors::{EntityAdaptor, EntityRecord},
    forms::{FieldErrors, ValidateDraft},
    views::{notify::Notices, ReloadToken},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: String },
}

#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// A submit was already in flight; nothing was sent.
    Busy,
    /// Validation failed; nothing was sent and the field errors are set.
    Invalid,
    /// Saved, form reset and closed, reload token bumped.
    Saved(T),
    /// The request failed; the form stays open with the input intact.
    Failed,
}

/// Create/update form over an entity draft. One instance drives one modal:
/// the busy flag gates re-entry while a request is in flight, and is
/// cleared on every exit path.
pub struct UpsertForm<T: EntityRecord> {
    mode: FormMode,
    draft: T::Draft,
    errors: FieldErrors,
    busy: bool,
    open: bool,
}

impl<T: EntityRecord> UpsertForm<T> {
    pub fn create() -> Self {
        UpsertForm {
            mode: FormMode::Create,
            draft: T::Draft::default(),
            errors: FieldErrors::new(),
            busy: false,
            open: true,
        }
    }

    /// Update mode: fields pre-filled from the existing record.
    pub fn update(record: T) -> Self {
        let (id, draft) = record.into_parts();
        UpsertForm {
            mode: FormMode::Update { id },
            draft,
            errors: FieldErrors::new(),
            busy: false,
            open: true,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Bind fresh input and re-run the whole schema, mirroring the
    /// validate-on-every-change contract.
    pub fn set_draft(&mut self, draft: T::Draft) {
        self.draft = draft;
        self.errors = self.draft.validate();
    }

    pub fn validate_all(&mut self) -> bool {
        self.errors = self.draft.validate();
        self.errors.is_empty()
    }

    pub async fn submit(
        &mut self,
        adaptor: &EntityAdaptor<T>,
        notices: &mut Notices,
        reload: &mut ReloadToken,
    ) -> SubmitOutcome<T> {
        if self.busy {
            return SubmitOutcome::Busy;
        }
        if !self.validate_all() {
            return SubmitOutcome::Invalid;
        }

        self.busy = true;
        let result = match &self.mode {
            FormMode::Create => adaptor.create(&self.draft).await,
            FormMode::Update { id } => {
                let record = T::from_parts(id.clone(), self.draft.clone());
                adaptor.update(&record).await
            }
        };
        self.busy = false;

        match result {
            Ok(record) => {
                self.open = false;
                self.draft = T::Draft::default();
                let verb = match self.mode {
                    FormMode::Create => "added",
                    FormMode::Update { .. } => "updated",
                };
                notices.success(format!("{} {verb} successfully", T::NOUN));
                reload.bump();
                SubmitOutcome::Saved(record)
            }
            Err(err) => {
                tracing::warn!("submit failed: {}", &err);
                notices.error(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    #[cfg(test)]
    fn force_busy(&mut self) {
        self.busy = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::{
        adaptors::companies::{Company, CompanyDraft},
        client::ApiClient,
        views::notify::Severity,
    };

    fn draft() -> CompanyDraft {
        CompanyDraft {
            company_name: "Acme".into(),
            company_url: "https://acme.example".into(),
            rate: 3,
            ..CompanyDraft::default()
        }
    }

    fn adaptor(server: &mockito::Server) -> EntityAdaptor<Company> {
        EntityAdaptor::new(ApiClient::new(&server.url()))
    }

    #[tokio::test]
    async fn invalid_draft_blocks_the_network_call() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/company/create")
            .expect(0)
            .create_async()
            .await;

        let mut form = UpsertForm::<Company>::create();
        let mut notices = Notices::new();
        let mut reload = ReloadToken::default();
        let outcome = form
            .submit(&adaptor(&server), &mut notices, &mut reload)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(
            form.errors().get("companyName"),
            Some("Company name is required")
        );
        assert_eq!(reload.value(), 0);
        assert!(form.is_open());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn successful_create_closes_resets_and_reloads_once() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/company/create")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"c-1","companyName":"Acme","companyURL":"https://acme.example","rate":3}"#)
            .expect(1)
            .create_async()
            .await;

        let mut form = UpsertForm::<Company>::create();
        form.set_draft(draft());
        let mut notices = Notices::new();
        let mut reload = ReloadToken::default();
        let outcome = form
            .submit(&adaptor(&server), &mut notices, &mut reload)
            .await;

        match outcome {
            SubmitOutcome::Saved(record) => assert_eq!(record.id, "c-1"),
            other => panic!("expected saved outcome, got {other:?}"),
        }
        assert!(!form.is_open());
        assert!(!form.is_busy());
        assert_eq!(form.draft(), &CompanyDraft::default());
        assert_eq!(reload.value(), 1);
        let notice = notices.first().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Company added successfully");
    }

    #[tokio::test]
    async fn failing_update_keeps_the_form_open_and_clears_busy() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", "/company/c-1")
            .with_status(500)
            .with_body(r#"{"error":"storage unavailable"}"#)
            .expect(1)
            .create_async()
            .await;

        let record = Company::from_parts("c-1".into(), draft());
        let mut form = UpsertForm::update(record);
        let mut notices = Notices::new();
        let mut reload = ReloadToken::default();
        let outcome = form
            .submit(&adaptor(&server), &mut notices, &mut reload)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed));
        assert!(form.is_open());
        assert!(!form.is_busy());
        assert_eq!(reload.value(), 0);
        let notice = notices.first().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.message.contains("storage unavailable"));
    }

    #[tokio::test]
    async fn busy_form_ignores_a_second_submit() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/company/create")
            .expect(0)
            .create_async()
            .await;

        let mut form = UpsertForm::<Company>::create();
        form.set_draft(draft());
        form.force_busy();
        let mut notices = Notices::new();
        let mut reload = ReloadToken::default();
        let outcome = form
            .submit(&adaptor(&server), &mut notices, &mut reload)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Busy));
        assert!(notices.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn update_mode_prefills_from_the_record() {
        let record = Company::from_parts("c-1".into(), draft());
        let form = UpsertForm::update(record);
        assert_eq!(form.mode(), &FormMode::Update { id: "c-1".into() });
        assert_eq!(form.draft().company_name, "Acme");
    }
}
