use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                jobs::{Job, JobDraft, JobType},
                EntityRecord,
            },
            views::{
                detail::{DeleteFlow, DeleteOutcome, DetailState, DetailView},
                list::ListView,
                notify::Notices,
                upsert::{SubmitOutcome, UpsertForm},
                ReloadToken,
            },
        },
        server::{handlers::flash_url, state::AppState, uispec},
    },
    prelude::Result,
};

use super::companies::{DeleteInput, DetailQuery, ListQuery};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFormInput {
    pub reload: u64,
    pub job_title: String,
    pub job_link: String,
    pub job_location: String,
    pub job_description: String,
    pub job_requirement: String,
    pub job_experience_level: String,
    pub job_type: String,
    pub job_salary_range: String,
    pub job_status: String,
    pub company_id: String,
    /// Display text of the picked suggestion, echoed back on re-render.
    pub company_label: String,
}

impl JobFormInput {
    fn into_draft(self) -> JobDraft {
        JobDraft {
            job_title: self.job_title,
            job_link: self.job_link,
            job_location: self.job_location,
            job_description: self.job_description,
            job_requirement: self.job_requirement,
            job_experience_level: self.job_experience_level,
            job_type: JobType::parse(&self.job_type).unwrap_or_default(),
            job_salary_range: self.job_salary_range,
            job_status: self.job_status,
            company_id: self.company_id,
        }
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let mut notices = Notices::from_flash(query.severity.as_deref(), query.notice.as_deref());
    let mut view = ListView::new(state.jobs());
    view.sync(ReloadToken::new(query.reload), query.offset, &mut notices)
        .await;

    let form = UpsertForm::<Job>::create();
    let show_form = query.modal.as_deref() == Some("add");
    let page =
        uispec::JobListPage::new(view.state(), &notices, query.reload, show_form, &form, "");
    Ok(Html(page.render()?))
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<JobFormInput>,
) -> Result<Response> {
    let mut notices = Notices::new();
    let mut reload = ReloadToken::new(input.reload);
    let company_label = input.company_label.clone();
    let mut form = UpsertForm::<Job>::create();
    form.set_draft(input.into_draft());

    match form.submit(&state.jobs(), &mut notices, &mut reload).await {
        SubmitOutcome::Saved(_) => {
            Ok(Redirect::to(&flash_url("/job", reload, &notices)).into_response())
        }
        _ => {
            let mut view = ListView::new(state.jobs());
            view.refresh(0, &mut notices).await;
            let page = uispec::JobListPage::new(
                view.state(),
                &notices,
                reload.value(),
                true,
                &form,
                &company_label,
            );
            Ok(Html(page.render()?).into_response())
        }
    }
}

/// Resolve the related company's name for the autocomplete prefill. The
/// page still renders when the lookup fails; the box just starts blank.
async fn company_label_for(state: &AppState, company_id: &str) -> String {
    if company_id.is_empty() {
        return String::new();
    }
    match state.companies().get(company_id).await {
        Ok(company) => company.draft.company_name,
        Err(err) => {
            tracing::debug!("company label lookup failed for {}: {}", company_id, &err);
            String::new()
        }
    }
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>> {
    let mut notices = Notices::from_flash(query.severity.as_deref(), query.notice.as_deref());
    let mut view = DetailView::new(state.jobs());
    view.load(&id, &mut notices).await;

    let page = match view.state() {
        DetailState::Loaded(job) => {
            let editing = query.edit.is_some();
            let label = if editing {
                company_label_for(&state, &job.draft.company_id).await
            } else {
                String::new()
            };
            uispec::JobDetailPage::loaded(job, &label, &notices, editing, false, query.reload)
        }
        _ => uispec::JobDetailPage::missing(&notices),
    };
    Ok(Html(page.render()?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<JobFormInput>,
) -> Result<Response> {
    let mut notices = Notices::new();
    let mut reload = ReloadToken::new(input.reload);
    let company_label = input.company_label.clone();
    let record = Job::from_parts(id.clone(), input.into_draft());
    let mut form = UpsertForm::update(record);

    match form.submit(&state.jobs(), &mut notices, &mut reload).await {
        SubmitOutcome::Saved(record) => {
            let target = format!("/job/{}", record.id);
            Ok(Redirect::to(&flash_url(&target, reload, &notices)).into_response())
        }
        _ => {
            let page =
                uispec::JobDetailPage::editing(&id, &form, &company_label, &notices, reload.value());
            Ok(Html(page.render()?).into_response())
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<DeleteInput>,
) -> Result<Response> {
    let mut notices = Notices::new();
    let mut reload = ReloadToken::new(input.reload);
    let mut flow = DeleteFlow::new();
    if input.confirm == "yes" {
        flow.confirm();
    }

    match flow.execute(&state.jobs(), &id, &mut notices).await {
        DeleteOutcome::Deleted => {
            reload.bump();
            Ok(Redirect::to(&flash_url("/job", reload, &notices)).into_response())
        }
        outcome => {
            let confirming = outcome == DeleteOutcome::NotConfirmed;
            let mut view = DetailView::new(state.jobs());
            view.load(&id, &mut notices).await;
            let page = match view.state() {
                DetailState::Loaded(job) => uispec::JobDetailPage::loaded(
                    job,
                    "",
                    &notices,
                    false,
                    confirming,
                    reload.value(),
                ),
                _ => uispec::JobDetailPage::missing(&notices),
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}
