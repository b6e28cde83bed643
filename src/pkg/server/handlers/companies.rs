use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                companies::{Company, CompanyDraft},
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

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub offset: u32,
    pub reload: u64,
    pub notice: Option<String>,
    pub severity: Option<String>,
    pub modal: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetailQuery {
    pub edit: Option<String>,
    pub reload: u64,
    pub notice: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyFormInput {
    pub reload: u64,
    pub company_name: String,
    #[serde(rename = "companyURL")]
    pub company_url: String,
    pub company_address: String,
    pub recruiter_name: String,
    pub recruiter_email: String,
    pub recruiter_number: String,
    pub rate: String,
}

impl CompanyFormInput {
    fn into_draft(self) -> CompanyDraft {
        CompanyDraft {
            company_name: self.company_name,
            company_url: self.company_url,
            company_address: self.company_address,
            recruiter_name: self.recruiter_name,
            recruiter_email: self.recruiter_email,
            recruiter_number: self.recruiter_number,
            rate: self.rate.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteInput {
    pub confirm: String,
    pub reload: u64,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let mut notices = Notices::from_flash(query.severity.as_deref(), query.notice.as_deref());
    let mut view = ListView::new(state.companies());
    view.sync(ReloadToken::new(query.reload), query.offset, &mut notices)
        .await;

    let form = UpsertForm::<Company>::create();
    let show_form = query.modal.as_deref() == Some("add");
    let page = uispec::CompanyListPage::new(view.state(), &notices, query.reload, show_form, &form);
    Ok(Html(page.render()?))
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<CompanyFormInput>,
) -> Result<Response> {
    let mut notices = Notices::new();
    let mut reload = ReloadToken::new(input.reload);
    let mut form = UpsertForm::<Company>::create();
    form.set_draft(input.into_draft());

    match form.submit(&state.companies(), &mut notices, &mut reload).await {
        SubmitOutcome::Saved(_) => {
            Ok(Redirect::to(&flash_url("/company", reload, &notices)).into_response())
        }
        _ => {
            let mut view = ListView::new(state.companies());
            view.refresh(0, &mut notices).await;
            let page =
                uispec::CompanyListPage::new(view.state(), &notices, reload.value(), true, &form);
            Ok(Html(page.render()?).into_response())
        }
    }
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>> {
    let mut notices = Notices::from_flash(query.severity.as_deref(), query.notice.as_deref());
    let mut view = DetailView::new(state.companies());
    view.load(&id, &mut notices).await;

    let page = match view.state() {
        DetailState::Loaded(company) => uispec::CompanyDetailPage::loaded(
            company,
            &notices,
            query.edit.is_some(),
            false,
            query.reload,
        ),
        _ => uispec::CompanyDetailPage::missing(&notices),
    };
    Ok(Html(page.render()?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<CompanyFormInput>,
) -> Result<Response> {
    let mut notices = Notices::new();
    let mut reload = ReloadToken::new(input.reload);
    let record = Company::from_parts(id.clone(), input.into_draft());
    let mut form = UpsertForm::update(record);

    match form.submit(&state.companies(), &mut notices, &mut reload).await {
        SubmitOutcome::Saved(record) => {
            let target = format!("/company/{}", record.id);
            Ok(Redirect::to(&flash_url(&target, reload, &notices)).into_response())
        }
        _ => {
            let page = uispec::CompanyDetailPage::editing(&id, &form, &notices, reload.value());
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

    match flow.execute(&state.companies(), &id, &mut notices).await {
        DeleteOutcome::Deleted => {
            reload.bump();
            Ok(Redirect::to(&flash_url("/company", reload, &notices)).into_response())
        }
        outcome => {
            let confirming = outcome == DeleteOutcome::NotConfirmed;
            let mut view = DetailView::new(state.companies());
            view.load(&id, &mut notices).await;
            let page = match view.state() {
                DetailState::Loaded(company) => uispec::CompanyDetailPage::loaded(
                    company,
                    &notices,
                    false,
                    confirming,
                    reload.value(),
                ),
                _ => uispec::CompanyDetailPage::missing(&notices),
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    #[serde(rename = "companyName")]
    pub company_name: String,
}

#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

/// Autocomplete endpoint. A superseded lookup answers 204 so the client
/// drops it instead of rendering stale suggestions.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    match state.company_search.lookup(&query.company_name).await? {
        Some(companies) => {
            let suggestions: Vec<Suggestion> = companies
                .into_iter()
                .map(|company| Suggestion {
                    id: company.id,
                    label: company.draft.company_name,
                })
                .collect();
            Ok(Json(suggestions).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
