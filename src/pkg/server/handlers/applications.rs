use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    pkg::{
        internal::{adaptors::applications, views::notify::Notices},
        server::{state::AppState, uispec},
    },
    prelude::Result,
};

use super::companies::ListQuery;

/// Combined listing: applications joined with company name and job title.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let mut notices = Notices::from_flash(query.severity.as_deref(), query.notice.as_deref());
    let rows = match applications::lists_with_names(&state.api).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("application listing failed: {}", &err);
            notices.error(err.to_string());
            vec![]
        }
    };
    let page = uispec::ApplicationListPage::new(&rows, &notices);
    Ok(Html(page.render()?))
}
