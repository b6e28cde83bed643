use askama::Template;
use axum::response::Html;

use crate::{pkg::server::uispec::Home, prelude::Result};

pub async fn home() -> Result<Html<String>> {
    let template = Home {
        service: "Job Tracker",
        notices: vec![],
    };
    Ok(Html(template.render()?))
}
