pub mod applications;
pub mod companies;
pub mod dashboard;
pub mod jobs;
pub mod probes;

use crate::pkg::internal::views::{notify::Notices, ReloadToken};

/// Redirect target after a successful mutation: the bumped reload token
/// plus the first notice carried as flash parameters.
pub(crate) fn flash_url(base: &str, reload: ReloadToken, notices: &Notices) -> String {
    let mut params: Vec<(&str, String)> = vec![("reload", reload.value().to_string())];
    if let Some(notice) = notices.first() {
        params.push(("severity", notice.severity.as_str().to_string()));
        params.push(("notice", notice.message.clone()));
    }
    match serde_urlencoded::to_string(&params) {
        Ok(query) => format!("{base}?{query}"),
        Err(_) => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_url_encodes_notice_and_reload() {
        let mut notices = Notices::new();
        notices.success("Company added successfully");
        let mut reload = ReloadToken::default();
        reload.bump();
        let url = flash_url("/company", reload, &notices);
        assert_eq!(
            url,
            "/company?reload=1&severity=success&notice=Company+added+successfully"
        );
    }
}
