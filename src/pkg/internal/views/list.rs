use crate::pkg::internal::{
    adaptors::{EntityAdaptor, EntityRecord},
    views::{notify::Notices, ReloadToken},
};

/// Loading on construction and on every reload; Empty and Populated are
/// only reachable after a fetch settles.
#[derive(Debug)]
pub enum ListState<T> {
    Loading,
    Empty,
    Populated(Vec<T>),
}

pub struct ListView<T: EntityRecord> {
    adaptor: EntityAdaptor<T>,
    state: ListState<T>,
    seen: ReloadToken,
}

impl<T: EntityRecord> ListView<T> {
    pub fn new(adaptor: EntityAdaptor<T>) -> Self {
        ListView {
            adaptor,
            state: ListState::Loading,
            seen: ReloadToken::default(),
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Re-enter Loading and fetch. A failed fetch reports an error notice
    /// and restores whatever was on screen before the spinner.
    pub async fn refresh(&mut self, offset: u32, notices: &mut Notices) {
        let previous = std::mem::replace(&mut self.state, ListState::Loading);
        match self.adaptor.list(offset).await {
            Ok(rows) if rows.is_empty() => self.state = ListState::Empty,
            Ok(rows) => self.state = ListState::Populated(rows),
            Err(err) => {
                tracing::warn!("list fetch failed: {}", &err);
                notices.error(err.to_string());
                self.state = match previous {
                    ListState::Loading => ListState::Empty,
                    settled => settled,
                };
            }
        }
    }

    /// Fetch when the reload token moved past what this view has seen, or
    /// when nothing was fetched yet.
    pub async fn sync(&mut self, token: ReloadToken, offset: u32, notices: &mut Notices) {
        if token == self.seen && !matches!(self.state, ListState::Loading) {
            return;
        }
        self.seen = token;
        self.refresh(offset, notices).await;
    }
}
