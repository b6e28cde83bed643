use crate::pkg::internal::{
    adaptors::{EntityAdaptor, EntityRecord},
    views::notify::Notices,
};

#[derive(Debug)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    Missing,
}

pub struct DetailView<T: EntityRecord> {
    adaptor: EntityAdaptor<T>,
    state: DetailState<T>,
}

impl<T: EntityRecord> DetailView<T> {
    pub fn new(adaptor: EntityAdaptor<T>) -> Self {
        DetailView {
            adaptor,
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub async fn load(&mut self, id: &str, notices: &mut Notices) {
        self.state = DetailState::Loading;
        match self.adaptor.get(id).await {
            Ok(record) => self.state = DetailState::Loaded(record),
            Err(err) => {
                tracing::warn!("detail fetch failed for {}: {}", id, &err);
                notices.error(err.to_string());
                self.state = DetailState::Missing;
            }
        }
    }
}

/// Blocking confirmation gate in front of the delete call. `execute`
/// refuses to touch the network until `confirm` has been called.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    confirmed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation step was skipped; nothing was sent.
    NotConfirmed,
    Deleted,
    Failed,
}

impl DeleteFlow {
    pub fn new() -> Self {
        DeleteFlow::default()
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    pub fn cancel(&mut self) {
        self.confirmed = false;
    }

    pub async fn execute<T: EntityRecord>(
        &self,
        adaptor: &EntityAdaptor<T>,
        id: &str,
        notices: &mut Notices,
    ) -> DeleteOutcome {
        if !self.confirmed {
            return DeleteOutcome::NotConfirmed;
        }
        match adaptor.delete(id).await {
            Ok(()) => {
                notices.success(format!("{} deleted successfully", T::NOUN));
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!("delete failed for {}: {}", id, &err);
                notices.error(err.to_string());
                DeleteOutcome::Failed
            }
        }
    }
}
