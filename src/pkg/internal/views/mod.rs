pub mod detail;
pub mod list;
pub mod notify;
pub mod search;
pub mod upsert;

/// Explicit version counter whose change tells a view to re-fetch its
/// data. Replaces the original object-identity toggle with a typed value
/// that can round-trip through a query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadToken(u64);

impl ReloadToken {
    pub fn new(value: u64) -> Self {
        ReloadToken(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
