//! The record kinds managed by the back office.

use std::fmt;

/// One of the five record screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    MoveIn,
    MoveOut,
    NoticeAndEviction,
    Payment,
    VendorTask,
}

impl RecordKind {
    /// URL segment and export file prefix.
    pub fn slug(self) -> &'static str {
        match self {
            RecordKind::MoveIn => "move-ins",
            RecordKind::MoveOut => "move-outs",
            RecordKind::NoticeAndEviction => "notices-and-evictions",
            RecordKind::Payment => "payments",
            RecordKind::VendorTask => "vendor-tasks",
        }
    }

    /// Entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            RecordKind::MoveIn => "MoveIn",
            RecordKind::MoveOut => "MoveOut",
            RecordKind::NoticeAndEviction => "NoticeAndEviction",
            RecordKind::Payment => "Payment",
            RecordKind::VendorTask => "VendorTask",
        }
    }

    /// Path of the index screen under the API prefix.
    pub fn index_path(self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.slug())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let kinds = [
            RecordKind::MoveIn,
            RecordKind::MoveOut,
            RecordKind::NoticeAndEviction,
            RecordKind::Payment,
            RecordKind::VendorTask,
        ];
        let mut slugs: Vec<_> = kinds.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), kinds.len());
    }

    #[test]
    fn index_path_joins_prefix() {
        assert_eq!(RecordKind::Payment.index_path("/api/v1"), "/api/v1/payments");
        assert_eq!(RecordKind::MoveOut.index_path("/api/v1/"), "/api/v1/move-outs");
    }
}
