use std::fmt;

/// Outcome of a single merge: which fields were copied and which were left
/// alone because the patch held `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    applied: Vec<&'static str>,
    skipped: Vec<&'static str>,
}

impl MergeReport {
    /// Record a field that was copied onto the target.
    pub fn record_applied(&mut self, field: &'static str) {
        self.applied.push(field);
    }

    /// Record a field that was skipped because the patch held `None`.
    pub fn record_skipped(&mut self, field: &'static str) {
        self.skipped.push(field);
    }

    pub fn applied(&self) -> &[&'static str] {
        &self.applied
    }

    pub fn skipped(&self) -> &[&'static str] {
        &self.skipped
    }

    /// Returns `true` if nothing was copied.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied.is_empty() {
            return write!(f, "no fields applied");
        }
        write!(f, "applied [{}]", self.applied.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_noop() {
        let report = MergeReport::default();
        assert!(report.is_noop());
        assert_eq!(report.to_string(), "no fields applied");
    }

    #[test]
    fn records_in_order() {
        let mut report = MergeReport::default();
        report.record_applied("title");
        report.record_skipped("description");
        report.record_applied("priority");
        assert!(!report.is_noop());
        assert_eq!(report.applied(), ["title", "priority"]);
        assert_eq!(report.skipped(), ["description"]);
        assert_eq!(report.to_string(), "applied [title, priority]");
    }
}
