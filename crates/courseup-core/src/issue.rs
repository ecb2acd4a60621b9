//! Accumulator for non-fatal conversion issues.

/// An append-only record of content that could not be carried forward.
///
/// One `IssueLog` is created per top-level migration call and threaded by
/// mutable reference through every hop of the conversion chain, so the last
/// converter reports the issues of the converters before it. Entries never
/// abort a migration; they inform the caller after the chain completes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssueLog {
    entries: Vec<String>,
}

impl IssueLog {
    /// Creates an empty issue log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one lossy or unsupported construct.
    ///
    /// The note is an opaque descriptive string surfaced to the document's
    /// author, e.g. `"Quadrant Specific Element"`.
    pub fn record(&mut self, note: impl Into<String>) {
        let note = note.into();
        tracing::warn!("Conversion issue: {}", note);
        self.entries.push(note);
    }

    /// All recorded notes, in the order they were recorded.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded notes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many notes contain the given fragment.
    pub fn count_of(&self, fragment: &str) -> usize {
        self.entries.iter().filter(|e| e.contains(fragment)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut log = IssueLog::new();
        log.record("first");
        log.record("second");
        assert_eq!(log.entries(), ["first", "second"]);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_count_of_matches_fragments() {
        let mut log = IssueLog::new();
        log.record("Quadrant Specific Element");
        log.record("Quadrant Specific Element");
        log.record("Legacy sensor 'pulse'");
        assert_eq!(log.count_of("Quadrant Specific"), 2);
        assert_eq!(log.count_of("Legacy sensor"), 1);
        assert_eq!(log.count_of("nothing"), 0);
    }
}
