//! Migration results.

use courseup_core::{DocumentKind, IssueLog, OriginalDocument};
use courseup_schema::latest;

/// A document at the current schema version, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum MigratedDocument {
    Course(latest::course::Course),
    Scenario(latest::scenario::Scenario),
    LearnerConfiguration(latest::learner::LearnerConfiguration),
    PedagogyConfiguration(latest::pedagogy::PedagogyConfiguration),
    Metadata(latest::metadata::Metadata),
    TrainingApplicationReference(latest::course::TrainingApplicationWrapper),
    Conversation(latest::conversation::Conversation),
    SensorConfiguration(latest::sensor::SensorsConfiguration),
    QuestionExport(latest::survey::QuestionExport),
    SurveyExport(latest::survey::SurveyExport),
}

impl MigratedDocument {
    /// The document kind of this tree.
    pub fn kind(&self) -> DocumentKind {
        match self {
            MigratedDocument::Course(_) => DocumentKind::Course,
            MigratedDocument::Scenario(_) => DocumentKind::Scenario,
            MigratedDocument::LearnerConfiguration(_) => DocumentKind::LearnerConfiguration,
            MigratedDocument::PedagogyConfiguration(_) => DocumentKind::PedagogyConfiguration,
            MigratedDocument::Metadata(_) => DocumentKind::Metadata,
            MigratedDocument::TrainingApplicationReference(_) => {
                DocumentKind::TrainingApplicationReference
            }
            MigratedDocument::Conversation(_) => DocumentKind::Conversation,
            MigratedDocument::SensorConfiguration(_) => DocumentKind::SensorConfiguration,
            MigratedDocument::QuestionExport(_) => DocumentKind::QuestionExport,
            MigratedDocument::SurveyExport(_) => DocumentKind::SurveyExport,
        }
    }
}

/// Everything a caller gets back from one top-level migration call.
///
/// Immutable after construction; owned by the caller. The issue log is the
/// accumulator that was threaded through every hop of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationResult {
    /// The migrated (or directly parsed) current-version tree.
    pub document: MigratedDocument,
    /// The document kind that was migrated.
    pub kind: DocumentKind,
    /// The pre-conversion document, retained for kinds that keep backups.
    /// `None` when no migration occurred.
    pub original: Option<OriginalDocument>,
    /// Whether an upconversion actually happened.
    pub upconverted: bool,
    /// The version attribute the input declared before migration.
    pub source_version: String,
    /// Non-fatal loss notes accumulated across all hops.
    pub issues: IssueLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrated_document_reports_its_kind() {
        let document = MigratedDocument::Metadata(latest::metadata::Metadata {
            version: "10.0.1".to_string(),
            display_name: None,
            content: latest::metadata::Content {
                reference: latest::metadata::ContentRef::Simple(latest::metadata::SimpleRef {
                    value: "slides.pptx".to_string(),
                }),
            },
            present_at: latest::metadata::PresentAt::default(),
            concepts: latest::metadata::Concepts::default(),
        });
        assert_eq!(document.kind(), DocumentKind::Metadata);
    }
}
