//! Document kinds.
//!
//! Every authored file conforms to exactly one top-level schema. The kind
//! selects which schema descriptors, converters, and file extension apply.

/// All document kinds the pipeline knows about.
///
/// Adding a new kind requires updating:
/// - This enum (new variant)
/// - `DocumentKind::all()` (add to array)
/// - `DocumentKind::name()` / `file_extension()` (exhaustive match forces a case)
/// - Every boundary converter and the dispatcher, unless the kind is marked
///   as not requiring conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A training course definition
    Course,
    /// A scenario / assessment definition driving real-time assessment
    Scenario,
    /// Learner state interpretation configuration
    LearnerConfiguration,
    /// Pedagogical model configuration
    PedagogyConfiguration,
    /// Content metadata used for adaptive content selection
    Metadata,
    /// A reference to an external training application
    TrainingApplicationReference,
    /// An authored conversation tree
    Conversation,
    /// Sensor pipeline configuration
    SensorConfiguration,
    /// An exported question bank (parse-only, no conversion logic)
    QuestionExport,
    /// An exported survey (parse-only, no conversion logic)
    SurveyExport,
}

impl DocumentKind {
    /// All document kinds.
    pub const fn all() -> &'static [DocumentKind] {
        &[
            DocumentKind::Course,
            DocumentKind::Scenario,
            DocumentKind::LearnerConfiguration,
            DocumentKind::PedagogyConfiguration,
            DocumentKind::Metadata,
            DocumentKind::TrainingApplicationReference,
            DocumentKind::Conversation,
            DocumentKind::SensorConfiguration,
            DocumentKind::QuestionExport,
            DocumentKind::SurveyExport,
        ]
    }

    /// Human-readable name, used in log and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            DocumentKind::Course => "Course",
            DocumentKind::Scenario => "Scenario",
            DocumentKind::LearnerConfiguration => "LearnerConfiguration",
            DocumentKind::PedagogyConfiguration => "PedagogyConfiguration",
            DocumentKind::Metadata => "Metadata",
            DocumentKind::TrainingApplicationReference => "TrainingApplicationReference",
            DocumentKind::Conversation => "Conversation",
            DocumentKind::SensorConfiguration => "SensorConfiguration",
            DocumentKind::QuestionExport => "QuestionExport",
            DocumentKind::SurveyExport => "SurveyExport",
        }
    }

    /// Canonical file extension for this kind of document.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            DocumentKind::Course => ".course.xml",
            DocumentKind::Scenario => ".dkf.xml",
            DocumentKind::LearnerConfiguration => ".learnerconfig.xml",
            DocumentKind::PedagogyConfiguration => ".pedagogyconfig.xml",
            DocumentKind::Metadata => ".metadata.xml",
            DocumentKind::TrainingApplicationReference => ".trainingapp.xml",
            DocumentKind::Conversation => ".conversationTree.xml",
            DocumentKind::SensorConfiguration => ".sensorconfig.xml",
            DocumentKind::QuestionExport => ".qexport.xml",
            DocumentKind::SurveyExport => ".sexport.xml",
        }
    }

    /// Whether the conversion chain has logic for this kind.
    ///
    /// Export files are interchange snapshots; the dispatcher parses them
    /// against the current schema and never runs the chain.
    pub const fn requires_conversion(&self) -> bool {
        !matches!(
            self,
            DocumentKind::QuestionExport | DocumentKind::SurveyExport
        )
    }

    /// Whether the dispatcher keeps the pre-conversion document as a
    /// caller-visible backup after a successful upconversion.
    ///
    /// Training application references are regenerated freely by the
    /// authoring tools and are exempt from backup retention.
    pub const fn retains_backup(&self) -> bool {
        !matches!(self, DocumentKind::TrainingApplicationReference)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_names_and_extensions() {
        for kind in DocumentKind::all() {
            assert!(!kind.name().is_empty());
            assert!(kind.file_extension().ends_with(".xml"));
        }
    }

    #[test]
    fn test_export_kinds_bypass_conversion() {
        assert!(!DocumentKind::QuestionExport.requires_conversion());
        assert!(!DocumentKind::SurveyExport.requires_conversion());
        assert!(DocumentKind::Course.requires_conversion());
        assert!(DocumentKind::Scenario.requires_conversion());
    }

    #[test]
    fn test_training_app_ref_skips_backup() {
        assert!(!DocumentKind::TrainingApplicationReference.retains_backup());
        assert!(DocumentKind::Course.retains_backup());
        assert!(DocumentKind::Metadata.retains_backup());
    }

    #[test]
    fn test_extensions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in DocumentKind::all() {
            assert!(
                seen.insert(kind.file_extension()),
                "duplicate extension {}",
                kind.file_extension()
            );
        }
    }
}
