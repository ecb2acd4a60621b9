//! Schema descriptor registry.
//!
//! Process-wide constants describing, per schema version, where each
//! document kind's schema definition lives and what the root element is
//! called. Boundary converters expose the descriptors of the version they
//! convert *from*; the dispatcher uses the current-version descriptors for
//! already-latest and export files.

use courseup_core::{DocumentKind, SchemaDescriptor, SchemaVersion};

macro_rules! version_descriptors {
    ($name:ident, $version:expr, $dir:literal) => {
        pub mod $name {
            use super::*;

            pub static COURSE: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::Course,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/course.xsd"),
                root_element: "Course",
            };
            pub static SCENARIO: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::Scenario,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/scenario.xsd"),
                root_element: "Scenario",
            };
            pub static LEARNER: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::LearnerConfiguration,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/learnerConfig.xsd"),
                root_element: "LearnerConfiguration",
            };
            pub static PEDAGOGY: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::PedagogyConfiguration,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/pedagogyConfig.xsd"),
                root_element: "PedagogyConfiguration",
            };
            pub static METADATA: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::Metadata,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/metadata.xsd"),
                root_element: "Metadata",
            };
            pub static TRAINING_APP: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::TrainingApplicationReference,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/trainingApp.xsd"),
                root_element: "TrainingApplicationWrapper",
            };
            pub static CONVERSATION: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::Conversation,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/conversationTree.xsd"),
                root_element: "Conversation",
            };
            pub static SENSOR: SchemaDescriptor = SchemaDescriptor {
                kind: DocumentKind::SensorConfiguration,
                version: $version,
                schema_file: concat!("schemas/", $dir, "/sensorConfig.xsd"),
                root_element: "SensorsConfiguration",
            };
        }
    };
}

version_descriptors!(v6, SchemaVersion::V6, "6.0");
version_descriptors!(v7, SchemaVersion::V7, "7.0");
version_descriptors!(v8, SchemaVersion::V8, "8.0");
version_descriptors!(v9, SchemaVersion::V9, "9.0");
version_descriptors!(latest, SchemaVersion::V10, "10.0");

/// Export snapshots only exist at the current version.
pub static QUESTION_EXPORT: SchemaDescriptor = SchemaDescriptor {
    kind: DocumentKind::QuestionExport,
    version: SchemaVersion::V10,
    schema_file: "schemas/10.0/questionExport.xsd",
    root_element: "QuestionExport",
};

pub static SURVEY_EXPORT: SchemaDescriptor = SchemaDescriptor {
    kind: DocumentKind::SurveyExport,
    version: SchemaVersion::V10,
    schema_file: "schemas/10.0/surveyExport.xsd",
    root_element: "SurveyExport",
};

/// Looks up the descriptor for a (kind, version) pair.
///
/// Returns `None` for export kinds at pre-current versions; those files
/// never existed under older schemas.
pub fn descriptor(
    kind: DocumentKind,
    version: SchemaVersion,
) -> Option<&'static SchemaDescriptor> {
    macro_rules! pick {
        ($module:ident) => {
            match kind {
                DocumentKind::Course => Some(&$module::COURSE),
                DocumentKind::Scenario => Some(&$module::SCENARIO),
                DocumentKind::LearnerConfiguration => Some(&$module::LEARNER),
                DocumentKind::PedagogyConfiguration => Some(&$module::PEDAGOGY),
                DocumentKind::Metadata => Some(&$module::METADATA),
                DocumentKind::TrainingApplicationReference => Some(&$module::TRAINING_APP),
                DocumentKind::Conversation => Some(&$module::CONVERSATION),
                DocumentKind::SensorConfiguration => Some(&$module::SENSOR),
                DocumentKind::QuestionExport | DocumentKind::SurveyExport => None,
            }
        };
    }

    match version {
        SchemaVersion::V6 => pick!(v6),
        SchemaVersion::V7 => pick!(v7),
        SchemaVersion::V8 => pick!(v8),
        SchemaVersion::V9 => pick!(v9),
        SchemaVersion::V10 => match kind {
            DocumentKind::QuestionExport => Some(&QUESTION_EXPORT),
            DocumentKind::SurveyExport => Some(&SURVEY_EXPORT),
            _ => pick!(latest),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_conversion_kind_has_a_descriptor_at_every_version() {
        for kind in DocumentKind::all() {
            if !kind.requires_conversion() {
                continue;
            }
            for version in SchemaVersion::all() {
                let found = descriptor(*kind, *version);
                assert!(
                    found.is_some(),
                    "missing descriptor for {} at {}",
                    kind,
                    version
                );
                let found = found.unwrap();
                assert_eq!(found.kind, *kind);
                assert_eq!(found.version, *version);
            }
        }
    }

    #[test]
    fn test_export_kinds_only_exist_at_latest() {
        assert!(descriptor(DocumentKind::QuestionExport, SchemaVersion::V6).is_none());
        assert!(descriptor(DocumentKind::SurveyExport, SchemaVersion::V9).is_none());
        assert!(descriptor(DocumentKind::QuestionExport, SchemaVersion::V10).is_some());
        assert!(descriptor(DocumentKind::SurveyExport, SchemaVersion::V10).is_some());
    }

    #[test]
    fn test_schema_files_follow_version_layout() {
        let d = descriptor(DocumentKind::Scenario, SchemaVersion::V8).unwrap();
        assert_eq!(d.schema_file, "schemas/8.0/scenario.xsd");
        assert_eq!(d.root_element, "Scenario");
    }
}
