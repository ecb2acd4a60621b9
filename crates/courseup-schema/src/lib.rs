//! Versioned document trees for the Courseup conversion pipeline.
//!
//! One module per supported schema version (`v6` through `v9`, plus
//! [`latest`] for the current version). Each module is a self-contained set
//! of plain serde data types; version modules deliberately share nothing
//! with each other, so the boundary converters in `courseup-convert` are
//! the only place where two versions meet.
//!
//! Every root type implements [`courseup_core::SchemaRoot`], tying it to
//! its document kind, schema version, and root element name.

pub mod latest;
pub mod v6;
pub mod v7;
pub mod v8;
pub mod v9;

use courseup_core::{DocumentKind, SchemaRoot, SchemaVersion};

macro_rules! impl_schema_root {
    ($ty:ty, $kind:expr, $version:expr, $root:literal) => {
        impl SchemaRoot for $ty {
            const KIND: DocumentKind = $kind;
            const VERSION: SchemaVersion = $version;
            const ROOT_ELEMENT: &'static str = $root;
        }
    };
}

macro_rules! impl_version_roots {
    ($module:ident, $version:expr) => {
        impl_schema_root!(
            $module::course::Course,
            DocumentKind::Course,
            $version,
            "Course"
        );
        impl_schema_root!(
            $module::scenario::Scenario,
            DocumentKind::Scenario,
            $version,
            "Scenario"
        );
        impl_schema_root!(
            $module::learner::LearnerConfiguration,
            DocumentKind::LearnerConfiguration,
            $version,
            "LearnerConfiguration"
        );
        impl_schema_root!(
            $module::pedagogy::PedagogyConfiguration,
            DocumentKind::PedagogyConfiguration,
            $version,
            "PedagogyConfiguration"
        );
        impl_schema_root!(
            $module::metadata::Metadata,
            DocumentKind::Metadata,
            $version,
            "Metadata"
        );
        impl_schema_root!(
            $module::course::TrainingApplicationWrapper,
            DocumentKind::TrainingApplicationReference,
            $version,
            "TrainingApplicationWrapper"
        );
        impl_schema_root!(
            $module::conversation::Conversation,
            DocumentKind::Conversation,
            $version,
            "Conversation"
        );
        impl_schema_root!(
            $module::sensor::SensorsConfiguration,
            DocumentKind::SensorConfiguration,
            $version,
            "SensorsConfiguration"
        );
    };
}

impl_version_roots!(v6, SchemaVersion::V6);
impl_version_roots!(v7, SchemaVersion::V7);
impl_version_roots!(v8, SchemaVersion::V8);
impl_version_roots!(v9, SchemaVersion::V9);
impl_version_roots!(latest, SchemaVersion::V10);

// Export snapshots only exist at the current version.
impl_schema_root!(
    latest::survey::QuestionExport,
    DocumentKind::QuestionExport,
    SchemaVersion::V10,
    "QuestionExport"
);
impl_schema_root!(
    latest::survey::SurveyExport,
    DocumentKind::SurveyExport,
    SchemaVersion::V10,
    "SurveyExport"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_roots_carry_their_version() {
        assert_eq!(
            <v6::course::Course as SchemaRoot>::VERSION,
            SchemaVersion::V6
        );
        assert_eq!(
            <latest::course::Course as SchemaRoot>::VERSION,
            SchemaVersion::V10
        );
        assert_eq!(<v8::scenario::Scenario as SchemaRoot>::KIND, DocumentKind::Scenario);
        assert_eq!(
            <v9::course::TrainingApplicationWrapper as SchemaRoot>::ROOT_ELEMENT,
            "TrainingApplicationWrapper"
        );
    }

    #[test]
    fn test_v6_course_round_trips_through_xml() {
        let course = v6::course::Course {
            version: "6.0".to_string(),
            name: "Land Navigation".to_string(),
            description: Some("Map reading basics".to_string()),
            survey_context: Some(12),
            exclude: None,
            concepts: None,
            transitions: v6::course::Transitions {
                transitions: vec![v6::course::CourseTransition::Guidance(
                    v6::course::Guidance {
                        transition_name: Some("Welcome".to_string()),
                        display_time: None,
                        full_screen: Some(true),
                        choice: v6::course::GuidanceChoice::Message(
                            v6::course::GuidanceMessage {
                                content: "Read the map first.".to_string(),
                            },
                        ),
                    },
                )],
            },
        };

        let xml = quick_xml::se::to_string(&course).expect("serialize course");
        let parsed: v6::course::Course = quick_xml::de::from_str(&xml).expect("parse course");
        assert_eq!(parsed, course);
    }

    #[test]
    fn test_v9_places_of_interest_round_trip() {
        let places = v9::scenario::PlacesOfInterest {
            places: vec![
                v9::scenario::PlaceOfInterest::Point {
                    name: "Rally point".to_string(),
                    coordinate: v9::scenario::Coordinate {
                        x: 1.0,
                        y: 2.0,
                        z: 0.0,
                    },
                },
                v9::scenario::PlaceOfInterest::Area {
                    name: "Staging area".to_string(),
                    coordinates: vec![v9::scenario::Coordinate::default()],
                },
            ],
        };

        let xml = quick_xml::se::to_string(&places).expect("serialize places");
        let parsed: v9::scenario::PlacesOfInterest =
            quick_xml::de::from_str(&xml).expect("parse places");
        assert_eq!(parsed, places);
    }
}
