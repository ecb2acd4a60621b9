//! End-to-end migration tests through the dispatcher and the XML adapter.

use pretty_assertions::assert_eq;

use courseup_convert::{MigratedDocument, MigrationService, V6ToV7Converter, V7ToV8Converter};
use courseup_core::{DocumentKind, IssueLog, SourceFile};
use courseup_schema::{latest, v6, v7, v9};
use courseup_xml::XmlDocumentParser;

fn service() -> MigrationService<XmlDocumentParser> {
    MigrationService::new(XmlDocumentParser::new())
}

// ============================================================================
// Concrete migration scenarios
// ============================================================================

/// An unnamed guidance nested inside a branch point named "Intro" is named
/// "Intro - Guidance" after conversion.
#[test]
fn test_nested_guidance_is_named_after_its_branch_point() {
    let course_xml = concat!(
        "<Course version=\"6.0\">",
        "<name>Land Nav 101</name>",
        "<transitions>",
        "<MerrillsBranchPoint>",
        "<transitionName>Intro</transitionName>",
        "<concepts><concept>map reading</concept></concepts>",
        "<quadrants>",
        "<Rule/>",
        "<Transitions>",
        "<Guidance><Message><content>hold position</content></Message></Guidance>",
        "</Transitions>",
        "</quadrants>",
        "</MerrillsBranchPoint>",
        "</transitions>",
        "</Course>"
    );
    let file = SourceFile::new("landnav.course.xml", course_xml);

    let result = service().migrate_file(&file, DocumentKind::Course).unwrap();
    assert!(result.upconverted);
    assert_eq!(result.source_version, "6.0");

    let MigratedDocument::Course(course) = result.document else {
        panic!("expected a course");
    };
    assert_eq!(course.version, "10.0.1");

    let latest::course::CourseTransition::AdaptiveCourseflow(courseflow) =
        &course.transitions.transitions[0]
    else {
        panic!("expected the branch point to become an adaptive courseflow");
    };
    let latest::course::Quadrant::Transitions(nested) = &courseflow.quadrants.content[1] else {
        panic!("expected the nested transitions quadrant");
    };
    let latest::course::CourseTransition::Guidance(guidance) = &nested.transitions[0] else {
        panic!("expected the nested guidance");
    };
    assert_eq!(guidance.transition_name.as_deref(), Some("Intro - Guidance"));
}

/// The legacy VBS interop literal is re-mapped during conversion.
#[test]
fn test_scenario_interop_impl_is_remapped() {
    let scenario_xml = concat!(
        "<Scenario version=\"6.0\">",
        "<name>Convoy ambush</name>",
        "<resources>",
        "<interops><interop>",
        "<interopImpl>gateway.interop.vbs2plugin.VBS2PluginInterface</interopImpl>",
        "</interop></interops>",
        "</resources>",
        "<assessment><tasks/></assessment>",
        "<actions/>",
        "</Scenario>"
    );
    let file = SourceFile::new("ambush.dkf.xml", scenario_xml);

    let result = service().migrate_file(&file, DocumentKind::Scenario).unwrap();
    let MigratedDocument::Scenario(scenario) = result.document else {
        panic!("expected a scenario");
    };

    let interops = scenario.resources.interops.unwrap();
    assert_eq!(
        interops.interops[0].interop_impl,
        "gateway.interop.vbsplugin.VBSPluginInterface"
    );
}

/// A quadrant-specific metadata marker is dropped and reported.
#[test]
fn test_quadrant_specific_marker_is_dropped_and_logged() {
    let metadata_xml = concat!(
        "<Metadata version=\"6.0\">",
        "<simpleRef>slides.pptx</simpleRef>",
        "<concepts>",
        "<concept name=\"navigation\">",
        "<attributes><attribute value=\"visual\" quadrantSpecific=\"true\"/></attributes>",
        "</concept>",
        "</concepts>",
        "</Metadata>"
    );
    let file = SourceFile::new("slides.metadata.xml", metadata_xml);

    let result = service().migrate_file(&file, DocumentKind::Metadata).unwrap();
    assert!(result.upconverted);
    assert_eq!(result.issues.count_of("Quadrant Specific Element"), 1);

    let MigratedDocument::Metadata(metadata) = result.document else {
        panic!("expected metadata");
    };
    // The attribute survives; the marker type no longer exists at the
    // current version.
    assert_eq!(
        metadata.concepts.concepts[0].attributes.attributes[0].value,
        "visual"
    );
}

/// A condition input with no current-version analog fails the whole
/// migration; no partial tree is returned.
#[test]
fn test_unknown_condition_input_fails_with_unhandled_construct() {
    let scenario_xml = concat!(
        "<Scenario version=\"9.0\">",
        "<name>Legacy assessment</name>",
        "<resources/>",
        "<assessment><tasks>",
        "<task name=\"move out\" nodeId=\"1\">",
        "<concepts><concept name=\"pace\" nodeId=\"2\">",
        "<conditions><condition>",
        "<conditionImpl>domain.knowledge.condition.SimileCondition</conditionImpl>",
        "<input><SIMILEConditionInput>",
        "<configurationFile>assessment.ixs</configurationFile>",
        "<conditionKey>pace</conditionKey>",
        "</SIMILEConditionInput></input>",
        "</condition></conditions>",
        "</concept></concepts>",
        "</task>",
        "</tasks></assessment>",
        "<actions/>",
        "</Scenario>"
    );
    let file = SourceFile::new("legacy.dkf.xml", scenario_xml);

    let err = service()
        .migrate_file(&file, DocumentKind::Scenario)
        .unwrap_err();
    assert!(err.is_unhandled_construct());
    assert!(err.to_string().contains("SIMILEConditionInput"));
}

// ============================================================================
// Chain composition and idempotence
// ============================================================================

fn v6_metadata_fixture() -> v6::metadata::Metadata {
    v6::metadata::Metadata {
        version: "6.0".to_string(),
        display_name: Some("Intro slides".to_string()),
        simple_ref: "slides.pptx".to_string(),
        merrill_quadrant: Some("Rule".to_string()),
        concepts: v6::metadata::Concepts {
            concepts: vec![v6::metadata::Concept {
                name: "navigation".to_string(),
                attributes: v6::metadata::Attributes {
                    attributes: vec![v6::metadata::Attribute {
                        value: "visual".to_string(),
                        quadrant_specific: None,
                    }],
                },
            }],
        },
    }
}

/// Converting a 6.0 tree through the chain equals converting the
/// hand-written 7.0 equivalent through the remaining hops.
#[test]
fn test_chain_composes_hop_by_hop() {
    let mut issues_full = IssueLog::new();
    let from_v6 = V6ToV7Converter
        .convert_metadata(v6_metadata_fixture(), &mut issues_full)
        .unwrap();

    // The same document as it would have been authored under 7.0.
    let v7_equivalent = v7::metadata::Metadata {
        version: "7.0".to_string(),
        display_name: Some("Intro slides".to_string()),
        simple_ref: "slides.pptx".to_string(),
        merrill_quadrant: Some("Rule".to_string()),
        concepts: v7::metadata::Concepts {
            concepts: vec![v7::metadata::Concept {
                name: "navigation".to_string(),
                attributes: v7::metadata::Attributes {
                    attributes: vec![v7::metadata::Attribute {
                        value: "visual".to_string(),
                    }],
                },
            }],
        },
    };
    let mut issues_tail = IssueLog::new();
    let from_v7 = V7ToV8Converter
        .convert_metadata(v7_equivalent, &mut issues_tail)
        .unwrap();

    assert_eq!(from_v6, from_v7);
    assert!(issues_full.is_empty());
    assert!(issues_tail.is_empty());
}

/// A file already at the current version is returned exactly as parsed,
/// with no issues and no backup.
#[test]
fn test_already_latest_is_idempotent() {
    let course_xml = concat!(
        "<Course version=\"10.0.1\">",
        "<name>Up to date</name>",
        "<description>Already current</description>",
        "<transitions>",
        "<Guidance><transitionName>Welcome</transitionName>",
        "<Message><content>hello</content></Message></Guidance>",
        "</transitions>",
        "</Course>"
    );
    let file = SourceFile::new("current.course.xml", course_xml);

    let result = service().migrate_file(&file, DocumentKind::Course).unwrap();
    assert!(!result.upconverted);
    assert!(result.original.is_none());
    assert!(result.issues.is_empty());

    let MigratedDocument::Course(course) = result.document else {
        panic!("expected a course");
    };
    let direct: latest::course::Course = quick_xml::de::from_str(course_xml).unwrap();
    assert_eq!(course, direct);
}

// ============================================================================
// Issue accumulation
// ============================================================================

/// One issue log accumulates across conversions and is never reset.
#[test]
fn test_issue_log_accumulates_across_conversions() {
    let mut issues = IssueLog::new();

    // First conversion: one quadrant-specific marker.
    let mut lossy_metadata = v6_metadata_fixture();
    lossy_metadata.concepts.concepts[0].attributes.attributes[0].quadrant_specific = Some(true);
    V6ToV7Converter
        .convert_metadata(lossy_metadata, &mut issues)
        .unwrap();
    assert_eq!(issues.len(), 1);

    // Second conversion with the same log: two dropped file references.
    let course = v9::course::Course {
        version: "9.0".to_string(),
        name: "Readings".to_string(),
        description: String::new(),
        survey_context: None,
        exclude: None,
        concepts: None,
        transitions: v9::course::Transitions {
            transitions: vec![v9::course::CourseTransition::LessonMaterial(
                v9::course::LessonMaterial {
                    transition_name: Some("Readings".to_string()),
                    lesson_material_list: None,
                    lesson_material_files: Some(v9::course::LessonMaterialFiles {
                        files: vec!["a.html".to_string(), "b.html".to_string()],
                    }),
                },
            )],
        },
    };
    courseup_convert::V9ToV10Converter
        .convert_course(course, &mut issues)
        .unwrap();

    assert_eq!(issues.len(), 3);
    assert_eq!(issues.count_of("Quadrant Specific Element"), 1);
    assert_eq!(issues.count_of("Lesson material file reference"), 2);
}

// ============================================================================
// Round-trip field preservation
// ============================================================================

/// Scalar fields with a direct analog across every boundary are copied
/// verbatim all the way to the current version.
#[test]
fn test_scalar_fields_survive_the_whole_chain() {
    let course_xml = concat!(
        "<Course version=\"6.0\">",
        "<name>Field craft</name>",
        "<description>Basics of movement</description>",
        "<surveyContext>42</surveyContext>",
        "<exclude>false</exclude>",
        "<transitions>",
        "<AAR><transitionName>Wrap up</transitionName><fullScreen>true</fullScreen></AAR>",
        "</transitions>",
        "</Course>"
    );
    let file = SourceFile::new("fieldcraft.course.xml", course_xml);

    let result = service().migrate_file(&file, DocumentKind::Course).unwrap();
    let MigratedDocument::Course(course) = result.document else {
        panic!("expected a course");
    };

    assert_eq!(course.name, "Field craft");
    assert_eq!(course.description, "Basics of movement");
    assert_eq!(course.survey_context, Some(42));
    assert_eq!(course.exclude, Some(false));

    let latest::course::CourseTransition::Aar(aar) = &course.transitions.transitions[0] else {
        panic!("expected the AAR transition");
    };
    assert_eq!(aar.transition_name.as_deref(), Some("Wrap up"));
    assert_eq!(aar.full_screen, Some(true));
}

// ============================================================================
// Folder upgrade helper
// ============================================================================

#[test]
fn test_folder_upgrade_skips_up_to_date_files() {
    let course = SourceFile::new(
        "nav.course.xml",
        "<Course version=\"6.0\"><name>Nav</name><transitions/></Course>",
    );
    let old_metadata = SourceFile::new(
        "slides.metadata.xml",
        concat!(
            "<Metadata version=\"8.0\">",
            "<content><simple><value>slides.pptx</value></simple></content>",
            "<presentAt/>",
            "<concepts/>",
            "</Metadata>"
        ),
    );
    let current_sensor = SourceFile::new(
        "default.sensorconfig.xml",
        "<SensorsConfiguration version=\"10.0.1\"><sensors/></SensorsConfiguration>",
    );

    let upgraded = service()
        .upgrade_course_folder(&course, &[old_metadata, current_sensor])
        .unwrap();

    assert_eq!(
        upgraded,
        vec!["nav.course.xml".to_string(), "slides.metadata.xml".to_string()]
    );
}

// ============================================================================
// Version stamping
// ============================================================================

#[test]
fn test_every_migrated_kind_is_stamped_with_converted_version() {
    let learner_xml = concat!(
        "<LearnerConfiguration version=\"8.0\">",
        "<inputs><input>",
        "<classifier><classifierImpl>learner.classifier.FuzzyArtMapClassifier</classifierImpl></classifier>",
        "<predictor><predictorImpl>learner.predictor.GenericPredictor</predictorImpl></predictor>",
        "<translator><translatorImpl>learner.translate.DefaultTranslator</translatorImpl></translator>",
        "</input></inputs>",
        "</LearnerConfiguration>"
    );
    let file = SourceFile::new("default.learnerconfig.xml", learner_xml);

    let result = service()
        .migrate_file(&file, DocumentKind::LearnerConfiguration)
        .unwrap();
    let MigratedDocument::LearnerConfiguration(config) = result.document else {
        panic!("expected a learner configuration");
    };

    assert_eq!(config.version, "10.0.1");
    // The 10.0 input name is generated from the classifier implementation.
    assert_eq!(config.inputs.inputs[0].name, "FuzzyArtMapClassifier");
    // The translator package move is applied on the way through 9.0.
    assert_eq!(
        config.inputs.inputs[0].translator.translator_impl,
        "learner.translator.DefaultTranslator"
    );
}
