//! Boundary converter for schema versions 8.0 → 9.0.
//!
//! Changes across this boundary:
//! - Scenario waypoints are replaced by places of interest; every 8.0
//!   waypoint becomes a point, and waypoint references become place
//!   references.
//! - Triggers are wrapped in a node carrying an optional delay.
//! - The branch-point course object is renamed adaptive courseflow,
//!   field-for-field.
//! - The course description is mandatory in 9.0; an absent description
//!   becomes the empty string.
//! - Learner translator implementations moved packages; literals go
//!   through an explicit lookup and unrecognized ones fail.

use courseup_core::{
    ConvertError, DocumentKind, IssueLog, ParseDocument, Result, SchemaVersion, SourceFile,
};
use courseup_schema::{latest, v8, v9};

use crate::chain::BoundaryConverter;
use crate::descriptors;
use crate::v9_to_v10::V9ToV10Converter;

/// Converts version 8.0 documents to version 9.0, then delegates to the
/// rest of the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct V8ToV9Converter;

impl V8ToV9Converter {
    pub const FROM: SchemaVersion = SchemaVersion::V8;
    pub const TO: SchemaVersion = SchemaVersion::V9;

    fn log_hop(&self, kind: DocumentKind) {
        tracing::info!(
            "Converting {} from version {} to version {}",
            kind,
            Self::FROM,
            Self::TO
        );
    }

    // ========================================================================
    // Course
    // ========================================================================

    pub fn convert_course(
        &self,
        course: v8::course::Course,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        self.log_hop(DocumentKind::Course);

        let next = v9::course::Course {
            version: Self::TO.attribute().to_string(),
            name: course.name,
            // Mandatory as of 9.0; substitute the deterministic default
            // rather than failing an otherwise valid course.
            description: course.description.unwrap_or_default(),
            survey_context: course.survey_context,
            exclude: course.exclude,
            concepts: course.concepts.map(convert_concepts),
            transitions: convert_transitions(course.transitions),
        };

        V9ToV10Converter.convert_course(next, issues)
    }

    pub fn convert_course_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        let course: v8::course::Course = parser.parse(file, &descriptors::v8::COURSE, fail_fast)?;
        self.convert_course(course, issues)
    }

    // ========================================================================
    // Scenario
    // ========================================================================

    pub fn convert_scenario(
        &self,
        scenario: v8::scenario::Scenario,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        self.log_hop(DocumentKind::Scenario);

        let next = v9::scenario::Scenario {
            version: Self::TO.attribute().to_string(),
            name: scenario.name,
            description: scenario.description,
            resources: convert_resources(scenario.resources),
            assessment: convert_assessment(scenario.assessment),
            actions: convert_actions(scenario.actions),
        };

        V9ToV10Converter.convert_scenario(next, issues)
    }

    pub fn convert_scenario_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        let scenario: v8::scenario::Scenario =
            parser.parse(file, &descriptors::v8::SCENARIO, fail_fast)?;
        self.convert_scenario(scenario, issues)
    }

    // ========================================================================
    // Learner configuration
    // ========================================================================

    pub fn convert_learner_configuration(
        &self,
        config: v8::learner::LearnerConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        self.log_hop(DocumentKind::LearnerConfiguration);

        let mut inputs = Vec::with_capacity(config.inputs.inputs.len());
        for input in config.inputs.inputs {
            inputs.push(convert_learner_input(input)?);
        }

        let next = v9::learner::LearnerConfiguration {
            version: Self::TO.attribute().to_string(),
            inputs: v9::learner::Inputs { inputs },
        };

        V9ToV10Converter.convert_learner_configuration(next, issues)
    }

    pub fn convert_learner_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        let config: v8::learner::LearnerConfiguration =
            parser.parse(file, &descriptors::v8::LEARNER, fail_fast)?;
        self.convert_learner_configuration(config, issues)
    }

    // ========================================================================
    // Pedagogy configuration
    // ========================================================================

    pub fn convert_pedagogy_configuration(
        &self,
        config: v8::pedagogy::PedagogyConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        self.log_hop(DocumentKind::PedagogyConfiguration);

        let next = v9::pedagogy::PedagogyConfiguration {
            version: Self::TO.attribute().to_string(),
            attributes: v9::pedagogy::Attributes {
                attributes: config
                    .attributes
                    .attributes
                    .into_iter()
                    .map(|a| v9::pedagogy::Attribute {
                        learner_state: a.learner_state,
                        phase: a.phase,
                        metadata_attributes: v9::pedagogy::MetadataAttributes {
                            attributes: a
                                .metadata_attributes
                                .attributes
                                .into_iter()
                                .map(|m| v9::pedagogy::MetadataAttribute { value: m.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        };

        V9ToV10Converter.convert_pedagogy_configuration(next, issues)
    }

    pub fn convert_pedagogy_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        let config: v8::pedagogy::PedagogyConfiguration =
            parser.parse(file, &descriptors::v8::PEDAGOGY, fail_fast)?;
        self.convert_pedagogy_configuration(config, issues)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn convert_metadata(
        &self,
        metadata: v8::metadata::Metadata,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        self.log_hop(DocumentKind::Metadata);

        let reference = match metadata.content.reference {
            v8::metadata::ContentRef::Simple(simple) => {
                v9::metadata::ContentRef::Simple(v9::metadata::SimpleRef {
                    value: simple.value,
                })
            }
            v8::metadata::ContentRef::TrainingApp(training_app) => {
                v9::metadata::ContentRef::TrainingApp(v9::metadata::TrainingAppRef {
                    value: training_app.value,
                })
            }
        };

        let next = v9::metadata::Metadata {
            version: Self::TO.attribute().to_string(),
            display_name: metadata.display_name,
            content: v9::metadata::Content { reference },
            present_at: v9::metadata::PresentAt {
                merrill_quadrant: metadata.present_at.merrill_quadrant,
                remediation_only: metadata.present_at.remediation_only,
            },
            concepts: v9::metadata::Concepts {
                concepts: metadata
                    .concepts
                    .concepts
                    .into_iter()
                    .map(|c| v9::metadata::Concept {
                        name: c.name,
                        attributes: v9::metadata::Attributes {
                            attributes: c
                                .attributes
                                .attributes
                                .into_iter()
                                .map(|a| v9::metadata::Attribute { value: a.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        };

        V9ToV10Converter.convert_metadata(next, issues)
    }

    pub fn convert_metadata_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        let metadata: v8::metadata::Metadata =
            parser.parse(file, &descriptors::v8::METADATA, fail_fast)?;
        self.convert_metadata(metadata, issues)
    }

    // ========================================================================
    // Training application reference
    // ========================================================================

    pub fn convert_training_app_ref(
        &self,
        wrapper: v8::course::TrainingApplicationWrapper,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        self.log_hop(DocumentKind::TrainingApplicationReference);

        let next = v9::course::TrainingApplicationWrapper {
            version: Self::TO.attribute().to_string(),
            training_application: convert_training_application(wrapper.training_application),
        };

        V9ToV10Converter.convert_training_app_ref(next, issues)
    }

    pub fn convert_training_app_ref_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        let wrapper: v8::course::TrainingApplicationWrapper =
            parser.parse(file, &descriptors::v8::TRAINING_APP, fail_fast)?;
        self.convert_training_app_ref(wrapper, issues)
    }

    // ========================================================================
    // Conversation
    // ========================================================================

    pub fn convert_conversation(
        &self,
        conversation: v8::conversation::Conversation,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        self.log_hop(DocumentKind::Conversation);

        let next = v9::conversation::Conversation {
            version: Self::TO.attribute().to_string(),
            name: conversation.name,
            author: conversation.author,
            start_node_id: conversation.start_node_id,
            nodes: v9::conversation::Nodes {
                nodes: conversation
                    .nodes
                    .nodes
                    .into_iter()
                    .map(convert_conversation_node)
                    .collect(),
            },
        };

        V9ToV10Converter.convert_conversation(next, issues)
    }

    pub fn convert_conversation_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        let conversation: v8::conversation::Conversation =
            parser.parse(file, &descriptors::v8::CONVERSATION, fail_fast)?;
        self.convert_conversation(conversation, issues)
    }

    // ========================================================================
    // Sensor configuration
    // ========================================================================

    pub fn convert_sensor_configuration(
        &self,
        config: v8::sensor::SensorsConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        self.log_hop(DocumentKind::SensorConfiguration);

        let next = v9::sensor::SensorsConfiguration {
            version: Self::TO.attribute().to_string(),
            sensors: v9::sensor::Sensors {
                sensors: config
                    .sensors
                    .sensors
                    .into_iter()
                    .map(|s| v9::sensor::Sensor {
                        name: s.name,
                        sensor_impl: s.sensor_impl,
                        interval: s.interval,
                        filter_instance: s.filter_instance,
                        writer_instance: s.writer_instance,
                        distribute_externally: s.distribute_externally,
                    })
                    .collect(),
            },
            filters: config.filters.map(|filters| v9::sensor::Filters {
                filters: filters
                    .filters
                    .into_iter()
                    .map(|f| v9::sensor::Filter {
                        name: f.name,
                        filter_impl: f.filter_impl,
                        writer_instance: f.writer_instance,
                    })
                    .collect(),
            }),
            writers: config.writers.map(|writers| v9::sensor::Writers {
                writers: writers
                    .writers
                    .into_iter()
                    .map(|w| v9::sensor::Writer {
                        name: w.name,
                        writer_impl: w.writer_impl,
                    })
                    .collect(),
            }),
        };

        V9ToV10Converter.convert_sensor_configuration(next, issues)
    }

    pub fn convert_sensor_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        let config: v8::sensor::SensorsConfiguration =
            parser.parse(file, &descriptors::v8::SENSOR, fail_fast)?;
        self.convert_sensor_configuration(config, issues)
    }
}

impl BoundaryConverter for V8ToV9Converter {
    fn from_version(&self) -> SchemaVersion {
        Self::FROM
    }

    fn to_version(&self) -> SchemaVersion {
        Self::TO
    }

    fn description(&self) -> &'static str {
        "Replace waypoints with places of interest, wrap triggers, rename the branch point to adaptive courseflow"
    }
}

// ============================================================================
// Course node converters
// ============================================================================

fn convert_concepts(concepts: v8::course::Concepts) -> v9::course::Concepts {
    let choice = match concepts.choice {
        v8::course::ConceptsChoice::List(list) => {
            v9::course::ConceptsChoice::List(v9::course::ConceptList {
                concepts: list
                    .concepts
                    .into_iter()
                    .map(|c| v9::course::Concept { name: c.name })
                    .collect(),
            })
        }
        v8::course::ConceptsChoice::Hierarchy(hierarchy) => {
            v9::course::ConceptsChoice::Hierarchy(v9::course::ConceptHierarchy {
                concept_node: convert_concept_node(hierarchy.concept_node),
            })
        }
    };
    v9::course::Concepts { choice }
}

fn convert_concept_node(node: v8::course::ConceptNode) -> v9::course::ConceptNode {
    v9::course::ConceptNode {
        name: node.name,
        children: node.children.into_iter().map(convert_concept_node).collect(),
    }
}

fn convert_transitions(transitions: v8::course::Transitions) -> v9::course::Transitions {
    let mut converted = Vec::with_capacity(transitions.transitions.len());

    for transition in transitions.transitions {
        let new_transition = match transition {
            v8::course::CourseTransition::Guidance(guidance) => {
                v9::course::CourseTransition::Guidance(convert_guidance(guidance))
            }
            v8::course::CourseTransition::PresentSurvey(survey) => {
                v9::course::CourseTransition::PresentSurvey(convert_present_survey(survey))
            }
            v8::course::CourseTransition::Aar(aar) => {
                v9::course::CourseTransition::Aar(v9::course::Aar {
                    transition_name: aar.transition_name,
                    full_screen: aar.full_screen,
                })
            }
            v8::course::CourseTransition::TrainingApplication(train_app) => {
                v9::course::CourseTransition::TrainingApplication(convert_training_application(
                    train_app,
                ))
            }
            v8::course::CourseTransition::LessonMaterial(material) => {
                v9::course::CourseTransition::LessonMaterial(convert_lesson_material(material))
            }
            // Renamed in 9.0; the shape is unchanged.
            v8::course::CourseTransition::MerrillsBranchPoint(branch_point) => {
                v9::course::CourseTransition::AdaptiveCourseflow(convert_branch_point(branch_point))
            }
        };
        converted.push(new_transition);
    }

    v9::course::Transitions {
        transitions: converted,
    }
}

fn convert_guidance(guidance: v8::course::Guidance) -> v9::course::Guidance {
    let choice = match guidance.choice {
        v8::course::GuidanceChoice::Message(message) => {
            v9::course::GuidanceChoice::Message(v9::course::GuidanceMessage {
                content: message.content,
            })
        }
        v8::course::GuidanceChoice::File(file) => {
            v9::course::GuidanceChoice::File(v9::course::GuidanceFile {
                html: file.html,
                message: file.message,
            })
        }
        v8::course::GuidanceChoice::Url(url) => {
            v9::course::GuidanceChoice::Url(v9::course::GuidanceUrl {
                address: url.address,
                message: url.message,
            })
        }
    };

    v9::course::Guidance {
        transition_name: guidance.transition_name,
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice,
    }
}

fn convert_present_survey(survey: v8::course::PresentSurvey) -> v9::course::PresentSurvey {
    let choice = match survey.choice {
        v8::course::SurveyChoice::GiftSurveyProperties(properties) => {
            v9::course::SurveyChoice::GiftSurveyProperties(v9::course::GiftSurveyProperties {
                gift_survey_key: properties.gift_survey_key,
            })
        }
        v8::course::SurveyChoice::AutoTutorSession(session) => {
            v9::course::SurveyChoice::AutoTutorSession(v9::course::AutoTutorSession {
                dkf_ref: v9::course::DkfRef {
                    file: session.dkf_ref.file,
                },
            })
        }
        v8::course::SurveyChoice::ConceptSurvey(concept_survey) => {
            v9::course::SurveyChoice::ConceptSurvey(convert_concept_survey(concept_survey))
        }
    };

    v9::course::PresentSurvey {
        transition_name: survey.transition_name,
        full_screen: survey.full_screen,
        show_in_aar: survey.show_in_aar,
        choice,
    }
}

fn convert_concept_survey(survey: v8::course::ConceptSurvey) -> v9::course::ConceptSurvey {
    v9::course::ConceptSurvey {
        gift_survey_key: survey.gift_survey_key,
        concept_questions: survey
            .concept_questions
            .into_iter()
            .map(|q| v9::course::ConceptQuestion {
                name: q.name,
                question_count: q.question_count,
            })
            .collect(),
    }
}

fn convert_training_application(
    train_app: v8::course::TrainingApplication,
) -> v9::course::TrainingApplication {
    v9::course::TrainingApplication {
        transition_name: train_app.transition_name,
        dkf_ref: train_app.dkf_ref.map(|r| v9::course::DkfRef { file: r.file }),
        interops: v9::course::Interops {
            interops: train_app
                .interops
                .interops
                .into_iter()
                .map(|interop| v9::course::Interop {
                    interop_impl: interop.interop_impl,
                    input_args: interop.input_args,
                })
                .collect(),
        },
        guidance: train_app.guidance.map(convert_guidance),
        finished_when: train_app.finished_when,
    }
}

fn convert_lesson_material(material: v8::course::LessonMaterial) -> v9::course::LessonMaterial {
    v9::course::LessonMaterial {
        transition_name: material.transition_name,
        lesson_material_list: material.lesson_material_list.map(|list| {
            v9::course::LessonMaterialList {
                media: list.media.into_iter().map(convert_media).collect(),
            }
        }),
        lesson_material_files: material.lesson_material_files.map(|files| {
            v9::course::LessonMaterialFiles { files: files.files }
        }),
    }
}

fn convert_media(media: v8::course::Media) -> v9::course::Media {
    let properties = match media.properties {
        v8::course::MediaProperties::Pdf => v9::course::MediaProperties::Pdf,
        v8::course::MediaProperties::WebpageProperties => {
            v9::course::MediaProperties::WebpageProperties
        }
        v8::course::MediaProperties::ImageProperties => v9::course::MediaProperties::ImageProperties,
        v8::course::MediaProperties::YoutubeVideoProperties(youtube) => {
            v9::course::MediaProperties::YoutubeVideoProperties(v9::course::YoutubeVideoProperties {
                allow_full_screen: youtube.allow_full_screen,
                allow_auto_play: youtube.allow_auto_play,
            })
        }
    };

    v9::course::Media {
        name: media.name,
        uri: media.uri,
        properties,
    }
}

fn convert_branch_point(
    branch_point: v8::course::MerrillsBranchPoint,
) -> v9::course::AdaptiveCourseflow {
    let mut content = Vec::with_capacity(branch_point.quadrants.content.len());
    for quadrant in branch_point.quadrants.content {
        let new_quadrant = match quadrant {
            v8::course::Quadrant::Rule => v9::course::Quadrant::Rule,
            v8::course::Quadrant::Example => v9::course::Quadrant::Example,
            v8::course::Quadrant::Recall(recall) => {
                v9::course::Quadrant::Recall(v9::course::Recall {
                    present_survey: v9::course::RecallSurvey {
                        concept_survey: convert_concept_survey(recall.present_survey.concept_survey),
                        full_screen: recall.present_survey.full_screen,
                    },
                    allowed_attempts: recall.allowed_attempts,
                })
            }
            v8::course::Quadrant::Practice(practice) => {
                v9::course::Quadrant::Practice(v9::course::Practice {
                    practice_concepts: v9::course::PracticeConcepts {
                        course_concepts: practice.practice_concepts.course_concepts,
                    },
                    allowed_attempts: practice.allowed_attempts,
                })
            }
            v8::course::Quadrant::Transitions(transitions) => {
                v9::course::Quadrant::Transitions(convert_transitions(transitions))
            }
        };
        content.push(new_quadrant);
    }

    v9::course::AdaptiveCourseflow {
        transition_name: branch_point.transition_name,
        concepts: v9::course::BranchConcepts {
            concepts: branch_point.concepts.concepts,
        },
        quadrants: v9::course::Quadrants { content },
    }
}

// ============================================================================
// Scenario node converters
// ============================================================================

fn convert_resources(resources: v8::scenario::Resources) -> v9::scenario::Resources {
    v9::scenario::Resources {
        survey_context: resources.survey_context,
        interops: resources.interops.map(|interops| v9::scenario::Interops {
            interops: interops
                .interops
                .into_iter()
                .map(|interop| v9::scenario::Interop {
                    interop_impl: interop.interop_impl,
                })
                .collect(),
        }),
    }
}

fn convert_assessment(assessment: v8::scenario::Assessment) -> v9::scenario::Assessment {
    v9::scenario::Assessment {
        objects: assessment.objects.map(convert_objects),
        tasks: v9::scenario::Tasks {
            tasks: assessment.tasks.tasks.into_iter().map(convert_task).collect(),
        },
    }
}

/// Every 8.0 waypoint becomes a point of interest in 9.0.
fn convert_objects(objects: v8::scenario::Objects) -> v9::scenario::Objects {
    v9::scenario::Objects {
        places_of_interest: objects.waypoints.map(|waypoints| {
            v9::scenario::PlacesOfInterest {
                places: waypoints
                    .waypoints
                    .into_iter()
                    .map(|waypoint| v9::scenario::PlaceOfInterest::Point {
                        name: waypoint.name,
                        coordinate: convert_coordinate(waypoint.coordinate),
                    })
                    .collect(),
            }
        }),
    }
}

fn convert_coordinate(coordinate: v8::scenario::Coordinate) -> v9::scenario::Coordinate {
    v9::scenario::Coordinate {
        x: coordinate.x,
        y: coordinate.y,
        z: coordinate.z,
    }
}

fn convert_task(task: v8::scenario::Task) -> v9::scenario::Task {
    v9::scenario::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers.map(convert_triggers),
        end_triggers: task.end_triggers.map(convert_triggers),
        concepts: v9::scenario::Concepts {
            concepts: task
                .concepts
                .concepts
                .into_iter()
                .map(convert_scenario_concept)
                .collect(),
        },
    }
}

/// Wraps each bare 8.0 trigger event in the 9.0 trigger node; the new
/// delay stays absent.
fn convert_triggers(triggers: v8::scenario::Triggers) -> v9::scenario::Triggers {
    v9::scenario::Triggers {
        triggers: triggers
            .triggers
            .into_iter()
            .map(|trigger| {
                let event = match trigger {
                    v8::scenario::TriggerType::ConceptEnded { node_id } => {
                        v9::scenario::TriggerType::ConceptEnded { node_id }
                    }
                    v8::scenario::TriggerType::TaskEnded { node_id } => {
                        v9::scenario::TriggerType::TaskEnded { node_id }
                    }
                    v8::scenario::TriggerType::EntityLocation { waypoint } => {
                        v9::scenario::TriggerType::EntityLocation {
                            place_ref: waypoint,
                        }
                    }
                    v8::scenario::TriggerType::LearnerLocation { waypoint } => {
                        v9::scenario::TriggerType::LearnerLocation {
                            place_ref: waypoint,
                        }
                    }
                    v8::scenario::TriggerType::ScenarioStarted => {
                        v9::scenario::TriggerType::ScenarioStarted
                    }
                };
                v9::scenario::Trigger {
                    event,
                    trigger_delay: None,
                }
            })
            .collect(),
    }
}

fn convert_scenario_concept(concept: v8::scenario::Concept) -> v9::scenario::Concept {
    v9::scenario::Concept {
        name: concept.name,
        node_id: concept.node_id,
        conditions: v9::scenario::Conditions {
            conditions: concept
                .conditions
                .conditions
                .into_iter()
                .map(convert_condition)
                .collect(),
        },
    }
}

fn convert_condition(condition: v8::scenario::Condition) -> v9::scenario::Condition {
    v9::scenario::Condition {
        condition_impl: condition.condition_impl,
        default_assessment: condition.default_assessment,
        input: condition.input.map(|input| v9::scenario::ConditionInputWrapper {
            input: convert_condition_input(input.input),
        }),
    }
}

fn convert_condition_input(input: v8::scenario::ConditionInput) -> v9::scenario::ConditionInput {
    match input {
        v8::scenario::ConditionInput::ApplicationCompletedCondition(c) => {
            v9::scenario::ConditionInput::ApplicationCompletedCondition(
                v9::scenario::ApplicationCompletedCondition {
                    ideal_completion_duration: c.ideal_completion_duration,
                },
            )
        }
        v8::scenario::ConditionInput::AvoidLocationCondition(c) => {
            v9::scenario::ConditionInput::AvoidLocationCondition(
                v9::scenario::AvoidLocationCondition {
                    place_ref: c.waypoint,
                },
            )
        }
        v8::scenario::ConditionInput::CheckpointPaceCondition(c) => {
            v9::scenario::ConditionInput::CheckpointPaceCondition(
                v9::scenario::CheckpointPaceCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v8::scenario::ConditionInput::CheckpointProgressCondition(c) => {
            v9::scenario::ConditionInput::CheckpointProgressCondition(
                v9::scenario::CheckpointProgressCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v8::scenario::ConditionInput::EliminateHostilesCondition(c) => {
            v9::scenario::ConditionInput::EliminateHostilesCondition(
                v9::scenario::EliminateHostilesCondition {
                    entities: c.entities.map(|entities| v9::scenario::Entities {
                        start_locations: entities
                            .start_locations
                            .into_iter()
                            .map(|s| v9::scenario::StartLocation {
                                coordinate: convert_coordinate(s.coordinate),
                            })
                            .collect(),
                    }),
                },
            )
        }
        v8::scenario::ConditionInput::GenericConditionInput(c) => {
            v9::scenario::ConditionInput::GenericConditionInput(
                v9::scenario::GenericConditionInput {
                    nvpairs: c
                        .nvpairs
                        .into_iter()
                        .map(|p| v9::scenario::NvPair {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                },
            )
        }
        v8::scenario::ConditionInput::IdentifyPoisCondition(c) => {
            v9::scenario::ConditionInput::IdentifyPoisCondition(
                v9::scenario::IdentifyPoisCondition {
                    pois: v9::scenario::Pois {
                        place_refs: c.pois.waypoint_refs,
                    },
                },
            )
        }
        v8::scenario::ConditionInput::TimerCondition(c) => {
            v9::scenario::ConditionInput::TimerCondition(v9::scenario::TimerCondition {
                repeatable: c.repeatable,
                interval: c.interval,
            })
        }
        v8::scenario::ConditionInput::SimileConditionInput(c) => {
            v9::scenario::ConditionInput::SimileConditionInput(
                v9::scenario::SimileConditionInput {
                    configuration_file: c.configuration_file,
                    condition_key: c.condition_key,
                },
            )
        }
    }
}

fn convert_checkpoint(checkpoint: v8::scenario::Checkpoint) -> v9::scenario::Checkpoint {
    v9::scenario::Checkpoint {
        place_ref: checkpoint.waypoint,
        at_time: checkpoint.at_time,
    }
}

fn convert_actions(actions: v8::scenario::Actions) -> v9::scenario::Actions {
    v9::scenario::Actions {
        state_transitions: actions.state_transitions.map(|transitions| {
            v9::scenario::StateTransitions {
                state_transitions: transitions
                    .state_transitions
                    .into_iter()
                    .map(convert_state_transition)
                    .collect(),
            }
        }),
        instructional_strategies: actions.instructional_strategies.map(|strategies| {
            v9::scenario::InstructionalStrategies {
                strategies: strategies
                    .strategies
                    .into_iter()
                    .map(convert_strategy)
                    .collect(),
            }
        }),
    }
}

fn convert_state_transition(
    transition: v8::scenario::StateTransition,
) -> v9::scenario::StateTransition {
    v9::scenario::StateTransition {
        name: transition.name,
        logical_expression: v9::scenario::LogicalExpression {
            expressions: transition
                .logical_expression
                .expressions
                .into_iter()
                .map(|expression| match expression {
                    v8::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    } => v9::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    },
                    v8::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    } => v9::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    },
                })
                .collect(),
        },
        strategy_choices: v9::scenario::StrategyChoices {
            strategy_refs: transition
                .strategy_choices
                .strategy_refs
                .into_iter()
                .map(|r| v9::scenario::StrategyRef { name: r.name })
                .collect(),
        },
    }
}

fn convert_strategy(strategy: v8::scenario::Strategy) -> v9::scenario::Strategy {
    let activity = match strategy.activity {
        v8::scenario::StrategyActivity::InstructionalIntervention(intervention) => {
            v9::scenario::StrategyActivity::InstructionalIntervention(
                v9::scenario::InstructionalIntervention {
                    strategy_handler: convert_strategy_handler(intervention.strategy_handler),
                    feedback: convert_feedback(intervention.feedback),
                },
            )
        }
        v8::scenario::StrategyActivity::PerformanceAssessment(assessment) => {
            v9::scenario::StrategyActivity::PerformanceAssessment(
                v9::scenario::PerformanceAssessment {
                    strategy_handler: convert_strategy_handler(assessment.strategy_handler),
                    node_id: assessment.node_id,
                },
            )
        }
        v8::scenario::StrategyActivity::ScenarioAdaptation(adaptation) => {
            v9::scenario::StrategyActivity::ScenarioAdaptation(v9::scenario::ScenarioAdaptation {
                strategy_handler: convert_strategy_handler(adaptation.strategy_handler),
                description: adaptation.description,
            })
        }
    };

    v9::scenario::Strategy {
        name: strategy.name,
        activity,
    }
}

fn convert_strategy_handler(
    handler: v8::scenario::StrategyHandler,
) -> v9::scenario::StrategyHandler {
    v9::scenario::StrategyHandler {
        impl_class: handler.impl_class,
    }
}

fn convert_feedback(feedback: v8::scenario::Feedback) -> v9::scenario::Feedback {
    let presentation = match feedback.presentation {
        v8::scenario::FeedbackPresentation::Message(message) => {
            v9::scenario::FeedbackPresentation::Message(v9::scenario::FeedbackMessage {
                content: message.content,
                display_in_tutor: message.display_in_tutor,
            })
        }
        v8::scenario::FeedbackPresentation::File(file) => {
            v9::scenario::FeedbackPresentation::File(v9::scenario::FeedbackFile { html: file.html })
        }
        v8::scenario::FeedbackPresentation::Audio(audio) => {
            v9::scenario::FeedbackPresentation::Audio(v9::scenario::FeedbackAudio {
                mp3_file: audio.mp3_file,
                ogg_file: audio.ogg_file,
            })
        }
    };

    v9::scenario::Feedback { presentation }
}

// ============================================================================
// Learner configuration node converters
// ============================================================================

fn convert_learner_input(input: v8::learner::Input) -> Result<v9::learner::Input> {
    Ok(v9::learner::Input {
        producers: input.producers.map(|producers| v9::learner::Producers {
            producers: producers
                .producers
                .into_iter()
                .map(|producer| match producer {
                    v8::learner::Producer::Sensor(sensor) => {
                        v9::learner::Producer::Sensor(v9::learner::Sensor {
                            sensor_type: sensor.sensor_type,
                        })
                    }
                    v8::learner::Producer::TrainingAppState(state) => {
                        v9::learner::Producer::TrainingAppState(v9::learner::TrainingAppState {
                            state_type: state.state_type,
                        })
                    }
                })
                .collect(),
        }),
        classifier: v9::learner::Classifier {
            classifier_impl: input.classifier.classifier_impl,
            properties: input.classifier.properties.map(|properties| {
                v9::learner::Properties {
                    properties: properties
                        .properties
                        .into_iter()
                        .map(|p| v9::learner::Property {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                }
            }),
        },
        predictor: v9::learner::Predictor {
            predictor_impl: input.predictor.predictor_impl,
        },
        translator: v9::learner::Translator {
            translator_impl: convert_translator_impl(&input.translator.translator_impl)?,
        },
    })
}

/// Re-maps translator implementations that moved packages in 9.0.
fn convert_translator_impl(translator_impl: &str) -> Result<String> {
    let mapped = match translator_impl {
        "learner.translate.DefaultTranslator" => "learner.translator.DefaultTranslator",
        "learner.translate.SineWaveTranslator" => "learner.translator.SineWaveTranslator",
        "learner.translate.TC3Translator" => "learner.translator.TC3Translator",
        other => {
            return Err(ConvertError::unhandled(
                format!("translator implementation '{}'", other),
                DocumentKind::LearnerConfiguration,
                V8ToV9Converter::FROM,
                V8ToV9Converter::TO,
            ));
        }
    };
    Ok(mapped.to_string())
}

// ============================================================================
// Conversation node converters
// ============================================================================

fn convert_conversation_node(
    node: v8::conversation::ConversationNode,
) -> v9::conversation::ConversationNode {
    match node {
        v8::conversation::ConversationNode::Message(message) => {
            v9::conversation::ConversationNode::Message(v9::conversation::MessageNode {
                node_id: message.node_id,
                text: message.text,
                child_id: message.child_id,
            })
        }
        v8::conversation::ConversationNode::Question(question) => {
            v9::conversation::ConversationNode::Question(v9::conversation::QuestionNode {
                node_id: question.node_id,
                text: question.text,
                choices: v9::conversation::Choices {
                    choices: question
                        .choices
                        .choices
                        .into_iter()
                        .map(|choice| v9::conversation::Choice {
                            text: choice.text,
                            child_id: choice.child_id,
                            assessment: choice.assessment,
                        })
                        .collect(),
                },
            })
        }
        v8::conversation::ConversationNode::End(end) => {
            v9::conversation::ConversationNode::End(v9::conversation::EndNode {
                node_id: end.node_id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoints_become_points_of_interest() {
        let objects = v8::scenario::Objects {
            waypoints: Some(v8::scenario::Waypoints {
                waypoints: vec![
                    v8::scenario::Waypoint {
                        name: "Rally point".to_string(),
                        coordinate: v8::scenario::Coordinate {
                            x: 10.0,
                            y: 20.0,
                            z: 0.0,
                        },
                    },
                    v8::scenario::Waypoint {
                        name: "Objective".to_string(),
                        coordinate: v8::scenario::Coordinate::default(),
                    },
                ],
            }),
        };

        let converted = convert_objects(objects);
        let places = converted.places_of_interest.unwrap().places;
        assert_eq!(places.len(), 2);
        let v9::scenario::PlaceOfInterest::Point { name, coordinate } = &places[0] else {
            panic!("expected a point");
        };
        assert_eq!(name, "Rally point");
        assert_eq!(coordinate.x, 10.0);
    }

    #[test]
    fn test_triggers_gain_wrapper_without_delay() {
        let triggers = v8::scenario::Triggers {
            triggers: vec![
                v8::scenario::TriggerType::ScenarioStarted,
                v8::scenario::TriggerType::EntityLocation {
                    waypoint: "Objective".to_string(),
                },
            ],
        };

        let converted = convert_triggers(triggers);
        assert_eq!(converted.triggers.len(), 2);
        assert_eq!(converted.triggers[0].trigger_delay, None);
        let v9::scenario::TriggerType::EntityLocation { place_ref } =
            &converted.triggers[1].event
        else {
            panic!("expected entity location trigger");
        };
        assert_eq!(place_ref, "Objective");
    }

    #[test]
    fn test_branch_point_renamed_field_for_field() {
        let branch_point = v8::course::MerrillsBranchPoint {
            transition_name: Some("Intro".to_string()),
            concepts: v8::course::BranchConcepts {
                concepts: vec!["map reading".to_string()],
            },
            quadrants: v8::course::Quadrants {
                content: vec![v8::course::Quadrant::Rule, v8::course::Quadrant::Example],
            },
        };

        let converted = convert_branch_point(branch_point);
        assert_eq!(converted.transition_name.as_deref(), Some("Intro"));
        assert_eq!(converted.concepts.concepts, vec!["map reading".to_string()]);
        assert_eq!(converted.quadrants.content.len(), 2);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let mut issues = IssueLog::new();
        let course = v8::course::Course {
            version: "8.0".to_string(),
            name: "Bare course".to_string(),
            description: None,
            survey_context: None,
            exclude: None,
            concepts: None,
            transitions: v8::course::Transitions::default(),
        };

        let converted = V8ToV9Converter.convert_course(course, &mut issues).unwrap();
        assert_eq!(converted.description, "");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_translator_impl_lookup() {
        assert_eq!(
            convert_translator_impl("learner.translate.DefaultTranslator").unwrap(),
            "learner.translator.DefaultTranslator"
        );
    }

    #[test]
    fn test_unknown_translator_impl_fails() {
        let err = convert_translator_impl("learner.translate.CustomTranslator").unwrap_err();
        assert!(err.is_unhandled_construct());
        assert!(err.to_string().contains("CustomTranslator"));
    }
}
