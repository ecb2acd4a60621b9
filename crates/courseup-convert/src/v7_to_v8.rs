//! Boundary converter for schema versions 7.0 → 8.0.
//!
//! Version 8.0 is the "wrapper" release: several values that used to be
//! flat become nested nodes.
//! - Course concepts become a list/hierarchy choice; a 7.0 list lands in
//!   the list alternative.
//! - The bare survey key choice becomes a survey properties wrapper.
//! - Feedback messages become nodes with optional display options.
//! - Metadata grows a content choice and a `presentAt` wrapper.
//! - Pedagogy quadrant literals collapse to bare phase names through an
//!   explicit lookup; an unrecognized literal fails the conversion.

use courseup_core::{
    ConvertError, DocumentKind, IssueLog, ParseDocument, Result, SchemaVersion, SourceFile,
};
use courseup_schema::{latest, v7, v8};

use crate::chain::BoundaryConverter;
use crate::descriptors;
use crate::v8_to_v9::V8ToV9Converter;

/// Converts version 7.0 documents to version 8.0, then delegates to the
/// rest of the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct V7ToV8Converter;

impl V7ToV8Converter {
    pub const FROM: SchemaVersion = SchemaVersion::V7;
    pub const TO: SchemaVersion = SchemaVersion::V8;

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
        course: v7::course::Course,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        self.log_hop(DocumentKind::Course);

        let next = v8::course::Course {
            version: Self::TO.attribute().to_string(),
            name: course.name,
            description: course.description,
            survey_context: course.survey_context,
            exclude: course.exclude,
            concepts: course.concepts.map(convert_concepts),
            transitions: convert_transitions(course.transitions),
        };

        V8ToV9Converter.convert_course(next, issues)
    }

    pub fn convert_course_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        let course: v7::course::Course = parser.parse(file, &descriptors::v7::COURSE, fail_fast)?;
        self.convert_course(course, issues)
    }

    // ========================================================================
    // Scenario
    // ========================================================================

    pub fn convert_scenario(
        &self,
        scenario: v7::scenario::Scenario,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        self.log_hop(DocumentKind::Scenario);

        let next = v8::scenario::Scenario {
            version: Self::TO.attribute().to_string(),
            name: scenario.name,
            description: scenario.description,
            resources: convert_resources(scenario.resources),
            assessment: convert_assessment(scenario.assessment),
            actions: convert_actions(scenario.actions),
        };

        V8ToV9Converter.convert_scenario(next, issues)
    }

    pub fn convert_scenario_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        let scenario: v7::scenario::Scenario =
            parser.parse(file, &descriptors::v7::SCENARIO, fail_fast)?;
        self.convert_scenario(scenario, issues)
    }

    // ========================================================================
    // Learner configuration
    // ========================================================================

    pub fn convert_learner_configuration(
        &self,
        config: v7::learner::LearnerConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        self.log_hop(DocumentKind::LearnerConfiguration);

        let next = v8::learner::LearnerConfiguration {
            version: Self::TO.attribute().to_string(),
            inputs: v8::learner::Inputs {
                inputs: config
                    .inputs
                    .inputs
                    .into_iter()
                    .map(convert_learner_input)
                    .collect(),
            },
        };

        V8ToV9Converter.convert_learner_configuration(next, issues)
    }

    pub fn convert_learner_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        let config: v7::learner::LearnerConfiguration =
            parser.parse(file, &descriptors::v7::LEARNER, fail_fast)?;
        self.convert_learner_configuration(config, issues)
    }

    // ========================================================================
    // Pedagogy configuration
    // ========================================================================

    pub fn convert_pedagogy_configuration(
        &self,
        config: v7::pedagogy::PedagogyConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        self.log_hop(DocumentKind::PedagogyConfiguration);

        let mut attributes = Vec::with_capacity(config.attributes.attributes.len());
        for attribute in config.attributes.attributes {
            attributes.push(v8::pedagogy::Attribute {
                learner_state: attribute.learner_state,
                phase: convert_quadrant_to_phase(&attribute.quadrant)?,
                metadata_attributes: v8::pedagogy::MetadataAttributes {
                    attributes: attribute
                        .metadata_attributes
                        .attributes
                        .into_iter()
                        .map(|m| v8::pedagogy::MetadataAttribute { value: m.value })
                        .collect(),
                },
            });
        }

        let next = v8::pedagogy::PedagogyConfiguration {
            version: Self::TO.attribute().to_string(),
            attributes: v8::pedagogy::Attributes { attributes },
        };

        V8ToV9Converter.convert_pedagogy_configuration(next, issues)
    }

    pub fn convert_pedagogy_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        let config: v7::pedagogy::PedagogyConfiguration =
            parser.parse(file, &descriptors::v7::PEDAGOGY, fail_fast)?;
        self.convert_pedagogy_configuration(config, issues)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn convert_metadata(
        &self,
        metadata: v7::metadata::Metadata,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        self.log_hop(DocumentKind::Metadata);

        let next = v8::metadata::Metadata {
            version: Self::TO.attribute().to_string(),
            display_name: metadata.display_name,
            // The bare reference becomes the simple alternative of the new
            // content choice.
            content: v8::metadata::Content {
                reference: v8::metadata::ContentRef::Simple(v8::metadata::SimpleRef {
                    value: metadata.simple_ref,
                }),
            },
            present_at: v8::metadata::PresentAt {
                merrill_quadrant: metadata.merrill_quadrant,
                remediation_only: None,
            },
            concepts: v8::metadata::Concepts {
                concepts: metadata
                    .concepts
                    .concepts
                    .into_iter()
                    .map(|c| v8::metadata::Concept {
                        name: c.name,
                        attributes: v8::metadata::Attributes {
                            attributes: c
                                .attributes
                                .attributes
                                .into_iter()
                                .map(|a| v8::metadata::Attribute { value: a.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        };

        V8ToV9Converter.convert_metadata(next, issues)
    }

    pub fn convert_metadata_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        let metadata: v7::metadata::Metadata =
            parser.parse(file, &descriptors::v7::METADATA, fail_fast)?;
        self.convert_metadata(metadata, issues)
    }

    // ========================================================================
    // Training application reference
    // ========================================================================

    pub fn convert_training_app_ref(
        &self,
        wrapper: v7::course::TrainingApplicationWrapper,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        self.log_hop(DocumentKind::TrainingApplicationReference);

        let next = v8::course::TrainingApplicationWrapper {
            version: Self::TO.attribute().to_string(),
            training_application: convert_training_application(wrapper.training_application),
        };

        V8ToV9Converter.convert_training_app_ref(next, issues)
    }

    pub fn convert_training_app_ref_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        let wrapper: v7::course::TrainingApplicationWrapper =
            parser.parse(file, &descriptors::v7::TRAINING_APP, fail_fast)?;
        self.convert_training_app_ref(wrapper, issues)
    }

    // ========================================================================
    // Conversation
    // ========================================================================

    pub fn convert_conversation(
        &self,
        conversation: v7::conversation::Conversation,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        self.log_hop(DocumentKind::Conversation);

        let next = v8::conversation::Conversation {
            version: Self::TO.attribute().to_string(),
            name: conversation.name,
            author: conversation.author,
            start_node_id: conversation.start_node_id,
            nodes: v8::conversation::Nodes {
                nodes: conversation
                    .nodes
                    .nodes
                    .into_iter()
                    .map(convert_conversation_node)
                    .collect(),
            },
        };

        V8ToV9Converter.convert_conversation(next, issues)
    }

    pub fn convert_conversation_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        let conversation: v7::conversation::Conversation =
            parser.parse(file, &descriptors::v7::CONVERSATION, fail_fast)?;
        self.convert_conversation(conversation, issues)
    }

    // ========================================================================
    // Sensor configuration
    // ========================================================================

    pub fn convert_sensor_configuration(
        &self,
        config: v7::sensor::SensorsConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        self.log_hop(DocumentKind::SensorConfiguration);

        let next = v8::sensor::SensorsConfiguration {
            version: Self::TO.attribute().to_string(),
            sensors: v8::sensor::Sensors {
                sensors: config
                    .sensors
                    .sensors
                    .into_iter()
                    .map(|s| v8::sensor::Sensor {
                        name: s.name,
                        sensor_impl: s.sensor_impl,
                        interval: s.interval,
                        filter_instance: s.filter_instance,
                        writer_instance: s.writer_instance,
                        distribute_externally: s.distribute_externally,
                    })
                    .collect(),
            },
            filters: config.filters.map(|filters| v8::sensor::Filters {
                filters: filters
                    .filters
                    .into_iter()
                    .map(|f| v8::sensor::Filter {
                        name: f.name,
                        filter_impl: f.filter_impl,
                        writer_instance: f.writer_instance,
                    })
                    .collect(),
            }),
            writers: config.writers.map(|writers| v8::sensor::Writers {
                writers: writers
                    .writers
                    .into_iter()
                    .map(|w| v8::sensor::Writer {
                        name: w.name,
                        writer_impl: w.writer_impl,
                    })
                    .collect(),
            }),
        };

        V8ToV9Converter.convert_sensor_configuration(next, issues)
    }

    pub fn convert_sensor_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        let config: v7::sensor::SensorsConfiguration =
            parser.parse(file, &descriptors::v7::SENSOR, fail_fast)?;
        self.convert_sensor_configuration(config, issues)
    }
}

impl BoundaryConverter for V7ToV8Converter {
    fn from_version(&self) -> SchemaVersion {
        Self::FROM
    }

    fn to_version(&self) -> SchemaVersion {
        Self::TO
    }

    fn description(&self) -> &'static str {
        "Promote flat concepts, survey keys, feedback messages, and metadata references into wrapper nodes"
    }
}

// ============================================================================
// Course node converters
// ============================================================================

fn convert_concepts(concepts: v7::course::Concepts) -> v8::course::Concepts {
    // A 7.0 concepts element is always a flat list; hierarchies only exist
    // from 8.0 on.
    v8::course::Concepts {
        choice: v8::course::ConceptsChoice::List(v8::course::ConceptList {
            concepts: concepts
                .concepts
                .into_iter()
                .map(|c| v8::course::Concept { name: c.name })
                .collect(),
        }),
    }
}

fn convert_transitions(transitions: v7::course::Transitions) -> v8::course::Transitions {
    let mut converted = Vec::with_capacity(transitions.transitions.len());

    for transition in transitions.transitions {
        let new_transition = match transition {
            v7::course::CourseTransition::Guidance(guidance) => {
                v8::course::CourseTransition::Guidance(convert_guidance(guidance))
            }
            v7::course::CourseTransition::PresentSurvey(survey) => {
                v8::course::CourseTransition::PresentSurvey(convert_present_survey(survey))
            }
            v7::course::CourseTransition::Aar(aar) => {
                v8::course::CourseTransition::Aar(v8::course::Aar {
                    transition_name: aar.transition_name,
                    full_screen: aar.full_screen,
                })
            }
            v7::course::CourseTransition::TrainingApplication(train_app) => {
                v8::course::CourseTransition::TrainingApplication(convert_training_application(
                    train_app,
                ))
            }
            v7::course::CourseTransition::LessonMaterial(material) => {
                v8::course::CourseTransition::LessonMaterial(convert_lesson_material(material))
            }
            v7::course::CourseTransition::MerrillsBranchPoint(branch_point) => {
                v8::course::CourseTransition::MerrillsBranchPoint(convert_branch_point(
                    branch_point,
                ))
            }
        };
        converted.push(new_transition);
    }

    v8::course::Transitions {
        transitions: converted,
    }
}

fn convert_guidance(guidance: v7::course::Guidance) -> v8::course::Guidance {
    let choice = match guidance.choice {
        v7::course::GuidanceChoice::Message(message) => {
            v8::course::GuidanceChoice::Message(v8::course::GuidanceMessage {
                content: message.content,
            })
        }
        v7::course::GuidanceChoice::File(file) => {
            v8::course::GuidanceChoice::File(v8::course::GuidanceFile {
                html: file.html,
                message: file.message,
            })
        }
        v7::course::GuidanceChoice::Url(url) => {
            v8::course::GuidanceChoice::Url(v8::course::GuidanceUrl {
                address: url.address,
                message: url.message,
            })
        }
    };

    v8::course::Guidance {
        transition_name: guidance.transition_name,
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice,
    }
}

fn convert_present_survey(survey: v7::course::PresentSurvey) -> v8::course::PresentSurvey {
    let choice = match survey.choice {
        // The bare key gains a properties wrapper in 8.0.
        v7::course::SurveyChoice::GiftSurveyKey(key) => {
            v8::course::SurveyChoice::GiftSurveyProperties(v8::course::GiftSurveyProperties {
                gift_survey_key: key,
            })
        }
        v7::course::SurveyChoice::AutoTutorSession(session) => {
            v8::course::SurveyChoice::AutoTutorSession(v8::course::AutoTutorSession {
                dkf_ref: v8::course::DkfRef {
                    file: session.dkf_ref.file,
                },
            })
        }
        v7::course::SurveyChoice::ConceptSurvey(concept_survey) => {
            v8::course::SurveyChoice::ConceptSurvey(convert_concept_survey(concept_survey))
        }
    };

    v8::course::PresentSurvey {
        transition_name: survey.transition_name,
        full_screen: survey.full_screen,
        show_in_aar: survey.show_in_aar,
        choice,
    }
}

fn convert_concept_survey(survey: v7::course::ConceptSurvey) -> v8::course::ConceptSurvey {
    v8::course::ConceptSurvey {
        gift_survey_key: survey.gift_survey_key,
        concept_questions: survey
            .concept_questions
            .into_iter()
            .map(|q| v8::course::ConceptQuestion {
                name: q.name,
                question_count: q.question_count,
            })
            .collect(),
    }
}

fn convert_training_application(
    train_app: v7::course::TrainingApplication,
) -> v8::course::TrainingApplication {
    v8::course::TrainingApplication {
        transition_name: train_app.transition_name,
        dkf_ref: train_app.dkf_ref.map(|r| v8::course::DkfRef { file: r.file }),
        interops: v8::course::Interops {
            interops: train_app
                .interops
                .interops
                .into_iter()
                .map(|interop| v8::course::Interop {
                    interop_impl: interop.interop_impl,
                    input_args: interop.input_args,
                })
                .collect(),
        },
        guidance: train_app.guidance.map(convert_guidance),
        finished_when: train_app.finished_when,
    }
}

fn convert_lesson_material(material: v7::course::LessonMaterial) -> v8::course::LessonMaterial {
    v8::course::LessonMaterial {
        transition_name: material.transition_name,
        lesson_material_list: material.lesson_material_list.map(|list| {
            v8::course::LessonMaterialList {
                media: list.media.into_iter().map(convert_media).collect(),
            }
        }),
        lesson_material_files: material.lesson_material_files.map(|files| {
            v8::course::LessonMaterialFiles { files: files.files }
        }),
    }
}

fn convert_media(media: v7::course::Media) -> v8::course::Media {
    let properties = match media.properties {
        v7::course::MediaProperties::Pdf => v8::course::MediaProperties::Pdf,
        v7::course::MediaProperties::WebpageProperties => {
            v8::course::MediaProperties::WebpageProperties
        }
        v7::course::MediaProperties::ImageProperties => v8::course::MediaProperties::ImageProperties,
        v7::course::MediaProperties::YoutubeVideoProperties(youtube) => {
            v8::course::MediaProperties::YoutubeVideoProperties(v8::course::YoutubeVideoProperties {
                allow_full_screen: youtube.allow_full_screen,
                allow_auto_play: youtube.allow_auto_play,
            })
        }
    };

    v8::course::Media {
        name: media.name,
        uri: media.uri,
        properties,
    }
}

fn convert_branch_point(
    branch_point: v7::course::MerrillsBranchPoint,
) -> v8::course::MerrillsBranchPoint {
    let mut content = Vec::with_capacity(branch_point.quadrants.content.len());
    for quadrant in branch_point.quadrants.content {
        let new_quadrant = match quadrant {
            v7::course::Quadrant::Rule => v8::course::Quadrant::Rule,
            v7::course::Quadrant::Example => v8::course::Quadrant::Example,
            v7::course::Quadrant::Recall(recall) => {
                v8::course::Quadrant::Recall(v8::course::Recall {
                    present_survey: v8::course::RecallSurvey {
                        concept_survey: convert_concept_survey(recall.present_survey.concept_survey),
                        full_screen: recall.present_survey.full_screen,
                    },
                    allowed_attempts: recall.allowed_attempts,
                })
            }
            v7::course::Quadrant::Practice(practice) => {
                v8::course::Quadrant::Practice(v8::course::Practice {
                    practice_concepts: v8::course::PracticeConcepts {
                        course_concepts: practice.practice_concepts.course_concepts,
                    },
                    allowed_attempts: practice.allowed_attempts,
                })
            }
            v7::course::Quadrant::Transitions(transitions) => {
                v8::course::Quadrant::Transitions(convert_transitions(transitions))
            }
        };
        content.push(new_quadrant);
    }

    v8::course::MerrillsBranchPoint {
        transition_name: branch_point.transition_name,
        concepts: v8::course::BranchConcepts {
            concepts: branch_point.concepts.concepts,
        },
        quadrants: v8::course::Quadrants { content },
    }
}

// ============================================================================
// Scenario node converters
// ============================================================================

fn convert_resources(resources: v7::scenario::Resources) -> v8::scenario::Resources {
    v8::scenario::Resources {
        survey_context: resources.survey_context,
        interops: resources.interops.map(|interops| v8::scenario::Interops {
            interops: interops
                .interops
                .into_iter()
                .map(|interop| v8::scenario::Interop {
                    interop_impl: interop.interop_impl,
                })
                .collect(),
        }),
    }
}

fn convert_assessment(assessment: v7::scenario::Assessment) -> v8::scenario::Assessment {
    v8::scenario::Assessment {
        objects: assessment.objects.map(|objects| v8::scenario::Objects {
            waypoints: objects.waypoints.map(|waypoints| v8::scenario::Waypoints {
                waypoints: waypoints
                    .waypoints
                    .into_iter()
                    .map(|w| v8::scenario::Waypoint {
                        name: w.name,
                        coordinate: convert_coordinate(w.coordinate),
                    })
                    .collect(),
            }),
        }),
        tasks: v8::scenario::Tasks {
            tasks: assessment.tasks.tasks.into_iter().map(convert_task).collect(),
        },
    }
}

fn convert_coordinate(coordinate: v7::scenario::Coordinate) -> v8::scenario::Coordinate {
    v8::scenario::Coordinate {
        x: coordinate.x,
        y: coordinate.y,
        z: coordinate.z,
    }
}

fn convert_task(task: v7::scenario::Task) -> v8::scenario::Task {
    v8::scenario::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers.map(convert_triggers),
        end_triggers: task.end_triggers.map(convert_triggers),
        concepts: v8::scenario::Concepts {
            concepts: task
                .concepts
                .concepts
                .into_iter()
                .map(convert_scenario_concept)
                .collect(),
        },
    }
}

fn convert_triggers(triggers: v7::scenario::Triggers) -> v8::scenario::Triggers {
    v8::scenario::Triggers {
        triggers: triggers
            .triggers
            .into_iter()
            .map(|trigger| match trigger {
                v7::scenario::TriggerType::ConceptEnded { node_id } => {
                    v8::scenario::TriggerType::ConceptEnded { node_id }
                }
                v7::scenario::TriggerType::TaskEnded { node_id } => {
                    v8::scenario::TriggerType::TaskEnded { node_id }
                }
                v7::scenario::TriggerType::EntityLocation { waypoint } => {
                    v8::scenario::TriggerType::EntityLocation { waypoint }
                }
                v7::scenario::TriggerType::LearnerLocation { waypoint } => {
                    v8::scenario::TriggerType::LearnerLocation { waypoint }
                }
                v7::scenario::TriggerType::ScenarioStarted => {
                    v8::scenario::TriggerType::ScenarioStarted
                }
            })
            .collect(),
    }
}

fn convert_scenario_concept(concept: v7::scenario::Concept) -> v8::scenario::Concept {
    v8::scenario::Concept {
        name: concept.name,
        node_id: concept.node_id,
        conditions: v8::scenario::Conditions {
            conditions: concept
                .conditions
                .conditions
                .into_iter()
                .map(convert_condition)
                .collect(),
        },
    }
}

fn convert_condition(condition: v7::scenario::Condition) -> v8::scenario::Condition {
    v8::scenario::Condition {
        condition_impl: condition.condition_impl,
        default_assessment: condition.default_assessment,
        input: condition.input.map(|input| v8::scenario::ConditionInputWrapper {
            input: convert_condition_input(input.input),
        }),
    }
}

fn convert_condition_input(input: v7::scenario::ConditionInput) -> v8::scenario::ConditionInput {
    match input {
        v7::scenario::ConditionInput::ApplicationCompletedCondition(c) => {
            v8::scenario::ConditionInput::ApplicationCompletedCondition(
                v8::scenario::ApplicationCompletedCondition {
                    ideal_completion_duration: c.ideal_completion_duration,
                },
            )
        }
        v7::scenario::ConditionInput::AvoidLocationCondition(c) => {
            v8::scenario::ConditionInput::AvoidLocationCondition(
                v8::scenario::AvoidLocationCondition {
                    waypoint: c.waypoint,
                },
            )
        }
        v7::scenario::ConditionInput::CheckpointPaceCondition(c) => {
            v8::scenario::ConditionInput::CheckpointPaceCondition(
                v8::scenario::CheckpointPaceCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v7::scenario::ConditionInput::CheckpointProgressCondition(c) => {
            v8::scenario::ConditionInput::CheckpointProgressCondition(
                v8::scenario::CheckpointProgressCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v7::scenario::ConditionInput::EliminateHostilesCondition(c) => {
            v8::scenario::ConditionInput::EliminateHostilesCondition(
                v8::scenario::EliminateHostilesCondition {
                    entities: c.entities.map(|entities| v8::scenario::Entities {
                        start_locations: entities
                            .start_locations
                            .into_iter()
                            .map(|s| v8::scenario::StartLocation {
                                coordinate: convert_coordinate(s.coordinate),
                            })
                            .collect(),
                    }),
                },
            )
        }
        v7::scenario::ConditionInput::GenericConditionInput(c) => {
            v8::scenario::ConditionInput::GenericConditionInput(
                v8::scenario::GenericConditionInput {
                    nvpairs: c
                        .nvpairs
                        .into_iter()
                        .map(|p| v8::scenario::NvPair {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                },
            )
        }
        v7::scenario::ConditionInput::IdentifyPoisCondition(c) => {
            v8::scenario::ConditionInput::IdentifyPoisCondition(
                v8::scenario::IdentifyPoisCondition {
                    pois: v8::scenario::Pois {
                        waypoint_refs: c.pois.waypoint_refs,
                    },
                },
            )
        }
        v7::scenario::ConditionInput::TimerCondition(c) => {
            v8::scenario::ConditionInput::TimerCondition(v8::scenario::TimerCondition {
                repeatable: c.repeatable,
                interval: c.interval,
            })
        }
        v7::scenario::ConditionInput::SimileConditionInput(c) => {
            v8::scenario::ConditionInput::SimileConditionInput(
                v8::scenario::SimileConditionInput {
                    configuration_file: c.configuration_file,
                    condition_key: c.condition_key,
                },
            )
        }
    }
}

fn convert_checkpoint(checkpoint: v7::scenario::Checkpoint) -> v8::scenario::Checkpoint {
    v8::scenario::Checkpoint {
        waypoint: checkpoint.waypoint,
        at_time: checkpoint.at_time,
    }
}

fn convert_actions(actions: v7::scenario::Actions) -> v8::scenario::Actions {
    v8::scenario::Actions {
        state_transitions: actions.state_transitions.map(|transitions| {
            v8::scenario::StateTransitions {
                state_transitions: transitions
                    .state_transitions
                    .into_iter()
                    .map(convert_state_transition)
                    .collect(),
            }
        }),
        instructional_strategies: actions.instructional_strategies.map(|strategies| {
            v8::scenario::InstructionalStrategies {
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
    transition: v7::scenario::StateTransition,
) -> v8::scenario::StateTransition {
    v8::scenario::StateTransition {
        name: transition.name,
        logical_expression: v8::scenario::LogicalExpression {
            expressions: transition
                .logical_expression
                .expressions
                .into_iter()
                .map(|expression| match expression {
                    v7::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    } => v8::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    },
                    v7::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    } => v8::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    },
                })
                .collect(),
        },
        strategy_choices: v8::scenario::StrategyChoices {
            strategy_refs: transition
                .strategy_choices
                .strategy_refs
                .into_iter()
                .map(|r| v8::scenario::StrategyRef { name: r.name })
                .collect(),
        },
    }
}

fn convert_strategy(strategy: v7::scenario::Strategy) -> v8::scenario::Strategy {
    let activity = match strategy.activity {
        v7::scenario::StrategyActivity::InstructionalIntervention(intervention) => {
            v8::scenario::StrategyActivity::InstructionalIntervention(
                v8::scenario::InstructionalIntervention {
                    strategy_handler: convert_strategy_handler(intervention.strategy_handler),
                    feedback: convert_feedback(intervention.feedback),
                },
            )
        }
        v7::scenario::StrategyActivity::PerformanceAssessment(assessment) => {
            v8::scenario::StrategyActivity::PerformanceAssessment(
                v8::scenario::PerformanceAssessment {
                    strategy_handler: convert_strategy_handler(assessment.strategy_handler),
                    node_id: assessment.node_id,
                },
            )
        }
        v7::scenario::StrategyActivity::ScenarioAdaptation(adaptation) => {
            v8::scenario::StrategyActivity::ScenarioAdaptation(v8::scenario::ScenarioAdaptation {
                strategy_handler: convert_strategy_handler(adaptation.strategy_handler),
                description: adaptation.description,
            })
        }
    };

    v8::scenario::Strategy {
        name: strategy.name,
        activity,
    }
}

fn convert_strategy_handler(
    handler: v7::scenario::StrategyHandler,
) -> v8::scenario::StrategyHandler {
    v8::scenario::StrategyHandler {
        impl_class: handler.impl_class,
    }
}

fn convert_feedback(feedback: v7::scenario::Feedback) -> v8::scenario::Feedback {
    let presentation = match feedback.presentation {
        // A bare message string becomes a message node in 8.0.
        v7::scenario::FeedbackPresentation::Message(content) => {
            v8::scenario::FeedbackPresentation::Message(v8::scenario::FeedbackMessage {
                content,
                display_in_tutor: None,
            })
        }
        v7::scenario::FeedbackPresentation::File(file) => {
            v8::scenario::FeedbackPresentation::File(v8::scenario::FeedbackFile { html: file.html })
        }
        v7::scenario::FeedbackPresentation::Audio(audio) => {
            v8::scenario::FeedbackPresentation::Audio(v8::scenario::FeedbackAudio {
                mp3_file: audio.mp3_file,
                ogg_file: audio.ogg_file,
            })
        }
    };

    v8::scenario::Feedback { presentation }
}

// ============================================================================
// Learner configuration node converters
// ============================================================================

fn convert_learner_input(input: v7::learner::Input) -> v8::learner::Input {
    v8::learner::Input {
        producers: input.producers.map(|producers| v8::learner::Producers {
            producers: producers
                .producers
                .into_iter()
                .map(|producer| match producer {
                    v7::learner::Producer::Sensor(sensor) => {
                        v8::learner::Producer::Sensor(v8::learner::Sensor {
                            sensor_type: sensor.sensor_type,
                        })
                    }
                    v7::learner::Producer::TrainingAppState(state) => {
                        v8::learner::Producer::TrainingAppState(v8::learner::TrainingAppState {
                            state_type: state.state_type,
                        })
                    }
                })
                .collect(),
        }),
        classifier: v8::learner::Classifier {
            classifier_impl: input.classifier.classifier_impl,
            properties: input.classifier.properties.map(|properties| {
                v8::learner::Properties {
                    properties: properties
                        .properties
                        .into_iter()
                        .map(|p| v8::learner::Property {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                }
            }),
        },
        predictor: v8::learner::Predictor {
            predictor_impl: input.predictor.predictor_impl,
        },
        translator: v8::learner::Translator {
            translator_impl: input.translator.translator_impl,
        },
    }
}

// ============================================================================
// Pedagogy node converters
// ============================================================================

/// Collapses a 7.0 quadrant literal to the bare 8.0 phase name.
fn convert_quadrant_to_phase(quadrant: &str) -> Result<String> {
    let phase = match quadrant {
        "Rule Quadrant" => "Rule",
        "Example Quadrant" => "Example",
        "Recall Quadrant" => "Recall",
        "Practice Quadrant" => "Practice",
        other => {
            return Err(ConvertError::unhandled(
                format!("instruction quadrant literal '{}'", other),
                DocumentKind::PedagogyConfiguration,
                V7ToV8Converter::FROM,
                V7ToV8Converter::TO,
            ));
        }
    };
    Ok(phase.to_string())
}

// ============================================================================
// Conversation node converters
// ============================================================================

fn convert_conversation_node(
    node: v7::conversation::ConversationNode,
) -> v8::conversation::ConversationNode {
    match node {
        v7::conversation::ConversationNode::Message(message) => {
            v8::conversation::ConversationNode::Message(v8::conversation::MessageNode {
                node_id: message.node_id,
                text: message.text,
                child_id: message.child_id,
            })
        }
        v7::conversation::ConversationNode::Question(question) => {
            v8::conversation::ConversationNode::Question(v8::conversation::QuestionNode {
                node_id: question.node_id,
                text: question.text,
                choices: v8::conversation::Choices {
                    choices: question
                        .choices
                        .choices
                        .into_iter()
                        .map(|choice| v8::conversation::Choice {
                            text: choice.text,
                            child_id: choice.child_id,
                            assessment: choice.assessment,
                        })
                        .collect(),
                },
            })
        }
        v7::conversation::ConversationNode::End(end) => {
            v8::conversation::ConversationNode::End(v8::conversation::EndNode {
                node_id: end.node_id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_list_lands_in_list_choice() {
        let concepts = v7::course::Concepts {
            concepts: vec![
                v7::course::Concept {
                    name: "dead reckoning".to_string(),
                },
                v7::course::Concept {
                    name: "terrain association".to_string(),
                },
            ],
        };

        let converted = convert_concepts(concepts);
        let v8::course::ConceptsChoice::List(list) = converted.choice else {
            panic!("expected list choice");
        };
        assert_eq!(list.concepts.len(), 2);
        assert_eq!(list.concepts[0].name, "dead reckoning");
    }

    #[test]
    fn test_bare_survey_key_gains_wrapper() {
        let survey = v7::course::PresentSurvey {
            transition_name: Some("Checkpoint quiz".to_string()),
            full_screen: None,
            show_in_aar: None,
            choice: v7::course::SurveyChoice::GiftSurveyKey("quiz.key.1".to_string()),
        };

        let converted = convert_present_survey(survey);
        let v8::course::SurveyChoice::GiftSurveyProperties(properties) = converted.choice else {
            panic!("expected survey properties wrapper");
        };
        assert_eq!(properties.gift_survey_key, "quiz.key.1");
    }

    #[test]
    fn test_feedback_message_becomes_node() {
        let feedback = v7::scenario::Feedback {
            presentation: v7::scenario::FeedbackPresentation::Message(
                "Check your azimuth.".to_string(),
            ),
        };

        let converted = convert_feedback(feedback);
        let v8::scenario::FeedbackPresentation::Message(message) = converted.presentation else {
            panic!("expected message node");
        };
        assert_eq!(message.content, "Check your azimuth.");
        assert_eq!(message.display_in_tutor, None);
    }

    #[test]
    fn test_quadrant_literal_lookup() {
        assert_eq!(convert_quadrant_to_phase("Rule Quadrant").unwrap(), "Rule");
        assert_eq!(
            convert_quadrant_to_phase("Practice Quadrant").unwrap(),
            "Practice"
        );
    }

    #[test]
    fn test_unknown_quadrant_literal_fails() {
        let err = convert_quadrant_to_phase("Synthesis Quadrant").unwrap_err();
        assert!(err.is_unhandled_construct());
        assert!(err.to_string().contains("Synthesis Quadrant"));
    }
}
