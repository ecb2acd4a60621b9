//! Boundary converter for schema versions 6.0 → 7.0.
//!
//! Changes across this boundary:
//! - The VBS gateway interop implementation moved packages; the legacy
//!   literal is re-mapped wherever interops are referenced.
//! - Guidance nested inside a branch-point quadrant (or embedded in a
//!   training application) must be named; unnamed guidance gets a name
//!   generated from the parent transition.
//! - The metadata quadrant-specific marker no longer exists. Marked
//!   attributes are carried without the marker and reported on the issue
//!   log.

use courseup_core::{DocumentKind, IssueLog, ParseDocument, Result, SchemaVersion, SourceFile};
use courseup_schema::{latest, v6, v7};

use crate::chain::BoundaryConverter;
use crate::descriptors;
use crate::v7_to_v8::V7ToV8Converter;

const OLD_VBS_INTEROP: &str = "gateway.interop.vbs2plugin.VBS2PluginInterface";
const NEW_VBS_INTEROP: &str = "gateway.interop.vbsplugin.VBSPluginInterface";

/// Converts version 6.0 documents to version 7.0, then delegates to the
/// rest of the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct V6ToV7Converter;

impl V6ToV7Converter {
    pub const FROM: SchemaVersion = SchemaVersion::V6;
    pub const TO: SchemaVersion = SchemaVersion::V7;

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

    /// Converts a parsed 6.0 course through the whole chain.
    pub fn convert_course(
        &self,
        course: v6::course::Course,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        self.log_hop(DocumentKind::Course);

        let next = v7::course::Course {
            version: Self::TO.attribute().to_string(),
            name: course.name,
            description: course.description,
            survey_context: course.survey_context,
            exclude: course.exclude,
            concepts: course.concepts.map(convert_concepts),
            transitions: convert_transitions(course.transitions),
        };

        V7ToV8Converter.convert_course(next, issues)
    }

    /// Parses a raw 6.0 course file and converts it through the whole chain.
    pub fn convert_course_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        let course: v6::course::Course = parser.parse(file, &descriptors::v6::COURSE, fail_fast)?;
        self.convert_course(course, issues)
    }

    // ========================================================================
    // Scenario
    // ========================================================================

    pub fn convert_scenario(
        &self,
        scenario: v6::scenario::Scenario,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        self.log_hop(DocumentKind::Scenario);

        let next = v7::scenario::Scenario {
            version: Self::TO.attribute().to_string(),
            name: scenario.name,
            description: scenario.description,
            resources: convert_resources(scenario.resources),
            assessment: convert_assessment(scenario.assessment),
            actions: convert_actions(scenario.actions),
        };

        V7ToV8Converter.convert_scenario(next, issues)
    }

    pub fn convert_scenario_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        let scenario: v6::scenario::Scenario =
            parser.parse(file, &descriptors::v6::SCENARIO, fail_fast)?;
        self.convert_scenario(scenario, issues)
    }

    // ========================================================================
    // Learner configuration
    // ========================================================================

    pub fn convert_learner_configuration(
        &self,
        config: v6::learner::LearnerConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        self.log_hop(DocumentKind::LearnerConfiguration);

        let next = v7::learner::LearnerConfiguration {
            version: Self::TO.attribute().to_string(),
            inputs: v7::learner::Inputs {
                inputs: config
                    .inputs
                    .inputs
                    .into_iter()
                    .map(convert_learner_input)
                    .collect(),
            },
        };

        V7ToV8Converter.convert_learner_configuration(next, issues)
    }

    pub fn convert_learner_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        let config: v6::learner::LearnerConfiguration =
            parser.parse(file, &descriptors::v6::LEARNER, fail_fast)?;
        self.convert_learner_configuration(config, issues)
    }

    // ========================================================================
    // Pedagogy configuration
    // ========================================================================

    pub fn convert_pedagogy_configuration(
        &self,
        config: v6::pedagogy::PedagogyConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        self.log_hop(DocumentKind::PedagogyConfiguration);

        let next = v7::pedagogy::PedagogyConfiguration {
            version: Self::TO.attribute().to_string(),
            attributes: v7::pedagogy::Attributes {
                attributes: config
                    .attributes
                    .attributes
                    .into_iter()
                    .map(|a| v7::pedagogy::Attribute {
                        learner_state: a.learner_state,
                        quadrant: a.quadrant,
                        metadata_attributes: v7::pedagogy::MetadataAttributes {
                            attributes: a
                                .metadata_attributes
                                .attributes
                                .into_iter()
                                .map(|m| v7::pedagogy::MetadataAttribute { value: m.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        };

        V7ToV8Converter.convert_pedagogy_configuration(next, issues)
    }

    pub fn convert_pedagogy_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        let config: v6::pedagogy::PedagogyConfiguration =
            parser.parse(file, &descriptors::v6::PEDAGOGY, fail_fast)?;
        self.convert_pedagogy_configuration(config, issues)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn convert_metadata(
        &self,
        metadata: v6::metadata::Metadata,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        self.log_hop(DocumentKind::Metadata);

        let next = v7::metadata::Metadata {
            version: Self::TO.attribute().to_string(),
            display_name: metadata.display_name,
            simple_ref: metadata.simple_ref,
            merrill_quadrant: metadata.merrill_quadrant,
            concepts: v7::metadata::Concepts {
                concepts: metadata
                    .concepts
                    .concepts
                    .into_iter()
                    .map(|c| convert_metadata_concept(c, issues))
                    .collect(),
            },
        };

        V7ToV8Converter.convert_metadata(next, issues)
    }

    pub fn convert_metadata_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        let metadata: v6::metadata::Metadata =
            parser.parse(file, &descriptors::v6::METADATA, fail_fast)?;
        self.convert_metadata(metadata, issues)
    }

    // ========================================================================
    // Training application reference
    // ========================================================================

    pub fn convert_training_app_ref(
        &self,
        wrapper: v6::course::TrainingApplicationWrapper,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        self.log_hop(DocumentKind::TrainingApplicationReference);

        let next = v7::course::TrainingApplicationWrapper {
            version: Self::TO.attribute().to_string(),
            training_application: convert_training_application(wrapper.training_application),
        };

        V7ToV8Converter.convert_training_app_ref(next, issues)
    }

    pub fn convert_training_app_ref_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        let wrapper: v6::course::TrainingApplicationWrapper =
            parser.parse(file, &descriptors::v6::TRAINING_APP, fail_fast)?;
        self.convert_training_app_ref(wrapper, issues)
    }

    // ========================================================================
    // Conversation
    // ========================================================================

    pub fn convert_conversation(
        &self,
        conversation: v6::conversation::Conversation,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        self.log_hop(DocumentKind::Conversation);

        let next = v7::conversation::Conversation {
            version: Self::TO.attribute().to_string(),
            name: conversation.name,
            author: conversation.author,
            start_node_id: conversation.start_node_id,
            nodes: v7::conversation::Nodes {
                nodes: conversation
                    .nodes
                    .nodes
                    .into_iter()
                    .map(convert_conversation_node)
                    .collect(),
            },
        };

        V7ToV8Converter.convert_conversation(next, issues)
    }

    pub fn convert_conversation_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        let conversation: v6::conversation::Conversation =
            parser.parse(file, &descriptors::v6::CONVERSATION, fail_fast)?;
        self.convert_conversation(conversation, issues)
    }

    // ========================================================================
    // Sensor configuration
    // ========================================================================

    pub fn convert_sensor_configuration(
        &self,
        config: v6::sensor::SensorsConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        self.log_hop(DocumentKind::SensorConfiguration);

        let next = v7::sensor::SensorsConfiguration {
            version: Self::TO.attribute().to_string(),
            sensors: v7::sensor::Sensors {
                sensors: config
                    .sensors
                    .sensors
                    .into_iter()
                    .map(convert_sensor)
                    .collect(),
            },
            filters: config.filters.map(convert_filters),
            writers: config.writers.map(convert_writers),
        };

        V7ToV8Converter.convert_sensor_configuration(next, issues)
    }

    pub fn convert_sensor_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        let config: v6::sensor::SensorsConfiguration =
            parser.parse(file, &descriptors::v6::SENSOR, fail_fast)?;
        self.convert_sensor_configuration(config, issues)
    }
}

impl BoundaryConverter for V6ToV7Converter {
    fn from_version(&self) -> SchemaVersion {
        Self::FROM
    }

    fn to_version(&self) -> SchemaVersion {
        Self::TO
    }

    fn description(&self) -> &'static str {
        "Re-map the VBS interop package, name nested guidance, drop the metadata quadrant-specific marker"
    }
}

// ============================================================================
// Course node converters
// ============================================================================

fn convert_concepts(concepts: v6::course::Concepts) -> v7::course::Concepts {
    v7::course::Concepts {
        concepts: concepts
            .concepts
            .into_iter()
            .map(|c| v7::course::Concept { name: c.name })
            .collect(),
    }
}

fn convert_transitions(transitions: v6::course::Transitions) -> v7::course::Transitions {
    let mut converted = Vec::with_capacity(transitions.transitions.len());

    for transition in transitions.transitions {
        let new_transition = match transition {
            v6::course::CourseTransition::Guidance(guidance) => {
                v7::course::CourseTransition::Guidance(convert_guidance(guidance, None))
            }
            v6::course::CourseTransition::PresentSurvey(survey) => {
                v7::course::CourseTransition::PresentSurvey(convert_present_survey(survey))
            }
            v6::course::CourseTransition::Aar(aar) => {
                v7::course::CourseTransition::Aar(v7::course::Aar {
                    transition_name: aar.transition_name,
                    full_screen: aar.full_screen,
                })
            }
            v6::course::CourseTransition::TrainingApplication(train_app) => {
                v7::course::CourseTransition::TrainingApplication(convert_training_application(
                    train_app,
                ))
            }
            v6::course::CourseTransition::LessonMaterial(material) => {
                v7::course::CourseTransition::LessonMaterial(convert_lesson_material(material))
            }
            v6::course::CourseTransition::MerrillsBranchPoint(branch_point) => {
                v7::course::CourseTransition::MerrillsBranchPoint(convert_branch_point(
                    branch_point,
                ))
            }
        };
        converted.push(new_transition);
    }

    v7::course::Transitions {
        transitions: converted,
    }
}

fn convert_guidance(
    guidance: v6::course::Guidance,
    generated_name: Option<String>,
) -> v7::course::Guidance {
    let choice = match guidance.choice {
        v6::course::GuidanceChoice::Message(message) => {
            v7::course::GuidanceChoice::Message(v7::course::GuidanceMessage {
                content: message.content,
            })
        }
        v6::course::GuidanceChoice::File(file) => {
            v7::course::GuidanceChoice::File(v7::course::GuidanceFile {
                html: file.html,
                message: file.message,
            })
        }
        v6::course::GuidanceChoice::Url(url) => {
            v7::course::GuidanceChoice::Url(v7::course::GuidanceUrl {
                address: url.address,
                message: url.message,
            })
        }
    };

    v7::course::Guidance {
        transition_name: guidance.transition_name.or(generated_name),
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice,
    }
}

fn convert_present_survey(survey: v6::course::PresentSurvey) -> v7::course::PresentSurvey {
    let choice = match survey.choice {
        v6::course::SurveyChoice::GiftSurveyKey(key) => v7::course::SurveyChoice::GiftSurveyKey(key),
        v6::course::SurveyChoice::AutoTutorSession(session) => {
            v7::course::SurveyChoice::AutoTutorSession(v7::course::AutoTutorSession {
                dkf_ref: v7::course::DkfRef {
                    file: session.dkf_ref.file,
                },
            })
        }
        v6::course::SurveyChoice::ConceptSurvey(concept_survey) => {
            v7::course::SurveyChoice::ConceptSurvey(convert_concept_survey(concept_survey))
        }
    };

    v7::course::PresentSurvey {
        transition_name: survey.transition_name,
        full_screen: survey.full_screen,
        show_in_aar: survey.show_in_aar,
        choice,
    }
}

fn convert_concept_survey(survey: v6::course::ConceptSurvey) -> v7::course::ConceptSurvey {
    v7::course::ConceptSurvey {
        gift_survey_key: survey.gift_survey_key,
        concept_questions: survey
            .concept_questions
            .into_iter()
            .map(|q| v7::course::ConceptQuestion {
                name: q.name,
                question_count: q.question_count,
            })
            .collect(),
    }
}

fn convert_training_application(
    train_app: v6::course::TrainingApplication,
) -> v7::course::TrainingApplication {
    // An embedded guidance without a name is named after the training app
    // transition, e.g. "PPT slideshow - Guidance".
    let generated_name = train_app
        .transition_name
        .as_ref()
        .map(|name| format!("{} - Guidance", name));

    v7::course::TrainingApplication {
        transition_name: train_app.transition_name,
        dkf_ref: train_app.dkf_ref.map(|r| v7::course::DkfRef { file: r.file }),
        interops: v7::course::Interops {
            interops: train_app
                .interops
                .interops
                .into_iter()
                .map(|interop| v7::course::Interop {
                    interop_impl: convert_interop_impl(interop.interop_impl),
                    input_args: interop.input_args,
                })
                .collect(),
        },
        guidance: train_app
            .guidance
            .map(|g| convert_guidance(g, generated_name)),
        finished_when: train_app.finished_when,
    }
}

/// Re-maps interop implementations that moved packages in version 7.0.
fn convert_interop_impl(interop_impl: String) -> String {
    if interop_impl == OLD_VBS_INTEROP {
        NEW_VBS_INTEROP.to_string()
    } else {
        interop_impl
    }
}

fn convert_lesson_material(material: v6::course::LessonMaterial) -> v7::course::LessonMaterial {
    v7::course::LessonMaterial {
        transition_name: material.transition_name,
        lesson_material_list: material.lesson_material_list.map(|list| {
            v7::course::LessonMaterialList {
                media: list.media.into_iter().map(convert_media).collect(),
            }
        }),
        lesson_material_files: material.lesson_material_files.map(|files| {
            v7::course::LessonMaterialFiles { files: files.files }
        }),
    }
}

fn convert_media(media: v6::course::Media) -> v7::course::Media {
    let properties = match media.properties {
        v6::course::MediaProperties::Pdf => v7::course::MediaProperties::Pdf,
        v6::course::MediaProperties::WebpageProperties => {
            v7::course::MediaProperties::WebpageProperties
        }
        v6::course::MediaProperties::ImageProperties => v7::course::MediaProperties::ImageProperties,
        v6::course::MediaProperties::YoutubeVideoProperties(youtube) => {
            v7::course::MediaProperties::YoutubeVideoProperties(v7::course::YoutubeVideoProperties {
                allow_full_screen: youtube.allow_full_screen,
                allow_auto_play: youtube.allow_auto_play,
            })
        }
    };

    v7::course::Media {
        name: media.name,
        uri: media.uri,
        properties,
    }
}

fn convert_branch_point(
    branch_point: v6::course::MerrillsBranchPoint,
) -> v7::course::MerrillsBranchPoint {
    let parent_name = branch_point.transition_name.clone();

    let mut content = Vec::with_capacity(branch_point.quadrants.content.len());
    for quadrant in branch_point.quadrants.content {
        let new_quadrant = match quadrant {
            v6::course::Quadrant::Rule => v7::course::Quadrant::Rule,
            v6::course::Quadrant::Example => v7::course::Quadrant::Example,
            v6::course::Quadrant::Recall(recall) => {
                v7::course::Quadrant::Recall(v7::course::Recall {
                    present_survey: v7::course::RecallSurvey {
                        concept_survey: convert_concept_survey(recall.present_survey.concept_survey),
                        full_screen: recall.present_survey.full_screen,
                    },
                    allowed_attempts: recall.allowed_attempts,
                })
            }
            v6::course::Quadrant::Practice(practice) => {
                v7::course::Quadrant::Practice(v7::course::Practice {
                    practice_concepts: v7::course::PracticeConcepts {
                        course_concepts: practice.practice_concepts.course_concepts,
                    },
                    allowed_attempts: practice.allowed_attempts,
                })
            }
            v6::course::Quadrant::Transitions(transitions) => {
                let mut nested = convert_transitions(transitions);

                // Cycle back through the nested transitions to verify the
                // guidance elements have names; if not, generate one from
                // the parent transition name.
                if let Some(parent) = &parent_name {
                    for transition in &mut nested.transitions {
                        if let v7::course::CourseTransition::Guidance(guidance) = transition {
                            if guidance.transition_name.is_none() {
                                guidance.transition_name =
                                    Some(format!("{} - Guidance", parent));
                            }
                        }
                    }
                }

                v7::course::Quadrant::Transitions(nested)
            }
        };
        content.push(new_quadrant);
    }

    v7::course::MerrillsBranchPoint {
        transition_name: branch_point.transition_name,
        concepts: v7::course::BranchConcepts {
            concepts: branch_point.concepts.concepts,
        },
        quadrants: v7::course::Quadrants { content },
    }
}

// ============================================================================
// Scenario node converters
// ============================================================================

fn convert_resources(resources: v6::scenario::Resources) -> v7::scenario::Resources {
    v7::scenario::Resources {
        survey_context: resources.survey_context,
        interops: resources.interops.map(|interops| v7::scenario::Interops {
            interops: interops
                .interops
                .into_iter()
                .map(|interop| v7::scenario::Interop {
                    interop_impl: convert_interop_impl(interop.interop_impl),
                })
                .collect(),
        }),
    }
}

fn convert_assessment(assessment: v6::scenario::Assessment) -> v7::scenario::Assessment {
    v7::scenario::Assessment {
        objects: assessment.objects.map(|objects| v7::scenario::Objects {
            waypoints: objects.waypoints.map(|waypoints| v7::scenario::Waypoints {
                waypoints: waypoints
                    .waypoints
                    .into_iter()
                    .map(|w| v7::scenario::Waypoint {
                        name: w.name,
                        coordinate: convert_coordinate(w.coordinate),
                    })
                    .collect(),
            }),
        }),
        tasks: v7::scenario::Tasks {
            tasks: assessment.tasks.tasks.into_iter().map(convert_task).collect(),
        },
    }
}

fn convert_coordinate(coordinate: v6::scenario::Coordinate) -> v7::scenario::Coordinate {
    v7::scenario::Coordinate {
        x: coordinate.x,
        y: coordinate.y,
        z: coordinate.z,
    }
}

fn convert_task(task: v6::scenario::Task) -> v7::scenario::Task {
    v7::scenario::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers.map(convert_triggers),
        end_triggers: task.end_triggers.map(convert_triggers),
        concepts: v7::scenario::Concepts {
            concepts: task
                .concepts
                .concepts
                .into_iter()
                .map(convert_scenario_concept)
                .collect(),
        },
    }
}

fn convert_triggers(triggers: v6::scenario::Triggers) -> v7::scenario::Triggers {
    v7::scenario::Triggers {
        triggers: triggers
            .triggers
            .into_iter()
            .map(|trigger| match trigger {
                v6::scenario::TriggerType::ConceptEnded { node_id } => {
                    v7::scenario::TriggerType::ConceptEnded { node_id }
                }
                v6::scenario::TriggerType::TaskEnded { node_id } => {
                    v7::scenario::TriggerType::TaskEnded { node_id }
                }
                v6::scenario::TriggerType::EntityLocation { waypoint } => {
                    v7::scenario::TriggerType::EntityLocation { waypoint }
                }
                v6::scenario::TriggerType::LearnerLocation { waypoint } => {
                    v7::scenario::TriggerType::LearnerLocation { waypoint }
                }
                v6::scenario::TriggerType::ScenarioStarted => {
                    v7::scenario::TriggerType::ScenarioStarted
                }
            })
            .collect(),
    }
}

fn convert_scenario_concept(concept: v6::scenario::Concept) -> v7::scenario::Concept {
    v7::scenario::Concept {
        name: concept.name,
        node_id: concept.node_id,
        conditions: v7::scenario::Conditions {
            conditions: concept
                .conditions
                .conditions
                .into_iter()
                .map(convert_condition)
                .collect(),
        },
    }
}

fn convert_condition(condition: v6::scenario::Condition) -> v7::scenario::Condition {
    v7::scenario::Condition {
        condition_impl: condition.condition_impl,
        default_assessment: condition.default_assessment,
        input: condition.input.map(|input| v7::scenario::ConditionInputWrapper {
            input: convert_condition_input(input.input),
        }),
    }
}

fn convert_condition_input(input: v6::scenario::ConditionInput) -> v7::scenario::ConditionInput {
    match input {
        v6::scenario::ConditionInput::ApplicationCompletedCondition(c) => {
            v7::scenario::ConditionInput::ApplicationCompletedCondition(
                v7::scenario::ApplicationCompletedCondition {
                    ideal_completion_duration: c.ideal_completion_duration,
                },
            )
        }
        v6::scenario::ConditionInput::AvoidLocationCondition(c) => {
            v7::scenario::ConditionInput::AvoidLocationCondition(
                v7::scenario::AvoidLocationCondition {
                    waypoint: c.waypoint,
                },
            )
        }
        v6::scenario::ConditionInput::CheckpointPaceCondition(c) => {
            v7::scenario::ConditionInput::CheckpointPaceCondition(
                v7::scenario::CheckpointPaceCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v6::scenario::ConditionInput::CheckpointProgressCondition(c) => {
            v7::scenario::ConditionInput::CheckpointProgressCondition(
                v7::scenario::CheckpointProgressCondition {
                    checkpoints: c.checkpoints.into_iter().map(convert_checkpoint).collect(),
                },
            )
        }
        v6::scenario::ConditionInput::EliminateHostilesCondition(c) => {
            v7::scenario::ConditionInput::EliminateHostilesCondition(
                v7::scenario::EliminateHostilesCondition {
                    entities: c.entities.map(|entities| v7::scenario::Entities {
                        start_locations: entities
                            .start_locations
                            .into_iter()
                            .map(|s| v7::scenario::StartLocation {
                                coordinate: convert_coordinate(s.coordinate),
                            })
                            .collect(),
                    }),
                },
            )
        }
        v6::scenario::ConditionInput::GenericConditionInput(c) => {
            v7::scenario::ConditionInput::GenericConditionInput(
                v7::scenario::GenericConditionInput {
                    nvpairs: c
                        .nvpairs
                        .into_iter()
                        .map(|p| v7::scenario::NvPair {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                },
            )
        }
        v6::scenario::ConditionInput::IdentifyPoisCondition(c) => {
            v7::scenario::ConditionInput::IdentifyPoisCondition(
                v7::scenario::IdentifyPoisCondition {
                    pois: v7::scenario::Pois {
                        waypoint_refs: c.pois.waypoint_refs,
                    },
                },
            )
        }
        v6::scenario::ConditionInput::TimerCondition(c) => {
            v7::scenario::ConditionInput::TimerCondition(v7::scenario::TimerCondition {
                repeatable: c.repeatable,
                interval: c.interval,
            })
        }
        v6::scenario::ConditionInput::SimileConditionInput(c) => {
            v7::scenario::ConditionInput::SimileConditionInput(
                v7::scenario::SimileConditionInput {
                    configuration_file: c.configuration_file,
                    condition_key: c.condition_key,
                },
            )
        }
    }
}

fn convert_checkpoint(checkpoint: v6::scenario::Checkpoint) -> v7::scenario::Checkpoint {
    v7::scenario::Checkpoint {
        waypoint: checkpoint.waypoint,
        at_time: checkpoint.at_time,
    }
}

fn convert_actions(actions: v6::scenario::Actions) -> v7::scenario::Actions {
    v7::scenario::Actions {
        state_transitions: actions.state_transitions.map(|transitions| {
            v7::scenario::StateTransitions {
                state_transitions: transitions
                    .state_transitions
                    .into_iter()
                    .map(convert_state_transition)
                    .collect(),
            }
        }),
        instructional_strategies: actions.instructional_strategies.map(|strategies| {
            v7::scenario::InstructionalStrategies {
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
    transition: v6::scenario::StateTransition,
) -> v7::scenario::StateTransition {
    v7::scenario::StateTransition {
        name: transition.name,
        logical_expression: v7::scenario::LogicalExpression {
            expressions: transition
                .logical_expression
                .expressions
                .into_iter()
                .map(|expression| match expression {
                    v6::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    } => v7::scenario::StateExpression::PerformanceNode {
                        node_id,
                        current,
                        previous,
                    },
                    v6::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    } => v7::scenario::StateExpression::LearnerStateAttribute {
                        attribute,
                        current,
                        previous,
                    },
                })
                .collect(),
        },
        strategy_choices: v7::scenario::StrategyChoices {
            strategy_refs: transition
                .strategy_choices
                .strategy_refs
                .into_iter()
                .map(|r| v7::scenario::StrategyRef { name: r.name })
                .collect(),
        },
    }
}

fn convert_strategy(strategy: v6::scenario::Strategy) -> v7::scenario::Strategy {
    let activity = match strategy.activity {
        v6::scenario::StrategyActivity::InstructionalIntervention(intervention) => {
            v7::scenario::StrategyActivity::InstructionalIntervention(
                v7::scenario::InstructionalIntervention {
                    strategy_handler: convert_strategy_handler(intervention.strategy_handler),
                    feedback: convert_feedback(intervention.feedback),
                },
            )
        }
        v6::scenario::StrategyActivity::PerformanceAssessment(assessment) => {
            v7::scenario::StrategyActivity::PerformanceAssessment(
                v7::scenario::PerformanceAssessment {
                    strategy_handler: convert_strategy_handler(assessment.strategy_handler),
                    node_id: assessment.node_id,
                },
            )
        }
        v6::scenario::StrategyActivity::ScenarioAdaptation(adaptation) => {
            v7::scenario::StrategyActivity::ScenarioAdaptation(v7::scenario::ScenarioAdaptation {
                strategy_handler: convert_strategy_handler(adaptation.strategy_handler),
                description: adaptation.description,
            })
        }
    };

    v7::scenario::Strategy {
        name: strategy.name,
        activity,
    }
}

fn convert_strategy_handler(
    handler: v6::scenario::StrategyHandler,
) -> v7::scenario::StrategyHandler {
    v7::scenario::StrategyHandler {
        impl_class: handler.impl_class,
    }
}

fn convert_feedback(feedback: v6::scenario::Feedback) -> v7::scenario::Feedback {
    let presentation = match feedback.presentation {
        v6::scenario::FeedbackPresentation::Message(message) => {
            v7::scenario::FeedbackPresentation::Message(message)
        }
        v6::scenario::FeedbackPresentation::File(file) => {
            v7::scenario::FeedbackPresentation::File(v7::scenario::FeedbackFile { html: file.html })
        }
        v6::scenario::FeedbackPresentation::Audio(audio) => {
            v7::scenario::FeedbackPresentation::Audio(v7::scenario::FeedbackAudio {
                mp3_file: audio.mp3_file,
                ogg_file: audio.ogg_file,
            })
        }
    };

    v7::scenario::Feedback { presentation }
}

// ============================================================================
// Learner configuration node converters
// ============================================================================

fn convert_learner_input(input: v6::learner::Input) -> v7::learner::Input {
    v7::learner::Input {
        producers: input.producers.map(|producers| v7::learner::Producers {
            producers: producers
                .producers
                .into_iter()
                .map(|producer| match producer {
                    v6::learner::Producer::Sensor(sensor) => {
                        v7::learner::Producer::Sensor(v7::learner::Sensor {
                            sensor_type: sensor.sensor_type,
                        })
                    }
                    v6::learner::Producer::TrainingAppState(state) => {
                        v7::learner::Producer::TrainingAppState(v7::learner::TrainingAppState {
                            state_type: state.state_type,
                        })
                    }
                })
                .collect(),
        }),
        classifier: v7::learner::Classifier {
            classifier_impl: input.classifier.classifier_impl,
            properties: input.classifier.properties.map(|properties| {
                v7::learner::Properties {
                    properties: properties
                        .properties
                        .into_iter()
                        .map(|p| v7::learner::Property {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                }
            }),
        },
        predictor: v7::learner::Predictor {
            predictor_impl: input.predictor.predictor_impl,
        },
        translator: v7::learner::Translator {
            translator_impl: input.translator.translator_impl,
        },
    }
}

// ============================================================================
// Metadata node converters
// ============================================================================

fn convert_metadata_concept(
    concept: v6::metadata::Concept,
    issues: &mut IssueLog,
) -> v7::metadata::Concept {
    v7::metadata::Concept {
        name: concept.name,
        attributes: v7::metadata::Attributes {
            attributes: concept
                .attributes
                .attributes
                .into_iter()
                .map(|attribute| {
                    // The quadrant-specific marker no longer exists in this
                    // version; the attribute itself is carried forward.
                    if attribute.quadrant_specific == Some(true) {
                        issues.record("Quadrant Specific Element");
                    }
                    v7::metadata::Attribute {
                        value: attribute.value,
                    }
                })
                .collect(),
        },
    }
}

// ============================================================================
// Conversation node converters
// ============================================================================

fn convert_conversation_node(
    node: v6::conversation::ConversationNode,
) -> v7::conversation::ConversationNode {
    match node {
        v6::conversation::ConversationNode::Message(message) => {
            v7::conversation::ConversationNode::Message(v7::conversation::MessageNode {
                node_id: message.node_id,
                text: message.text,
                child_id: message.child_id,
            })
        }
        v6::conversation::ConversationNode::Question(question) => {
            v7::conversation::ConversationNode::Question(v7::conversation::QuestionNode {
                node_id: question.node_id,
                text: question.text,
                choices: v7::conversation::Choices {
                    choices: question
                        .choices
                        .choices
                        .into_iter()
                        .map(|choice| v7::conversation::Choice {
                            text: choice.text,
                            child_id: choice.child_id,
                            assessment: choice.assessment,
                        })
                        .collect(),
                },
            })
        }
        v6::conversation::ConversationNode::End(end) => {
            v7::conversation::ConversationNode::End(v7::conversation::EndNode {
                node_id: end.node_id,
            })
        }
    }
}

// ============================================================================
// Sensor configuration node converters
// ============================================================================

fn convert_sensor(sensor: v6::sensor::Sensor) -> v7::sensor::Sensor {
    v7::sensor::Sensor {
        name: sensor.name,
        sensor_impl: sensor.sensor_impl,
        interval: sensor.interval,
        filter_instance: sensor.filter_instance,
        writer_instance: sensor.writer_instance,
        distribute_externally: sensor.distribute_externally,
    }
}

fn convert_filters(filters: v6::sensor::Filters) -> v7::sensor::Filters {
    v7::sensor::Filters {
        filters: filters
            .filters
            .into_iter()
            .map(|f| v7::sensor::Filter {
                name: f.name,
                filter_impl: f.filter_impl,
                writer_instance: f.writer_instance,
            })
            .collect(),
    }
}

fn convert_writers(writers: v6::sensor::Writers) -> v7::sensor::Writers {
    v7::sensor::Writers {
        writers: writers
            .writers
            .into_iter()
            .map(|w| v7::sensor::Writer {
                name: w.name,
                writer_impl: w.writer_impl,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interop_impl_rename() {
        assert_eq!(
            convert_interop_impl(OLD_VBS_INTEROP.to_string()),
            NEW_VBS_INTEROP
        );
        assert_eq!(
            convert_interop_impl("gateway.interop.ppt.PPTInterface".to_string()),
            "gateway.interop.ppt.PPTInterface"
        );
    }

    #[test]
    fn test_nested_guidance_gets_generated_name() {
        let branch_point = v6::course::MerrillsBranchPoint {
            transition_name: Some("Intro".to_string()),
            concepts: v6::course::BranchConcepts {
                concepts: vec!["map reading".to_string()],
            },
            quadrants: v6::course::Quadrants {
                content: vec![v6::course::Quadrant::Transitions(v6::course::Transitions {
                    transitions: vec![v6::course::CourseTransition::Guidance(
                        v6::course::Guidance {
                            transition_name: None,
                            display_time: None,
                            full_screen: None,
                            choice: v6::course::GuidanceChoice::Message(
                                v6::course::GuidanceMessage {
                                    content: "hold position".to_string(),
                                },
                            ),
                        },
                    )],
                })],
            },
        };

        let converted = convert_branch_point(branch_point);
        let v7::course::Quadrant::Transitions(nested) = &converted.quadrants.content[0] else {
            panic!("expected nested transitions quadrant");
        };
        let v7::course::CourseTransition::Guidance(guidance) = &nested.transitions[0] else {
            panic!("expected guidance transition");
        };
        assert_eq!(guidance.transition_name.as_deref(), Some("Intro - Guidance"));
    }

    #[test]
    fn test_named_guidance_is_left_alone() {
        let guidance = v6::course::Guidance {
            transition_name: Some("Briefing".to_string()),
            display_time: Some(5.0),
            full_screen: None,
            choice: v6::course::GuidanceChoice::Url(v6::course::GuidanceUrl {
                address: "https://example.test/brief".to_string(),
                message: None,
            }),
        };

        let converted = convert_guidance(guidance, Some("Parent - Guidance".to_string()));
        assert_eq!(converted.transition_name.as_deref(), Some("Briefing"));
        assert_eq!(converted.display_time, Some(5.0));
    }

    #[test]
    fn test_quadrant_specific_attribute_is_dropped_and_reported() {
        let mut issues = IssueLog::new();
        let concept = v6::metadata::Concept {
            name: "terrain association".to_string(),
            attributes: v6::metadata::Attributes {
                attributes: vec![
                    v6::metadata::Attribute {
                        value: "visual".to_string(),
                        quadrant_specific: Some(true),
                    },
                    v6::metadata::Attribute {
                        value: "textual".to_string(),
                        quadrant_specific: None,
                    },
                ],
            },
        };

        let converted = convert_metadata_concept(concept, &mut issues);

        assert_eq!(converted.attributes.attributes.len(), 2);
        assert_eq!(issues.count_of("Quadrant Specific Element"), 1);
    }

    #[test]
    fn test_training_app_guidance_named_after_transition() {
        let train_app = v6::course::TrainingApplication {
            transition_name: Some("PPT slideshow".to_string()),
            dkf_ref: None,
            interops: v6::course::Interops::default(),
            guidance: Some(v6::course::Guidance {
                transition_name: None,
                display_time: None,
                full_screen: None,
                choice: v6::course::GuidanceChoice::Message(v6::course::GuidanceMessage {
                    content: "watch the slides".to_string(),
                }),
            }),
            finished_when: None,
        };

        let converted = convert_training_application(train_app);
        assert_eq!(
            converted.guidance.unwrap().transition_name.as_deref(),
            Some("PPT slideshow - Guidance")
        );
    }
}
