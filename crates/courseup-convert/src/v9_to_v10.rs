//! Boundary converter for schema versions 9.0 → 10.0 (current).
//!
//! The last hop of the chain; its output is stamped with the converted
//! file version (`"10.0.1"`). Changes across this boundary:
//! - The SIMILE condition input has no 10.0 analog and no reasonable
//!   default; encountering one fails the conversion.
//! - Learner-state attribute literals go through an explicit lookup
//!   (`"MotivationLevel"` became `"Motivation"`).
//! - Lesson-material file references no longer exist; each dropped
//!   reference is reported on the issue log.
//! - Conversation choice assessments moved to expectation literals.
//! - Sensors with a retired implementation are dropped and reported.
//! - Learner configuration inputs are named in 10.0; missing names are
//!   generated from the classifier implementation.

use courseup_core::{
    ConvertError, DocumentKind, IssueLog, ParseDocument, Result, SchemaVersion, SourceFile,
};
use courseup_schema::{latest, v9};

use crate::chain::BoundaryConverter;
use crate::descriptors;

/// Sensor implementations retired in 10.0.
const RETIRED_SENSOR_IMPLS: &[&str] = &["sensor.impl.SelfAssessmentSensor"];

/// Converts version 9.0 documents to the current version.
#[derive(Debug, Default, Clone, Copy)]
pub struct V9ToV10Converter;

impl V9ToV10Converter {
    pub const FROM: SchemaVersion = SchemaVersion::V9;
    pub const TO: SchemaVersion = SchemaVersion::V10;

    fn log_hop(&self, kind: DocumentKind) {
        tracing::info!(
            "Converting {} from version {} to version {}",
            kind,
            Self::FROM,
            Self::TO
        );
    }

    /// The version attribute stamped on fully-converted output.
    fn converted_version() -> String {
        SchemaVersion::converted_attribute()
    }

    // ========================================================================
    // Course
    // ========================================================================

    pub fn convert_course(
        &self,
        course: v9::course::Course,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        self.log_hop(DocumentKind::Course);

        Ok(latest::course::Course {
            version: Self::converted_version(),
            name: course.name,
            description: course.description,
            survey_context: course.survey_context,
            exclude: course.exclude,
            concepts: course.concepts.map(convert_concepts),
            transitions: convert_transitions(course.transitions, issues),
        })
    }

    pub fn convert_course_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::Course> {
        let course: v9::course::Course = parser.parse(file, &descriptors::v9::COURSE, fail_fast)?;
        self.convert_course(course, issues)
    }

    // ========================================================================
    // Scenario
    // ========================================================================

    pub fn convert_scenario(
        &self,
        scenario: v9::scenario::Scenario,
        _issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        self.log_hop(DocumentKind::Scenario);

        Ok(latest::scenario::Scenario {
            version: Self::converted_version(),
            name: scenario.name,
            description: scenario.description,
            resources: convert_resources(scenario.resources),
            assessment: convert_assessment(scenario.assessment)?,
            actions: convert_actions(scenario.actions)?,
        })
    }

    pub fn convert_scenario_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::scenario::Scenario> {
        let scenario: v9::scenario::Scenario =
            parser.parse(file, &descriptors::v9::SCENARIO, fail_fast)?;
        self.convert_scenario(scenario, issues)
    }

    // ========================================================================
    // Learner configuration
    // ========================================================================

    pub fn convert_learner_configuration(
        &self,
        config: v9::learner::LearnerConfiguration,
        _issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        self.log_hop(DocumentKind::LearnerConfiguration);

        Ok(latest::learner::LearnerConfiguration {
            version: Self::converted_version(),
            inputs: latest::learner::Inputs {
                inputs: config
                    .inputs
                    .inputs
                    .into_iter()
                    .map(convert_learner_input)
                    .collect(),
            },
        })
    }

    pub fn convert_learner_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::learner::LearnerConfiguration> {
        let config: v9::learner::LearnerConfiguration =
            parser.parse(file, &descriptors::v9::LEARNER, fail_fast)?;
        self.convert_learner_configuration(config, issues)
    }

    // ========================================================================
    // Pedagogy configuration
    // ========================================================================

    pub fn convert_pedagogy_configuration(
        &self,
        config: v9::pedagogy::PedagogyConfiguration,
        _issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        self.log_hop(DocumentKind::PedagogyConfiguration);

        Ok(latest::pedagogy::PedagogyConfiguration {
            version: Self::converted_version(),
            attributes: latest::pedagogy::Attributes {
                attributes: config
                    .attributes
                    .attributes
                    .into_iter()
                    .map(|a| latest::pedagogy::Attribute {
                        learner_state: a.learner_state,
                        phase: a.phase,
                        metadata_attributes: latest::pedagogy::MetadataAttributes {
                            attributes: a
                                .metadata_attributes
                                .attributes
                                .into_iter()
                                .map(|m| latest::pedagogy::MetadataAttribute { value: m.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        })
    }

    pub fn convert_pedagogy_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::pedagogy::PedagogyConfiguration> {
        let config: v9::pedagogy::PedagogyConfiguration =
            parser.parse(file, &descriptors::v9::PEDAGOGY, fail_fast)?;
        self.convert_pedagogy_configuration(config, issues)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn convert_metadata(
        &self,
        metadata: v9::metadata::Metadata,
        _issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        self.log_hop(DocumentKind::Metadata);

        let reference = match metadata.content.reference {
            v9::metadata::ContentRef::Simple(simple) => {
                latest::metadata::ContentRef::Simple(latest::metadata::SimpleRef {
                    value: simple.value,
                })
            }
            v9::metadata::ContentRef::TrainingApp(training_app) => {
                latest::metadata::ContentRef::TrainingApp(latest::metadata::TrainingAppRef {
                    value: training_app.value,
                })
            }
        };

        Ok(latest::metadata::Metadata {
            version: Self::converted_version(),
            display_name: metadata.display_name,
            content: latest::metadata::Content { reference },
            present_at: latest::metadata::PresentAt {
                merrill_quadrant: metadata.present_at.merrill_quadrant,
                remediation_only: metadata.present_at.remediation_only,
            },
            concepts: latest::metadata::Concepts {
                concepts: metadata
                    .concepts
                    .concepts
                    .into_iter()
                    .map(|c| latest::metadata::Concept {
                        name: c.name,
                        attributes: latest::metadata::Attributes {
                            attributes: c
                                .attributes
                                .attributes
                                .into_iter()
                                .map(|a| latest::metadata::Attribute { value: a.value })
                                .collect(),
                        },
                    })
                    .collect(),
            },
        })
    }

    pub fn convert_metadata_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::metadata::Metadata> {
        let metadata: v9::metadata::Metadata =
            parser.parse(file, &descriptors::v9::METADATA, fail_fast)?;
        self.convert_metadata(metadata, issues)
    }

    // ========================================================================
    // Training application reference
    // ========================================================================

    pub fn convert_training_app_ref(
        &self,
        wrapper: v9::course::TrainingApplicationWrapper,
        _issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        self.log_hop(DocumentKind::TrainingApplicationReference);

        Ok(latest::course::TrainingApplicationWrapper {
            version: Self::converted_version(),
            training_application: convert_training_application(wrapper.training_application),
        })
    }

    pub fn convert_training_app_ref_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::course::TrainingApplicationWrapper> {
        let wrapper: v9::course::TrainingApplicationWrapper =
            parser.parse(file, &descriptors::v9::TRAINING_APP, fail_fast)?;
        self.convert_training_app_ref(wrapper, issues)
    }

    // ========================================================================
    // Conversation
    // ========================================================================

    pub fn convert_conversation(
        &self,
        conversation: v9::conversation::Conversation,
        _issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        self.log_hop(DocumentKind::Conversation);

        let mut nodes = Vec::with_capacity(conversation.nodes.nodes.len());
        for node in conversation.nodes.nodes {
            nodes.push(convert_conversation_node(node)?);
        }

        Ok(latest::conversation::Conversation {
            version: Self::converted_version(),
            name: conversation.name,
            author: conversation.author,
            start_node_id: conversation.start_node_id,
            nodes: latest::conversation::Nodes { nodes },
        })
    }

    pub fn convert_conversation_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::conversation::Conversation> {
        let conversation: v9::conversation::Conversation =
            parser.parse(file, &descriptors::v9::CONVERSATION, fail_fast)?;
        self.convert_conversation(conversation, issues)
    }

    // ========================================================================
    // Sensor configuration
    // ========================================================================

    pub fn convert_sensor_configuration(
        &self,
        config: v9::sensor::SensorsConfiguration,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        self.log_hop(DocumentKind::SensorConfiguration);

        let mut sensors = Vec::with_capacity(config.sensors.sensors.len());
        for sensor in config.sensors.sensors {
            if RETIRED_SENSOR_IMPLS.contains(&sensor.sensor_impl.as_str()) {
                issues.record(format!("Legacy sensor '{}'", sensor.name));
                continue;
            }
            sensors.push(latest::sensor::Sensor {
                name: sensor.name,
                sensor_impl: sensor.sensor_impl,
                interval: sensor.interval,
                filter_instance: sensor.filter_instance,
                writer_instance: sensor.writer_instance,
                distribute_externally: sensor.distribute_externally,
            });
        }

        Ok(latest::sensor::SensorsConfiguration {
            version: Self::converted_version(),
            sensors: latest::sensor::Sensors { sensors },
            filters: config.filters.map(|filters| latest::sensor::Filters {
                filters: filters
                    .filters
                    .into_iter()
                    .map(|f| latest::sensor::Filter {
                        name: f.name,
                        filter_impl: f.filter_impl,
                        writer_instance: f.writer_instance,
                    })
                    .collect(),
            }),
            writers: config.writers.map(|writers| latest::sensor::Writers {
                writers: writers
                    .writers
                    .into_iter()
                    .map(|w| latest::sensor::Writer {
                        name: w.name,
                        writer_impl: w.writer_impl,
                    })
                    .collect(),
            }),
        })
    }

    pub fn convert_sensor_configuration_file<P: ParseDocument>(
        &self,
        parser: &P,
        file: &SourceFile,
        fail_fast: bool,
        issues: &mut IssueLog,
    ) -> Result<latest::sensor::SensorsConfiguration> {
        let config: v9::sensor::SensorsConfiguration =
            parser.parse(file, &descriptors::v9::SENSOR, fail_fast)?;
        self.convert_sensor_configuration(config, issues)
    }
}

impl BoundaryConverter for V9ToV10Converter {
    fn from_version(&self) -> SchemaVersion {
        Self::FROM
    }

    fn to_version(&self) -> SchemaVersion {
        Self::TO
    }

    fn description(&self) -> &'static str {
        "Retire the SIMILE condition input, lesson-material file references, and legacy sensors; name learner inputs"
    }
}

// ============================================================================
// Course node converters
// ============================================================================

fn convert_concepts(concepts: v9::course::Concepts) -> latest::course::Concepts {
    let choice = match concepts.choice {
        v9::course::ConceptsChoice::List(list) => {
            latest::course::ConceptsChoice::List(latest::course::ConceptList {
                concepts: list
                    .concepts
                    .into_iter()
                    .map(|c| latest::course::Concept { name: c.name })
                    .collect(),
            })
        }
        v9::course::ConceptsChoice::Hierarchy(hierarchy) => {
            latest::course::ConceptsChoice::Hierarchy(latest::course::ConceptHierarchy {
                concept_node: convert_concept_node(hierarchy.concept_node),
            })
        }
    };
    latest::course::Concepts { choice }
}

fn convert_concept_node(node: v9::course::ConceptNode) -> latest::course::ConceptNode {
    latest::course::ConceptNode {
        name: node.name,
        children: node.children.into_iter().map(convert_concept_node).collect(),
    }
}

fn convert_transitions(
    transitions: v9::course::Transitions,
    issues: &mut IssueLog,
) -> latest::course::Transitions {
    let mut converted = Vec::with_capacity(transitions.transitions.len());

    for transition in transitions.transitions {
        let new_transition = match transition {
            v9::course::CourseTransition::Guidance(guidance) => {
                latest::course::CourseTransition::Guidance(convert_guidance(guidance))
            }
            v9::course::CourseTransition::PresentSurvey(survey) => {
                latest::course::CourseTransition::PresentSurvey(convert_present_survey(survey))
            }
            v9::course::CourseTransition::Aar(aar) => {
                latest::course::CourseTransition::Aar(latest::course::Aar {
                    transition_name: aar.transition_name,
                    full_screen: aar.full_screen,
                })
            }
            v9::course::CourseTransition::TrainingApplication(train_app) => {
                latest::course::CourseTransition::TrainingApplication(
                    convert_training_application(train_app),
                )
            }
            v9::course::CourseTransition::LessonMaterial(material) => {
                latest::course::CourseTransition::LessonMaterial(convert_lesson_material(
                    material, issues,
                ))
            }
            v9::course::CourseTransition::AdaptiveCourseflow(courseflow) => {
                latest::course::CourseTransition::AdaptiveCourseflow(convert_courseflow(
                    courseflow, issues,
                ))
            }
        };
        converted.push(new_transition);
    }

    latest::course::Transitions {
        transitions: converted,
    }
}

fn convert_guidance(guidance: v9::course::Guidance) -> latest::course::Guidance {
    let choice = match guidance.choice {
        v9::course::GuidanceChoice::Message(message) => {
            latest::course::GuidanceChoice::Message(latest::course::GuidanceMessage {
                content: message.content,
            })
        }
        v9::course::GuidanceChoice::File(file) => {
            latest::course::GuidanceChoice::File(latest::course::GuidanceFile {
                html: file.html,
                message: file.message,
            })
        }
        v9::course::GuidanceChoice::Url(url) => {
            latest::course::GuidanceChoice::Url(latest::course::GuidanceUrl {
                address: url.address,
                message: url.message,
            })
        }
    };

    latest::course::Guidance {
        transition_name: guidance.transition_name,
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice,
    }
}

fn convert_present_survey(survey: v9::course::PresentSurvey) -> latest::course::PresentSurvey {
    let choice = match survey.choice {
        v9::course::SurveyChoice::GiftSurveyProperties(properties) => {
            latest::course::SurveyChoice::GiftSurveyProperties(
                latest::course::GiftSurveyProperties {
                    gift_survey_key: properties.gift_survey_key,
                },
            )
        }
        v9::course::SurveyChoice::AutoTutorSession(session) => {
            latest::course::SurveyChoice::AutoTutorSession(latest::course::AutoTutorSession {
                dkf_ref: latest::course::DkfRef {
                    file: session.dkf_ref.file,
                },
            })
        }
        v9::course::SurveyChoice::ConceptSurvey(concept_survey) => {
            latest::course::SurveyChoice::ConceptSurvey(convert_concept_survey(concept_survey))
        }
    };

    latest::course::PresentSurvey {
        transition_name: survey.transition_name,
        full_screen: survey.full_screen,
        show_in_aar: survey.show_in_aar,
        choice,
    }
}

fn convert_concept_survey(survey: v9::course::ConceptSurvey) -> latest::course::ConceptSurvey {
    latest::course::ConceptSurvey {
        gift_survey_key: survey.gift_survey_key,
        concept_questions: survey
            .concept_questions
            .into_iter()
            .map(|q| latest::course::ConceptQuestion {
                name: q.name,
                question_count: q.question_count,
            })
            .collect(),
    }
}

fn convert_training_application(
    train_app: v9::course::TrainingApplication,
) -> latest::course::TrainingApplication {
    latest::course::TrainingApplication {
        transition_name: train_app.transition_name,
        dkf_ref: train_app
            .dkf_ref
            .map(|r| latest::course::DkfRef { file: r.file }),
        interops: latest::course::Interops {
            interops: train_app
                .interops
                .interops
                .into_iter()
                .map(|interop| latest::course::Interop {
                    interop_impl: interop.interop_impl,
                    input_args: interop.input_args,
                })
                .collect(),
        },
        guidance: train_app.guidance.map(convert_guidance),
        finished_when: train_app.finished_when,
    }
}

/// Lesson-material file references no longer exist in 10.0; each dropped
/// reference is reported on the issue log.
fn convert_lesson_material(
    material: v9::course::LessonMaterial,
    issues: &mut IssueLog,
) -> latest::course::LessonMaterial {
    if let Some(files) = &material.lesson_material_files {
        for file in &files.files {
            issues.record(format!("Lesson material file reference '{}'", file));
        }
    }

    latest::course::LessonMaterial {
        transition_name: material.transition_name,
        lesson_material_list: material.lesson_material_list.map(|list| {
            latest::course::LessonMaterialList {
                media: list.media.into_iter().map(convert_media).collect(),
            }
        }),
    }
}

fn convert_media(media: v9::course::Media) -> latest::course::Media {
    let properties = match media.properties {
        v9::course::MediaProperties::Pdf => latest::course::MediaProperties::Pdf,
        v9::course::MediaProperties::WebpageProperties => {
            latest::course::MediaProperties::WebpageProperties
        }
        v9::course::MediaProperties::ImageProperties => {
            latest::course::MediaProperties::ImageProperties
        }
        v9::course::MediaProperties::YoutubeVideoProperties(youtube) => {
            latest::course::MediaProperties::YoutubeVideoProperties(
                latest::course::YoutubeVideoProperties {
                    allow_full_screen: youtube.allow_full_screen,
                    allow_auto_play: youtube.allow_auto_play,
                },
            )
        }
    };

    latest::course::Media {
        name: media.name,
        uri: media.uri,
        properties,
    }
}

fn convert_courseflow(
    courseflow: v9::course::AdaptiveCourseflow,
    issues: &mut IssueLog,
) -> latest::course::AdaptiveCourseflow {
    let mut content = Vec::with_capacity(courseflow.quadrants.content.len());
    for quadrant in courseflow.quadrants.content {
        let new_quadrant = match quadrant {
            v9::course::Quadrant::Rule => latest::course::Quadrant::Rule,
            v9::course::Quadrant::Example => latest::course::Quadrant::Example,
            v9::course::Quadrant::Recall(recall) => {
                latest::course::Quadrant::Recall(latest::course::Recall {
                    present_survey: latest::course::RecallSurvey {
                        concept_survey: convert_concept_survey(recall.present_survey.concept_survey),
                        full_screen: recall.present_survey.full_screen,
                    },
                    allowed_attempts: recall.allowed_attempts,
                })
            }
            v9::course::Quadrant::Practice(practice) => {
                latest::course::Quadrant::Practice(latest::course::Practice {
                    practice_concepts: latest::course::PracticeConcepts {
                        course_concepts: practice.practice_concepts.course_concepts,
                    },
                    allowed_attempts: practice.allowed_attempts,
                })
            }
            v9::course::Quadrant::Transitions(transitions) => {
                latest::course::Quadrant::Transitions(convert_transitions(transitions, issues))
            }
        };
        content.push(new_quadrant);
    }

    latest::course::AdaptiveCourseflow {
        transition_name: courseflow.transition_name,
        concepts: latest::course::BranchConcepts {
            concepts: courseflow.concepts.concepts,
        },
        quadrants: latest::course::Quadrants { content },
    }
}

// ============================================================================
// Scenario node converters
// ============================================================================

fn convert_resources(resources: v9::scenario::Resources) -> latest::scenario::Resources {
    latest::scenario::Resources {
        survey_context: resources.survey_context,
        interops: resources
            .interops
            .map(|interops| latest::scenario::Interops {
                interops: interops
                    .interops
                    .into_iter()
                    .map(|interop| latest::scenario::Interop {
                        interop_impl: interop.interop_impl,
                    })
                    .collect(),
            }),
    }
}

fn convert_assessment(
    assessment: v9::scenario::Assessment,
) -> Result<latest::scenario::Assessment> {
    let mut tasks = Vec::with_capacity(assessment.tasks.tasks.len());
    for task in assessment.tasks.tasks {
        tasks.push(convert_task(task)?);
    }

    Ok(latest::scenario::Assessment {
        objects: assessment.objects.map(convert_objects),
        tasks: latest::scenario::Tasks { tasks },
    })
}

fn convert_objects(objects: v9::scenario::Objects) -> latest::scenario::Objects {
    latest::scenario::Objects {
        places_of_interest: objects.places_of_interest.map(|places| {
            latest::scenario::PlacesOfInterest {
                places: places
                    .places
                    .into_iter()
                    .map(|place| match place {
                        v9::scenario::PlaceOfInterest::Point { name, coordinate } => {
                            latest::scenario::PlaceOfInterest::Point {
                                name,
                                coordinate: convert_coordinate(coordinate),
                            }
                        }
                        v9::scenario::PlaceOfInterest::Path { name, segments } => {
                            latest::scenario::PlaceOfInterest::Path {
                                name,
                                segments: segments
                                    .into_iter()
                                    .map(|s| latest::scenario::Segment {
                                        start: convert_coordinate(s.start),
                                        end: convert_coordinate(s.end),
                                    })
                                    .collect(),
                            }
                        }
                        v9::scenario::PlaceOfInterest::Area { name, coordinates } => {
                            latest::scenario::PlaceOfInterest::Area {
                                name,
                                coordinates: coordinates
                                    .into_iter()
                                    .map(convert_coordinate)
                                    .collect(),
                            }
                        }
                    })
                    .collect(),
            }
        }),
    }
}

fn convert_coordinate(coordinate: v9::scenario::Coordinate) -> latest::scenario::Coordinate {
    latest::scenario::Coordinate {
        x: coordinate.x,
        y: coordinate.y,
        z: coordinate.z,
    }
}

fn convert_task(task: v9::scenario::Task) -> Result<latest::scenario::Task> {
    let mut concepts = Vec::with_capacity(task.concepts.concepts.len());
    for concept in task.concepts.concepts {
        concepts.push(convert_scenario_concept(concept)?);
    }

    Ok(latest::scenario::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers.map(convert_triggers),
        end_triggers: task.end_triggers.map(convert_triggers),
        concepts: latest::scenario::Concepts { concepts },
    })
}

fn convert_triggers(triggers: v9::scenario::Triggers) -> latest::scenario::Triggers {
    latest::scenario::Triggers {
        triggers: triggers
            .triggers
            .into_iter()
            .map(|trigger| {
                let event = match trigger.event {
                    v9::scenario::TriggerType::ConceptEnded { node_id } => {
                        latest::scenario::TriggerType::ConceptEnded { node_id }
                    }
                    v9::scenario::TriggerType::TaskEnded { node_id } => {
                        latest::scenario::TriggerType::TaskEnded { node_id }
                    }
                    v9::scenario::TriggerType::EntityLocation { place_ref } => {
                        latest::scenario::TriggerType::EntityLocation { place_ref }
                    }
                    v9::scenario::TriggerType::LearnerLocation { place_ref } => {
                        latest::scenario::TriggerType::LearnerLocation { place_ref }
                    }
                    v9::scenario::TriggerType::ScenarioStarted => {
                        latest::scenario::TriggerType::ScenarioStarted
                    }
                };
                latest::scenario::Trigger {
                    event,
                    trigger_delay: trigger.trigger_delay,
                }
            })
            .collect(),
    }
}

fn convert_scenario_concept(concept: v9::scenario::Concept) -> Result<latest::scenario::Concept> {
    let mut conditions = Vec::with_capacity(concept.conditions.conditions.len());
    for condition in concept.conditions.conditions {
        conditions.push(convert_condition(condition)?);
    }

    Ok(latest::scenario::Concept {
        name: concept.name,
        node_id: concept.node_id,
        conditions: latest::scenario::Conditions { conditions },
    })
}

fn convert_condition(condition: v9::scenario::Condition) -> Result<latest::scenario::Condition> {
    let input = match condition.input {
        Some(wrapper) => Some(latest::scenario::ConditionInputWrapper {
            input: convert_condition_input(wrapper.input)?,
        }),
        None => None,
    };

    Ok(latest::scenario::Condition {
        condition_impl: condition.condition_impl,
        default_assessment: condition.default_assessment,
        input,
    })
}

fn convert_condition_input(
    input: v9::scenario::ConditionInput,
) -> Result<latest::scenario::ConditionInput> {
    let converted = match input {
        v9::scenario::ConditionInput::ApplicationCompletedCondition(c) => {
            latest::scenario::ConditionInput::ApplicationCompletedCondition(
                latest::scenario::ApplicationCompletedCondition {
                    ideal_completion_duration: c.ideal_completion_duration,
                },
            )
        }
        v9::scenario::ConditionInput::AvoidLocationCondition(c) => {
            latest::scenario::ConditionInput::AvoidLocationCondition(
                latest::scenario::AvoidLocationCondition {
                    place_ref: c.place_ref,
                },
            )
        }
        v9::scenario::ConditionInput::CheckpointPaceCondition(c) => {
            latest::scenario::ConditionInput::CheckpointPaceCondition(
                latest::scenario::CheckpointPaceCondition {
                    checkpoints: c
                        .checkpoints
                        .into_iter()
                        .map(convert_checkpoint)
                        .collect(),
                },
            )
        }
        v9::scenario::ConditionInput::CheckpointProgressCondition(c) => {
            latest::scenario::ConditionInput::CheckpointProgressCondition(
                latest::scenario::CheckpointProgressCondition {
                    checkpoints: c
                        .checkpoints
                        .into_iter()
                        .map(convert_checkpoint)
                        .collect(),
                },
            )
        }
        v9::scenario::ConditionInput::EliminateHostilesCondition(c) => {
            latest::scenario::ConditionInput::EliminateHostilesCondition(
                latest::scenario::EliminateHostilesCondition {
                    entities: c.entities.map(|entities| latest::scenario::Entities {
                        start_locations: entities
                            .start_locations
                            .into_iter()
                            .map(|s| latest::scenario::StartLocation {
                                coordinate: convert_coordinate(s.coordinate),
                            })
                            .collect(),
                    }),
                },
            )
        }
        v9::scenario::ConditionInput::GenericConditionInput(c) => {
            latest::scenario::ConditionInput::GenericConditionInput(
                latest::scenario::GenericConditionInput {
                    nvpairs: c
                        .nvpairs
                        .into_iter()
                        .map(|p| latest::scenario::NvPair {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                },
            )
        }
        v9::scenario::ConditionInput::IdentifyPoisCondition(c) => {
            latest::scenario::ConditionInput::IdentifyPoisCondition(
                latest::scenario::IdentifyPoisCondition {
                    pois: latest::scenario::Pois {
                        place_refs: c.pois.place_refs,
                    },
                },
            )
        }
        v9::scenario::ConditionInput::TimerCondition(c) => {
            latest::scenario::ConditionInput::TimerCondition(latest::scenario::TimerCondition {
                repeatable: c.repeatable,
                interval: c.interval,
            })
        }
        // No 10.0 analog and no reasonable default; defaulting would
        // silently discard the authored assessment logic.
        v9::scenario::ConditionInput::SimileConditionInput(_) => {
            return Err(ConvertError::unhandled(
                "condition input type 'SIMILEConditionInput'",
                DocumentKind::Scenario,
                V9ToV10Converter::FROM,
                V9ToV10Converter::TO,
            ));
        }
    };
    Ok(converted)
}

fn convert_checkpoint(checkpoint: v9::scenario::Checkpoint) -> latest::scenario::Checkpoint {
    latest::scenario::Checkpoint {
        place_ref: checkpoint.place_ref,
        at_time: checkpoint.at_time,
    }
}

fn convert_actions(actions: v9::scenario::Actions) -> Result<latest::scenario::Actions> {
    let state_transitions = match actions.state_transitions {
        Some(transitions) => {
            let mut converted = Vec::with_capacity(transitions.state_transitions.len());
            for transition in transitions.state_transitions {
                converted.push(convert_state_transition(transition)?);
            }
            Some(latest::scenario::StateTransitions {
                state_transitions: converted,
            })
        }
        None => None,
    };

    Ok(latest::scenario::Actions {
        state_transitions,
        instructional_strategies: actions.instructional_strategies.map(|strategies| {
            latest::scenario::InstructionalStrategies {
                strategies: strategies
                    .strategies
                    .into_iter()
                    .map(convert_strategy)
                    .collect(),
            }
        }),
    })
}

fn convert_state_transition(
    transition: v9::scenario::StateTransition,
) -> Result<latest::scenario::StateTransition> {
    let mut expressions = Vec::with_capacity(transition.logical_expression.expressions.len());
    for expression in transition.logical_expression.expressions {
        let converted = match expression {
            v9::scenario::StateExpression::PerformanceNode {
                node_id,
                current,
                previous,
            } => latest::scenario::StateExpression::PerformanceNode {
                node_id,
                current,
                previous,
            },
            v9::scenario::StateExpression::LearnerStateAttribute {
                attribute,
                current,
                previous,
            } => latest::scenario::StateExpression::LearnerStateAttribute {
                attribute: convert_learner_state_attribute(&attribute)?,
                current,
                previous,
            },
        };
        expressions.push(converted);
    }

    Ok(latest::scenario::StateTransition {
        name: transition.name,
        logical_expression: latest::scenario::LogicalExpression { expressions },
        strategy_choices: latest::scenario::StrategyChoices {
            strategy_refs: transition
                .strategy_choices
                .strategy_refs
                .into_iter()
                .map(|r| latest::scenario::StrategyRef { name: r.name })
                .collect(),
        },
    })
}

/// Re-maps learner-state attribute literals that changed in 10.0.
fn convert_learner_state_attribute(attribute: &str) -> Result<String> {
    let mapped = match attribute {
        "MotivationLevel" => "Motivation",
        "EngagementLevel" | "UnderstandingLevel" | "ArousalLevel" => attribute,
        other => {
            return Err(ConvertError::unhandled(
                format!("learner state attribute '{}'", other),
                DocumentKind::Scenario,
                V9ToV10Converter::FROM,
                V9ToV10Converter::TO,
            ));
        }
    };
    Ok(mapped.to_string())
}

fn convert_strategy(strategy: v9::scenario::Strategy) -> latest::scenario::Strategy {
    let activity = match strategy.activity {
        v9::scenario::StrategyActivity::InstructionalIntervention(intervention) => {
            latest::scenario::StrategyActivity::InstructionalIntervention(
                latest::scenario::InstructionalIntervention {
                    strategy_handler: convert_strategy_handler(intervention.strategy_handler),
                    feedback: convert_feedback(intervention.feedback),
                },
            )
        }
        v9::scenario::StrategyActivity::PerformanceAssessment(assessment) => {
            latest::scenario::StrategyActivity::PerformanceAssessment(
                latest::scenario::PerformanceAssessment {
                    strategy_handler: convert_strategy_handler(assessment.strategy_handler),
                    node_id: assessment.node_id,
                },
            )
        }
        v9::scenario::StrategyActivity::ScenarioAdaptation(adaptation) => {
            latest::scenario::StrategyActivity::ScenarioAdaptation(
                latest::scenario::ScenarioAdaptation {
                    strategy_handler: convert_strategy_handler(adaptation.strategy_handler),
                    description: adaptation.description,
                },
            )
        }
    };

    latest::scenario::Strategy {
        name: strategy.name,
        activity,
    }
}

fn convert_strategy_handler(
    handler: v9::scenario::StrategyHandler,
) -> latest::scenario::StrategyHandler {
    latest::scenario::StrategyHandler {
        impl_class: handler.impl_class,
    }
}

fn convert_feedback(feedback: v9::scenario::Feedback) -> latest::scenario::Feedback {
    let presentation = match feedback.presentation {
        v9::scenario::FeedbackPresentation::Message(message) => {
            latest::scenario::FeedbackPresentation::Message(latest::scenario::FeedbackMessage {
                content: message.content,
                display_in_tutor: message.display_in_tutor,
            })
        }
        v9::scenario::FeedbackPresentation::File(file) => {
            latest::scenario::FeedbackPresentation::File(latest::scenario::FeedbackFile {
                html: file.html,
            })
        }
        v9::scenario::FeedbackPresentation::Audio(audio) => {
            latest::scenario::FeedbackPresentation::Audio(latest::scenario::FeedbackAudio {
                mp3_file: audio.mp3_file,
                ogg_file: audio.ogg_file,
            })
        }
    };

    latest::scenario::Feedback { presentation }
}

// ============================================================================
// Learner configuration node converters
// ============================================================================

fn convert_learner_input(input: v9::learner::Input) -> latest::learner::Input {
    latest::learner::Input {
        // Inputs are named in 10.0; generate a deterministic name from the
        // classifier implementation, e.g. "FuzzyArtMapClassifier".
        name: generated_input_name(&input.classifier.classifier_impl),
        producers: input.producers.map(|producers| latest::learner::Producers {
            producers: producers
                .producers
                .into_iter()
                .map(|producer| match producer {
                    v9::learner::Producer::Sensor(sensor) => {
                        latest::learner::Producer::Sensor(latest::learner::Sensor {
                            sensor_type: sensor.sensor_type,
                        })
                    }
                    v9::learner::Producer::TrainingAppState(state) => {
                        latest::learner::Producer::TrainingAppState(
                            latest::learner::TrainingAppState {
                                state_type: state.state_type,
                            },
                        )
                    }
                })
                .collect(),
        }),
        classifier: latest::learner::Classifier {
            classifier_impl: input.classifier.classifier_impl,
            properties: input.classifier.properties.map(|properties| {
                latest::learner::Properties {
                    properties: properties
                        .properties
                        .into_iter()
                        .map(|p| latest::learner::Property {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                }
            }),
        },
        predictor: latest::learner::Predictor {
            predictor_impl: input.predictor.predictor_impl,
        },
        translator: latest::learner::Translator {
            translator_impl: input.translator.translator_impl,
        },
    }
}

/// The generated name is the trailing segment of the classifier
/// implementation class.
fn generated_input_name(classifier_impl: &str) -> String {
    classifier_impl
        .rsplit('.')
        .next()
        .unwrap_or(classifier_impl)
        .to_string()
}

// ============================================================================
// Conversation node converters
// ============================================================================

fn convert_conversation_node(
    node: v9::conversation::ConversationNode,
) -> Result<latest::conversation::ConversationNode> {
    let converted = match node {
        v9::conversation::ConversationNode::Message(message) => {
            latest::conversation::ConversationNode::Message(latest::conversation::MessageNode {
                node_id: message.node_id,
                text: message.text,
                child_id: message.child_id,
            })
        }
        v9::conversation::ConversationNode::Question(question) => {
            let mut choices = Vec::with_capacity(question.choices.choices.len());
            for choice in question.choices.choices {
                let assessment = match choice.assessment {
                    Some(assessment) => Some(convert_choice_assessment(&assessment)?),
                    None => None,
                };
                choices.push(latest::conversation::Choice {
                    text: choice.text,
                    child_id: choice.child_id,
                    assessment,
                });
            }
            latest::conversation::ConversationNode::Question(latest::conversation::QuestionNode {
                node_id: question.node_id,
                text: question.text,
                choices: latest::conversation::Choices { choices },
            })
        }
        v9::conversation::ConversationNode::End(end) => {
            latest::conversation::ConversationNode::End(latest::conversation::EndNode {
                node_id: end.node_id,
            })
        }
    };
    Ok(converted)
}

/// Re-maps choice assessment literals to the 10.0 expectation scale.
fn convert_choice_assessment(assessment: &str) -> Result<String> {
    let mapped = match assessment {
        "Correct" => "AtExpectation",
        "Wrong" => "BelowExpectation",
        "AtExpectation" | "AboveExpectation" | "BelowExpectation" => assessment,
        other => {
            return Err(ConvertError::unhandled(
                format!("choice assessment literal '{}'", other),
                DocumentKind::Conversation,
                V9ToV10Converter::FROM,
                V9ToV10Converter::TO,
            ));
        }
    };
    Ok(mapped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simile_condition_input_is_unhandled() {
        let input = v9::scenario::ConditionInput::SimileConditionInput(
            v9::scenario::SimileConditionInput {
                configuration_file: "assessment.ixs".to_string(),
                condition_key: "corridor".to_string(),
            },
        );

        let err = convert_condition_input(input).unwrap_err();
        assert!(err.is_unhandled_construct());
        assert!(err.to_string().contains("SIMILEConditionInput"));
    }

    #[test]
    fn test_learner_state_attribute_rename() {
        assert_eq!(
            convert_learner_state_attribute("MotivationLevel").unwrap(),
            "Motivation"
        );
        assert_eq!(
            convert_learner_state_attribute("EngagementLevel").unwrap(),
            "EngagementLevel"
        );
        assert!(convert_learner_state_attribute("GritLevel")
            .unwrap_err()
            .is_unhandled_construct());
    }

    #[test]
    fn test_lesson_material_files_dropped_with_issue() {
        let mut issues = IssueLog::new();
        let material = v9::course::LessonMaterial {
            transition_name: Some("Readings".to_string()),
            lesson_material_list: None,
            lesson_material_files: Some(v9::course::LessonMaterialFiles {
                files: vec!["a.html".to_string(), "b.html".to_string()],
            }),
        };

        let converted = convert_lesson_material(material, &mut issues);
        assert_eq!(issues.count_of("Lesson material file reference"), 2);
        assert!(converted.lesson_material_list.is_none());
    }

    #[test]
    fn test_retired_sensor_dropped_with_issue() {
        let mut issues = IssueLog::new();
        let config = v9::sensor::SensorsConfiguration {
            version: "9.0".to_string(),
            sensors: v9::sensor::Sensors {
                sensors: vec![
                    v9::sensor::Sensor {
                        name: "self check".to_string(),
                        sensor_impl: "sensor.impl.SelfAssessmentSensor".to_string(),
                        interval: None,
                        filter_instance: None,
                        writer_instance: None,
                        distribute_externally: None,
                    },
                    v9::sensor::Sensor {
                        name: "mouse".to_string(),
                        sensor_impl: "sensor.impl.MouseTempHumiditySensor".to_string(),
                        interval: Some(0.5),
                        filter_instance: None,
                        writer_instance: None,
                        distribute_externally: None,
                    },
                ],
            },
            filters: None,
            writers: None,
        };

        let converted = V9ToV10Converter
            .convert_sensor_configuration(config, &mut issues)
            .unwrap();
        assert_eq!(converted.sensors.sensors.len(), 1);
        assert_eq!(converted.sensors.sensors[0].name, "mouse");
        assert_eq!(issues.count_of("Legacy sensor 'self check'"), 1);
    }

    #[test]
    fn test_generated_input_name_uses_classifier_tail() {
        assert_eq!(
            generated_input_name("learner.classifier.FuzzyArtMapClassifier"),
            "FuzzyArtMapClassifier"
        );
        assert_eq!(generated_input_name("Bare"), "Bare");
    }

    #[test]
    fn test_choice_assessment_rename() {
        assert_eq!(convert_choice_assessment("Correct").unwrap(), "AtExpectation");
        assert_eq!(
            convert_choice_assessment("Wrong").unwrap(),
            "BelowExpectation"
        );
        assert!(convert_choice_assessment("Perfect")
            .unwrap_err()
            .is_unhandled_construct());
    }

    #[test]
    fn test_output_version_is_stamped() {
        let mut issues = IssueLog::new();
        let metadata = v9::metadata::Metadata {
            version: "9.0".to_string(),
            display_name: None,
            content: v9::metadata::Content {
                reference: v9::metadata::ContentRef::Simple(v9::metadata::SimpleRef {
                    value: "slides.pptx".to_string(),
                }),
            },
            present_at: v9::metadata::PresentAt::default(),
            concepts: v9::metadata::Concepts::default(),
        };

        let converted = V9ToV10Converter.convert_metadata(metadata, &mut issues).unwrap();
        assert_eq!(converted.version, "10.0.1");
    }
}
