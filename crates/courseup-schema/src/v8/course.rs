//! Course document types, schema version 8.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 8.0 course file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "@version")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_context: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Concepts>,
    pub transitions: Transitions,
}

/// Course concepts are either a flat list or a hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concepts {
    #[serde(rename = "$value")]
    pub choice: ConceptsChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConceptsChoice {
    #[serde(rename = "list")]
    List(ConceptList),
    #[serde(rename = "hierarchy")]
    Hierarchy(ConceptHierarchy),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptList {
    #[serde(rename = "concept", default)]
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptHierarchy {
    pub concept_node: ConceptNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "conceptNode", default)]
    pub children: Vec<ConceptNode>,
}

/// Ordered list of course objects, presented to the learner in sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    #[serde(rename = "$value", default)]
    pub transitions: Vec<CourseTransition>,
}

/// The closed set of course object types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CourseTransition {
    Guidance(Guidance),
    PresentSurvey(PresentSurvey),
    #[serde(rename = "AAR")]
    Aar(Aar),
    TrainingApplication(TrainingApplication),
    LessonMaterial(LessonMaterial),
    MerrillsBranchPoint(MerrillsBranchPoint),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    #[serde(rename = "$value")]
    pub choice: GuidanceChoice,
}

/// Guidance content is exactly one of a message, a file, or a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuidanceChoice {
    Message(GuidanceMessage),
    File(GuidanceFile),
    #[serde(rename = "URL")]
    Url(GuidanceUrl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceFile {
    #[serde(rename = "HTML")]
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceUrl {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentSurvey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_aar: Option<bool>,
    #[serde(rename = "$value")]
    pub choice: SurveyChoice,
}

/// The survey presented is keyed, conversational, or concept-driven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurveyChoice {
    #[serde(rename = "GIFTSurveyProperties")]
    GiftSurveyProperties(GiftSurveyProperties),
    AutoTutorSession(AutoTutorSession),
    ConceptSurvey(ConceptSurvey),
}

/// Wrapper around the bare survey key of earlier versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftSurveyProperties {
    #[serde(rename = "GIFTSurveyKey")]
    pub gift_survey_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTutorSession {
    pub dkf_ref: DkfRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkfRef {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSurvey {
    #[serde(rename = "GIFTSurveyKey")]
    pub gift_survey_key: String,
    #[serde(rename = "conceptQuestions", default)]
    pub concept_questions: Vec<ConceptQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptQuestion {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
}

/// After-action review course object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dkf_ref: Option<DkfRef>,
    pub interops: Interops,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_when: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interops {
    #[serde(rename = "interop", default)]
    pub interops: Vec<Interop>,
}

/// One gateway interop plugin activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interop {
    pub interop_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_args: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMaterial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_material_list: Option<LessonMaterialList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_material_files: Option<LessonMaterialFiles>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonMaterialList {
    #[serde(rename = "media", default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub name: String,
    pub uri: String,
    #[serde(rename = "$value")]
    pub properties: MediaProperties,
}

/// Closed set of media renderings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaProperties {
    #[serde(rename = "PDFProperties")]
    Pdf,
    WebpageProperties,
    ImageProperties,
    YoutubeVideoProperties(YoutubeVideoProperties),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideoProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_full_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_auto_play: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonMaterialFiles {
    #[serde(rename = "file", default)]
    pub files: Vec<String>,
}

/// Branch-point course object cycling rule/example/recall/practice content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerrillsBranchPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    pub concepts: BranchConcepts,
    pub quadrants: Quadrants,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchConcepts {
    #[serde(rename = "concept", default)]
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quadrants {
    #[serde(rename = "$value", default)]
    pub content: Vec<Quadrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Quadrant {
    Rule,
    Example,
    Recall(Recall),
    Practice(Practice),
    Transitions(Transitions),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recall {
    pub present_survey: RecallSurvey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallSurvey {
    pub concept_survey: ConceptSurvey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
    pub practice_concepts: PracticeConcepts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeConcepts {
    #[serde(rename = "courseConcept", default)]
    pub course_concepts: Vec<String>,
}

/// Root element of a version 8.0 training application reference file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingApplicationWrapper {
    #[serde(rename = "@version")]
    pub version: String,
    pub training_application: TrainingApplication,
}
