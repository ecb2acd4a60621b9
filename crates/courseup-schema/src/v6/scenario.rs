//! Scenario (real-time assessment) document types, schema version 6.0.

use serde::{Deserialize, Serialize};

/// Root element of a version 6.0 scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(rename = "@version")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub resources: Resources,
    pub assessment: Assessment,
    pub actions: Actions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_context: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interops: Option<Interops>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interops {
    #[serde(rename = "interop", default)]
    pub interops: Vec<Interop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interop {
    pub interop_impl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Objects>,
    pub tasks: Tasks,
}

/// Scenario-level object declarations referenced by conditions and triggers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Waypoints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoints {
    #[serde(rename = "waypoint", default)]
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tasks {
    #[serde(rename = "task", default)]
    pub tasks: Vec<Task>,
}

/// One assessed task with its start/end triggers and concept hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_triggers: Option<Triggers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_triggers: Option<Triggers>,
    pub concepts: Concepts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triggers {
    #[serde(rename = "$value", default)]
    pub triggers: Vec<TriggerType>,
}

/// Closed set of events that start or end a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum TriggerType {
    #[serde(rename = "conceptEnded")]
    ConceptEnded { node_id: u32 },
    #[serde(rename = "taskEnded")]
    TaskEnded { node_id: u32 },
    #[serde(rename = "entityLocation")]
    EntityLocation { waypoint: String },
    #[serde(rename = "learnerLocation")]
    LearnerLocation { waypoint: String },
    #[serde(rename = "scenarioStarted")]
    ScenarioStarted,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concepts {
    #[serde(rename = "concept", default)]
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    pub conditions: Conditions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(rename = "condition", default)]
    pub conditions: Vec<Condition>,
}

/// One assessment condition: an implementation class plus its typed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub condition_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ConditionInputWrapper>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionInputWrapper {
    #[serde(rename = "$value")]
    pub input: ConditionInput,
}

/// The closed set of condition input types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionInput {
    ApplicationCompletedCondition(ApplicationCompletedCondition),
    AvoidLocationCondition(AvoidLocationCondition),
    CheckpointPaceCondition(CheckpointPaceCondition),
    CheckpointProgressCondition(CheckpointProgressCondition),
    EliminateHostilesCondition(EliminateHostilesCondition),
    GenericConditionInput(GenericConditionInput),
    IdentifyPoisCondition(IdentifyPoisCondition),
    TimerCondition(TimerCondition),
    #[serde(rename = "SIMILEConditionInput")]
    SimileConditionInput(SimileConditionInput),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCompletedCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_completion_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidLocationCondition {
    pub waypoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointPaceCondition {
    #[serde(rename = "checkpoint", default)]
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointProgressCondition {
    #[serde(rename = "checkpoint", default)]
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub waypoint: String,
    pub at_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EliminateHostilesCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    #[serde(rename = "startLocation", default)]
    pub start_locations: Vec<StartLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartLocation {
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericConditionInput {
    #[serde(rename = "nvpair", default)]
    pub nvpairs: Vec<NvPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NvPair {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifyPoisCondition {
    pub pois: Pois,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pois {
    #[serde(rename = "waypointRef", default)]
    pub waypoint_refs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeatable: Option<bool>,
    pub interval: f64,
}

/// Input for the legacy SIMILE-backed assessment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimileConditionInput {
    pub configuration_file: String,
    pub condition_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_transitions: Option<StateTransitions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructional_strategies: Option<InstructionalStrategies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateTransitions {
    #[serde(rename = "stateTransition", default)]
    pub state_transitions: Vec<StateTransition>,
}

/// Maps observed state changes to the strategies that should fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTransition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub logical_expression: LogicalExpression,
    pub strategy_choices: StrategyChoices,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpression {
    #[serde(rename = "$value", default)]
    pub expressions: Vec<StateExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum StateExpression {
    #[serde(rename = "performanceNode")]
    PerformanceNode {
        node_id: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<String>,
    },
    #[serde(rename = "learnerStateAttribute")]
    LearnerStateAttribute {
        attribute: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyChoices {
    #[serde(rename = "strategyRef", default)]
    pub strategy_refs: Vec<StrategyRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionalStrategies {
    #[serde(rename = "strategy", default)]
    pub strategies: Vec<Strategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$value")]
    pub activity: StrategyActivity,
}

/// Closed set of activities a strategy can perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategyActivity {
    InstructionalIntervention(InstructionalIntervention),
    PerformanceAssessment(PerformanceAssessment),
    ScenarioAdaptation(ScenarioAdaptation),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionalIntervention {
    pub strategy_handler: StrategyHandler,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAssessment {
    pub strategy_handler: StrategyHandler,
    pub node_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAdaptation {
    pub strategy_handler: StrategyHandler,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyHandler {
    #[serde(rename = "impl")]
    pub impl_class: String,
}

/// Feedback is presented as exactly one of a message, a file, or audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "$value")]
    pub presentation: FeedbackPresentation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedbackPresentation {
    Message(String),
    File(FeedbackFile),
    Audio(FeedbackAudio),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFile {
    #[serde(rename = "HTML")]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAudio {
    #[serde(rename = "MP3File")]
    pub mp3_file: String,
    #[serde(rename = "OGGFile", default, skip_serializing_if = "Option::is_none")]
    pub ogg_file: Option<String>,
}
