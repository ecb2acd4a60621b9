//! The top-level dispatcher.
//!
//! [`MigrationService`] is the single entry point callers use per file:
//! it probes the declared version, bypasses the chain for kinds with no
//! conversion logic, short-circuits documents already at the current
//! version, and otherwise hands the file to the earliest applicable
//! boundary converter. All failures surface with the offending file's
//! identity attached.

use courseup_core::{
    ConvertError, DocumentKind, IssueLog, OriginalDocument, ParseDocument, Result, SchemaVersion,
    SourceFile, VersionProbe,
};
use courseup_schema::latest;

use crate::descriptors;
use crate::result::{MigratedDocument, MigrationResult};
use crate::v6_to_v7::V6ToV7Converter;
use crate::v7_to_v8::V7ToV8Converter;
use crate::v8_to_v9::V8ToV9Converter;
use crate::v9_to_v10::V9ToV10Converter;

/// Sibling document kinds upgraded by the folder helper, in the order the
/// authoring tools expect them.
const FOLDER_KINDS: &[DocumentKind] = &[
    DocumentKind::Scenario,
    DocumentKind::Metadata,
    DocumentKind::TrainingApplicationReference,
    DocumentKind::SensorConfiguration,
    DocumentKind::LearnerConfiguration,
    DocumentKind::PedagogyConfiguration,
];

/// Single entry point for migrating authored files to the current schema
/// version.
///
/// Holds the external parse-and-validate service; one instance can serve
/// any number of migrations, each of which owns its own issue log.
#[derive(Debug, Clone)]
pub struct MigrationService<P> {
    parser: P,
    fail_fast: bool,
}

impl<P: ParseDocument> MigrationService<P> {
    /// Creates a migration service around the given parser.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            fail_fast: false,
        }
    }

    /// Makes the external parser abort on the first validation event.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Migrates one file to the current schema version.
    ///
    /// - Kinds with no conversion logic are parsed against the current
    ///   schema and returned with `upconverted = false`.
    /// - Files already at the current version are parsed against the
    ///   current schema; "already latest" is a control signal, never an
    ///   error.
    /// - Anything else runs through the conversion chain from its declared
    ///   version, accumulating issues along the way.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error when the content does not conform to its
    /// declared schema, `UnsupportedVersion` when the declared version is
    /// outside the supported range, and `UnhandledConstruct` when a
    /// construct has no current-version equivalent. Every error carries
    /// the file's identity.
    pub fn migrate_file(&self, file: &SourceFile, kind: DocumentKind) -> Result<MigrationResult> {
        if !kind.requires_conversion() {
            tracing::debug!(
                "{} files carry no conversion logic; parsing '{}' against the current schema",
                kind,
                file.name()
            );
            let document = self
                .parse_current(file, kind)
                .map_err(|e| e.with_file(file.name()))?;
            return Ok(MigrationResult {
                document,
                kind,
                original: None,
                upconverted: false,
                source_version: SchemaVersion::latest().attribute().to_string(),
                issues: IssueLog::new(),
            });
        }

        match self
            .parser
            .probe_version(file)
            .map_err(|e| e.with_file(file.name()))?
        {
            VersionProbe::AlreadyLatest => {
                tracing::debug!(
                    "'{}' is already at the latest version; no conversion needed",
                    file.name()
                );
                let document = self
                    .parse_current(file, kind)
                    .map_err(|e| e.with_file(file.name()))?;
                Ok(MigrationResult {
                    document,
                    kind,
                    original: None,
                    upconverted: false,
                    source_version: SchemaVersion::latest().attribute().to_string(),
                    issues: IssueLog::new(),
                })
            }
            VersionProbe::Supported(version) => {
                let mut issues = IssueLog::new();
                let document = self
                    .run_chain(file, kind, version, &mut issues)
                    .map_err(|e| e.with_file(file.name()))?;

                let original = if kind.retains_backup() {
                    Some(OriginalDocument::capture(file, kind, version))
                } else {
                    None
                };

                Ok(MigrationResult {
                    document,
                    kind,
                    original,
                    upconverted: true,
                    source_version: version.attribute().to_string(),
                    issues,
                })
            }
        }
    }

    /// Upgrades a course file and its sibling authored files to the
    /// current version, returning the names of the files that actually
    /// changed.
    ///
    /// Siblings are selected by their canonical extension; files already
    /// at the current version are skipped without error. Persisting the
    /// upgraded content is the embedding application's concern.
    pub fn upgrade_course_folder(
        &self,
        course_file: &SourceFile,
        siblings: &[SourceFile],
    ) -> Result<Vec<String>> {
        let mut upgraded = Vec::new();

        let result = self.migrate_file(course_file, DocumentKind::Course)?;
        if result.upconverted {
            upgraded.push(course_file.name().to_string());
        }

        for kind in FOLDER_KINDS {
            for file in siblings
                .iter()
                .filter(|f| f.name().ends_with(kind.file_extension()))
            {
                let result = self.migrate_file(file, *kind)?;
                if result.upconverted {
                    upgraded.push(file.name().to_string());
                }
            }
        }

        Ok(upgraded)
    }

    /// Parses a file against the current schema without converting.
    fn parse_current(&self, file: &SourceFile, kind: DocumentKind) -> Result<MigratedDocument> {
        let document = match kind {
            DocumentKind::Course => MigratedDocument::Course(self.parser.parse::<latest::course::Course>(
                file,
                &descriptors::latest::COURSE,
                self.fail_fast,
            )?),
            DocumentKind::Scenario => MigratedDocument::Scenario(
                self.parser.parse::<latest::scenario::Scenario>(
                    file,
                    &descriptors::latest::SCENARIO,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::LearnerConfiguration => MigratedDocument::LearnerConfiguration(
                self.parser.parse::<latest::learner::LearnerConfiguration>(
                    file,
                    &descriptors::latest::LEARNER,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::PedagogyConfiguration => MigratedDocument::PedagogyConfiguration(
                self.parser.parse::<latest::pedagogy::PedagogyConfiguration>(
                    file,
                    &descriptors::latest::PEDAGOGY,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::Metadata => MigratedDocument::Metadata(
                self.parser.parse::<latest::metadata::Metadata>(
                    file,
                    &descriptors::latest::METADATA,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::TrainingApplicationReference => {
                MigratedDocument::TrainingApplicationReference(
                    self.parser.parse::<latest::course::TrainingApplicationWrapper>(
                        file,
                        &descriptors::latest::TRAINING_APP,
                        self.fail_fast,
                    )?,
                )
            }
            DocumentKind::Conversation => MigratedDocument::Conversation(
                self.parser.parse::<latest::conversation::Conversation>(
                    file,
                    &descriptors::latest::CONVERSATION,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::SensorConfiguration => MigratedDocument::SensorConfiguration(
                self.parser.parse::<latest::sensor::SensorsConfiguration>(
                    file,
                    &descriptors::latest::SENSOR,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::QuestionExport => MigratedDocument::QuestionExport(
                self.parser.parse::<latest::survey::QuestionExport>(
                    file,
                    &descriptors::QUESTION_EXPORT,
                    self.fail_fast,
                )?,
            ),
            DocumentKind::SurveyExport => MigratedDocument::SurveyExport(
                self.parser.parse::<latest::survey::SurveyExport>(
                    file,
                    &descriptors::SURVEY_EXPORT,
                    self.fail_fast,
                )?,
            ),
        };
        Ok(document)
    }

    /// Invokes the earliest applicable converter's raw-file entry point.
    fn run_chain(
        &self,
        file: &SourceFile,
        kind: DocumentKind,
        version: SchemaVersion,
        issues: &mut IssueLog,
    ) -> Result<MigratedDocument> {
        // The probe never reports the current version here; a file that
        // reaches this point with one indicates a parser contract bug.
        macro_rules! chain {
            ($method:ident, $variant:ident) => {
                match version {
                    SchemaVersion::V6 => {
                        V6ToV7Converter.$method(&self.parser, file, self.fail_fast, issues)
                    }
                    SchemaVersion::V7 => {
                        V7ToV8Converter.$method(&self.parser, file, self.fail_fast, issues)
                    }
                    SchemaVersion::V8 => {
                        V8ToV9Converter.$method(&self.parser, file, self.fail_fast, issues)
                    }
                    SchemaVersion::V9 => {
                        V9ToV10Converter.$method(&self.parser, file, self.fail_fast, issues)
                    }
                    SchemaVersion::V10 => Err(ConvertError::conversion(
                        file.name(),
                        "the parser reported a supported pre-latest version for a file already at the latest version",
                    )),
                }
                .map(MigratedDocument::$variant)
            };
        }

        match kind {
            DocumentKind::Course => chain!(convert_course_file, Course),
            DocumentKind::Scenario => chain!(convert_scenario_file, Scenario),
            DocumentKind::LearnerConfiguration => {
                chain!(convert_learner_configuration_file, LearnerConfiguration)
            }
            DocumentKind::PedagogyConfiguration => {
                chain!(convert_pedagogy_configuration_file, PedagogyConfiguration)
            }
            DocumentKind::Metadata => chain!(convert_metadata_file, Metadata),
            DocumentKind::TrainingApplicationReference => {
                chain!(convert_training_app_ref_file, TrainingApplicationReference)
            }
            DocumentKind::Conversation => chain!(convert_conversation_file, Conversation),
            DocumentKind::SensorConfiguration => {
                chain!(convert_sensor_configuration_file, SensorConfiguration)
            }
            DocumentKind::QuestionExport | DocumentKind::SurveyExport => Err(
                ConvertError::conversion(file.name(), "export files carry no conversion logic"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseup_core::SchemaDescriptor;
    use courseup_core::SchemaRoot;

    /// Parser stub that deserializes with quick-xml and records probes.
    struct StubParser {
        probe: VersionProbe,
        panic_on_probe: bool,
    }

    impl StubParser {
        fn latest() -> Self {
            Self {
                probe: VersionProbe::AlreadyLatest,
                panic_on_probe: false,
            }
        }

        fn at(version: SchemaVersion) -> Self {
            Self {
                probe: VersionProbe::Supported(version),
                panic_on_probe: false,
            }
        }

        fn never_probed() -> Self {
            Self {
                probe: VersionProbe::AlreadyLatest,
                panic_on_probe: true,
            }
        }
    }

    impl ParseDocument for StubParser {
        fn parse<T: SchemaRoot>(
            &self,
            file: &SourceFile,
            _descriptor: &SchemaDescriptor,
            _fail_fast: bool,
        ) -> Result<T> {
            quick_xml::de::from_str(file.contents())
                .map_err(|e| ConvertError::parse(file.name(), e.to_string()))
        }

        fn probe_version(&self, _file: &SourceFile) -> Result<VersionProbe> {
            if self.panic_on_probe {
                panic!("export kinds must never probe the version");
            }
            Ok(self.probe)
        }
    }

    const LATEST_METADATA: &str = concat!(
        "<Metadata version=\"10.0.1\">",
        "<content><simple><value>slides.pptx</value></simple></content>",
        "<presentAt/>",
        "<concepts/>",
        "</Metadata>"
    );

    const V9_METADATA: &str = concat!(
        "<Metadata version=\"9.0\">",
        "<content><simple><value>slides.pptx</value></simple></content>",
        "<presentAt/>",
        "<concepts/>",
        "</Metadata>"
    );

    const V9_TRAINING_APP: &str = concat!(
        "<TrainingApplicationWrapper version=\"9.0\">",
        "<trainingApplication><interops/></trainingApplication>",
        "</TrainingApplicationWrapper>"
    );

    #[test]
    fn test_export_kinds_bypass_probe_and_chain() {
        let service = MigrationService::new(StubParser::never_probed());
        let file = SourceFile::new(
            "bank.qexport.xml",
            "<QuestionExport version=\"10.0\"></QuestionExport>",
        );

        let result = service
            .migrate_file(&file, DocumentKind::QuestionExport)
            .unwrap();
        assert!(!result.upconverted);
        assert!(result.original.is_none());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_already_latest_skips_migration() {
        let service = MigrationService::new(StubParser::latest());
        let file = SourceFile::new("up-to-date.metadata.xml", LATEST_METADATA);

        let result = service.migrate_file(&file, DocumentKind::Metadata).unwrap();
        assert!(!result.upconverted);
        assert!(result.original.is_none());
        assert_eq!(result.source_version, "10.0");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_migrated_file_retains_backup() {
        let service = MigrationService::new(StubParser::at(SchemaVersion::V9));
        let file = SourceFile::new("old.metadata.xml", V9_METADATA);

        let result = service.migrate_file(&file, DocumentKind::Metadata).unwrap();
        assert!(result.upconverted);
        assert_eq!(result.source_version, "9.0");
        let original = result.original.expect("metadata retains a backup");
        assert_eq!(original.contents, V9_METADATA);
        assert_eq!(original.version, SchemaVersion::V9);
    }

    #[test]
    fn test_training_app_ref_omits_backup() {
        let service = MigrationService::new(StubParser::at(SchemaVersion::V9));
        let file = SourceFile::new("app.trainingapp.xml", V9_TRAINING_APP);

        let result = service
            .migrate_file(&file, DocumentKind::TrainingApplicationReference)
            .unwrap();
        assert!(result.upconverted);
        assert!(result.original.is_none());
    }

    #[test]
    fn test_parse_failure_carries_file_identity() {
        let service = MigrationService::new(StubParser::latest());
        let file = SourceFile::new("broken.metadata.xml", "<Metadata");

        let err = service
            .migrate_file(&file, DocumentKind::Metadata)
            .unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("broken.metadata.xml"));
    }
}
