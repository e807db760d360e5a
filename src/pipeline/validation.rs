//! Validation engine for summary specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`](super::spec::SummarySpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::nlp::stopwords::is_supported_language;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarySpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and `Send + Sync` so one engine can serve many
/// threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"summary_fraction"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarySpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(SummaryFractionRule));
        engine.add_rule(Box::new(KeywordLimitsRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("spec version {} is not supported", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. summary_fraction in (0, 1] ──────────────────────────────────────────

struct SummaryFractionRule;

impl ValidationRule for SummaryFractionRule {
    fn name(&self) -> &str {
        "summary_fraction"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.summary_fraction {
            Some(f) if !(f > 0.0 && f <= 1.0) => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::OutOfRange,
                    "/summary_fraction",
                    format!("summary_fraction must be in (0, 1], got {f}"),
                )
                .with_hint("Use a share of sentences such as 0.25"),
            )],
            _ => vec![],
        }
    }
}

// ─── 3. Keyword extractor limits ────────────────────────────────────────────

struct KeywordLimitsRule;

impl ValidationRule for KeywordLimitsRule {
    fn name(&self) -> &str {
        "keyword_limits"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        let kw = &spec.keywords;

        let checks: &[(&str, Option<usize>)] = &[
            ("max_ngram_size", kw.max_ngram_size),
            ("window_size", kw.window_size),
            ("num_keywords", kw.num_keywords),
        ];

        for &(field, value) in checks {
            if value == Some(0) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::OutOfRange,
                        format!("/keywords/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!("Remove {field} to use the default, or set it to a positive value")),
                ));
            }
        }

        if let Some(t) = kw.dedup_threshold {
            if !(0.0..=1.0).contains(&t) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::OutOfRange,
                        "/keywords/dedup_threshold",
                        format!("dedup_threshold must be in [0, 1], got {t}"),
                    )
                    .with_hint("Use 1.0 to disable deduplication"),
                ));
            }
        }

        out
    }
}

// ─── 4. Language has a stopword list ────────────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.keywords.language.as_deref() {
            Some(lang) if !is_supported_language(lang) => vec![ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::UnsupportedLanguage,
                    "/keywords/language",
                    format!("no stopword list for \"{lang}\"; English will be used"),
                )
                .with_hint("Use an ISO 639-1 code such as \"en\", \"de\" or \"fr\""),
            )],
            _ => vec![],
        }
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/keywords",
            &spec.keywords.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> SummarySpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_fraction_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1, "summary_fraction": 1.0 }"#));
        assert!(report.is_valid());
    }

    #[test]
    fn test_default_rule_names() {
        assert_eq!(
            engine().rule_names(),
            vec!["version", "summary_fraction", "keyword_limits", "language", "unknown_fields"]
        );
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errors[0].path, "/v");
    }

    #[test]
    fn test_fraction_out_of_range() {
        for f in ["0", "-0.1", "1.5"] {
            let report = engine().validate(&spec(&format!(
                r#"{{ "v": 1, "summary_fraction": {f} }}"#
            )));
            let errors: Vec<_> = report.errors().collect();
            assert_eq!(errors.len(), 1, "fraction {f}");
            assert_eq!(errors[0].code, ErrorCode::OutOfRange);
            assert_eq!(errors[0].path, "/summary_fraction");
        }
    }

    #[test]
    fn test_zero_keyword_limits() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "keywords": { "max_ngram_size": 0, "window_size": 0, "num_keywords": 0 } }"#,
        ));
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/keywords/max_ngram_size",
                "/keywords/window_size",
                "/keywords/num_keywords"
            ]
        );
    }

    #[test]
    fn test_dedup_threshold_out_of_range() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "keywords": { "dedup_threshold": 1.2 } }"#,
        ));
        assert!(report.has_errors());
        assert_eq!(
            report.errors().next().unwrap().path,
            "/keywords/dedup_threshold"
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let report = engine().validate(&spec(
            r#"{ "v": 3, "summary_fraction": 0, "keywords": { "num_keywords": 0 } }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }

    // ─── Warnings ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_warns() {
        let report = engine().validate(&spec(r#"{ "v": 1, "keywords": { "language": "xx" } }"#));
        assert!(report.is_valid());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::UnsupportedLanguage);
    }

    #[test]
    fn test_unknown_fields_warn_when_not_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "bogus": 1, "keywords": { "also_bogus": 2 } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/bogus", "/keywords/also_bogus"]);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": true, "bogus": 1 }"#));
        assert!(report.has_errors());
        assert_eq!(report.errors().next().unwrap().code, ErrorCode::UnknownField);
    }

    // ─── Engine ─────────────────────────────────────────────────────────

    #[test]
    fn test_custom_rule() {
        struct NoScoresRule;

        impl ValidationRule for NoScoresRule {
            fn name(&self) -> &str {
                "no_scores"
            }

            fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
                if spec.include_scores {
                    vec![ValidationDiagnostic::warning(SpecError::new(
                        ErrorCode::OutOfRange,
                        "/include_scores",
                        "scores are not exported here",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoScoresRule));
        let report = engine.validate(&spec(r#"{ "v": 1, "include_scores": true }"#));
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 1, "summary_fraction": 2 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "out_of_range");
        assert_eq!(diag["path"], "/summary_fraction");
    }
}
