// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element tree of a [JUnit XML report][1].
//!
//! Ownership here is strictly tree-shaped and call-scoped: every element
//! belongs to exactly one parent until final serialization.
//!
//! [1]: https://llg.cubic.org/docs/junit

use serde_json::Value;

/// Root `<testsuites>` element of a JUnit XML report.
#[derive(Clone, Debug, Default)]
pub struct TestSuites {
    /// `<testsuite>` elements, in original report order.
    pub suites: Vec<TestSuite>,
}

/// Single `<testsuite>` element, produced from one scenario.
#[derive(Clone, Debug)]
pub struct TestSuite {
    /// Name of this suite, or [`None`] for the attribute-less placeholder
    /// suite marking a parsed report without any qualifying scenarios.
    pub name: Option<String>,

    /// Aggregated [`SuiteCounts`] of this suite.
    pub counts: SuiteCounts,

    /// `<property>` elements of the nested `<properties>` container.
    pub properties: Vec<Property>,

    /// `<testcase>` elements, in original step order.
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new [`TestSuite`] with the given name, zero counts and no
    /// children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            counts: SuiteCounts::default(),
            properties: vec![],
            cases: vec![],
        }
    }

    /// Creates the placeholder [`TestSuite`] substituted when a parsed
    /// report produces no scenarios.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: None,
            counts: SuiteCounts::default(),
            properties: vec![],
            cases: vec![],
        }
    }

    /// Indicates whether this is the placeholder suite.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name.is_none()
    }
}

/// Aggregated counts of a [`TestSuite`].
///
/// `tests` equals the number of non-hidden steps of the source scenario,
/// `failures` and `skipped` are the classified subsets of those.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SuiteCounts {
    /// Number of emitted [`TestCase`]s.
    pub tests: usize,

    /// Number of [`TestCase`]s carrying a `<failure>` child.
    pub failures: usize,

    /// Number of [`TestCase`]s carrying a `<skipped>` child.
    pub skipped: usize,
}

/// Single `<property>` element of a `<properties>` container.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// `name` attribute.
    pub name: String,

    /// `value` attribute.
    pub value: String,
}

impl Property {
    /// Creates a [`Property`] out of a name and a JSON value.
    ///
    /// Strings are taken verbatim. Any other value renders as its compact
    /// JSON text: booleans as `true`/`false`, numbers and `null` as
    /// written, nested arrays/objects as one-line JSON.
    #[must_use]
    pub fn new(name: impl Into<String>, value: &Value) -> Self {
        Self {
            name: name.into(),
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }
}

/// Single `<testcase>` element, produced from one step.
#[derive(Clone, Debug)]
pub struct TestCase {
    /// `name` attribute: the step's keyword and name, optionally prefixed.
    pub name: String,

    /// `classname` attribute: identifier of the owning scenario.
    pub classname: String,

    /// `time` attribute, in seconds. [`None`] when the step reported no
    /// (or zero) duration, in which case the attribute is omitted rather
    /// than defaulted.
    pub time: Option<f64>,

    /// Classification of this case's outcome.
    pub status: CaseStatus,
}

/// Classification child of a [`TestCase`]: zero or one of these.
#[derive(Clone, Debug)]
pub enum CaseStatus {
    /// No classification child: the step passed (or reported an
    /// unrecognized status).
    Passed,

    /// `<failure>` child.
    Failed(Failure),

    /// `<skipped>` child with an empty `message` attribute.
    Skipped,
}

impl CaseStatus {
    /// Indicates whether this status carries a `<failure>` child.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Indicates whether this status carries a `<skipped>` child.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Single `<failure>` element of a [`TestCase`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
    /// `message` attribute: first line of the reported error.
    pub message: String,

    /// Text content: the full reported error, unmodified.
    pub body: String,
}

impl Failure {
    /// Creates a [`Failure`] out of the given error message.
    ///
    /// The `message` attribute becomes the text up to (excluding) the
    /// first newline, while the body keeps the whole message with its
    /// embedded newlines. Without a newline both are equal.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        let body = message.into();
        let message = body
            .split('\n')
            .next()
            .unwrap_or_default()
            .to_owned();
        Self { message, body }
    }
}
