// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mapping of Cucumber JSON report entities into JUnit XML elements.
//!
//! Three nested stages, leaves first: a step becomes a `<testcase>`, a
//! scenario becomes a `<testsuite>` aggregating its steps' counts, and a
//! feature becomes one `<testsuite>` per non-background scenario.

use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    error::{ConvertError, Result},
    options::JunitOptions,
    report::{Element, ElementType, Feature, Status, Step},
};

use super::element::{CaseStatus, Failure, Property, TestCase, TestSuite};

/// Nanoseconds in a second, for step `duration` conversion.
const NANOS_IN_SECOND: f64 = 1_000_000_000.0;

/// Converts a single non-hidden [`Step`] into a `<testcase>` element.
///
/// The owning scenario supplies the `classname` attribute.
pub(crate) fn convert_step(
    step: &Step,
    scenario: &Element,
    options: &JunitOptions,
) -> Result<TestCase> {
    let name = format!("{}{}{}", options.prefix, step.keyword, step.name);

    let status = match step.result.status {
        Status::Passed | Status::Other => CaseStatus::Passed,
        Status::Failed => {
            let message =
                step.result.error_message.as_deref().ok_or_else(|| {
                    ConvertError::MissingErrorMessage { step: name.clone() }
                })?;
            CaseStatus::Failed(Failure::from_message(message))
        }
        Status::Pending if options.strict => {
            CaseStatus::Failed(Failure::from_message("Pending"))
        }
        Status::Undefined if options.strict => {
            CaseStatus::Failed(Failure::from_message(undefined_step_message(
                step,
            )))
        }
        Status::Skipped | Status::Pending | Status::Undefined => {
            CaseStatus::Skipped
        }
    };

    Ok(TestCase {
        name,
        classname: scenario.id.clone(),
        time: step
            .result
            .duration
            .filter(|ns| *ns != 0)
            .map(|ns| ns as f64 / NANOS_IN_SECOND),
        status,
    })
}

/// Failure message reported for an `undefined` step in strict mode.
///
/// Names the step and offers a definition skeleton in the idiom of the
/// JavaScript runner producing these reports. Deterministic for identical
/// steps.
fn undefined_step_message(step: &Step) -> String {
    format!(
        "Undefined step. Implement with the following snippet:\n\n  \
         this.{}(/^{}$/, function (callback) {{\n      \
         callback(null, 'pending');\n  }});\n",
        step.keyword.trim(),
        step.name,
    )
}

/// Converts a single scenario [`Element`] into a `<testsuite>` element.
///
/// Tags become `<property>`s valued `true`, arbitrary properties follow in
/// their original order, and every non-hidden step is counted and
/// converted. A scenario without steps yields zero counts and no cases.
pub(crate) fn convert_scenario(
    scenario: &Element,
    options: &JunitOptions,
) -> Result<TestSuite> {
    trace!(id = scenario.id.as_str(), "converting scenario");

    let mut suite =
        TestSuite::new(format!("{}{}", options.prefix, scenario.id));

    for tag in &scenario.tags {
        suite
            .properties
            .push(Property::new(tag.name(), &Value::Bool(true)));
    }
    for (name, value) in &scenario.properties {
        suite.properties.push(Property::new(name.clone(), value));
    }

    for step in scenario.steps.iter().filter(|s| !s.hidden) {
        suite.counts.tests += 1;
        let case = convert_step(step, scenario, options)?;
        if case.status.is_failure() {
            suite.counts.failures += 1;
        } else if case.status.is_skipped() {
            suite.counts.skipped += 1;
        }
        suite.cases.push(case);
    }

    Ok(suite)
}

/// Converts a [`Feature`] into `<testsuite>` elements, one per
/// non-background [`Element`], preserving their original order.
///
/// A feature with a `uri` gets it appended to every produced suite as a
/// trailing `URI` property.
pub(crate) fn convert_feature(
    feature: &Feature,
    options: &JunitOptions,
) -> Result<Vec<TestSuite>> {
    debug!(
        uri = feature.uri.as_deref().unwrap_or(""),
        elements = feature.elements.len(),
        "converting feature",
    );

    feature
        .elements
        .iter()
        .filter(|el| el.r#type != ElementType::Background)
        .map(|el| {
            let mut suite = convert_scenario(el, options)?;
            if let Some(uri) = &feature.uri {
                suite.properties.push(Property {
                    name: "URI".to_owned(),
                    value: uri.clone(),
                });
            }
            Ok(suite)
        })
        .collect()
}
