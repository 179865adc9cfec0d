// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deserializable types of a [Cucumber JSON format][1] report.
//!
//! Every optional field of the format is an explicit [`Option`] or a
//! defaulted collection here, so absence handling lives in this data model
//! rather than being scattered over the converters.
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Single feature of a Cucumber JSON report.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Feature {
    /// Location of the `.feature` file this [`Feature`] was run from.
    pub uri: Option<String>,

    /// [`Element`]s (scenarios and backgrounds) of this [`Feature`], in
    /// their original order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Scenario or background of a [`Feature`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Element {
    /// Type of this [`Element`].
    #[serde(default, rename = "type")]
    pub r#type: ElementType,

    /// Identifier of this [`Element`]. Doesn't have to be unique.
    #[serde(default)]
    pub id: String,

    /// [`Tag`]s attached to this [`Element`].
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Arbitrary additional properties of this [`Element`], in their
    /// original order.
    #[serde(default)]
    pub properties: LinkedHashMap<String, Value>,

    /// [`Step`]s of this [`Element`], in their original order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Type of an [`Element`].
///
/// Backgrounds are excluded from JUnit output entirely.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ElementType {
    /// Background of a [`Feature`].
    Background,

    /// Scenario of a [`Feature`], or any unrecognized element type.
    #[default]
    Scenario,
}

impl<'de> Deserialize<'de> for ElementType {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // Only `background` is meaningful, every other discriminator is
        // treated as a scenario.
        Ok(match String::deserialize(deserializer)?.as_str() {
            "background" => Self::Background,
            _ => Self::Scenario,
        })
    }
}

/// Tag of an [`Element`].
///
/// Reports in the wild carry tags both as bare strings and as objects with
/// a `name` field, so both shapes deserialize.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    /// Bare tag name.
    Name(String),

    /// Tag object carrying its name in a `name` field.
    Detailed {
        /// Name of the tag.
        name: String,
    },
}

impl Tag {
    /// Returns the name of this [`Tag`].
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name } => name,
        }
    }
}

/// Single executed step of an [`Element`].
#[derive(Clone, Debug, Deserialize)]
pub struct Step {
    /// Keyword of this [`Step`], including its trailing whitespace
    /// (`"Given "`, `"When "`, ...).
    #[serde(default)]
    pub keyword: String,

    /// Name of this [`Step`].
    #[serde(default)]
    pub name: String,

    /// Indicator whether this [`Step`] is a hook rather than a declared
    /// step. Hidden steps are invisible to both the output and the counts.
    #[serde(default)]
    pub hidden: bool,

    /// [`RunResult`] of this [`Step`].
    pub result: RunResult,
}

/// Result of running a [`Step`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RunResult {
    /// [`Status`] of this [`RunResult`].
    #[serde(default)]
    pub status: Status,

    /// Error message of a [`Status::Failed`] result.
    pub error_message: Option<String>,

    /// Execution time, in nanoseconds.
    ///
    /// While nowhere being documented, all major Cucumber implementations
    /// report nanoseconds here.
    pub duration: Option<u64>,
}

/// Possible statuses of a run [`Step`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    /// Step matched a definition and succeeded.
    Passed,

    /// Step matched a definition and failed.
    Failed,

    /// Step wasn't run at all.
    Skipped,

    /// No definition matched the step.
    Undefined,

    /// Step definition exists, but is marked as intentionally incomplete.
    Pending,

    /// Any unrecognized status. Classified as passed on output.
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Ok(match String::deserialize(deserializer)?.as_str() {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "skipped" => Self::Skipped,
            "undefined" => Self::Undefined,
            "pending" => Self::Pending,
            _ => Self::Other,
        })
    }
}
