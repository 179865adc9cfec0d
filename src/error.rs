// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of the report conversion.

use std::str;

use derive_more::with_trait::{Display, Error, From};

/// Possible errors of converting a Cucumber JSON report into a JUnit XML
/// report.
///
/// There is no partial-success channel: a conversion either returns a
/// complete XML document or one of these.
#[derive(Debug, Display, Error, From)]
pub enum ConvertError {
    /// Input report is not valid UTF-8.
    #[display("report is not valid UTF-8: {_0}")]
    Encoding(str::Utf8Error),

    /// Input report is not a valid Cucumber JSON document (not JSON at all,
    /// or not an array of features at the top level).
    #[display("failed to parse Cucumber JSON report: {_0}")]
    Parse(serde_json::Error),

    /// Step reported a `failed` status without any `error_message` to
    /// build the failure report from.
    #[display("step \"{step}\" is `failed`, but has no `error_message`")]
    #[from(ignore)]
    MissingErrorMessage {
        /// Name of the offending step.
        #[error(not(source))]
        step: String,
    },

    /// Failed to write out the JUnit XML document.
    #[display("failed to write JUnit XML: {_0}")]
    Xml(quick_xml::Error),
}

/// Result of converting a Cucumber JSON report.
pub type Result<T> = std::result::Result<T, ConvertError>;
