// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] production from a [Cucumber JSON format][2]
//! report.
//!
//! Split into focused modules:
//! - `element`: the output element tree plus property/failure builders;
//! - `convert`: step/scenario/feature mapping with count aggregation;
//! - `writer`: XML text serialization.
//!
//! [1]: https://llg.cubic.org/docs/junit
//! [2]: https://github.com/cucumber/cucumber-json-schema

mod convert;
mod element;
mod writer;

use std::str;

use tracing::debug;

use crate::{error::Result, options::JunitOptions, report::Feature};

pub use self::element::{
    CaseStatus, Failure, Property, SuiteCounts, TestCase, TestSuite,
    TestSuites,
};

/// Converts a raw Cucumber JSON report into a JUnit XML document.
///
/// Empty (or whitespace-only) input produces a report without any
/// `<testsuite>`s, while a parsed report with no qualifying scenarios
/// produces a single empty `<testsuite>` marker.
///
/// # Errors
///
/// - [`ConvertError::Encoding`], if `raw` is not valid UTF-8.
/// - [`ConvertError::Parse`], if `raw` is non-blank, but not a JSON array
///   of features.
/// - [`ConvertError::MissingErrorMessage`], if a `failed` step carries no
///   `error_message`.
/// - [`ConvertError::Xml`], if the XML document fails to write out.
///
/// [`ConvertError::Encoding`]: crate::ConvertError::Encoding
/// [`ConvertError::MissingErrorMessage`]: crate::ConvertError::MissingErrorMessage
/// [`ConvertError::Parse`]: crate::ConvertError::Parse
/// [`ConvertError::Xml`]: crate::ConvertError::Xml
pub fn report_to_junit(
    raw: impl AsRef<[u8]>,
    options: &JunitOptions,
) -> Result<String> {
    let raw = str::from_utf8(raw.as_ref())?;
    let document = convert_report(raw, options)?;
    writer::write_document(&document, options)
}

/// Parses the report and maps it into the output element tree.
fn convert_report(raw: &str, options: &JunitOptions) -> Result<TestSuites> {
    let raw = raw.trim();
    if raw.is_empty() {
        debug!("blank report, emitting no test suites");
        return Ok(TestSuites::default());
    }

    let features = serde_json::from_str::<Vec<Feature>>(raw)?;
    debug!(features = features.len(), "parsed Cucumber JSON report");

    let mut suites = Vec::new();
    for feature in &features {
        suites.extend(convert::convert_feature(feature, options)?);
    }
    if suites.is_empty() {
        // Parsed, but nothing qualified: keep a suite marker in the output.
        suites.push(TestSuite::placeholder());
    }

    Ok(TestSuites { suites })
}

#[cfg(test)]
mod tests {
    use crate::error::ConvertError;

    use super::*;

    #[test]
    fn blank_report_maps_to_zero_suites() {
        for raw in ["", " ", "\n\t  \n"] {
            let document =
                convert_report(raw, &JunitOptions::default()).unwrap();
            assert!(document.suites.is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn empty_array_maps_to_the_placeholder_suite() {
        let document =
            convert_report("[]", &JunitOptions::default()).unwrap();

        assert_eq!(document.suites.len(), 1);
        assert!(document.suites[0].is_placeholder());
    }

    #[test]
    fn background_only_report_maps_to_the_placeholder_suite() {
        let document = convert_report(
            r#"[{"elements": [{"type": "background", "id": "bg"}]}]"#,
            &JunitOptions::default(),
        )
        .unwrap();

        assert_eq!(document.suites.len(), 1);
        assert!(document.suites[0].is_placeholder());
    }

    #[test]
    fn non_array_top_level_is_a_parse_error() {
        let err = convert_report(
            r#"{"not": "an array"}"#,
            &JunitOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let err =
            report_to_junit([0xff, 0xfe], &JunitOptions::default())
                .unwrap_err();

        assert!(matches!(err, ConvertError::Encoding(_)));
    }
}
