// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converter of [Cucumber JSON format][1] test reports into [JUnit XML
//! report][2] documents, as consumed by CI dashboards.
//!
//! The conversion is a pure, deterministic, single-pass transform: a report
//! of features/scenarios/steps goes in, an XML document of
//! testsuites/testcases comes out, with counts, durations and
//! pass/fail/skip classification computed along the way. Reading the input
//! and writing the output are the caller's business: the only contract here
//! is bytes in, text out.
//!
//! ```rust
//! use cucumber_junit::{report_to_junit, JunitOptions};
//!
//! let report = r#"[{"uri": "features/foo.feature", "elements": []}]"#;
//! let xml = report_to_junit(report, &JunitOptions::default())?;
//!
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
//! # Ok::<_, cucumber_junit::ConvertError>(())
//! ```
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema
//! [2]: https://llg.cubic.org/docs/junit

pub mod error;
pub mod junit;
pub mod options;
pub mod report;

pub use self::{
    error::{ConvertError, Result},
    junit::report_to_junit,
    options::{Indent, JunitOptions},
};
