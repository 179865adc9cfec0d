// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options of the report conversion.

use smart_default::SmartDefault;

/// Options of converting a Cucumber JSON report into a JUnit XML report.
///
/// Constructed once per conversion by the caller and passed down
/// immutably, so a single instance is safe to reuse across calls.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct JunitOptions {
    /// Indentation of the produced XML document, or [`None`] to produce it
    /// as a single line.
    #[default(Some(Indent::default()))]
    pub indent: Option<Indent>,

    /// Whether to start the document with an `<?xml?>` declaration.
    ///
    /// The document stays well-formed without one.
    #[default = true]
    pub declaration: bool,

    /// Whether `pending` and `undefined` steps should be reported as
    /// failures instead of skips, making CI fail on incomplete step
    /// coverage.
    pub strict: bool,

    /// Literal prefix prepended to the name of every produced
    /// `<testsuite>` and `<testcase>`.
    pub prefix: String,
}

/// Indentation of a produced XML document: `width` repetitions of
/// `character` per nesting level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Indent {
    /// Byte repeated to indent nested elements.
    #[default(b' ')]
    pub character: u8,

    /// Number of [`Indent::character`] repetitions per nesting level.
    #[default = 4]
    pub width: usize,
}

impl Indent {
    /// Creates an [`Indent`] of `width` spaces per nesting level.
    #[must_use]
    pub const fn spaces(width: usize) -> Self {
        Self { character: b' ', width }
    }

    /// Creates an [`Indent`] of `width` tabs per nesting level.
    #[must_use]
    pub const fn tabs(width: usize) -> Self {
        Self { character: b'\t', width }
    }
}
