// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serialization of the JUnit element tree into XML text.

use std::io;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::{error::Result, options::JunitOptions};

use super::element::{CaseStatus, Property, TestCase, TestSuite, TestSuites};

/// Serializes the given document into XML text, honoring the
/// `indent`/`declaration` options.
///
/// Attribute and text escaping is delegated to [`quick_xml`].
pub(crate) fn write_document(
    document: &TestSuites,
    options: &JunitOptions,
) -> Result<String> {
    let mut writer = match options.indent {
        Some(i) => Writer::new_with_indent(Vec::new(), i.character, i.width),
        None => Writer::new(Vec::new()),
    };

    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            None,
        )))?;
    }
    writer.write_event(Event::Start(BytesStart::new("testsuites")))?;
    for suite in &document.suites {
        write_suite(&mut writer, suite)?;
    }
    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

    Ok(String::from_utf8(writer.into_inner()).unwrap_or_else(|_| {
        unreachable!("`quick_xml::Writer` emits valid UTF-8 only")
    }))
}

/// Writes one `<testsuite>` element with its attributes, `<properties>`
/// container and `<testcase>` children, in that fixed order.
fn write_suite<W: io::Write>(
    writer: &mut Writer<W>,
    suite: &TestSuite,
) -> Result<()> {
    let Some(name) = &suite.name else {
        // Placeholder suite: paired tags, no attributes, no children.
        writer.write_event(Event::Start(BytesStart::new("testsuite")))?;
        writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
        return Ok(());
    };

    let mut start = BytesStart::new("testsuite");
    start.push_attribute(("name", name.as_str()));
    start.push_attribute(("tests", suite.counts.tests.to_string().as_str()));
    start.push_attribute((
        "failures",
        suite.counts.failures.to_string().as_str(),
    ));
    start.push_attribute((
        "skipped",
        suite.counts.skipped.to_string().as_str(),
    ));
    writer.write_event(Event::Start(start))?;

    write_properties(writer, &suite.properties)?;
    for case in &suite.cases {
        write_case(writer, case)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    Ok(())
}

/// Writes the `<properties>` container of a `<testsuite>`.
fn write_properties<W: io::Write>(
    writer: &mut Writer<W>,
    properties: &[Property],
) -> Result<()> {
    if properties.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("properties")))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("properties")))?;
    for property in properties {
        let mut element = BytesStart::new("property");
        element.push_attribute(("name", property.name.as_str()));
        element.push_attribute(("value", property.value.as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("properties")))?;
    Ok(())
}

/// Writes one `<testcase>` element with its classification child, if any.
fn write_case<W: io::Write>(
    writer: &mut Writer<W>,
    case: &TestCase,
) -> Result<()> {
    let mut start = BytesStart::new("testcase");
    start.push_attribute(("name", case.name.as_str()));
    start.push_attribute(("classname", case.classname.as_str()));
    if let Some(seconds) = case.time {
        start.push_attribute(("time", seconds.to_string().as_str()));
    }

    match &case.status {
        CaseStatus::Passed => {
            writer.write_event(Event::Empty(start))?;
        }
        CaseStatus::Failed(failure) => {
            writer.write_event(Event::Start(start))?;
            let mut element = BytesStart::new("failure");
            element.push_attribute(("message", failure.message.as_str()));
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Text(BytesText::new(&failure.body)))?;
            writer.write_event(Event::End(BytesEnd::new("failure")))?;
            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        }
        CaseStatus::Skipped => {
            writer.write_event(Event::Start(start))?;
            let mut element = BytesStart::new("skipped");
            element.push_attribute(("message", ""));
            writer.write_event(Event::Empty(element))?;
            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        junit::element::{Failure, SuiteCounts},
        options::Indent,
    };

    use super::*;

    fn document_with(suite: TestSuite) -> TestSuites {
        TestSuites { suites: vec![suite] }
    }

    fn render(options: &JunitOptions, document: &TestSuites) -> String {
        write_document(document, options).unwrap()
    }

    #[test]
    fn empty_document_renders_root_only() {
        let xml = render(
            &JunitOptions::default(),
            &TestSuites::default(),
        );

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <testsuites>\n\
             </testsuites>",
        );
    }

    #[test]
    fn declaration_can_be_suppressed() {
        let options =
            JunitOptions { declaration: false, ..Default::default() };

        let xml = render(&options, &TestSuites::default());

        assert_eq!(xml, "<testsuites>\n</testsuites>");
    }

    #[test]
    fn indentation_can_be_disabled() {
        let options = JunitOptions {
            indent: None,
            declaration: false,
            ..Default::default()
        };

        let xml =
            render(&options, &document_with(TestSuite::placeholder()));

        assert_eq!(xml, "<testsuites><testsuite></testsuite></testsuites>");
    }

    #[test]
    fn tab_indentation_is_honored() {
        let options = JunitOptions {
            indent: Some(Indent::tabs(1)),
            declaration: false,
            ..Default::default()
        };

        let xml =
            render(&options, &document_with(TestSuite::placeholder()));

        assert_eq!(
            xml,
            "<testsuites>\n\t<testsuite>\n\t</testsuite>\n</testsuites>",
        );
    }

    #[test]
    fn suite_renders_attributes_properties_then_cases() {
        let suite = TestSuite {
            name: Some("suite".to_owned()),
            counts: SuiteCounts { tests: 1, failures: 0, skipped: 0 },
            properties: vec![Property {
                name: "@tag".to_owned(),
                value: "true".to_owned(),
            }],
            cases: vec![TestCase {
                name: "Given a step".to_owned(),
                classname: "suite".to_owned(),
                time: Some(2.0),
                status: CaseStatus::Passed,
            }],
        };

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert_eq!(
            xml,
            "<testsuites>\
             <testsuite name=\"suite\" tests=\"1\" failures=\"0\" skipped=\"0\">\
             <properties>\
             <property name=\"@tag\" value=\"true\"/>\
             </properties>\
             <testcase name=\"Given a step\" classname=\"suite\" time=\"2\"/>\
             </testsuite>\
             </testsuites>",
        );
    }

    #[test]
    fn empty_properties_container_self_closes() {
        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };

        let xml =
            render(&options, &document_with(TestSuite::new("suite")));

        assert_eq!(
            xml,
            "<testsuites>\
             <testsuite name=\"suite\" tests=\"0\" failures=\"0\" skipped=\"0\">\
             <properties/>\
             </testsuite>\
             </testsuites>",
        );
    }

    #[test]
    fn failure_body_follows_the_opening_tag_inline() {
        let mut suite = TestSuite::new("suite");
        suite.counts = SuiteCounts { tests: 1, failures: 1, skipped: 0 };
        suite.cases.push(TestCase {
            name: "When it breaks".to_owned(),
            classname: "suite".to_owned(),
            time: None,
            status: CaseStatus::Failed(Failure::from_message(
                "first\nsecond",
            )),
        });

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert!(xml.contains(
            "<failure message=\"first\">first\nsecond</failure>",
        ));
    }

    #[test]
    fn skipped_child_carries_an_empty_message() {
        let mut suite = TestSuite::new("suite");
        suite.counts = SuiteCounts { tests: 1, failures: 0, skipped: 1 };
        suite.cases.push(TestCase {
            name: "Then nothing".to_owned(),
            classname: "suite".to_owned(),
            time: None,
            status: CaseStatus::Skipped,
        });

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert!(xml.contains(
            "<testcase name=\"Then nothing\" classname=\"suite\">\
             <skipped message=\"\"/>\
             </testcase>",
        ));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut suite = TestSuite::new("a <b> & \"c\"");
        suite.counts.tests = 0;

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert!(xml.contains(
            "name=\"a &lt;b&gt; &amp; &quot;c&quot;\"",
        ));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut suite = TestSuite::new("suite");
        suite.counts = SuiteCounts { tests: 1, failures: 1, skipped: 0 };
        suite.cases.push(TestCase {
            name: "When compared".to_owned(),
            classname: "suite".to_owned(),
            time: None,
            status: CaseStatus::Failed(Failure::from_message(
                "expected 1 < 2 && 3 > 2",
            )),
        });

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert!(xml.contains("expected 1 &lt; 2 &amp;&amp; 3 &gt; 2"));
    }

    #[test]
    fn fractional_time_renders_in_plain_decimal_notation() {
        let mut suite = TestSuite::new("suite");
        suite.counts.tests = 1;
        suite.cases.push(TestCase {
            name: "Given a fast step".to_owned(),
            classname: "suite".to_owned(),
            time: Some(0.000_000_001),
            status: CaseStatus::Passed,
        });

        let options =
            JunitOptions { indent: None, declaration: false, ..Default::default() };
        let xml = render(&options, &document_with(suite));

        assert!(xml.contains("time=\"0.000000001\""));
    }
}
