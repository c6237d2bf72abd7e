//! Export of the author table to JATS4R XML and JSON

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

use crate::error::{CreditError, Result};
use crate::role::{CREDIT_VOCAB, CREDIT_VOCAB_IDENTIFIER};
use crate::table::{AuthorRow, AuthorTable, Record};

/// Suggested filename of the XML download
pub const XML_FILENAME: &str = "credit_result.xml";

/// Suggested filename of the JSON download
pub const JSON_FILENAME: &str = "credit_result.json";

/// DOCTYPE body of exported documents
pub const JATS_DOCTYPE: &str = r#"article PUBLIC "-//NLM//DTD JATS (Z39.96) Journal Archiving and Interchange DTD with MathML3 v1.2 20190208//EN" "JATS-archivearticle1-mathml3.dtd""#;

pub const JATS_DTD_VERSION: &str = "1.2";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const ALI_NAMESPACE: &str = "http://www.niso.org/schemas/ali/1.0/";

const CC_BY_LICENSE: &str = "http://creativecommons.org/licenses/by/4.0/";

/// A serialized table ready to be offered as a download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn xml(table: &AuthorTable) -> Result<Self> {
        Ok(Self {
            filename: XML_FILENAME.to_string(),
            media_type: "application/xml",
            bytes: export_jats_xml(table)?,
        })
    }

    pub fn json(table: &AuthorTable) -> Result<Self> {
        Ok(Self {
            filename: JSON_FILENAME.to_string(),
            media_type: "application/json",
            bytes: export_json(table)?,
        })
    }
}

/// Serialize the table as rows without the position column, indented by four
/// spaces.
pub fn export_json(table: &AuthorTable) -> Result<Vec<u8>> {
    let rows: Vec<Record> = table.rows().iter().map(|row| row.to_record(false)).collect();

    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    rows.serialize(&mut serializer)
        .map_err(|e| CreditError::Export(e.to_string()))?;

    tracing::debug!("Exported {} authors as JSON ({} bytes)", rows.len(), bytes.len());
    Ok(bytes)
}

/// Serialize the table as a JATS4R article skeleton with one `contrib` per
/// author and one `role` per contribution.
pub fn export_jats_xml(table: &AuthorTable) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_article(&mut writer, table).map_err(|e| CreditError::Export(e.to_string()))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    tracing::debug!("Exported {} authors as JATS XML ({} bytes)", table.len(), bytes.len());
    Ok(bytes)
}

type XmlWriter = Writer<Vec<u8>>;

fn write_article(w: &mut XmlWriter, table: &AuthorTable) -> quick_xml::Result<()> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.write_event(Event::DocType(BytesText::from_escaped(JATS_DOCTYPE)))?;

    let article = BytesStart::new("article").with_attributes([
        ("article-type", "other"),
        ("dtd-version", JATS_DTD_VERSION),
        ("xmlns:xlink", XLINK_NAMESPACE),
        ("xmlns:ali", ALI_NAMESPACE),
    ]);
    w.write_event(Event::Start(article))?;
    open(w, "front")?;
    open(w, "article-meta")?;

    open(w, "contrib-group")?;
    for row in table.rows() {
        write_contrib(w, row)?;
    }
    close(w, "contrib-group")?;

    write_permissions(w)?;

    close(w, "article-meta")?;
    close(w, "front")?;
    w.write_event(Event::Empty(BytesStart::new("body")))?;
    close(w, "article")
}

fn write_contrib(w: &mut XmlWriter, row: &AuthorRow) -> quick_xml::Result<()> {
    w.write_event(Event::Start(
        BytesStart::new("contrib").with_attributes([("contrib-type", "author")]),
    ))?;

    open(w, "string-name")?;
    text_element(w, "given-names", &[], &row.given_names())?;
    text_element(w, "surname", &[], &row.last_name)?;
    close(w, "string-name")?;

    for role in row.roles.active() {
        text_element(
            w,
            "role",
            &[
                ("vocab", CREDIT_VOCAB),
                ("vocab-identifier", CREDIT_VOCAB_IDENTIFIER),
                ("vocab-term", role.as_str()),
                ("vocab-term-identifier", role.term_identifier()),
            ],
            role.as_str(),
        )?;
    }

    close(w, "contrib")
}

/// Static copyright and CC-BY-4.0 licence block
fn write_permissions(w: &mut XmlWriter) -> quick_xml::Result<()> {
    open(w, "permissions")?;
    text_element(w, "copyright-statement", &[], "© 2019 JATS4R")?;
    text_element(w, "copyright-year", &[], "2019")?;
    text_element(w, "copyright-holder", &[], "JATS4R")?;

    open(w, "license")?;
    text_element(w, "ali:license_ref", &[], CC_BY_LICENSE)?;

    // mixed content: text, ext-link, tail text
    open(w, "license-p")?;
    w.write_event(Event::Text(BytesText::new(
        "This is an open access article distributed under the terms of the ",
    )))?;
    text_element(
        w,
        "ext-link",
        &[("xlink:href", CC_BY_LICENSE), ("ext-link-type", "uri")],
        "Creative Commons Attribution License",
    )?;
    w.write_event(Event::Text(BytesText::new(
        ", which permits unrestricted use, distribution, and reproduction in any medium, \
         provided the original author and source are credited.",
    )))?;
    close(w, "license-p")?;

    close(w, "license")?;
    close(w, "permissions")
}

fn open(w: &mut XmlWriter, name: &str) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))
}

fn close(w: &mut XmlWriter, name: &str) -> quick_xml::Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))
}

fn text_element(
    w: &mut XmlWriter,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> quick_xml::Result<()> {
    let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
    w.write_event(Event::Start(start))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    close(w, name)
}
