//! `.ts` document writer.
//!
//! Output follows the layout lupdate produces, so a catalog that was
//! written by lupdate and parsed here is written back unchanged.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use super::catalog::{Catalog, Context, Message, Translation};

const MESSAGE_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";
const FORM_INDENT: &str = "            ";

/// Serialize a catalog to a string.
pub fn to_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    write_catalog(catalog, &mut out);
    out
}

/// Serialize and write a catalog to `path`.
pub fn write_file(catalog: &Catalog, path: &Path) -> Result<()> {
    fs::write(path, to_string(catalog))
        .with_context(|| format!("Failed to write TS file: {:?}", path))?;
    tracing::debug!(path = %path.display(), "wrote catalog");
    Ok(())
}

/// Append the serialized catalog to `out`.
pub fn write_catalog(catalog: &Catalog, out: &mut String) {
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attr(out, "version", &catalog.version);
    if let Some(language) = &catalog.language {
        push_attr(out, "language", language);
    }
    if let Some(source_language) = &catalog.source_language {
        push_attr(out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        write_context(context, out);
    }

    out.push_str("</TS>\n");
}

fn write_context(context: &Context, out: &mut String) {
    out.push_str("<context>\n");
    push_element(out, MESSAGE_INDENT, "name", &context.name);
    if let Some(comment) = &context.comment {
        push_element(out, MESSAGE_INDENT, "comment", comment);
    }
    for message in &context.messages {
        write_message(message, out);
    }
    out.push_str("</context>\n");
}

fn write_message(message: &Message, out: &mut String) {
    out.push_str(MESSAGE_INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        push_attr(out, "id", id);
    }
    if message.numerus {
        push_attr(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &message.locations {
        out.push_str(FIELD_INDENT);
        out.push_str("<location");
        if let Some(filename) = &location.filename {
            push_attr(out, "filename", filename);
        }
        if let Some(line) = location.line {
            push_attr(out, "line", &line.to_string());
        }
        out.push_str("/>\n");
    }

    push_element(out, FIELD_INDENT, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            push_element(out, FIELD_INDENT, tag, value);
        }
    }

    out.push_str(FIELD_INDENT);
    out.push_str("<translation");
    if let Some(kind) = message.status.as_attr() {
        push_attr(out, "type", kind);
    }
    out.push('>');
    match &message.translation {
        Translation::Text(text) => push_text(out, text),
        Translation::Numerus(forms) => {
            out.push('\n');
            for form in forms {
                push_element(out, FORM_INDENT, "numerusform", form);
            }
            out.push_str(FIELD_INDENT);
        }
    }
    out.push_str("</translation>\n");

    out.push_str(MESSAGE_INDENT);
    out.push_str("</message>\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape(value));
}

fn push_element(out: &mut String, indent: &str, tag: &str, text: &str) {
    let _ = write!(out, "{}<{}>", indent, tag);
    push_text(out, text);
    let _ = writeln!(out, "</{}>", tag);
}

/// Escape character data. Control characters that XML 1.0 cannot carry are
/// written as `<byte value="xNN"/>`.
fn push_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find(is_unrepresentable) {
        out.push_str(&escape(&rest[..pos]));
        let mut chars = rest[pos..].chars();
        if let Some(c) = chars.next() {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", u32::from(c));
        }
        rest = chars.as_str();
    }
    out.push_str(&escape(rest));
}

fn is_unrepresentable(c: char) -> bool {
    u32::from(c) < 0x20 && !matches!(c, '\n' | '\r' | '\t')
}
