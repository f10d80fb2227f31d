//! `.ts` document reader built on quick-xml.
//!
//! The reader walks the event stream once. Whitespace between structural
//! elements is dropped, text inside `<source>`, `<translation>` and the
//! comment elements is kept verbatim. Any XML error, a missing `<TS>` root,
//! a context without `<name>`, a message without `<source>` or an unknown
//! translation type aborts the load.

use std::{fs, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::catalog::{Catalog, Context, Location, Message, Translation, TranslationStatus};

/// Read and parse a `.ts` file.
pub fn parse_file(path: &Path) -> Result<Catalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read TS file: {:?}", path))?;
    let catalog =
        parse_str(&content).with_context(|| format!("Failed to parse TS file: {:?}", path))?;
    tracing::debug!(
        path = %path.display(),
        contexts = catalog.contexts.len(),
        messages = catalog.message_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse a `.ts` document held in memory.
pub fn parse_str(content: &str) -> Result<Catalog> {
    let mut parser = TsParser::new(content);
    match parser.parse_document() {
        Ok(catalog) => Ok(catalog),
        Err(err) => bail!("line {}: {:#}", parser.current_line(), err),
    }
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            line_index: build_line_index(content),
        }
    }

    fn position(&self) -> usize {
        self.reader.buffer_position() as usize
    }

    fn current_line(&self) -> usize {
        offset_to_line(&self.line_index, self.position())
    }

    fn next(&mut self) -> Result<Event<'a>> {
        self.reader
            .read_event()
            .map_err(|e| anyhow!("malformed XML: {}", e))
    }

    fn skip(&mut self, start: &BytesStart<'a>) -> Result<()> {
        self.reader
            .read_to_end(start.name())
            .map_err(|e| anyhow!("malformed XML: {}", e))?;
        Ok(())
    }

    fn parse_document(&mut self) -> Result<Catalog> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let mut catalog = catalog_from_attrs(&e)?;
                    self.parse_ts_body(&mut catalog)?;
                    return Ok(catalog);
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    return catalog_from_attrs(&e);
                }
                Event::Start(e) | Event::Empty(e) => {
                    bail!(
                        "expected <TS> root element, found <{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )
                }
                Event::Eof => bail!("missing <TS> root element"),
                _ => {}
            }
        }
    }

    fn parse_ts_body(&mut self, catalog: &mut Catalog) -> Result<()> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    catalog.contexts.push(context);
                }
                Event::Empty(e) if e.name().as_ref() == b"context" => {
                    bail!("<context> without <name>")
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(_) => return Ok(()),
                Event::Eof => bail!("unexpected end of file inside <TS>"),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context> {
        let mut name: Option<String> = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            let start_pos = self.position();
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text(b"name")?),
                    b"comment" => comment = Some(self.read_text(b"comment")?),
                    b"message" => {
                        let ts_line = offset_to_line(&self.line_index, start_pos);
                        messages.push(self.parse_message(&e, ts_line)?);
                    }
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    b"message" => bail!("<message> without <source>"),
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => bail!("unexpected end of file inside <context>"),
                _ => {}
            }
        }

        let name = name.ok_or_else(|| anyhow!("<context> without <name>"))?;
        Ok(Context {
            name,
            comment,
            messages,
        })
    }

    fn parse_message(&mut self, start: &BytesStart<'a>, ts_line: usize) -> Result<Message> {
        let mut message = Message {
            ts_line,
            ..Default::default()
        };
        for (key, value) in attributes(start)? {
            match key.as_str() {
                "id" => message.id = Some(value),
                "numerus" => message.numerus = value == "yes",
                _ => {}
            }
        }

        let mut source: Option<String> = None;
        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => source = Some(self.read_text(b"source")?),
                    b"oldsource" => message.old_source = Some(self.read_text(b"oldsource")?),
                    b"comment" => message.comment = Some(self.read_text(b"comment")?),
                    b"oldcomment" => message.old_comment = Some(self.read_text(b"oldcomment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text(b"extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text(b"translatorcomment")?)
                    }
                    b"translation" => {
                        message.status = status_from_attrs(&e)?;
                        message.translation = if message.numerus {
                            Translation::Numerus(self.read_numerus_forms()?)
                        } else {
                            Translation::Text(self.read_text(b"translation")?)
                        };
                    }
                    b"location" => {
                        message.locations.push(location_from_attrs(&e)?);
                        self.skip(&e)?;
                    }
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => message.locations.push(location_from_attrs(&e)?),
                    b"source" => source = Some(String::new()),
                    b"comment" => message.comment = Some(String::new()),
                    b"translation" => {
                        message.status = status_from_attrs(&e)?;
                        message.translation = if message.numerus {
                            Translation::Numerus(Vec::new())
                        } else {
                            Translation::default()
                        };
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => bail!("unexpected end of file inside <message>"),
                _ => {}
            }
        }

        message.source = source.ok_or_else(|| anyhow!("<message> without <source>"))?;
        Ok(message)
    }

    fn read_numerus_forms(&mut self) -> Result<Vec<String>> {
        let mut forms = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text(b"numerusform")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(String::new());
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(_) => return Ok(forms),
                Event::Eof => bail!("unexpected end of file inside <translation>"),
                _ => {}
            }
        }
    }

    /// Collect character data up to the closing tag `end`.
    fn read_text(&mut self, end: &[u8]) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|e| anyhow!("malformed XML: {}", e))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => {
                    let raw = std::str::from_utf8(&c).context("CDATA is not valid UTF-8")?;
                    text.push_str(raw);
                }
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push(byte_from_attrs(&e)?);
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(e) if e.name().as_ref() == end => return Ok(text),
                Event::End(e) => bail!(
                    "unexpected </{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                ),
                Event::Eof => bail!(
                    "unexpected end of file inside <{}>",
                    String::from_utf8_lossy(end)
                ),
                _ => {}
            }
        }
    }
}

fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    e.attributes()
        .map(|attr| {
            let attr = attr.map_err(|err| anyhow!("malformed attribute: {}", err))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| anyhow!("malformed attribute value: {}", err))?
                .into_owned();
            Ok((key, value))
        })
        .collect()
}

fn catalog_from_attrs(e: &BytesStart<'_>) -> Result<Catalog> {
    let mut catalog = Catalog {
        version: String::new(),
        ..Default::default()
    };
    for (key, value) in attributes(e)? {
        match key.as_str() {
            "version" => catalog.version = value,
            "language" => catalog.language = Some(value),
            "sourcelanguage" => catalog.source_language = Some(value),
            _ => {}
        }
    }
    Ok(catalog)
}

fn status_from_attrs(e: &BytesStart<'_>) -> Result<TranslationStatus> {
    attributes(e)?
        .into_iter()
        .find(|(key, _)| key == "type")
        .map_or(Ok(TranslationStatus::Finished), |(_, value)| value.parse())
}

fn location_from_attrs(e: &BytesStart<'_>) -> Result<Location> {
    let mut location = Location::default();
    for (key, value) in attributes(e)? {
        match key.as_str() {
            "filename" => location.filename = Some(value),
            "line" => location.line = Some(value.parse()?),
            _ => {}
        }
    }
    Ok(location)
}

/// Decode `<byte value="x1b"/>`, lupdate's encoding for control characters.
fn byte_from_attrs(e: &BytesStart<'_>) -> Result<char> {
    let value = attributes(e)?
        .into_iter()
        .find(|(key, _)| key == "value")
        .map(|(_, value)| value)
        .ok_or_else(|| anyhow!("<byte> without value"))?;
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| anyhow!("invalid <byte> value \"{}\"", value))?;
    char::from_u32(code).ok_or_else(|| anyhow!("invalid <byte> value \"{}\"", value))
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number of a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
