use std::fs;
use std::io;
use std::path::Path;

use blockmap_blocks::MappingTable;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::{IoError, Result};

/// Pretty JSON with two-space indentation, keys in table order.
///
/// Output is pure ASCII: characters outside it are written as `\uXXXX`
/// escapes (surrogate pairs above U+FFFF), the same bytes Python's
/// `json.dump` produces with its default `ensure_ascii`.
pub fn mapping_json(table: &MappingTable) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter::default());
    table.serialize(&mut ser).map_err(IoError::Serialize)?;
    String::from_utf8(buf)
        .map_err(|e| IoError::Serialize(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Serialize the whole table first, then replace `path` in one write.
pub fn write_mapping(path: &Path, table: &MappingTable) -> Result<()> {
    let json = mapping_json(table)?;
    fs::write(path, json.as_bytes()).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} byte(s) to {:?}", json.len(), path);
    Ok(())
}

// Pretty layout from `PrettyFormatter`, plus `\u` escapes for non-ASCII text.
#[derive(Default)]
struct AsciiFormatter {
    pretty: PrettyFormatter<'static>,
}

impl Formatter for AsciiFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.begin_array(w)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.end_array(w)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(w, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(w)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.begin_object(w)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.end_object(w)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(w, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(w)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(w)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        w: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            w.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(w, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        w.write_all(&fragment.as_bytes()[start..])
    }
}
