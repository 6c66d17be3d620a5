//! Line-oriented CSV encoding of a [`Registry`].
//!
//! One header line, then `<tag>,<label>,<true|false>` per device. Labels are
//! written verbatim: a label containing a comma produces a line that will not
//! decode back.

use crate::domain::model::{Device, DeviceKind};
use crate::domain::registry::Registry;
use crate::utils::error::{Result, StoreError};
use std::borrow::Cow;

pub const HEADER: [&str; 3] = ["Tipo", "Modelo/Marca", "Estado"];

const FIELD_COUNT: usize = 3;

/// A line the decoder could not turn into a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct Decoded {
    pub registry: Registry,
    pub skipped: Vec<SkippedRecord>,
}

pub fn encode(registry: &Registry) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for device in registry {
        let (kind, label) = device.kind_label();
        let state = if device.is_on() { "true" } else { "false" };
        writer.write_record([kind.tag(), label, state])?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::IoError(e.into_error()))
}

pub fn decode(data: &[u8]) -> Result<Decoded> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut decoded = Decoded::default();
    let mut record = csv::ByteRecord::new();
    let mut lines = LineCounter::new(data);
    while reader.read_byte_record(&mut record)? {
        let line = record
            .position()
            .map_or(0, |pos| lines.line_at(pos.byte()));
        match parse_record(&record) {
            Ok(device) => decoded.registry.push(device),
            Err(_) if line == 1 && is_header(&record) => {}
            Err(reason) => decoded.skipped.push(SkippedRecord { line, reason }),
        }
    }

    tracing::debug!(
        "Decoded {} devices, skipped {} lines",
        decoded.registry.len(),
        decoded.skipped.len()
    );
    Ok(decoded)
}

/// Maps record offsets to 1-based physical line numbers, counting `\n`,
/// `\r\n` and bare `\r` as one line break each.
struct LineCounter<'d> {
    data: &'d [u8],
    offset: usize,
    line: u64,
}

impl<'d> LineCounter<'d> {
    fn new(data: &'d [u8]) -> Self {
        Self {
            data,
            offset: 0,
            line: 1,
        }
    }

    /// Offsets must be passed in increasing order.
    fn line_at(&mut self, byte: u64) -> u64 {
        let len = self.data.len();
        let mut target = usize::try_from(byte).map_or(len, |b| b.min(len));
        // A record's position is taken before the reader skips blank lines.
        while target < len && matches!(self.data[target], b'\r' | b'\n') {
            target += 1;
        }

        while self.offset < target {
            match self.data[self.offset] {
                b'\n' => self.line += 1,
                b'\r' if self.data.get(self.offset + 1) != Some(&b'\n') => self.line += 1,
                _ => {}
            }
            self.offset += 1;
        }
        self.line
    }
}

fn is_header(record: &csv::ByteRecord) -> bool {
    record.iter().eq(HEADER.iter().map(|field| field.as_bytes()))
}

fn parse_record(record: &csv::ByteRecord) -> std::result::Result<Device, String> {
    let fields: Vec<&[u8]> = record.iter().collect();
    // Trailing empty fields do not count, so "a,b," has two fields.
    let field_count = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    if field_count != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT, field_count
        ));
    }

    let tag = text_field(&fields, 0);
    let kind = DeviceKind::from_tag(&tag).ok_or_else(|| format!("unknown device tag '{}'", tag))?;

    let mut device = Device::new(kind, text_field(&fields, 1));
    if text_field(&fields, 2).eq_ignore_ascii_case("true") {
        device.turn_on();
    }
    Ok(device)
}

/// Invalid UTF-8 sequences become U+FFFD rather than rejecting the line.
fn text_field<'r>(fields: &[&'r [u8]], index: usize) -> Cow<'r, str> {
    String::from_utf8_lossy(fields.get(index).copied().unwrap_or_default())
}
