//! The stateful table writer: schema tracking, header emission, row output.
//!
//! # Per-invocation flow
//!
//! ```text
//! write():
//!   ① Gate    — non-elected ranks return immediately, no side effects.
//!   ② Sample  — source.collect(), flatten, keep scalar/text cells.
//!   ③ Compare — sampled key set vs schema key set (order-insensitive).
//!   ④ Header  — on any difference, rebuild the schema wholesale in the
//!               new mapping's order and write one header line.
//!   ⑤ Row     — format every value at its column's recorded width.
//!   ⑥ Flush   — after the data row only.
//! ```
//!
//! The schema is a memoized value keyed by the current key set: it is
//! replaced in full whenever the set drifts and reused untouched
//! otherwise, so the header line and every following data row agree on
//! column order and widths.

use rustc_hash::{FxHashMap, FxHashSet};

use sl_core::{AlwaysWrite, Category, Cell, Namespace, QuantitySource, TextSink, WriteGate};

use crate::format::{Align, Formatter};
use crate::header::derive_header;
use crate::{OutputError, OutputResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Writer configuration, immutable for the writer's lifetime.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Separator between namespace segments in derived headers.
    pub header_sep: String,

    /// Separator between columns in every output line.  Not escaped when
    /// it appears inside text values; pick a delimiter that cannot occur
    /// in logged strings if the output must parse unambiguously.
    pub delimiter: String,

    /// Trade precision for bounded, readable decimal counts.
    pub pretty: bool,

    /// Maximum significant digits in precision-first (non-pretty) mode.
    pub max_precision: usize,

    /// Width floor for every column.  `None` derives
    /// `max(10, max_precision + 6)`.
    pub min_column_width: Option<usize>,

    /// Cap on derived header length.  `None` keeps full paths.
    pub max_header_len: Option<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header_sep: ".".to_owned(),
            delimiter: " ".to_owned(),
            pretty: true,
            max_precision: 10,
            min_column_width: None,
            max_header_len: None,
        }
    }
}

impl TableConfig {
    /// The effective per-column width floor.
    pub fn column_floor(&self) -> usize {
        self.min_column_width
            .unwrap_or_else(|| self.max_precision.saturating_add(6).max(10))
    }
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// One schema entry: a column key and its fixed character width.
///
/// Widths are fixed when the schema is built — `max(header length, floor)`
/// — and reused for every data row until the next rebuild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key:   Namespace,
    pub width: usize,
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`TableWriter`].
///
/// # Required inputs
///
/// - `S: QuantitySource` — sampled once per invocation; must advertise
///   the scalar category.
/// - `W: TextSink` — must report a writable mode.
///
/// # Optional knobs (have defaults)
///
/// | Method                 | Default                        |
/// |------------------------|--------------------------------|
/// | `.header_sep(s)`       | `"."`                          |
/// | `.delimiter(s)`        | `" "`                          |
/// | `.pretty(b)`           | `true`                         |
/// | `.max_precision(n)`    | `10`                           |
/// | `.min_column_width(n)` | derived `max(10, precision+6)` |
/// | `.max_header_len(n)`   | unlimited                      |
/// | `.pad(c)` `.align(a)`  | `' '`, centered                |
/// | `.max_decimals(n)`     | `5`                            |
/// | `.gate(g)`             | [`AlwaysWrite`]                |
pub struct TableBuilder<S, W, G = AlwaysWrite> {
    source:       S,
    sink:         W,
    gate:         G,
    config:       TableConfig,
    pad:          char,
    align:        Align,
    max_decimals: usize,
}

impl<S: QuantitySource, W: TextSink> TableBuilder<S, W, AlwaysWrite> {
    pub fn new(source: S, sink: W) -> Self {
        Self {
            source,
            sink,
            gate: AlwaysWrite,
            config: TableConfig::default(),
            pad: ' ',
            align: Align::Center,
            max_decimals: 5,
        }
    }
}

impl<S: QuantitySource, W: TextSink, G: WriteGate> TableBuilder<S, W, G> {
    /// Replace the whole configuration at once.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn header_sep(mut self, sep: impl Into<String>) -> Self {
        self.config.header_sep = sep.into();
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn max_precision(mut self, digits: usize) -> Self {
        self.config.max_precision = digits;
        self
    }

    pub fn min_column_width(mut self, width: usize) -> Self {
        self.config.min_column_width = Some(width);
        self
    }

    pub fn max_header_len(mut self, len: usize) -> Self {
        self.config.max_header_len = Some(len);
        self
    }

    pub fn pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn max_decimals(mut self, max_decimals: usize) -> Self {
        self.max_decimals = max_decimals;
        self
    }

    /// Replace the write gate, e.g. with a
    /// [`RankGate`][sl_core::RankGate] on multi-process runs.
    pub fn gate<G2: WriteGate>(self, gate: G2) -> TableBuilder<S, W, G2> {
        TableBuilder {
            source:       self.source,
            sink:         self.sink,
            gate,
            config:       self.config,
            pad:          self.pad,
            align:        self.align,
            max_decimals: self.max_decimals,
        }
    }

    /// Validate the collaborators and construct the writer.
    ///
    /// Both checks happen here, once, so a misconfigured writer fails
    /// before the first scheduled sample instead of at first write.
    ///
    /// # Errors
    /// - [`OutputError::SinkNotWritable`] — the sink's mode indicator is
    ///   false.
    /// - [`OutputError::ScalarsUnsupported`] — the source does not
    ///   advertise [`Category::Scalar`].
    pub fn build(self) -> OutputResult<TableWriter<S, W, G>> {
        if !self.sink.writable() {
            return Err(OutputError::SinkNotWritable);
        }
        if !self.source.categories().contains(Category::Scalar) {
            return Err(OutputError::ScalarsUnsupported);
        }

        let fmt = Formatter::new(self.config.pretty, self.config.max_precision)
            .with_pad(self.pad)
            .with_align(self.align)
            .with_max_decimals(self.max_decimals);

        Ok(TableWriter {
            config: self.config,
            fmt,
            source: self.source,
            sink: self.sink,
            gate: self.gate,
            schema: Vec::new(),
        })
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

/// Streaming tabular writer.
///
/// Holds the current column schema between invocations and re-emits a
/// header whenever the sampled key set no longer matches it — including
/// the first invocation, where the schema is still empty.  Strictly
/// append-only and single-threaded: the caller serializes invocations,
/// and each runs to completion before returning.
///
/// Create via [`TableBuilder`].
#[derive(Debug)]
pub struct TableWriter<S: QuantitySource, W: TextSink, G: WriteGate = AlwaysWrite> {
    config: TableConfig,
    fmt:    Formatter,
    source: S,
    sink:   W,
    gate:   G,
    /// Current column schema in row-layout order; empty until the first
    /// elected invocation.
    schema: Vec<Column>,
}

impl<S: QuantitySource, W: TextSink, G: WriteGate> TableWriter<S, W, G> {
    /// The current column schema, in row-layout order.
    pub fn schema(&self) -> &[Column] {
        &self.schema
    }

    /// The writer configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The quantity source, e.g. to advance it between samples.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The sink, e.g. to inspect a captured buffer.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Unwrap the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Sample the source and append one data row, preceded by a header
    /// line whenever the logged key set changed since the previous
    /// invocation.
    ///
    /// # Errors
    /// Sink write/flush failures propagate unretried.
    pub fn write(&mut self) -> OutputResult<()> {
        if !self.gate.elected() {
            return Ok(());
        }

        let tree = self.source.collect();
        let flat = tree.flatten();
        let data: Vec<(&Namespace, Cell<'_>)> = flat
            .iter()
            .filter_map(|(key, value)| value.as_cell().map(|cell| (key, cell)))
            .collect();

        if self.schema_stale(&data) {
            self.rebuild_schema(&data)?;
        }
        self.write_row(&data)?;

        // Flush now so the row is durably visible before the next sample,
        // independent of sink-internal buffering.
        self.sink.flush()?;
        Ok(())
    }

    /// Order-insensitive comparison of the sampled key set to the
    /// schema's.
    fn schema_stale(&self, data: &[(&Namespace, Cell<'_>)]) -> bool {
        if data.len() != self.schema.len() {
            return true;
        }
        let current: FxHashSet<&Namespace> = data.iter().map(|(key, _)| *key).collect();
        self.schema.iter().any(|column| !current.contains(&column.key))
    }

    /// Replace the schema wholesale and write the header line.
    ///
    /// Column order follows the new mapping; widths are fixed here —
    /// `max(header length, floor)` — and reused for every following data
    /// row until the next rebuild.  Partial updates are never attempted:
    /// they risk header/row width mismatches.
    fn rebuild_schema(&mut self, data: &[(&Namespace, Cell<'_>)]) -> OutputResult<()> {
        let floor = self.config.column_floor();
        let mut cells = Vec::with_capacity(data.len());

        self.schema.clear();
        for (key, _) in data {
            let header = derive_header(key, &self.config.header_sep, self.config.max_header_len);
            let width = header.chars().count().max(floor);
            cells.push(self.fmt.format_text(&header, width));
            self.schema.push(Column { key: (*key).clone(), width });
        }

        self.sink.write_str(&cells.join(&self.config.delimiter))?;
        self.sink.write_str("\n")?;
        Ok(())
    }

    /// Write one data row in schema order.
    fn write_row(&mut self, data: &[(&Namespace, Cell<'_>)]) -> OutputResult<()> {
        let by_key: FxHashMap<&Namespace, Cell<'_>> = data.iter().copied().collect();

        let mut cells = Vec::with_capacity(self.schema.len());
        for column in &self.schema {
            let cell = by_key
                .get(&column.key)
                .copied()
                .ok_or_else(|| OutputError::MissingColumn(column.key.clone()))?;
            cells.push(self.fmt.format(cell, column.width));
        }

        self.sink.write_str(&cells.join(&self.config.delimiter))?;
        self.sink.write_str("\n")?;
        Ok(())
    }
}
