//! Section measurements.
//!
//! Every category renders as one section: an optional gap row, a label row
//! and a grid of emoji rows. Visible sections tile the content area with no
//! holes, so `top` of one section equals `top + height` of the previous one.
//! Hidden sections keep their last measurement.

use std::collections::HashMap;

/// Default emojis per grid row.
pub const DEFAULT_PER_LINE: usize = 9;

/// Grid geometry shared by every section of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub per_line: usize,
    pub label_rows: u32,
    /// Gap above every visible section except the first one.
    pub gap_rows: u32,
}

impl GridMetrics {
    pub fn new(per_line: usize) -> Self {
        Self {
            per_line: per_line.max(1),
            label_rows: 1,
            gap_rows: 1,
        }
    }

    /// Number of grid rows for `len` emojis.
    ///
    /// Search always keeps one row for its "not found" line.
    pub fn rows_for(&self, len: usize, is_search: bool) -> u32 {
        let rows = len.div_ceil(self.per_line) as u32;
        if is_search { rows.max(1) } else { rows }
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_PER_LINE)
    }
}

/// Measured vertical extent of one section, in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Distance from the content top to the start of the section (gap included).
    pub top: u32,
    pub height: u32,
    pub padding: u32,
    pub label_rows: u32,
    pub rows: u32,
    /// Grid rows below the label.
    pub max_margin: u32,
}

impl Measurement {
    pub fn label_row(&self) -> u32 {
        self.top + self.padding
    }

    pub fn grid_start(&self) -> u32 {
        self.label_row() + self.label_rows
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn contains(&self, row: u32) -> bool {
        self.top <= row && row < self.bottom()
    }
}

/// Input for one section of a layout pass.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec<'a> {
    pub id: &'a str,
    pub len: usize,
    pub visible: bool,
    pub is_search: bool,
}

/// Measures a section in isolation (top is filled in by the layout pass).
pub fn measure(spec: &SectionSpec<'_>, leading: bool, metrics: &GridMetrics) -> Measurement {
    let padding = if leading { 0 } else { metrics.gap_rows };
    let rows = metrics.rows_for(spec.len, spec.is_search);
    Measurement {
        top: 0,
        height: padding + metrics.label_rows + rows,
        padding,
        label_rows: metrics.label_rows,
        rows,
        max_margin: rows,
    }
}

/// Measurements keyed by category id.
#[derive(Debug, Clone, Default)]
pub struct MeasurementArena {
    entries: HashMap<String, Measurement>,
    scroll_height: u32,
}

impl MeasurementArena {
    pub fn get(&self, id: &str) -> Option<&Measurement> {
        self.entries.get(id)
    }

    /// Total content height of the last layout pass.
    pub fn scroll_height(&self) -> u32 {
        self.scroll_height
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Measures one section without moving any other.
    ///
    /// Returns the previous and new `max_margin` so the caller can decide
    /// whether a full layout pass is needed.
    pub fn remeasure(
        &mut self,
        spec: &SectionSpec<'_>,
        metrics: &GridMetrics,
    ) -> (Option<u32>, u32) {
        let previous = self.entries.get(spec.id).copied();
        let leading = previous.is_some_and(|m| m.padding == 0);
        let mut measurement = measure(spec, leading, metrics);
        if let Some(previous) = previous {
            measurement.top = previous.top;
        }
        self.entries.insert(spec.id.to_string(), measurement);
        (previous.map(|m| m.max_margin), measurement.max_margin)
    }

    /// Lays out every visible section top to bottom.
    ///
    /// Returns the new scroll height.
    pub fn layout<'a>(
        &mut self,
        specs: impl IntoIterator<Item = SectionSpec<'a>>,
        metrics: &GridMetrics,
    ) -> u32 {
        let mut offset = 0;
        let mut leading = true;
        for spec in specs {
            if !spec.visible {
                continue;
            }
            let mut measurement = measure(&spec, leading, metrics);
            measurement.top = offset;
            offset += measurement.height;
            leading = false;
            self.entries.insert(spec.id.to_string(), measurement);
        }
        self.scroll_height = offset;
        offset
    }
}
