//! Timeline rendering.
//!
//! This module provides:
//! - 24-hour occupancy bars per colleague, in individual or shared mode
//! - Bar width clamping for the available terminal space
//! - Hour-axis labels aligned with the bar cells

mod axis;
mod bar;

pub use axis::{axis_label, hour_labels, label_start, AXIS_HOURS};
pub use bar::{
    bar_width, bar_width_for_terminal, classify_hour, in_range, marker_index, render_bar,
    render_rows, represented_hour, Cell, CellClass, TimelineBar, TimelineMode, TimelineRow,
    IDEAL_BAR_WIDTH, MIN_BAR_WIDTH, NAME_FIELD_WIDTH, RESERVED_COLUMNS, TIME_FIELD_WIDTH,
};
