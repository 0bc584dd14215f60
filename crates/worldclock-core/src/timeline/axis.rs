//! Hour-axis labels printed under the timeline bars.

use super::bar::TimelineMode;

/// Hours that get a label.
pub const AXIS_HOURS: [u32; 5] = [0, 6, 12, 18, 24];

/// Label text for `hour`: `6` in individual mode, `06:00` in shared mode.
/// Hour 24 is shown as `24` or `00:00`.
pub fn axis_label(hour: u32, mode: TimelineMode) -> String {
    match mode {
        TimelineMode::Individual => hour.to_string(),
        TimelineMode::Shared => format!("{:02}:00", hour % 24),
    }
}

/// First column (1-based, inside the opening bracket) for a label of
/// `label_len` characters centered on `hour`.
///
/// The label is pulled back inside the bracketed region when centering
/// would push it past either edge; for bars narrower than the label the
/// result can still fall outside `[1, width]`.
pub fn label_start(hour: u32, label_len: usize, width: usize) -> i64 {
    let width = width as i64;
    let len = label_len as i64;
    let center = i64::from(hour) * width / 24;

    let mut start = center - len / 2 + 1;
    if start < 1 {
        start = 1;
    }
    if start + len > width + 1 {
        start = width + 1 - len;
    }
    start
}

/// The label line for a bar of `width` cells, brackets included, so the
/// result is exactly `width + 2` characters. Characters that would land
/// outside the bar are dropped; a later label overwrites an earlier one.
pub fn hour_labels(width: usize, mode: TimelineMode) -> String {
    let mut line = vec![' '; width + 2];
    line[0] = '[';
    line[width + 1] = ']';

    for hour in AXIS_HOURS {
        let label = axis_label(hour, mode);
        let start = label_start(hour, label.chars().count(), width);
        for (offset, ch) in label.chars().enumerate() {
            let pos = start + offset as i64;
            if pos >= 1 && pos <= width as i64 {
                line[pos as usize] = ch;
            }
        }
    }

    line.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_labels_at_48() {
        let line = hour_labels(48, TimelineMode::Individual);
        assert_eq!(line.len(), 50);
        assert!(line.starts_with("[0"));
        assert!(line.ends_with("24]"));
        assert_eq!(&line[13..14], "6");
        assert_eq!(&line[24..26], "12");
        assert_eq!(&line[36..38], "18");
        assert_eq!(&line[47..49], "24");
    }

    #[test]
    fn shared_labels_at_48() {
        let line = hour_labels(48, TimelineMode::Shared);
        assert_eq!(line.len(), 50);
        assert_eq!(&line[1..6], "00:00");
        assert_eq!(&line[11..16], "06:00");
        assert_eq!(&line[23..28], "12:00");
        assert_eq!(&line[35..40], "18:00");
        assert_eq!(&line[44..49], "00:00");
        assert!(line.ends_with(']'));
    }

    #[test]
    fn individual_labels_at_24() {
        let line = hour_labels(24, TimelineMode::Individual);
        assert_eq!(line, "[0     6    12    18   24]");
    }

    #[test]
    fn degenerate_widths_keep_brackets() {
        assert_eq!(hour_labels(0, TimelineMode::Shared), "[]");
        let narrow = hour_labels(3, TimelineMode::Shared);
        assert_eq!(narrow.chars().count(), 5);
        assert!(narrow.starts_with('[') && narrow.ends_with(']'));
    }

    #[test]
    fn label_start_clamps_to_edges() {
        assert_eq!(label_start(0, 5, 48), 1);
        assert_eq!(label_start(24, 5, 48), 44);
        assert_eq!(label_start(12, 2, 48), 24);
    }

    #[test]
    fn shared_label_wraps_hour_24() {
        assert_eq!(axis_label(24, TimelineMode::Shared), "00:00");
        assert_eq!(axis_label(24, TimelineMode::Individual), "24");
    }
}
