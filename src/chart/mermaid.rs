// src/chart/mermaid.rs

use crate::chart::ChartOptions;
use crate::dag::TASK_DURATION_DAYS;
use crate::lanes::{LaneGroup, SequencedEntry};

/// Mermaid `dateFormat` matching how start dates are written below.
const MERMAID_DATE_FORMAT: &str = "YYYY-MM-DD";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render lanes as a Mermaid `gantt` chart.
///
/// One section per lane, one bar per task. No trailing newline.
pub fn render(lanes: &[LaneGroup], options: &ChartOptions) -> String {
    let mut lines = vec![
        "gantt".to_string(),
        format!("    title {}", options.title),
        format!("    dateFormat  {MERMAID_DATE_FORMAT}"),
        format!("    axisFormat {}", options.axis_format),
    ];

    for group in lanes.iter().filter(|g| !g.entries.is_empty()) {
        lines.push(String::new());
        lines.push(format!("    section {}", group.lane.label()));
        lines.extend(group.entries.iter().map(task_line));
    }

    lines.join("\n")
}

fn task_line(entry: &SequencedEntry) -> String {
    format!(
        "    {id} ({assignee}) :{id}, {start}, {TASK_DURATION_DAYS}d",
        id = entry.task_id,
        assignee = entry.assignee,
        start = entry.start_date.format(DATE_FORMAT),
    )
}
