use std::collections::HashSet;

use ganttdag::dag::resolve;
use ganttdag::lanes::sequence;
use ganttdag::types::{Developer, Lane};
use ganttdag_test_utils::builders::TaskListBuilder;
use ganttdag_test_utils::{day, epoch};

#[test]
fn lane_of_maps_known_keys_and_defaults_to_shared() {
    assert_eq!(Lane::of("A"), Lane::Named(Developer::A));
    assert_eq!(Lane::of("B"), Lane::Named(Developer::B));
    assert_eq!(Lane::of("C"), Lane::Named(Developer::C));
    assert_eq!(Lane::of("All"), Lane::Shared);
    assert_eq!(Lane::of("a"), Lane::Shared);
    assert_eq!(Lane::of(""), Lane::Shared);
}

#[test]
fn presentation_order_puts_shared_last() {
    let mut lanes = vec![
        Lane::Shared,
        Lane::Named(Developer::C),
        Lane::Named(Developer::A),
        Lane::Named(Developer::B),
    ];
    lanes.sort();
    assert_eq!(lanes, Lane::PRESENTATION_ORDER.to_vec());
}

#[test]
fn equal_start_dates_keep_input_order() {
    let graph = TaskListBuilder::new()
        .task("T3", "A", &[])
        .task("T1", "A", &[])
        .task("T2", "A", &[])
        .graph();

    let schedule = resolve(&graph, epoch()).unwrap();
    let lanes = sequence(&schedule, &graph);

    assert_eq!(lanes.len(), 1);
    let ids: Vec<_> = lanes[0].entries.iter().map(|e| e.task_id.as_str()).collect();
    assert_eq!(ids, vec!["T3", "T1", "T2"]);
}

#[test]
fn entries_sorted_by_start_then_position() {
    let graph = TaskListBuilder::new()
        .task("late", "A", &["root"])
        .task("root", "A", &[])
        .task("also-root", "A", &[])
        .graph();

    let schedule = resolve(&graph, epoch()).unwrap();
    let lanes = sequence(&schedule, &graph);

    let entries: Vec<_> = lanes[0]
        .entries
        .iter()
        .map(|e| (e.task_id.as_str(), e.start_date))
        .collect();
    assert_eq!(
        entries,
        vec![("root", day(0)), ("also-root", day(0)), ("late", day(1))]
    );
}

#[test]
fn every_task_lands_in_exactly_one_lane() {
    let graph = TaskListBuilder::new()
        .task("1", "A", &[])
        .task("2", "B", &["1"])
        .task("3", "C", &["2"])
        .task("4", "All", &[])
        .task("5", "QA", &["4"])
        .task("6", "B", &[])
        .graph();

    let schedule = resolve(&graph, epoch()).unwrap();
    let lanes = sequence(&schedule, &graph);

    let mut seen = HashSet::new();
    for group in &lanes {
        for entry in &group.entries {
            assert!(seen.insert(entry.task_id.clone()), "{} appears twice", entry.task_id);
            assert_eq!(Lane::of(&entry.assignee), group.lane);
            let resolved = schedule.get(&entry.task_id).unwrap();
            assert_eq!(resolved.start_date, entry.start_date);
            assert_eq!(resolved.end_date, entry.end_date);
        }
    }
    assert_eq!(seen.len(), schedule.len());

    let shared = lanes.iter().find(|g| g.lane == Lane::Shared).unwrap();
    let shared_ids: Vec<_> = shared.entries.iter().map(|e| e.task_id.as_str()).collect();
    assert_eq!(shared_ids, vec!["4", "5"]);
}

#[test]
fn empty_lanes_are_omitted_and_order_is_fixed() {
    let graph = TaskListBuilder::new()
        .task("s", "Design", &[])
        .task("c", "C", &[])
        .task("a", "A", &[])
        .graph();

    let schedule = resolve(&graph, epoch()).unwrap();
    let lanes: Vec<Lane> = sequence(&schedule, &graph).iter().map(|g| g.lane).collect();

    assert_eq!(
        lanes,
        vec![Lane::Named(Developer::A), Lane::Named(Developer::C), Lane::Shared]
    );
}
