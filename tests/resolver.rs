use ganttdag::dag::{
    Schedule, TaskGraph, resolve, resolve_parallel, resolve_ready_queue, resolve_with,
};
use ganttdag::errors::{BlockReason, GanttdagError, UnresolvableError};
use ganttdag::types::ResolveStrategy;
use ganttdag_test_utils::builders::TaskListBuilder;
use ganttdag_test_utils::{day, epoch, init_tracing};

const STRATEGIES: [ResolveStrategy; 3] = [
    ResolveStrategy::FixedPoint,
    ResolveStrategy::ReadyQueue,
    ResolveStrategy::Parallel,
];

fn expect_unresolvable(graph: &TaskGraph, strategy: ResolveStrategy) -> UnresolvableError {
    match resolve_with(graph, epoch(), strategy) {
        Err(GanttdagError::Unresolvable(err)) => err,
        Err(e) => panic!("Expected Unresolvable error, got: {:?}", e),
        Ok(schedule) => panic!("Expected error, got schedule: {:?}", schedule),
    }
}

fn start_of(schedule: &Schedule, id: &str) -> chrono::NaiveDate {
    schedule.get(id).expect("task scheduled").start_date
}

#[test]
fn task_without_dependencies_starts_on_epoch() {
    init_tracing();
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "B", &[])
        .graph();

    for strategy in STRATEGIES {
        let schedule = resolve_with(&graph, epoch(), strategy).unwrap();
        assert_eq!(start_of(&schedule, "A"), epoch());
        assert_eq!(start_of(&schedule, "B"), epoch());
    }
}

#[test]
fn chain_propagates_one_day_per_link() {
    init_tracing();
    // C depends on B depends on A, listed in reverse so the fixed point
    // needs several passes.
    let graph = TaskListBuilder::new()
        .task("C", "A", &["B"])
        .task("B", "A", &["A"])
        .task("A", "A", &[])
        .graph();

    for strategy in STRATEGIES {
        let schedule = resolve_with(&graph, epoch(), strategy).unwrap();
        assert_eq!(start_of(&schedule, "A"), day(0));
        assert_eq!(start_of(&schedule, "B"), day(1));
        assert_eq!(start_of(&schedule, "C"), day(2));
    }
}

#[test]
fn end_date_equals_start_date() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "B", &["A"])
        .graph();

    let schedule = resolve(&graph, epoch()).unwrap();
    for entry in schedule.iter() {
        assert_eq!(entry.start_date, entry.end_date, "task {}", entry.task_id);
    }
}

#[test]
fn join_starts_after_latest_dependency_not_first_listed() {
    init_tracing();
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "A", &["A"])
        .task("C", "B", &["B"])
        .task("D", "C", &["B", "C"])
        .graph();

    for strategy in STRATEGIES {
        let schedule = resolve_with(&graph, epoch(), strategy).unwrap();
        assert_eq!(schedule.end_date_of("B"), Some(day(1)));
        assert_eq!(schedule.end_date_of("C"), Some(day(2)));
        assert_eq!(start_of(&schedule, "D"), day(3));
    }
}

#[test]
fn two_task_cycle_reports_both_tasks() {
    init_tracing();
    let graph = TaskListBuilder::new()
        .task("X", "A", &["Y"])
        .task("Y", "B", &["X"])
        .graph();

    for strategy in STRATEGIES {
        let err = expect_unresolvable(&graph, strategy);
        assert_eq!(err.stuck_ids().collect::<Vec<_>>(), vec!["X", "Y"]);

        let x = err.find("X").unwrap();
        assert_eq!(x.unresolved_ids().collect::<Vec<_>>(), vec!["Y"]);
        assert_eq!(x.blocked_on[0].reason, BlockReason::Cyclic);

        let y = err.find("Y").unwrap();
        assert_eq!(y.unresolved_ids().collect::<Vec<_>>(), vec!["X"]);

        assert_eq!(err.cycles, vec![vec!["X".to_string(), "Y".to_string()]]);
    }
}

#[test]
fn self_dependency_is_a_cycle() {
    let graph = TaskListBuilder::new().task("S", "A", &["S"]).graph();

    let err = expect_unresolvable(&graph, ResolveStrategy::FixedPoint);
    let s = err.find("S").unwrap();
    assert_eq!(s.blocked_on[0].id, "S");
    assert_eq!(s.blocked_on[0].reason, BlockReason::Cyclic);
    assert_eq!(err.cycles, vec![vec!["S".to_string()]]);
}

#[test]
fn dangling_reference_fails_run_and_names_missing_id() {
    init_tracing();
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("Z", "B", &["Q"])
        .task("W", "C", &["Z"])
        .task("B", "B", &["A"])
        .graph();

    for strategy in STRATEGIES {
        let err = expect_unresolvable(&graph, strategy);
        // Only Z and everything depending on it are stuck.
        assert_eq!(err.stuck_ids().collect::<Vec<_>>(), vec!["Z", "W"]);

        let z = err.find("Z").unwrap();
        assert_eq!(z.blocked_on.len(), 1);
        assert_eq!(z.blocked_on[0].id, "Q");
        assert_eq!(z.blocked_on[0].reason, BlockReason::Undefined);

        let w = err.find("W").unwrap();
        assert_eq!(w.blocked_on[0].id, "Z");
        assert_eq!(w.blocked_on[0].reason, BlockReason::Blocked);

        assert!(err.cycles.is_empty());
    }
}

#[test]
fn stuck_task_lists_only_unresolved_dependencies() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("T", "A", &["A", "missing"])
        .graph();

    let err = expect_unresolvable(&graph, ResolveStrategy::FixedPoint);
    let t = err.find("T").unwrap();
    assert_eq!(t.unresolved_ids().collect::<Vec<_>>(), vec!["missing"]);
}

#[test]
fn diagnostic_message_names_tasks_and_reasons() {
    let graph = TaskListBuilder::new()
        .task("X", "A", &["Y"])
        .task("Y", "A", &["X"])
        .task("Z", "A", &["Q"])
        .graph();

    let err = expect_unresolvable(&graph, ResolveStrategy::FixedPoint);
    let msg = err.to_string();
    assert!(msg.starts_with("could not resolve 3 task(s):"), "{msg}");
    assert!(msg.contains("X waiting on Y (cycle)"), "{msg}");
    assert!(msg.contains("Z waiting on Q (undefined)"), "{msg}");
    assert!(msg.contains("cycle among: X, Y"), "{msg}");
}

#[test]
fn duplicate_dependencies_are_treated_as_a_set() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "A", &["A", "A"])
        .graph();

    assert_eq!(graph.dependencies_of("B"), ["A".to_string()]);
    for strategy in STRATEGIES {
        let schedule = resolve_with(&graph, epoch(), strategy).unwrap();
        assert_eq!(start_of(&schedule, "B"), day(1));
    }
}

#[test]
fn resolving_twice_gives_identical_schedules() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "B", &["A"])
        .task("C", "C", &["A"])
        .task("D", "All", &["B", "C"])
        .task("E", "A", &[])
        .task("F", "B", &["E"])
        .graph();

    let first = resolve(&graph, epoch()).unwrap();
    let second = resolve(&graph, epoch()).unwrap();
    assert_eq!(first, second);

    assert_eq!(first, resolve_ready_queue(&graph, epoch()).unwrap());
    assert_eq!(first, resolve_parallel(&graph, epoch()).unwrap());
}

#[test]
fn strategies_report_identical_diagnostics() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("X", "A", &["Y"])
        .task("Y", "B", &["X", "A"])
        .task("Z", "C", &["Q"])
        .task("K", "C", &["Y"])
        .task("M", "B", &["N"])
        .task("N", "B", &["M"])
        .graph();

    let fixed = expect_unresolvable(&graph, ResolveStrategy::FixedPoint);
    let queue = expect_unresolvable(&graph, ResolveStrategy::ReadyQueue);
    let parallel = expect_unresolvable(&graph, ResolveStrategy::Parallel);

    assert_eq!(fixed, queue);
    assert_eq!(fixed, parallel);
    assert_eq!(fixed.cycles.len(), 2);
}

#[test]
fn empty_graph_resolves_to_empty_schedule() {
    let graph = TaskListBuilder::new().graph();
    for strategy in STRATEGIES {
        let schedule = resolve_with(&graph, epoch(), strategy).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.epoch(), epoch());
    }
}

#[test]
fn date_overflow_is_reported_not_panicked() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "A", &["A"])
        .graph();

    match resolve(&graph, chrono::NaiveDate::MAX) {
        Err(GanttdagError::DateOutOfRange { task_id }) => assert_eq!(task_id, "A"),
        other => panic!("Expected DateOutOfRange, got: {:?}", other),
    }
}

#[test]
fn dates_past_year_9999_are_out_of_range() {
    let graph = TaskListBuilder::new()
        .task("A", "A", &[])
        .task("B", "A", &["A"])
        .graph();
    let last_day = chrono::NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();

    for strategy in STRATEGIES {
        match resolve_with(&graph, last_day, strategy) {
            Err(GanttdagError::DateOutOfRange { task_id }) => assert_eq!(task_id, "B"),
            other => panic!("{strategy:?}: expected DateOutOfRange, got: {:?}", other),
        }
    }
}

#[test]
fn five_digit_epoch_is_out_of_range() {
    let graph = TaskListBuilder::new().task("A", "A", &[]).graph();
    let far = chrono::NaiveDate::from_ymd_opt(12345, 1, 1).unwrap();

    match resolve(&graph, far) {
        Err(GanttdagError::DateOutOfRange { task_id }) => assert_eq!(task_id, "A"),
        other => panic!("Expected DateOutOfRange, got: {:?}", other),
    }
}
