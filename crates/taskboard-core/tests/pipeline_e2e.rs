//! End-to-end pipeline tests: scan a document, parse column filters, and
//! assemble a board the way a host would.

use taskboard_core_rs::filter::FilterParser;
use taskboard_core_rs::{
    assign_columns, scanner, Board, Column, ColumnKind, ShowDates, SortDirection, SortKey,
    SortSpec, TaskStore,
};

const DOC: &str = "\
# Sprint notes

- [ ] Draft launch plan #for/work #in/wip 📅 2024-03-15
  - [x] Collect metrics
  - [ ] Review with team
  needs sign-off from legal
- [ ] Water the plants #home
- [x] File expenses #for/work ✅ 2024-03-01
- [ ] Update roadmap #for/work #in/backlog 📅 2024-02-28
- [ ] Broken date #for/work 📅 2024-02-30
";

fn work_board() -> Board {
    let column = |id: &str, query: &str, sort: Option<SortSpec>| Column {
        id: id.to_string(),
        name: id.to_string(),
        filter: FilterParser::parse(query),
        kind: ColumnKind::Filtered,
        status_tag: None,
        show_completed: None,
        sort,
    };
    Board {
        id: "work".to_string(),
        name: "Work".to_string(),
        filter: FilterParser::parse("#for/work"),
        columns: vec![
            column(
                "all",
                "",
                Some(SortSpec {
                    key: SortKey::Due,
                    direction: SortDirection::Asc,
                }),
            ),
            column("backlog", "#in/backlog", None),
            column("wip", "#in/wip", None),
            Column {
                id: "done".to_string(),
                name: "Done".to_string(),
                filter: FilterParser::parse(""),
                kind: ColumnKind::Completed,
                status_tag: None,
                show_completed: None,
                sort: None,
            },
        ],
        hide_filter_tags: vec!["#for/work".to_string()],
        show_dates: ShowDates::default(),
    }
}

#[test]
fn test_scan_then_assemble_board() {
    let tasks = scanner::scan(DOC, "sprint.md", &[]);
    assert_eq!(tasks.len(), 5);

    // Nested structure landed on the first task.
    let draft = &tasks[0];
    assert_eq!(draft.text, "Draft launch plan");
    assert_eq!(draft.subtasks.len(), 2);
    assert_eq!(draft.notes, vec!["needs sign-off from legal"]);

    let buckets = assign_columns(&work_board(), &tasks);

    // "all": open work tasks, due-date ascending, broken date last.
    let all: Vec<&str> = buckets[0].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        all,
        vec![
            "Update roadmap",
            "Draft launch plan",
            "Broken date 📅 2024-02-30",
        ]
    );

    let backlog: Vec<&str> = buckets[1].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(backlog, vec!["Update roadmap"]);

    let wip: Vec<&str> = buckets[2].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(wip, vec!["Draft launch plan"]);

    // Completed column sees only the finished work task.
    let done: Vec<&str> = buckets[3].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(done, vec!["File expenses"]);
    assert_eq!(buckets[3][0].completed_date.as_deref(), Some("2024-03-01"));
}

#[test]
fn test_include_tags_gate_the_scan() {
    let include = vec!["#for/work".to_string()];
    let tasks = scanner::scan(DOC, "sprint.md", &include);
    assert!(tasks.iter().all(|t| t.has_tag("#for/work")));
    assert_eq!(tasks.len(), 4);
}

#[test]
fn test_store_backed_rescan_flow() {
    let mut store = TaskStore::new();
    store.set_tasks(scanner::scan(DOC, "sprint.md", &[]));
    store.replace_file_tasks("other.md", scanner::scan("- [ ] elsewhere", "other.md", &[]));
    assert_eq!(store.len(), 6);

    // Rescanning the changed file swaps its tasks without disturbing others.
    store.replace_file_tasks("sprint.md", scanner::scan("- [ ] rewritten", "sprint.md", &[]));
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].filepath, "other.md");
    assert_eq!(store.all()[1].text, "rewritten");
}

#[test]
fn test_column_config_json_round_trip() {
    let board = work_board();
    let json = serde_json::to_string_pretty(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    // The persisted filter shape is the tagged-object encoding.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["filter"]["type"], "tag");
    assert_eq!(value["filter"]["value"], "#for/work");
    assert_eq!(value["columns"][0]["filter"]["type"], "or");
}
