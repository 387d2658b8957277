//! Tests for filter evaluation.

use super::*;
use crate::task::Task;

fn task_with_tags(tags: &[&str]) -> Task {
    Task {
        id: "t.md:1".to_string(),
        filepath: "t.md".to_string(),
        line_number: 1,
        text: "task".to_string(),
        is_complete: false,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        subtasks: vec![],
        notes: vec![],
        created_date: None,
        scheduled_date: None,
        due_date: None,
        completed_date: None,
    }
}

// ==================== Leaves ====================

#[test]
fn test_tag_matches_exactly() {
    let task = task_with_tags(&["#a", "#in/wip"]);
    assert!(evaluate(&task, &FilterExpression::tag("#a")));
    assert!(evaluate(&task, &FilterExpression::tag("#in/wip")));
    assert!(!evaluate(&task, &FilterExpression::tag("#b")));
    // Case-sensitive, prefix included.
    assert!(!evaluate(&task, &FilterExpression::tag("#A")));
    assert!(!evaluate(&task, &FilterExpression::tag("a")));
}

#[test]
fn test_tag_never_matches_prefix_of_longer_tag() {
    let task = task_with_tags(&["#in/wip"]);
    assert!(!evaluate(&task, &FilterExpression::tag("#in")));
}

#[test]
fn test_empty_matches_untagged_tasks_only() {
    assert!(evaluate(&task_with_tags(&[]), &FilterExpression::Empty));
    assert!(!evaluate(&task_with_tags(&["#a"]), &FilterExpression::Empty));
}

// ==================== Combinators ====================

#[test]
fn test_and_requires_all_children() {
    let expr = FilterParser::parse("#a AND #b");
    assert!(evaluate(&task_with_tags(&["#a", "#b"]), &expr));
    assert!(!evaluate(&task_with_tags(&["#a"]), &expr));
}

#[test]
fn test_or_requires_any_child() {
    let expr = FilterParser::parse("#a OR #b");
    assert!(evaluate(&task_with_tags(&["#b"]), &expr));
    assert!(!evaluate(&task_with_tags(&["#c"]), &expr));
}

#[test]
fn test_not_negates() {
    let expr = FilterParser::parse("#a AND NOT #b");
    assert!(evaluate(&task_with_tags(&["#a"]), &expr));
    assert!(!evaluate(&task_with_tags(&["#a", "#b"]), &expr));
}

#[test]
fn test_empty_and_or_are_vacuously_true() {
    for task in [task_with_tags(&[]), task_with_tags(&["#x"])] {
        assert!(evaluate(&task, &FilterExpression::and(vec![])));
        assert!(evaluate(&task, &FilterExpression::or(vec![])));
    }
}

#[test]
fn test_match_all_from_empty_query_matches_untagged_task() {
    let expr = FilterParser::parse("");
    assert!(evaluate(&task_with_tags(&[]), &expr));
    assert!(evaluate(&task_with_tags(&["#a"]), &expr));
}

#[test]
fn test_double_negation_is_identity() {
    let task_plain = task_with_tags(&["#a"]);
    let task_other = task_with_tags(&["#b"]);
    for query in ["#a", "EMPTY", "#a OR #b", "#a AND NOT #b"] {
        let expr = FilterParser::parse(query);
        let doubled = FilterExpression::negate(FilterExpression::negate(expr.clone()));
        for task in [&task_plain, &task_other] {
            assert_eq!(evaluate(task, &doubled), evaluate(task, &expr));
        }
    }
}

// ==================== Defensive Fallbacks ====================

#[test]
fn test_childless_not_defaults_to_true() {
    let expr = FilterExpression::Not { children: vec![] };
    assert!(evaluate(&task_with_tags(&["#a"]), &expr));
}

#[test]
fn test_unknown_variant_defaults_to_true() {
    assert!(evaluate(&task_with_tags(&[]), &FilterExpression::Unknown));
    assert!(evaluate(&task_with_tags(&["#a"]), &FilterExpression::Unknown));
}

#[test]
fn test_evaluation_does_not_mutate() {
    let task = task_with_tags(&["#a"]);
    let expr = FilterParser::parse("#a AND NOT #b");
    let snapshot = expr.clone();
    for _ in 0..3 {
        evaluate(&task, &expr);
    }
    assert_eq!(expr, snapshot);
}

#[test]
fn test_filter_tasks_keeps_matches_in_order() {
    let tasks = vec![
        task_with_tags(&["#a"]),
        task_with_tags(&["#b"]),
        task_with_tags(&["#a", "#b"]),
    ];
    let expr = FilterParser::parse("#a");
    let kept = filter_tasks(&tasks, &expr);
    assert_eq!(kept.len(), 2);
    assert!(kept[0].has_tag("#a") && kept[1].has_tag("#a"));
}
