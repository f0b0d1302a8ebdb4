//! End-to-end tests of the view pipeline through the public API.

use viewlist::{Filter, FilterRule, SortDescriptor, SortRule, ViewList, ViewListError};

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: &'static str,
    priority: i32,
    archived: bool,
}

fn task(name: &'static str, priority: i32, archived: bool) -> Task {
    Task {
        name,
        priority,
        archived,
    }
}

struct ActiveOnly;

impl FilterRule<Task> for ActiveOnly {
    fn apply(&self, collection: Vec<Task>) -> Vec<Task> {
        collection.into_iter().filter(|t| !t.archived).collect()
    }
}

struct ByPriorityDesc;

impl SortRule<Task> for ByPriorityDesc {
    fn apply(&self, mut collection: Vec<Task>) -> Vec<Task> {
        collection.sort_by(|a, b| b.priority.cmp(&a.priority));
        collection
    }
}

fn task_board() -> ViewList<Task> {
    ViewList::from(vec![
        task("write docs", 3, false),
        task("old migration", 1, true),
        task("fix bug", 5, false),
        task("triage", 3, false),
    ])
}

#[test]
fn display_view_and_raw_view_coexist() {
    let mut board = task_board();
    board.add_filter(&Filter::new(ActiveOnly)).unwrap();
    board
        .add_sort_descriptor(&SortDescriptor::new(ByPriorityDesc))
        .unwrap();

    let display: Vec<&str> = board.objects().into_iter().map(|t| t.name).collect();
    assert_eq!(display, vec!["fix bug", "write docs", "triage"]);

    // The raw list, e.g. what persistence would see, is untouched.
    let raw: Vec<&str> = board.wild_objects().into_iter().map(|t| t.name).collect();
    assert_eq!(
        raw,
        vec!["write docs", "old migration", "fix bug", "triage"]
    );
    assert_eq!(board.len(), 4);
}

#[test]
fn drop_ones_and_sort_ascending() {
    let mut list = ViewList::from(vec![3, 1, 4, 1, 5, 9]);
    list.add_quick_filter(|items: Vec<i32>| items.into_iter().filter(|n| *n != 1).collect());
    list.add_quick_sort_descriptor(|mut items: Vec<i32>| {
        items.sort();
        items
    });

    assert_eq!(list.objects(), vec![3, 4, 5, 9]);
    assert_eq!(list.wild_objects(), vec![3, 1, 4, 1, 5, 9]);
    assert_eq!(list.len(), 6);
}

#[test]
fn two_filters_two_sorts_match_manual_composition() {
    let drop_evens = |items: Vec<i32>| {
        items
            .into_iter()
            .filter(|n| n % 2 != 0)
            .collect::<Vec<_>>()
    };
    let cap_at_five = |items: Vec<i32>| items.into_iter().filter(|n| *n <= 5).collect::<Vec<_>>();
    let ascending = |mut items: Vec<i32>| {
        items.sort();
        items
    };
    let rotate = |mut items: Vec<i32>| {
        if !items.is_empty() {
            let first = items.remove(0);
            items.push(first);
        }
        items
    };

    let raw = vec![9, 4, 7, 2, 5, 3, 8, 1];

    let mut list = ViewList::from(raw.clone());
    list.add_quick_filter(drop_evens);
    list.add_quick_filter(cap_at_five);
    list.add_quick_sort_descriptor(ascending);
    list.add_quick_sort_descriptor(rotate);

    let manual = rotate(ascending(cap_at_five(drop_evens(raw))));
    assert_eq!(list.objects(), manual);
    assert_eq!(list.objects(), vec![3, 5, 1]);
}

#[test]
fn strategy_lifecycle_across_lists() {
    let active = Filter::new(ActiveOnly);
    let by_priority = SortDescriptor::new(ByPriorityDesc);

    let mut board = task_board();
    let mut backlog = ViewList::from(vec![task("idea", 1, false), task("shipped", 9, true)]);

    board.add_filter(&active).unwrap();
    backlog.add_filter(&active).unwrap();
    board.add_sort_descriptor(&by_priority).unwrap();

    assert_eq!(backlog.objects(), vec![task("idea", 1, false)]);

    // Deregistering from one list does not consume the strategy.
    board.remove_filter(&active).unwrap();
    assert_eq!(board.objects().len(), 4);
    assert_eq!(backlog.objects(), vec![task("idea", 1, false)]);
}

#[test]
fn registry_errors_surface_synchronously() {
    let mut board = task_board();
    let active = Filter::new(ActiveOnly);
    let by_priority = SortDescriptor::new(ByPriorityDesc);

    board.add_filter(&active).unwrap();
    assert!(matches!(
        board.add_filter(&active),
        Err(ViewListError::DuplicateFilter(id)) if id == active.id()
    ));

    assert!(matches!(
        board.remove_sort_descriptor(&by_priority),
        Err(ViewListError::SortDescriptorNotFound(id)) if id == by_priority.id()
    ));

    board.add_sort_descriptor(&by_priority).unwrap();
    assert!(matches!(
        board.add_sort_descriptor(&by_priority),
        Err(ViewListError::DuplicateSortDescriptor(_))
    ));
}

#[test]
fn iterator_snapshot_survives_append() {
    let mut board = task_board();
    board.add_filter(&Filter::new(ActiveOnly)).unwrap();

    let mut iter = board.iter();
    assert_eq!(iter.next().map(|t| t.name), Some("write docs"));

    board.add_objects(vec![task("interrupt", 8, false)]);

    let remaining: Vec<&str> = iter.map(|t| t.name).collect();
    assert_eq!(remaining, vec!["fix bug", "triage"]);

    // A fresh pass picks up the appended element.
    assert_eq!(board.iter().count(), 4);
}

#[test]
fn unconfigured_rules_are_noops_end_to_end() {
    struct Inert;
    impl FilterRule<Task> for Inert {}

    let mut board = task_board();
    board.add_filter(&Filter::new(Inert)).unwrap();
    assert_eq!(board.objects(), board.wild_objects());
}
