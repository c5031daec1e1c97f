//! Reducer behavior tests: add validation, in-place toggle, removal
//! ordering, and the defined no-op cases.

use todoflow_app::{TodoCommand, TodoEvent, TodoId, TodoItem, TodoReducer, TodoState};
use todoflow_testing::{ReducerTest, test_environment};

#[test]
fn add_trims_text_and_appends_an_open_todo() {
    ReducerTest::new(TodoReducer::new())
        .with_env(test_environment())
        .given_state(TodoState::new())
        .when_command(TodoCommand::add("  Buy milk  "))
        .then_state(|state| {
            assert_eq!(state.count(), 1);
            assert_eq!(state.todos[0].text, "Buy milk");
            assert!(!state.todos[0].completed);
        })
        .then_event(|event| {
            assert!(matches!(event, TodoEvent::Added { todo } if todo.text == "Buy milk"));
        })
        .run();
}

#[test]
fn blank_text_is_a_defined_noop() {
    for text in ["", "   ", "\t\n"] {
        ReducerTest::new(TodoReducer::new())
            .with_env(test_environment())
            .given_state(TodoState::new())
            .when_command(TodoCommand::add(text))
            .then_no_transition()
            .run();
    }
}

#[test]
fn toggle_replaces_the_item_in_place() {
    let env = test_environment();
    let todo = TodoItem::new(TodoId::from_uuid(env.ids.generate()), "First".to_string());
    let other = TodoItem::new(TodoId::from_uuid(env.ids.generate()), "Second".to_string());
    let id = todo.id.clone();

    ReducerTest::new(TodoReducer::new())
        .with_env(env)
        .given_state(TodoState::with_todos(vec![todo, other]))
        .when_command(TodoCommand::toggle(id.clone()))
        .then_state(move |state| {
            assert!(state.todos[0].completed);
            assert_eq!(state.todos[0].id, id);
            assert_eq!(state.todos[0].text, "First");
            // Position and neighbours are untouched.
            assert!(!state.todos[1].completed);
            assert_eq!(state.todos[1].text, "Second");
        })
        .then_event(|event| {
            assert!(matches!(event, TodoEvent::Updated { todo } if todo.completed));
        })
        .run();
}

#[test]
fn unknown_ids_are_noops_for_toggle_and_remove() {
    for command in [
        TodoCommand::toggle(TodoId::new()),
        TodoCommand::remove(TodoId::new()),
    ] {
        ReducerTest::new(TodoReducer::new())
            .with_env(test_environment())
            .given_state(TodoState::new())
            .when_command(command)
            .then_no_transition()
            .run();
    }
}

#[test]
fn remove_keeps_relative_order_of_the_rest() {
    let env = test_environment();
    let items: Vec<TodoItem> = ["a", "b", "c"]
        .iter()
        .map(|text| TodoItem::new(TodoId::from_uuid(env.ids.generate()), (*text).to_string()))
        .collect();
    let middle = items[1].id.clone();

    ReducerTest::new(TodoReducer::new())
        .with_env(env)
        .given_state(TodoState::with_todos(items))
        .when_command(TodoCommand::remove(middle.clone()))
        .then_state(|state| {
            let texts: Vec<&str> = state.todos.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, vec!["a", "c"]);
        })
        .then_event(move |event| {
            assert!(matches!(event, TodoEvent::Removed { id } if *id == middle));
        })
        .run();
}
