use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Error, "two");
    assert!(second > first);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotifyState::default();
    let first = state.push(ToastKind::Success, "keep");
    let second = state.push(ToastKind::Error, "drop");
    state.dismiss(second);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, first);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Info, "only");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let first = state.push(ToastKind::Info, "a");
    state.dismiss(first);
    let second = state.push(ToastKind::Info, "b");
    assert!(second > first);
}

#[test]
fn toast_kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Info.class(), ToastKind::Error.class());
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}

#[test]
fn toasts_keep_insertion_order() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Info, "first");
    state.push(ToastKind::Info, "second");
    let messages: Vec<&str> = state.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}
