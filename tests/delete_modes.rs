mod common;

use common::{config_with_mode, ready, type_text, values};
use pinfield::config::DeleteMode;
use pinfield::pin::CellKey;

#[test]
fn delete_and_move_walks_back_through_the_code() {
    let (mut field, recorder) = ready(config_with_mode(4, DeleteMode::DeleteCurrentAndMoveToPrevious));
    type_text(&mut field, 0, "12");
    assert_eq!(field.focused(), Some(2));

    // Empty cell: nothing to clear, focus moves back.
    field.delete_backward(2).unwrap();
    assert_eq!(values(&field), [Some('1'), Some('2'), None, None]);
    assert_eq!(field.focused(), Some(1));

    field.delete_backward(1).unwrap();
    assert_eq!(values(&field), [Some('1'), None, None, None]);
    assert_eq!(field.focused(), Some(0));
    assert_eq!(recorder.borrow().changes, ["1", "12", "1"]);
}

#[test]
fn delete_and_move_at_first_cell_clears_in_place() {
    let (mut field, _) = ready(config_with_mode(3, DeleteMode::DeleteCurrentAndMoveToPrevious));
    type_text(&mut field, 0, "1");
    field.focus(0).unwrap();
    field.delete_backward(0).unwrap();

    assert_eq!(values(&field), [None; 3]);
    assert_eq!(field.focused(), Some(0));
}

#[test]
fn delete_current_clears_filled_cell_and_keeps_focus() {
    let (mut field, _) = ready(config_with_mode(4, DeleteMode::DeleteCurrent));
    type_text(&mut field, 0, "12");
    field.focus(1).unwrap();

    field.delete_backward(1).unwrap();
    assert_eq!(values(&field), [Some('1'), None, None, None]);
    assert_eq!(field.focused(), Some(1));

    field.delete_backward(1).unwrap();
    assert_eq!(values(&field), [None; 4]);
    assert_eq!(field.focused(), Some(0));

    field.delete_backward(0).unwrap();
    assert_eq!(values(&field), [None; 4]);
    assert_eq!(field.focused(), Some(0));
}

#[test]
fn move_then_delete_clears_the_previous_cell() {
    let (mut field, _) = ready(config_with_mode(4, DeleteMode::MoveToPreviousAndDelete));
    type_text(&mut field, 0, "123");
    assert_eq!(field.focused(), Some(3));

    field.delete_backward(3).unwrap();
    assert_eq!(values(&field), [Some('1'), Some('2'), None, None]);
    assert_eq!(field.focused(), Some(2));

    field.delete_backward(2).unwrap();
    assert_eq!(values(&field), [Some('1'), None, None, None]);
    assert_eq!(field.focused(), Some(1));
}

#[test]
fn move_then_delete_clears_a_cell_when_focused() {
    let (mut field, recorder) = ready(config_with_mode(4, DeleteMode::MoveToPreviousAndDelete));
    type_text(&mut field, 0, "12");
    field.focus(0).unwrap();

    assert_eq!(values(&field), [None, Some('2'), None, None]);
    assert_eq!(recorder.borrow().changes.last().map(String::as_str), Some("2"));
}

#[test]
fn backspace_key_uses_the_cell_delete_mode() {
    let (mut field, _) = ready(config_with_mode(3, DeleteMode::DeleteCurrent));
    type_text(&mut field, 0, "12");
    field.focus(1).unwrap();

    field.handle_key(1, CellKey::Backspace).unwrap();
    assert_eq!(values(&field), [Some('1'), None, None]);
    assert_eq!(field.focused(), Some(1));
    assert!(field
        .cells()
        .iter()
        .all(|cell| cell.delete_mode() == DeleteMode::DeleteCurrent));
}

#[test]
fn delete_after_completion_reopens_last_cell() {
    let (mut field, _) = ready(config_with_mode(4, DeleteMode::DeleteCurrentAndMoveToPrevious));
    type_text(&mut field, 0, "1234");
    assert_eq!(field.code(), "1234");

    field.delete_backward(3).unwrap();
    assert_eq!(values(&field), [Some('1'), Some('2'), Some('3'), None]);
    assert_eq!(field.focused(), Some(2));
    assert_eq!(field.code(), "");
}
