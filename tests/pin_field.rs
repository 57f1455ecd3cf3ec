mod common;

use common::{config, later, ready, recorded, settle, type_text, values, BrokenCell};
use pinfield::clipboard::StaticClipboard;
use pinfield::config::PinConfig;
use pinfield::pin::{CellKey, EditAction, PinError, PresenterError};
use pinfield::ui::view::PinView;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn new_field_is_loading_until_settled() {
    let (mut field, _) = recorded(config(4), PinView::new());
    assert!(field.is_loading());
    assert_eq!(field.len(), 4);
    assert_eq!(field.presenter().cells().len(), 4);
    assert!(field.next_deadline().is_some());

    settle(&mut field);
    assert!(!field.is_loading());
    assert_eq!(field.focused(), None);
}

#[test]
fn initial_focus_applies_after_settle() {
    let config = PinConfig {
        initial_focus: Some(2),
        ..config(4)
    };
    let (mut field, _) = recorded(config, PinView::new());
    assert_eq!(field.focused(), None);
    settle(&mut field);
    assert_eq!(field.focused(), Some(2));
    assert!(field.presenter().cell(2).is_some_and(|cell| cell.focused));
}

#[test]
fn typing_fills_cells_and_reports_each_change() {
    let (mut field, recorder) = ready(config(4));
    type_text(&mut field, 0, "1234");

    let recorder = recorder.borrow();
    assert_eq!(recorder.changes, ["1", "12", "123", "1234"]);
    assert_eq!(recorder.completions, ["1234"]);
    assert_eq!(field.code(), "1234");
    assert_eq!(field.focused(), None);
}

#[test]
fn code_stays_empty_while_loading() {
    let (mut field, recorder) = recorded(config(2), PinView::new());
    type_text(&mut field, 0, "12");
    assert_eq!(field.code(), "");
    assert!(recorder.borrow().completions.is_empty());

    settle(&mut field);
    assert_eq!(field.code(), "12");
}

#[test]
fn pasting_full_code_broadcasts_every_character() {
    let (mut field, recorder) = ready(config(6));
    field.paste_pin("123456").unwrap();

    let recorder = recorder.borrow();
    assert_eq!(
        recorder.changes,
        ["1", "12", "123", "1234", "12345", "123456"]
    );
    assert_eq!(recorder.completions, ["123456"]);
    assert_eq!(field.focused(), None);
}

#[test]
fn autofilled_text_is_treated_as_paste() {
    let (mut field, recorder) = ready(config(4));
    field.focus(2).unwrap();
    field.enter_text(2, "9876").unwrap();

    assert_eq!(field.code(), "9876");
    assert_eq!(recorder.borrow().completions, ["9876"]);
}

#[test]
fn bulk_text_without_one_time_code_must_match_clipboard() {
    let config = PinConfig {
        one_time_code: false,
        ..config(4)
    };
    let (field, _) = recorded(config, PinView::new());
    let mut field = field.with_clipboard(StaticClipboard(Some("9999".to_string())));
    settle(&mut field);

    field.enter_text(0, "1234").unwrap();
    assert_eq!(values(&field), [Some('4'), None, None, None]);

    field.enter_text(1, "9999").unwrap();
    assert_eq!(field.code(), "9999");
}

#[test]
fn short_paste_fills_prefix_and_focuses_next_cell() {
    let (mut field, recorder) = ready(config(4));
    type_text(&mut field, 0, "5555");
    field.paste_pin("12").unwrap();

    assert_eq!(values(&field), [Some('1'), Some('2'), None, None]);
    assert_eq!(field.focused(), Some(2));
    assert_eq!(field.code(), "");
    assert_eq!(recorder.borrow().changes.last().map(String::as_str), Some("12"));
}

#[test]
fn paste_ignores_extra_characters() {
    let (mut field, _) = ready(config(3));
    field.paste_pin("12345").unwrap();
    assert_eq!(field.code(), "123");
}

#[test]
fn clipboard_paste_via_edit_action() {
    let (field, _) = recorded(config(4), PinView::new());
    let mut field = field.with_clipboard(StaticClipboard(Some("4321".to_string())));
    settle(&mut field);

    field.handle_key(0, CellKey::Edit(EditAction::Copy)).unwrap();
    assert_eq!(field.state().assembled(), "");

    field.handle_key(0, CellKey::Edit(EditAction::Paste)).unwrap();
    assert_eq!(field.code(), "4321");
}

#[test]
fn empty_clipboard_is_not_an_error() {
    let (field, _) = recorded(config(4), PinView::new());
    let mut field = field.with_clipboard(StaticClipboard(None));
    settle(&mut field);

    field.paste_from_clipboard().unwrap();
    assert!(!field.has_error());
}

#[test]
fn whitespace_is_rejected_when_disallowed() {
    let config = PinConfig {
        allows_whitespace: false,
        ..config(4)
    };
    let (mut field, recorder) = ready(config);
    field.enter_text(0, " ").unwrap();

    assert_eq!(values(&field), [None; 4]);
    assert!(recorder.borrow().changes.is_empty());
}

#[test]
fn whitespace_is_stored_but_never_completes() {
    let (mut field, recorder) = ready(config(2));
    type_text(&mut field, 0, "1 ");

    assert_eq!(field.state().assembled(), "1 ");
    assert_eq!(field.code(), "");
    assert!(recorder.borrow().completions.is_empty());
}

#[test]
fn characters_are_masked_after_the_delay() {
    let config = PinConfig {
        mask_delay_ms: 10_000,
        ..config(3)
    };
    let (mut field, _) = ready(config);
    field.enter_text(0, "7").unwrap();
    assert_eq!(field.presenter().cell(0).and_then(|cell| cell.glyph), Some('7'));

    field.poll(later(Duration::ZERO)).unwrap();
    assert_eq!(field.presenter().cell(0).and_then(|cell| cell.glyph), Some('7'));

    field.poll(later(Duration::from_secs(11))).unwrap();
    assert_eq!(
        field.presenter().cell(0).and_then(|cell| cell.glyph),
        Some('\u{25CF}')
    );
    assert_eq!(field.state().slot(0).and_then(|slot| slot.value), Some('7'));
    assert_eq!(field.code(), "");
}

#[test]
fn overwriting_a_cell_restarts_its_mask_delay() {
    let config = PinConfig {
        mask_delay_ms: 10_000,
        ..config(3)
    };
    let (mut field, _) = ready(config);
    field.enter_text(0, "1").unwrap();
    let first = field.next_deadline().expect("mask scheduled");

    std::thread::sleep(Duration::from_millis(5));
    field.enter_text(0, "2").unwrap();
    let second = field.next_deadline().expect("mask rescheduled");
    assert!(second > first);

    field.poll(first).unwrap();
    assert_eq!(field.presenter().cell(0).and_then(|cell| cell.glyph), Some('2'));

    field.poll(second).unwrap();
    assert_eq!(
        field.presenter().cell(0).and_then(|cell| cell.glyph),
        Some('\u{25CF}')
    );
    assert_eq!(field.state().slot(0).and_then(|slot| slot.value), Some('2'));
}

#[test]
fn insecure_field_shows_real_characters() {
    let config = PinConfig {
        secure_text: false,
        ..config(2)
    };
    let (mut field, _) = ready(config);
    field.enter_text(0, "7").unwrap();
    assert_eq!(field.next_deadline(), None);

    field.poll(later(Duration::from_secs(60))).unwrap();
    assert_eq!(field.presenter().visible_text(), "7_");
}

#[test]
fn clear_empties_field_and_runs_callback_after_settle() {
    let (mut field, _) = ready(config(4));
    type_text(&mut field, 0, "1234");

    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    field
        .clear_pin(Some(Box::new(move || flag.set(true))))
        .unwrap();

    assert!(field.is_loading());
    assert_eq!(values(&field), [None; 4]);
    assert!(!done.get());

    settle(&mut field);
    assert!(done.get());
    assert_eq!(field.presenter().builds(), 2);
    assert_eq!(field.state().generation(), 2);
}

#[test]
fn placeholders_show_on_empty_cells() {
    let config = PinConfig {
        placeholder: "0000".to_string(),
        ..config(4)
    };
    let (mut field, _) = ready(config);
    field.enter_text(0, "9").unwrap();
    field.poll(later(Duration::ZERO)).unwrap();
    assert_eq!(field.presenter().visible_text(), "9000");

    field.delete_backward(1).unwrap();
    field.delete_backward(0).unwrap();
    assert_eq!(field.presenter().visible_text(), "0000");
}

#[test]
fn unknown_cell_reports_err_101() {
    let (mut field, _) = ready(config(4));
    let err = field.enter_text(9, "1").unwrap_err();

    assert_eq!(err, PinError::CellNotFound { index: 9, length: 4 });
    assert_eq!(err.code(), "ERR-101");
    assert!(field.has_error());
    assert!(field.presenter().error_visible());
}

#[test]
fn missing_view_reports_err_104_and_field_keeps_working() {
    let presenter = BrokenCell {
        broken: 2,
        ..BrokenCell::default()
    };
    let (mut field, _) = recorded(config(4), presenter);
    settle(&mut field);

    type_text(&mut field, 0, "12");
    let err = field.enter_text(2, "3").unwrap_err();
    assert_eq!(
        err,
        PinError::Presenter {
            index: Some(2),
            source: PresenterError::MissingView { index: 2 },
        }
    );
    assert_eq!(err.code(), "ERR-104");
    assert_eq!(err.kind(), "Tag Mismatch");
    assert!(field.presenter().inner.error_visible());

    field.enter_text(3, "4").unwrap();
    assert_eq!(field.code(), "1234");

    field.clear_pin(None).unwrap();
    assert!(!field.has_error());
    assert!(!field.presenter().inner.error_visible());
}

#[test]
fn paste_into_missing_view_reports_err_103() {
    let presenter = BrokenCell {
        broken: 1,
        ..BrokenCell::default()
    };
    let (mut field, _) = recorded(config(3), presenter);
    settle(&mut field);

    let err = field.paste_pin("123").unwrap_err();
    assert_eq!(err, PinError::PasteTarget { index: 1 });
    assert_eq!(err.code(), "ERR-103");
    assert!(field.has_error());
}
