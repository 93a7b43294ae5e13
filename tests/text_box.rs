use std::cell::RefCell;
use std::rc::Rc;

use gumpui::prelude::*;
use gumpui::reactive::{clear_system_clipboard, clipboard_copy, focused_widget};

const ADVANCE: i32 = 10;
const LINE_HEIGHT: i32 = 20;

fn setup() {
    gumpui::reactive::reset_reactive();
    register_font(
        FontKey::default(),
        Rc::new(BitmapFont::monospace(ADVANCE, LINE_HEIGHT)),
    );
}

fn key(key: Key) -> Event {
    Event::KeyDown {
        key,
        modifiers: Modifiers::NONE,
    }
}

fn type_text(text_box: &mut TextBox, text: &str) {
    for c in text.chars() {
        text_box.event(&Event::TextInput(c));
    }
}

fn focused(mut text_box: TextBox) -> TextBox {
    text_box.event(&Event::FocusIn);
    text_box
}

fn click(x: i32, y: i32) -> Event {
    Event::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    }
}

#[test]
fn typing_inserts_at_caret_and_notifies() {
    setup();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let mut text_box = focused(
        text_box("")
            .size(200, 18)
            .on_change(move |text| sink.borrow_mut().push(text.to_string())),
    );

    type_text(&mut text_box, "ac");
    text_box.event(&key(Key::Left));
    type_text(&mut text_box, "b");

    assert_eq!(text_box.text(), "abc");
    assert_eq!(text_box.caret_index(), 2);
    assert_eq!(text_box.caret_position(), Point::new(20, 0));
    assert_eq!(*changes.borrow(), vec!["a", "ac", "abc"]);
}

#[test]
fn input_requires_focus() {
    setup();
    let mut text_box = text_box("").size(200, 18);

    assert_eq!(
        text_box.event(&Event::TextInput('a')),
        EventResponse::Ignored
    );
    assert_eq!(text_box.event(&key(Key::Backspace)), EventResponse::Ignored);
    assert_eq!(text_box.text(), "");
}

#[test]
fn read_only_box_ignores_input() {
    setup();
    let mut text_box = text_box("static").size(200, 18).editable(false);

    assert!(!text_box.accepts_keyboard_input());
    assert!(!text_box.accepts_mouse_input());
    assert_eq!(text_box.event(&Event::FocusIn), EventResponse::Ignored);
    assert_eq!(text_box.event(&click(5, 5)), EventResponse::Ignored);
    assert_eq!(focused_widget(), None);

    request_focus(text_box.id());
    text_box.update(0.0, 16.0);
    let mut ctx = PaintContext::new();
    text_box.paint(&mut ctx);
    // Text only, no caret
    assert_eq!(ctx.commands().len(), 1);
}

#[test]
fn max_char_count_limits_length() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18).max_char_count(3));

    type_text(&mut text_box, "abcdef");
    assert_eq!(text_box.text(), "abc");

    text_box.event(&key(Key::Backspace));
    type_text(&mut text_box, "z");
    assert_eq!(text_box.text(), "abz");
}

#[test]
fn tab_cannot_overflow_limit() {
    setup();
    let mut text_box = focused(
        text_box("ab")
            .size(200, 18)
            .allow_tab(true)
            .max_char_count(3),
    );
    text_box.event(&key(Key::End));

    assert_eq!(text_box.event(&key(Key::Tab)), EventResponse::Handled);
    assert_eq!(text_box.text(), "ab");
    assert_eq!(text_box.caret_index(), 2);

    let mut roomy = focused(
        gumpui::widgets::text_box("ab")
            .size(200, 18)
            .allow_tab(true)
            .max_char_count(6),
    );
    roomy.event(&key(Key::End));
    roomy.event(&key(Key::Tab));
    assert_eq!(roomy.text(), "ab    ");
}

#[test]
fn control_chars_are_not_inserted() {
    setup();
    let mut text_box = focused(text_box("abc").size(200, 18));

    assert_eq!(
        text_box.event(&Event::TextInput('\u{8}')),
        EventResponse::Ignored
    );
    assert_eq!(
        text_box.event(&Event::TextInput('\r')),
        EventResponse::Ignored
    );
    assert_eq!(text_box.text(), "abc");
    assert_eq!(text_box.caret_index(), 0);
}

#[test]
fn numeric_only_rejects_letters() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18).numeric_only(true));

    type_text(&mut text_box, "1a2b3");
    assert_eq!(text_box.text(), "123");
}

#[test]
fn numeric_limit_is_a_maximum_value() {
    setup();
    let mut text_box = focused(
        text_box("")
            .size(200, 18)
            .numeric_only(true)
            .max_char_count(100),
    );

    type_text(&mut text_box, "200");
    assert_eq!(text_box.text(), "20");

    text_box.event(&key(Key::Backspace));
    text_box.event(&key(Key::Backspace));
    type_text(&mut text_box, "100");
    assert_eq!(text_box.text(), "100");
}

#[test]
fn first_key_press_replaces_default_text() {
    setup();
    let mut text_box = focused(
        text_box("Name")
            .size(200, 18)
            .replace_default_text_on_first_key_press(true),
    );

    type_text(&mut text_box, "Bo");
    assert_eq!(text_box.text(), "Bo");
    assert_eq!(text_box.caret_index(), 2);
}

#[test]
fn backspace_clears_default_text() {
    setup();
    let mut text_box = focused(
        text_box("Name")
            .size(200, 18)
            .replace_default_text_on_first_key_press(true),
    );

    text_box.event(&key(Key::Backspace));
    assert_eq!(text_box.text(), "");

    type_text(&mut text_box, "ab");
    text_box.event(&key(Key::Backspace));
    assert_eq!(text_box.text(), "a");
}

#[test]
fn non_numeric_key_keeps_default_text() {
    setup();
    let mut text_box = focused(
        text_box("5")
            .size(200, 18)
            .numeric_only(true)
            .replace_default_text_on_first_key_press(true),
    );

    type_text(&mut text_box, "x");
    assert_eq!(text_box.text(), "5");
    type_text(&mut text_box, "7");
    assert_eq!(text_box.text(), "7");
}

#[test]
fn navigation_keys_move_caret() {
    setup();
    let mut text_box = focused(text_box("hello").size(200, 18));
    assert_eq!(text_box.caret_index(), 0);

    text_box.event(&key(Key::Left));
    assert_eq!(text_box.caret_index(), 0);

    text_box.event(&key(Key::End));
    assert_eq!(text_box.caret_index(), 5);
    assert_eq!(text_box.caret_position(), Point::new(50, 0));

    text_box.event(&key(Key::Right));
    assert_eq!(text_box.caret_index(), 5);

    text_box.event(&key(Key::Home));
    text_box.event(&key(Key::Right));
    assert_eq!(text_box.caret_index(), 1);
}

#[test]
fn delete_and_backspace_edit_around_caret() {
    setup();
    let mut text_box = focused(text_box("abcd").size(200, 18));

    text_box.event(&key(Key::Right));
    text_box.event(&key(Key::Right));
    text_box.event(&key(Key::Delete));
    assert_eq!(text_box.text(), "abd");
    assert_eq!(text_box.caret_index(), 2);

    text_box.event(&key(Key::Backspace));
    assert_eq!(text_box.text(), "ad");
    assert_eq!(text_box.caret_index(), 1);

    text_box.event(&key(Key::End));
    assert_eq!(text_box.event(&key(Key::Delete)), EventResponse::Handled);
    assert_eq!(text_box.text(), "ad");
}

#[test]
fn enter_submits_single_line() {
    setup();
    let submitted = Rc::new(RefCell::new(None));
    let sink = submitted.clone();
    let mut text_box = focused(
        text_box("")
            .size(200, 18)
            .on_submit(move |text| *sink.borrow_mut() = Some(text.to_string())),
    );

    type_text(&mut text_box, "hail");
    text_box.event(&key(Key::Enter));

    assert_eq!(text_box.text(), "hail");
    assert_eq!(submitted.borrow().as_deref(), Some("hail"));
}

#[test]
fn enter_breaks_line_in_multi_line_box() {
    setup();
    let mut text_box = focused(text_box("").size(200, 60).multi_line(true));

    type_text(&mut text_box, "ab");
    text_box.event(&key(Key::Enter));
    type_text(&mut text_box, "c");

    assert_eq!(text_box.text(), "ab\nc");
    assert_eq!(text_box.caret_position(), Point::new(10, LINE_HEIGHT));
}

#[test]
fn multi_line_wraps_at_control_width() {
    setup();
    let mut text_box = focused(text_box("").size(35, 60).multi_line(true));

    type_text(&mut text_box, "abcd");
    assert_eq!(text_box.caret_position(), Point::new(10, LINE_HEIGHT));
}

#[test]
fn tab_inserts_spaces_only_when_allowed() {
    setup();
    let mut plain = focused(text_box("").size(200, 18));
    assert_eq!(plain.event(&key(Key::Tab)), EventResponse::Ignored);
    assert_eq!(plain.text(), "");

    let mut tabbed = focused(text_box("").size(200, 18).allow_tab(true));
    assert_eq!(tabbed.event(&key(Key::Tab)), EventResponse::Handled);
    assert_eq!(tabbed.text(), "    ");
    assert_eq!(tabbed.caret_index(), 4);
}

#[test]
fn password_masks_display_only() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18).password(true));
    type_text(&mut text_box, "s3cr");

    assert_eq!(text_box.text(), "s3cr");
    assert_eq!(text_box.display_text(), "****");

    let mut ctx = PaintContext::new();
    text_box.paint(&mut ctx);
    match &ctx.commands()[0] {
        DrawCommand::Text { text, .. } => assert_eq!(text, "****"),
    }
}

#[test]
fn password_caret_uses_mask_metrics() {
    setup();
    register_font(
        FontKey::default(),
        Rc::new(BitmapFont::monospace(ADVANCE, LINE_HEIGHT).with_advance('*', 4)),
    );
    let mut text_box = focused(text_box("").size(200, 18).password(true));

    type_text(&mut text_box, "abc");
    assert_eq!(text_box.caret_position(), Point::new(12, 0));

    // Nearest masked stop to x = 7 is 8, after the second char
    text_box.event(&click(7, 5));
    assert_eq!(text_box.caret_index(), 2);
    assert_eq!(text_box.caret_position(), Point::new(8, 0));
}

#[test]
fn caret_stays_visible_while_scrolling() {
    setup();
    // Room for four glyphs plus the caret
    let mut text_box = focused(text_box("").size(50, 18));

    type_text(&mut text_box, "abcd");
    assert_eq!(text_box.scroll_offset(), 0);

    type_text(&mut text_box, "e");
    assert_eq!(text_box.scroll_offset(), -10);

    type_text(&mut text_box, "fgh");
    assert_eq!(text_box.scroll_offset(), -40);

    text_box.event(&key(Key::Home));
    assert_eq!(text_box.scroll_offset(), 0);

    text_box.event(&key(Key::End));
    assert_eq!(text_box.scroll_offset(), -40);

    // Deleting from the end pulls the text back instead of leaving a gap
    text_box.event(&key(Key::Backspace));
    assert_eq!(text_box.scroll_offset(), -30);
}

#[test]
fn scroll_offset_never_positive() {
    setup();
    let mut text_box = focused(text_box("").size(50, 18));
    for _ in 0..20 {
        type_text(&mut text_box, "w");
        assert!(text_box.scroll_offset() <= 0);
        let caret_x = text_box.caret_position().x + text_box.scroll_offset();
        assert!(caret_x >= 0);
        assert!(caret_x + ADVANCE <= 50);
    }
}

#[test]
fn click_places_caret_and_takes_focus() {
    setup();
    let mut text_box = text_box("abcdef").size(200, 18);

    assert_eq!(text_box.event(&click(21, 5)), EventResponse::Handled);
    assert!(has_focus(text_box.id()));
    assert_eq!(text_box.caret_index(), 2);
    assert_eq!(text_box.caret_position(), Point::new(20, 0));
}

#[test]
fn click_accounts_for_scroll() {
    setup();
    let mut text_box = focused(text_box("").size(50, 18));
    type_text(&mut text_box, "abcdefgh");
    assert_eq!(text_box.scroll_offset(), -40);

    text_box.event(&click(6, 5));
    assert_eq!(text_box.caret_index(), 5);
}

#[test]
fn right_click_and_outside_click_are_ignored() {
    setup();
    let mut text_box = text_box("abc").size(200, 18);

    let right = Event::MouseDown {
        x: 5,
        y: 5,
        button: MouseButton::Right,
    };
    assert_eq!(text_box.event(&right), EventResponse::Ignored);
    assert_eq!(text_box.event(&click(500, 5)), EventResponse::Ignored);
    assert_eq!(focused_widget(), None);
}

#[test]
fn paste_inserts_clipboard_text() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18));

    clipboard_copy("from game");
    text_box.event(&key(Key::Paste));
    assert_eq!(text_box.text(), "from game");

    set_system_clipboard("!".to_string());
    text_box.event(&Event::KeyDown {
        key: Key::Char('v'),
        modifiers: Modifiers::CTRL,
    });
    assert_eq!(text_box.text(), "from game!");
}

#[test]
fn paste_respects_entry_rules() {
    setup();
    let mut text_box = focused(
        text_box("")
            .size(200, 18)
            .numeric_only(true)
            .max_char_count(500),
    );

    set_system_clipboard("4a2\n7".to_string());
    text_box.event(&key(Key::Paste));
    assert_eq!(text_box.text(), "427");

    clear_system_clipboard();
    text_box.event(&key(Key::Paste));
    assert_eq!(text_box.text(), "427");
}

#[test]
fn caret_blinks_while_focused() {
    setup();
    let mut text_box = text_box("").size(200, 18);

    text_box.update(0.0, 16.0);
    assert!(!text_box.is_caret_visible());

    text_box.event(&Event::FocusIn);
    text_box.update(16.0, 16.0);
    assert!(text_box.is_caret_visible());
    assert!(take_frame_request());

    text_box.update(516.0, 500.0);
    assert!(!text_box.is_caret_visible());

    text_box.update(1016.0, 500.0);
    assert!(text_box.is_caret_visible());

    // Typing shows the caret again
    text_box.update(1516.0, 500.0);
    assert!(!text_box.is_caret_visible());
    type_text(&mut text_box, "x");
    assert!(text_box.is_caret_visible());
}

#[test]
fn losing_focus_hides_caret() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18));
    text_box.update(0.0, 16.0);
    assert!(text_box.is_caret_visible());

    clear_focus();
    text_box.update(16.0, 16.0);
    assert!(!text_box.is_caret_visible());

    text_box.event(&Event::FocusIn);
    text_box.event(&Event::FocusOut);
    assert!(!has_focus(text_box.id()));
    assert!(!text_box.is_caret_visible());
}

#[test]
fn paint_draws_text_then_caret() {
    setup();
    let mut text_box = focused(text_box("").size(200, 18).hue(Hue(38)));
    text_box.set_origin(10, 20);
    type_text(&mut text_box, "hi");
    text_box.update(0.0, 16.0);

    let mut ctx = PaintContext::new();
    text_box.paint(&mut ctx);

    assert_eq!(
        ctx.take_commands(),
        vec![
            DrawCommand::Text {
                text: "hi".into(),
                x: 10,
                y: 20,
                hue: Hue(38),
                font: FontKey::default(),
                max_width: None,
            },
            DrawCommand::Text {
                text: "_".into(),
                x: 30,
                y: 20,
                hue: Hue(38),
                font: FontKey::default(),
                max_width: None,
            },
        ]
    );
}

#[test]
fn set_text_keeps_caret_in_range() {
    setup();
    let changes = Rc::new(RefCell::new(0));
    let sink = changes.clone();
    let mut text_box = focused(
        text_box("abcdef")
            .size(200, 18)
            .on_change(move |_| *sink.borrow_mut() += 1),
    );
    text_box.event(&key(Key::End));

    text_box.set_text("ab");
    assert_eq!(text_box.caret_index(), 2);
    assert_eq!(text_box.caret_position(), Point::new(20, 0));
    // Programmatic changes are not user edits
    assert_eq!(*changes.borrow(), 0);
}

#[test]
fn built_from_layout_entry() {
    setup();
    let lines = ["Sir Bob", "0"];
    let entry =
        TextEntryDef::parse_command("{ textentrylimited 40 60 120 20 0x0386 2445 0 12 }", &lines)
            .unwrap();
    let mut text_box = TextBox::from_entry(&entry);

    assert_eq!(text_box.bounds(), Rect::new(40, 60, 120, 20));
    assert_eq!(text_box.text(), "Sir Bob");
    assert_eq!(text_box.get_hue(), Hue(0x386));
    assert_eq!(text_box.get_graphic(), Graphic(2445));
    assert_eq!(text_box.get_max_char_count(), 12);

    text_box.event(&Event::FocusIn);
    text_box.event(&key(Key::End));
    type_text(&mut text_box, " the Brave");
    assert_eq!(text_box.text(), "Sir Bob the ");
}

#[test]
fn layout_respects_constraints_and_line_height() {
    setup();
    let mut text_box = text_box("abc").size(200, 0);

    let size = text_box.layout(Constraints::unbounded());
    assert_eq!(size, Size::new(200, LINE_HEIGHT));

    let size = text_box.layout(Constraints::loose(Size::new(100, 100)));
    assert_eq!(size, Size::new(100, LINE_HEIGHT));
    assert_eq!(text_box.bounds().width, 100);
}
