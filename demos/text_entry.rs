//! Scripted text entry session.
//!
//! Builds a login-style gump from layout commands, feeds it a few frames of
//! input and prints the draw commands a sprite batch would receive.
//!
//! Run with: RUST_LOG=trace cargo run --example text_entry

use std::rc::Rc;

use gumpui::prelude::*;

const LAYOUT: [&str; 2] = [
    "{ textentry 40 60 120 18 0x0386 2445 0 }",
    "{ textentrylimited 40 90 120 18 0x0386 2445 1 16 }",
];

fn main() -> Result<(), GumpError> {
    env_logger::init();

    register_font(FontKey::default(), Rc::new(BitmapFont::monospace(7, 14)));

    let lines = ["account", ""];
    let account = TextBox::from_entry(&TextEntryDef::parse_command(LAYOUT[0], &lines)?)
        .replace_default_text_on_first_key_press(true)
        .on_change(|text| println!("account -> {text:?}"));
    let password = TextBox::from_entry(&TextEntryDef::parse_command(LAYOUT[1], &lines)?)
        .password(true)
        .on_submit(|text| println!("login with password of {} chars", text.chars().count()));

    let mut controls: Vec<Box<dyn Widget>> = vec![Box::new(account), Box::new(password)];

    let script = [
        (
            0,
            Event::MouseDown {
                x: 2,
                y: 2,
                button: MouseButton::Left,
            },
        ),
        (0, Event::TextInput('b')),
        (0, Event::TextInput('o')),
        (0, Event::TextInput('b')),
        (1, Event::FocusIn),
        (1, Event::TextInput('h')),
        (1, Event::TextInput('u')),
        (1, Event::TextInput('n')),
        (1, Event::TextInput('t')),
        (
            1,
            Event::KeyDown {
                key: Key::Enter,
                modifiers: Modifiers::NONE,
            },
        ),
    ];

    let mut total_ms = 0.0;
    let frame_ms = 16.0;
    for (target, event) in script {
        total_ms += frame_ms;
        for control in controls.iter_mut() {
            control.update(total_ms, frame_ms);
        }

        controls[target].event(&event);

        let mut ctx = PaintContext::new();
        for control in controls.iter_mut() {
            if control.needs_layout() {
                control.layout(Constraints::unbounded());
            }
            control.paint(&mut ctx);
            control.clear_dirty();
        }
        for command in ctx.take_commands() {
            println!("  {command:?}");
        }
    }

    Ok(())
}
