//! End-to-end tests driving the application through its message loop.

use huddle_config::Config;
use huddle_protocol::dummy::{dummy_board, dummy_chat};
use huddle_protocol::{Column, CustomRole, Message, ThemeKey, View, Wrap, format_message};
use huddle_tui::{App, Overlay};
use proptest::prelude::*;
use ratatui::{Terminal, backend::TestBackend};

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(Message::Input { ch });
    }
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.view(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn formatted_message_reaches_the_log() {
    let mut app = App::new(dummy_chat(), dummy_board());

    type_text(&mut app, "deploy");
    app.update(Message::CursorHome { extend: true });
    app.update(Message::Format { wrap: Wrap::Bold });
    app.update(Message::CursorEnd { extend: false });
    app.update(Message::Newline);
    type_text(&mut app, "now");
    app.update(Message::Submit);

    let sent = app.state().chat.messages().last().unwrap();
    assert_eq!(sent.text, "*deploy*\nnow");
    assert_eq!(format_message(&sent.text), "<strong>deploy</strong><br>now");
    assert!(draw(&mut app, 100, 30).contains("deploy"));
}

#[test]
fn configured_user_authors_messages() {
    let config = Config {
        user_name: "Dana".to_string(),
        ..Config::default()
    };
    let mut app = App::with_config(dummy_chat(), dummy_board(), &config);

    type_text(&mut app, "hi");
    app.update(Message::Submit);

    let sent = app.state().chat.messages().last().unwrap();
    assert_eq!(sent.author, "Dana");
    assert!(sent.is_from("Dana"));
}

#[test]
fn task_moves_across_the_board() {
    let mut app = App::new(dummy_chat(), dummy_board());
    app.update(Message::SwitchView);
    assert_eq!(app.state().view, View::Board);

    // Grab "Fix navigation bug" and drop it at the top of Done
    app.update(Message::NavigateDown);
    app.update(Message::NavigateDown);
    app.update(Message::Grab);
    app.update(Message::NavigateRight);
    app.update(Message::NavigateRight);
    app.update(Message::NavigateUp);
    app.update(Message::Select);

    let board = &app.state().board;
    assert_eq!(board.column(Column::Todo).len(), 1);
    assert_eq!(board.column(Column::Done)[0].content, "Fix navigation bug");
    assert_eq!(board.total_tasks(), 6);
}

#[test]
fn theme_switch_and_customization() {
    let mut app = App::new(dummy_chat(), dummy_board());

    app.update(Message::OpenThemeMenu);
    app.update(Message::NavigateUp);
    app.update(Message::NavigateUp);
    app.update(Message::Select);
    assert_eq!(app.state().theme, ThemeKey::Barbra);
    assert_eq!(app.state().styles.get("--primary"), Some("#EC4899"));

    app.update(Message::OpenCustomizer);
    app.update(Message::NavigateDown);
    app.update(Message::Select);
    type_text(&mut app, "#000000");
    app.update(Message::Submit);
    app.update(Message::Escape);

    assert!(matches!(app.state().overlay, Overlay::None));
    assert_eq!(app.state().customizer.get(CustomRole::Background), "#000000");
    assert_eq!(app.state().styles.get("--background"), Some("0 0% 0%"));
}

fn arb_message() -> impl Strategy<Value = Message> {
    let keys = vec![
        Message::SwitchView,
        Message::NavigateLeft,
        Message::NavigateRight,
        Message::NavigateUp,
        Message::NavigateDown,
        Message::Grab,
        Message::Select,
        Message::Escape,
        Message::OpenAddTask,
        Message::Submit,
        Message::ToggleHelp,
        Message::OpenThemeMenu,
    ];
    prop_oneof![
        4 => proptest::sample::select(keys),
        1 => (b'a'..=b'z').prop_map(|b| Message::Input { ch: char::from(b) }),
        1 => (0u16..90, 0u16..24).prop_map(|(column, row)| Message::MousePress { column, row }),
        1 => (0u16..90, 0u16..24).prop_map(|(column, row)| Message::MouseDrag { column, row }),
        1 => (0u16..90, 0u16..24).prop_map(|(column, row)| Message::MouseRelease { column, row }),
    ]
}

proptest! {
    #[test]
    fn no_message_sequence_loses_tasks(messages in proptest::collection::vec(arb_message(), 0..40)) {
        let mut app = App::new(dummy_chat(), dummy_board());
        let _ = draw(&mut app, 90, 24);

        for msg in messages {
            app.update(msg);
            let _ = draw(&mut app, 90, 24);
        }

        // Submit may add tasks, never remove them
        prop_assert!(app.state().board.total_tasks() >= 6);
        let ids = app.state().board.task_ids();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}
