//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::path::PathBuf;

use huddle_config::Config;
use huddle_protocol::{Board, ChatLog, Composer, DragLocation, Message, ThemeKey, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{info, warn};

use crate::{
    AppState, Overlay,
    event::{event_to_message, poll_event},
    layout::{
        BoardHit, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, board_hit,
        content_area, split_status_bar, visible_cards,
    },
    palette::UiColors,
    terminal::AppTerminal,
    widgets::{
        BoardView, ChatView, calculate_scroll_offset, key_hints, render_board, render_chat,
        render_customizer, render_help_overlay, render_status_bar, render_theme_menu,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects mouse hit-testing).
    header_visible: bool,
    /// Overrides where the theme is saved.
    config_path: Option<PathBuf>,
}

impl App {
    /// Creates a new application with the given chat log and board.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_tui::App;
    ///
    /// let app = App::new(dummy_chat(), dummy_board());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(chat: ChatLog, board: Board) -> Self {
        Self {
            state: AppState::new(chat, board),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config_path: None,
        }
    }

    /// Creates a new application starting from `config`.
    ///
    /// The configured theme is applied and the configured view mounted. The
    /// configured customizer colors only seed the customizer panel.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_config::Config;
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_protocol::{ThemeKey, View};
    /// use huddle_tui::App;
    ///
    /// let config = Config {
    ///     theme: ThemeKey::Lagoon,
    ///     view: View::Board,
    ///     ..Config::default()
    /// };
    /// let app = App::with_config(dummy_chat(), dummy_board(), &config);
    /// assert_eq!(app.state().theme, ThemeKey::Lagoon);
    /// assert_eq!(app.state().view, View::Board);
    /// ```
    #[must_use]
    pub fn with_config(chat: ChatLog, board: Board, config: &Config) -> Self {
        let mut app = Self::new(chat, board);
        app.state.set_theme(config.theme);
        app.state.view = config.view;
        app.state.user_name.clone_from(&config.user_name);
        app.state.customizer = config.customizer.to_customizer();
        app
    }

    /// Saves the theme to `path` instead of the file found at startup.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// Open overlays take every message except `Quit` and `SaveTheme`. While
    /// help is visible, any other message dismisses it.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        let is_mouse = matches!(
            msg,
            Message::MousePress { .. } | Message::MouseDrag { .. } | Message::MouseRelease { .. }
        );
        if !is_mouse {
            self.state.status = None;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::SaveTheme => {
                self.save_theme();
                return;
            }
            _ => {}
        }

        match self.state.overlay {
            Overlay::None => {}
            Overlay::Help => {
                match msg {
                    Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                    _ if is_mouse => {}
                    // Any other key dismisses help
                    _ => {
                        let _ = self.state.dismiss_help();
                    }
                }
                return;
            }
            Overlay::ThemeMenu { .. } => {
                self.update_theme_menu(msg);
                return;
            }
            Overlay::Customizer(_) => {
                self.update_customizer(msg);
                return;
            }
        }

        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::SwitchView => self.state.switch_view(),
            Message::OpenThemeMenu => self.state.open_theme_menu(),
            Message::OpenCustomizer => self.state.open_customizer(),
            Message::MousePress { column, row } => self.handle_press(column, row),
            Message::MouseDrag { column, row } => self.handle_drag(column, row),
            Message::MouseRelease { column, row } => self.handle_release(column, row),
            msg => match self.state.view {
                View::Chat => self.update_chat(msg),
                View::Board => self.update_board(msg),
            },
        }
    }

    /// Handles messages while the theme menu is open.
    fn update_theme_menu(&mut self, msg: Message) {
        let Overlay::ThemeMenu { highlighted } = &mut self.state.overlay else {
            return;
        };
        let count = ThemeKey::all().len();

        match msg {
            Message::NavigateUp => *highlighted = (*highlighted + count - 1) % count,
            Message::NavigateDown => *highlighted = (*highlighted + 1) % count,
            Message::Select => {
                let selected = ThemeKey::from_index(*highlighted);
                self.state.close_overlay();
                if let Some(key) = selected {
                    self.state.set_theme(key);
                }
            }
            Message::Escape | Message::OpenThemeMenu => self.state.close_overlay(),
            Message::OpenCustomizer => self.state.open_customizer(),
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    /// Handles messages while the customizer is open.
    fn update_customizer(&mut self, msg: Message) {
        let Overlay::Customizer(customizer) = &mut self.state.overlay else {
            return;
        };

        if customizer.is_editing() {
            match msg {
                Message::Submit | Message::Select => {
                    if let Some((role, hex)) = customizer.confirm_edit() {
                        self.state.set_custom_color(role, &hex);
                        self.state.status = Some(format!("{} set to {hex}", role.display_name()));
                    }
                }
                Message::Escape => customizer.cancel_edit(),
                msg => {
                    if let Some(editor) = customizer.editor_mut() {
                        edit_line(editor, msg);
                    }
                }
            }
            return;
        }

        match msg {
            Message::NavigateUp => customizer.navigate(-1),
            Message::NavigateDown => customizer.navigate(1),
            Message::Select => customizer.start_edit(),
            Message::Escape | Message::OpenCustomizer => self.state.close_overlay(),
            Message::OpenThemeMenu => {
                self.state.close_overlay();
                self.state.open_theme_menu();
            }
            Message::ToggleHelp => {
                self.state.close_overlay();
                self.state.toggle_help();
            }
            _ => {}
        }
    }

    /// Handles messages for the chat composer.
    fn update_chat(&mut self, msg: Message) {
        match msg {
            Message::Submit => {
                let _ = self.state.send_message();
            }
            Message::Newline => self.state.composer.insert_newline(),
            Message::Format { wrap } => self.state.composer.wrap(wrap),
            Message::AcceptSuggestion => {
                let _ = self.state.accept_suggestion();
            }
            msg => edit_line(&mut self.state.composer, msg),
        }
    }

    /// Handles messages for the board: the add-task input, a drag gesture,
    /// or plain navigation.
    fn update_board(&mut self, msg: Message) {
        if let Some(input) = self.state.add_task.as_mut() {
            match msg {
                Message::Submit => {
                    let _ = self.state.submit_task();
                }
                Message::Escape => self.state.add_task = None,
                Message::AcceptSuggestion => {
                    let _ = self.state.accept_suggestion();
                }
                msg => edit_line(input, msg),
            }
            return;
        }

        if let Some(gesture) = self.state.drag.as_mut() {
            let board = &self.state.board;
            match msg {
                Message::NavigateLeft => gesture.move_left(board),
                Message::NavigateRight => gesture.move_right(board),
                Message::NavigateUp => gesture.move_up(),
                Message::NavigateDown => gesture.move_down(board),
                Message::Grab | Message::Select => self.state.drop_drag(),
                Message::Escape => self.state.cancel_drag(),
                _ => {}
            }
            return;
        }

        match msg {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Grab | Message::Select => {
                let _ = self.state.grab_selected();
            }
            Message::OpenAddTask => self.state.open_add_task(),
            Message::Escape => self.state.clear_selection(),
            _ => {}
        }
    }

    /// Writes the current theme to the config file and reports the outcome
    /// in the status bar.
    fn save_theme(&mut self) {
        let theme = self.state.theme;
        let result = match &self.config_path {
            Some(path) => Config::save_theme(theme, path).map(|()| path.clone()),
            None => Config::remember_theme(theme),
        };

        self.state.status = Some(match result {
            Ok(path) => {
                info!(theme = %theme, path = %path.display(), "theme saved");
                format!("Saved {} theme", theme.name())
            }
            Err(err) => {
                warn!(%err, "failed to save theme");
                format!("Could not save theme: {err}")
            }
        });
    }

    // --- Mouse ---

    /// Returns the board area of the last render.
    fn board_area(&self) -> Rect {
        let (main, _) = split_status_bar(content_area(self.last_area, self.header_visible));
        main
    }

    /// Maps a board hit to a task index in the board as currently drawn.
    fn hit_index(&self, hit: BoardHit) -> usize {
        let board = self.state.display_board();
        let (column, selected) = self.state.display_selection();
        let selected = if column == hit.column { selected } else { None };
        let offset = calculate_scroll_offset(
            selected,
            board.lane(hit.column).len(),
            visible_cards(self.board_area().height),
        );
        offset + hit.slot
    }

    /// Grabs the card under the pointer, or focuses the clicked column.
    fn handle_press(&mut self, column: u16, row: u16) {
        if self.state.view != View::Board || self.state.add_task.is_some() {
            return;
        }
        self.state.cancel_drag();

        let Some(hit) = board_hit(self.board_area(), column, row) else {
            return;
        };
        let index = self.hit_index(hit);
        if index < self.state.board.lane(hit.column).len() {
            self.state.grab(DragLocation::new(hit.column, index));
        } else {
            self.state.selected_column = hit.column;
            self.state.clear_selection();
        }
    }

    /// Moves the drop target to the slot under the pointer.
    fn handle_drag(&mut self, column: u16, row: u16) {
        if self.state.drag.is_none() {
            return;
        }
        let Some(hit) = board_hit(self.board_area(), column, row) else {
            return;
        };
        let index = self.hit_index(hit);
        if let Some(gesture) = self.state.drag.as_mut() {
            gesture.hover(&self.state.board, hit.column, index);
        }
    }

    /// Drops on the slot under the pointer, or cancels outside the board.
    fn handle_release(&mut self, column: u16, row: u16) {
        if self.state.drag.is_none() {
            return;
        }
        if board_hit(self.board_area(), column, row).is_some() {
            self.handle_drag(column, row);
            self.state.drop_drag();
        } else {
            self.state.cancel_drag();
        }
    }

    // --- Rendering ---

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;
        let colors = self.state.colors();

        frame.render_widget(Block::default().style(colors.base()), area);

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            Self::render_terminal_too_small(frame, area, &colors);
            return;
        }

        // Compact mode hides the header to reclaim space
        self.header_visible = area.height >= MIN_HEIGHT_WITH_HEADER;
        if self.header_visible {
            let [header_area, _] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            self.render_header(frame, header_area, &colors);
        }

        let (main, status) = split_status_bar(content_area(area, self.header_visible));
        match self.state.view {
            View::Chat => self.render_chat_area(frame, main, &colors),
            View::Board => self.render_board_area(frame, main, &colors),
        }

        let buf = frame.buffer_mut();
        render_status_bar(
            key_hints(&self.state),
            self.state.status.as_deref(),
            &colors,
            status,
            buf,
        );

        match &self.state.overlay {
            Overlay::None => {}
            Overlay::Help => render_help_overlay(&colors, area, buf),
            Overlay::ThemeMenu { highlighted } => {
                render_theme_menu(self.state.theme, *highlighted, &colors, area, buf);
            }
            Overlay::Customizer(customizer) => render_customizer(customizer, &colors, area, buf),
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect, colors: &UiColors) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(colors.accent())
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(dummy_chat(), dummy_board());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.input_mode())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title, theme and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect, colors: &UiColors) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.accent())
            .style(colors.base());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let theme = self.state.theme.name();
        let cue_width = u16::try_from(theme.len() + " · F1 for help".len()).unwrap_or(0);
        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(cue_width)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("huddle", colors.accent().add_modifier(Modifier::BOLD)),
            Span::raw(" - "),
            Span::styled(self.state.view.title(), colors.base()),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled(theme, colors.heading()),
            Span::styled(" · ", colors.hint()),
            Span::styled("F1", colors.accent()),
            Span::styled(" for help", colors.hint()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders the chat view.
    fn render_chat_area(&self, frame: &mut Frame, area: Rect, colors: &UiColors) {
        let suggestions = self.state.suggestions();
        let view = ChatView {
            chat: &self.state.chat,
            composer: &self.state.composer,
            focused: self.state.overlay.is_none(),
            user_name: &self.state.user_name,
            suggestions: &suggestions,
        };
        render_chat(&view, colors, area, frame.buffer_mut());
    }

    /// Renders the board, or its drag preview while a card is grabbed.
    fn render_board_area(&self, frame: &mut Frame, area: Rect, colors: &UiColors) {
        let board = self.state.display_board();
        let (selected_column, selected_task) = self.state.display_selection();
        let suggestions = self.state.suggestions();
        let view = BoardView {
            board: &board,
            selected_column,
            selected_task,
            dragging: self.state.drag.is_some(),
            add_input: self.state.add_task.as_ref(),
            suggestions: &suggestions,
        };
        render_board(&view, colors, area, frame.buffer_mut());
    }
}

/// Applies a text editing message to a single-line input.
///
/// Messages that are not plain edits are ignored.
fn edit_line(input: &mut Composer, msg: Message) {
    match msg {
        Message::Input { ch } => input.insert_char(ch),
        Message::Backspace => input.backspace(),
        Message::Delete => input.delete(),
        Message::CursorLeft { extend } => input.move_left(extend),
        Message::CursorRight { extend } => input.move_right(extend),
        Message::CursorHome { extend } => input.move_home(extend),
        Message::CursorEnd { extend } => input.move_end(extend),
        _ => {}
    }
}
