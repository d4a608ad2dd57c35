//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the active view and overlay, the chat log and composer, the board with its
//! selection and drag gesture, and the style sheet every widget reads colors
//! from.

use std::borrow::Cow;

use huddle_protocol::dummy::{BOARD_SUGGESTIONS, CHAT_SUGGESTIONS};
use huddle_protocol::{
    Board, ChatLog, Column, Composer, CustomRole, DragLocation, DragResult, Lane, StyleSheet, Task,
    TaskId, ThemeCustomizer, ThemeKey, View, apply_custom_color, apply_theme, filter_suggestions,
};
use tracing::debug;

use crate::customizer_state::CustomizerState;
use crate::event::InputMode;
use crate::gesture::DragGesture;
use crate::palette::UiColors;

/// The panel drawn on top of the current view, if any.
///
/// Overlays take all keyboard input while open.
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    /// No overlay.
    #[default]
    None,
    /// The keybinding help.
    Help,
    /// The theme selector.
    ThemeMenu {
        /// Index of the highlighted theme in [`ThemeKey::all`].
        highlighted: usize,
    },
    /// The theme customizer panel.
    Customizer(CustomizerState),
}

impl Overlay {
    /// Returns `true` if no overlay is open.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The application state.
///
/// Contains all mutable state for the TUI application. Mock data is seeded
/// by the caller; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The mounted view.
    pub view: View,
    /// The open overlay.
    pub overlay: Overlay,
    /// The selected theme.
    pub theme: ThemeKey,
    /// Style properties written by theme and custom color application.
    pub styles: StyleSheet,
    /// The colors last confirmed in the customizer.
    pub customizer: ThemeCustomizer,
    /// Author name for sent messages.
    pub user_name: String,
    /// The chat history.
    pub chat: ChatLog,
    /// The chat input.
    pub composer: Composer,
    /// The task board.
    pub board: Board,
    /// The focused board column.
    pub selected_column: Column,
    /// Index of the selected task within the focused column, if any.
    pub selected_task: Option<usize>,
    /// The in-flight drag gesture, if any.
    pub drag: Option<DragGesture>,
    /// The add-task input, while open on the focused column.
    pub add_task: Option<Composer>,
    /// One-line feedback shown in the status bar.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a new application state with the given chat log and board.
    ///
    /// Starts on the chat view with the default theme applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_protocol::{ThemeKey, View};
    /// use huddle_tui::AppState;
    ///
    /// let state = AppState::new(dummy_chat(), dummy_board());
    /// assert_eq!(state.view, View::Chat);
    /// assert_eq!(state.theme, ThemeKey::Sunflower);
    /// assert_eq!(state.styles.get("--primary"), Some("#FFD700"));
    /// ```
    #[must_use]
    pub fn new(chat: ChatLog, board: Board) -> Self {
        let theme = ThemeKey::default();
        Self {
            view: View::default(),
            overlay: Overlay::None,
            theme,
            styles: StyleSheet::themed(theme),
            customizer: ThemeCustomizer::default(),
            user_name: huddle_config::config::DEFAULT_USER_NAME.to_string(),
            chat,
            composer: Composer::default(),
            board,
            selected_column: Column::Todo,
            selected_task: None,
            drag: None,
            add_task: None,
            status: None,
        }
    }

    /// Returns the resolved terminal colors of the current styles.
    #[must_use]
    pub fn colors(&self) -> UiColors {
        UiColors::from_styles(&self.styles)
    }

    /// Returns how key presses should be interpreted right now.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match &self.overlay {
            Overlay::Help | Overlay::ThemeMenu { .. } => InputMode::Menu,
            Overlay::Customizer(customizer) if customizer.is_editing() => InputMode::Text,
            Overlay::Customizer(_) => InputMode::Menu,
            Overlay::None => match self.view {
                View::Chat => InputMode::Text,
                View::Board if self.add_task.is_some() => InputMode::Text,
                View::Board => InputMode::Board,
            },
        }
    }

    /// Toggles between the chat and board views.
    ///
    /// A drag in progress is cancelled and the add-task input closed.
    pub fn switch_view(&mut self) {
        self.cancel_drag();
        self.add_task = None;
        self.view = self.view.toggle();
        debug!(view = %self.view, "switched view");
    }

    // --- Overlays ---

    /// Returns `true` if the help overlay is open.
    #[must_use]
    pub fn help_visible(&self) -> bool {
        matches!(self.overlay, Overlay::Help)
    }

    /// Toggles the help overlay visibility.
    ///
    /// When help is shown, other interactions are blocked until
    /// help is dismissed.
    pub fn toggle_help(&mut self) {
        self.overlay = if self.help_visible() {
            Overlay::None
        } else {
            Overlay::Help
        };
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed,
    /// `false` if help was not visible.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible() {
            self.overlay = Overlay::None;
            true
        } else {
            false
        }
    }

    /// Opens the theme menu with the current theme highlighted.
    pub fn open_theme_menu(&mut self) {
        self.overlay = Overlay::ThemeMenu {
            highlighted: self.theme.index(),
        };
    }

    /// Opens the customizer on the last confirmed colors.
    pub fn open_customizer(&mut self) {
        self.overlay = Overlay::Customizer(CustomizerState::new(self.customizer.clone()));
    }

    /// Closes whatever overlay is open, keeping customizer colors.
    pub fn close_overlay(&mut self) {
        if let Overlay::Customizer(customizer) = std::mem::take(&mut self.overlay) {
            self.customizer = customizer.into_draft();
        }
    }

    // --- Themes ---

    /// Applies `key` to the style sheet and makes it the current theme.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_protocol::ThemeKey;
    /// use huddle_tui::AppState;
    ///
    /// let mut state = AppState::new(dummy_chat(), dummy_board());
    /// state.set_theme(ThemeKey::Lagoon);
    /// assert_eq!(state.styles.get("--ring"), Some("#06B6D4"));
    /// ```
    pub fn set_theme(&mut self, key: ThemeKey) {
        apply_theme(key, &mut self.styles);
        self.theme = key;
        debug!(theme = %key, "theme changed");
    }

    /// Applies a confirmed custom color and records it.
    pub fn set_custom_color(&mut self, role: CustomRole, hex: &str) {
        apply_custom_color(role, hex, &mut self.styles);
        self.customizer.set(role, hex);
    }

    // --- Text input ---

    /// Returns the focused text input, if any.
    #[must_use]
    pub fn active_input(&self) -> Option<&Composer> {
        match &self.overlay {
            Overlay::Customizer(customizer) => customizer.editor(),
            Overlay::None => match self.view {
                View::Chat => Some(&self.composer),
                View::Board => self.add_task.as_ref(),
            },
            _ => None,
        }
    }

    /// Returns the focused text input for editing, if any.
    pub fn active_input_mut(&mut self) -> Option<&mut Composer> {
        match &mut self.overlay {
            Overlay::Customizer(customizer) => customizer.editor_mut(),
            Overlay::None => match self.view {
                View::Chat => Some(&mut self.composer),
                View::Board => self.add_task.as_mut(),
            },
            _ => None,
        }
    }

    /// Returns the suggestions matching the focused chat or add-task input.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'static str> {
        if !self.overlay.is_none() {
            return Vec::new();
        }
        match self.view {
            View::Chat => filter_suggestions(self.composer.text(), &CHAT_SUGGESTIONS),
            View::Board => self
                .add_task
                .as_ref()
                .map(|input| filter_suggestions(input.text(), &BOARD_SUGGESTIONS))
                .unwrap_or_default(),
        }
    }

    /// Replaces the focused input with the first suggestion.
    ///
    /// Returns `false` if there is nothing to accept.
    pub fn accept_suggestion(&mut self) -> bool {
        let Some(suggestion) = self.suggestions().first().copied() else {
            return false;
        };
        match self.active_input_mut() {
            Some(input) => {
                input.set_text(suggestion);
                true
            }
            None => false,
        }
    }

    /// Sends the composer text as the configured user.
    ///
    /// Blank input is ignored and left in place. Returns `true` if a message
    /// was appended.
    pub fn send_message(&mut self) -> bool {
        if self.composer.text().trim().is_empty() {
            return false;
        }
        let text = self.composer.take();
        match self.chat.send(&self.user_name, &text) {
            Some(message) => {
                debug!(id = message.id, author = %message.author, "message sent");
                true
            }
            None => false,
        }
    }

    // --- Board ---

    /// Returns a reference to the currently focused lane.
    fn selected_lane_ref(&self) -> &Lane {
        self.board.lane(self.selected_column)
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        self.selected_column = self
            .selected_column
            .previous()
            .unwrap_or(Column::Done);
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        self.selected_column = self.selected_column.next().unwrap_or(Column::Todo);
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column.
    pub fn navigate_up(&mut self) {
        let lane = self.selected_lane_ref();
        if lane.is_empty() {
            self.selected_task = None;
            return;
        }

        match self.selected_task {
            Some(idx) if idx > 0 => {
                self.selected_task = Some(idx - 1);
            }
            Some(_) => {
                // Wrap to bottom
                self.selected_task = Some(lane.len().saturating_sub(1));
            }
            None => {
                self.selected_task = Some(0);
            }
        }
    }

    /// Moves the task selection down within the current column.
    pub fn navigate_down(&mut self) {
        let lane = self.selected_lane_ref();
        if lane.is_empty() {
            self.selected_task = None;
            return;
        }

        let max_idx = lane.len().saturating_sub(1);
        match self.selected_task {
            Some(idx) if idx < max_idx => {
                self.selected_task = Some(idx + 1);
            }
            // Wrap to top, or select the first task
            Some(_) | None => {
                self.selected_task = Some(0);
            }
        }
    }

    /// Returns a reference to the currently selected task, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::dummy::{dummy_board, dummy_chat};
    /// use huddle_tui::AppState;
    ///
    /// let mut state = AppState::new(dummy_chat(), dummy_board());
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down(); // Select first task
    /// assert_eq!(state.selected_task().unwrap().content, "Design new landing page");
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let task_idx = self.selected_task?;
        self.selected_lane_ref().tasks.get(task_idx)
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Ensures the task selection is valid for the current column.
    fn clamp_task_selection(&mut self) {
        let lane = self.selected_lane_ref();
        if lane.is_empty() {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= lane.len()
        {
            self.selected_task = Some(lane.len().saturating_sub(1));
        }
    }

    /// Opens the add-task input on the focused column.
    pub fn open_add_task(&mut self) {
        self.cancel_drag();
        self.add_task = Some(Composer::default());
    }

    /// Adds the add-task input as a task at the end of the focused column.
    ///
    /// On success the input closes and the new task is selected. Blank input
    /// is ignored and the input stays open.
    pub fn submit_task(&mut self) -> Option<TaskId> {
        let input = self.add_task.as_ref()?;
        let column = self.selected_column;
        let id = self.board.add_task(column, input.text())?;

        debug!(%id, column = column.id(), "task added");
        self.add_task = None;
        self.selected_task = Some(self.board.lane(column).len() - 1);
        Some(id)
    }

    // --- Drag and drop ---

    /// Grabs the selected task, starting a drag gesture.
    ///
    /// Returns `false` if no task is selected.
    pub fn grab_selected(&mut self) -> bool {
        match self.selected_task {
            Some(index) if index < self.selected_lane_ref().len() => {
                self.grab(DragLocation::new(self.selected_column, index));
                true
            }
            _ => false,
        }
    }

    /// Starts a drag gesture at `source`.
    pub fn grab(&mut self, source: DragLocation) {
        debug!(column = source.column.id(), index = source.index, "task grabbed");
        self.selected_column = source.column;
        self.selected_task = Some(source.index);
        self.drag = Some(DragGesture::grab(source));
    }

    /// Drops the grabbed task on its current target.
    pub fn drop_drag(&mut self) {
        if let Some(gesture) = self.drag.take() {
            self.finish_drag(&gesture.drop());
        }
    }

    /// Cancels the drag gesture, leaving the board untouched.
    pub fn cancel_drag(&mut self) {
        if let Some(gesture) = self.drag.take() {
            self.finish_drag(&gesture.cancel());
        }
    }

    /// Applies the end-event of a drag gesture and selects the moved task.
    ///
    /// A result without a destination leaves the board as it was.
    pub fn finish_drag(&mut self, result: &DragResult) {
        self.drag = None;
        let Some(destination) = result.destination else {
            debug!(column = result.source.column.id(), "drag cancelled");
            self.selected_column = result.source.column;
            self.selected_task = Some(result.source.index);
            return;
        };

        debug!(
            from = result.source.column.id(),
            from_index = result.source.index,
            to = destination.column.id(),
            to_index = destination.index,
            "task moved"
        );
        self.board.apply_drag(result);
        self.selected_column = destination.column;
        self.selected_task = Some(destination.index);
    }

    /// Returns the board as it should be drawn: the drag preview while a
    /// gesture is live, otherwise the board itself.
    #[must_use]
    pub fn display_board(&self) -> Cow<'_, Board> {
        match &self.drag {
            Some(gesture) => Cow::Owned(gesture.preview(&self.board)),
            None => Cow::Borrowed(&self.board),
        }
    }

    /// Returns the focused column and highlighted index as drawn.
    ///
    /// While dragging this is the drop target.
    #[must_use]
    pub fn display_selection(&self) -> (Column, Option<usize>) {
        match &self.drag {
            Some(gesture) => {
                let target = gesture.target();
                (target.column, Some(target.index))
            }
            None => (self.selected_column, self.selected_task),
        }
    }
}
