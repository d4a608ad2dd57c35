//! Theme customizer panel state.
//!
//! The panel lists the three customizable roles with their current hex
//! colors. Selecting a role opens an inline editor prefilled with its value;
//! confirming a valid `#RRGGBB` color hands it back to the caller to apply.

use huddle_protocol::color::parse_hex;
use huddle_protocol::{Composer, CustomRole, ThemeCustomizer};
use tracing::warn;

/// State for the theme customizer panel.
#[derive(Debug, Clone)]
pub struct CustomizerState {
    /// The colors being edited.
    draft: ThemeCustomizer,
    /// Index of the selected role in [`CustomRole::all`].
    selected: usize,
    /// The inline editor, while a color is being edited.
    editor: Option<Composer>,
    /// Why the last confirmation was rejected.
    error: Option<String>,
}

impl CustomizerState {
    /// Creates a new customizer state holding `draft`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle_protocol::{CustomRole, ThemeCustomizer};
    /// use huddle_tui::customizer_state::CustomizerState;
    ///
    /// let state = CustomizerState::new(ThemeCustomizer::default());
    /// assert_eq!(state.selected_role(), CustomRole::Primary);
    /// assert!(!state.is_editing());
    /// ```
    #[must_use]
    pub fn new(draft: ThemeCustomizer) -> Self {
        Self {
            draft,
            selected: 0,
            editor: None,
            error: None,
        }
    }

    /// Returns the colors being edited.
    #[must_use]
    pub fn draft(&self) -> &ThemeCustomizer {
        &self.draft
    }

    /// Returns the selected role.
    #[must_use]
    pub fn selected_role(&self) -> CustomRole {
        let roles = CustomRole::all();
        roles[self.selected.min(roles.len() - 1)]
    }

    /// Returns whether a color is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Returns the inline editor, if open.
    #[must_use]
    pub fn editor(&self) -> Option<&Composer> {
        self.editor.as_ref()
    }

    /// Returns the inline editor for text input, if open.
    pub fn editor_mut(&mut self) -> Option<&mut Composer> {
        self.editor.as_mut()
    }

    /// Returns the last validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves the role selection, wrapping around.
    ///
    /// # Arguments
    ///
    /// * `delta` - Direction to navigate (positive = down, negative = up)
    pub fn navigate(&mut self, delta: i32) {
        if self.is_editing() {
            return;
        }
        let count = CustomRole::all().len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(count) as usize;
    }

    /// Opens the editor on the selected role, prefilled with its color.
    pub fn start_edit(&mut self) {
        let current = self.draft.get(self.selected_role());
        let mut editor = Composer::with_text(current);
        editor.select_all();
        self.editor = Some(editor);
        self.error = None;
    }

    /// Confirms the edit.
    ///
    /// Returns the role and the accepted color when the input is a valid
    /// `#RRGGBB` string. Invalid input keeps the editor open and records the
    /// error.
    pub fn confirm_edit(&mut self) -> Option<(CustomRole, String)> {
        let editor = self.editor.as_ref()?;
        let role = self.selected_role();
        let value = editor.text().trim().to_string();

        match parse_hex(&value) {
            Ok(_) => {
                self.draft.set(role, value.clone());
                self.editor = None;
                self.error = None;
                Some((role, value))
            }
            Err(err) => {
                warn!(role = role.display_name(), %err, "rejected custom color");
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Closes the editor without changing the draft.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.error = None;
    }

    /// Takes the colors out of this state, consuming it.
    #[must_use]
    pub fn into_draft(self) -> ThemeCustomizer {
        self.draft
    }
}
