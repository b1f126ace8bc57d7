//! Application state and core logic

use crate::config::ContactConfig;
use crate::contact::{FieldRegistry, FormOrchestrator, Outcome, PayloadBuilder};
use crate::handoff::{ClipboardSink, LinkSink};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, ContactForm, FieldKind, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Decision phase of a submission
    orchestrator: FormOrchestrator,
    builder: PayloadBuilder,
    /// Where mailto links go when copied
    link_sink: Box<dyn LinkSink>,
    /// Copy the link as soon as a submission is accepted
    copy_on_accept: bool,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig) -> Self {
        Self::with_sink(
            ContactForm::from_config(config),
            Box::new(ClipboardSink),
            config.copy_link_on_accept(),
        )
    }

    pub fn with_sink(
        form: ContactForm,
        link_sink: Box<dyn LinkSink>,
        copy_on_accept: bool,
    ) -> Self {
        Self {
            state: AppState::new(form),
            orchestrator: FormOrchestrator::new(FieldRegistry::contact()),
            builder: PayloadBuilder,
            link_sink,
            copy_on_accept,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fields the form is validated and drawn from
    pub fn registry(&self) -> &FieldRegistry {
        self.orchestrator.registry()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => self.copy_last_link(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Enter if self.state.form.is_submit_row_active() => self.submit(),
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    /// Editing keys for the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };

        match (field.kind(), key.code) {
            (FieldKind::Text, KeyCode::Char(c)) if plain => field.push_char(c),
            (FieldKind::Text, KeyCode::Backspace) => field.pop_char(),
            (FieldKind::Text, KeyCode::Enter) if field.is_multiline => field.push_char('\n'),

            (FieldKind::Choice, KeyCode::Left | KeyCode::Up) => field.prev_option(),
            (FieldKind::Choice, KeyCode::Right | KeyCode::Down | KeyCode::Char(' ')) => {
                field.next_option()
            }
            (FieldKind::Choice, KeyCode::Backspace | KeyCode::Delete) => field.pop_char(),

            (FieldKind::Checklist, KeyCode::Up | KeyCode::Char('k')) => field.prev_option(),
            (FieldKind::Checklist, KeyCode::Down | KeyCode::Char('j')) => field.next_option(),
            (FieldKind::Checklist, KeyCode::Char(' ')) => field.toggle_at_cursor(),

            (_, KeyCode::Enter) => self.state.form.next_field(),
            _ => {}
        }
    }

    /// Pasted text goes into the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        self.copy_message = None;
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.push_str(text);
        }
    }

    /// Run one submission attempt against the live form.
    ///
    /// The triggering key is always consumed here and never reaches field
    /// editing, whatever the outcome.
    pub fn submit(&mut self) {
        self.state.errors.clear();

        match self.orchestrator.attempt_submit(&self.state.form) {
            Outcome::Rejected { form_state, focus } => {
                self.state.errors.show(&form_state);
                self.state.status.report_rejection(&form_state);
                self.state.form.focus(focus);
            }
            Outcome::Accepted { payload } => {
                let request = self.builder.build(&payload);
                self.state.status.report_acceptance(&request);
                if self.copy_on_accept {
                    self.deliver_link(&request.uri);
                }
                self.state.last_link = Some(request.uri);
                self.state.form.reset();
            }
        }
    }

    fn copy_last_link(&mut self) {
        match self.state.last_link.clone() {
            Some(uri) => self.deliver_link(&uri),
            None => self.copy_message = Some("Nothing to copy yet".to_string()),
        }
    }

    fn deliver_link(&mut self, uri: &str) {
        match self.link_sink.deliver(uri) {
            Ok(()) => self.copy_message = Some("Email link copied to clipboard".to_string()),
            Err(err) => {
                tracing::warn!("Failed to copy email link: {err:#}");
                self.copy_message = Some("Could not copy email link".to_string());
            }
        }
    }
}
