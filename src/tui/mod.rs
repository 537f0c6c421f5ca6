//! Interactive terminal interface.
//!
//! [`App`] owns all view state and the submit/settle state machine; all
//! rendering lives in [`view`]. Query settlements arrive over an mpsc
//! channel, so a second submission can race an in-flight one — whichever
//! settles last overwrites the displayed state. That race is accepted, not
//! guarded against, and there is no cancellation.

mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::application::ConsultVerbUseCase;
use crate::domain::{ConjugationResult, DomainError, SearchHistory, Tense, UNKNOWN_QUERY_MESSAGE};

/// Settlement of one consultation task.
pub type ConsultOutcome = Result<ConjugationResult, DomainError>;

/// Which form control receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Verb,
    Tense,
    History,
}

pub struct App {
    use_case: Arc<ConsultVerbUseCase>,
    outcome_tx: UnboundedSender<ConsultOutcome>,

    verb_input: String,
    tense_index: usize,
    result: Option<ConjugationResult>,
    loading: bool,
    error: Option<String>,
    history: SearchHistory,

    focus: Focus,
    history_cursor: usize,
    tick: usize,
    should_quit: bool,
}

impl App {
    /// Create the app plus the receiver its consultation tasks settle on.
    pub fn new(use_case: Arc<ConsultVerbUseCase>) -> (Self, UnboundedReceiver<ConsultOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            use_case,
            outcome_tx,
            verb_input: String::new(),
            tense_index: 0,
            result: None,
            loading: false,
            error: None,
            history: SearchHistory::new(),
            focus: Focus::Verb,
            history_cursor: 0,
            tick: 0,
            should_quit: false,
        };
        (app, outcome_rx)
    }

    pub fn verb_input(&self) -> &str {
        &self.verb_input
    }

    pub fn selected_tense(&self) -> Tense {
        Tense::ALL[self.tense_index]
    }

    pub fn result(&self) -> Option<&ConjugationResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The submit control. Ignored while a call is in flight (the control
    /// is disabled) and a no-op for blank input.
    pub fn submit(&mut self) {
        if self.loading {
            return;
        }
        if self.verb_input.trim().is_empty() {
            return;
        }
        self.begin_query();
    }

    /// Select a recent search: populate the verb field and re-query
    /// immediately with the currently selected tense. Unlike the submit
    /// control this is not gated on `loading`, so it can race an
    /// in-flight call.
    pub fn select_history(&mut self, index: usize) {
        let Some(verb) = self.history.get(index).map(str::to_string) else {
            return;
        };
        self.verb_input = verb;
        self.begin_query();
    }

    fn begin_query(&mut self) {
        self.loading = true;
        self.error = None;

        let use_case = self.use_case.clone();
        let verb = self.verb_input.clone();
        let tense = self.selected_tense();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute(&verb, tense).await;
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// Apply a settled consultation.
    pub fn apply_outcome(&mut self, outcome: ConsultOutcome) {
        match outcome {
            Ok(result) => {
                self.history.push(result.verb());
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                warn!("Consultation failed: {err}");
                let msg = err.user_message();
                self.error = Some(if msg.trim().is_empty() {
                    UNKNOWN_QUERY_MESSAGE.to_string()
                } else {
                    msg
                });
            }
        }
        self.loading = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Enter => match self.focus {
                Focus::History => self.select_history(self.history_cursor),
                _ => self.submit(),
            },
            KeyCode::Backspace => {
                if self.focus == Focus::Verb {
                    self.verb_input.pop();
                }
            }
            KeyCode::Left | KeyCode::Up => match self.focus {
                Focus::Tense => {
                    self.tense_index =
                        (self.tense_index + Tense::ALL.len() - 1) % Tense::ALL.len();
                }
                Focus::History => {
                    self.history_cursor = self.history_cursor.saturating_sub(1);
                }
                Focus::Verb => {}
            },
            KeyCode::Right | KeyCode::Down => match self.focus {
                Focus::Tense => {
                    self.tense_index = (self.tense_index + 1) % Tense::ALL.len();
                }
                Focus::History => {
                    if self.history_cursor + 1 < self.history.len() {
                        self.history_cursor += 1;
                    }
                }
                Focus::Verb => {}
            },
            KeyCode::Char(c) => {
                if self.focus == Focus::Verb {
                    self.verb_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order: &[Focus] = if self.history.is_empty() {
            &[Focus::Verb, Focus::Tense]
        } else {
            &[Focus::Verb, Focus::Tense, Focus::History]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.history_cursor = self.history_cursor.min(self.history.len().saturating_sub(1));
    }

    pub(crate) fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn history_cursor(&self) -> usize {
        self.history_cursor.min(self.history.len().saturating_sub(1))
    }

    pub(crate) fn spinner_tick(&self) -> usize {
        self.tick
    }

    async fn run_loop(
        mut self,
        terminal: &mut ratatui::DefaultTerminal,
        mut outcome_rx: UnboundedReceiver<ConsultOutcome>,
    ) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(120));

        loop {
            terminal.draw(|frame| view::render(frame, &self))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                },
                Some(outcome) = outcome_rx.recv() => self.apply_outcome(outcome),
                _ = ticker.tick() => self.tick = self.tick.wrapping_add(1),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Run the interactive interface until the user quits.
pub async fn run(use_case: Arc<ConsultVerbUseCase>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let (app, outcome_rx) = App::new(use_case);
    let result = app.run_loop(&mut terminal, outcome_rx).await;
    ratatui::restore();
    result
}
