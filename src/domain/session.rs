//! Edit session state machine.
//!
//! The session owns the working image history, the pending preview, the
//! active template and its parameter values, and a single error slot.
//! Generation is two-phase: [`EditSession::begin_generation`] hands out a
//! request and [`EditSession::complete_generation`] resolves it. While a
//! request is outstanding, template and parameter mutation and a second
//! generation are rejected.

use super::generation::{GenerationError, SessionError};
use super::history::EditHistory;
use super::prompt::{Instruction, compile};
use super::template::{ParamValue, ParamValues, Template, default_template, lookup};
use super::{AppError, Image};
use crate::ports::ImageGenerator;

/// Observable session state, derived from the session's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No working image.
    Empty,
    /// Working image present, nothing pending.
    Ready,
    /// A generation request is in flight.
    Generating,
    /// A generated preview awaits apply or discard.
    PreviewPending,
}

/// An outstanding generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub ticket: u64,
    pub image: Image,
    pub instruction: Instruction,
}

#[derive(Debug)]
pub struct EditSession {
    template: &'static Template,
    values: ParamValues,
    history: EditHistory<Image>,
    pending: Option<Image>,
    error: Option<SessionError>,
    in_flight: Option<u64>,
    /// Ticket whose request was abandoned by load or clear but has not returned yet.
    abandoned: Option<u64>,
    next_ticket: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create an empty session with the default template selected.
    pub fn new() -> Self {
        let template = default_template();
        Self {
            template,
            values: template.default_values(),
            history: EditHistory::new(),
            pending: None,
            error: None,
            in_flight: None,
            abandoned: None,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.in_flight.is_some() {
            SessionState::Generating
        } else if self.pending.is_some() {
            SessionState::PreviewPending
        } else if self.history.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Ready
        }
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    pub fn values(&self) -> &ParamValues {
        &self.values
    }

    /// The image at the history cursor.
    pub fn working_image(&self) -> Option<&Image> {
        self.history.current()
    }

    pub fn pending_preview(&self) -> Option<&Image> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn history(&self) -> &EditHistory<Image> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Image offered for export or library save: the preview if any, else the working image.
    pub fn export_candidate(&self) -> Option<&Image> {
        self.pending.as_ref().or_else(|| self.history.current())
    }

    /// Start a new history rooted at `image`. Valid from any state.
    ///
    /// An outstanding generation is abandoned; its result will be dropped.
    pub fn load_image(&mut self, image: Image) {
        self.history.reset(image);
        self.pending = None;
        self.error = None;
        self.abandon_in_flight();
    }

    /// Switch templates and reseed parameter values with the new defaults.
    pub fn select_template(&mut self, id: &str) -> Result<(), AppError> {
        self.ensure_idle()?;
        let template = lookup(id).ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?;
        self.template = template;
        self.values = template.default_values();
        self.error = None;
        Ok(())
    }

    /// Update one parameter of the active template.
    pub fn set_parameter(&mut self, id: &str, value: ParamValue) -> Result<(), AppError> {
        self.ensure_idle()?;
        let def = self
            .template
            .param(id)
            .ok_or_else(|| AppError::invalid_parameter(self.template.id, id, "unknown parameter"))?;
        def.validate(&value).map_err(|reason| AppError::invalid_parameter(self.template.id, id, reason))?;
        self.values.insert(id, value);
        Ok(())
    }

    /// Compile the instruction and enter `Generating`.
    ///
    /// Returns `None` without side effects when there is no working image or a
    /// request is still outstanding, including one abandoned by load or clear.
    /// A compile failure records a validation error and also returns `None`.
    /// Any pending preview is dropped.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if self.in_flight.is_some() {
            tracing::debug!("Ignoring generate request: already generating");
            return None;
        }
        if let Some(ticket) = self.abandoned {
            tracing::debug!(ticket, "Ignoring generate request: abandoned request still running");
            return None;
        }
        let image = self.history.current()?.clone();

        self.error = None;
        self.pending = None;

        let instruction = match compile(self.template, &self.values) {
            Ok(instruction) => instruction,
            Err(err) => {
                self.error = Some(SessionError::validation(err.to_string()));
                return None;
            }
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        tracing::debug!(ticket, template = self.template.id, "Dispatching generation");

        Some(GenerationRequest { ticket, image, instruction })
    }

    /// Resolve the request identified by `ticket`.
    ///
    /// Success sets the pending preview; failure fills the error slot. History
    /// is never touched. Returns false if the ticket is stale.
    pub fn complete_generation(
        &mut self,
        ticket: u64,
        result: Result<Image, GenerationError>,
    ) -> bool {
        if self.abandoned == Some(ticket) {
            self.abandoned = None;
            tracing::debug!(ticket, "Dropping result of abandoned generation");
            return false;
        }
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket, "Ignoring result for unknown ticket");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(image) => {
                self.pending = Some(image);
            }
            Err(err) => {
                tracing::warn!(error = %err, category = ?err.category(), "Generation failed");
                self.error = Some(SessionError::from_generation(&err));
            }
        }
        true
    }

    /// Run both generation phases against `generator`.
    ///
    /// Returns true if a request was dispatched.
    pub fn generate<G: ImageGenerator + ?Sized>(&mut self, generator: &G) -> bool {
        let Some(request) = self.begin_generation() else {
            return false;
        };
        let result = generator.generate(&request.image, &request.instruction);
        self.complete_generation(request.ticket, result)
    }

    /// Commit the pending preview as the new history tail.
    pub fn apply(&mut self) -> bool {
        match self.pending.take() {
            Some(image) => {
                self.history.commit(image);
                true
            }
            None => false,
        }
    }

    /// Drop the pending preview.
    pub fn discard(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn undo(&mut self) -> bool {
        self.step(EditHistory::undo)
    }

    pub fn redo(&mut self) -> bool {
        self.step(EditHistory::redo)
    }

    /// Reset to `Empty`.
    pub fn clear(&mut self) {
        self.history.clear();
        self.pending = None;
        self.error = None;
        self.abandon_in_flight();
    }

    fn abandon_in_flight(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            self.abandoned = Some(ticket);
        }
    }

    fn step(&mut self, op: fn(&mut EditHistory<Image>) -> bool) -> bool {
        if self.in_flight.is_some() || !op(&mut self.history) {
            return false;
        }
        self.pending = None;
        self.error = None;
        true
    }

    fn ensure_idle(&self) -> Result<(), AppError> {
        if self.in_flight.is_some() {
            return Err(AppError::SessionBusy);
        }
        Ok(())
    }
}
