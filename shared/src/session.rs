use derive_more::Display;

use crate::model::{AnalysisResult, ContentKind};

/// Minimum trimmed length for text submissions, mirrored by the gateway.
pub const MIN_TEXT_CHARS: usize = 20;

#[derive(Display, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "Text must be at least 20 characters (got {})", _0)]
    TextTooShort(usize),
    #[display(fmt = "Unsupported file type: {}", _0)]
    UnsupportedFileType(String),
    #[display(fmt = "No file selected")]
    NoFileSelected,
}

/// Non-2xx response or transport failure, reduced to the human-readable
/// message the gateway convention prescribes.
#[derive(Display, Clone, Debug, PartialEq, Eq)]
#[display(fmt = "{}", message)]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the user is about to submit. File payloads stay on the frontend side
/// as blobs; validation only needs the MIME type.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisInput {
    Text { body: String },
    Image { mime_type: String },
    Video { mime_type: String },
}

impl AnalysisInput {
    pub fn kind(&self) -> ContentKind {
        match self {
            AnalysisInput::Text { .. } => ContentKind::Text,
            AnalysisInput::Image { .. } => ContentKind::Image,
            AnalysisInput::Video { .. } => ContentKind::Video,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            AnalysisInput::Text { body } => {
                let len = body.trim().chars().count();
                if len < MIN_TEXT_CHARS {
                    Err(ValidationError::TextTooShort(len))
                } else {
                    Ok(())
                }
            }
            AnalysisInput::Image { mime_type } => expect_mime_family(mime_type, "image/"),
            AnalysisInput::Video { mime_type } => expect_mime_family(mime_type, "video/"),
        }
    }
}

fn expect_mime_family(mime_type: &str, family: &str) -> Result<(), ValidationError> {
    if mime_type.is_empty() {
        Err(ValidationError::NoFileSelected)
    } else if mime_type.starts_with(family) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType(mime_type.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Idle,
    InFlight {
        kind: ContentKind,
        started_at: f64,
        progress: u8,
    },
    Succeeded {
        kind: ContentKind,
        result: AnalysisResult,
    },
    Failed {
        kind: ContentKind,
        message: String,
    },
}

/// Single source of truth for the analysis lifecycle. Owned by the
/// orchestration layer; presentation only reads it through `state()`.
///
/// `seq` is the supersession token: every dispatched request captures the
/// value `begin` handed out, and `resolve` refuses outcomes whose token no
/// longer matches. A stale response can therefore never overwrite a newer
/// session, without requiring the transport call itself to be aborted.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    kind: ContentKind,
    seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            kind: ContentKind::Text,
            seq: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SessionState::InFlight { .. })
    }

    /// True while `token` identifies the newest dispatched request.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.seq
    }

    /// Readiness predicate for the submit button.
    pub fn can_submit(&self, input: Option<&AnalysisInput>) -> bool {
        !self.is_in_flight() && input.is_some_and(|i| i.validate().is_ok())
    }

    /// Validates the input and enters `InFlight`, superseding any request
    /// still outstanding. Returns the token the dispatched request must carry
    /// back into `resolve`. On validation failure the state is untouched and
    /// no request may be issued.
    pub fn begin(
        &mut self,
        input: &AnalysisInput,
        started_at: f64,
    ) -> Result<u64, ValidationError> {
        input.validate()?;
        self.kind = input.kind();
        self.seq += 1;
        self.state = SessionState::InFlight {
            kind: self.kind,
            started_at,
            progress: 0,
        };
        Ok(self.seq)
    }

    /// Applies a gateway outcome. Returns false when the outcome belongs to a
    /// superseded request, in which case nothing changes.
    pub fn resolve(
        &mut self,
        token: u64,
        outcome: Result<AnalysisResult, GatewayError>,
    ) -> bool {
        if !self.is_current(token) || !self.is_in_flight() {
            return false;
        }
        let kind = self.kind;
        self.state = match outcome {
            Ok(result) => SessionState::Succeeded { kind, result },
            Err(err) => SessionState::Failed {
                kind,
                message: err.message,
            },
        };
        true
    }

    /// Advances the cosmetic progress value. Never moves backward and only
    /// applies while a request is outstanding.
    pub fn set_progress(&mut self, value: u8) -> bool {
        match &mut self.state {
            SessionState::InFlight { progress, .. } if value > *progress => {
                *progress = value;
                true
            }
            _ => false,
        }
    }

    /// Switching content kind clears all kind-specific state and supersedes
    /// any outstanding request.
    pub fn select_kind(&mut self, kind: ContentKind) -> bool {
        if kind == self.kind {
            return false;
        }
        self.kind = kind;
        self.seq += 1;
        self.state = SessionState::Idle;
        true
    }

    /// Drops a displayed terminal state once the payload it was computed from
    /// has been edited away. Bumps the token so a late response for the old
    /// payload cannot resurface it.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.state = SessionState::Idle;
    }
}
