pub mod history;
pub mod model;
pub mod progress;
pub mod session;

pub use history::{HistoryEntry, HistoryLedger};
pub use model::{AnalysisResult, ContentKind, DetectionSignal, SignalWeight, Verdict, DEFAULT_DISCLAIMER};
pub use progress::{ProgressSequence, PROGRESS_STEPS, TICK_INTERVAL_MS};
pub use session::{AnalysisInput, GatewayError, Session, SessionState, ValidationError, MIN_TEXT_CHARS};
