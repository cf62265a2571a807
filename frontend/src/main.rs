use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use shared::{
    AnalysisInput, AnalysisResult, ContentKind, GatewayError, HistoryLedger, ProgressSequence,
    Session, ValidationError,
};
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;

use components::{
    handlers, header, history_panel, input_panel, kind_tabs, progress_bar, results, utils,
};

/// The selected file plus its preview handle. Dropping the `ObjectUrl`
/// revokes the underlying blob URL.
pub struct FileData {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    // Input events
    SelectKind(ContentKind),
    TextChanged(String),
    FilesChosen(Vec<GlooFile>),
    HandleDrop(DragEvent),
    SetDragging(bool),
    RemoveFile,

    // Analysis lifecycle
    Submit,
    ProgressTick,
    GatewayResolved(u64, Result<AnalysisResult, GatewayError>),

    // History
    ClearHistory,
}

pub struct Model {
    pub session: Session,
    pub history: HistoryLedger,
    pub text: String,
    pub file: Option<FileData>,
    pub is_dragging: bool,
    pub local_error: Option<ValidationError>,
    // Ticker driving the synthetic progress; scoped to the current request.
    pub progress_timer: Option<Interval>,
    pub progress_seq: ProgressSequence,
}

impl Model {
    /// The payload the current kind would submit, if one is present.
    pub fn current_input(&self) -> Option<AnalysisInput> {
        match self.session.kind() {
            ContentKind::Text => Some(AnalysisInput::Text {
                body: self.text.clone(),
            }),
            ContentKind::Image => self.file.as_ref().map(|fd| AnalysisInput::Image {
                mime_type: fd.file.raw_mime_type(),
            }),
            ContentKind::Video => self.file.as_ref().map(|fd| AnalysisInput::Video {
                mime_type: fd.file.raw_mime_type(),
            }),
        }
    }

    /// Label a completed analysis gets in the history ledger.
    pub fn display_name(&self) -> String {
        match self.session.kind() {
            ContentKind::Text => utils::truncate_label(self.text.trim(), 60),
            ContentKind::Image | ContentKind::Video => self
                .file
                .as_ref()
                .map(|fd| fd.file.name())
                .unwrap_or_else(|| "Untitled".to_string()),
        }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::new(),
            history: HistoryLedger::new(),
            text: String::new(),
            file: None,
            is_dragging: false,
            local_error: None,
            progress_timer: None,
            progress_seq: ProgressSequence::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input events
            Msg::SelectKind(kind) => handlers::handle_select_kind(self, kind),
            Msg::TextChanged(text) => handlers::handle_text_changed(self, text),
            Msg::FilesChosen(files) => handlers::handle_files_chosen(self, files),
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::RemoveFile => handlers::handle_remove_file(self),

            // Analysis lifecycle
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::ProgressTick => handlers::handle_progress_tick(self),
            Msg::GatewayResolved(token, outcome) => {
                handlers::handle_gateway_resolved(self, token, outcome)
            }

            // History
            Msg::ClearHistory => {
                self.history.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                    { kind_tabs::render_kind_tabs(self, ctx) }
                    { input_panel::render_input_panel(self, ctx) }
                    { input_panel::render_submit_button(self, ctx) }
                    { progress_bar::render_progress(self) }
                    { utils::render_local_error(self) }
                    { results::render_outcome(self) }
                    { history_panel::render_history(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"AuthDetect · AI Content Authenticity Detector"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
