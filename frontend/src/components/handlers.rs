use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use js_sys::Date;
use shared::{
    AnalysisInput, AnalysisResult, ContentKind, GatewayError, ProgressSequence, SessionState,
    ValidationError, TICK_INTERVAL_MS,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

use crate::api;
use crate::components::utils;
use crate::{FileData, Model, Msg};

pub fn handle_select_kind(model: &mut Model, kind: ContentKind) -> bool {
    if !model.session.select_kind(kind) {
        return false;
    }

    // A kind switch clears every piece of kind-specific state: payload,
    // preview, displayed result, error, and the ticker of any request the
    // switch just superseded.
    model.text.clear();
    model.file = None;
    model.local_error = None;
    model.progress_timer = None;
    model.progress_seq = ProgressSequence::new();
    true
}

pub fn handle_text_changed(model: &mut Model, text: String) -> bool {
    model.text = text;
    model.local_error = None;
    discard_stale_verdict(model);
    true
}

pub fn handle_files_chosen(model: &mut Model, files: Vec<GlooFile>) -> bool {
    let family = match model.session.kind() {
        ContentKind::Image => "image/",
        ContentKind::Video => "video/",
        ContentKind::Text => return false,
    };
    let Some(file) = files.into_iter().next() else {
        return false;
    };

    if !file.raw_mime_type().starts_with(family) {
        log::warn!("Rejecting file with unsupported type: {}", file.raw_mime_type());
        model.local_error = Some(ValidationError::UnsupportedFileType(file.raw_mime_type()));
        return true;
    }

    model.local_error = None;
    let preview_url = ObjectUrl::from(file.clone());
    model.file = Some(FileData { file, preview_url });
    discard_stale_verdict(model);
    true
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        return handle_files_chosen(model, utils::collect_files(&file_list));
    }
    true
}

pub fn handle_remove_file(model: &mut Model) -> bool {
    if model.file.take().is_none() {
        return false;
    }
    model.local_error = None;
    discard_stale_verdict(model);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(input) = model.current_input() else {
        model.local_error = Some(ValidationError::NoFileSelected);
        return true;
    };

    // Validation failure never leaves the session state; the error is
    // reported locally and no request goes out.
    let token = match model.session.begin(&input, Date::now()) {
        Ok(token) => token,
        Err(err) => {
            model.local_error = Some(err);
            return true;
        }
    };
    model.local_error = None;

    // Fresh ticker scoped to this request. Replacing the previous Interval
    // drops it, which cancels a superseded request's ticker outright.
    model.progress_seq = ProgressSequence::new();
    let tick_link = ctx.link().clone();
    model.progress_timer = Some(Interval::new(TICK_INTERVAL_MS, move || {
        tick_link.send_message(Msg::ProgressTick);
    }));

    dispatch(ctx, token, input, model.file.as_ref().map(|fd| fd.file.clone()));
    true
}

// Issues the gateway call and routes the outcome back through the component
// with the supersession token it was dispatched under.
fn dispatch(ctx: &Context<Model>, token: u64, input: AnalysisInput, file: Option<GlooFile>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match input {
            AnalysisInput::Text { body } => api::analyze_text(body).await,
            AnalysisInput::Image { .. } => match file {
                Some(file) => api::analyze_image(file).await,
                None => Err(GatewayError::new("No file selected")),
            },
            AnalysisInput::Video { .. } => match file {
                Some(file) => api::analyze_video(file).await,
                None => Err(GatewayError::new("No file selected")),
            },
        };
        link.send_message(Msg::GatewayResolved(token, outcome));
    });
}

pub fn handle_progress_tick(model: &mut Model) -> bool {
    match model.progress_seq.advance() {
        Some(step) => model.session.set_progress(step),
        None => {
            // Clamped at the last milestone; nothing left for the timer to do.
            model.progress_timer = None;
            false
        }
    }
}

pub fn handle_gateway_resolved(
    model: &mut Model,
    token: u64,
    outcome: Result<AnalysisResult, GatewayError>,
) -> bool {
    if !model.session.is_current(token) {
        // A newer request owns the session now; this response (and the live
        // ticker, which belongs to that newer request) must not be touched.
        log::debug!("Discarding superseded gateway response (token {token})");
        return false;
    }

    model.progress_timer = None;
    model.session.set_progress(100);

    match outcome {
        Ok(result) => {
            model.history.append(
                model.session.kind(),
                model.display_name(),
                result.clone(),
                utils::timestamp_label(),
            );
            model.session.resolve(token, Ok(result))
        }
        Err(err) => model.session.resolve(token, Err(err)),
    }
}

// Editing the payload invalidates a displayed verdict or error. An in-flight
// request is left alone; supersession handles overlap on the next submit.
fn discard_stale_verdict(model: &mut Model) {
    if matches!(
        model.session.state(),
        SessionState::Succeeded { .. } | SessionState::Failed { .. }
    ) {
        model.session.reset();
    }
}
