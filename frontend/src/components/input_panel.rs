use shared::{ContentKind, MIN_TEXT_CHARS};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::utils::{collect_files, debounce, file_size_label};
use crate::{Model, Msg};

pub fn render_input_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let body = match model.session.kind() {
        ContentKind::Text => render_text_input(model, ctx),
        ContentKind::Image | ContentKind::Video => render_file_input(model, ctx),
    };

    html! {
        <div class="input-panel">
            { body }
        </div>
    }
}

fn render_text_input(model: &Model, ctx: &Context<Model>) -> Html {
    let oninput = ctx.link().callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::TextChanged(area.value())
    });

    let words = model.text.split_whitespace().count();
    let chars = model.text.chars().count();
    let trimmed = model.text.trim().chars().count();
    let readiness = if trimmed < MIN_TEXT_CHARS {
        format!("{} more needed", MIN_TEXT_CHARS - trimmed)
    } else {
        "Ready".to_string()
    };

    html! {
        <>
            <textarea
                class="text-input"
                placeholder="Paste text here to analyze (min 20 characters)..."
                value={model.text.clone()}
                oninput={oninput}
            />
            <div class="input-hint">
                <span>{ format!("{words} words, {chars} chars") }</span>
                <span>{ readiness }</span>
            </div>
        </>
    }
}

fn render_file_input(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let kind = model.session.kind();
    let accept = match kind {
        ContentKind::Image => "image/*",
        _ => "video/*",
    };

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input
            .files()
            .as_ref()
            .map(collect_files)
            .unwrap_or_default();

        input.set_value("");
        Msg::FilesChosen(files)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept={accept}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { render_preview(model, ctx) }
            </div>
        </>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file_data) = &model.file else {
        let (icon, formats) = match model.session.kind() {
            ContentKind::Video => ("fa-solid fa-film", "MP4, WEBM, MOV"),
            _ => ("fa-solid fa-image", "JPG, PNG, WEBP, GIF"),
        };
        return html! {
            <div class="upload-placeholder">
                <i class={icon}></i>
                <p>{ format!("Drag & drop your {} here, or click to browse", model.session.kind()) }</p>
                <p class="file-types">{ format!("Supported formats: {formats}") }</p>
            </div>
        };
    };

    let url = file_data.preview_url.to_string();
    let remove = ctx.link().callback(|e: MouseEvent| {
        e.stop_propagation();
        Msg::RemoveFile
    });

    html! {
        <div class="preview">
            {
                if model.session.kind() == ContentKind::Image {
                    html! { <img class="preview-media" src={url} alt={file_data.file.name()} /> }
                } else {
                    html! { <video class="preview-media" src={url} controls=true /> }
                }
            }
            <div class="preview-caption">
                <span>{ format!("{} ({})", file_data.file.name(), file_size_label(file_data.file.size())) }</span>
                <button class="remove-btn" title="Remove this file" onclick={remove}>
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        </div>
    }
}

pub fn render_submit_button(model: &Model, ctx: &Context<Model>) -> Html {
    let input = model.current_input();
    let can_submit = model.session.can_submit(input.as_ref());
    let link = ctx.link().clone();

    html! {
        <button
            class="analyze-btn"
            disabled={!can_submit}
            onclick={debounce(300, move || link.callback(|_| Msg::Submit).emit(()))}
        >
            {
                if model.session.is_in_flight() {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Run Forensic Analysis"}</> }
                }
            }
        </button>
    }
}
