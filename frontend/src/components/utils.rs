use std::cell::RefCell;
use std::rc::Rc;

use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::ContentKind;
use wasm_bindgen::JsValue;
use web_sys::FileList;
use yew::prelude::*;

use crate::Model;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn collect_files(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

/// Char-safe truncation with an ellipsis for history labels.
pub fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let head: String = value.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

pub fn timestamp_label() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

pub fn file_size_label(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

pub fn kind_icon_class(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "fa-solid fa-file-lines",
        ContentKind::Image => "fa-solid fa-image",
        ContentKind::Video => "fa-solid fa-film",
    }
}

pub fn render_local_error(model: &Model) -> Html {
    if let Some(error) = &model.local_error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error.to_string() }</p>
            </div>
        }
    } else {
        html! {}
    }
}
