use shared::SessionState;
use yew::prelude::*;

use crate::Model;

pub fn render_progress(model: &Model) -> Html {
    let SessionState::InFlight { progress, .. } = model.session.state() else {
        return html! {};
    };
    let progress = *progress;

    html! {
        <div class="progress-section">
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {progress}%")}></div>
            </div>
            <div class="progress-caption">
                <span>{ stage_caption(progress) }</span>
                <span>{ format!("{progress}%") }</span>
            </div>
        </div>
    }
}

fn stage_caption(progress: u8) -> &'static str {
    if progress < 30 {
        "Preprocessing..."
    } else if progress < 60 {
        "Running models..."
    } else if progress < 90 {
        "Computing signals..."
    } else {
        "Finalizing..."
    }
}
