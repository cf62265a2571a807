use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-shield-halved"></i> {" AuthDetect"}</h1>
            <p class="subtitle">{"Upload text, an image, or a video and get a probabilistic AI-vs-human verdict"}</p>
        </header>
    }
}
