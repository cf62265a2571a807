use shared::{HistoryEntry, Verdict};
use yew::prelude::*;

use crate::components::utils::kind_icon_class;
use crate::{Model, Msg};

pub fn render_history(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <section class="history-section">
            <div class="history-header">
                <h2>{"Analysis History"}</h2>
                <span class="history-count">{ format!("{} analyses performed", model.history.len()) }</span>
                {
                    if model.history.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <button
                                class="clear-history-btn"
                                onclick={link.callback(|_| Msg::ClearHistory)}
                            >
                                <i class="fa-solid fa-trash"></i>{" Clear All"}
                            </button>
                        }
                    }
                }
            </div>
            {
                if model.history.is_empty() {
                    html! { <p class="history-empty">{"No analyses yet. Results will appear here."}</p> }
                } else {
                    html! {
                        <div class="history-list">
                            { for model.history.iter_recent().map(render_history_entry) }
                        </div>
                    }
                }
            }
        </section>
    }
}

fn render_history_entry(entry: &HistoryEntry) -> Html {
    let verdict = Verdict::classify(entry.result.ai_probability);

    html! {
        <div class="history-entry" key={entry.id.to_string()}>
            <i class={kind_icon_class(entry.kind)}></i>
            <div class="history-entry-body">
                <div class="history-entry-name">{ &entry.display_name }</div>
                <div class="history-entry-time">{ &entry.recorded_at }</div>
            </div>
            <div class={classes!("history-entry-verdict", verdict.css_class())}>
                <div class="history-entry-probability">{ format!("{:.0}%", entry.result.ai_probability) }</div>
                <div class="history-entry-label">{ verdict.label() }</div>
            </div>
        </div>
    }
}
