use shared::ContentKind;
use yew::prelude::*;

use crate::components::utils::kind_icon_class;
use crate::{Model, Msg};

pub fn render_kind_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="kind-tabs">
            { for ContentKind::ALL.iter().map(|kind| {
                let kind = *kind;
                let active = model.session.kind() == kind;
                html! {
                    <button
                        class={classes!("kind-tab", active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::SelectKind(kind))}
                    >
                        <i class={kind_icon_class(kind)}></i>{ format!(" {}", kind.label()) }
                    </button>
                }
            })}
        </div>
    }
}
