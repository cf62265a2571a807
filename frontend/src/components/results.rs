use std::collections::HashMap;

use shared::{AnalysisResult, ContentKind, DetectionSignal, SessionState, Verdict};
use yew::prelude::*;

use crate::Model;

pub fn render_outcome(model: &Model) -> Html {
    match model.session.state() {
        SessionState::Failed { message, .. } => html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ format!("Error: {message}") }</p>
            </div>
        },
        SessionState::Succeeded { kind, result } => render_result_card(*kind, result),
        _ => html! {},
    }
}

fn render_result_card(kind: ContentKind, result: &AnalysisResult) -> Html {
    let verdict = Verdict::classify(result.ai_probability);

    html! {
        <div class={classes!("results-container", verdict.css_class())}>
            <div class="result-header">
                <span class="result-kind">{ format!("Analysis complete: {}", kind.label()) }</span>
                <span class="result-timing">{ format!("{}ms", result.processing_time_ms) }</span>
            </div>

            { render_verdict_meter(result.ai_probability, verdict) }

            <div class="signal-section">
                <h3>{ format!("Detection Signals ({})", result.signals.len()) }</h3>
                <div class="signal-list">
                    { for result.signals.iter().map(render_signal) }
                </div>
            </div>

            { render_metrics(&result.metrics) }

            <div class="disclaimer">
                <i class="fa-solid fa-circle-info"></i>
                { format!(" {}", result.disclaimer) }
            </div>
        </div>
    }
}

fn render_verdict_meter(ai_probability: f64, verdict: Verdict) -> Html {
    html! {
        <div class="verdict-meter">
            <div class="meter">
                <div class="meter-fill" style={format!("width: {ai_probability}%")}></div>
            </div>
            <div class="meter-readout">
                <span class="meter-value">{ format!("{ai_probability:.0}%") }</span>
                <span class="meter-label">{ verdict.label() }</span>
            </div>
        </div>
    }
}

fn render_signal(signal: &DetectionSignal) -> Html {
    html! {
        <div class={classes!("signal-item", format!("signal-{}", signal.weight))}>
            <span class="signal-dot"></span>
            <div class="signal-body">
                <div class="signal-label">{ &signal.label }</div>
                {
                    if signal.detail.is_empty() {
                        html! {}
                    } else {
                        html! { <div class="signal-detail">{ &signal.detail }</div> }
                    }
                }
            </div>
            <span class="signal-weight">{ signal.weight.to_string() }</span>
        </div>
    }
}

fn render_metrics(metrics: &HashMap<String, serde_json::Value>) -> Html {
    if metrics.is_empty() {
        return html! {};
    }

    // Key order is not meaningful on the wire; sort for a stable layout.
    let mut keys: Vec<&String> = metrics.keys().collect();
    keys.sort();

    html! {
        <div class="metrics-section">
            <h3>{"Forensic Metrics"}</h3>
            <div class="metrics-grid">
                { for keys.into_iter().map(|key| {
                    let value = match &metrics[key] {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    html! {
                        <div class="metric-item">
                            <div class="metric-key">{ key.replace('_', " ") }</div>
                            <div class="metric-value">{ value }</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
