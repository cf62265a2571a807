use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use shared::{AnalysisResult, GatewayError};

const API_BASE: &str = "/api";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}

pub async fn analyze_text(body: String) -> Result<AnalysisResult, GatewayError> {
    let request = Request::post(&format!("{API_BASE}/analyze/text"))
        .json(&serde_json::json!({ "text": body }))
        .map_err(|e| GatewayError::new(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::new(e.to_string()))?;
    into_result(response).await
}

pub async fn analyze_image(file: GlooFile) -> Result<AnalysisResult, GatewayError> {
    analyze_upload("image", file).await
}

pub async fn analyze_video(file: GlooFile) -> Result<AnalysisResult, GatewayError> {
    analyze_upload("video", file).await
}

async fn analyze_upload(endpoint: &str, file: GlooFile) -> Result<AnalysisResult, GatewayError> {
    let form_data = web_sys::FormData::new()
        .map_err(|_| GatewayError::new("Failed to build form data"))?;
    form_data
        .append_with_blob("file", file.as_ref())
        .map_err(|_| GatewayError::new("Failed to attach file"))?;

    let request = Request::post(&format!("{API_BASE}/analyze/{endpoint}"))
        .body(form_data)
        .map_err(|e| GatewayError::new(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::new(e.to_string()))?;
    into_result(response).await
}

// Gateway error convention: a non-2xx response carries a JSON body with a
// `detail` field; when that cannot be parsed the message falls back to the
// literal "HTTP <status>".
async fn into_result(response: Response) -> Result<AnalysisResult, GatewayError> {
    if response.ok() {
        return response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| GatewayError::new(format!("Failed to parse response: {e}")));
    }

    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.detail)
        .filter(|detail| !detail.is_empty());
    Err(GatewayError::new(
        detail.unwrap_or_else(|| format!("HTTP {status}")),
    ))
}
