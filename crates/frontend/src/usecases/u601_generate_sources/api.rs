use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u601_generate_sources::GeneratorRequest;
use gloo_net::http::Request;

/// Posts the form body to the generator and returns the response text.
///
/// The text is the base64 archive or the preview source on success, and the
/// generator's error description otherwise.
pub async fn submit(request: &GeneratorRequest) -> UseCaseResult<String> {
    let response = Request::post(request.endpoint())
        .header("Content-Type", GeneratorRequest::CONTENT_TYPE)
        .body(request.body.clone())
        .map_err(|e| UseCaseError::internal(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| UseCaseError::transport(format!("Request failed: {}", e)))?;

    let text = response
        .text()
        .await
        .map_err(|e| UseCaseError::transport(format!("Failed to read response: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        if text.trim().is_empty() {
            return Err(UseCaseError::external(format!("HTTP error: {}", status)));
        }
        return Err(UseCaseError::external(text).with_details(format!("HTTP {}", status)));
    }

    Ok(text)
}
