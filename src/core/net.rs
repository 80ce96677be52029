/// Read the response body as text.
///
/// A failure here happens after the status line arrived, but the payload is
/// unusable, so callers treat it like any other transport failure.
pub(crate) async fn get_text(resp: reqwest::Response, _url: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(url = _url, bytes = text.len(), "read response body");

    Ok(text)
}
