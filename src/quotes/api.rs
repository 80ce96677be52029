use futures::future::join_all;

use super::model::{FAILED_RESPONSE, MALFORMED_DATA, QuoteResult};
use super::wire::parse_message;
use crate::core::{QuoteError, RawResponse, Transport};

/// Fetch every URL concurrently and map each outcome to a [`QuoteResult`].
///
/// All requests are issued at once and awaited to completion; a failing URL never
/// cancels or short-circuits the others. `result[i]` always describes `urls[i]`,
/// whatever order the responses arrive in. This never fails: every error is folded
/// into a `Failure` record. An empty input issues no calls.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub async fn fetch_quotes<T, I, S>(transport: &T, urls: I) -> Vec<QuoteResult>
where
    T: Transport + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls: Vec<S> = urls.into_iter().collect();
    if urls.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = urls.len(), "fetching quotes");

    let outcomes = join_all(urls.iter().map(|u| transport.get(u.as_ref()))).await;

    let results: Vec<QuoteResult> = outcomes.into_iter().map(classify).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        ok = results.iter().filter(|r| r.is_success()).count(),
        failed = results.iter().filter(|r| r.is_failure()).count(),
        "quotes settled"
    );

    results
}

/// Map one settled transport outcome to its result record.
///
/// - transport error → `Failure("FAILED RESPONSE")`
/// - body without a string `message` (or not JSON at all) → `Failure("MALFORMED DATA")`
/// - status other than 200 → `Failure(message)`
/// - status 200 → `Success(message)`
pub fn classify(outcome: Result<RawResponse, QuoteError>) -> QuoteResult {
    let resp = match outcome {
        Ok(resp) => resp,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "transport failure");
            return QuoteResult::failure(FAILED_RESPONSE);
        }
    };

    let Some(message) = parse_message(&resp.body) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status, "malformed quote payload");
        return QuoteResult::failure(MALFORMED_DATA);
    };

    if resp.status == 200 {
        QuoteResult::Success(message)
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status, reason = message.as_str(), "quote endpoint error");
        QuoteResult::Failure(message)
    }
}
