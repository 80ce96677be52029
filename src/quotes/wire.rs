use serde_json::Value;

// Quote endpoints answer `{"message": "..."}` for both successes and errors.
// Only a JSON object with a string `message` counts; a repeated key keeps its last value.
pub(crate) fn parse_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.as_object()?.get("message")?.as_str().map(str::to_owned)
}
