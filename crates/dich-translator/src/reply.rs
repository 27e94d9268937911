use serde::Deserialize;

use crate::ClientError;

const DIAGNOSTIC_CHARS: usize = 200;

/// Shapes the backend is known to answer with, tried in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reply {
    /// `{"reply": {"response": "..."}}`
    Nested { response: String },
    /// `{"reply": "..."}`
    Text(String),
}

#[derive(Deserialize)]
struct Envelope {
    reply: Option<Reply>,
}

/// Pull the reply text out of a response body
pub fn extract_reply(body: &str) -> Result<String, ClientError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ClientError::MalformedResponse(format!("body is not JSON ({e}): {}", clip(body)))
    })?;

    match Envelope::deserialize(&value) {
        Ok(Envelope {
            reply: Some(Reply::Nested { response }),
        }) => Ok(response),
        Ok(Envelope {
            reply: Some(Reply::Text(text)),
        }) => Ok(text),
        _ => Err(ClientError::MalformedResponse(format!(
            "no reply in {}",
            clip(&value.to_string())
        ))),
    }
}

fn clip(text: &str) -> String {
    text.chars().take(DIAGNOSTIC_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_response_wins() {
        assert_eq!(
            extract_reply(r#"{"reply":{"response":"Xin chào","model":"llama"}}"#),
            Ok("Xin chào".to_string())
        );
    }

    #[test]
    fn bare_string_reply() {
        assert_eq!(
            extract_reply(r#"{"reply":"Hello"}"#),
            Ok("Hello".to_string())
        );
    }

    #[test]
    fn empty_reply_is_not_malformed() {
        assert_eq!(extract_reply(r#"{"reply":""}"#), Ok(String::new()));
    }

    #[test]
    fn unknown_shapes_are_malformed() {
        for body in [
            r#"{"foo":"bar"}"#,
            r#"{"reply":null}"#,
            r#"{"reply":{"text":"Hello"}}"#,
            r#"{"reply":{"response":42}}"#,
            r#""Hello""#,
            "[]",
        ] {
            assert!(
                matches!(extract_reply(body), Err(ClientError::MalformedResponse(_))),
                "body: {body}"
            );
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = extract_reply("<html>Bad Gateway</html>").unwrap_err();
        match err {
            ClientError::MalformedResponse(detail) => {
                assert!(detail.contains("not JSON"));
                assert!(detail.contains("Bad Gateway"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn diagnostics_are_clipped() {
        let body = format!(r#"{{"foo":"{}"}}"#, "x".repeat(1000));
        let Err(ClientError::MalformedResponse(detail)) = extract_reply(&body) else {
            panic!("expected malformed response");
        };
        assert!(detail.chars().count() < 250);
    }
}
