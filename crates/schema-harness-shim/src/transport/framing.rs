//! Line framing for the harness protocol: one JSON value per line.

use serde::Serialize;
use serde_json::Value;

use crate::types::{
    Command, CommandKind, DialectParams, RunParams, ShimError, ShimResult, StartParams,
};

/// Decode one input line into a command.
pub fn decode_command(line: &str) -> ShimResult<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ShimError::MalformedInput("Empty message".to_string()));
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| ShimError::MalformedInput(e.to_string()))?;

    let tag = value
        .get("cmd")
        .ok_or_else(|| ShimError::MalformedInput("Missing \"cmd\" field".to_string()))?
        .as_str()
        .ok_or_else(|| ShimError::MalformedInput("\"cmd\" must be a string".to_string()))?;

    let kind =
        CommandKind::from_tag(tag).ok_or_else(|| ShimError::UnsupportedCommand(tag.to_string()))?;

    match kind {
        CommandKind::Start => params::<StartParams>(kind, value).map(Command::Start),
        CommandKind::Dialect => params::<DialectParams>(kind, value).map(Command::Dialect),
        CommandKind::Run => params::<RunParams>(kind, value).map(Command::Run),
        CommandKind::Stop => Ok(Command::Stop),
    }
}

fn params<T: serde::de::DeserializeOwned>(kind: CommandKind, value: Value) -> ShimResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ShimError::MalformedInput(format!("Invalid {} command: {e}", kind.tag())))
}

/// Serialize a response to a single line (with trailing newline).
pub fn encode_response<T: Serialize>(response: &T) -> ShimResult<String> {
    let mut json = serde_json::to_string(response)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_start() {
        match decode_command(r#"{"cmd": "start", "version": 1}"#).unwrap() {
            Command::Start(p) => assert_eq!(p.version, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_decode_run() {
        let line = r#"{"cmd":"run","seq":{"n":1},"case":{"schema":{},"tests":[{"instance":1,"valid":true}]}}"#;
        match decode_command(line).unwrap() {
            Command::Run(p) => {
                assert_eq!(p.seq, json!({"n": 1}));
                assert_eq!(p.case.tests.len(), 1);
                assert_eq!(p.case.tests[0].valid, Some(true));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_decode_stop_ignores_extra_fields() {
        assert!(matches!(
            decode_command(r#"{"cmd":"stop","extra":true}"#).unwrap(),
            Command::Stop
        ));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_command(r#"{"cmd":"#).unwrap_err();
        assert!(matches!(err, ShimError::MalformedInput(_)));
        assert!(matches!(decode_command(""), Err(ShimError::MalformedInput(_))));
    }

    #[test]
    fn test_decode_missing_or_bad_tag() {
        assert!(matches!(
            decode_command(r#"{"version":1}"#),
            Err(ShimError::MalformedInput(_))
        ));
        assert!(matches!(
            decode_command(r#"{"cmd":5}"#),
            Err(ShimError::MalformedInput(_))
        ));
        assert!(matches!(
            decode_command(r#"[1,2]"#),
            Err(ShimError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_decode_unknown_tag() {
        match decode_command(r#"{"cmd":"explode"}"#) {
            Err(ShimError::UnsupportedCommand(tag)) => assert_eq!(tag, "explode"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_decode_bad_shape() {
        assert!(matches!(
            decode_command(r#"{"cmd":"start","version":"one"}"#),
            Err(ShimError::MalformedInput(_))
        ));
        assert!(matches!(
            decode_command(r#"{"cmd":"run","seq":1,"case":{"schema":{}}}"#),
            Err(ShimError::MalformedInput(_))
        ));
        assert!(matches!(
            decode_command(r#"{"cmd":"dialect"}"#),
            Err(ShimError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_encode_single_line() {
        let line = encode_response(&json!({"message": "a\nb", "ok": true})).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }
}
