//! Output formatting for CLI results.

use std::io::Write;

use momo_psb::ApiResponse;
use serde::Serialize;

use crate::error::CliError;

/// Pretty JSON, one document per command.
pub fn print_json<W: Write, T: Serialize>(out: &mut W, data: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(data)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Result of a resource-creating call: the caller needs the reference id to poll.
pub fn print_created<W: Write>(
    out: &mut W,
    what: &str,
    reference_id: &str,
    response: &ApiResponse,
) -> Result<(), CliError> {
    writeln!(out, "{what} created with reference ID: {reference_id}")?;
    writeln!(out, "Status Code: {}", response.status())?;
    if !response.body().is_empty() {
        writeln!(out, "Response: {}", response.body())?;
    }
    Ok(())
}

/// Status line plus body as received.
pub fn print_response<W: Write>(
    out: &mut W,
    label: &str,
    response: &ApiResponse,
) -> Result<(), CliError> {
    writeln!(out, "{label}")?;
    writeln!(out, "Status Code: {}", response.status())?;
    if !response.body().is_empty() {
        writeln!(out, "Response: {}", response.body())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_print_created() {
        let resp = ApiResponse::new(202, String::new(), BTreeMap::new());
        let mut out = Vec::new();
        print_created(&mut out, "Payment request", "r1", &resp).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Payment request created with reference ID: r1\nStatus Code: 202\n"
        );
    }

    #[test]
    fn test_print_response_includes_body() {
        let resp = ApiResponse::new(400, r#"{"code":"BAD"}"#.to_string(), BTreeMap::new());
        let mut out = Vec::new();
        print_response(&mut out, "Cancel invoice", &resp).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Status Code: 400"));
        assert!(text.contains(r#"Response: {"code":"BAD"}"#));
    }

    #[test]
    fn test_print_json_is_pretty() {
        let mut out = Vec::new();
        print_json(&mut out, &serde_json::json!({"status": "SUCCESSFUL"})).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"status\": \"SUCCESSFUL\"\n}\n"
        );
    }
}
