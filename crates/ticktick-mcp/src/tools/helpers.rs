//! Shared helper functions for MCP tool implementations.

use tracing::error;

use ticktick_client::ClientError;

/// Log an adapter failure and render it as `Error <action>: <detail>`.
pub fn failure_text(tool: &str, action: &str, err: &ClientError) -> String {
    error!(tool, error = %err, "TickTick API call failed");
    format!("Error {action}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text() {
        let err = ClientError::api_error(500, "boom");
        assert_eq!(
            failure_text("complete_task", "completing task", &err),
            "Error completing task: API error: 500 - boom"
        );
    }
}
