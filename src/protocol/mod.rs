//! # Supervisor handshake envelope
//!
//! Wire types for the task-dispatch protocol this generator is driven by:
//! an inbound `task_assignment` message carrying the endpoint description
//! and (optionally) pre-synthesized test cases, and the correlated
//! `task_response` carrying the generated files. Only the data contract
//! lives here; the HTTP wiring that moves these messages is upstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{EndpointDescriptor, TestCase};

pub const TASK_ASSIGNMENT: &str = "task_assignment";
pub const TASK_RESPONSE: &str = "task_response";

/// Inbound message from the supervisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorMessage {
    pub message_id: String,
    pub sender: String,
    pub recipient: String,
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "results/task")]
    pub task: TaskPayload,
}

impl SupervisorMessage {
    pub fn is_task_assignment(&self) -> bool {
        self.message_type == TASK_ASSIGNMENT
    }
}

/// The nested task payload of a `task_assignment`.
///
/// `payload` carries the endpoint description plus free-form fields (e.g.
/// `fields`, `requires_auth`) consumed by the upstream test-case
/// synthesizer, not by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub task_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EndpointDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Outbound response correlated to a supervisor message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub message_id: String,
    pub sender: String,
    pub recipient: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub related_message_id: String,
    pub status: String,
    #[serde(rename = "results/task")]
    pub task: TaskResult,
    pub timestamp: String,
}

impl TaskResponse {
    /// Build a response correlated to `message`, with sender and recipient
    /// swapped. The caller supplies `message_id` and `timestamp`; this crate
    /// owns no clock or id source.
    pub fn reply_to(
        message: &SupervisorMessage,
        message_id: String,
        timestamp: String,
        status: String,
        task: TaskResult,
    ) -> Self {
        Self {
            message_id,
            sender: message.recipient.clone(),
            recipient: message.sender.clone(),
            message_type: TASK_RESPONSE.to_string(),
            related_message_id: message.message_id.clone(),
            status,
            task,
            timestamp,
        }
    }
}

/// The generator's result payload: one entry per output path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default)]
    pub status_message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generated_files: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_message() -> Value {
        json!({
            "message_id": "7f9c0d1e-3b5a-4c8d-9e2f-6a7b8c9d0e1f",
            "sender": "supervisor",
            "recipient": "testcase_generator_agent",
            "type": "task_assignment",
            "timestamp": "2026-08-27T10:00:00Z",
            "results/task": {
                "task_type": "generate_test_cases",
                "language": "javascript",
                "payload": {
                    "api": "/api/users",
                    "method": "POST",
                    "fields": ["email", "password", "name"],
                    "requires_auth": true
                }
            }
        })
    }

    #[test]
    fn deserializes_a_supervisor_message() {
        let message: SupervisorMessage = serde_json::from_value(sample_message()).unwrap();
        assert!(message.is_task_assignment());
        assert_eq!(message.task.task_type, "generate_test_cases");
        assert_eq!(message.task.language.as_deref(), Some("javascript"));

        let endpoint = message.task.payload.unwrap();
        assert_eq!(endpoint.api.as_deref(), Some("/api/users"));
        assert_eq!(endpoint.method.as_deref(), Some("POST"));
    }

    #[test]
    fn reply_swaps_sender_and_recipient() {
        let message: SupervisorMessage = serde_json::from_value(sample_message()).unwrap();
        let response = TaskResponse::reply_to(
            &message,
            "resp-1".to_string(),
            "2026-08-27T10:00:01Z".to_string(),
            "completed".to_string(),
            TaskResult::default(),
        );

        assert_eq!(response.sender, "testcase_generator_agent");
        assert_eq!(response.recipient, "supervisor");
        assert_eq!(response.message_type, TASK_RESPONSE);
        assert_eq!(response.related_message_id, message.message_id);
    }

    #[test]
    fn response_serializes_under_results_task_key() {
        let message: SupervisorMessage = serde_json::from_value(sample_message()).unwrap();
        let mut files = BTreeMap::new();
        files.insert("generated.test.js".to_string(), "// suite".to_string());
        let response = TaskResponse::reply_to(
            &message,
            "resp-1".to_string(),
            "2026-08-27T10:00:01Z".to_string(),
            "completed".to_string(),
            TaskResult {
                status_message: "Generated 1 file".to_string(),
                generated_files: files,
            },
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "task_response");
        assert_eq!(
            value["results/task"]["generated_files"]["generated.test.js"],
            "// suite"
        );
    }

    #[test]
    fn inline_test_cases_ride_along() {
        let message: SupervisorMessage = serde_json::from_value(json!({
            "message_id": "m-1",
            "sender": "supervisor",
            "recipient": "agent",
            "type": "task_assignment",
            "results/task": {
                "task_type": "generate_test_cases",
                "framework": "pytest",
                "test_cases": [
                    {"description": "ping", "input": {"method": "GET", "api": "/ping"}}
                ]
            }
        }))
        .unwrap();

        assert_eq!(message.task.test_cases.len(), 1);
        assert_eq!(message.task.framework.as_deref(), Some("pytest"));
    }
}
