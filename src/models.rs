use serde::Serialize;

pub const APP_NAME: &str = "ops_console";

// field order is the wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub app: &'static str,
    pub status: &'static str,
    pub queues: &'static [&'static str]
}

pub const STATUS: StatusPayload = StatusPayload {
    app: APP_NAME,
    status: "ok",
    queues: &["triage", "missed-dose", "refill-approval"]
};
