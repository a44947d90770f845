use serde::{Deserialize, Serialize};
use toast_queue::ToastKind;

/// One scripted toast for the demo binary
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DemoToast {
    /// Offset from the start of the script
    #[serde(default)]
    pub at_ms: u64,
    pub message: String,
    #[serde(default)]
    pub kind: ToastKind,
    /// Falls back to `toast.duration_ms` when unset
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[allow(unused)]
pub struct DemoConfig {
    // Not layered: a configured script replaces the default one wholesale
    #[serde(skip_serializing)]
    pub toasts: Vec<DemoToast>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            toasts: vec![
                DemoToast {
                    at_ms: 0,
                    message: "A".to_string(),
                    kind: ToastKind::Error,
                    duration_ms: Some(1_000),
                },
                DemoToast {
                    at_ms: 0,
                    message: "B".to_string(),
                    kind: ToastKind::Info,
                    duration_ms: Some(5_000),
                },
            ],
        }
    }
}
