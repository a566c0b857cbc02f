use serde::{Deserialize, Serialize};

/// One chat bubble: a fixed label (e.g. `"Alex:"`) and the body that gets typed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub label: Option<String>,
    pub body: String,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            label: None,
            body: body.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            body: body.into(),
        }
    }
}
