//! Caller-supplied row action definitions.

use serde::{Deserialize, Serialize};

/// What pressing an action button does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionBehavior {
    /// Open the built-in edit dialog.
    Edit,
    /// Open the built-in delete confirmation.
    Delete,
    /// Open a caller-managed dialog by id.
    Modal(String),
    /// Issue the request immediately (confirm first for destructive
    /// methods).
    #[default]
    Direct,
}

/// One action column entry. A custom action whose label matches a built-in
/// ("Edit", "Delete") replaces that built-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDef {
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// HTTP method for direct actions ("POST", "DELETE", ...).
    #[serde(default)]
    pub method: Option<String>,
    /// Route template; `{id}` is substituted per row.
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub behavior: ActionBehavior,
}

impl ActionDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    #[must_use]
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    #[must_use]
    pub fn behavior(mut self, behavior: ActionBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// True for methods that mutate and therefore require confirmation
    /// before a direct dispatch.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self.method.as_deref().map(str::to_ascii_uppercase).as_deref(),
            Some("DELETE")
        )
    }
}
