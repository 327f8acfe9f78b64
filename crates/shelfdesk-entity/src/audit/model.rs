//! Audit log entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Actor recorded when no authenticated identity is available.
pub const DEFAULT_AUDIT_USER: &str = "anonymous";

/// Kind of mutation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// Record created.
    Create,
    /// Record updated.
    Update,
    /// Record deleted.
    Delete,
}

impl AuditAction {
    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record an audit entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditResource {
    /// A product.
    Product,
    /// A category.
    Category,
}

impl AuditResource {
    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Category => "category",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "product" => Some(Self::Product),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

impl fmt::Display for AuditResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted audit log entry.
///
/// `action` and `resource` are stored as text; see [`AuditAction`] and
/// [`AuditResource`] for the allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    /// Entry identifier.
    pub id: Uuid,
    /// `create`, `update` or `delete`.
    pub action: String,
    /// `product` or `category`.
    pub resource: String,
    /// Identifier of the affected record.
    pub resource_id: Option<String>,
    /// Acting user.
    pub user: String,
    /// Free-form metadata.
    pub meta: serde_json::Value,
    /// Client address, empty when unknown.
    pub ip: String,
    /// When the mutation happened.
    pub created_at: DateTime<Utc>,
}

/// Data for appending an audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditLog {
    /// Mutation kind.
    pub action: AuditAction,
    /// Record kind.
    pub resource: AuditResource,
    /// Affected record.
    pub resource_id: Option<String>,
    /// Acting user.
    pub user: String,
    /// Metadata.
    pub meta: serde_json::Value,
    /// Client address.
    pub ip: String,
}

impl NewAuditLog {
    /// Start an entry with the default user, empty metadata and no address.
    pub fn new(action: AuditAction, resource: AuditResource, resource_id: impl Into<String>) -> Self {
        Self {
            action,
            resource,
            resource_id: Some(resource_id.into()),
            user: DEFAULT_AUDIT_USER.to_string(),
            meta: serde_json::Value::Object(serde_json::Map::new()),
            ip: String::new(),
        }
    }

    /// Set the acting user.
    pub fn by(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the metadata.
    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = meta;
        self
    }

    /// Set the client address.
    pub fn from_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let entry = NewAuditLog::new(AuditAction::Delete, AuditResource::Category, "abc");
        assert_eq!(entry.user, DEFAULT_AUDIT_USER);
        assert_eq!(entry.ip, "");
        assert!(entry.meta.as_object().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn test_parse_round_trip() {
        for action in [AuditAction::Create, AuditAction::Update, AuditAction::Delete] {
            assert_eq!(AuditAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(AuditResource::parse("product"), Some(AuditResource::Product));
        assert_eq!(AuditResource::parse("user"), None);
    }
}
