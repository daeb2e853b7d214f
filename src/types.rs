//! Wire payloads of the GemDB HTTP API.
//!
//! Request bodies serialize to exactly the JSON the server decodes.

use serde::Serialize;

/// Body of `POST /createTable` and `POST /deleteTable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRequest<'a> {
    /// Table name.
    pub name: &'a str,
}

/// Body of `POST /set`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRequest<'a> {
    /// Table holding the record.
    pub table_name: &'a str,
    /// Record key.
    pub key: &'a str,
    /// Record value, passed through untouched.
    pub value: serde_json::Value,
}

/// Body of `POST /delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRequest<'a> {
    /// Table holding the record.
    pub table_name: &'a str,
    /// Record key.
    pub key: &'a str,
}

/// Body of `POST /exportToFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest<'a> {
    /// Destination file name on the server host.
    pub filename: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_field_names() {
        let request = SetRequest {
            table_name: "users",
            key: "alice",
            value: json!({"age": 30}),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"table_name": "users", "key": "alice", "value": {"age": 30}})
        );
    }

    #[test]
    fn test_table_and_export_requests() {
        assert_eq!(
            serde_json::to_value(TableRequest { name: "users" }).unwrap(),
            json!({"name": "users"})
        );
        assert_eq!(
            serde_json::to_value(ExportRequest {
                filename: "backup.json"
            })
            .unwrap(),
            json!({"filename": "backup.json"})
        );
    }
}
