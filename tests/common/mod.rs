#![allow(dead_code, clippy::unwrap_used)]

pub mod fixtures {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A small document exercising definitions, path, query and body parameters.
    pub const SAMPLE_SCHEMA: &str = r##"{
  "swagger": "2.0",
  "info": {"title": "Sample", "version": "1.0"},
  "definitions": {
    "account": {
      "description": "A user account.",
      "properties": {
        "user_id": {"type": "string", "description": "The id of the user."},
        "metadata": {"type": "object", "additionalProperties": {"type": "string"}}
      }
    },
    "group": {
      "properties": {
        "name": {"type": "string"},
        "member_ids": {"type": "array", "items": {"type": "string"}}
      }
    }
  },
  "paths": {
    "/v1/user/{id}": {
      "get": {
        "operationId": "get_user",
        "summary": "Fetch a user.",
        "parameters": [{"name": "id", "in": "path", "required": true, "type": "string"}],
        "responses": {"200": {"description": "ok", "schema": {"$ref": "#/definitions/account"}}}
      }
    },
    "/v1/group": {
      "post": {
        "operationId": "create_group",
        "parameters": [
          {"name": "body", "in": "body", "required": true, "schema": {"$ref": "#/definitions/group"}},
          {"name": "limit", "in": "query", "type": "integer"}
        ],
        "responses": {"200": {"description": "ok", "schema": {"$ref": "#/definitions/group"}}}
      }
    }
  }
}"##;

    /// Writes `content` as `name` inside a fresh temporary directory.
    ///
    /// Keep the returned `TempDir` alive for as long as the file is needed.
    pub fn write_schema(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}
