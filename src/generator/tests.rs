#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::error::GenerateError;
use crate::spec::{parse_schema, ParameterLocation, SchemaDocument, SchemaFormat};
use serde_json::{json, Value};

fn doc(value: Value) -> SchemaDocument {
    parse_schema(&value.to_string(), SchemaFormat::Json).unwrap()
}

fn render(doc: &SchemaDocument) -> String {
    generate_client_source(doc, &ClientSettings::default()).unwrap()
}

fn account_definition() -> Value {
    json!({
        "description": "A user account.",
        "properties": {
            "user_id": {"type": "string", "description": "The id of the user."},
            "wallet": {"type": "object", "additionalProperties": {"type": "integer"}},
            "friends": {"type": "array", "items": {"$ref": "#/definitions/friend"}}
        }
    })
}

fn user_api() -> SchemaDocument {
    doc(json!({
        "definitions": {
            "account": account_definition(),
            "friend": {"properties": {"display_name": {"type": "string"}}}
        },
        "paths": {
            "/v1/user/{id}": {
                "get": {
                    "operationId": "get_user",
                    "summary": "Fetch a user.",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "type": "string"}
                    ],
                    "responses": {"200": {"schema": {"$ref": "#/definitions/account"}}}
                }
            }
        }
    }))
}

#[test]
fn test_definition_becomes_interface() {
    let module = build_client(&user_api()).unwrap();
    let account = module.interface("Account").unwrap();
    assert_eq!(account.doc, "A user account.");

    let names: Vec<_> = account.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["friends", "userId", "wallet"]);
    assert_eq!(account.fields[0].ty.to_string(), "Array<Friend>");
    assert_eq!(account.fields[2].ty.to_string(), "Map<string, number>");

    let source = render(&user_api());
    assert!(source.contains("/** A user account. */\nexport interface Account {"));
    assert!(source.contains("  // The id of the user.\n  userId?: string;\n"));
    assert!(source.contains("  wallet?: Map<string, number>;\n}"));
    assert!(source.contains("export interface Friend {\n  displayName?: string;\n}"));
}

#[test]
fn test_operation_becomes_method() {
    let module = build_client(&user_api()).unwrap();
    let method = module.method("getUser").unwrap();
    assert_eq!(method.http_method, "GET");
    assert_eq!(method.returns, TsType::Named("Account".into()));
    assert_eq!(method.args.len(), 1);
    assert_eq!(method.args[0].to_string(), "id: string");
    assert_eq!(method.required_args().count(), 1);
    assert_eq!(
        method.path_substitutions,
        [PathSubstitution {
            placeholder: "{id}".into(),
            arg: "id".into()
        }]
    );

    let source = render(&user_api());
    assert!(source.contains(
        "    /** Fetch a user. */\n    getUser(id: string, options: any = {}): Promise<Account> {"
    ));
    assert!(source.contains(
        "      if (id === null || id === undefined) {\n        throw new Error(\"'id' is a required parameter but is null or undefined.\");\n      }"
    ));
    assert!(source.contains(
        "const urlPath = \"/v1/user/{id}\"\n        .replace(\"{id}\", encodeURIComponent(String(id)));"
    ));
    assert!(source.contains("return napi.doFetch(urlPath, \"GET\", queryParams, _body, options);"));
}

#[test]
fn test_module_scaffolding_uses_settings() {
    let source = render(&user_api());
    assert!(source.starts_with("// tslint:disable\n"));
    assert!(source.contains("const BASE_PATH = \"http://127.0.0.1:80\";"));
    assert!(source.contains("const DEFAULT_TIMEOUT_MS = 5000;"));
    assert!(source.contains(
        "export const NakamaApi = (configuration: ConfigurationParameters = {}) => {"
    ));
    assert!(source.contains("Object.freeze("));
    assert!(source.contains("\"Request timed out.\""));

    let settings = ClientSettings {
        api_name: "GameApi".into(),
        base_path: "https://api.example.com".into(),
        timeout_ms: 250,
    };
    let source = generate_client_source(&user_api(), &settings).unwrap();
    assert!(source.contains("export const GameApi = "));
    assert!(source.contains("const BASE_PATH = \"https://api.example.com\";"));
    assert!(source.contains("const DEFAULT_TIMEOUT_MS = 250;"));
    assert!(!source.contains("NakamaApi"));
}

#[test]
fn test_invalid_api_name_rejected() {
    let settings = ClientSettings {
        api_name: "my-api".into(),
        ..ClientSettings::default()
    };
    let err = generate_client_source(&user_api(), &settings).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidApiName(name) if name == "my-api"));
}

#[test]
fn test_query_body_and_unwired_parameters() {
    let doc = doc(json!({
        "definitions": {"account": account_definition(), "friend": {}},
        "paths": {
            "/v1/account": {
                "put": {
                    "operationId": "update_account",
                    "parameters": [
                        {"name": "body", "in": "body", "required": true,
                         "schema": {"$ref": "#/definitions/account"}},
                        {"name": "tag_ids", "in": "query", "type": "array",
                         "items": {"type": "string"}},
                        {"name": "x_trace", "in": "header", "type": "string"}
                    ],
                    "responses": {"200": {"schema": {}}}
                }
            }
        }
    }));

    let module = build_client(&doc).unwrap();
    let method = module.method("updateAccount").unwrap();
    assert_eq!(method.body.as_deref(), Some("body"));
    assert_eq!(
        method.query,
        [QueryEntry {
            key: "tag_ids".into(),
            arg: "tagIds".into()
        }]
    );
    assert_eq!(method.args[2].location, ParameterLocation::Other("header".into()));
    assert_eq!(method.returns, TsType::Any);

    let source = render(&doc);
    assert!(source.contains(
        "updateAccount(body: Account, tagIds?: Array<string>, xTrace?: string, options: any = {}): Promise<any> {"
    ));
    assert!(source.contains("        \"tag_ids\": tagIds,\n"));
    assert!(source.contains("_body = JSON.stringify(body || {});"));
    assert!(source.contains("napi.doFetch(urlPath, \"PUT\", queryParams, _body, options)"));
    assert!(!source.contains("\"x_trace\""));
    assert!(!source.contains("'xTrace' is a required parameter"));
}

#[test]
fn test_method_without_body_sends_null() {
    let source = render(&user_api());
    assert!(source.contains("      let _body = null;\n\n      return napi.doFetch"));
}

#[test]
fn test_unresolved_property_reference_fails() {
    let doc = doc(json!({
        "definitions": {
            "account": {"properties": {"wallet": {"$ref": "#/definitions/wallet"}}}
        }
    }));
    let err = build_client(&doc).unwrap_err();
    match err {
        GenerateError::UnresolvedReference { location, reference } => {
            assert_eq!(location, "definitions.account.wallet");
            assert_eq!(reference, "#/definitions/wallet");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unresolved_parameter_reference_fails() {
    let doc = doc(json!({
        "paths": {
            "/v1/group": {
                "post": {
                    "operationId": "create_group",
                    "parameters": [
                        {"name": "body", "in": "body", "schema": {"$ref": "#/definitions/group"}}
                    ]
                }
            }
        }
    }));
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::UnresolvedReference { reference, .. }) if reference == "#/definitions/group"
    ));
}

#[test]
fn test_path_parameter_must_appear_once() {
    let doc = doc(json!({
        "paths": {
            "/v1/user": {
                "get": {
                    "operationId": "get_user",
                    "parameters": [{"name": "id", "in": "path", "required": true, "type": "string"}]
                }
            }
        }
    }));
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::PathParameterMismatch { name, occurrences: 0, .. }) if name == "id"
    ));
}

#[test]
fn test_duplicate_method_names_rejected() {
    let doc = doc(json!({
        "paths": {
            "/v1/a": {"get": {"operationId": "list_items"}},
            "/v1/b": {"get": {"operationId": "listItems"}}
        }
    }));
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::DuplicateOperation { method, .. }) if method == "listItems"
    ));

    let doc = doc_with_dispatcher_collision();
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::DuplicateOperation { method, .. }) if method == DISPATCHER_NAME
    ));
}

fn doc_with_dispatcher_collision() -> SchemaDocument {
    doc(json!({"paths": {"/v1/fetch": {"get": {"operationId": "do_fetch"}}}}))
}

#[test]
fn test_duplicate_type_names_rejected() {
    let doc = doc(json!({
        "definitions": {"account": {}, "Account": {}}
    }));
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::DuplicateTypeName { name, .. }) if name == "Account"
    ));
}

#[test]
fn test_comment_text_is_single_line_and_safe() {
    let doc = doc(json!({
        "definitions": {
            "note": {"description": "Multi\n  line */ text", "properties": {}}
        }
    }));
    let module = build_client(&doc).unwrap();
    assert_eq!(module.interface("Note").unwrap().doc, "Multi line *\\/ text");
}

#[test]
fn test_output_is_deterministic() {
    let first = render(&user_api());
    let second = render(&user_api());
    assert_eq!(first, second);
}

#[test]
fn test_renderer_is_swappable() {
    struct Names;

    impl Renderer for Names {
        fn render(&self, module: &ClientModule) -> Result<String, GenerateError> {
            Ok(module
                .methods
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(","))
        }
    }

    let module = build_client(&user_api()).unwrap();
    assert_eq!(Names.render(&module).unwrap(), "getUser");
}

#[test]
fn test_colliding_argument_names_rejected() {
    let doc = doc(json!({
        "paths": {
            "/v1/user/{user_id}": {
                "get": {
                    "operationId": "get_user",
                    "parameters": [
                        {"name": "user_id", "in": "path", "required": true, "type": "string"},
                        {"name": "userId", "in": "query", "type": "string"}
                    ]
                }
            }
        }
    }));
    match build_client(&doc).unwrap_err() {
        GenerateError::DuplicateArgument {
            name,
            first,
            second,
            ..
        } => {
            assert_eq!(name, "userId");
            assert_eq!(first, "user_id");
            assert_eq!(second, "userId");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_same_name_in_two_locations_rejected() {
    let doc = doc(json!({
        "paths": {
            "/v1/item/{id}": {
                "get": {
                    "operationId": "get_item",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "type": "string"},
                        {"name": "id", "in": "query", "type": "string"}
                    ]
                }
            }
        }
    }));
    assert!(matches!(
        build_client(&doc),
        Err(GenerateError::DuplicateArgument { name, .. }) if name == "id"
    ));
}

#[test]
fn test_dispatcher_query_serialization() {
    let source = render(&user_api());
    // Null and undefined query values are dropped.
    assert!(source.contains(
        "          if (value === null || value === undefined) {\n            return \"\";\n          }"
    ));
    // Arrays repeat the key once per element.
    assert!(source.contains("const values = value instanceof Array ? value : [value];"));
    assert!(source.contains(
        ".map((item: any) => encodeURIComponent(key) + \"=\" + encodeURIComponent(item) + \"&\")"
    ));
}

#[test]
fn test_dispatcher_headers() {
    let source = render(&user_api());
    let bearer = source
        .find("headers[\"Authorization\"] = \"Bearer \" + config.bearerToken;")
        .unwrap();
    let basic = source
        .find("headers[\"Authorization\"] = \"Basic \" + btoa(config.username + \":\" + config.password);")
        .unwrap();
    assert!(bearer < basic, "bearer token must be checked before basic auth");
    assert!(source.contains("} else if (config.username) {"));

    for header in ["Authorization", "Accept", "Content-Type"] {
        assert!(
            source.contains(&format!("if (!Object.keys(headers).includes(\"{header}\")) {{")),
            "{header} must only be injected when absent"
        );
    }
    assert!(source.contains("headers[\"Accept\"] = \"application/json\";"));
    assert!(source.contains("headers[\"Content-Type\"] = \"application/json\";"));
    assert!(source.contains("if (!headers[key]) {\n          delete headers[key];\n        }"));
    assert!(source.contains("const headers: any = {...options.headers};"));
}

#[test]
fn test_dispatcher_response_handling() {
    let source = render(&user_api());
    assert!(source.contains(
        "if (response.status >= 200 && response.status < 300) {\n            return response.json();\n          }\n          throw response;"
    ));
    assert!(source.contains("return Promise.race(["));
    assert!(source.contains("setTimeout(reject, config.timeoutMs, \"Request timed out.\")"));
}

#[test]
fn test_configuration_defaults_only_fill_missing_values() {
    let source = render(&user_api());
    assert!(source.contains("basePath: configuration.basePath ?? BASE_PATH,"));
    assert!(source.contains("timeoutMs: configuration.timeoutMs ?? DEFAULT_TIMEOUT_MS,"));
    assert!(source.contains("bearerToken: configuration.bearerToken ?? \"\","));
    assert!(!source.contains("|| BASE_PATH"));
    assert!(!source.contains("|| DEFAULT_TIMEOUT_MS"));
}
