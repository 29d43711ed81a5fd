use super::ast::{
    ArgDecl, ClientModule, FieldDecl, InterfaceDecl, MethodDecl, PathSubstitution, QueryEntry,
};
use super::resolve::{resolve_type, TsType};
use crate::error::GenerateError;
use crate::naming::{capitalize, definition_key, is_snake_case, sanitize_identifier, to_camel_case};
use crate::spec::{Operation, ParameterLocation, SchemaDocument, TypeDescriptor};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Method name the shared dispatcher occupies on the client object.
pub const DISPATCHER_NAME: &str = "doFetch";

/// Walk the schema model and produce the declarations to print.
///
/// # Errors
///
/// Fails on the first unresolved reference, path parameter without exactly one
/// placeholder, duplicate generated method name, or duplicate interface name.
pub fn build_client(doc: &SchemaDocument) -> Result<ClientModule, GenerateError> {
    let mut interfaces = Vec::with_capacity(doc.definitions.len());
    let mut type_names: HashMap<String, &str> = HashMap::new();

    for (key, definition) in &doc.definitions {
        let name = capitalize(key);
        if let Some(first) = type_names.insert(name.clone(), key) {
            return Err(GenerateError::DuplicateTypeName {
                name,
                first: first.to_string(),
                second: key.clone(),
            });
        }

        let mut fields = Vec::with_capacity(definition.properties.len());
        for (field, property) in &definition.properties {
            check_references(doc, &property.descriptor, || format!("definitions.{key}.{field}"))?;
            fields.push(FieldDecl {
                name: to_camel_case(field),
                doc: comment_text(&property.description),
                ty: resolve_type(&property.descriptor),
            });
        }
        debug!(interface = %name, fields = fields.len(), "Built interface");
        interfaces.push(InterfaceDecl {
            name,
            doc: comment_text(&definition.description),
            fields,
        });
    }

    let mut methods = Vec::new();
    let mut method_names: BTreeMap<String, String> = BTreeMap::new();
    method_names.insert(DISPATCHER_NAME.to_string(), DISPATCHER_NAME.to_string());

    for operation in doc.operations() {
        let method = build_method(doc, operation)?;
        if let Some(first) = method_names.insert(method.name.clone(), operation.operation_id.clone()) {
            return Err(GenerateError::DuplicateOperation {
                method: method.name,
                first,
                second: operation.operation_id.clone(),
            });
        }
        methods.push(method);
    }

    Ok(ClientModule { interfaces, methods })
}

fn build_method(doc: &SchemaDocument, op: &Operation) -> Result<MethodDecl, GenerateError> {
    let location = format!("{} {} ({})", op.method.to_uppercase(), op.path, op.operation_id);
    if !is_snake_case(&op.operation_id) {
        warn!(operation_id = %op.operation_id, "operationId is not snake_case");
    }

    let mut args = Vec::with_capacity(op.parameters.len());
    let mut path_substitutions = Vec::new();
    let mut query = Vec::new();
    let mut body = None;
    let mut arg_names: HashMap<String, &str> = HashMap::new();

    for param in &op.parameters {
        check_references(doc, &param.descriptor, || format!("{location} parameter '{}'", param.name))?;
        let arg = sanitize_identifier(&to_camel_case(&param.name));
        if let Some(first) = arg_names.insert(arg.clone(), &param.name) {
            return Err(GenerateError::DuplicateArgument {
                location,
                name: arg,
                first: first.to_string(),
                second: param.name.clone(),
            });
        }

        match &param.location {
            ParameterLocation::Path => {
                let placeholder = format!("{{{}}}", param.name);
                let occurrences = op.path.matches(&placeholder).count();
                if occurrences != 1 {
                    return Err(GenerateError::PathParameterMismatch {
                        location,
                        name: param.name.clone(),
                        occurrences,
                    });
                }
                path_substitutions.push(PathSubstitution {
                    placeholder,
                    arg: arg.clone(),
                });
            }
            ParameterLocation::Query => query.push(QueryEntry {
                key: param.name.clone(),
                arg: arg.clone(),
            }),
            ParameterLocation::Body => {
                if let Some(previous) = body.replace(arg.clone()) {
                    warn!(%location, ignored = %previous, "Multiple body parameters; the last one is sent");
                }
            }
            ParameterLocation::Other(kind) => {
                warn!(%location, parameter = %param.name, %kind, "Parameter location is not wired into the request");
            }
        }

        args.push(ArgDecl {
            name: arg,
            ty: resolve_type(&param.descriptor),
            required: param.required,
            location: param.location.clone(),
        });
    }

    let returns = match &op.response {
        Some(descriptor) => {
            check_references(doc, descriptor, || format!("{location} response 200"))?;
            resolve_type(descriptor)
        }
        None => TsType::Any,
    };

    debug!(operation_id = %op.operation_id, args = args.len(), "Built method");
    Ok(MethodDecl {
        name: to_camel_case(&op.operation_id),
        operation_id: op.operation_id.clone(),
        summary: comment_text(&op.summary),
        http_method: op.method.to_uppercase(),
        path: op.path.clone(),
        args,
        path_substitutions,
        query,
        body,
        returns,
    })
}

/// Every pointer in `descriptor` must name a definition in `doc`.
fn check_references(
    doc: &SchemaDocument,
    descriptor: &TypeDescriptor,
    location: impl Fn() -> String,
) -> Result<(), GenerateError> {
    for pointer in descriptor.references() {
        let resolved = definition_key(pointer).is_some_and(|key| doc.definitions.contains_key(key));
        if !resolved {
            return Err(GenerateError::UnresolvedReference {
                location: location(),
                reference: pointer.to_string(),
            });
        }
    }
    Ok(())
}

/// Flatten text onto one line that is safe inside `//` and `/** */` comments.
pub(crate) fn comment_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}
