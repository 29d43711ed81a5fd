use super::ast::{ClientModule, InterfaceDecl, MethodDecl};
use crate::error::GenerateError;
use askama::Template;

/// Default value of the generated `basePath` option.
pub const DEFAULT_BASE_PATH: &str = "http://127.0.0.1:80";
/// Default value of the generated `timeoutMs` option.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// Default name of the exported client factory.
pub const DEFAULT_API_NAME: &str = "NakamaApi";

/// Prints a [`ClientModule`] as source text.
///
/// The declarations are fixed by the time a renderer runs; implementations only
/// decide how they are spelled.
pub trait Renderer {
    /// Render the whole module as one source unit.
    fn render(&self, module: &ClientModule) -> Result<String, GenerateError>;
}

/// Values baked into the generated module that do not come from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Name of the exported factory function.
    pub api_name: String,
    /// Fallback `basePath` when the caller passes none.
    pub base_path: String,
    /// Fallback request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_name: DEFAULT_API_NAME.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Template data for the fetch-based TypeScript client
#[derive(Template)]
#[template(path = "client.ts.txt", escape = "none")]
struct ClientTemplateData<'a> {
    api_name: &'a str,
    base_path: &'a str,
    timeout_ms: u64,
    interfaces: Vec<InterfaceDecl>,
    methods: Vec<MethodDecl>,
}

/// Renders a TypeScript module whose factory returns a `fetch`-backed client.
#[derive(Debug, Clone, Default)]
pub struct FetchClientRenderer {
    pub settings: ClientSettings,
}

impl FetchClientRenderer {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }
}

impl Renderer for FetchClientRenderer {
    fn render(&self, module: &ClientModule) -> Result<String, GenerateError> {
        let rendered = ClientTemplateData {
            api_name: &self.settings.api_name,
            base_path: &self.settings.base_path,
            timeout_ms: self.settings.timeout_ms,
            interfaces: module.interfaces.clone(),
            methods: module.methods.clone(),
        }
        .render()?;
        Ok(rendered)
    }
}
