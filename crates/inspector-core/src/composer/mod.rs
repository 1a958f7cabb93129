//! Prompt composition.
//!
//! Combines the selected elements, a user goal, the page URL and plugin
//! context into a single prompt document. Snippet producers are resolved
//! one after another, in declaration order, and always awaited.

mod snippet;
mod templates;

pub use snippet::{ContextSnippet, PluginContext, SnippetContent, SnippetProducer};

use inspector_config::Config;
use inspector_protocols::{ElementHandle, TemplateKind};
use tracing::{debug, trace};

use crate::serializer::{escape_markup, ElementSerializer};
use templates::{DocumentParts, ResolvedPlugin};

/// Context line used when nothing is selected.
pub const NO_SELECTION_NOTICE: &str = "No specific element was selected on the page. Please analyze the page code in general or ask for clarification.";

/// Everything one prompt is built from.
#[derive(Debug, Clone)]
pub struct PromptRequest<'a, E> {
    /// Selected elements, in selection order.
    pub selection: &'a [E],
    pub goal: &'a str,
    pub page_url: Option<&'a str>,
    pub plugins: &'a [PluginContext],
}

impl<'a, E> PromptRequest<'a, E> {
    pub fn new(selection: &'a [E], goal: &'a str) -> Self {
        Self {
            selection,
            goal,
            page_url: None,
            plugins: &[],
        }
    }

    pub fn with_url(mut self, url: &'a str) -> Self {
        self.page_url = Some(url);
        self
    }

    pub fn with_plugins(mut self, plugins: &'a [PluginContext]) -> Self {
        self.plugins = plugins;
        self
    }
}

/// Builds prompt documents with a fixed serializer.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    serializer: ElementSerializer,
}

impl PromptComposer {
    pub fn new(serializer: ElementSerializer) -> Self {
        Self { serializer }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ElementSerializer::from_config(config))
    }

    pub fn template(&self) -> TemplateKind {
        self.serializer.template()
    }

    pub fn serializer(&self) -> &ElementSerializer {
        &self.serializer
    }

    pub async fn compose<E: ElementHandle>(&self, request: PromptRequest<'_, E>) -> String {
        let plugins = resolve_plugins(request.plugins).await;

        let blocks = (!request.selection.is_empty())
            .then(|| self.serializer.serialize_all(request.selection));

        debug!(
            template = %self.template(),
            elements = request.selection.len(),
            plugins = plugins.len(),
            "composing prompt"
        );

        match self.template() {
            TemplateKind::Xml => {
                let escape = self.serializer.options().escape_markup;
                let text = |value: &str| -> String {
                    if escape {
                        escape_markup(value).into_owned()
                    } else {
                        value.to_string()
                    }
                };

                let goal = text(request.goal);
                let url = request.page_url.map(&text);
                let plugins: Vec<ResolvedPlugin> = plugins
                    .into_iter()
                    .map(|plugin| ResolvedPlugin {
                        name: plugin.name,
                        snippets: plugin
                            .snippets
                            .into_iter()
                            .map(|(name, content)| (name, text(&content)))
                            .collect(),
                    })
                    .collect();

                templates::xml_document(&DocumentParts {
                    goal: &goal,
                    url: url.as_deref(),
                    blocks: blocks.as_deref(),
                    plugins: &plugins,
                })
            }
            TemplateKind::Markdown => templates::markdown_document(&DocumentParts {
                goal: request.goal,
                url: request.page_url,
                blocks: blocks.as_deref(),
                plugins: &plugins,
            }),
        }
    }
}

/// Composes with default serializer options.
pub async fn compose_prompt<E: ElementHandle>(
    template: TemplateKind,
    request: PromptRequest<'_, E>,
) -> String {
    PromptComposer::new(ElementSerializer::new(template))
        .compose(request)
        .await
}

async fn resolve_plugins(plugins: &[PluginContext]) -> Vec<ResolvedPlugin> {
    let mut resolved = Vec::with_capacity(plugins.len());
    for plugin in plugins {
        let mut snippets = Vec::with_capacity(plugin.snippets.len());
        for snippet in &plugin.snippets {
            let content = snippet.content.resolve().await;
            trace!(
                plugin = %plugin.plugin_name,
                snippet = %snippet.name,
                len = content.len(),
                "snippet resolved"
            );
            snippets.push((snippet.name.clone(), content));
        }
        resolved.push(ResolvedPlugin {
            name: plugin.plugin_name.clone(),
            snippets,
        });
    }
    resolved
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
