//! Plugin context snippets.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

/// Asynchronous source of snippet text.
///
/// Producers run when a prompt is composed, never earlier, and their output
/// is awaited before it is embedded.
#[async_trait]
pub trait SnippetProducer: Send + Sync {
    async fn produce(&self) -> String;
}

type BoxedProducerFn = Box<dyn Fn() -> BoxFuture<'static, String> + Send + Sync>;

struct FnProducer(BoxedProducerFn);

#[async_trait]
impl SnippetProducer for FnProducer {
    async fn produce(&self) -> String {
        (self.0)().await
    }
}

/// Content of a snippet.
#[derive(Clone)]
pub enum SnippetContent {
    /// Literal text.
    Text(String),
    /// Called synchronously at composition time.
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
    /// Awaited at composition time.
    Deferred(Arc<dyn SnippetProducer>),
}

impl SnippetContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Wraps an async closure.
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        Self::Deferred(Arc::new(FnProducer(Box::new(move || f().boxed()))))
    }

    pub fn producer(producer: Arc<dyn SnippetProducer>) -> Self {
        Self::Deferred(producer)
    }

    /// Produces the final text.
    pub async fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Computed(f) => (f.as_ref())(),
            Self::Deferred(producer) => producer.produce().await,
        }
    }
}

impl fmt::Debug for SnippetContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<String> for SnippetContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SnippetContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One named piece of plugin context.
#[derive(Debug, Clone)]
pub struct ContextSnippet {
    /// Element name in XML output, heading in Markdown output.
    pub name: String,
    pub content: SnippetContent,
}

impl ContextSnippet {
    pub fn new(name: impl Into<String>, content: impl Into<SnippetContent>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Snippets contributed by one plugin, in declaration order.
#[derive(Debug, Clone)]
pub struct PluginContext {
    pub plugin_name: String,
    pub snippets: Vec<ContextSnippet>,
}

impl PluginContext {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            snippets: Vec::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: ContextSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn snippet(self, name: impl Into<String>, content: impl Into<SnippetContent>) -> Self {
        self.with_snippet(ContextSnippet::new(name, content))
    }
}
