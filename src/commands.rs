//! Subcommand handlers for element-inspector.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use inspector_config::Config;
use inspector_core::{
    xpath_for, ContextSnippet, ElementResolver, ElementSerializer, ExclusionRules,
    PluginContext, PromptComposer, PromptRequest, Selector, SelectionSet, SerializerOptions,
};
use inspector_dom_snapshot::{Document, ElementRef};
use inspector_protocols::{Point, SelectorError, TemplateKind};

use crate::cli::Commands;

/// Errors raised by the CLI itself.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("No element with id '{0}' in the snapshot")]
    UnknownElement(String),

    #[error("Invalid context '{0}': expected plugin:name=value")]
    InvalidContext(String),
}

/// Dispatch a subcommand.
pub(crate) async fn handle_command(
    command: Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Resolve {
            snapshot,
            x,
            y,
            exclude,
            template,
        } => cmd_resolve(config, &snapshot, Point::new(x, y), exclude.as_deref(), template),
        Commands::Serialize {
            snapshot,
            ids,
            template,
        } => cmd_serialize(config, &snapshot, &ids, template),
        Commands::Compose {
            snapshot,
            goal,
            ids,
            points,
            url,
            template,
            contexts,
        } => {
            let plugins = parse_contexts(&contexts)?;
            let doc = load_snapshot(&snapshot)?;
            let selection = select(&doc, config, &ids, &points)?;
            let url = url
                .or_else(|| config.prompt.page_url.clone())
                .or_else(|| doc.url().map(str::to_string));

            let composer = PromptComposer::new(serializer_for(config, template));
            let mut request =
                PromptRequest::new(selection.as_slice(), &goal).with_plugins(&plugins);
            if let Some(ref url) = url {
                request = request.with_url(url);
            }

            println!("{}", composer.compose(request).await);
            Ok(())
        }
        Commands::Message {
            snapshot,
            ids,
            prompt,
        } => {
            let doc = load_snapshot(&snapshot)?;
            let selection = select(&doc, config, &ids, &[])?;
            let message = match prompt {
                Some(prompt) => selection.to_prompt_message(prompt),
                None => selection.to_selected_message(),
            };
            println!("{}", message.to_json()?);
            Ok(())
        }
    }
}

fn cmd_resolve(
    config: &Config,
    snapshot: &Path,
    point: Point,
    exclude: Option<&str>,
    template: Option<TemplateKind>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_snapshot(snapshot)?;

    let rules = exclusion_rules(config, exclude)?;
    let element = ElementResolver::new(rules).resolve(&doc, point);
    info!(point = %point, xpath = %xpath_for(&element, true), "Resolved element");

    println!("{}", xpath_for(&element, true));
    print!("{}", serializer_for(config, template).serialize(&element, 0));
    Ok(())
}

fn cmd_serialize(
    config: &Config,
    snapshot: &Path,
    ids: &[String],
    template: Option<TemplateKind>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_snapshot(snapshot)?;
    let selection = select(&doc, config, ids, &[])?;
    print!(
        "{}",
        serializer_for(config, template).serialize_all(selection.as_slice())
    );
    Ok(())
}

/// Configured exclusions, with `extra` appended as another selector group.
fn exclusion_rules(
    config: &Config,
    extra: Option<&str>,
) -> Result<ExclusionRules, SelectorError> {
    let rules = ExclusionRules::from_config(&config.resolver)?;
    let Some(extra) = extra else {
        return Ok(rules);
    };
    let combined = match config.resolver.exclude_selector.as_deref() {
        Some(configured) if !configured.trim().is_empty() => format!("{configured}, {extra}"),
        _ => extra.to_string(),
    };
    Ok(rules.with_selector(Selector::parse(&combined)?))
}

fn load_snapshot(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let doc = Document::load(path)?;
    debug!(path = %path.display(), elements = doc.len(), "Snapshot loaded");
    Ok(doc)
}

fn serializer_for(config: &Config, template: Option<TemplateKind>) -> ElementSerializer {
    ElementSerializer::new(template.unwrap_or(config.prompt.template))
        .with_options(SerializerOptions::from_config(&config.serializer))
}

/// Elements picked by id, then elements resolved at each point.
fn select<'a>(
    doc: &'a Document,
    config: &Config,
    ids: &[String],
    points: &[Point],
) -> Result<SelectionSet<ElementRef<'a>>, Box<dyn std::error::Error>> {
    let mut selection = SelectionSet::new();
    for id in ids {
        let element = doc
            .get_element_by_id(id)
            .ok_or_else(|| CommandError::UnknownElement(id.clone()))?;
        selection.insert(element);
    }

    if !points.is_empty() {
        let resolver = ElementResolver::from_config(&config.resolver)?;
        for point in points {
            selection.insert(resolver.resolve(doc, *point));
        }
    }
    Ok(selection)
}

/// Groups `plugin:name=value` arguments by plugin, keeping first-seen order.
pub(crate) fn parse_contexts(args: &[String]) -> Result<Vec<PluginContext>, CommandError> {
    let mut plugins: Vec<PluginContext> = Vec::new();
    for arg in args {
        let (plugin, name, value) = parse_context_arg(arg)?;
        match plugins.iter_mut().find(|p| p.plugin_name == plugin) {
            Some(existing) => existing.snippets.push(ContextSnippet::new(name, value)),
            None => plugins.push(PluginContext::new(plugin).snippet(name, value)),
        }
    }
    Ok(plugins)
}

fn parse_context_arg(arg: &str) -> Result<(&str, &str, &str), CommandError> {
    let invalid = || CommandError::InvalidContext(arg.to_string());
    let (plugin, rest) = arg.split_once(':').ok_or_else(invalid)?;
    let (name, value) = rest.split_once('=').ok_or_else(invalid)?;
    let (plugin, name) = (plugin.trim(), name.trim());
    if plugin.is_empty() || name.is_empty() {
        return Err(invalid());
    }
    Ok((plugin, name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_protocols::ElementHandle;

    #[test]
    fn test_parse_context_arg() {
        assert_eq!(
            parse_context_arg("git:branch=main").unwrap(),
            ("git", "branch", "main")
        );
        assert_eq!(
            parse_context_arg("db:query=a=b:c").unwrap(),
            ("db", "query", "a=b:c")
        );
        assert_eq!(parse_context_arg("p:empty=").unwrap(), ("p", "empty", ""));
    }

    #[test]
    fn test_parse_context_arg_rejects_malformed() {
        for bad in ["nocolon", "p:noequals", ":name=v", "p:=v"] {
            assert!(
                matches!(parse_context_arg(bad), Err(CommandError::InvalidContext(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_contexts_groups_by_plugin() {
        let args: Vec<String> = ["git:branch=main", "router:route=/", "git:status=clean"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let plugins = parse_contexts(&args).unwrap();

        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].plugin_name, "git");
        let names: Vec<&str> = plugins[0].snippets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["branch", "status"]);
        assert_eq!(plugins[1].plugin_name, "router");
    }

    #[test]
    fn test_exclude_flag_adds_to_configured_selector() {
        let mut config = Config::default();
        config.resolver.exclude_selector = Some("#toolbar".to_string());

        let rules = exclusion_rules(&config, Some(".debug")).unwrap();
        assert_eq!(rules.selector().unwrap().as_str(), "#toolbar, .debug");

        let rules = exclusion_rules(&config, None).unwrap();
        assert_eq!(rules.selector().unwrap().as_str(), "#toolbar");

        let rules = exclusion_rules(&Config::default(), Some(".debug")).unwrap();
        assert_eq!(rules.selector().unwrap().as_str(), ".debug");
    }

    #[test]
    fn test_select_reports_unknown_id() {
        let doc = Document::from_json(r#"{"root": {"tag": "html"}}"#).unwrap();
        let err = select(&doc, &Config::default(), &["nope".to_string()], &[]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_select_dedups_ids_and_points() {
        let doc = Document::from_json(
            r#"{"root": {"tag": "body", "rect": {"x": 0, "y": 0, "width": 100, "height": 100},
                "children": [{"tag": "p", "attributes": [{"name": "id", "value": "p"}],
                              "rect": {"x": 0, "y": 0, "width": 10, "height": 10}}]}}"#,
        )
        .unwrap();
        let selection = select(
            &doc,
            &Config::default(),
            &["p".to_string()],
            &[Point::new(5.0, 5.0), Point::new(50.0, 50.0)],
        )
        .unwrap();

        let tags: Vec<String> = selection.iter().map(|el| el.tag_name()).collect();
        assert_eq!(tags, vec!["p", "body"]);
    }
}
