//! Prompt document layouts.

use super::NO_SELECTION_NOTICE;

/// A plugin whose snippets have all been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedPlugin {
    pub name: String,
    pub snippets: Vec<(String, String)>,
}

/// Inputs shared by both layouts. `blocks` is `None` for an empty selection.
pub(crate) struct DocumentParts<'a> {
    pub goal: &'a str,
    pub url: Option<&'a str>,
    pub blocks: Option<&'a str>,
    pub plugins: &'a [ResolvedPlugin],
}

pub(crate) fn xml_document(parts: &DocumentParts<'_>) -> String {
    let mut out = String::from("<request>\n");
    out.push_str(&format!("  <user_goal>{}</user_goal>\n", parts.goal));

    if let Some(url) = parts.url {
        out.push_str(&format!("  <url>{}</url>\n", url));
    }

    match parts.blocks {
        Some(blocks) => {
            out.push_str("  <selected_elements>\n");
            out.push_str(&format!("    {}\n", blocks.trim()));
            out.push_str("  </selected_elements>\n");
        }
        None => out.push_str(&format!("  <context>{}</context>\n", NO_SELECTION_NOTICE)),
    }

    if !parts.plugins.is_empty() {
        out.push_str("  <plugin_contexts>\n");
        for plugin in parts.plugins {
            out.push_str(&format!("    <{}>\n", plugin.name));
            for (name, content) in &plugin.snippets {
                out.push_str(&format!("      <{name}>{}</{name}>\n", content));
            }
            out.push_str(&format!("    </{}>\n", plugin.name));
        }
        out.push_str("  </plugin_contexts>\n");
    }

    out.push_str("</request>");
    out.trim().to_string()
}

pub(crate) fn markdown_document(parts: &DocumentParts<'_>) -> String {
    let mut sections = vec![format!("# Goal\n{}", parts.goal)];

    if let Some(url) = parts.url {
        sections.push(format!("## URL\n{}", url));
    }

    match parts.blocks {
        Some(blocks) => sections.push(format!("## Selected Elements\n{}", blocks.trim())),
        None => sections.push(format!("## Context\n{}", NO_SELECTION_NOTICE)),
    }

    if !parts.plugins.is_empty() {
        let plugins: Vec<String> = parts
            .plugins
            .iter()
            .map(|plugin| {
                let mut section = format!("### {}", plugin.name);
                for (name, content) in &plugin.snippets {
                    section.push_str(&format!("\n#### {}\n{}", name, content));
                }
                section
            })
            .collect();
        sections.push(format!("## Plugin Context\n{}", plugins.join("\n\n")));
    }

    sections.join("\n\n").trim().to_string()
}
