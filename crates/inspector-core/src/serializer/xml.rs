use std::borrow::Cow;

use super::{ElementContext, NO_PARENT_NOTICE, STYLES_UNAVAILABLE};

pub(crate) fn render(ctx: &ElementContext, escape: bool) -> String {
    let v = |value: &str| -> String {
        if escape {
            escape_markup(value).into_owned()
        } else {
            value.to_string()
        }
    };

    let mut out = format!("<element index=\"{}\">\n", ctx.ordinal);
    out.push_str(&format!("  <tag>{}</tag>\n", ctx.tag));

    if let Some(ref id) = ctx.id {
        out.push_str(&format!("  <id>{}</id>\n", v(id)));
    }
    if let Some(ref classes) = ctx.classes {
        out.push_str(&format!("  <classes>{}</classes>\n", v(classes)));
    }

    if let Some(ref attributes) = ctx.attributes {
        out.push_str("  <attributes>\n");
        for attr in attributes {
            out.push_str(&format!(
                "    <{name}>{}</{name}>\n",
                v(&attr.value),
                name = attr.name
            ));
        }
        out.push_str("  </attributes>\n");
    }

    if let Some(ref text) = ctx.text {
        out.push_str(&format!("  <text>{}</text>\n", v(text)));
    }

    out.push_str("  <structural_context>\n");
    match ctx.parent {
        Some(ref parent) => {
            out.push_str("    <parent>\n");
            out.push_str(&format!("      <tag>{}</tag>\n", parent.tag));
            if let Some(ref id) = parent.id {
                out.push_str(&format!("      <id>{}</id>\n", v(id)));
            }
            if let Some(ref classes) = parent.classes {
                out.push_str(&format!("      <classes>{}</classes>\n", v(classes)));
            }
            out.push_str("    </parent>\n");
        }
        None => out.push_str(&format!("    <parent>{}</parent>\n", NO_PARENT_NOTICE)),
    }
    out.push_str("  </structural_context>\n");

    match ctx.styles {
        Some(ref styles) => {
            out.push_str("  <styles>\n");
            for (name, value) in styles {
                out.push_str(&format!("    <{name}>{}</{name}>\n", v(value)));
            }
            out.push_str("  </styles>\n");
        }
        None => out.push_str(&format!("  <styles>{}</styles>\n", STYLES_UNAVAILABLE)),
    }

    out.push_str("</element>\n");
    out
}

/// Replaces `&`, `<`, `>` and `"` with entities.
pub(crate) fn escape_markup(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
