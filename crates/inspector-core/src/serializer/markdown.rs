use super::{ElementContext, NO_PARENT_NOTICE, STYLES_UNAVAILABLE};

pub(crate) fn render(ctx: &ElementContext) -> String {
    let mut out = format!("### Element {}\n", ctx.ordinal);
    out.push_str(&format!("- **Tag**: {}\n", ctx.tag));

    if let Some(ref id) = ctx.id {
        out.push_str(&format!("- **ID**: {}\n", id));
    }
    if let Some(ref classes) = ctx.classes {
        out.push_str(&format!("- **Classes**: {}\n", classes));
    }

    if let Some(ref attributes) = ctx.attributes {
        out.push_str("- **Attributes**:\n");
        for attr in attributes {
            out.push_str(&format!("  - {}: {}\n", attr.name, attr.value));
        }
    }

    if let Some(ref text) = ctx.text {
        out.push_str(&format!("- **Text**: {}\n", text));
    }

    out.push_str("- **Structural Context**:\n");
    match ctx.parent {
        Some(ref parent) => {
            out.push_str("  - **Parent**:\n");
            out.push_str(&format!("    - Tag: {}\n", parent.tag));
            if let Some(ref id) = parent.id {
                out.push_str(&format!("    - ID: {}\n", id));
            }
            if let Some(ref classes) = parent.classes {
                out.push_str(&format!("    - Classes: {}\n", classes));
            }
        }
        None => out.push_str(&format!("  - **Parent**: {}\n", NO_PARENT_NOTICE)),
    }

    match ctx.styles {
        Some(ref styles) => {
            out.push_str("- **Styles**:\n");
            for (name, value) in styles {
                out.push_str(&format!("  - {}: {}\n", name, value));
            }
        }
        None => out.push_str(&format!("- **Styles**: {}\n", STYLES_UNAVAILABLE)),
    }

    out.push('\n');
    out
}
