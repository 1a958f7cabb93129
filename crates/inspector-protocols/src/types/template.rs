//! Prompt template families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Surface form used for serialized element blocks and prompt documents.
///
/// The two families are not interchangeable; callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// `<request><user_goal>...</user_goal>...</request>`
    #[default]
    Xml,
    /// `# Goal\n...\n## Selected Elements\n...`
    Markdown,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(ProtocolError::UnknownTemplate(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_kind() {
        assert_eq!("xml".parse::<TemplateKind>().unwrap(), TemplateKind::Xml);
        assert_eq!(
            "Markdown".parse::<TemplateKind>().unwrap(),
            TemplateKind::Markdown
        );
        assert_eq!("md".parse::<TemplateKind>().unwrap(), TemplateKind::Markdown);
        assert!("html".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn test_default_is_xml() {
        assert_eq!(TemplateKind::default(), TemplateKind::Xml);
        assert_eq!(TemplateKind::default().to_string(), "xml");
    }
}
