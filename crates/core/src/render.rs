use crate::config::RenderConfig;
use crate::document::SignatureDocument;
use crate::error::Result;
use crate::link::{MarkdownLinkRenderer, escape_markdown};
use serde::{Deserialize, Serialize};
use sigdoc_api::{Fragment, Signature};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain signature per line
    #[default]
    Text,
    /// Markdown list with linked type names
    Markdown,
    /// JSON array of fragment streams, one per member
    Fragments,
}

#[derive(Debug, Serialize)]
struct MemberFragments<'a> {
    member: &'a str,
    fragments: Vec<Fragment>,
}

pub fn render_document(
    doc: &SignatureDocument,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String> {
    tracing::debug!(
        "Rendering {} members of {} as {:?}",
        doc.members.len(),
        doc.owner,
        format
    );

    let rendered = match format {
        OutputFormat::Text => doc
            .members
            .iter()
            .map(|m| m.signature())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Markdown => {
            let heading = format!("### {}", escape_markdown(&doc.owner));
            let mut lines = vec![heading, String::new()];
            for member in &doc.members {
                let mut renderer = MarkdownLinkRenderer::new(config)
                    .with_type_variables(member.type_variables());
                member.visit_signature(&mut renderer);
                lines.push(format!("- {}", renderer.finish()));
            }
            lines.join("\n")
        }
        OutputFormat::Fragments => {
            let streams: Vec<MemberFragments> = doc
                .members
                .iter()
                .map(|m| MemberFragments {
                    member: m.name(),
                    fragments: m.fragments(),
                })
                .collect();
            serde_json::to_string_pretty(&streams)?
        }
    };
    Ok(rendered)
}
