//! Opt-in strict checks for documents handed over by front-ends.
//!
//! The model itself accepts anything and renders it by priority order. Callers that
//! want malformed input rejected instead run [`SignatureDocument::validate`].

use crate::document::{Member, SignatureDocument};
use crate::error::{Result, SigdocError};
use sigdoc_api::TypeRef;
use std::collections::HashSet;

impl SignatureDocument {
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(SigdocError::invalid("<document>", "owner name is empty"));
        }
        for member in &self.members {
            validate_member(member).inspect_err(|e| tracing::warn!("{}", e))?;
        }
        Ok(())
    }
}

fn validate_member(member: &Member) -> Result<()> {
    let name = member.name();
    if name.trim().is_empty() {
        return Err(SigdocError::invalid("<unnamed>", "member name is empty"));
    }

    match member {
        Member::Method(method) => {
            check_type(name, "return type", &method.return_type, false)?;

            let mut seen = HashSet::new();
            let last = method.parameters.len().saturating_sub(1);
            for (idx, param) in method.parameters.iter().enumerate() {
                if !seen.insert(param.name.as_str()) {
                    return Err(SigdocError::invalid(
                        name,
                        format!("duplicate parameter name `{}`", param.name),
                    ));
                }
                let context = format!("parameter `{}`", param.name);
                check_type(name, &context, &param.type_ref, idx == last)?;
            }
        }
        Member::Field(field) => check_type(name, "field type", &field.type_ref, false)?,
    }
    Ok(())
}

/// Every named node must carry a name; only the top-level type of a final
/// parameter may be varargs.
fn check_type(member: &str, context: &str, root: &TypeRef, allow_varargs: bool) -> Result<()> {
    let mut problem = None;
    root.visit_types(|t| {
        if problem.is_some() {
            return;
        }
        if t.name().is_none_or(|n| n.trim().is_empty()) {
            problem = Some(format!("unnamed type in {}", context));
        } else if t.is_varargs() && !(allow_varargs && std::ptr::eq(t, root)) {
            problem = Some(format!("varargs not allowed in {}", context));
        }
    });

    match problem {
        Some(reason) => Err(SigdocError::invalid(member, reason)),
        None => Ok(()),
    }
}
