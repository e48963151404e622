//! Argument binder: template + argument map → bound bytecode text.

use crate::error::AsmError;
use crate::lexer::{classify, RawLine};
use std::collections::BTreeMap;

/// Replace every `<name>` line of `template` with `PUSHARG <value>`.
///
/// All other lines are copied through unchanged. The template is not
/// modified, so the same template can be bound again with other arguments.
pub(crate) fn bind_template(
    template: &str,
    args: &BTreeMap<String, String>,
) -> Result<String, AsmError> {
    let mut out = String::with_capacity(template.len());

    for (idx, line) in template.lines().enumerate() {
        let line_num = idx + 1;
        match classify(line) {
            RawLine::Placeholder(name) => {
                let value = args.get(name).ok_or_else(|| AsmError::UnboundArgument {
                    line: line_num,
                    name: name.to_string(),
                })?;
                if !is_single_token(value) {
                    return Err(AsmError::UnrepresentableArgument {
                        line: line_num,
                        name: name.to_string(),
                        value: value.clone(),
                    });
                }
                out.push_str("PUSHARG ");
                out.push_str(value);
                out.push('\n');
            }
            _ => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    Ok(out)
}

/// A value survives the text format only if the loader reads it back as
/// exactly one argument token.
fn is_single_token(value: &str) -> bool {
    !value.is_empty() && !value.contains(|c: char| c.is_whitespace() || c == '#')
}
