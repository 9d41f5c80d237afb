//! Query and answer prompt construction.

pub mod examples;
mod selector;
pub mod templates;

use serde::{Deserialize, Serialize};

pub use examples::builtin_examples;
pub use selector::ExampleSelector;

use crate::columns::format_columns;
use mitra_core::ChainState;

/// A question paired with the query that answers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FewShotExample {
    pub input: String,
    pub query: String,
}

impl FewShotExample {
    pub fn new(input: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            query: query.into(),
        }
    }
}

/// Substitute `{name}` placeholders in a single pass. Unknown placeholders
/// and text inside substituted values are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Few-shot query prompt: prefix, each example, then the suffix.
pub fn query_prompt(
    question: &str,
    examples: &[&FewShotExample],
    table_info: &str,
    top_k: usize,
) -> String {
    let top_k = top_k.to_string();
    let mut parts = Vec::with_capacity(examples.len() + 2);
    parts.push(render(
        templates::EXAMPLE_PREFIX,
        &[("top_k", &top_k), ("table_info", table_info)],
    ));
    for example in examples {
        parts.push(render(
            templates::EXAMPLE_TEMPLATE,
            &[("input", &example.input), ("query", &example.query)],
        ));
    }
    parts.push(render(templates::EXAMPLE_SUFFIX, &[("input", question)]));
    parts.join(templates::EXAMPLE_SEPARATOR)
}

/// Answer prompt for the query and result held in `state`.
pub fn answer_prompt(state: &ChainState) -> String {
    let columns = format_columns(&state.result_columns);
    render(
        templates::ANSWER_TEMPLATE,
        &[
            ("question", &state.question),
            ("query", &state.generated_query),
            ("columns", &columns),
            ("response", &state.execution_result),
        ],
    )
}
