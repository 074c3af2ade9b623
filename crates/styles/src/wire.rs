//! JSON form of style trees and variant selections.
//!
//! A style node is a JSON object. Keys starting with `:c:` or `:m:` are query
//! tokens holding nested nodes, the key `variants` holds
//! `{group: {option: node}}`, and every other key is a plain property:
//!
//! ```json
//! {
//!   "flex": 1,
//!   "backgroundColor": "blue",
//!   ":c:w[700, Infinity]": { "backgroundColor": "red" },
//!   "variants": { "tone": { "dark": { "color": "white" }, "default": { "color": "black" } } }
//! }
//! ```

use anyhow::{Context as _, Result, bail};
use log::warn;
use responsive_queries::{QueryKind, QueryToken};
use serde_json::{Map, Value};

use crate::node::{StyleNode, VariantGroup};
use crate::selection::{VariantSelection, VariantSelections};

/// Reserved key holding variant groups.
pub const VARIANTS_KEY: &str = "variants";

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_query_key(key: &str) -> bool {
    key.starts_with(":c:") || key.starts_with(":m:")
}

fn node_from_value(value: Value, path: &str) -> Result<StyleNode> {
    let Value::Object(entries) = value else {
        bail!("style at `{path}` must be an object, found {}", json_kind(&value));
    };
    let mut node = StyleNode::new();
    for (key, entry) in entries {
        if key == VARIANTS_KEY {
            node.variants = variants_from_value(entry, &format!("{path}.{VARIANTS_KEY}"))?;
        } else if is_query_key(&key) {
            let query = QueryToken::parse(&key);
            if query.kind() == QueryKind::None {
                warn!("query `{key}` at `{path}` is malformed and will never match");
            }
            let nested = node_from_value(entry, &format!("{path}[{key}]"))?;
            node.conditionals.push((query, nested));
        } else {
            node.properties.insert(key, entry);
        }
    }
    Ok(node)
}

fn variants_from_value(value: Value, path: &str) -> Result<Vec<(String, VariantGroup)>> {
    let Value::Object(groups) = value else {
        bail!("`{path}` must be an object of variant groups, found {}", json_kind(&value));
    };
    groups
        .into_iter()
        .map(|(group_name, options)| {
            let group_path = format!("{path}.{group_name}");
            let Value::Object(options) = options else {
                bail!("variant group `{group_path}` must be an object, found {}", json_kind(&options));
            };
            let group = options
                .into_iter()
                .try_fold(VariantGroup::new(), |group, (option_name, style)| {
                    let style = node_from_value(style, &format!("{group_path}.{option_name}"))?;
                    Ok::<_, anyhow::Error>(group.option(option_name, style))
                })?;
            Ok((group_name, group))
        })
        .collect()
}

impl TryFrom<Value> for StyleNode {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        node_from_value(value, "$")
    }
}

impl From<StyleNode> for Value {
    fn from(node: StyleNode) -> Self {
        let mut object = node.properties;
        if !node.variants.is_empty() {
            let groups = node
                .variants
                .into_iter()
                .map(|(group_name, group)| {
                    let options: Map<String, Self> = group
                        .options()
                        .map(|(option, style)| (option.to_owned(), Self::from(style.clone())))
                        .collect();
                    (group_name, Self::Object(options))
                })
                .collect();
            object.insert(VARIANTS_KEY.to_owned(), Self::Object(groups));
        }
        for (query, style) in node.conditionals {
            insert_conditional(&mut object, query.description().to_owned(), Self::from(style));
        }
        Self::Object(object)
    }
}

/// A repeated query key is nested inside the earlier entry under the same key.
/// It matches exactly when its parent does, so the later entry still applies
/// after the earlier one.
fn insert_conditional(object: &mut Map<String, Value>, key: String, style: Value) {
    if let Some(Value::Object(existing)) = object.get_mut(&key) {
        insert_conditional(existing, key, style);
        return;
    }
    object.insert(key, style);
}

impl StyleNode {
    /// Parse a style description from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("style description is not valid JSON")?;
        Self::try_from(value)
    }

    /// The JSON form of this node. Query keys use their canonical spelling.
    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }
}

/// `null` means no selection. Booleans and numbers select the option spelled
/// the same way, so `false` selects `"false"` rather than `default`.
fn option_name(value: &Value, path: &str) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(option) => Ok(Some(option.clone())),
        Value::Bool(option) => Ok(Some(option.to_string())),
        Value::Number(option) => Ok(Some(option.to_string())),
        Value::Array(_) | Value::Object(_) => {
            bail!("variant option at `{path}` must be a name, found {}", json_kind(value))
        }
    }
}

impl TryFrom<Value> for VariantSelections {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(groups) = value else {
            bail!("variant selections must be an object, found {}", json_kind(&value));
        };
        let mut selections = Self::new();
        for (group, selection) in groups {
            let selection = match selection {
                Value::Object(entries) => {
                    let mut responsive = Vec::with_capacity(entries.len());
                    for (key, option) in entries {
                        let path = format!("{group}[{key}]");
                        if let Some(option) = option_name(&option, &path)? {
                            responsive.push((QueryToken::parse(&key), option));
                        }
                    }
                    VariantSelection::Responsive(responsive)
                }
                other => match option_name(&other, &group)? {
                    Some(option) => VariantSelection::Named(option),
                    None => continue,
                },
            };
            selections.0.insert(group, selection);
        }
        Ok(selections)
    }
}

impl From<VariantSelections> for Value {
    fn from(selections: VariantSelections) -> Self {
        let groups = selections
            .0
            .into_iter()
            .map(|(group, selection)| {
                let value = match selection {
                    VariantSelection::Named(option) => Self::String(option),
                    VariantSelection::Responsive(entries) => Self::Object(
                        entries
                            .into_iter()
                            .map(|(query, option)| (query.description().to_owned(), Self::String(option)))
                            .collect(),
                    ),
                };
                (group, value)
            })
            .collect();
        Self::Object(groups)
    }
}

impl VariantSelections {
    /// Parse selections from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("variant selections are not valid JSON")?;
        Self::try_from(value)
    }
}
