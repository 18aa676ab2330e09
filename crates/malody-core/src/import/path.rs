//! Dot-delimited path access on JSON trees.
//!
//! `"meta.song.artist"` addresses `root["meta"]["song"]["artist"]`. Each
//! segment is one level of object lookup; arrays are not indexed.

use serde_json::{Map, Value};
use tracing::trace;

/// Look up a nested value, `None` if any segment is absent or not an object.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// A non-object value sitting on an intermediate segment is replaced by an
/// empty object.
pub fn set_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return;
    };

    let mut node = root;
    for segment in segments {
        let slot = node
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        node = match slot {
            Value::Object(map) => map,
            _ => unreachable!("slot was just made an object"),
        };
    }
    node.insert(last.to_string(), value);
}

/// Copy every `(from, to)` pair present in `source` into a fresh map.
///
/// Absent source paths are skipped, so the result only holds what the
/// source actually provided.
pub fn remap<'p, I>(source: &Value, pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'p str, &'p str)>,
{
    let mut out = Map::new();
    for (from, to) in pairs {
        if let Some(value) = get_path(source, from) {
            trace!("remap {} -> {}", from, to);
            set_path(&mut out, to, value.clone());
        }
    }
    out
}

/// Like [`remap`], but into `target` and only where `to` is absent or `null`
/// there.
pub fn remap_missing<'p, I>(source: &Value, target: &mut Map<String, Value>, pairs: I)
where
    I: IntoIterator<Item = (&'p str, &'p str)>,
{
    for (from, to) in pairs {
        let present = match to.split_once('.') {
            Some((head, rest)) => target.get(head).and_then(|node| get_path(node, rest)),
            None => target.get(to),
        };
        if present.is_some_and(|value| !value.is_null()) {
            continue;
        }
        if let Some(value) = get_path(source, from) {
            trace!("remap {} -> {} (fallback)", from, to);
            set_path(target, to, value.clone());
        }
    }
}
