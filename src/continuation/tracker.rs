//! Token and content-list extraction

use crate::extract::{renderers, string_at};
use crate::types::{ContinuationToken, RawNode};

/// Where the token sits inside a continuation sentinel
const TOKEN_POINTERS: &[&str] = &[
    "/continuationEndpoint/continuationCommand/token",
    "/button/buttonRenderer/command/continuationCommand/token",
];

/// Response keys that carry continuation actions
const ACTION_KEYS: &[&str] = &[
    "onResponseReceivedActions",
    "onResponseReceivedCommands",
    "onResponseReceivedEndpoints",
];

/// Action shapes that carry a content list
const ACTION_ITEM_POINTERS: &[&str] = &[
    "/appendContinuationItemsAction/continuationItems",
    "/reloadContinuationItemsCommand/continuationItems",
];

/// Next continuation token among a page's raw items, if any
///
/// Absence is the normal last-page outcome, never an error.
pub fn extract_continuation<'a, I>(items: I) -> Option<ContinuationToken>
where
    I: IntoIterator<Item = &'a RawNode>,
{
    items.into_iter().find_map(|item| {
        let sentinel = item.get(renderers::CONTINUATION_ITEM)?;
        TOKEN_POINTERS
            .iter()
            .find_map(|pointer| string_at(sentinel, pointer))
    })
}

/// Content list of a continuation response
///
/// Items of every carrying action are concatenated in response order; a
/// comment section reloads its header and its threads as separate commands.
/// `None` when no action carries a list.
pub fn continuation_items(response: &RawNode) -> Option<Vec<&RawNode>> {
    let mut lists = ACTION_KEYS
        .iter()
        .filter_map(|key| response.get(*key)?.as_array())
        .flatten()
        .filter_map(|action| {
            ACTION_ITEM_POINTERS
                .iter()
                .find_map(|pointer| action.pointer(pointer)?.as_array())
        })
        .peekable();
    lists.peek()?;
    Some(lists.flatten().collect())
}

/// Unwrap section and rich-grid wrappers so every element is a single renderer
pub fn flatten_items<'a, I>(items: I) -> Vec<&'a RawNode>
where
    I: IntoIterator<Item = &'a RawNode>,
{
    let mut flat = Vec::new();
    for item in items {
        if let Some(contents) = item
            .pointer("/itemSectionRenderer/contents")
            .and_then(RawNode::as_array)
        {
            flat.extend(flatten_items(contents));
        } else if let Some(content) = item.pointer("/richItemRenderer/content") {
            flat.push(content);
        } else {
            flat.push(item);
        }
    }
    flat
}
