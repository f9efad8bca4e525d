//! Loader trait and shared helpers

use crate::error::{Error, Result};
use crate::extract::{first_renderer, string_at};
use crate::types::RawNode;
use tracing::trace;

/// Builds an entity from the inner node of its renderer
pub trait Loadable: Sized {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Load a new entity from a raw renderer node
    fn load(raw: &RawNode) -> Result<Self>;
}

/// Identity field at `pointer`, or a malformed-entity error naming `field`
pub(crate) fn required(raw: &RawNode, entity: &str, pointer: &str) -> Result<String> {
    string_at(raw, pointer).ok_or_else(|| {
        let field = pointer.rsplit('/').next().unwrap_or(pointer);
        Error::malformed(entity, field)
    })
}

/// Load every item carrying one of `tags`, skipping anything else
pub fn load_renderers<'a, T, I>(items: I, tags: &[&'static str]) -> Result<Vec<T>>
where
    T: Loadable,
    I: IntoIterator<Item = &'a RawNode>,
{
    let mut loaded = Vec::new();
    for item in items {
        match first_renderer(item, tags) {
            Some((_, inner)) => loaded.push(T::load(inner)?),
            None => trace!("Skipping item without a {} renderer", T::ENTITY),
        }
    }
    Ok(loaded)
}
