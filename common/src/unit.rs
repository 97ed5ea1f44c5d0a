//! Marker types.

/// Marker type describing the last update of an entity.
#[derive(Clone, Copy, Debug)]
pub struct LastUpdate;

/// Marker type describing the start of an entity's validity.
#[derive(Clone, Copy, Debug)]
pub struct Start;
