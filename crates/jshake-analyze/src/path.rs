//! Object property paths, for property-level dead-code decisions.
//!
//! A path records which property chain triggered an inclusion or interaction
//! query (`a.b.c` → `[Key("b"), Key("c")]` relative to `a`). When the access
//! path is not statically known the single-segment `UNKNOWN_PATH` is used.

use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Key(&'a str),
    Unknown,
}

/// Paths are short in practice; four inline segments covers nearly all of
/// them.
pub type ObjectPath<'a> = SmallVec<[PathSegment<'a>; 4]>;

/// The path used when the triggering access is not statically known.
pub const UNKNOWN_PATH: &[PathSegment<'static>] = &[PathSegment::Unknown];

/// The empty path: the value itself, no property access.
pub const EMPTY_PATH: &[PathSegment<'static>] = &[];
