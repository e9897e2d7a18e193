//! Clipping of segments against half-planes.
//!
//! The incident face of a polygon-polygon contact is clipped against the side
//! planes of the reference face. Each clipped point keeps track of the
//! features it was built from.

pub use self::clip_segment_to_line::{clip_segment_to_line, ClipVertex};

mod clip_segment_to_line;
