//! Shapes supported by contact2d.

pub use self::circle::Circle;
pub use self::edge::Edge;
pub use self::feature_id::{FeatureId, PackedFeatureId};
pub use self::polygon::{ConvexPolygonal, Polygon, PolygonError};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

mod circle;
mod edge;
mod feature_id;
mod polygon;
mod shape;
