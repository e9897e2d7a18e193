/// An identifier of a geometric feature (vertex or face) of a shape.
///
/// This identifier is shape-dependent: a polygon uses the index of its
/// vertices and faces, a circle only has the face `0`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of a face (an edge in 2D).
    Face(u32),
    /// Unknown identifier.
    Unknown,
}

/// A [`FeatureId`] packed into a single `u32`.
///
/// The two most significant bits encode the feature kind, the remaining 30
/// bits its index. Contact points compare these to recognize the same
/// physical contact from one step to the next.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackedFeatureId(pub u32);

impl PackedFeatureId {
    /// Packed feature id identifying an unknown feature.
    pub const UNKNOWN: Self = Self(0);

    const CODE_MASK: u32 = 0x3fff_ffff;
    const HEADER_MASK: u32 = !Self::CODE_MASK;
    const HEADER_VERTEX: u32 = 0b01 << 30;
    const HEADER_FACE: u32 = 0b11 << 30;

    /// Packed feature id identifying a vertex.
    ///
    /// Panics if `code` does not fit in 30 bits.
    pub fn vertex(code: u32) -> Self {
        assert_eq!(code & Self::HEADER_MASK, 0, "feature index out of range");
        Self(Self::HEADER_VERTEX | code)
    }

    /// Packed feature id identifying a face.
    ///
    /// Panics if `code` does not fit in 30 bits.
    pub fn face(code: u32) -> Self {
        assert_eq!(code & Self::HEADER_MASK, 0, "feature index out of range");
        Self(Self::HEADER_FACE | code)
    }

    /// Unpacks this feature id.
    pub fn unpack(self) -> FeatureId {
        let header = self.0 & Self::HEADER_MASK;
        let code = self.0 & Self::CODE_MASK;
        match header {
            Self::HEADER_VERTEX => FeatureId::Vertex(code),
            Self::HEADER_FACE => FeatureId::Face(code),
            _ => FeatureId::Unknown,
        }
    }

    /// Is the identified feature a face?
    pub fn is_face(self) -> bool {
        self.0 & Self::HEADER_MASK == Self::HEADER_FACE
    }

    /// Is the identified feature a vertex?
    pub fn is_vertex(self) -> bool {
        self.0 & Self::HEADER_MASK == Self::HEADER_VERTEX
    }

    /// Is the identified feature unknown?
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl From<FeatureId> for PackedFeatureId {
    fn from(value: FeatureId) -> Self {
        match value {
            FeatureId::Vertex(fid) => Self::vertex(fid),
            FeatureId::Face(fid) => Self::face(fid),
            FeatureId::Unknown => Self::UNKNOWN,
        }
    }
}
