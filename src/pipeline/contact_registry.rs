use crate::pipeline::ContactKind;
use crate::shape::ShapeType;

/// Error returned when building an inconsistent [`ContactRegistry`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No routine, nor an explicit ignore, is registered for a pair of
    /// shape types.
    #[error("no contact routine is registered for the pair ({shape1:?}, {shape2:?}).")]
    MissingPair {
        /// The smallest shape type of the pair.
        shape1: ShapeType,
        /// The largest shape type of the pair.
        shape2: ShapeType,
    },
    /// The pair of shape types already has a routine or an explicit ignore.
    #[error("the pair ({shape1:?}, {shape2:?}) is already registered.")]
    DuplicatePair {
        /// The smallest shape type of the pair.
        shape1: ShapeType,
        /// The largest shape type of the pair.
        shape2: ShapeType,
    },
}

/// What to do with a pair of shape types.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PairRoutine {
    /// Create contacts evaluated with the given routine.
    Collide(ContactKind),
    /// Never create contacts for this pair.
    Ignore,
}

/// Table mapping each unordered pair of shape types to its narrow-phase
/// routine.
///
/// Every entry is stored once, at the canonical position where the first
/// shape type is the smallest. Lookups with the shape types in the other
/// order report that the shapes must be swapped.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRegistry {
    routines: [[Option<PairRoutine>; ShapeType::COUNT]; ShapeType::COUNT],
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::with_default_routines()
    }
}

impl ContactRegistry {
    /// A registry without any routine.
    pub fn empty() -> Self {
        Self {
            routines: [[None; ShapeType::COUNT]; ShapeType::COUNT],
        }
    }

    /// A registry with every [`ContactKind`] registered and edge-edge pairs
    /// ignored.
    pub fn with_default_routines() -> Self {
        let mut routines = [[None; ShapeType::COUNT]; ShapeType::COUNT];

        for kind in ContactKind::ALL {
            let (a, b) = kind.shape_types();
            routines[a.index()][b.index()] = Some(PairRoutine::Collide(kind));
        }

        routines[ShapeType::Edge.index()][ShapeType::Edge.index()] = Some(PairRoutine::Ignore);

        Self { routines }
    }

    /// Registers the routine of `kind` for its pair of shape types.
    pub fn register(&mut self, kind: ContactKind) -> Result<(), RegistryError> {
        let (a, b) = kind.shape_types();
        self.set(a, b, PairRoutine::Collide(kind))
    }

    /// Marks the pair `(a, b)` as never colliding.
    pub fn ignore_pair(&mut self, a: ShapeType, b: ShapeType) -> Result<(), RegistryError> {
        self.set(a, b, PairRoutine::Ignore)
    }

    fn set(&mut self, a: ShapeType, b: ShapeType, routine: PairRoutine) -> Result<(), RegistryError> {
        let (shape1, shape2) = if a <= b { (a, b) } else { (b, a) };
        let slot = &mut self.routines[shape1.index()][shape2.index()];

        if slot.is_some() {
            return Err(RegistryError::DuplicatePair { shape1, shape2 });
        }

        *slot = Some(routine);
        Ok(())
    }

    /// Checks that every pair of shape types is covered.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, shape1) in ShapeType::ALL.iter().enumerate() {
            for shape2 in &ShapeType::ALL[i..] {
                if self.routines[shape1.index()][shape2.index()].is_none() {
                    return Err(RegistryError::MissingPair {
                        shape1: *shape1,
                        shape2: *shape2,
                    });
                }
            }
        }

        Ok(())
    }

    /// The entry registered for the pair `(a, b)`, in any order.
    pub fn routine(&self, a: ShapeType, b: ShapeType) -> Option<PairRoutine> {
        let (shape1, shape2) = if a <= b { (a, b) } else { (b, a) };
        self.routines[shape1.index()][shape2.index()]
    }

    /// The contact kind to use for shapes of types `a` and `b`.
    ///
    /// The returned flag is `true` if the shapes must be swapped to match the
    /// canonical order of the kind. Returns `None` for ignored or missing
    /// pairs.
    pub fn resolve(&self, a: ShapeType, b: ShapeType) -> Option<(ContactKind, bool)> {
        match self.routine(a, b)? {
            PairRoutine::Collide(kind) => Some((kind, a > b)),
            PairRoutine::Ignore => None,
        }
    }
}
