use crate::dtype::DType;
use std::fmt;

// Array — Abstract boundary to the numerical-array framework
//
// The typing layer sits below the framework that actually owns arrays, and
// depending on it directly would make the two circular: the array framework
// wants to name our module contracts, and our contracts mention its array
// type. The way out is the same one used for compute backends elsewhere:
// declare a small trait here and let the concrete array type implement it
// at composition time.
//
// WHY SO SMALL?
//
// The typing layer only moves array handles through params/state
// dictionaries; it never reads elements. So the trait exposes just enough
// for callers (and tests) to hold a plausible handle: a dtype and a shape.
// Anything richer belongs to the framework behind the boundary.

/// Opaque handle contract for the external array type.
///
/// Implemented by whatever array framework the host library composes in.
/// The typing layer treats values of this trait as tokens: stored, cloned,
/// and passed along, never inspected beyond dtype and shape.
pub trait Array: fmt::Debug + Send + Sync + 'static {
    /// The element data type of this array.
    fn dtype(&self) -> DType;

    /// The dimensions of this array.
    fn dims(&self) -> &[usize];

    /// Total number of elements.
    fn elem_count(&self) -> usize {
        self.dims().iter().product()
    }
}
