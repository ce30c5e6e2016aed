use std::fmt;

// DType — Element data types of the array collaborator
//
// The typing layer never touches array elements, but initializers and
// parameter dictionaries are declared in terms of an element type, so the
// enum lives here at the boundary. The set matches what deep-learning
// frameworks commonly ship:
//
//   F16  — 16-bit IEEE half float, for mixed-precision training
//   BF16 — 16-bit brain float, for mixed-precision training
//   F32  — 32-bit float, the default workhorse
//   F64  — 64-bit float, for high-precision work
//   U8   — unsigned byte, for image data and boolean masks
//   U32  — unsigned 32-bit int, for indices
//   I64  — signed 64-bit int, for labels/indices

/// Enum of all supported element data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F16,
    BF16,
    F32,
    F64,
    U8,
    U32,
    I64,
}

impl DType {
    /// Size of one element in bytes.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::F16 => 2,
            DType::BF16 => 2,
            DType::F32 => 4,
            DType::F64 => 8,
            DType::U8 => 1,
            DType::U32 => 4,
            DType::I64 => 8,
        }
    }

    /// Whether this dtype is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::BF16 | DType::F32 | DType::F64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::U8 => "u8",
            DType::U32 => "u32",
            DType::I64 => "i64",
        };
        write!(f, "{}", s)
    }
}
