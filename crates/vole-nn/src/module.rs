// ModuleLike / CallableModule — The explicit module contracts
//
// A "module" here is anything a neural-network library would introspect:
// it has a name, it can report its parameters and state as nested
// dictionaries, and it may additionally be invocable on arrays. These two
// traits are the declared-conformance route; the structural route for
// types outside the hierarchy lives in `capability`.
//
// WHY TWO TRAITS?
//
// Invocability is a separate capability from being introspectable. Linear
// layers are both; an optimizer-facing parameter container is only the
// former. Composing `CallableModule: ModuleLike` keeps the invariant that
// every callable module is a module, checked by the compiler rather than
// by convention.

use std::collections::HashMap;
use std::sync::Arc;

use vole_core::{Array, DType, Result};

/// Shared handle to an array behind the [`Array`] boundary.
pub type ArrayRef = Arc<dyn Array>;

/// Module parameters: module name → (parameter name → array).
pub type Params = HashMap<String, HashMap<String, ArrayRef>>;

/// Module state, same nesting as [`Params`] but non-trainable
/// (running statistics, counters, and the like).
pub type State = Params;

/// Creates a fresh array for a given shape and dtype.
///
/// The typing layer never runs initializers; the alias exists so module
/// constructors elsewhere share one signature.
pub type Initializer = Arc<dyn Fn(&[usize], DType) -> Result<ArrayRef> + Send + Sync>;

/// Random-key handle. Opaque at this layer; the array framework decides
/// what a key actually is.
pub type PrngKey = ArrayRef;

/// The introspection contract every module exposes.
///
/// Object-safe on purpose: heterogeneous module collections are the whole
/// point of asking "is this module-like" at runtime.
pub trait ModuleLike {
    /// The name of this module instance (e.g. `"linear_0"`).
    fn name(&self) -> &str;

    /// The name of this module's type (e.g. `"linear"`).
    fn module_name(&self) -> &str;

    /// All trainable parameters, keyed by owning module then parameter name.
    fn params_dict(&self) -> Params;

    /// All non-trainable state, same keying as [`ModuleLike::params_dict`].
    fn state_dict(&self) -> State;
}

/// A module that can also be invoked on arrays.
pub trait CallableModule: ModuleLike {
    /// Apply the module to its inputs, producing an output array.
    fn call(&self, inputs: &[ArrayRef]) -> Result<ArrayRef>;
}
