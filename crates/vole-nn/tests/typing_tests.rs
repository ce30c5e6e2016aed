// Integration tests for the vole-nn typing layer
//
// These exercise the capability descriptors against the three kinds of
// candidate the layer is built for: declared modules (trait implementors),
// structural conformers (member-lookup overrides with no trait impls),
// and unrelated values that should fail every check without erroring.

use std::collections::HashMap;
use std::sync::Arc;

use vole_core::{bail, DType, Result};
use vole_nn::{
    satisfies, ArrayRef, CallableModule, Capability, Introspect, MemberKind, ModuleLike, Params,
    State, CALLABLE_MODULE_LIKE, MODULE_LIKE,
};

/// Minimal array standing in for the external framework's type.
#[derive(Debug)]
struct DummyArray {
    dims: Vec<usize>,
}

impl vole_core::Array for DummyArray {
    fn dtype(&self) -> DType {
        DType::F32
    }

    fn dims(&self) -> &[usize] {
        &self.dims
    }
}

fn array(dims: &[usize]) -> ArrayRef {
    Arc::new(DummyArray {
        dims: dims.to_vec(),
    })
}

fn single_param(module: &str, param: &str, dims: &[usize]) -> Params {
    let mut inner = HashMap::new();
    inner.insert(param.to_string(), array(dims));
    let mut outer = HashMap::new();
    outer.insert(module.to_string(), inner);
    outer
}

// A module that can be introspected but not invoked, like a bare
// parameter container.

struct Bag {
    name: String,
}

impl ModuleLike for Bag {
    fn name(&self) -> &str {
        &self.name
    }

    fn module_name(&self) -> &str {
        "bag"
    }

    fn params_dict(&self) -> Params {
        single_param(&self.name, "w", &[4, 4])
    }

    fn state_dict(&self) -> State {
        HashMap::new()
    }
}

impl Introspect for Bag {
    fn as_module_like(&self) -> Option<&dyn ModuleLike> {
        Some(self)
    }
}

// A module that is also invocable: returns its first input unchanged.

struct Identity {
    name: String,
}

impl ModuleLike for Identity {
    fn name(&self) -> &str {
        &self.name
    }

    fn module_name(&self) -> &str {
        "identity"
    }

    fn params_dict(&self) -> Params {
        HashMap::new()
    }

    fn state_dict(&self) -> State {
        HashMap::new()
    }
}

impl CallableModule for Identity {
    fn call(&self, inputs: &[ArrayRef]) -> Result<ArrayRef> {
        match inputs.first() {
            Some(x) => Ok(x.clone()),
            None => bail!("identity module called with no inputs"),
        }
    }
}

impl Introspect for Identity {
    fn as_module_like(&self) -> Option<&dyn ModuleLike> {
        Some(self)
    }

    fn as_callable(&self) -> Option<&dyn CallableModule> {
        Some(self)
    }
}

// A value with no members at all — the `object()` of these tests.

struct Paperweight;

impl Introspect for Paperweight {}

// Structural conformer: reports the full member surface without
// implementing either trait.

struct Duck;

impl Introspect for Duck {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match name {
            "name" | "module_name" => Some(MemberKind::Text),
            "params_dict" | "state_dict" => Some(MemberKind::Dict),
            "call" => Some(MemberKind::Call),
            _ => None,
        }
    }
}

// Partial surfaces: each is missing something and must fail both checks.

struct NamesOnly;

impl Introspect for NamesOnly {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match name {
            "name" | "module_name" => Some(MemberKind::Text),
            _ => None,
        }
    }
}

struct BareClosure;

impl Introspect for BareClosure {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match name {
            "call" => Some(MemberKind::Call),
            _ => None,
        }
    }
}

// Right member names, wrong shape: dicts where text is required.

struct WrongKinds;

impl Introspect for WrongKinds {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match name {
            "name" | "module_name" | "params_dict" | "state_dict" => Some(MemberKind::Dict),
            _ => None,
        }
    }
}

#[test]
fn module_without_call_is_module_like_only() {
    let bag = Bag {
        name: "bag_0".to_string(),
    };
    assert!(satisfies(&bag, &MODULE_LIKE));
    assert!(!satisfies(&bag, &CALLABLE_MODULE_LIKE));
}

#[test]
fn callable_module_satisfies_both() {
    let id = Identity {
        name: "identity_0".to_string(),
    };
    assert!(satisfies(&id, &MODULE_LIKE));
    assert!(satisfies(&id, &CALLABLE_MODULE_LIKE));
}

#[test]
fn bare_value_satisfies_neither() {
    assert!(!satisfies(&Paperweight, &MODULE_LIKE));
    assert!(!satisfies(&Paperweight, &CALLABLE_MODULE_LIKE));
}

#[test]
fn structural_conformance_needs_no_trait_impl() {
    assert!(satisfies(&Duck, &MODULE_LIKE));
    assert!(satisfies(&Duck, &CALLABLE_MODULE_LIKE));
}

#[test]
fn missing_dict_members_fail_both() {
    assert!(!satisfies(&NamesOnly, &MODULE_LIKE));
    assert!(!satisfies(&NamesOnly, &CALLABLE_MODULE_LIKE));
}

#[test]
fn invocability_alone_is_not_enough() {
    assert!(!satisfies(&BareClosure, &MODULE_LIKE));
    assert!(!satisfies(&BareClosure, &CALLABLE_MODULE_LIKE));
}

#[test]
fn member_kinds_must_match() {
    assert!(!satisfies(&WrongKinds, &MODULE_LIKE));
    assert!(!satisfies(&WrongKinds, &CALLABLE_MODULE_LIKE));
}

#[test]
fn descriptors_resolve_by_name() {
    let module_like = Capability::named("ModuleLike").unwrap();
    let callable = Capability::named("CallableModuleLike").unwrap();

    let bag = Bag {
        name: "bag_1".to_string(),
    };
    assert!(satisfies(&bag, module_like));
    assert!(!satisfies(&bag, callable));
    assert!(Capability::named("Optimizer").is_err());
}

#[test]
fn identity_call_returns_its_input() {
    let id = Identity {
        name: "identity_1".to_string(),
    };
    let x = array(&[2, 3]);
    let y = id.call(std::slice::from_ref(&x)).unwrap();
    assert!(Arc::ptr_eq(&x, &y));
    assert_eq!(y.dims(), &[2, 3]);
    assert!(id.call(&[]).is_err());
}

#[test]
fn params_dict_shape_is_nested_by_module() {
    let bag = Bag {
        name: "bag_2".to_string(),
    };
    let params = bag.params_dict();
    assert_eq!(params.len(), 1);
    let inner = params.get("bag_2").unwrap();
    assert_eq!(inner.get("w").unwrap().dims(), &[4, 4]);
    assert!(bag.state_dict().is_empty());
}
