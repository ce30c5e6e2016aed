// Capability — Structural membership checks without declared conformance
//
// `isinstance`-style questions ("is this value shaped like a module?") are
// answered here by comparing a candidate's exposed members against an
// immutable descriptor, not by walking a type hierarchy. A type that never
// heard of `ModuleLike` still satisfies the check if it reports the right
// members through `Introspect`.
//
// The two built-in descriptors are plain const data, created once and
// shared freely: the checker borrows everything it touches and mutates
// nothing, so concurrent use needs no locking.

use crate::module::{CallableModule, ModuleLike};
use vole_core::{Error, Result};

/// The name of the invocation member in capability descriptors.
pub const CALL_MEMBER: &str = "call";

/// The shape of a required member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A readable text-valued property.
    Text,
    /// A zero-argument member returning a name → (name → array) mapping.
    Dict,
    /// Generic invocability of the candidate itself.
    Call,
}

/// One required member of a capability: a name and its expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub kind: MemberKind,
}

impl Member {
    pub const fn new(name: &'static str, kind: MemberKind) -> Self {
        Member { name, kind }
    }
}

const MODULE_LIKE_MEMBERS: &[Member] = &[
    Member::new("name", MemberKind::Text),
    Member::new("module_name", MemberKind::Text),
    Member::new("params_dict", MemberKind::Dict),
    Member::new("state_dict", MemberKind::Dict),
];

// Exactly MODULE_LIKE_MEMBERS plus the call member: a candidate is
// callable-module-like iff it is module-like and invocable.
const CALLABLE_MODULE_LIKE_MEMBERS: &[Member] = &[
    Member::new("name", MemberKind::Text),
    Member::new("module_name", MemberKind::Text),
    Member::new("params_dict", MemberKind::Dict),
    Member::new("state_dict", MemberKind::Dict),
    Member::new(CALL_MEMBER, MemberKind::Call),
];

/// A named, immutable set of required members.
///
/// Satisfaction is structural: every listed member must be reported
/// present, with a matching kind, by the candidate's [`Introspect::member`]
/// lookup. Declared trait implementations are one way to get there, not a
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    name: &'static str,
    members: &'static [Member],
}

/// Everything a neural-network library needs to introspect a module:
/// a name, a type name, and the parameter/state dictionaries.
pub const MODULE_LIKE: Capability = Capability {
    name: "ModuleLike",
    members: MODULE_LIKE_MEMBERS,
};

/// [`MODULE_LIKE`] plus generic invocability.
pub const CALLABLE_MODULE_LIKE: Capability = Capability {
    name: "CallableModuleLike",
    members: CALLABLE_MODULE_LIKE_MEMBERS,
};

impl Capability {
    /// Build a caller-defined capability, validating the member list.
    ///
    /// Fails fast on descriptor misuse: an empty member list, duplicate
    /// member names, or more than one [`MemberKind::Call`] member is a
    /// configuration error, reported here rather than as a silent `false`
    /// from every later check.
    pub fn new(name: &'static str, members: &'static [Member]) -> Result<Self> {
        if members.is_empty() {
            return Err(Self::malformed(name, "empty member list"));
        }
        for (i, m) in members.iter().enumerate() {
            if members[..i].iter().any(|prev| prev.name == m.name) {
                return Err(Self::malformed(name, "duplicate member name"));
            }
        }
        let calls = members.iter().filter(|m| m.kind == MemberKind::Call).count();
        if calls > 1 {
            return Err(Self::malformed(name, "more than one call member"));
        }
        Ok(Capability { name, members })
    }

    /// Resolve a built-in descriptor by name.
    pub fn named(name: &str) -> Result<&'static Capability> {
        match name {
            "ModuleLike" => Ok(&MODULE_LIKE),
            "CallableModuleLike" => Ok(&CALLABLE_MODULE_LIKE),
            other => Err(Error::UnknownCapability(other.to_string())),
        }
    }

    /// The descriptor's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The required members.
    pub fn members(&self) -> &'static [Member] {
        self.members
    }

    /// Whether `candidate` structurally satisfies this capability.
    ///
    /// Pure and total: a candidate missing members is a normal `false`,
    /// never an error, whatever the candidate's actual type.
    pub fn satisfied_by(&self, candidate: &dyn Introspect) -> bool {
        self.members
            .iter()
            .all(|m| candidate.member(m.name) == Some(m.kind))
    }

    fn malformed(name: &str, reason: &str) -> Error {
        Error::MalformedCapability {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Whether `candidate` structurally satisfies `capability`.
///
/// Free-function spelling of [`Capability::satisfied_by`], for call sites
/// that read better predicate-first.
pub fn satisfies(candidate: &dyn Introspect, capability: &Capability) -> bool {
    capability.satisfied_by(candidate)
}

/// The runtime reflection surface capability checks run against.
///
/// There are two ways in:
///
/// - Types that implement the contracts override [`Introspect::as_module_like`]
///   (and [`Introspect::as_callable`] if invocable); the default
///   [`Introspect::member`] lookup then derives the member surface from
///   those accessors.
/// - Types outside the trait hierarchy override [`Introspect::member`]
///   directly and report whatever members they actually expose. No
///   conformance declaration is needed for the checks to pass.
///
/// A bare `impl Introspect for T {}` is valid and reports no members, so
/// such a type fails every capability without erroring.
pub trait Introspect {
    /// The module-introspection view of this candidate, if it has one.
    fn as_module_like(&self) -> Option<&dyn ModuleLike> {
        None
    }

    /// The invocable view of this candidate, if it has one.
    fn as_callable(&self) -> Option<&dyn CallableModule> {
        None
    }

    /// Look up a member by name, reporting its kind if present.
    fn member(&self, name: &str) -> Option<MemberKind> {
        if self.as_module_like().is_some() {
            if let Some(m) = MODULE_LIKE.members().iter().find(|m| m.name == name) {
                return Some(m.kind);
            }
        }
        if name == CALL_MEMBER && self.as_callable().is_some() {
            return Some(MemberKind::Call);
        }
        None
    }
}
