//! # Structural representation
//!
//! Any algebraic data type is described by a tree of a handful of node kinds.
//! The tree's *type* is fixed per Rust type; a tree *value* is a borrowed view of one value,
//! built on every encode by [`crate::Generic::repr`].
//!
//! | node | meaning | bytes |
//! |---|---|---|
//! | [`Unit`] | no data | none |
//! | [`Void`] | an alternative that cannot be constructed | never reached |
//! | [`Product`] | two sub-shapes in sequence | left's, then right's |
//! | [`Sum`] | a choice between two sub-shapes | [`Branch`] tag, then the chosen one's |
//! | [`Field`] | one value with its own [`crate::Encode`] | the value's |
//! | [`Param`] | a type-parameter slot | the caller-supplied encoder's |
//! | [`Compose`] | a nested container of the same parameter | the nested container's |
//! | [`Named`] | constructor or selector name | none |
//!
//! For example, this type
//!
//! ```text
//! enum Shape {
//!     Dot,
//!     Circle { r: u32 },
//!     Rect(u16, u16),
//! }
//! ```
//!
//! is represented as
//!
//! ```text
//! Sum<
//!     Named<Unit>,                                        // Dot
//!     Sum<
//!         Named<Named<Field<u32>>>,                       // Circle { r }
//!         Named<Product<Named<Field<u16>>, Named<Field<u16>>>>,   // Rect(_, _)
//!     >,
//! >
//! ```
//!
//! so that `Shape::Rect(1, 2)` encodes as `[1, 1] ++ u16(1) ++ u16(2)`.

use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::any;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Unit;

/// Uninhabited. A value of this type proves a defect in the types or their representation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Void {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Product<L, R>(pub L, pub R);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sum<L, R> {
    Left(L),
    Right(R),
}

#[derive(Clone, Copy, Debug)]
pub struct Field<'a, T: ?Sized>(pub &'a T);

#[derive(Clone, Copy, Debug)]
pub struct Param<'a, T: ?Sized>(pub &'a T);

/// A container, generic over the same parameter as the container holding it.
///
/// This is where deferred encoders compose: the nested container is traversed with the
/// caller's encoder for the parameter, as if its own slots were the outer container's.
#[derive(Clone, Copy, Debug)]
pub struct Compose<'a, C: ?Sized>(pub &'a C);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NameKind {
    Constructor,
    /// Positional fields have the empty name.
    Selector,
}

#[derive(Clone, Copy, Debug)]
pub struct Named<T> {
    pub kind: NameKind,
    pub name: &'static str,
    pub node: T,
}

impl<T> Named<T> {
    pub fn constructor(name: &'static str, node: T) -> Self {
        Self {
            kind: NameKind::Constructor,
            name,
            node,
        }
    }
    pub fn selector(name: &'static str, node: T) -> Self {
        Self {
            kind: NameKind::Selector,
            name,
            node,
        }
    }
}

/// The discriminant byte which precedes an encoded [`Sum`] alternative.
///
/// We pin the integers manually, so that they cannot drift with enum definition changes.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum Branch {
    Left = 0,
    Right = 1,
}

#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct BranchTag(u8);

impl From<Branch> for BranchTag {
    fn from(branch: Branch) -> Self {
        let int = branch.to_u8().unwrap_or(branch as u8);
        Self(int)
    }
}

impl TryFrom<BranchTag> for Branch {
    type Error = anyhow::Error;
    fn try_from(tag: BranchTag) -> Result<Self> {
        Branch::from_u8(tag.0).ok_or(anyhow!(
            "Unknown {} {}",
            any::type_name::<BranchTag>(),
            tag.0
        ))
    }
}

impl<L, R> Sum<L, R> {
    pub fn branch(&self) -> Branch {
        match self {
            Self::Left(_) => Branch::Left,
            Self::Right(_) => Branch::Right,
        }
    }
}
