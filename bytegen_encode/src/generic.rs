//! # Generic derivation
//!
//! Encoding a [`Generic`] value is a single depth-first walk over its representation tree:
//!
//! - [`Unit`] writes nothing.
//! - [`Void`] is a fatal defect; see [`structural_impossibility`].
//! - [`Product`] writes its left, then its right.
//! - [`Sum`] writes one [`BranchTag`] (`0` left, `1` right), then the chosen alternative.
//! - [`Field`] delegates to the field's own [`Encode`].
//! - [`Named`] writes nothing, and only drives the walk.
//!
//! There is no backtracking and nothing is written out of order, so the bytes equal those of a
//! hand-written encoder visiting the same fields and variants in declaration order.
//!
//! The parametric axis, [`Generic1`], is a container over one type parameter. Its tree may
//! additionally hold [`Param`] slots, encoded by an encoder the caller supplies, and [`Compose`]
//! nodes, nested containers over the same parameter.

use crate::repr::{BranchTag, Compose, Field, Named, Param, Product, Sum, Unit, Void};
use crate::Encode;
use anyhow::Result;
use bytegen_sink::Sink;
use std::any;

/// Reached a node that no well-typed value can produce.
///
/// This is never a data error. It means a representation tree disagrees with its type,
/// so there is nothing sensible to write and encoding must not continue.
pub fn structural_impossibility(what: &str) -> ! {
    log::error!("Structural impossibility: reached {what}");
    panic!("Structural impossibility: reached {what}. The representation of a type is defective.")
}

/* Monomorphic axis. */

pub trait EncodeRepr {
    fn encode_repr<S: Sink>(&self, s: &mut S) -> Result<()>;
}

pub trait Generic {
    type Repr<'a>: EncodeRepr
    where
        Self: 'a;

    fn repr(&self) -> Self::Repr<'_>;
}

pub fn encode_generic<T, S>(value: &T, s: &mut S) -> Result<()>
where
    T: Generic + ?Sized,
    S: Sink,
{
    value.repr().encode_repr(s)
}

impl EncodeRepr for Unit {
    fn encode_repr<S: Sink>(&self, _s: &mut S) -> Result<()> {
        Ok(())
    }
}

impl EncodeRepr for Void {
    fn encode_repr<S: Sink>(&self, _s: &mut S) -> Result<()> {
        structural_impossibility(any::type_name::<Self>())
    }
}

impl<L: EncodeRepr, R: EncodeRepr> EncodeRepr for Product<L, R> {
    fn encode_repr<S: Sink>(&self, s: &mut S) -> Result<()> {
        self.0.encode_repr(s)?;
        self.1.encode_repr(s)
    }
}

impl<L: EncodeRepr, R: EncodeRepr> EncodeRepr for Sum<L, R> {
    fn encode_repr<S: Sink>(&self, s: &mut S) -> Result<()> {
        s.write_u8(*BranchTag::from(self.branch()))?;
        match self {
            Sum::Left(l) => l.encode_repr(s),
            Sum::Right(r) => r.encode_repr(s),
        }
    }
}

impl<'a, T: Encode + ?Sized> EncodeRepr for Field<'a, T> {
    fn encode_repr<S: Sink>(&self, s: &mut S) -> Result<()> {
        self.0.encode(s)
    }
}

impl<T: EncodeRepr> EncodeRepr for Named<T> {
    fn encode_repr<S: Sink>(&self, s: &mut S) -> Result<()> {
        log::trace!("Visiting {:?} {:?}", self.kind, self.name);
        self.node.encode_repr(s)
    }
}

/* Parametric axis. */

/// A tree which may hold slots of the parameter `T`.
pub trait EncodeRepr1<T: ?Sized> {
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>;
}

/// A container generic over one held type, [`Generic1::Item`].
///
/// The container knows its own shape. How its items are encoded is left to the caller of
/// [`encode_generic1`], so a container is encodable even when its item type is not [`Encode`].
pub trait Generic1 {
    type Item: ?Sized;
    type Repr<'a>: EncodeRepr1<Self::Item>
    where
        Self: 'a;

    fn repr1(&self) -> Self::Repr<'_>;
}

pub fn encode_generic1<C, S, F>(container: &C, s: &mut S, mut encode_item: F) -> Result<()>
where
    C: Generic1 + ?Sized,
    S: Sink,
    F: FnMut(&C::Item, &mut S) -> Result<()>,
{
    container.repr1().encode_repr1(s, &mut encode_item)
}

impl<T: ?Sized> EncodeRepr1<T> for Unit {
    fn encode_repr1<S, F>(&self, _s: &mut S, _encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        Ok(())
    }
}

impl<T: ?Sized> EncodeRepr1<T> for Void {
    fn encode_repr1<S, F>(&self, _s: &mut S, _encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        structural_impossibility(any::type_name::<Self>())
    }
}

impl<T, L, R> EncodeRepr1<T> for Product<L, R>
where
    T: ?Sized,
    L: EncodeRepr1<T>,
    R: EncodeRepr1<T>,
{
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        self.0.encode_repr1(s, encode_item)?;
        self.1.encode_repr1(s, encode_item)
    }
}

impl<T, L, R> EncodeRepr1<T> for Sum<L, R>
where
    T: ?Sized,
    L: EncodeRepr1<T>,
    R: EncodeRepr1<T>,
{
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        s.write_u8(*BranchTag::from(self.branch()))?;
        match self {
            Sum::Left(l) => l.encode_repr1(s, encode_item),
            Sum::Right(r) => r.encode_repr1(s, encode_item),
        }
    }
}

impl<'a, T: ?Sized, U: Encode + ?Sized> EncodeRepr1<T> for Field<'a, U> {
    fn encode_repr1<S, F>(&self, s: &mut S, _encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        self.0.encode(s)
    }
}

impl<'a, T: ?Sized> EncodeRepr1<T> for Param<'a, T> {
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        encode_item(self.0, s)
    }
}

impl<'a, T, C> EncodeRepr1<T> for Compose<'a, C>
where
    T: ?Sized,
    C: Generic1<Item = T> + ?Sized,
{
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        self.0.repr1().encode_repr1(s, encode_item)
    }
}

impl<T: ?Sized, N: EncodeRepr1<T>> EncodeRepr1<T> for Named<N> {
    fn encode_repr1<S, F>(&self, s: &mut S, encode_item: &mut F) -> Result<()>
    where
        S: Sink,
        F: FnMut(&T, &mut S) -> Result<()>,
    {
        log::trace!("Visiting {:?} {:?}", self.kind, self.name);
        self.node.encode_repr1(s, encode_item)
    }
}
