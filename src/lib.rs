/*!
contact2d
=========

**contact2d** computes and maintains 2-dimensional contact manifolds between
pairs of shapes attached to rigid bodies.

Given the world transforms of two bodies, a narrow-phase routine decides
whether their shapes touch and describes the touching region with at most
two contact points. The [`pipeline::ContactSet`] keeps one
[`pipeline::Contact`] per overlapping fixture pair and, step after step,
carries the impulses accumulated by the constraint solver from one manifold
to the next so the solver can be warm-started.

The broad-phase, the constraint solver and body integration are left to the
caller.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;
