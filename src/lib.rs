//! Recursive pad-and-pear circle fractal.
//!
//! The crate is split in two: [`array`] provides [`DynamicArray`](array::DynamicArray), the
//! growable container everything is stored in, and [`generator`] builds the fractal into it.
//! A drawing is a binary tree of circles. Inner circles are *pads*, leaves are *pears*;
//! each pad carries two children scaled by the child-to-parent ratio.
//!
//! # Basic usage
//! ```
//! # use {
//! #   fractal_pads::{
//! #     generator::{FractalGenerator, Subject},
//! #     geometry::Color
//! #   },
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! let mut generator = FractalGenerator::new();
//! generator.set_parameters(3, 0.5, Color::PAD, Color::PEAR)?;
//!
//! // pre-order: root, the whole +45° subtree, then the -45° subtree
//! let shapes = generator.shapes();
//! assert_eq!(shapes.len(), 7);
//! for shape in &shapes {
//!   println!("{}", shape);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Consumers that want to follow parameter changes implement
//! [`Listener`](generator::Listener) and [`attach`](generator::Subject::attach) themselves;
//! every accepted [`set_parameters`](generator::Subject::set_parameters) call invokes them in
//! attachment order, and each pulls the fresh list through
//! [`shapes`](generator::Subject::shapes).

mod util;
pub mod error;
pub mod array;
pub mod geometry;
pub mod generator;
