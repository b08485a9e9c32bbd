//! # Polyforge Core Library
//!
//! A library for assembling three-dimensional atomic/bead models of linear
//! polymers, polypeptides, and polymer-peptide conjugates from a catalog of
//! reusable monomer templates, and for writing the result as a fixed-column
//! PDB structure file.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Monomer`,
//!   `MonomerCatalog`, `Sequence`, `Structure`), geometry utilities, and I/O
//!   for the monomer catalog, the sequence specification, and the output
//!   structure file.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer implements the chain
//!   assembly process: the self-avoiding random-walk search, per-monomer
//!   placement with global renumbering, the per-attempt generation state, and
//!   bond recording.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It drives the engine across a whole sequence, restarts failed attempts
//!   under a bounded cycle budget, and returns the finished structure ready
//!   for serialization.

pub mod core;
pub mod engine;
pub mod workflows;
