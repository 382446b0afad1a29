//! Interactive code exercises.
//!
//! An exercise is identified by an `id` and backed by three fragments of a
//! code catalog: the starting source, the reference solution and a hidden
//! test. This crate resolves those fragments, assembles submissions into
//! runnable test programs and tracks the reveal/reset state of an exercise
//! block. Rendering lives in `kata-zoon`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod exercise;
pub mod loader;
pub mod resolver;
pub mod state;
pub mod template;

pub use catalog::{CatalogQuery, CodeFragment};
pub use config::{CellSettings, ExerciseConfig, Identifiers, SiteMetadata};
pub use error::ExerciseError;
pub use exercise::{CellControls, Exercise};
pub use loader::{Deferred, ExecutionContext};
pub use resolver::{ResolvedFiles, resolve};
pub use state::{ExerciseAction, ExerciseState};
pub use template::{TestTemplate, assemble, escape_quotes};
