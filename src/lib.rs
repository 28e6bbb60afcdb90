//! In-memory to-do list state with debounced search.
//!
//! [`ops::TaskStore`] owns the tasks and reports changes through a
//! [`ops::PresentationPort`]; the `tl` binary wires it to a console.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
