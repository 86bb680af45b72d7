//! Data side of the presentation shell.
//!
//! The shell owns navigation and widgets; this module only names the pages,
//! describes the ranges its inputs accept, and produces the plain data each
//! page displays. Nothing here draws.

pub mod inputs;
pub mod page;
