//! CLI domain: parse, route, and presentation only.
//! No tree or snapshot logic; the route dispatches to the domain services.

mod parse;
mod presentation;
mod route;

pub use parse::Cli;
pub use presentation::{format_capture_report, format_compare_report};
pub use route::RunContext;
