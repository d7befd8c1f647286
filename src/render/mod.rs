//! HANDOFF.md Rendering
//!
//! The serializer half of the persisted contract: everything this module
//! produces must parse back losslessly through `parser::parse_handoff`.

mod handoff;

pub use handoff::render_handoff;
