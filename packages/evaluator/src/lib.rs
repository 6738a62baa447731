//! # Codeframe Evaluator
//!
//! Turns the snippets of a parsed preview block into a rendered widget: a
//! sandboxed iframe executing the composed snippets, plus a highlighted
//! listing of each original snippet.
//!
//! ## Ordering contract
//!
//! **INVARIANT: listing order equals declaration order.**
//!
//! The collector assigns each fragment a unique, ascending position in
//! document order, and the renderer iterates fragments in that order. The
//! composed surface document hoists style fragments ahead of markup and
//! script fragments (styles must be in effect before content renders) but
//! preserves declaration order within each group.
//!
//! ## Escaping contract
//!
//! **INVARIANT: every escaper in [`escape`] round-trips.**
//!
//! `unescape_*(escape_*(x)) == x` for all `x`. In particular the composed
//! document placed in the iframe's `srcdoc` attribute, after the browser
//! decodes the attribute, is byte-identical to the pre-escape
//! concatenation. An escaping defect here is a correctness bug that cannot
//! be caught at runtime; the invariant is enforced by tests.
//!
//! ## Isolation contract
//!
//! **INVARIANT: the surface executes scripts without same-origin access.**
//!
//! The iframe's sandbox token set is exactly [`renderer::SANDBOX_TOKENS`]:
//! it contains `allow-scripts` and never `allow-same-origin`, so the
//! embedded document and the enclosing page cannot reach each other's DOM
//! in either direction.
//!
//! ## Lifecycle
//!
//! The collecting → rendering state machine is encoded in ownership:
//! [`collector::Collector`] accepts registrations, `finish()` consumes it
//! into a read-only [`collector::CollectedFragments`], and the renderer
//! consumes that. Accumulator state cannot leak across widgets or pages.

pub mod collector;
pub mod escape;
pub mod fragment;
pub mod highlight;
pub mod renderer;

pub use collector::{evaluate_preview, unwrap_source, wrap_source, CollectedFragments, Collector};
pub use fragment::{Fragment, Language};
pub use renderer::{compose_document, compose_fragments, render_preview, RenderOptions};
