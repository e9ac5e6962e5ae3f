//! A tag extractor for Verilog (IEEE 1364) and SystemVerilog (IEEE 1800).
//!
//! The scanner makes a single forward pass over each source file and emits
//! a stream of tag records describing the named entities it recognizes:
//! modules, classes, functions, ports, nets, parameters, typedefs, and the
//! rest of the curated kind set in [kind::Kind].  It tokenizes a superset
//! of the languages, keeps a nested scope stack, and steps safely over
//! everything it does not parse (expressions, behavioral code, macros,
//! timing controls) without ever building an AST.
//!
//! Entry point: [scan::scan_chunk], fed from a
//! [vtags_basics::source::SourceManager] chunk and any [tag::TagSink].

pub mod kind;
pub mod lang;
pub mod reader;
pub mod scan;
pub mod tag;
pub mod token;
