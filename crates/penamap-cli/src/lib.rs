//! penamap-cli
//! ===========
//!
//! Command-line interface for the `penamap-core` place store.
//!
//! This crate primarily provides a binary (`penamap`). The library target
//! only holds the logging setup so it can be shared with tests.
//!
//! ```text
//! penamap stats
//! penamap search peña
//! penamap classify "Parada Bus Centro"
//! penamap show "Bar Pepe"
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
