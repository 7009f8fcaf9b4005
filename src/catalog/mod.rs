//! Face configurations and artwork validation.
//!
//! The engine needs an ordered face list before it can deal. This module
//! reads those lists from configuration files and checks each face against
//! the available artwork, falling back to the default configuration the way
//! the game always has.

pub mod source;
pub mod validator;

pub use source::{parse_faces, FaceCatalog, LoadedConfig};
pub use validator::{AcceptAll, ArtworkDirectory, FaceValidator};
