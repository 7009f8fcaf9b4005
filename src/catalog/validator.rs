//! Artwork checks for card faces.
//!
//! A face is only usable if the presentation layer can draw it. The engine
//! does not know how artwork is stored, so the check is a trait.

use std::path::{Path, PathBuf};

use crate::cards::CardFace;

/// Decides whether a face has artwork available.
pub trait FaceValidator {
    /// Check a single face.
    fn is_available(&self, face: &CardFace) -> bool;

    /// First face in the list without artwork, if any.
    fn first_missing<'a>(&self, faces: &'a [CardFace]) -> Option<&'a CardFace> {
        faces.iter().find(|face| !self.is_available(face))
    }
}

impl<F> FaceValidator for F
where
    F: Fn(&CardFace) -> bool,
{
    fn is_available(&self, face: &CardFace) -> bool {
        self(face)
    }
}

/// Accepts every face. Useful when artwork is bundled with the faces.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl FaceValidator for AcceptAll {
    fn is_available(&self, _face: &CardFace) -> bool {
        true
    }
}

/// Faces name files inside an artwork directory.
#[derive(Clone, Debug)]
pub struct ArtworkDirectory {
    root: PathBuf,
}

impl ArtworkDirectory {
    /// Look for artwork under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Artwork directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the artwork for a face should be.
    #[must_use]
    pub fn path_for(&self, face: &CardFace) -> PathBuf {
        self.root.join(face.as_str())
    }
}

impl FaceValidator for ArtworkDirectory {
    fn is_available(&self, face: &CardFace) -> bool {
        self.path_for(face).is_file()
    }
}
