//! Configuration catalog tests against real directories.

use std::fs;
use std::path::Path;

use memory_match::cards::{CardFace, DeckBuilder};
use memory_match::catalog::{AcceptAll, ArtworkDirectory, FaceCatalog};
use memory_match::core::{ConfigError, ConfigKey, GameRng, PairCount};
use proptest::prelude::*;

fn write_config(dir: &Path, key: &ConfigKey, faces: &[&str]) {
    fs::write(dir.join(key.config_file_name()), faces.join("\n")).unwrap();
}

fn names(faces: &[CardFace]) -> Vec<&str> {
    faces.iter().map(CardFace::as_str).collect()
}

#[test]
fn test_load_requested_config() {
    let dir = tempfile::tempdir().unwrap();
    let key = ConfigKey::new("winston", PairCount::Four);
    write_config(dir.path(), &key, &["a.gif", "b.gif", "c.gif", "d.gif", "e.gif"]);

    let loaded = FaceCatalog::new(dir.path()).load(&key, &AcceptAll).unwrap();

    assert_eq!(loaded.key, key);
    assert!(!loaded.fell_back);
    assert_eq!(names(&loaded.faces), ["a.gif", "b.gif", "c.gif", "d.gif", "e.gif"]);
}

#[test]
fn test_missing_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &ConfigKey::default_for(PairCount::Four), &["1", "2", "3", "4"]);

    let loaded = FaceCatalog::new(dir.path())
        .load(&ConfigKey::new("winston", PairCount::Four), &AcceptAll)
        .unwrap();

    assert!(loaded.fell_back);
    assert_eq!(loaded.key, ConfigKey::default_for(PairCount::Four));
}

#[test]
fn test_missing_artwork_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let art = dir.path().join("art");
    fs::create_dir(&art).unwrap();
    for face in ["1", "2", "3", "4", "5"] {
        fs::write(art.join(face), b"gif").unwrap();
    }

    let winston = ConfigKey::new("winston", PairCount::Five);
    write_config(dir.path(), &winston, &["1", "2", "3", "4", "missing"]);
    write_config(dir.path(), &ConfigKey::default_for(PairCount::Five), &["1", "2", "3", "4", "5"]);

    let catalog = FaceCatalog::new(dir.path());
    let artwork = ArtworkDirectory::new(&art);

    assert!(matches!(
        catalog.load_exact(&winston, &artwork),
        Err(ConfigError::MissingArtwork(face)) if face == "missing"
    ));

    let loaded = catalog.load(&winston, &artwork).unwrap();
    assert!(loaded.fell_back);
    assert_eq!(names(&loaded.faces), ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_too_few_faces() {
    let dir = tempfile::tempdir().unwrap();
    let key = ConfigKey::default_for(PairCount::Six);
    write_config(dir.path(), &key, &["a", "b", "a", "c", "d", "e"]);

    assert!(matches!(
        FaceCatalog::new(dir.path()).load_exact(&key, &AcceptAll),
        Err(ConfigError::InsufficientFaces { required: 6, available: 5 })
    ));
}

#[test]
fn test_no_usable_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = FaceCatalog::new(dir.path());

    assert!(matches!(
        catalog.load(&ConfigKey::new("winston", PairCount::Four), &AcceptAll),
        Err(ConfigError::NoUsableConfiguration(_))
    ));
    assert!(matches!(
        catalog.load(&ConfigKey::default_for(PairCount::Four), &AcceptAll),
        Err(ConfigError::NoUsableConfiguration(_))
    ));
}

#[test]
fn test_closure_validator() {
    let dir = tempfile::tempdir().unwrap();
    let key = ConfigKey::default_for(PairCount::Four);
    write_config(dir.path(), &key, &["a.gif", "b.gif", "c.png", "d.gif"]);

    let gif_only = |face: &CardFace| face.as_str().ends_with(".gif");
    assert!(FaceCatalog::new(dir.path()).load(&key, &gif_only).is_err());
}

#[test]
fn test_available_lists_sizes_separately() {
    let dir = tempfile::tempdir().unwrap();
    let faces = ["a", "b", "c", "d", "e", "f"];
    write_config(dir.path(), &ConfigKey::new("winston", PairCount::Four), &faces);
    write_config(dir.path(), &ConfigKey::new("card", PairCount::Four), &faces);
    write_config(dir.path(), &ConfigKey::new("animals", PairCount::Six), &faces);
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let catalog = FaceCatalog::new(dir.path());
    assert_eq!(catalog.available(PairCount::Four).unwrap(), ["card", "winston"]);
    assert_eq!(catalog.available(PairCount::Six).unwrap(), ["animals"]);
    assert!(catalog.available(PairCount::Five).unwrap().is_empty());
}

proptest! {
    /// Every loaded configuration deals a valid deck.
    #[test]
    fn prop_loaded_faces_deal(
        extra in prop::collection::vec("[a-z]{1,8}\\.gif", 0..6),
        seed in any::<u64>(),
        pairs in prop::sample::select(PairCount::ALL.to_vec()),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let key = ConfigKey::default_for(pairs);
        let mut faces: Vec<String> = (0..pairs.pairs()).map(|i| format!("base{i}.gif")).collect();
        faces.extend(extra);
        let refs: Vec<&str> = faces.iter().map(String::as_str).collect();
        write_config(dir.path(), &key, &refs);

        let loaded = FaceCatalog::new(dir.path()).load(&key, &AcceptAll).unwrap();
        let deck = DeckBuilder::new(pairs.pairs())
            .build(&loaded.faces, &mut GameRng::new(seed))
            .unwrap();

        prop_assert_eq!(deck.len(), pairs.card_count());
        prop_assert!(deck.face_counts().values().all(|&n| n == 2));
        let mut ids: Vec<_> = deck.iter().map(|card| card.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), deck.len());
    }
}
