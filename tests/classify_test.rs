//! Variant classification from names, parsed attributes and directory layout.

use assert_matches::assert_matches;
use seedforge::classify::{classify_media, classify_variant, MediaKind, Variant};
use seedforge::compose::compose_name;
use seedforge::scanner::analyze_directory;
use seedforge_common::SeasonDesignator;
use seedforge_parser::parse_name;
use std::fs;
use tempfile::tempdir;

fn classify(name: &str) -> Variant {
    classify_variant(name, &parse_name(name).attributes, None)
}

#[test]
fn test_name_patterns() {
    assert_matches!(classify("Alien.1979.1080p.BluRay-GRP"), Variant::Movie);
    assert_matches!(
        classify("Breaking.Bad.S01E05.720p.HDTV.x264-DEMAND"),
        Variant::Episode {
            season: Some(1),
            episode: Some(5)
        }
    );
    assert_matches!(
        classify("Le.Bureau.des.Legendes.S02.FRENCH.1080p.WEB.H264-NoTag"),
        Variant::SeasonPack {
            season: Some(SeasonDesignator::Number(2)),
            ..
        }
    );
    assert_matches!(
        classify("Kaamelott.Livre.1.COMPLETE.FRENCH.DVDRip.XviD-GRP"),
        Variant::SeasonPack {
            season: Some(SeasonDesignator::Complete),
            ..
        }
    );
    assert_matches!(
        classify("One.Piece.E1071.VOSTFR.1080p.WEB-GRP"),
        Variant::Episode {
            season: None,
            episode: Some(1071)
        }
    );
}

#[test]
fn test_directory_of_episodes_is_a_pack() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("Show.Name.MULTi.1080p.WEB-DL-GRP");
    fs::create_dir(&root).unwrap();
    for n in 1..=4 {
        fs::write(root.join(format!("Show.Name.S03E0{n}.mkv")), b"").unwrap();
    }
    fs::write(root.join("Show.Name.nfo"), b"").unwrap();

    let analysis = analyze_directory(&root).unwrap();
    assert!(analysis.is_series_pack);
    assert_eq!(analysis.detected_season.as_deref(), Some("S03"));
    assert_eq!(analysis.episode_count, 4);

    let name = "Show.Name.MULTi.1080p.WEB-DL-GRP";
    let bag = parse_name(name).attributes;
    let variant = classify_variant(name, &bag, Some(&analysis));
    assert_matches!(
        variant,
        Variant::SeasonPack {
            season: Some(SeasonDesignator::Number(3)),
            episode_count: Some(4)
        }
    );

    let composed = compose_name(&variant, &bag);
    assert_eq!(composed, "Show.Name.S03.MULTI.WEB-DL-GRP");
    assert!(!composed.contains("E0"));
}

#[test]
fn test_multi_season_directory_is_complete() {
    let dir = tempdir().unwrap();
    for season in 1..=2 {
        let sub = dir.path().join(format!("Season {season}"));
        fs::create_dir(&sub).unwrap();
        for n in 1..=2 {
            fs::write(sub.join(format!("Show.S0{season}E0{n}.mkv")), b"").unwrap();
        }
    }

    let analysis = analyze_directory(dir.path()).unwrap();
    let variant = classify_variant("Show", &Default::default(), Some(&analysis));
    assert_eq!(variant.designator().as_deref(), Some("COMPLETE"));
}

#[test]
fn test_single_file_directory_is_not_a_pack() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Movie.2020.mkv"), b"").unwrap();
    let analysis = analyze_directory(dir.path()).unwrap();
    assert!(!analysis.is_series_pack);
    assert_matches!(
        classify_variant("Movie.2020.1080p", &Default::default(), Some(&analysis)),
        Variant::Movie
    );
}

#[test]
fn test_media_kinds() {
    let bag = Default::default();
    assert_matches!(classify_media("Novel.2021.FRENCH.epub", &bag, None), MediaKind::Ebook);
    assert_matches!(classify_media("Some.Game.NSW-GRP", &bag, None), MediaKind::Game);
    assert_matches!(
        classify_media("Film.2021.mkv", &bag, None),
        MediaKind::Video {
            variant: Variant::Movie
        }
    );
}

#[test]
fn test_classification_is_idempotent() {
    for name in [
        "Show.S01.1080p",
        "Show.S01E01.1080p",
        "Film.2019.1080p",
        "Show.Integrale.MULTi",
    ] {
        assert_eq!(classify(name), classify(name), "{name}");
    }
}
