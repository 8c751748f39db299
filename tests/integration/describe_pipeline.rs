//! End-to-end describe tests: resolve, read, parse and merge against a real tree

use tago::diagnostics::Severity;
use tago::error::ApiError;
use tago::{ResolverConfig, TagoApi};

use crate::integration::test_utils::Tree;

fn api() -> TagoApi {
    TagoApi::new(ResolverConfig::default())
}

#[test]
fn test_nearest_scope_wins_per_key() {
    let tree = Tree::new();
    tree.file("tago.tago", "x: 1\ngenre: jazz");
    tree.file("sub/tago.tago", "x: 2");
    let leaf = tree.file("sub/leaf.txt", "leaf");

    let description = api().describe(&leaf).unwrap();
    let x = description.mapping.get("x").unwrap();
    assert_eq!(x.value(), "2");
    assert_eq!(x.source(), tree.path("sub/tago.tago"));

    let genre = description.mapping.get("genre").unwrap();
    assert_eq!(genre.value(), "jazz");
    assert_eq!(genre.source(), tree.path("tago.tago"));
}

#[test]
fn test_album_layout() {
    let tree = Tree::new();
    tree.file(
        "music/tago.tago",
        "// collection defaults\nLicense: CC-BY\nNotes: [\n  ripped from vinyl\n\n  second pressing\n]\n",
    );
    tree.file("music/album/tago.tago", "Album: Blue\nArtist: Someone\n");
    tree.file("music/album/03.tago", "Title: Third\r\nartist: Guest\r\n");
    let track = tree.file("music/album/03.flac", "audio");

    let description = api().describe(&track).unwrap();
    let mapping = &description.mapping;
    assert_eq!(mapping.value("title"), Some("Third"));
    assert_eq!(mapping.value("artist"), Some("Guest"));
    assert_eq!(mapping.value("album"), Some("Blue"));
    assert_eq!(mapping.value("license"), Some("CC-BY"));
    assert_eq!(
        mapping.value("notes"),
        Some("ripped from vinyl\n\nsecond pressing")
    );
    assert!(mapping.get("notes").unwrap().is_multiline());
    assert!(description.diagnostics.is_empty());
}

#[test]
fn test_unreadable_file_is_skipped_with_warning() {
    let tree = Tree::new();
    tree.file("tago.tago", "x: root");
    tree.file("leaf.tago", [0xffu8, 0xfe, b'x', b':', b' ', b'1']);
    let leaf = tree.file("leaf.txt", "");

    let description = api().describe(&leaf).unwrap();
    assert_eq!(description.mapping.value("x"), Some("root"));
    assert!(tree.owned(&description.paths).contains(&tree.path("leaf.tago")));

    let warnings: Vec<_> = description.diagnostics.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(warnings[0].source.as_deref(), Some(tree.path("leaf.tago").as_path()));
}

#[test]
fn test_unterminated_block_warns_and_keeps_other_keys() {
    let tree = Tree::new();
    let target = tree.file("x.tago", "a: 1\nb: [\nnever closed\n");

    let description = api().describe(&target).unwrap();
    assert_eq!(description.mapping.value("a"), Some("1"));
    assert!(!description.mapping.contains_key("b"));
    assert_eq!(description.diagnostics.warnings().count(), 1);
}

#[test]
fn test_no_description_files_is_not_an_error() {
    let tree = Tree::new();
    let leaf = tree.file("plain/file.txt", "");

    let description = api().describe(&leaf).unwrap();
    assert!(tree.owned(&description.paths).is_empty());
    let description = description.require_usable().unwrap();
    assert!(description.interrupted.is_none());
}

#[test]
fn test_missing_target_is_fatal() {
    let tree = Tree::new();
    let err = api().describe(&tree.path("missing.txt")).unwrap_err();
    assert!(matches!(err, ApiError::Resolve(_)));
}

#[test]
fn test_custom_extension_and_marker() {
    let tree = Tree::new();
    tree.file("_dir.meta", "scope: root");
    tree.file("song.META", "title: Song");
    tree.file("tago.tago", "ignored: yes");
    let song = tree.file("song.mp3", "");

    let api = TagoApi::new(ResolverConfig {
        extension: "meta".to_string(),
        root_marker: "_dir".to_string(),
        canonicalize: false,
    });
    let description = api.describe(&song).unwrap();
    assert_eq!(description.mapping.value("title"), Some("Song"));
    assert_eq!(description.mapping.value("scope"), Some("root"));
    assert!(!description.mapping.contains_key("ignored"));
}
