//! Integration tests for description file resolution order

use std::path::PathBuf;
use tago::error::ResolveError;
use tago::resolve::{resolve, PathResolver, ResolverConfig, TargetKind};

use crate::integration::test_utils::Tree;

/// root/tago.tago and root/sub/tago.tago both apply to root/sub/leaf.txt, nearest first
#[test]
fn test_nested_scope_roots_nearest_first() {
    let tree = Tree::new();
    tree.file("tago.tago", "x: 1");
    tree.file("sub/tago.tago", "x: 2");
    let leaf = tree.file("sub/leaf.txt", "leaf");

    let resolution = resolve(&leaf).unwrap();
    assert_eq!(
        tree.owned(&resolution.paths),
        vec![tree.path("sub/tago.tago"), tree.path("tago.tago")]
    );
}

/// Full precedence chain: named, local root, then every ancestor root
#[test]
fn test_full_precedence_chain() {
    let tree = Tree::new();
    tree.file("tago.tago", "");
    tree.file("a/tago.tago", "");
    tree.file("a/b/c/tago.tago", "");
    tree.file("a/b/c/track.tago", "");
    let track = tree.file("a/b/c/track.flac", "flac");

    let resolution = resolve(&track).unwrap();
    assert!(resolution.is_complete());
    assert_eq!(
        tree.owned(&resolution.paths),
        vec![
            tree.path("a/b/c/track.tago"),
            tree.path("a/b/c/tago.tago"),
            tree.path("a/tago.tago"),
            tree.path("tago.tago"),
        ]
    );
}

#[test]
fn test_description_file_target_resolves_to_itself_first() {
    let tree = Tree::new();
    tree.file("tago.tago", "x: root");
    let target = tree.file("sub/notes.tago", "x: self");

    let resolution = resolve(&target).unwrap();
    assert!(!resolution.paths.is_empty());
    assert_eq!(resolution.paths[0], target);
    assert_eq!(
        tree.owned(&resolution.paths),
        vec![target.clone(), tree.path("tago.tago")]
    );
}

#[test]
fn test_directory_target() {
    let tree = Tree::new();
    tree.file("tago.tago", "");
    tree.file("photos/tago.tago", "");
    tree.file("photos.tago", "");
    let photos = tree.dir("photos");

    let resolution = resolve(&photos).unwrap();
    assert_eq!(resolution.kind, TargetKind::Directory);
    assert_eq!(
        tree.owned(&resolution.paths),
        vec![tree.path("photos/tago.tago"), tree.path("tago.tago")]
    );
}

#[test]
fn test_trailing_separator_on_directory_target() {
    let tree = Tree::new();
    tree.file("photos/tago.tago", "");
    let mut with_slash = tree.dir("photos").into_os_string();
    with_slash.push("/");

    let resolution = resolve(&PathBuf::from(with_slash)).unwrap();
    assert_eq!(resolution.target, tree.path("photos"));
    assert_eq!(
        tree.owned(&resolution.paths),
        vec![tree.path("photos/tago.tago")]
    );
}

#[test]
fn test_gap_levels_do_not_stop_the_walk() {
    let tree = Tree::new();
    tree.file("tago.tago", "");
    let leaf = tree.file("one/two/three/four/leaf.txt", "");

    let resolution = resolve(&leaf).unwrap();
    assert_eq!(tree.owned(&resolution.paths), vec![tree.path("tago.tago")]);
}

#[test]
fn test_missing_target_returns_not_found() {
    let tree = Tree::new();
    match resolve(&tree.path("does/not/exist.txt")) {
        Err(ResolveError::NotFound(path)) => {
            assert_eq!(path, tree.path("does/not/exist.txt"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_socket_target_is_invalid() {
    use std::os::unix::net::UnixListener;

    let tree = Tree::new();
    let socket = tree.path("sock");
    let _listener = UnixListener::bind(&socket).unwrap();

    let err = resolve(&socket).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidTarget(_)));
}

#[cfg(unix)]
#[test]
fn test_symlinked_target_scope_depends_on_canonicalize() {
    let tree = Tree::new();
    tree.file("real/tago.tago", "");
    let real = tree.file("real/song.mp3", "");
    tree.dir("links");
    tree.file("links/tago.tago", "");
    let link = tree.path("links/song.mp3");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let lexical = resolve(&link).unwrap();
    assert_eq!(lexical.target, link);
    assert_eq!(
        tree.owned(&lexical.paths),
        vec![tree.path("links/tago.tago")]
    );

    let canonical = PathResolver::new(ResolverConfig {
        canonicalize: true,
        ..ResolverConfig::default()
    })
    .resolve(&link)
    .unwrap();
    assert_eq!(canonical.target, real);
    assert_eq!(
        tree.owned(&canonical.paths),
        vec![tree.path("real/tago.tago")]
    );
}
