//! Lists written by `hash` verify with `check`, in both line layouts.

use std::path::PathBuf;

use digestkit_cli::check::{check_list, CheckArgs};
use digestkit_cli::config::CliConfig;
use digestkit_cli::hash::{run_hash_with, HashArgs};
use digestkit_crypto::DigestAlgorithm;

fn write_files(dir: &std::path::Path) -> Vec<PathBuf> {
    let files = [
        ("empty.bin", Vec::new()),
        ("abc.txt", b"abc".to_vec()),
        ("large.bin", vec![0x5a; 200_000]),
    ];
    files
        .into_iter()
        .map(|(name, contents)| {
            let path = dir.join(name);
            std::fs::write(&path, contents).unwrap();
            path
        })
        .collect()
}

fn hash_list(files: Vec<PathBuf>, algorithm: DigestAlgorithm, tag: bool) -> String {
    let args = HashArgs {
        files,
        algorithm: Some(algorithm),
        tag,
        ..HashArgs::default()
    };
    let mut out = Vec::new();
    let code = run_hash_with(&args, &CliConfig::default(), &mut &b""[..], &mut out).unwrap();
    assert_eq!(code, 0);
    String::from_utf8(out).unwrap()
}

fn check_args() -> CheckArgs {
    CheckArgs {
        list: PathBuf::from("SUMS"),
        algorithm: None,
        quiet: true,
        strict: true,
    }
}

#[test]
fn test_tagged_lists_verify_for_every_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_files(dir.path());

    for algorithm in DigestAlgorithm::ALL {
        let list = hash_list(files.clone(), algorithm, true);
        let mut out = Vec::new();
        let summary =
            check_list(&list, dir.path(), &check_args(), &CliConfig::default(), &mut out).unwrap();
        assert_eq!(summary.ok, files.len(), "{algorithm}");
        assert_eq!(summary.exit_code(true), 0, "{algorithm}");
        assert!(out.is_empty());
    }
}

#[test]
fn test_untagged_list_verifies_with_explicit_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_files(dir.path());
    let list = hash_list(files.clone(), DigestAlgorithm::Sha3_384, false);

    let mut args = check_args();
    args.algorithm = Some(DigestAlgorithm::Sha3_384);
    let mut out = Vec::new();
    let summary = check_list(&list, dir.path(), &args, &CliConfig::default(), &mut out).unwrap();
    assert_eq!(summary.ok, files.len());
}

#[test]
fn test_tampered_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_files(dir.path());
    let list = hash_list(files.clone(), DigestAlgorithm::Sha256, false);

    std::fs::write(&files[1], b"abd").unwrap();

    let mut out = Vec::new();
    let summary =
        check_list(&list, dir.path(), &check_args(), &CliConfig::default(), &mut out).unwrap();
    assert_eq!(summary.ok, files.len() - 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}: FAILED\n", files[1].display())
    );
}
