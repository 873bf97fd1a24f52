use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

fn make_source_tree(work: &Path, name: &str, files: &[&str]) {
    let dir = work.join(name);
    fs::create_dir(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), "").unwrap();
    }
}

#[test]
fn test_generate_from_directory() {
    let work = TempDir::new().unwrap();
    make_source_tree(
        work.path(),
        "hello-1.0",
        &["README", "COPYING", "configure", "main.c", "install-sh"],
    );
    fs::write(work.path().join("fix-hello.patch"), "").unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("hello-1.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let script_path = work.path().join("PlamoBuild.hello-1.0");
    let script = fs::read_to_string(&script_path).unwrap();

    assert!(script.starts_with("#!/bin/sh\n"));
    assert!(script.contains("pkgbase='hello'"));
    assert!(script.contains("vers='1.0'"));
    assert!(script.contains("DOCS='COPYING README'"));
    assert!(script.contains("patchfiles='fix-hello.patch'"));
    // configure marker present, so the autotools body is emitted.
    assert!(script.contains("$S/configure --prefix=/usr"));

    let mode = fs::metadata(&script_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o755, 0o755);
}

#[test]
fn test_forced_method_and_prefix() {
    let work = TempDir::new().unwrap();
    make_source_tree(work.path(), "kdelibs-5.0", &["CMakeLists.txt", "configure"]);

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .args(["--method", "cmake", "--prefix", "/opt/kde", "kdelibs-5.0"])
        .assert()
        .success();

    let script = fs::read_to_string(work.path().join("PlamoBuild.kdelibs-5.0")).unwrap();
    assert!(script.contains("cmake -DCMAKE_INSTALL_PREFIX:PATH=/opt/kde"));
    assert!(script.contains("OPT_CONFIG=''"));
}

#[test]
fn test_no_marker_falls_back_to_configure() {
    let work = TempDir::new().unwrap();
    make_source_tree(work.path(), "plain-0.1", &["README", "main.c"]);

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("plain-0.1")
        .assert()
        .success()
        .stderr(predicate::str::contains("configure method"));

    let script = fs::read_to_string(work.path().join("PlamoBuild.plain-0.1")).unwrap();
    assert!(script.contains("$S/configure --prefix=/usr"));
}

#[test]
fn test_directory_without_version_fails() {
    let work = TempDir::new().unwrap();
    make_source_tree(work.path(), "noversionhere", &["README"]);

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("noversionhere")
        .assert()
        .failure()
        .stderr(predicate::str::contains("separator"));

    assert!(!work.path().join("PlamoBuild.noversionhere").exists());
}

#[test]
fn test_generate_from_tar_gz_archive() {
    let staging = TempDir::new().unwrap();
    make_source_tree(
        staging.path(),
        "greet-2.1",
        &["README", "LICENSE", "setup.py"],
    );

    let work = TempDir::new().unwrap();
    let archive_path = work.path().join("greet-2.1.tar.gz");
    let encoder = GzEncoder::new(File::create(&archive_path).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder
        .append_dir_all("greet-2.1", staging.path().join("greet-2.1"))
        .unwrap();
    builder.into_inner().unwrap().finish().unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("greet-2.1.tar.gz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpacking"));

    // The archive was unpacked next to the script.
    assert!(work.path().join("greet-2.1").join("setup.py").exists());

    let script = fs::read_to_string(work.path().join("PlamoBuild.greet-2.1")).unwrap();
    assert!(script.contains("pkgbase='greet'"));
    assert!(script.contains("python setup.py config"));
    assert!(script.contains("python setup.py install --root $P"));
}

#[test]
fn test_generate_from_tar_bz2_archive() {
    let staging = TempDir::new().unwrap();
    make_source_tree(staging.path(), "bzdemo-0.3", &["README", "configure"]);

    let work = TempDir::new().unwrap();
    let archive_path = work.path().join("bzdemo-0.3.tar.bz2");
    let encoder = BzEncoder::new(
        File::create(&archive_path).unwrap(),
        bzip2::Compression::default(),
    );
    let mut builder = tar::Builder::new(encoder);
    builder
        .append_dir_all("bzdemo-0.3", staging.path().join("bzdemo-0.3"))
        .unwrap();
    builder.into_inner().unwrap().finish().unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("bzdemo-0.3.tar.bz2")
        .assert()
        .success();

    assert!(work.path().join("bzdemo-0.3").join("configure").exists());

    let script = fs::read_to_string(work.path().join("PlamoBuild.bzdemo-0.3")).unwrap();
    assert!(script.contains("pkgbase='bzdemo'"));
    assert!(script.contains("$S/configure --prefix=/usr"));
}

#[test]
fn test_generate_from_plain_tar_archive() {
    let staging = TempDir::new().unwrap();
    make_source_tree(staging.path(), "rawdemo-0.9", &["NEWS", "Makefile.PL"]);

    let work = TempDir::new().unwrap();
    let archive_path = work.path().join("rawdemo-0.9.tar");
    let mut builder = tar::Builder::new(File::create(&archive_path).unwrap());
    builder
        .append_dir_all("rawdemo-0.9", staging.path().join("rawdemo-0.9"))
        .unwrap();
    builder.finish().unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("rawdemo-0.9.tar")
        .assert()
        .success();

    assert!(work.path().join("rawdemo-0.9").join("Makefile.PL").exists());

    let script = fs::read_to_string(work.path().join("PlamoBuild.rawdemo-0.9")).unwrap();
    assert!(script.contains("perl Makefile.PL"));
}

#[test]
fn test_existing_script_survives_unanswered_overwrite_prompt() {
    let work = TempDir::new().unwrap();
    make_source_tree(work.path(), "hello-1.0", &["README", "configure"]);
    let script_path = work.path().join("PlamoBuild.hello-1.0");
    fs::write(&script_path, "# hand-edited, keep me\n").unwrap();

    // stdin is a pipe, not a terminal, so the overwrite confirmation
    // cannot be answered; the run must fail without touching the file.
    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("hello-1.0")
        .write_stdin("")
        .assert()
        .failure();

    assert_eq!(
        fs::read_to_string(&script_path).unwrap(),
        "# hand-edited, keep me\n"
    );
}

#[test]
fn test_keyword_overrides_from_settings_file() {
    let work = TempDir::new().unwrap();
    make_source_tree(work.path(), "manual-3.0", &["MANUAL.pdf", "README", "configure"]);
    fs::write(
        work.path().join("keywords.toml"),
        r#"doc_keywords = ["MANUAL"]"#,
    )
    .unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .args(["--config", "keywords.toml", "manual-3.0"])
        .assert()
        .success();

    let script = fs::read_to_string(work.path().join("PlamoBuild.manual-3.0")).unwrap();
    assert!(script.contains("DOCS='MANUAL.pdf'"));
}

#[test]
fn test_unsupported_input_fails() {
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("sources.zip"), "").unwrap();

    Command::cargo_bin("mkplamobuild")
        .unwrap()
        .current_dir(work.path())
        .arg("sources.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither a source directory"));
}
