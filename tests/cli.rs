use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn touch(root: &std::path::Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, rel).expect("write");
}

#[test]
fn copies_sidecars_and_prints_exiftool_command() {
    let tmp = tempdir().expect("tempdir");
    touch(tmp.path(), "2019/IMG_0001(1).heic");
    touch(tmp.path(), "2019/IMG_0001.heic(1).json");
    touch(tmp.path(), "2019/clip.mov");
    touch(tmp.path(), "2019/clip.jpg.json");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] ("))
        .stderr(predicate::str::contains("found 2 media files"))
        .stderr(predicate::str::contains("now you can run: exiftool -r -d %s"))
        .stderr(predicate::str::contains("[WARNING]").not());

    assert!(tmp.path().join("2019/IMG_0001(1).heic.json").is_file());
    assert!(tmp.path().join("2019/clip.mov.json").is_file());
}

#[test]
fn unmatched_media_is_a_warning_not_a_failure() {
    let tmp = tempdir().expect("tempdir");
    touch(tmp.path(), "lonely.png");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARNING] ("))
        .stderr(predicate::str::contains("Couldn't find corresponding JSON of"))
        .stderr(predicate::str::contains("lonely.png"));

    assert!(!tmp.path().join("lonely.png.json").exists());
}

#[test]
fn verbose_logs_each_copy() {
    let tmp = tempdir().expect("tempdir");
    touch(tmp.path(), "clip.MOV");
    touch(tmp.path(), "clip.HEIC.json");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg("--verbose")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG] ("))
        .stderr(predicate::str::contains("copying"));
}

#[test]
fn missing_folder_fails() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg(tmp.path().join("absent"))
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] ("))
        .stderr(predicate::str::contains("Not a directory: "))
        .stderr(predicate::str::contains("absent"));
}

#[test]
fn config_file_changes_name_limit() {
    let tmp = tempdir().expect("tempdir");
    let archive = tmp.path().join("archive");
    touch(&archive, "abcdefghij.jpg");
    touch(&archive, "abcdefgh.json");
    let config = tmp.path().join("matcher.toml");
    fs::write(&config, "[naming]\nmax_name_len = 8\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg("--config")
        .arg(&config)
        .arg(&archive)
        .assert()
        .success();

    assert!(archive.join("abcdefghij.jpg.json").is_file());
}

#[test]
fn invalid_config_fails() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("matcher.toml");
    fs::write(&config, "[naming]\nmax_name_len = 0\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("sidecar-match")
        .arg("--config")
        .arg(&config)
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Config validation error: naming.max_name_len must be greater than 0",
        ));
}
