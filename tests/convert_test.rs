use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn write_wacz(path: &Path, manifest: &str, entries: &[(&str, &[u8])]) {
    let file = fs::File::create(path).expect("create wacz");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer
        .start_file("datapackage.json", options)
        .expect("start manifest");
    writer
        .write_all(manifest.as_bytes())
        .expect("write manifest");

    for (name, bytes) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(bytes).expect("write entry");
    }

    writer.finish().expect("finish wacz");
}

#[test]
fn convert_builds_the_harvest_layout() {
    let tmp = tempdir().expect("tempdir");
    let wacz_path = tmp.path().join("crawl-001.wacz");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&out_dir).expect("mkdir out");

    write_wacz(
        &wacz_path,
        r#"{"created": "2024-03-15T10:00:00Z", "title": "Example Site"}"#,
        &[
            ("archive/data.warc.gz", b"main-warc"),
            ("archive/extra-0001.warc.gz", b"extra-warc"),
            ("indexes/index.cdx", b"ignored index"),
        ],
    );

    assert_cmd::cargo::cargo_bin_cmd!("wacz-harvest")
        .arg(&wacz_path)
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "harvest_name=Linkra-2024-03-crawl-001",
        ));

    let harvest = out_dir.join("Linkra-2024-03-crawl-001");
    assert!(harvest.is_dir());
    assert!(harvest.join("logs/cdx").is_dir());
    assert_eq!(
        fs::read_dir(harvest.join("logs/cdx")).expect("read cdx").count(),
        0
    );

    // The canonical warc must only exist under its harvest-unique name.
    assert!(!harvest.join("data.warc.gz").exists());
    assert_eq!(
        fs::read(harvest.join("Linkra-2024-03-crawl-001.warc.gz")).expect("read warc"),
        b"main-warc"
    );
    assert_eq!(
        fs::read(harvest.join("extra-0001.warc.gz")).expect("read extra warc"),
        b"extra-warc"
    );
    assert!(!harvest.join("index.cdx").exists());

    let info = fs::read_to_string(harvest.join("logs/crawl/info.txt")).expect("read info");
    assert!(info.contains("original_file: crawl-001.wacz\n"));
    assert!(info.contains("harvest_name: Linkra-2024-03-crawl-001\n"));
    assert!(info.contains("wacz_created: 2024-03-15T10:00:00Z\n"));
    assert!(info.contains("wacz_title: Example Site\n"));
    assert!(!info.contains("wacz_software"));
    assert!(!info.contains("wacz_main_page_url"));
    assert!(!info.contains("wacz_main_page_date"));
}

#[test]
fn harvest_prefix_is_overridable_from_the_environment() {
    let tmp = tempdir().expect("tempdir");
    let wacz_path = tmp.path().join("crawl-002.wacz");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&out_dir).expect("mkdir out");

    write_wacz(
        &wacz_path,
        r#"{"created": "2021-11-02T08:30:00Z"}"#,
        &[("archive/data.warc.gz", b"warc-bytes")],
    );

    assert_cmd::cargo::cargo_bin_cmd!("wacz-harvest")
        .env("WACZ_HARVEST_PREFIX", "Webarchiv")
        .arg(&wacz_path)
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("Webarchiv-2021-11-crawl-002").is_dir());
    assert!(
        out_dir
            .join("Webarchiv-2021-11-crawl-002/Webarchiv-2021-11-crawl-002.warc.gz")
            .is_file()
    );
}
