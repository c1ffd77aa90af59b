use anyhow::Result;
use ratingbeam::io::text::{read_lines_vec, write_tsv_vec};
use ratingbeam::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn read_lines_handles_crlf_and_missing_final_newline() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("in.csv");
    fs::write(&path, "a,1,2\r\nb,3,4\n\nc,5,6")?;

    let lines = read_lines_vec(&path)?;
    assert_eq!(lines, vec!["a,1,2", "b,3,4", "", "c,5,6"]);
    Ok(())
}

#[test]
fn read_lines_missing_file_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let err = read_lines_vec(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}

#[test]
fn read_lines_replaces_invalid_utf8_in_that_line_only() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bin.csv");
    fs::write(&path, b"1,101,4.0\n\xff\xfe,102,3.0\r\n2,103,1.5\n")?;
    assert_eq!(
        read_lines_vec(&path)?,
        vec!["1,101,4.0", "\u{FFFD}\u{FFFD},102,3.0", "2,103,1.5"]
    );
    Ok(())
}

#[cfg(feature = "compression-gzip")]
#[test]
fn read_lines_from_gzip() -> Result<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let dir = tempdir()?;
    let path = dir.path().join("ratings.csv.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path)?, Compression::default());
    enc.write_all(b"1,101,4.0\n2,102,3.0\n")?;
    enc.finish()?;

    assert_eq!(read_lines_vec(&path)?, vec!["1,101,4.0", "2,102,3.0"]);
    Ok(())
}

#[test]
fn write_tsv_missing_parent_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested/deeper/out.txt");

    let err = write_tsv_vec(&path, &[(101, 3.0f64)]).unwrap_err();
    assert!(format!("{err:#}").contains("out.txt"));
    assert!(!dir.path().join("nested").exists());
    Ok(())
}

#[test]
fn write_tsv_truncates_existing_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.txt");

    let n = write_tsv_vec(&path, &[(101, 3.0f64), (102, 2.5)])?;
    assert_eq!(n, 2);
    assert_eq!(fs::read_to_string(&path)?, "101\t3.0\n102\t2.5\n");

    write_tsv_vec(&path, &[(7, 1.0f64)])?;
    assert_eq!(fs::read_to_string(&path)?, "7\t1.0\n");
    Ok(())
}

#[test]
fn write_tsv_empty_creates_empty_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.txt");
    assert_eq!(write_tsv_vec::<i32, f64>(&path, &[])?, 0);
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path)?, "");
    Ok(())
}

#[test]
fn pcollection_write_tsv_sorted() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.tsv");
    let p = Pipeline::default();

    let n = from_vec(&p, vec![(3u64, 0.5f64), (1, 1.5), (2, 2.0)]).write_tsv_sorted(&path)?;
    assert_eq!(n, 3);
    assert_eq!(fs::read_to_string(&path)?, "1\t1.5\n2\t2.0\n3\t0.5\n");
    Ok(())
}
