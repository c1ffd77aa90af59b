//! Line-oriented text I/O.
//!
//! - [`read_lines_vec`] loads every line of a (possibly compressed) file.
//! - [`write_tsv_vec`] writes `(key, value)` pairs as `key<TAB>value` lines.
//!
//! Reading treats `\n` and `\r\n` as terminators and never skips lines; what
//! counts as a blank or malformed line is left to the caller. Bytes that are
//! not valid UTF-8 become `U+FFFD` in the affected line only.

use crate::io::compression::auto_detect_reader;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a text file into one `String` per line.
///
/// **Compression**: gzip input is detected by extension or magic bytes (when
/// the `compression-gzip` feature is enabled).
///
/// # Errors
/// Fails if the file cannot be opened or a read fails. The error names the
/// file and the 1-based line number.
pub fn read_lines_vec(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    let rdr = BufReader::new(rdr);
    let mut out = Vec::new();
    for (i, raw) in rdr.split(b'\n').enumerate() {
        let mut raw =
            raw.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        out.push(decode_line(raw));
    }
    Ok(out)
}

fn decode_line(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// How a value is rendered inside one TSV cell.
pub trait TsvCell {
    fn write_cell(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

macro_rules! display_cell {
    ($($t:ty),*) => {$(
        impl TsvCell for $t {
            fn write_cell(&self, w: &mut dyn Write) -> std::io::Result<()> {
                write!(w, "{self}")
            }
        }
    )*};
}

display_cell!(i8, i16, i32, i64, u8, u16, u32, u64, usize, String, &str);

// Round-trip form that always keeps a fractional part: 3.0, 3.3333333333333335.
// Infinities use the spelling the rating parser accepts.
macro_rules! float_cell {
    ($($t:ty),*) => {$(
        impl TsvCell for $t {
            fn write_cell(&self, w: &mut dyn Write) -> std::io::Result<()> {
                if self.is_infinite() {
                    let sign = if self.is_sign_negative() { "-" } else { "" };
                    write!(w, "{sign}Infinity")
                } else {
                    write!(w, "{self:?}")
                }
            }
        }
    )*};
}

float_cell!(f32, f64);

/// Write `(key, value)` pairs as `key\tvalue\n`, in slice order.
///
/// The file is created or truncated. Its parent directory must already exist.
/// Nothing is removed if a write fails halfway.
///
/// # Returns
/// The number of lines written.
pub fn write_tsv_vec<K: TsvCell, V: TsvCell>(
    path: impl AsRef<Path>,
    data: &[(K, V)],
) -> Result<usize> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for (i, (k, v)) in data.iter().enumerate() {
        write_row(&mut w, k, v)
            .with_context(|| format!("write line {} to {}", i + 1, path.display()))?;
    }
    w.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(data.len())
}

fn write_row<K: TsvCell, V: TsvCell>(w: &mut dyn Write, k: &K, v: &V) -> std::io::Result<()> {
    k.write_cell(w)?;
    w.write_all(b"\t")?;
    v.write_cell(w)?;
    w.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<K: TsvCell, V: TsvCell>(k: K, v: V) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, &k, &v).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn float_cells_keep_fraction() {
        assert_eq!(row(101, 3.0f64), "101\t3.0\n");
        assert_eq!(row(7, 10.0f64 / 3.0), "7\t3.3333333333333335\n");
        assert_eq!(row(-2, 0.5f64), "-2\t0.5\n");
    }

    #[test]
    fn special_float_cells() {
        assert_eq!(row(1, f64::INFINITY), "1\tInfinity\n");
        assert_eq!(row(2, f64::NEG_INFINITY), "2\t-Infinity\n");
        assert_eq!(row(3, f64::NAN), "3\tNaN\n");
    }

    #[test]
    fn invalid_utf8_is_replaced_per_line() {
        assert_eq!(decode_line(b"1,101,4.0".to_vec()), "1,101,4.0");
        assert_eq!(decode_line(b"\xff,102,3.0".to_vec()), "\u{FFFD},102,3.0");
    }

    #[test]
    fn text_cells() {
        assert_eq!(row("a", 1u64), "a\t1\n");
        assert_eq!(row(String::from("b"), 2.25f32), "b\t2.25\n");
    }
}
