#![cfg(feature = "io-jsonl")]

use csvdoc::io::jsonl::to_jsonl_string;
use csvdoc::{Converter, Document, Value, read_jsonl, write_jsonl};
use std::fs;

fn sample_docs() -> anyhow::Result<Vec<Document>> {
    let out = Converter::new("name,score,active,note\nalice,9.5,true,\nbob,7,FALSE,late\n").parse()?;
    Ok(out.documents)
}

#[test]
fn jsonl_string_has_one_line_per_document() -> anyhow::Result<()> {
    let text = to_jsonl_string(&sample_docs()?)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        r#"{"active":true,"name":"alice","note":null,"score":9.5}"#
    );
    assert!(text.ends_with('\n'));
    Ok(())
}

#[test]
fn write_then_read_back() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("nested").join("out.jsonl");
    let docs = sample_docs()?;

    let n = write_jsonl(&path, &docs)?;
    assert_eq!(n, 2);
    assert_eq!(read_jsonl(&path)?, docs);
    Ok(())
}

#[test]
fn read_skips_blank_lines_and_reports_bad_ones() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("in.jsonl");
    fs::write(&path, "{\"a\":1}\n\n  \n{\"a\":\"x\"}\n")?;
    let docs = read_jsonl(&path)?;
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["a"], Value::from("x"));

    fs::write(&path, "{\"a\":1}\nnot json\n")?;
    let err = read_jsonl(&path).unwrap_err();
    assert!(format!("{err:?}").contains("parse JSONL line 2"));
    Ok(())
}

#[cfg(feature = "compression-gzip")]
#[test]
fn gz_output_round_trips() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("out.jsonl.gz");
    let docs = sample_docs()?;

    write_jsonl(&path, &docs)?;
    assert!(fs::read(&path)?.starts_with(&[0x1f, 0x8b]));
    assert_eq!(read_jsonl(&path)?, docs);
    Ok(())
}

#[cfg(feature = "parallel-io")]
mod parallel {
    use csvdoc::{Converter, read_jsonl, write_jsonl, write_jsonl_par};
    use std::fs;

    fn many_rows(n: usize) -> String {
        let mut text = String::from("id,label\n");
        for i in 0..n {
            text.push_str(&format!("{i},row{i}\n"));
        }
        text
    }

    #[test]
    fn par_writer_matches_sequential_output() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let docs = Converter::new(many_rows(101)).parse()?.documents;

        let seq = tmp.path().join("seq.jsonl");
        let par = tmp.path().join("par.jsonl");
        write_jsonl(&seq, &docs)?;
        let n = write_jsonl_par(&par, &docs, Some(4))?;

        assert_eq!(n, 101);
        assert_eq!(fs::read_to_string(&seq)?, fs::read_to_string(&par)?);
        assert_eq!(read_jsonl(&par)?, docs);
        Ok(())
    }

    #[test]
    fn par_writer_default_shards() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let docs = Converter::new(many_rows(3)).parse()?.documents;
        let path = tmp.path().join("auto.jsonl");
        assert_eq!(write_jsonl_par(&path, &docs, None)?, 3);
        assert_eq!(read_jsonl(&path)?, docs);
        Ok(())
    }

    #[test]
    fn par_writer_empty_input_creates_file() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("empty.jsonl");
        assert_eq!(write_jsonl_par(&path, &[], None)?, 0);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }
}
