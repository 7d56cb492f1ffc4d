use std::fs::File;
use std::io::{BufReader, Write};

use tint::filtering::{Action, DetectMaori, IsMaori, RecordFilter, Thresholds};
use tint::identifiers::Orthography;
use tint::pipeline::{pipeline::Pipeline, JsonLines};
use tint::record::{Languages, Location, Locations, Record, Variant};
use tint::transformers::{Demacronize, MacronMode};

fn write_jsonl(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    f.flush().unwrap();
    f
}

fn run<F: RecordFilter>(filter: F, domain: Variant, lines: &[&str]) -> Vec<String> {
    let src = write_jsonl(lines);
    let reader = BufReader::new(File::open(src.path()).unwrap());
    let pipeline = JsonLines::new(filter, domain, 2).unwrap();

    let mut dst = Vec::new();
    pipeline.run(reader, &mut dst).unwrap();
    String::from_utf8(dst)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test_log::test]
fn demacronize_translations() {
    let filter = Demacronize::new(
        Locations::default(),
        Languages::new(["MI"]),
        MacronMode::Triple,
    );
    let out = run(
        filter,
        Variant::Translation,
        &[
            r#"{"translations": {"en": "Māori", "mi": "Māori"}}"#,
            r#"{"translations": {"en": "language"}}"#,
        ],
    );
    assert_eq!(
        out,
        vec![
            r#"{"translations":{"en":"Māori","mi":"Maaaori"}}"#,
            r#"{"translations":{"en":"language"}}"#,
        ]
    );
}

#[test_log::test]
fn detect_maori_discard() {
    // discard records that look like Māori
    let filter = DetectMaori::new(
        Locations::from(Location::Text),
        None,
        Thresholds::new(0.1, 0.0).unwrap(),
        Action::Discard,
    );
    let out = run(
        filter,
        Variant::Classification,
        &[
            r#"{"text": "Kia ora koutou", "label": "mi"}"#,
            r#"{"text": "Good morning everyone", "label": "en"}"#,
            r#"{"text": "Mōrena", "label": "mi"}"#,
        ],
    );
    assert_eq!(
        out,
        vec![r#"{"text":"Good morning everyone","label":"en"}"#]
    );
}

#[test_log::test]
fn is_maori_pairs() {
    let filter = IsMaori::new(Locations::default(), 0.5, false, Action::Keep, Orthography).unwrap();
    let out = run(
        filter,
        Variant::Pair,
        &[
            r#"{"instruction": "Whakamāoritia", "input": "kia ora", "output": "hello"}"#,
            r#"{"instruction": "Whakamāoritia", "input": "te reo Māori", "output": "ka pai"}"#,
        ],
    );
    assert_eq!(
        out,
        vec![r#"{"instruction":"Whakamāoritia","input":"te reo Māori","output":"ka pai"}"#]
    );
}

#[test]
fn filters_chain() {
    // a record flows through several filters in sequence
    let filters: Vec<Box<dyn RecordFilter>> = vec![
        Box::new(DetectMaori::new(
            Locations::default(),
            None,
            Thresholds::new(0.0, 0.0).unwrap(),
            Action::Keep,
        )),
        Box::new(Demacronize::new(Locations::default(), None, MacronMode::Strip)),
    ];

    let apply = |record: Record| {
        filters
            .iter()
            .try_fold(Some(record), |record, f| match record {
                Some(r) => f.process(r),
                None => Ok(None),
            })
            .unwrap()
    };

    assert_eq!(
        apply(Record::pretrain("Tēnā koe")),
        Some(Record::pretrain("Tena koe"))
    );
    assert_eq!(apply(Record::pretrain("Good day")), None);
}
