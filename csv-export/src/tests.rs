use crate::{write_rows, CsvExporter};
use moodscan_core::{ExportError, Post, ScoredPost};

fn sample_posts() -> Vec<ScoredPost> {
    vec![
        ScoredPost::new(Post::new("Jane Doe", "jane", "lovely, sunny day"), 0.5859),
        ScoredPost::new(Post::new("Bob", "bob", "say \"hi\"\nsecond line"), 0.0),
        ScoredPost::new(Post::new("Zoë", "zoe", "awful"), -0.4588),
    ]
}

#[test]
fn test_write_rows_format() {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &sample_posts()).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    let expected = "User name,Handle,Tweets,NLTK\n\
                    Jane Doe,jane,\"lovely, sunny day\",POSITIVE 0.5859\n\
                    Bob,bob,\"say \"\"hi\"\"\nsecond line\",NEUTRAL 0\n\
                    Zoë,zoe,awful,NEGATIVE -0.4588\n";
    assert_eq!(output, expected);
}

#[test]
fn test_export_round_trips_through_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(dir.path().join("output.csv"));

    let rows = exporter.export(&sample_posts()).unwrap();
    assert_eq!(rows, 3);

    let mut reader = csv::Reader::from_path(exporter.path()).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), crate::HEADER.to_vec());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][2], "lovely, sunny day");
    assert_eq!(&records[1][2], "say \"hi\"\nsecond line");
    assert_eq!(&records[2][3], "NEGATIVE -0.4588");
}

#[test]
fn test_export_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(dir.path().join("output.csv"));

    exporter.export(&sample_posts()).unwrap();
    exporter.export(&sample_posts()[..1]).unwrap();

    let contents = std::fs::read_to_string(exporter.path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("Jane Doe"));
    assert!(!contents.contains("Zoë"));
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(dir.path().join("reports").join("today").join("out.csv"));

    assert_eq!(exporter.export(&[]).unwrap(), 0);
    let contents = std::fs::read_to_string(exporter.path()).unwrap();
    assert_eq!(contents, "User name,Handle,Tweets,NLTK\n");
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as the output file.
    let exporter = CsvExporter::new(dir.path());

    let result = exporter.export(&sample_posts());
    assert!(matches!(result, Err(ExportError::Io { .. })));
}
