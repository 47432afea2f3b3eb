use super::*;

const POF: &str = "# f1 f2 f3\n0.1 0.9 0.5\n0.5  0.5\t0.25\n\n0.9 0.1 0.75\n";

#[test]
fn parse_skips_header_and_blank_lines() {
    let data = parse_dataset(POF).unwrap();
    assert_eq!(data.dim(), 3);
    assert_eq!(data.len(), 3);
    assert!(!data.is_empty());
    assert_eq!(data.row(1), &[0.5, 0.5, 0.25]);
    assert_eq!(data.column(2).collect::<Vec<_>>(), vec![0.5, 0.25, 0.75]);
    assert_eq!(data.rows().len(), 3);
}

#[test]
fn header_is_skipped_even_when_numeric() {
    let data = parse_dataset("3 2\n1 2\n").unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data.row(0), &[1.0, 2.0]);
}

#[test]
fn unicode_minus_is_accepted() {
    let data = parse_dataset("h\n\u{2212}1.5 2\n").unwrap();
    assert_eq!(data.row(0), &[-1.5, 2.0]);
}

#[test]
fn ragged_and_bad_rows_report_line_numbers() {
    let err = parse_dataset("h\n1 2\n3\n").unwrap_err().to_string();
    assert!(err.contains("line 3"), "{err}");

    let err = parse_dataset("h\n1 x\n").unwrap_err().to_string();
    assert!(err.contains("line 2") && err.contains("'x'"), "{err}");
}

#[test]
fn empty_body_is_rejected() {
    assert!(matches!(parse_dataset("header only\n"), Err(VizError::Data(_))));
    assert!(matches!(parse_dataset(""), Err(VizError::Data(_))));
}

#[test]
fn from_rows_validates_shape() {
    assert!(Dataset::from_rows(vec![]).is_err());
    assert!(Dataset::from_rows(vec![vec![]]).is_err());
    assert!(Dataset::from_rows(vec![vec![1.0, 2.0], vec![1.0]]).is_err());
}

#[test]
fn extent_and_map_values() {
    let data = parse_dataset(POF).unwrap();
    assert_eq!(data.extent(), (0.1, 0.9));
    let doubled = data.map_values(|v| v * 2.0);
    assert_eq!(doubled.row(0), &[0.2, 1.8, 1.0]);
    assert_eq!(doubled.dim(), 3);
}

#[test]
fn read_dataset_reports_missing_file() {
    let err = read_dataset(Path::new("target/does/not/exist.pof")).unwrap_err();
    assert!(matches!(err, VizError::Other(_)));
    assert!(err.to_string().contains("exist.pof"));
}
