use crate::add_test;
use crate::common::{Fixture, SAMPLE_CSV, SAMPLE_TSV};

// Test that a missing file is reported on stderr instead of crashing.
add_test!(missing_file_exit_two, async {
    let mut fixture = Fixture::with_pair(SAMPLE_CSV, SAMPLE_TSV);
    let missing = fixture.path("missing.csv");
    let b = fixture.path("b.tsv");

    let out = fixture.run(&[&missing, &b]).await;
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.starts_with("Two files are: "));
    assert!(out
        .stderr
        .starts_with(&format!("checkdiff: {missing}: cannot read file: ")));
});

// Test that a directory operand is unreadable.
add_test!(directory_operand_exit_two, async {
    let mut fixture = Fixture::with_pair(SAMPLE_CSV, SAMPLE_TSV);
    let dir = fixture.root_dir_path().display().to_string();
    let a = fixture.path("a.csv");

    let out = fixture.run(&[&a, &dir]).await;
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stderr.contains("cannot read file"));
});

// Test that a line without a delimiter aborts the comparison.
add_test!(malformed_line_exit_two, async {
    let mut fixture = Fixture::with_pair("a,1\nbroken\n", "a\t1\nb\t2\n");
    let a = fixture.path("a.csv");

    let out = fixture.run_pair(&[]).await;
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(
        out.stderr,
        format!(
            "checkdiff: {a}: Line:1; malformed line, expected at least two fields separated by ','\n"
        )
    );
    assert!(!out.stdout.contains("different"));
});

// Test that a malformed line in the second file names that file.
add_test!(malformed_second_file, async {
    let mut fixture = Fixture::with_pair(SAMPLE_CSV, "a\t1\nb 2\n");
    let b = fixture.path("b.tsv");

    let out = fixture.run_pair(&[]).await;
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stderr.starts_with(&format!("checkdiff: {b}: Line:1;")));
});

// Test that one trailing newline does not count as an extra line.
add_test!(trailing_newline_is_not_a_line, async {
    let mut fixture = Fixture::with_pair("a,1\n", "a\t1\n\n");

    let out = fixture.run_pair(&[]).await;
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.contains("different line number!"));
});

// Test that two empty files are the same.
add_test!(empty_files_are_the_same, async {
    let mut fixture = Fixture::with_pair("", "");

    let out = fixture.run_pair(&[]).await;
    assert!(out.status.success());
    assert!(out.stdout.ends_with("two files are the same!\n"));
});

// Test that fields after the value are ignored.
add_test!(extra_fields_are_ignored, async {
    let mut fixture = Fixture::with_pair("a,1,x\nb,2,y,z\n", "a\t1\tq\nb\t2\n");

    let out = fixture.run_pair(&[]).await;
    assert!(out.status.success());
});

// Test that non-UTF-8 input is reported as unreadable.
add_test!(invalid_utf8_exit_two, async {
    let mut fixture = Fixture::with_files(&["a.csv", "b.tsv"], &[b"a,1\n", &[0xff, 0xfe, b'\n']]);
    let b = fixture.path("b.tsv");

    let out = fixture.run_pair(&[]).await;
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stderr.starts_with(&format!("checkdiff: {b}: cannot read file:")));
});

// Test that Windows and old Mac line endings compare like LF files.
add_test!(crlf_file_matches_lf_file, async {
    let mut fixture = Fixture::with_pair("a,1\r\nb,2\r\n", SAMPLE_TSV);

    let out = fixture.run_pair(&[]).await;
    assert!(out.status.success());
    assert!(out.stdout.ends_with("two files are the same!\n"));

    let mut fixture = Fixture::with_pair(SAMPLE_CSV, "a\t1\rb\t2\r");
    let out = fixture.run_pair(&[]).await;
    assert!(out.status.success());
});
