use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use kwic::index::KwicGenerator;
use kwic::input::LineReader;
use kwic::output::render_index;
use kwic::KwicError;

fn index_file(path: &str) -> Result<String, KwicError> {
    let lines = LineReader::open(Path::new(path))?;
    let mut rendered = Vec::new();
    render_index(KwicGenerator::new(lines), &mut rendered)?;
    Ok(String::from_utf8(rendered).unwrap())
}

#[test]
fn end_to_end_index() {
    let test_file = "test_e2e_index.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "O sol é uma estrela.").unwrap();
    writeln!(file, "A lua orbita a Terra.").unwrap();
    drop(file);

    let output = index_file(test_file).expect("Should index the file");

    // Entries sorted by rotated text, aligned to the widest (21 columns),
    // four spaces before the origin reference.
    assert_eq!(
        output,
        "Terra. A lua orbita a    (from \"A lua orbita a Terra.\")\n\
         estrela. O sol é uma     (from \"O sol é uma estrela.\")\n\
         lua orbita a Terra. A    (from \"A lua orbita a Terra.\")\n\
         orbita a Terra. A lua    (from \"A lua orbita a Terra.\")\n\
         sol é uma estrela. O     (from \"O sol é uma estrela.\")\n"
    );

    fs::remove_file(test_file).unwrap();
}

#[test]
fn surrounding_whitespace_is_trimmed_before_indexing() {
    let test_file = "test_trimmed_index.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "   sol nasce  ").unwrap();
    drop(file);

    let output = index_file(test_file).expect("Should index the file");

    assert_eq!(
        output,
        "nasce sol    (from \"sol nasce\")\n\
         sol nasce    (from \"sol nasce\")\n"
    );

    fs::remove_file(test_file).unwrap();
}

#[test]
fn duplicate_keywords_produce_duplicate_rows() {
    let test_file = "test_duplicate_index.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "sol e sol").unwrap();
    drop(file);

    let output = index_file(test_file).expect("Should index the file");

    // Both occurrences rotate from the first match, so the rows repeat.
    assert_eq!(
        output,
        "sol e sol    (from \"sol e sol\")\n\
         sol e sol    (from \"sol e sol\")\n"
    );

    fs::remove_file(test_file).unwrap();
}

#[test]
fn stop_words_only_input_is_an_error() {
    let test_file = "test_stopwords_index.txt";
    let mut file = File::create(test_file).unwrap();
    writeln!(file, "O a e").unwrap();
    writeln!(file, "um uma uns").unwrap();
    drop(file);

    let result = index_file(test_file);
    assert!(matches!(result, Err(KwicError::EmptyInput)));

    fs::remove_file(test_file).unwrap();
}

#[test]
fn empty_input_is_an_error() {
    let test_file = "test_empty_index.txt";
    File::create(test_file).unwrap();

    let result = index_file(test_file);
    assert!(matches!(result, Err(KwicError::EmptyInput)));

    fs::remove_file(test_file).unwrap();
}

#[test]
fn missing_input_file_is_an_error() {
    let result = index_file("nonexistent_index_input_12345.txt");
    assert!(matches!(result, Err(KwicError::FileAccess { .. })));
}
