use pdf_report::*;
use std::fs;
use std::thread;
use std::time::Duration;

fn sample() -> Document {
    let mut options = DocumentOptions::new();
    options.title("Sample").subtitle("Generated in a test");
    let mut document = Document::new();
    document
        .initialize(options)
        .unwrap()
        .add_section("Overview", true)
        .unwrap()
        .add_paragraph(Paragraph::new(lipsum::lipsum(300)).line_height_extra(Pt(2.0)))
        .unwrap()
        .add_list(List::new(["one", "two", "three"]).numbered().alternate_rows())
        .unwrap()
        .add_line(Pt(24.0), Pt(24.0))
        .unwrap()
        .add_table(Table::new(["Name", "Value"], [["a", "1"], ["b", "2"]]))
        .unwrap();
    document
}

#[test]
fn generates_a_pdf() {
    let document = sample();
    let mut bytes: Vec<u8> = Vec::new();
    let pages = document.generate(&mut bytes).unwrap();

    assert_eq!(pages, document.render_pages().unwrap().len());
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.starts_with("%PDF-"));
    assert!(pdf.contains(&format!("/Count {pages}")));
    assert!(pdf.contains("/Title (Sample)"));
    assert!(pdf.contains("/Subject (Generated in a test)"));
    assert!(pdf.contains("/BaseFont /Helvetica-Bold"));
    assert!(pdf.trim_end().ends_with("%%EOF"));
}

#[test]
fn generating_twice_gives_the_same_layout() {
    let document = sample();
    let first = document.render_pages().unwrap();
    let mut sink: Vec<u8> = Vec::new();
    document.generate(&mut sink).unwrap();
    let second = document.render_pages().unwrap();
    assert_eq!(first, second);
}

#[test]
fn generating_twice_gives_the_same_bytes() {
    let mut document = Document::new();
    document
        .initialize(DocumentOptions::new())
        .unwrap()
        .add_paragraph("Counted on the first of the month.")
        .unwrap();

    let mut first: Vec<u8> = Vec::new();
    document.generate(&mut first).unwrap();
    // the creation date has second resolution
    thread::sleep(Duration::from_millis(1100));
    let mut second: Vec<u8> = Vec::new();
    document.generate(&mut second).unwrap();

    assert!(String::from_utf8_lossy(&first).contains("/CreationDate"));
    assert_eq!(first, second);
}

#[test]
fn writes_custom_properties() {
    let mut info = DocumentInfo::new();
    info.author("Jane Smith").property("Reviewer", "Sam");
    let mut options = DocumentOptions::new();
    options.info(info);

    let mut document = Document::new();
    document.initialize(options).unwrap();
    let mut bytes: Vec<u8> = Vec::new();
    document.generate(&mut bytes).unwrap();

    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Author (Jane Smith)"));
    assert!(pdf.contains("/Reviewer (Sam)"));
}

#[test]
fn saves_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");

    let pages = sample().save(&path).unwrap();
    assert!(pages >= 1);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn uninitialized_documents_produce_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.pdf");

    let document = Document::new();
    assert!(matches!(
        document.save(&path),
        Err(ReportError::InvalidOperation(_))
    ));
    assert!(!path.exists());

    let mut bytes: Vec<u8> = Vec::new();
    assert!(matches!(
        document.generate(&mut bytes),
        Err(ReportError::InvalidOperation(_))
    ));
    assert!(bytes.is_empty());
}

#[test]
fn rejects_unparseable_fonts() {
    let mut fonts = FontOptions::new();
    fonts.bold(b"not a font".to_vec());
    let mut options = DocumentOptions::new();
    options.fonts(fonts);

    let mut document = Document::new();
    assert!(matches!(
        document.initialize(options),
        Err(ReportError::FaceParsing(_))
    ));
    assert!(!document.is_initialized());
}

#[test]
fn write_errors_propagate() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    assert!(matches!(sample().generate(Broken), Err(ReportError::Io(_))));
}
