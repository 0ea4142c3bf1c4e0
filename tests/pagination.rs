use pdf_report::*;

fn document(options: DocumentOptions) -> Document {
    let mut document = Document::new();
    document.initialize(options).expect("valid options");
    document
}

fn rows(count: usize) -> Vec<[String; 3]> {
    (1..=count)
        .map(|i| [format!("row {i}"), format!("{}", i * 3), format!("{}", i * 7)])
        .collect()
}

fn row_bands(page: &PageRecording) -> Vec<Rect> {
    page.commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Rect { rect, .. } if rect.height() == style::TABLE_ROW_HEIGHT => {
                Some(*rect)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn repeated_table_headers_appear_once_per_page() {
    let mut options = DocumentOptions::new();
    options.title("Ledger").repeat_header(false);
    let mut document = document(options);
    document
        .add_table(Table::new(["Entry", "Debit", "Credit"], rows(90)).repeat_header_on_break(true))
        .unwrap();

    let pages = document.render_pages().unwrap();
    assert!(pages.len() >= 3, "expected the table to span pages");
    for (index, page) in pages.iter().enumerate() {
        assert_eq!(page.count_text("Credit"), 1, "page {}", index + 1);
    }
    assert_eq!(pages[0].count_text("Ledger"), 1);
    assert_eq!(pages[1].count_text("Ledger"), 0);
}

#[test]
fn unrepeated_table_headers_only_start_the_table() {
    let mut document = document(DocumentOptions::new());
    document
        .add_table(Table::new(["Entry", "Debit", "Credit"], rows(90)))
        .unwrap();

    let pages = document.render_pages().unwrap();
    assert!(pages.len() >= 3);
    assert_eq!(pages[0].count_text("Credit"), 1);
    for page in &pages[1..] {
        assert_eq!(page.count_text("Credit"), 0);
    }
}

#[test]
fn breaks_respect_non_default_page_sizes() {
    for (paper, orientation) in [
        (PaperSize::A5, Orientation::Portrait),
        (PaperSize::Letter, Orientation::Landscape),
        (PaperSize::Tabloid, Orientation::Portrait),
    ] {
        let mut options = DocumentOptions::new();
        options
            .title("Sized")
            .page_size(paper)
            .orientation(orientation);
        let geometry = options.geometry();
        let mut document = document(options);
        document
            .add_paragraph(lipsum::lipsum(150))
            .unwrap()
            .add_table(
                Table::new(["Entry", "Debit", "Credit"], rows(80)).repeat_header_on_break(true),
            )
            .unwrap();

        let pages = document.render_pages().unwrap();
        let (width, height) = paper.size(orientation);
        let mut drawn_rows = 0;
        for page in &pages {
            assert_eq!((page.width, page.height), (width, height));
            let bands = row_bands(page);
            if !bands.is_empty() {
                assert_eq!(page.count_text("Credit"), 1);
            }
            for band in bands {
                assert!(
                    band.y2 <= geometry.usable_bottom(),
                    "{paper:?} row ends at {} past {}",
                    band.y2,
                    geometry.usable_bottom()
                );
                drawn_rows += 1;
            }
        }
        assert_eq!(drawn_rows, 80, "{paper:?}");
    }
}

#[test]
fn title_block_repeats_when_configured() {
    let mut options = DocumentOptions::new();
    options.title("Handbook").subtitle("Edition 2");
    let mut document = document(options);
    for i in 0..40 {
        document
            .add_section(format!("Chapter {i}"), i % 2 == 0)
            .unwrap()
            .add_paragraph(lipsum::lipsum(40))
            .unwrap();
    }

    let pages = document.render_pages().unwrap();
    assert!(pages.len() > 2);
    let total = pages.len();
    for (index, page) in pages.iter().enumerate() {
        assert_eq!(page.count_text("Handbook"), 1);
        assert_eq!(page.count_text("Edition 2"), 1);
        assert_eq!(page.count_text(&format!("Page {} of {total}", index + 1)), 1);
    }
    assert_eq!(document.section_counter(), 40);
}

#[test]
fn info_line_follows_the_title_on_the_first_page() {
    let mut info = DocumentInfo::new();
    info.author("Jane Smith")
        .created(chrono::NaiveDate::from_ymd_opt(2025, 2, 11).unwrap());
    let mut options = DocumentOptions::new();
    options.title("Report").info(info);
    let mut document = document(options);
    document.add_space(Pt(2000.0)).unwrap().add_paragraph("tail").unwrap();

    let pages = document.render_pages().unwrap();
    let line = "Jane Smith • Created on Feb 11, 2025";
    assert_eq!(pages[0].count_text(line), 1);
    assert_eq!(pages[1].count_text(line), 0);

    let baseline = pages[0]
        .commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::Text { text, origin, .. } if text == line => Some(origin.1),
            _ => None,
        })
        .unwrap();
    // under the 72pt title block starting at the 48pt margin
    assert_eq!(baseline, Pt(48.0 + 72.0 + 12.0));
}

#[test]
fn hidden_info_line_is_not_drawn() {
    let mut info = DocumentInfo::new();
    info.author("Jane Smith").show_in_header(false);
    let mut options = DocumentOptions::new();
    options.info(info);
    let mut document = document(options);
    document.add_paragraph("body").unwrap();

    let pages = document.render_pages().unwrap();
    assert!(!pages[0].texts().any(|text| text.contains("Jane Smith")));
}
