use pdf_report::style::SPACE_LG;
use pdf_report::*;

fn main() {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "quick-start.pdf".to_string());

    let mut info = DocumentInfo::new();
    info.author("Jane Smith")
        .property("Department", "Sales");

    let mut options = DocumentOptions::new();
    options
        .title("Sales Report")
        .subtitle("Q1 2025")
        .page_size(PaperSize::A4)
        .info(info)
        .repeat_header(true);

    let mut doc = Document::new();
    doc.initialize(options)
        .expect("default options are valid")
        .add_section("Executive Summary", true)
        .expect("can add section")
        .add_paragraph(
            Paragraph::new(
                "Our Q1 2025 results beat every target we set at the start of the year, \
                 with revenue, new customers and retention all ahead of plan.",
            )
            .line_height_extra(Pt(2.0)),
        )
        .expect("can add paragraph")
        .add_space(SPACE_LG)
        .expect("can add space")
        .add_section("Key Performance Indicators", false)
        .expect("can add section")
        .add_table(
            Table::new(
                ["Metric", "Target", "Actual", "Variance"],
                [
                    ["Revenue", "$100K", "$125K", "+25%"],
                    ["New Customers", "500", "632", "+26.4%"],
                    ["Customer Satisfaction", "4.5/5", "4.8/5", "+6.7%"],
                    ["Retention Rate", "85%", "91%", "+7.1%"],
                    ["Support Response", "< 24h", "18h", "+25%"],
                ],
            )
            .header_style(TableHeaderStyle::Primary),
        )
        .expect("can add table")
        .add_space(SPACE_LG)
        .expect("can add space")
        .add_section("Regions", false)
        .expect("can add section")
        .add_subtitle_with_summary("Revenue by Region", "Total:", "$125,000", true)
        .expect("can add subtitle")
        .add_table(
            Table::new(
                ["Region", "Sales", "Growth", "Share"],
                [
                    ["North", "$62,500", "+28%", "50%"],
                    ["South", "$37,500", "+22%", "30%"],
                    ["East", "$18,750", "+18%", "15%"],
                    ["West", "$6,250", "+15%", "5%"],
                ],
            )
            .header_style(TableHeaderStyle::Secondary),
        )
        .expect("can add table")
        .add_section("Top Products", false)
        .expect("can add section")
        .add_list(
            List::new([
                "Breeze Widget - $45,000 (36%)",
                "Wave Solution - $38,000 (30.4%)",
                "Paradise Suite - $25,000 (20%)",
                "Essentials Kit - $17,000 (13.6%)",
            ])
            .numbered()
            .alternate_rows(),
        )
        .expect("can add list")
        .add_styled_list(
            "Q2 Initiatives",
            [
                "Expand into two new markets",
                "Launch a customer appreciation program",
                "Develop an eco-friendly product line",
            ],
            1,
            true,
        )
        .expect("can add styled list")
        .add_section("Appendix: Transactions", false)
        .expect("can add section")
        .add_table(
            Table::new(
                ["#", "Customer", "Amount"],
                (1..=60).map(|i| [i.to_string(), format!("Customer {i}"), format!("${}", i * 125)]),
            )
            .header_style(TableHeaderStyle::Dark)
            .repeat_header_on_break(true),
        )
        .expect("can add table")
        .add_line(Pt::ZERO, Pt::ZERO)
        .expect("can add line")
        .add_paragraph(Paragraph::new(lipsum::lipsum(120)).indent(Pt(24.0)))
        .expect("can add paragraph");

    let pages = doc.save(&output).expect("can write document");
    println!("wrote {pages} page(s) to {output}");
}
