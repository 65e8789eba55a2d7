use cardex::{BlockOutcome, BlockSummary, DirectoryRecord, Grouped, ParseReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &ParseReport, grouped: &Grouped, query: Option<&str>, color: bool) {
    let palette = ansi::Palette::new(color);

    println!(
        "\n{}",
        palette.bold(palette.paint(
            format!(
                "⚙  Parsed {} block(s): {} kept, {} dropped, {} duplicate(s)",
                report.blocks_seen, report.kept, report.dropped, report.duplicates
            ),
            ansi::CYAN
        ))
    );

    println!("\n{}", palette.paint("━━━ Blocks ━━━", ansi::GRAY));
    if report.blocks.is_empty() {
        println!("{}", palette.dim("  No card blocks found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Input has no BEGIN:VCARD / END:VCARD marker pairs");
        println!("  • A BEGIN marker was never closed");
        println!("\n{}", palette.dim("  Tip: Set CARDEX_DEBUG_BLOCKS=1 to see field extraction details"));
    } else {
        for block in &report.blocks {
            println!("  {}", fmt_block(block, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Split: {}  │  Extract: {}",
        palette.paint(format!("{:?}", report.total), ansi::GREEN),
        palette.paint(format!("{:?}", report.split), ansi::CYAN),
        palette.dim(format!("{:?}", report.extract)),
    );

    let heading = match query {
        Some(q) => format!("━━━ Groups (query: \"{q}\") ━━━"),
        None => "━━━ Groups ━━━".to_string(),
    };
    println!("\n{}", palette.paint(heading, ansi::GRAY));
    print_group("Favorites", &grouped.favorites, &palette);
    print_group("Others", &grouped.others, &palette);
    println!();
}

fn fmt_block(block: &BlockSummary, palette: &ansi::Palette) -> String {
    let span = palette.dim(format!("[{:>4}..{:<4}]", block.start, block.end));
    let name = if block.preview.is_empty() { palette.dim("(no name)") } else { block.preview.clone() };

    let outcome = match block.outcome {
        BlockOutcome::Kept => palette.paint("✓ kept", ansi::GREEN),
        BlockOutcome::MissingName => palette.paint("✗ dropped: missing display name", ansi::YELLOW),
        BlockOutcome::MissingRecordNumber => palette.paint("✗ dropped: missing record number", ansi::YELLOW),
        BlockOutcome::DuplicateReplaced => palette.paint("✓ kept, replaced earlier duplicate", ansi::CYAN),
        BlockOutcome::DuplicateIgnored => palette.paint("✗ ignored: duplicate id", ansi::YELLOW),
    };

    format!("{span} {name} {outcome}")
}

fn print_group(label: &str, records: &[DirectoryRecord], palette: &ansi::Palette) {
    println!("  {} {}", palette.bold(label), palette.dim(format!("({})", records.len())));
    for record in records {
        let mut details = Vec::new();
        if !record.phone.is_empty() {
            details.push(record.phone.clone());
        }
        if !record.external_handle.is_empty() {
            details.push(format!("@{}", record.external_handle));
        }
        let suffix = if details.is_empty() { String::new() } else { format!("  {}", palette.dim(details.join("  "))) };
        println!("    {} {}{}", palette.dim(format!("#{}", record.id)), record.display_name, suffix);
    }
}
