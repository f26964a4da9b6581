use std::path::Path;
use std::time::Instant;

use pagefold::{Pagination, paginate};

use crate::cli::ReportFormat;
use crate::shared::{parse_limits, percentage, read_text, write_text};

pub fn run(
    input: &Path,
    output: &Path,
    max_chars: usize,
    max_lines: usize,
    top: usize,
    format: &ReportFormat,
) -> Result<(), i32> {
    let limits = parse_limits(max_chars, max_lines)?;
    let content = read_text(input)?;

    let started = Instant::now();
    let pagination = paginate(&content, limits);
    let elapsed = started.elapsed();

    write_text(output, &pagination.text)?;

    eprintln!(
        "Paginated {} words onto {} pages in {} ms",
        pagination.total_words,
        pagination.pages,
        elapsed.as_millis()
    );

    match format {
        ReportFormat::Text => print_text_report(&pagination, top),
        ReportFormat::Json => print_json_report(&pagination, top),
    }

    Ok(())
}

fn print_text_report(pagination: &Pagination, top: usize) {
    println!("Top {top} most used words:");
    println!("Word\tAbsolute Frequency\tRelative Frequency (%)");
    for wc in pagination.frequencies.top(top) {
        println!(
            "{}\t{}\t{:.2}%",
            wc.word,
            wc.count,
            percentage(wc.count, pagination.total_words)
        );
    }
}

fn print_json_report(pagination: &Pagination, top: usize) {
    let top_words: Vec<serde_json::Value> = pagination
        .frequencies
        .top(top)
        .iter()
        .map(|wc| {
            serde_json::json!({
                "word": wc.word,
                "count": wc.count,
                "percent": percentage(wc.count, pagination.total_words),
            })
        })
        .collect();

    let report = serde_json::json!({
        "total_words": pagination.total_words,
        "distinct_words": pagination.frequencies.distinct(),
        "pages": pagination.pages,
        "top_words": top_words,
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
