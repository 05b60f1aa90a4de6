//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Useful for wiring the extractor into scripted comparisons.

use article_density::extract;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: String,
    summary: String,
    score: f64,
    content_text: String,
}

fn main() {
    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    // Output JSON, empty fields when extraction fails
    let output = match extract(&html) {
        Ok(article) => Output {
            title: article.title,
            summary: article.summary,
            score: article.score,
            content_text: article.content_text,
        },
        Err(err) => {
            eprintln!("extraction failed: {err}");
            Output {
                title: String::new(),
                summary: String::new(),
                score: 0.0,
                content_text: String::new(),
            }
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
