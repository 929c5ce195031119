//! Render the landing page to a local file.
//!
//! Run with: `cargo run -p prism-site --example write_page`

use prism_site::{render_page, validate_content};

fn main() {
    let issues = validate_content();
    for issue in &issues {
        eprintln!("content issue: {issue}");
    }

    let html = render_page();

    let output_path = "prism_landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
