//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `motivo_core` linkage.
//! - Print one random quote the way the home screen would.

use motivo_core::{default_log_level, init_logging, QuotePicker};

fn main() {
    let log_dir = std::env::temp_dir().join("motivo-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("motivo_core version={}", motivo_core::core_version());

    let mut picker = match QuotePicker::bundled() {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("quotes unavailable: {err}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    if let Some(quote) = picker.pick(&mut rng) {
        match &quote.author {
            Some(author) => println!("\"{}\" - {author}", quote.text),
            None => println!("\"{}\"", quote.text),
        }
    }
}
