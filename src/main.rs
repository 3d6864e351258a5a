use clap::Parser;
use doctext::extractors::extract_content;
use doctext::input::read_payload;
use doctext::models::ExtractResponse;
use std::io::Write;

/// Extract plain text from a base64-encoded document payload on stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// MIME type of the payload; anything other than DOCX or PDF yields
    /// empty text.
    #[arg(default_value = "")]
    mime: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let data = read_payload();

    let text = extract_content(&args.mime, &data).unwrap_or_default();
    let response = ExtractResponse::new(text);

    // Stdout carries exactly one JSON object and nothing else, no trailing
    // newline. Serialization of a single string field cannot fail.
    let payload = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"text":""}"#.to_string());
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(payload.as_bytes());
    let _ = stdout.flush();
}
