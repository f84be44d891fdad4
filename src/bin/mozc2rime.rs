use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use mozc2rime::corpus;
use mozc2rime::rime;
use mozc2rime::translit::Transliterator;

#[derive(Parser)]
#[command(
    name = "mozc2rime",
    about = "Convert Mozc dictionary files to a Rime .dict.yaml, keeping Japanese entries only"
)]
struct Cli {
    /// Directory containing the Mozc dictionary files
    #[arg(long, default_value = "./mozc-dict")]
    input_dir: PathBuf,
    /// Glob pattern matching dictionary files inside the input directory
    #[arg(long, default_value = "dictionary[0-9][0-9].txt")]
    pattern: String,
    /// Dictionary name written into the output header
    #[arg(long, default_value = "mozc_jp")]
    name: String,
    /// Output file (default: <name>.dict.yaml)
    #[arg(long)]
    out: Option<PathBuf>,
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out_file = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.dict.yaml", cli.name)));

    let translit = Transliterator::with_detected_fallback();

    // A failed discovery aborts before either output file is touched.
    let outcome = die!(
        corpus::run(&cli.input_dir, &cli.pattern, &translit),
        "Error: {}"
    );

    die!(
        rime::write_dict(
            &out_file,
            &cli.name,
            &rime::today_version(),
            &outcome.entries
        ),
        "Error writing dictionary: {}"
    );
    die!(
        rime::write_skipped(Path::new(rime::SKIPPED_FILE), &outcome.skipped),
        "Error writing skipped entries: {}"
    );

    let stats = &outcome.stats;
    println!("Conversion complete.");
    println!("Output file:           {}", out_file.display());
    println!("Lines processed:       {}", stats.processed_lines);
    println!("Converted:             {}", stats.converted);
    println!("Entries written:       {}", outcome.entries.len());
    println!(
        "Skipped (no romaji):   {} (written to {})",
        stats.skipped,
        rime::SKIPPED_FILE
    );
    println!("Filtered non-Japanese: {}", stats.filtered_nonjp);

    if translit.fallback_name().is_none() {
        println!(
            "Note: no secondary transliteration backend in this build; \
             enable the `kakasi` feature to improve conversion coverage."
        );
    }
}
