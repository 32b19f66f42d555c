use clap::Parser;
use cwgen::{Stats, Store};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Summarize dictionaries and the CW training word pool they yield
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Dictionary files: one word per line, optionally `word/affix frequency`.
    dictionaries: Vec<PathBuf>,

    /// Encoding of the dictionary files.
    #[clap(short, long, default_value = "iso-8859-1")]
    encoding: String,

    /// By default, lines without a usable word are skipped. This flag discards the whole file.
    #[clap(long)]
    strict: bool,

    /// Shortest word to include.
    #[clap(long, default_value = "1", allow_hyphen_values = true)]
    min: i64,

    /// Longest word to include.
    ///
    /// If not passed, the longest word across all dictionaries is used.
    #[clap(long, allow_hyphen_values = true)]
    max: Option<i64>,

    /// Only include words made of characters from this letters set.
    #[clap(short, long, default_value = "all")]
    letters: String,

    /// Generation scheme the pool is meant for.
    #[clap(short, long, default_value = "all")]
    scheme: String,

    /// Print the filtered words, grouped by length.
    #[clap(short, long)]
    words: bool,

    /// List the available letters sets and exit.
    #[clap(long)]
    list_letters: bool,

    /// List the available generation schemes and exit.
    #[clap(long)]
    list_schemes: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list_letters || args.list_schemes {
        if args.list_letters {
            for set in cwgen::letters_sets() {
                let letters = match set.alphabet {
                    cwgen::Alphabet::Any => "*",
                    cwgen::Alphabet::Only(letters) => letters,
                };
                println!("{:>6}  {:<24} {}", set.id, set.description, letters);
            }
        }
        if args.list_schemes {
            for scheme in cwgen::schemes() {
                println!("{:>6}  {}", scheme.id, scheme.description);
            }
        }
        return;
    }

    let mut options = match Store::builder().with_encoding_label(&args.encoding) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if args.strict {
        options.on_format_error = cwgen::FormatErrorPolicy::Reject;
    }
    let mut store = options.build();

    for path in &args.dictionaries {
        match store.add(path) {
            Ok(true) => {}
            Ok(false) => eprintln!("'{}' is already loaded", path.display()),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    for info in store.list_info() {
        print_stats(&format!("{} {}", info.id, info.name), info.stats.as_ref());
    }
    let total = store.aggregate_stats();
    print_stats("all dictionaries", total.as_ref());

    let max = args
        .max
        .unwrap_or_else(|| total.as_ref().map_or(0, |s| s.max_length as i64));
    let label = format!(
        "{}..={} letters '{}' scheme '{}'",
        args.min, max, args.letters, args.scheme
    );
    print_stats(
        &label,
        store
            .filter_stats(args.min, max, &args.letters, &args.scheme)
            .as_ref(),
    );

    if args.words {
        for (length, words) in store.filter(args.min, max, &args.letters) {
            println!("{:>2}: {}", length, words.join(" "));
        }
    }
}

fn print_stats(label: &str, stats: Option<&Stats>) {
    println!("{}:", label);
    let Some(stats) = stats else {
        println!("  no words");
        return;
    };
    println!(
        "  {} words, {} to {} letters",
        stats.total_count, stats.min_length, stats.max_length
    );
    for (&length, &count) in &stats.per_length_count {
        let frac = count as f64 / stats.total_count as f64;
        let w1 = (30.0 * frac).round() as usize;
        let w2 = (30.0 * (1.0 - frac)).round() as usize;
        println!(
            "  {:>2}: {}{} ({})",
            length,
            "#".repeat(w1),
            " ".repeat(w2),
            count
        );
    }
}
