use chrono::Local;
use clap::{Args, Parser, Subcommand};
use diffscale::batch::{read_entries, BatchConverter};
use diffscale::report::Summary;
use diffscale::{format_number, to_visual, visual_to_number, Conversion, ConversionRecord, Scale};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "diffscale")]
#[command(author, version, about = "Convert level difficulties between Punter, MichaelChan, Scheep and Grassy")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one difficulty (number or label) between scales
    Convert {
        /// Value or label, e.g. 7.5, "High Madness", 2.5b, "Grandmaster IV"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source scale. Text that parses entirely as a number (7.5, 1e2, inf) is read
        /// as a number before any label parsing, so on michaelchan "1e2" is
        /// 100 rather than a glyph label
        #[arg(short, long, default_value = "punter")]
        from: Scale,

        #[arg(short, long, default_value = "punter")]
        to: Scale,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a number as a scale's label
    Visual {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(short, long, default_value = "punter")]
        scale: Scale,
    },

    /// Read a label back into a number
    Parse {
        label: String,

        #[arg(short, long, default_value = "punter")]
        scale: Scale,
    },

    /// List a scale's named tiers
    Tiers {
        #[arg(short, long, default_value = "punter")]
        scale: Scale,
    },

    /// Convert a list of difficulties, one per line
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input file ("-" for stdin)
    input: PathBuf,

    #[arg(short, long, default_value = "punter")]
    from: Scale,

    #[arg(short, long, default_value = "punter")]
    to: Scale,

    /// Output report file (.csv, .json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for auto-generated reports
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Skip destination labels
    #[arg(long)]
    no_visual: bool,

    /// Number of parallel workers (default: number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let code = match cli.command {
        Command::Convert { value, from, to, json } => handle_convert(&value, from, to, json),
        Command::Visual { value, scale } => {
            println!("{}", to_visual(value, scale));
            0
        }
        Command::Parse { label, scale } => {
            let n = visual_to_number(&label, scale);
            println!("{}", format_number(n));
            i32::from(n.is_nan())
        }
        Command::Tiers { scale } => {
            print_tiers(scale);
            0
        }
        Command::Batch(args) => handle_batch(args, cli.quiet),
    };

    std::process::exit(code);
}

fn handle_convert(value: &str, from: Scale, to: Scale, json: bool) -> i32 {
    // Bare numbers skip label parsing; "1e2" would read as glyphs on michaelchan
    let conversion = match value.trim().parse::<f64>() {
        Ok(n) => Conversion::run(n, from, to),
        Err(_) => Conversion::run(value, from, to),
    };

    if json {
        match serde_json::to_string_pretty(&conversion) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                return 1;
            }
        }
    } else {
        println!("{}  ({})", conversion.formatted, conversion.visual);
    }

    if conversion.ok() {
        0
    } else {
        eprintln!(
            "Error: {}",
            diffscale::ScaleError::NotANumber {
                input: value.to_string(),
                scale: from,
            }
        );
        1
    }
}

fn print_tiers(scale: Scale) {
    let tiers = scale.visual_table();
    if tiers.is_empty() {
        // MichaelChan is glyph-based
        for g in diffscale::visual::Glyph::ALL {
            println!("{:>8}  {}  ({})", format_number(g.unit()), g.symbol(), g.letter());
        }
        return;
    }

    println!("{:>8}  {}", "FROM", "LABEL");
    println!("{}", "-".repeat(30));
    for t in tiers {
        println!("{:>8}  {}", format_number(t.threshold), t.label);
    }
}

fn handle_batch(args: BatchArgs, quiet: bool) -> i32 {
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let entries = if args.input.as_os_str() == "-" {
        read_entries(io::stdin().lock())
    } else {
        File::open(&args.input).and_then(|f| read_entries(BufReader::new(f)))
    };
    let entries = match entries {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.input.display(), e);
            return 1;
        }
    };

    let converter = BatchConverter::new()
        .with_from(args.from)
        .with_to(args.to)
        .with_visual(!args.no_visual);
    let records = converter.convert_all(&entries);

    for r in &records {
        print_record(r);
    }

    let summary = Summary::from_records(&records);
    if !quiet {
        eprintln!("\n{}", "─".repeat(50));
        eprintln!("Converted: {}/{}", summary.converted, summary.total);
        if summary.unparsed > 0 {
            eprintln!("Unparsed:  {}", summary.unparsed);
        }
    }

    let report_path = if let Some(ref output) = args.output {
        Some(output.clone())
    } else if let Some(ref dir) = args.report_dir {
        std::fs::create_dir_all(dir).ok();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Some(dir.join(format!("diffscale_{}_{}_{}.csv", args.from, args.to, timestamp)))
    } else {
        None
    };

    if let Some(ref path) = report_path {
        if let Err(e) = diffscale::report::generate(path, &records) {
            eprintln!("Failed to write report: {}", e);
            return 1;
        }
        if !quiet {
            eprintln!("Report saved: {}", path.display());
        }
    }

    i32::from(summary.unparsed > 0)
}

fn print_record(r: &ConversionRecord) {
    match (&r.error, &r.visual) {
        (Some(err), _) => println!("{:>5}  {:<24}  ERROR: {}", r.line, truncate(&r.input, 24), err),
        (None, Some(label)) => println!(
            "{:>5}  {:<24}  {:>10}  {}",
            r.line,
            truncate(&r.input, 24),
            r.formatted,
            label
        ),
        (None, None) => println!("{:>5}  {:<24}  {:>10}", r.line, truncate(&r.input, 24), r.formatted),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
