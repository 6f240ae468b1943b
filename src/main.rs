//! Alias Forge - combinatorial email alias generation
//!
//! A simple CLI tool for generating every dot-trick variant of an email
//! address, or a random sample of them, with plain text, HTML and JSON export.

use alias_forge::variants;
use alias_forge::{
    AddressParser, AliasForgeError, AliasReport, ExportFormat, SampleOutcome, DEFAULT_SEPARATOR,
};
use indicatif::ProgressBar;
use inquire::{Confirm, CustomType, Select, Text};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match CliOptions::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if options.show_help {
        print_help();
        return;
    }
    if options.show_version {
        println!("alias-forge {}", alias_forge::VERSION);
        return;
    }

    if let Err(e) = run(options) {
        report_error(&e);
        process::exit(1);
    }
}

/// Parsed command line
struct CliOptions {
    address: Option<String>,
    quantity: Option<usize>,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    separator: char,
    show_help: bool,
    show_version: bool,
}

impl CliOptions {
    fn parse(args: &[String]) -> Result<Self, AliasForgeError> {
        let mut options = Self {
            address: None,
            quantity: None,
            output: None,
            format: None,
            separator: DEFAULT_SEPARATOR,
            show_help: false,
            show_version: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "-V" | "--version" => options.show_version = true,
                "-n" | "--count" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| AliasForgeError::cli("--count needs a value"))?;
                    options.quantity = Some(parse_quantity(value)?);
                }
                "-o" | "--output" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| AliasForgeError::cli("--output needs a file path"))?;
                    options.output = Some(PathBuf::from(value));
                }
                "-f" | "--format" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| AliasForgeError::cli("--format needs a value"))?;
                    options.format = Some(value.parse()?);
                }
                "-s" | "--separator" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| AliasForgeError::cli("--separator needs a character"))?;
                    options.separator = parse_separator(value)?;
                }
                other if other.starts_with('-') => {
                    return Err(AliasForgeError::cli(format!("Unknown option '{}'", other)));
                }
                address => {
                    if options.address.is_some() {
                        return Err(AliasForgeError::cli("Only one address can be given"));
                    }
                    options.address = Some(address.to_string());
                }
            }
        }

        Ok(options)
    }
}

/// One generation run, from the command line or the interactive prompt
struct GenerationRequest {
    address: String,
    quantity: Option<usize>,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    separator: char,
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let CliOptions {
        address,
        quantity,
        output,
        format,
        separator,
        ..
    } = options;

    let request = match address {
        Some(address) => GenerationRequest {
            address,
            quantity,
            output,
            format,
            separator,
        },
        None => {
            // The prompt flow would drop these; require an address for them
            if quantity.is_some() || output.is_some() || format.is_some() {
                return Err(AliasForgeError::cli(
                    "--count, --output and --format need an ADDRESS; run without options for the interactive mode",
                )
                .into());
            }
            prompt_request(separator)?
        }
    };

    run_alias_forge(&request)
}

/// Interactive mode, used when no address is given on the command line
fn prompt_request(separator: char) -> anyhow::Result<GenerationRequest> {
    print_banner();

    let address = Text::new("Email address:")
        .with_placeholder("user@example.com")
        .with_help_message("Aliases keep the same inbox on providers that ignore dots")
        .prompt()?;

    let mode = Select::new(
        "Generation mode:",
        vec![GenerationMode::All, GenerationMode::Sample],
    )
    .prompt()?;

    let quantity = match mode {
        GenerationMode::All => None,
        GenerationMode::Sample => Some(
            CustomType::<usize>::new("How many aliases?")
                .with_default(10)
                .with_error_message("Please type a whole number")
                .prompt()?,
        ),
    };

    let output = if Confirm::new("Save the aliases to a file?")
        .with_default(false)
        .prompt()?
    {
        let path = Text::new("Output file:")
            .with_default("aliases.txt")
            .with_help_message("Extension picks the format: txt, html or json")
            .prompt()?;
        Some(PathBuf::from(path))
    } else {
        None
    };

    Ok(GenerationRequest {
        address,
        quantity,
        output,
        format: None,
        separator,
    })
}

/// Generation modes offered by the interactive prompt
enum GenerationMode {
    All,
    Sample,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "Generate every alias"),
            Self::Sample => write!(f, "Sample a random subset"),
        }
    }
}

/// Main alias forge workflow
fn run_alias_forge(request: &GenerationRequest) -> anyhow::Result<()> {
    // Raw rendering goes to stdout untouched so it can be piped
    let raw_output = request.output.is_none() && request.format.is_some();
    if !raw_output {
        print_banner();
    }

    let address = AddressParser::new()
        .with_separator(request.separator)
        .parse(&request.address)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating aliases...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let started = Instant::now();
    let generated = match request.quantity {
        Some(quantity) => variants::sample(&address, quantity, &mut rand::thread_rng()),
        None => variants::enumerate(&address).map(|aliases| SampleOutcome {
            aliases,
            notice: None,
        }),
    };
    spinner.finish_and_clear();

    let outcome = generated?;
    let elapsed = started.elapsed();
    let report = AliasReport::new(&address, outcome.aliases, outcome.notice);

    match (&request.output, request.format) {
        (None, Some(format)) => {
            // Clamp notices go to stderr so pipelines only see the rendering
            if let Some(notice) = &report.notice {
                eprintln!("⚠️  {}", notice);
            }
            let rendered = report.render(format)?;
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        (Some(path), format) => {
            display_results(&report, elapsed);
            let format = format
                .or_else(|| ExportFormat::from_path(path))
                .unwrap_or(ExportFormat::Txt);
            alias_forge::write_report(&report, format, path)?;
            println!("💾 Saved {} aliases to {}", report.count, path.display());
        }
        (None, None) => {
            display_results(&report, elapsed);
        }
    }

    Ok(())
}

/// Display generated aliases and a run summary
fn display_results(report: &AliasReport, elapsed: Duration) {
    if let Some(notice) = &report.notice {
        println!("⚠️  {}", notice);
        println!();
    }

    println!("📧 Generated Aliases ({}):", report.count);
    println!("═══════════════════════");
    for (i, alias) in report.aliases.iter().enumerate() {
        println!("{:4}. {}", i + 1, alias);
    }
    println!();

    println!("📈 Summary:");
    println!("   👤 Username: {}", report.username);
    println!("   🌐 Domain: {}", report.domain);
    println!("   📧 Aliases: {}", report.count);
    println!("   ⏱️  Total time: {:.2}s", elapsed.as_secs_f32());
}

fn report_error(error: &anyhow::Error) {
    if let Some(forge_error) = error.downcast_ref::<AliasForgeError>() {
        eprintln!("{}", forge_error.user_message());
    } else {
        eprintln!("❌ Error: {}", error);
    }
}

fn parse_quantity(input: &str) -> Result<usize, AliasForgeError> {
    match input.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AliasForgeError::invalid_quantity(input)),
    }
}

fn parse_separator(input: &str) -> Result<char, AliasForgeError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && c != '@' => Ok(c),
        _ => Err(AliasForgeError::cli(format!(
            "Separator must be a single character other than '@', got '{}'",
            input
        ))),
    }
}

fn print_banner() {
    println!("🔥 Alias Forge - email alias generation");
    println!("═══════════════════════════════════════");
    println!();
}

/// Print help information
fn print_help() {
    println!("🔥 Alias Forge - email alias generation");
    println!("═══════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    alias-forge [OPTIONS] [ADDRESS]");
    println!();
    println!("ARGS:");
    println!("    ADDRESS    Email address to generate aliases for.");
    println!("               Without it, an interactive prompt starts.");
    println!();
    println!("OPTIONS:");
    println!("    -n, --count <N>        Sample N random aliases instead of enumerating all");
    println!("    -o, --output <FILE>    Write the aliases to FILE");
    println!("    -f, --format <FMT>     Output format: txt, html or json");
    println!("    -s, --separator <C>    Separator character (default '.')");
    println!("    -h, --help             Show this help");
    println!("    -V, --version          Show the version");
    println!();
    println!("EXAMPLES:");
    println!("    alias-forge john.doe@gmail.com              # Every dot placement");
    println!("    alias-forge -n 25 longusername@gmail.com    # 25 random aliases");
    println!("    alias-forge user@gmail.com -f txt           # Pipeable plain list");
    println!("    alias-forge user@gmail.com -o aliases.html  # Styled HTML file");
    println!();
    println!("FEATURES:");
    println!("    • Exhaustive enumeration of every separator placement");
    println!("    • Random sampling without replacement for long usernames");
    println!("    • TXT, HTML and JSON export");
    println!("    • Interactive mode when no address is given");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
