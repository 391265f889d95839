mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use qrbill::sections::{paragraphs_height, ProcedureLine};
use qrbill::{
    alternative_procedure_lines, amount_section, border_text, check_height, encode,
    information_section, title_section, validate, InformationPart, PaymentRecord,
};
use serde::Serialize;
use std::fs::create_dir_all;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrbill")]
#[command(about = "Swiss QR-bill validator, payload encoder and slip layout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Validate(ValidateArgs),
    Encode(EncodeArgs),
    Layout(LayoutArgs),
}

#[derive(Parser)]
struct ValidateArgs {
    /// JSON files holding one payment record or an array of them.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Write a CSV line per record to this file.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Parser)]
struct EncodeArgs {
    #[arg(long, default_value = "data/bill.json")]
    input: PathBuf,
    /// Payload file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct LayoutArgs {
    #[arg(long, default_value = "data/bill.json")]
    input: PathBuf,
    #[arg(long, default_value = "de")]
    language: String,
    #[arg(long, value_enum, default_value_t = PartArg::Payment)]
    part: PartArg,
    /// Override the block width in centimetres.
    #[arg(long)]
    width_cm: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PartArg {
    Payment,
    Receipt,
}

impl PartArg {
    fn information_part(self) -> InformationPart {
        match self {
            PartArg::Payment => InformationPart::PaymentPart,
            PartArg::Receipt => InformationPart::ReceiptPart,
        }
    }

    fn font_size_pt(self) -> f64 {
        match self {
            PartArg::Payment => 10.0,
            PartArg::Receipt => 8.0,
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationRow {
    file: String,
    index: usize,
    account: String,
    valid: bool,
    error: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("qrbill")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Encode(args) => run_encode(args),
        Command::Layout(args) => run_layout(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let start = Instant::now();
    let mut rows = Vec::new();
    for input in &args.inputs {
        let records = load_records(input)?;
        for (index, record) in records.iter().enumerate() {
            let result = validate(record);
            rows.push(ValidationRow {
                file: input.display().to_string(),
                index,
                account: record.account.print_code(),
                valid: result.is_ok(),
                error: result.err().map(|err| err.to_string()).unwrap_or_default(),
            });
        }
    }

    let invalid: Vec<&ValidationRow> = rows.iter().filter(|row| !row.valid).collect();
    for row in &invalid {
        emit_info_line(&format!(
            "Invalid record {}#{} ({}): {}",
            row.file, row.index, row.account, row.error
        ));
    }

    if let Some(report) = &args.report {
        write_report(report, &rows)?;
        emit_info_line(&format!("Validation report written to {}", report.display()));
    }

    emit_info_line(&format!(
        "Validated {} record(s): {} valid, {} invalid",
        rows.len(),
        rows.len() - invalid.len(),
        invalid.len()
    ));
    emit_info_line(&format!("Validation time: {} ms", start.elapsed().as_millis()));

    if !invalid.is_empty() {
        return Err(format!("{} record(s) failed validation", invalid.len()));
    }
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<(), String> {
    let record = load_single_record(&args.input)?;
    validate(&record).map_err(|err| err.to_string())?;

    let mut payload = Vec::new();
    encode(&record, &mut payload).map_err(|err| err.to_string())?;

    match &args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                create_dir_all(parent).map_err(|err| err.to_string())?;
            }
            std::fs::write(output_path, &payload).map_err(|err| err.to_string())?;
            emit_info_line(&format!(
                "Payload ({} bytes) written to {}",
                payload.len(),
                output_path.display()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&payload).map_err(|err| err.to_string())?;
            stdout.flush().map_err(|err| err.to_string())?;
            log::info!("payload of {} bytes written to stdout", payload.len());
        }
    }
    Ok(())
}

fn run_layout(args: LayoutArgs) -> Result<(), String> {
    let record = load_single_record(&args.input)?;
    let part = args.part.information_part();
    let width = match args.width_cm {
        Some(cm) if cm > 0.0 => qrbill::layout::width_in_font_units(cm, args.part.font_size_pt()),
        Some(cm) => return Err(format!("--width-cm must be positive, got {cm}")),
        None => part.text_width(),
    };

    let title = title_section(&record, &args.language).map_err(|err| err.to_string())?;
    let amount = amount_section(&record, &args.language).map_err(|err| err.to_string())?;
    let paragraphs = information_section(&record, &args.language, width, part)
        .map_err(|err| err.to_string())?;
    let options = part.layout_options();
    check_height(&paragraphs, &options).map_err(|err| err.to_string())?;

    let caption = border_text(&args.language).map_err(|err| err.to_string())?;
    println!("[{caption}]");
    match part {
        InformationPart::PaymentPart => println!("{}", title.payment_part),
        InformationPart::ReceiptPart => println!("{}", title.receipt),
    }
    println!();
    for paragraph in &paragraphs {
        println!("{}", paragraph.heading);
        if paragraph.lines.is_empty() {
            println!("  [ ]");
        }
        for line in &paragraph.lines {
            println!("  {line}");
        }
    }
    println!();
    println!("{}: {}", amount.currency_heading, amount.currency_value);
    if amount.amount_value.is_empty() {
        println!("{}: [ ]", amount.amount_heading);
    } else {
        println!("{}: {}", amount.amount_heading, amount.amount_value);
    }

    if part == InformationPart::PaymentPart {
        let procedures = alternative_procedure_lines(&record).map_err(|err| err.to_string())?;
        print_procedures(&procedures);
    }

    log::info!(
        "layout height {:.1}pt of {:.1}pt",
        paragraphs_height(&paragraphs, &options),
        options.max_height
    );
    Ok(())
}

fn print_procedures(procedures: &[ProcedureLine]) {
    if procedures.is_empty() {
        return;
    }
    println!();
    for line in procedures {
        println!("{}{}", line.label, line.procedure);
    }
}

fn load_records(path: &Path) -> Result<Vec<PaymentRecord>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|err| format!("invalid JSON in {}: {err}", path.display()))?;
    let records = if value.is_array() {
        serde_json::from_value::<Vec<PaymentRecord>>(value)
    } else {
        serde_json::from_value::<PaymentRecord>(value).map(|record| vec![record])
    };
    let records: Vec<PaymentRecord> =
        records.map_err(|err| format!("invalid payment record in {}: {err}", path.display()))?;
    log::debug!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

fn load_single_record(path: &Path) -> Result<PaymentRecord, String> {
    let mut records = load_records(path)?;
    if records.len() != 1 {
        return Err(format!(
            "expected exactly one payment record in {}, found {}",
            path.display(),
            records.len()
        ));
    }
    records
        .pop()
        .ok_or_else(|| format!("no payment record in {}", path.display()))
}

fn write_report(output: &Path, rows: &[ValidationRow]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for row in rows {
        writer.serialize(row).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
