use std::process::ExitCode;

use clap::Parser;
use numconv_core::convert::convert_with_config;
use numconv_core::{convert_request_json, ConverterConfig};

/// numconv converts integers between English words, decimal, binary, octal,
/// hexadecimal and little-endian base64.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Format of the input: text, decimal, binary, octal, hexadecimal or base64.
    #[arg(short, long, default_value = "decimal")]
    from: String,

    /// Format to convert to.
    #[arg(short, long, default_value = "text")]
    to: String,

    /// Longest accepted input in characters.
    #[arg(long, default_value_t = numconv_core::config::DEFAULT_MAX_INPUT_LEN)]
    max_len: usize,

    /// Longest result printed, in characters.
    #[arg(long, default_value_t = numconv_core::config::DEFAULT_MAX_OUTPUT_LEN)]
    max_output_len: usize,

    /// Treat the argument as a JSON request body and print the JSON response.
    #[arg(short, long)]
    json: bool,

    /// Value to convert, e.g. `42`, `-0b1010` or `"forty-two"`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.json {
        println!("{}", convert_request_json(&args.contents));
        return ExitCode::SUCCESS;
    }

    let config =
        ConverterConfig::with_max_input_len(args.max_len).max_output_len(args.max_output_len);
    match convert_with_config(&args.contents, &args.from, &args.to, &config) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
