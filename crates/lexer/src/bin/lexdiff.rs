// Differential driver: tokenize the same input with the rule-engine lexer
// and the Logos reference scanner, render both streams in the canonical
// format, and byte-compare them. Supports seeded random input and a sweep
// over all SIMD lane widths.

use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use spmd_lexer::print::{render_tokens, scan_tokens};
use spmd_lexer::reference::ReferenceLexer;
use spmd_lexer::Lexer;

const LANE_WIDTHS: [u32; 4] = [8, 16, 32, 64];
const MAX_RANDOM_LEN: u64 = 1024 * 1024;

struct DriverArgs {
    random_input: bool,
    random_seed: u64,
    test_all_lane_widths: bool,
    input_paths: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<DriverArgs, String> {
    let mut parsed = DriverArgs {
        random_input: false,
        random_seed: default_seed(),
        test_all_lane_widths: false,
        input_paths: Vec::new(),
    };

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--random-input" => parsed.random_input = true,
            "--random-seed" => {
                let value = it.next().ok_or("Missing value for '--random-seed'")?;
                parsed.random_seed = value
                    .parse()
                    .map_err(|_| format!("Invalid value for '--random-seed': {value}"))?;
            }
            "--test-all-lane-widths" => parsed.test_all_lane_widths = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'"));
            }
            path => parsed.input_paths.push(path.to_string()),
        }
    }

    Ok(parsed)
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

// xorshift64*; deterministic for a given seed so failures can be replayed.
struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

fn combine_files(paths: &[String]) -> Result<Vec<u8>, String> {
    let mut input = Vec::new();
    for path in paths {
        let bytes = std::fs::read(path).map_err(|e| format!("Failed to open '{path}': {e}"))?;
        input.extend_from_slice(&bytes);
    }
    Ok(input)
}

struct LexerRun {
    printed_tokens: String,
    duration_secs: f64,
}

fn run_engine(input: &[u8], lane_bits: u32) -> LexerRun {
    let mut lexer = Lexer::new();
    lexer.options_mut().lane_bits = lane_bits;
    lexer.set_input(input);

    let start = Instant::now();
    let tokens = scan_tokens(&mut lexer);
    let duration_secs = start.elapsed().as_secs_f64();

    LexerRun {
        printed_tokens: render_tokens(&tokens),
        duration_secs,
    }
}

fn run_reference(input: &[u8], lane_bits: u32) -> LexerRun {
    let mut lexer = ReferenceLexer::new();
    lexer.options_mut().lane_bits = lane_bits;
    lexer.set_input(input);

    let start = Instant::now();
    let tokens = lexer.scan_tokens();
    let duration_secs = start.elapsed().as_secs_f64();

    LexerRun {
        printed_tokens: render_tokens(&tokens),
        duration_secs,
    }
}

fn print_streams(expected: &str, actual: &str) {
    println!("  expected:");
    for line in expected.lines() {
        println!("  | {line}");
    }
    println!("  actual:");
    for line in actual.lines() {
        println!("  | {line}");
    }
}

fn run_test(input: &[u8], lane_bits: u32) -> bool {
    let reference = run_reference(input, lane_bits);
    let engine = run_engine(input, lane_bits);

    if engine.printed_tokens != reference.printed_tokens {
        eprintln!("Test failed (lane bits: {lane_bits}).");
        print_streams(&reference.printed_tokens, &engine.printed_tokens);
        return false;
    }

    let speedup = if engine.duration_secs > 0.0 {
        reference.duration_secs / engine.duration_secs
    } else {
        1.0
    };
    println!("Test passed (speed up factor: {speedup:.2})");

    true
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if args.input_paths.is_empty() && !args.random_input {
        eprintln!("No input files specified.");
        return ExitCode::FAILURE;
    }

    let mut input = match combine_files(&args.input_paths) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if args.random_input {
        println!("Using random seed: {}", args.random_seed);

        let mut rng = XorShift64::new(args.random_seed);
        let length = rng.next() % MAX_RANDOM_LEN;
        println!("Generating {length} bytes of random input.");

        input.reserve(length as usize);
        for _ in 0..length {
            input.push(rng.next() as u8);
        }
    }

    let widths: &[u32] = if args.test_all_lane_widths {
        &LANE_WIDTHS
    } else {
        &[32]
    };

    for &lane_bits in widths {
        if !run_test(&input, lane_bits) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
