// crates/lexer/tests/lexer_differential.rs
//
// The rule engine and the Logos reference scanner must render byte-identical
// token streams on identical input, for every option combination the
// regression harness sweeps.
use pretty_assertions::assert_eq;
use spmd_lexer::print::{render_tokens, scan_tokens};
use spmd_lexer::reference::ReferenceLexer;
use spmd_lexer::{Lexer, LexerOptions};

fn engine_stream(input: &[u8], options: LexerOptions) -> String {
    let mut lx = Lexer::new();
    *lx.options_mut() = options;
    lx.set_input(input);
    render_tokens(&scan_tokens(&mut lx))
}

fn reference_stream(input: &[u8], options: LexerOptions) -> String {
    let mut lx = ReferenceLexer::new();
    *lx.options_mut() = options;
    lx.set_input(input);
    render_tokens(&lx.scan_tokens())
}

fn option_grid() -> Vec<LexerOptions> {
    let mut grid = Vec::new();
    for check_crlf in [false, true] {
        for strict_integer_suffixes in [false, true] {
            for lane_bits in [8, 16, 32, 64] {
                grid.push(LexerOptions {
                    strict_integer_suffixes,
                    warn_integer_overflow: false,
                    check_crlf,
                    lane_bits,
                });
            }
        }
    }
    grid
}

fn assert_agree(input: &[u8]) {
    for options in option_grid() {
        assert_eq!(
            engine_stream(input, options),
            reference_stream(input, options),
            "input={:?} options={options:?}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn agree_on_corpus() {
    #[rustfmt::skip]
    let corpus: &[&str] = &[
        "",
        "0",
        "0x",
        "0b",
        "0x10 0b11 123 010",
        "00x1",
        "0b102",
        "0x1b2",
        "1u2",
        "foo bar foo _x x_1 9z",
        "a\nb\r\nc\rd",
        "  \t \x0b\x0c ",
        "1k 2M 3G 2K 1g 2kk 1uulllkG",
        "0xffffffffffffffffff",
        "18446744073709551616",
        "18446744073709551615",
        "2147483647 2147483648 4294967296 9223372036854775808",
        "123abc",
        "tile_x 128\ntile_y 0x80\nmask 0b1111\n",
        "x@y",
        "\u{20AC} after non-ascii nothing lexes",
    ];

    for src in corpus {
        assert_agree(src.as_bytes());
    }
}

// Small deterministic generator so failures can be replayed by seed.
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

#[test]
fn agree_on_seeded_token_soup() {
    // Alphabet biased toward the interesting characters: digits, radix
    // prefixes, suffix letters, trivia, and a scan-killing '@'.
    const ALPHABET: &[u8] = b"0123456789abxXkMGuUlL_ \t\r\n@zf";

    for seed in 0..256u64 {
        let mut rng = XorShift64::new(seed);
        let len = (rng.next() % 64) as usize;
        let input: Vec<u8> = (0..len)
            .map(|_| ALPHABET[(rng.next() as usize) % ALPHABET.len()])
            .collect();

        assert_agree(&input);
    }
}

#[test]
fn agree_on_seeded_raw_bytes() {
    for seed in 1000..1128u64 {
        let mut rng = XorShift64::new(seed);
        let len = (rng.next() % 256) as usize;
        let input: Vec<u8> = (0..len).map(|_| rng.next() as u8).collect();

        assert_agree(&input);
    }
}
