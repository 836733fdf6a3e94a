// fuzz_targets/lexer_diff.rs
#![no_main]

use libfuzzer_sys::fuzz_target;
use spmd_lexer::print::{render_tokens, scan_tokens};
use spmd_lexer::reference::ReferenceLexer;
use spmd_lexer::Lexer;

fuzz_target!(|data: &[u8]| {
    for check_crlf in [false, true] {
        for strict in [false, true] {
            let mut engine = Lexer::new();
            engine.options_mut().check_crlf = check_crlf;
            engine.options_mut().strict_integer_suffixes = strict;
            engine.set_input(data);
            let engine_tokens = scan_tokens(&mut engine);

            // Every token consumes at least one byte; the scan always halts.
            assert!(engine_tokens.len() <= data.len());

            let mut reference = ReferenceLexer::new();
            reference.options_mut().check_crlf = check_crlf;
            reference.options_mut().strict_integer_suffixes = strict;
            reference.set_input(data);
            let reference_tokens = reference.scan_tokens();

            assert_eq!(
                render_tokens(&engine_tokens),
                render_tokens(&reference_tokens)
            );
        }
    }
});
