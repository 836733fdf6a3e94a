// crates/lexer/tests/lexer_props.rs
use proptest::prelude::*;
use spmd_lexer::print::{render_tokens, scan_tokens};
use spmd_lexer::reference::ReferenceLexer;
use spmd_lexer::{Lexer, TokenKind, TokenPayload};

fn expected_kind(value: u64) -> TokenKind {
    if value <= 0x7fff_ffff {
        TokenKind::Int32Constant
    } else if value <= 0xffff_ffff {
        TokenKind::UInt32Constant
    } else if value <= 0x7fff_ffff_ffff_ffff {
        TokenKind::Int64Constant
    } else {
        TokenKind::UInt64Constant
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn never_panics_and_terminates(s in ".*") {
        let mut lx = Lexer::new();
        lx.set_input(s.as_str());

        let tokens = scan_tokens(&mut lx);

        // Every produced token consumed at least one byte.
        prop_assert!(tokens.len() <= s.len());

        for token in &tokens {
            // Filtered stream never yields trivia.
            prop_assert!(!token.kind.is_trivia(), "trivia leaked: {token:?}");

            // Ranges stay ordered in document order.
            let first = (token.range.first.line, token.range.first.column);
            let last = (token.range.last.line, token.range.last.column);
            prop_assert!(first <= last, "range out of order: {token:?}");
        }
    }

    #[test]
    fn value_round_trip(value in any::<u64>(), radix_pick in 0u8..3) {
        let rendered = match radix_pick {
            0 => value.to_string(),
            1 => format!("0x{value:x}"),
            _ => format!("0b{value:b}"),
        };

        let mut lx = Lexer::new();
        lx.options_mut().warn_integer_overflow = true;
        lx.set_input(rendered.as_str());

        let result = lx.lex();
        prop_assert_eq!(result.token.kind, expected_kind(value));
        prop_assert_eq!(&result.token.payload, &TokenPayload::Int(value));
        prop_assert!(result.diagnostics.is_empty(), "no overflow possible: {:?}", result.diagnostics);
        prop_assert!(lx.at_end());
    }

    #[test]
    fn engine_and_reference_agree(s in "[ -~\t\r\n]*") {
        let mut engine = Lexer::new();
        engine.set_input(s.as_str());
        let engine_stream = render_tokens(&scan_tokens(&mut engine));

        let mut reference = ReferenceLexer::new();
        reference.set_input(s.as_str());
        let reference_stream = render_tokens(&reference.scan_tokens());

        prop_assert_eq!(engine_stream, reference_stream, "input={:?}", s);
    }
}
