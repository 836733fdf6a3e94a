// crates/lexer/tests/lexer_trivia.rs
use spmd_lexer::print::scan_tokens;
use spmd_lexer::{Lexer, TokenKind, TokenPayload};

fn kinds_unfiltered(src: &str, check_crlf: bool) -> Vec<TokenKind> {
    let mut lx = Lexer::new();
    lx.options_mut().check_crlf = check_crlf;
    lx.set_filter_tokens(false);
    lx.set_input(src);

    let mut kinds = Vec::new();
    while !lx.at_end() {
        let result = lx.lex();
        if result.token.kind == TokenKind::EndOfFile {
            break;
        }
        kinds.push(result.token.kind);
    }
    kinds
}

#[test]
fn filtered_lex_skips_leading_trivia() {
    let mut lx = Lexer::new();
    lx.set_input("  \n  foo");

    let result = lx.lex();
    assert_eq!(result.token.kind, TokenKind::Identifier);
    assert_eq!(result.token.payload, TokenPayload::Ident("foo".into()));
    assert!(result.diagnostics.is_empty());

    assert!(lx.at_end());
    assert_eq!(lx.lex().token.kind, TokenKind::EndOfFile);
}

#[test]
fn filtered_stream_never_contains_trivia() {
    let mut lx = Lexer::new();
    lx.set_input("\t\t42\n\nx  \n");

    let tokens = scan_tokens(&mut lx);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Int32Constant, TokenKind::Identifier]);
}

#[test]
fn trailing_trivia_lexes_to_end_of_file() {
    let mut lx = Lexer::new();
    lx.set_input("foo   ");

    assert_eq!(lx.lex().token.kind, TokenKind::Identifier);
    // The remaining blanks are consumed internally.
    assert_eq!(lx.lex().token.kind, TokenKind::EndOfFile);
    assert!(lx.at_end());
}

#[test]
fn unfiltered_lex_returns_every_token() {
    assert_eq!(
        kinds_unfiltered("  x\n", false),
        vec![
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn carriage_return_is_whitespace_by_default() {
    // Without check_crlf, "\r\n" is a one-byte whitespace run followed by a
    // newline.
    assert_eq!(
        kinds_unfiltered("\r\n", false),
        vec![TokenKind::Whitespace, TokenKind::Newline]
    );
}

#[test]
fn crlf_forms_a_single_newline_when_enabled() {
    assert_eq!(kinds_unfiltered("\r\n", true), vec![TokenKind::Newline]);
}

#[test]
fn crlf_newline_spans_two_characters() {
    let mut lx = Lexer::new();
    lx.options_mut().check_crlf = true;
    lx.set_filter_tokens(false);
    lx.set_input("\r\nx");

    let newline = lx.lex().token;
    assert_eq!(newline.kind, TokenKind::Newline);
    assert_eq!((newline.range.first.line, newline.range.first.column), (1, 1));
    assert_eq!((newline.range.last.line, newline.range.last.column), (2, 1));
}

#[test]
fn bare_carriage_return_stays_whitespace_under_crlf() {
    assert_eq!(
        kinds_unfiltered("\r x", true),
        vec![TokenKind::Whitespace, TokenKind::Identifier]
    );
}

#[test]
fn whitespace_run_stops_before_crlf_pair() {
    // "  \r\n" with check_crlf: the run is the two spaces; the pair is one
    // newline.
    assert_eq!(
        kinds_unfiltered("  \r\n", true),
        vec![TokenKind::Whitespace, TokenKind::Newline]
    );
}

#[test]
fn form_feed_and_vertical_tab_are_blanks() {
    assert_eq!(
        kinds_unfiltered("\x0b\x0c x", false),
        vec![TokenKind::Whitespace, TokenKind::Identifier]
    );
}

#[test]
fn option_defaults() {
    let lx = Lexer::new();
    assert!(!lx.options().strict_integer_suffixes);
    assert!(!lx.options().warn_integer_overflow);
    assert!(!lx.options().check_crlf);
    assert_eq!(lx.options().lane_bits, 32);
}
