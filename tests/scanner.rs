use jstype::{
    scanner::{BlockSyntax, Collected, LineScanner, State},
    EnumBlock, MacroList, SourceDocument, JS_TYPE_ENUM,
};

const COLORS: EnumBlock = EnumBlock {
    declaration: "enum Color : uint8_t {",
};

const INNER_LIST: MacroList = MacroList {
    name: "INNER_LIST",
    definition: "#define INNER_LIST",
    entry: "F",
    nested: None,
};

const OUTER_LIST: MacroList = MacroList {
    name: "OUTER_LIST",
    definition: "#define OUTER_LIST",
    entry: "F",
    nested: Some(&INNER_LIST),
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scan<B: BlockSyntax>(text: &str, block: &B) -> Option<Vec<String>> {
    let document = SourceDocument::from_text(text);
    LineScanner::new(&document).scan(block)
}

#[test]
fn test_collects_only_inside_block() {
    init();
    let text = "\
Red,
enum Color : uint8_t {
    Red,
    Green,
};
Blue,
";
    assert_eq!(Some(vec!["Red".to_owned(), "Green".to_owned()]), scan(text, &COLORS));
}

#[test]
fn test_marker_line_is_not_collected() {
    init();
    assert_eq!(Some(vec![]), scan("enum Color : uint8_t { Red,\n};", &COLORS));
    assert_eq!(
        Some(vec!["A".to_owned()]),
        scan("#define INNER_LIST(F) F(NOPE) \\\n  F(A)\n", &INNER_LIST)
    );
}

#[test]
fn test_blank_lines_do_not_matter() {
    init();
    let dense = "enum Color : uint8_t {\nRed,\nGreen,\nBlue,\n};\nExtra,\n";
    let sparse = "\n\nenum Color : uint8_t {\n\n   \nRed,\n\t\nGreen,\n\n\nBlue,\n\n};\n\n\nExtra,\n";
    assert_eq!(scan(dense, &COLORS), scan(sparse, &COLORS));
    assert_eq!(3, scan(sparse, &COLORS).unwrap().len());
}

#[test]
fn test_terminator_line_is_still_matched() {
    init();
    let text = "#define INNER_LIST(F) \\\n  F(A) \\\n  F(B)\n  F(C)\n";
    assert_eq!(Some(vec!["A".to_owned(), "B".to_owned()]), scan(text, &INNER_LIST));
}

#[test]
fn test_missing_marker_is_none() {
    init();
    assert_eq!(None, scan("Red,\nGreen,\n};\n", &COLORS));
    assert_eq!(None, scan("", &JS_TYPE_ENUM));
}

#[test]
fn test_found_but_empty_is_some() {
    init();
    assert_eq!(Some(vec![]), scan("enum Color : uint8_t {\n};\n", &COLORS));
}

#[test]
fn test_unterminated_block_runs_to_end() {
    init();
    assert_eq!(
        Some(vec!["Red".to_owned(), "Green".to_owned()]),
        scan("enum Color : uint8_t {\nRed,\nGreen,\n", &COLORS)
    );
}

#[test]
fn test_nested_list_is_spliced_in_place() {
    init();
    let text = "\
#define INNER_LIST(F) \\
  F(X)                \\
  F(Y)

#define OUTER_LIST(F) \\
  F(A)                \\
  INNER_LIST(F)       \\
  F(B)                \\
  F(C)

#define OTHER_LIST(F) \\
  F(D)
";
    let names = scan(text, &OUTER_LIST).unwrap();
    assert_eq!(vec!["A", "X", "Y", "B", "C"], names);
}

#[test]
fn test_nested_list_defined_later_is_found() {
    init();
    let text = "\
#define OUTER_LIST(F) \\
  F(A)                \\
  INNER_LIST(F)

#define INNER_LIST(F) \\
  F(X)
";
    assert_eq!(Some(vec!["A".to_owned(), "X".to_owned()]), scan(text, &OUTER_LIST));
}

#[test]
fn test_missing_nested_list_is_none() {
    init();
    let text = "#define OUTER_LIST(F) \\\n  F(A) \\\n  INNER_LIST(F) \\\n  F(B)\n";
    assert_eq!(None, scan(text, &OUTER_LIST));
}

#[test]
fn test_collected_lines() {
    assert_eq!(Collected::Name("Red"), COLORS.collect("Red,"));
    assert_eq!(Collected::Skip, COLORS.collect("// Red,"));
    assert_eq!(Collected::Nested(INNER_LIST), OUTER_LIST.collect("INNER_LIST(F) \\"));
    assert_eq!(Collected::Name("A"), OUTER_LIST.collect("F(A) \\"));
    assert_eq!(Collected::Skip, OUTER_LIST.collect("V(A) \\"));
    assert_eq!(Collected::Skip, OUTER_LIST.collect("\\"));
}

#[test]
fn test_states_are_distinct() {
    assert_ne!(State::Seeking, State::Collecting);
    assert_ne!(State::Collecting, State::Done);
}
