use jstype::{Analyzer, Error, ErrorKind, JscAnalyzer, Result};
use maplit::btreemap;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_minimal_enum() -> Result<()> {
    let analyzer = JscAnalyzer::from_source("enum JSType : uint8_t {\nFoo,\nBar,\n};\n");
    let table = analyzer.process()?;
    assert_eq!(
        btreemap! { 0 => "Foo".to_owned(), 1 => "Bar".to_owned() },
        table.into_inner()
    );
    Ok(())
}

#[test]
fn test_ordinals_follow_source_order() -> Result<()> {
    let names: Vec<String> = (0..40).map(|i| format!("Type{}", i)).collect();
    let body: Vec<String> = names.iter().map(|n| format!("    {},", n)).collect();
    let text = format!("enum JSType : uint8_t {{\n{}\n}};\n", body.join("\n"));
    let table = JscAnalyzer::from_source(&text).process()?;
    assert_eq!(40, table.len());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(Some(name.as_str()), table.get(i as u8));
    }
    Ok(())
}

#[test]
fn test_header_fixture() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let analyzer = JscAnalyzer::open(fixture("JSType.h"))?;
    let list = analyzer.process_list().expect("JSType enum");
    // entries with trailing comments or initializers are not bare enumerators
    assert!(!list.iter().any(|n| n == "EvalExecutableType" || n == "LastJSCObjectType" || n == "MaxJSType"));
    let table = analyzer.process()?;
    assert_eq!(
        btreemap! {
            0 => "UnspecifiedType".to_owned(),
            1 => "UndefinedType".to_owned(),
            2 => "BooleanType".to_owned(),
            3 => "NumberType".to_owned(),
            4 => "NullType".to_owned(),
            5 => "CellType".to_owned(),
            6 => "StringType".to_owned(),
            7 => "SymbolType".to_owned(),
            8 => "CustomGetterSetterType".to_owned(),
            9 => "APIValueWrapperType".to_owned(),
            10 => "ProgramExecutableType".to_owned(),
            11 => "ObjectType".to_owned(),
            12 => "FinalObjectType".to_owned(),
            13 => "JSCalleeType".to_owned(),
            14 => "JSFunctionType".to_owned(),
        },
        table.into_inner()
    );
    Ok(())
}

#[test]
fn test_process_is_idempotent() -> Result<()> {
    let analyzer = JscAnalyzer::open(fixture("JSType.h"))?;
    assert_eq!(analyzer.process()?, analyzer.process()?);
    Ok(())
}

#[test]
fn test_missing_enum_is_not_found() {
    let analyzer = JscAnalyzer::from_source("enum OtherType : uint8_t {\nFoo,\n};\n");
    assert_eq!(None, analyzer.process_list());
    let err = analyzer.process().unwrap_err();
    assert_eq!(ErrorKind::MarkerNotFound, err.kind());
    assert!(err.is_not_found());
}

#[test]
fn test_empty_enum_is_found() -> Result<()> {
    let analyzer = JscAnalyzer::from_source("enum JSType : uint8_t {\n};\n");
    assert_eq!(Some(vec![]), analyzer.process_list());
    assert!(analyzer.process()?.is_empty());
    Ok(())
}

#[test]
fn test_too_many_enumerators() {
    let body: String = (0..257).map(|i| format!("T{},\n", i)).collect();
    let analyzer = JscAnalyzer::from_source(&format!("enum JSType : uint8_t {{\n{}}};\n", body));
    assert_eq!(257, analyzer.process_list().map(|l| l.len()).unwrap_or_default());
    assert_eq!(ErrorKind::CodeOverflow, analyzer.process().unwrap_err().kind());
}

#[test]
fn test_missing_file() {
    let err = JscAnalyzer::open(fixture("NoSuchHeader.h")).err().expect("open error");
    assert_eq!(ErrorKind::OpenError, err.kind());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_document_keeps_every_line() -> Result<()> {
    let analyzer = JscAnalyzer::from_source("enum JSType : uint8_t {\n\nFoo,\n};\n");
    assert_eq!(4, analyzer.document().len());
    assert_eq!(Some(""), analyzer.document().lines().nth(1));
    let analyzer = JscAnalyzer::open(fixture("JSType.h"))?;
    assert!(!analyzer.document().is_empty());
    Ok(())
}

#[test]
fn test_error_without_message() {
    let err = Error::new(ErrorKind::MarkerNotFound);
    assert_eq!("MarkerNotFound", err.to_string());
    assert!(err.is_not_found());
    assert!(std::error::Error::source(&err).is_none());
}
