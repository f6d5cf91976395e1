mod analyzer;
mod document;
mod error;
mod instance_type;
mod jsc;
mod matcher;
mod table;
mod v8;

pub mod scanner;
pub mod string_type;

pub use analyzer::Analyzer;
pub use document::SourceDocument;
pub use error::{Error, ErrorKind, ErrorValue, Result};
pub use instance_type::{build_instance_type_table, FIRST_NONSTRING_TYPE, SYMBOL_TYPE};
pub use jsc::{EnumBlock, JscAnalyzer, JS_TYPE_ENUM};
pub use string_type::{string_type_list, string_type_table, StringShape};
pub use table::{TypeCode, TypeTable};
pub use v8::{MacroList, V8Analyzer, ARRAY_ITERATOR_TYPE_LIST, INSTANCE_TYPE_LIST};

pub const V8_OBJECTS_HEADER: &str = "/home/z/Projects/open/v8/v8/src/objects.h";
pub const JSC_JS_TYPE_HEADER: &str = "/home/z/Projects/open/safari-604-branch/Source/JavaScriptCore/runtime/JSType.h";

/// Instance type table of the V8 checkout at [`V8_OBJECTS_HEADER`].
#[inline]
pub fn get_v8_map_dict() -> Result<TypeTable> {
    V8Analyzer::open(V8_OBJECTS_HEADER)?.process()
}

/// `JSType` table of the JavaScriptCore checkout at [`JSC_JS_TYPE_HEADER`].
#[inline]
pub fn get_jsc_js_type_dict() -> Result<TypeTable> {
    JscAnalyzer::open(JSC_JS_TYPE_HEADER)?.process()
}
