use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored_json::ColoredFormatter;
use jstype::{Analyzer, ErrorKind, JscAnalyzer, TypeTable, V8Analyzer, JSC_JS_TYPE_HEADER, V8_OBJECTS_HEADER};
use serde::Serialize;
use serde_json::{
    ser::{CompactFormatter, PrettyFormatter},
    Map, Value,
};
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::exit,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("IOError: {0}")]
    Io(#[from] io::Error),
    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Jstype(#[from] jstype::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// V8 `InstanceType` (src/objects.h)
    V8,
    /// JavaScriptCore `JSType` (runtime/JSType.h)
    Jsc,
}

impl Engine {
    fn default_header(self) -> &'static str {
        match self {
            Engine::V8 => V8_OBJECTS_HEADER,
            Engine::Jsc => JSC_JS_TYPE_HEADER,
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(name = "jstype-dump", version, about = "Print the instance type table of a JavaScript engine header")]
pub struct Opt {
    #[arg(short, long, value_enum, default_value_t = Engine::V8)]
    engine: Engine,

    /// print the extracted names in source order instead of the table
    #[arg(short, long)]
    list: bool,

    #[arg(short = 'x', long)]
    hex: bool,

    #[arg(short, long)]
    json: bool,

    #[arg(short, long)]
    compact_output: bool,

    #[arg(short = 'C', long)]
    color_output: bool,

    #[arg(short = 'M', long, overrides_with = "color_output")]
    monochrome_output: bool,

    /// header to read instead of the engine's default path
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Opt {
    fn is_colored(&self) -> bool {
        self.color_output || (!self.monochrome_output && atty::is(atty::Stream::Stdout))
    }

    fn format_code(&self, code: u8) -> String {
        if self.hex {
            format!("{:#04x}", code)
        } else {
            code.to_string()
        }
    }
}

fn write_json<W: Write>(opt: &Opt, w: &mut W, val: &Value) -> Result<(), DumpError> {
    #[allow(clippy::collapsible_else_if)]
    if opt.is_colored() {
        if opt.compact_output {
            let mut ser = serde_json::Serializer::with_formatter(&mut *w, ColoredFormatter::new(CompactFormatter));
            val.serialize(&mut ser)?;
        } else {
            let mut ser = serde_json::Serializer::with_formatter(&mut *w, ColoredFormatter::new(PrettyFormatter::new()));
            val.serialize(&mut ser)?;
        }
    } else {
        if opt.compact_output {
            let mut ser = serde_json::Serializer::with_formatter(&mut *w, CompactFormatter);
            val.serialize(&mut ser)?;
        } else {
            let mut ser = serde_json::Serializer::with_formatter(&mut *w, PrettyFormatter::new());
            val.serialize(&mut ser)?;
        }
    }
    writeln!(w)?;
    Ok(())
}

fn print_list<W: Write>(opt: &Opt, w: &mut W, names: Vec<String>) -> Result<(), DumpError> {
    if opt.json {
        let val = Value::Array(names.into_iter().map(Value::String).collect());
        return write_json(opt, w, &val);
    }
    for name in names {
        writeln!(w, "{}", name)?;
    }
    Ok(())
}

fn print_table<W: Write>(opt: &Opt, w: &mut W, table: TypeTable) -> Result<(), DumpError> {
    if opt.json {
        let map: Map<String, Value> = table
            .into_iter()
            .map(|(code, name)| (opt.format_code(code), Value::String(name)))
            .collect();
        return write_json(opt, w, &Value::Object(map));
    }
    for (code, name) in table.iter() {
        writeln!(w, "{}: {}", opt.format_code(*code), name)?;
    }
    Ok(())
}

fn dump<A: Analyzer>(opt: &Opt, analyzer: A) -> Result<(), DumpError> {
    log::debug!("{} lines", analyzer.document().len());
    let stdout = io::stdout();
    let mut buf = BufWriter::new(stdout.lock());
    if opt.list {
        let names = analyzer
            .process_list()
            .ok_or_else(|| jstype::Error::new(ErrorKind::MarkerNotFound))?;
        log::debug!("{} names", names.len());
        print_list(opt, &mut buf, names)?;
    } else {
        let table = analyzer.process()?;
        log::debug!("{} entries", table.len());
        print_table(opt, &mut buf, table)?;
    }
    buf.flush()?;
    Ok(())
}

fn run(opt: &Opt) -> Result<(), DumpError> {
    let path = match opt.file {
        Some(ref p) => p.clone(),
        None => PathBuf::from(opt.engine.default_header()),
    };
    log::info!("reading {:?} header {}", opt.engine, path.display());
    match opt.engine {
        Engine::V8 => dump(opt, V8Analyzer::open(&path)?),
        Engine::Jsc => dump(opt, JscAnalyzer::open(&path)?),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    #[cfg(windows)]
    let _enabled = colored_json::enable_ansi_support();
    let opt = Opt::parse();
    match run(&opt) {
        Ok(()) => Ok(()),
        Err(DumpError::Jstype(e)) if e.is_not_found() => {
            eprintln!("{}", e);
            exit(2)
        }
        Err(e) => Err(e.into()),
    }
}
