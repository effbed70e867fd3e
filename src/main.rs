use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use frontend::{
    ast::{
        expressions::{BinaryOp, FunctionCall, Identifier, Literal, SuffixOp, UnaryOp},
        json::JsonVisitor,
        printer::SourcePrinter,
        statements::{Assignment, Program},
        visitor::{walk_program, Visitor},
        Node,
    },
    errors::errors::Error,
    files::{read_file, FileCache, SharedFileCache},
    lexer::lexer::tokenize,
    parser::parse,
};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One token per line
    Tokens,
    /// The syntax tree as JSON
    Tree,
    /// Canonical source reconstructed from the tree
    Source,
    /// Node counts for a few interesting variants
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "helix-frontend", about = "Lex and parse a Helix source file")]
struct Cli {
    /// Source file to read
    file: PathBuf,

    /// What to print once the file has been parsed
    #[arg(long, value_enum, default_value_t = Emit::Source)]
    emit: Emit,

    /// Log phase timings and parser decisions
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default, Debug)]
struct Stats {
    literals: usize,
    identifiers: usize,
    operators: usize,
    calls: usize,
    assignments: usize,
}

impl Visitor for Stats {
    fn visit_literal(&mut self, _node: &Node, _literal: &Literal) {
        self.literals += 1;
    }

    fn visit_identifier(&mut self, _node: &Node, _ident: &Identifier) {
        self.identifiers += 1;
    }

    fn visit_binary_op(&mut self, _node: &Node, _op: &BinaryOp) {
        self.operators += 1;
    }

    fn visit_unary_op(&mut self, _node: &Node, _op: &UnaryOp) {
        self.operators += 1;
    }

    fn visit_suffix_op(&mut self, _node: &Node, _op: &SuffixOp) {
        self.operators += 1;
    }

    fn visit_function_call(&mut self, _node: &Node, _call: &FunctionCall) {
        self.calls += 1;
    }

    fn visit_assignment(&mut self, _node: &Node, _assignment: &Assignment) {
        self.assignments += 1;
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let files = SharedFileCache::new();

    match run(&cli, &files) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", error.render(&files));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, files: &dyn FileCache) -> Result<String, Error> {
    let start = Instant::now();
    let source = read_file(files, &cli.file)?;
    let file_name = cli.file.to_string_lossy().into_owned();

    let tokens = tokenize(&source, Some(file_name.as_str()))?;
    tracing::info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if cli.emit == Emit::Tokens {
        let lines: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        return Ok(lines.join("\n") + "\n");
    }

    let parse_start = Instant::now();
    let program = parse(&tokens, &file_name)?;
    tracing::info!(elapsed = ?parse_start.elapsed(), statements = program.statements.len(), "parsed");

    Ok(match cli.emit {
        Emit::Tree => format!("{:#}\n", JsonVisitor::program_to_json(&program)),
        Emit::Stats => format_stats(&program),
        _ => SourcePrinter::print_program(&program),
    })
}

fn format_stats(program: &Program) -> String {
    let mut stats = Stats::default();
    walk_program(program, &mut stats);

    format!(
        "statements: {}\nliterals: {}\nidentifiers: {}\noperators: {}\ncalls: {}\nassignments: {}\n",
        program.statements.len(),
        stats.literals,
        stats.identifiers,
        stats.operators,
        stats.calls,
        stats.assignments,
    )
}
