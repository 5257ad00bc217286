//! Karnaugh Logic - command line interface
//!
//! Reads one expression, prints its truth table, canonical forms, and the
//! minimization results of both methods. All validation happens in the
//! library; this binary only formats and reports.

use clap::Parser;
use karnaugh_logic::cover::Form;
use karnaugh_logic::{BoolFunction, Cover, Syntax, TruthTable};
use std::io::{self, BufRead};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "karnaugh")]
#[command(about = "Truth tables, normal forms, and two-method Boolean minimization", long_about = None)]
struct Args {
    /// Expression to process (read from stdin when omitted)
    expression: Option<String>,

    /// Variable alphabet accepted in expressions
    #[arg(short, long, default_value = "abcde")]
    alphabet: String,

    /// Also tabulate every compound sub-expression
    #[arg(short, long)]
    detailed: bool,
}

fn main() {
    let args = Args::parse();

    let expression = match args.expression {
        Some(expression) => expression,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
            line
        }
    };

    let syntax = Syntax::new(args.alphabet.chars());
    if let Err(e) = run(&expression, &syntax, args.detailed) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(input: &str, syntax: &Syntax, detailed: bool) -> io::Result<()> {
    let function = BoolFunction::parse_with_syntax(input, syntax)?;

    if detailed {
        let table = TruthTable::build_detailed(function.expression())?;
        print!("{}", table);
    } else {
        print!("{}", function.table());
    }

    let index = function.table().index_form();
    println!();
    println!("Index form: {} = {}", index.binary, index.decimal);

    let forms = function.forms();
    println!();
    println!("Canonical DNF: {}", rendered(forms.dnf()));
    println!("  true rows:   {:?}", forms.dnf_indices());
    println!("Canonical CNF: {}", rendered(forms.cnf()));
    println!("  false rows:  {:?}", forms.cnf_indices());

    println!();
    println!("Consensus DNF: {}", rendered(&function.minimal_dnf()));
    println!("Consensus CNF: {}", rendered(&function.minimal_cnf()));

    println!();
    match function.karnaugh_map() {
        Ok(map) => {
            print!("{}", map);
            println!("Karnaugh DNF:  {}", rendered(&map.minimize(Form::Dnf)));
            println!("Karnaugh CNF:  {}", rendered(&map.minimize(Form::Cnf)));
        }
        Err(e) => println!("Karnaugh map skipped: {}", e),
    }
    Ok(())
}

fn rendered(cover: &Cover) -> String {
    if cover.is_empty() {
        "(empty)".to_string()
    } else {
        cover.to_string()
    }
}
