//! Example that reads a graph file (or stdin) and prints its analysis.
//!
//! Usage:
//!   cargo run --example analyze -- demos/bowtie.txt
//!   cat path/to/graph.txt | cargo run --example analyze -- --steps
//!   cargo run --example analyze -- path/to/graph.txt --steps --max-steps 20 --timings

mod inner {
    use std::fmt::Display;
    use std::io;
    use std::process;

    use clap::Parser;
    use graph_tours::{
        analysis::GraphAnalysis,
        graph_file::GraphDocument,
        trace::{MAX_RECORDED_STEPS, Trace},
        tracing_support::{dump_method_timings, reset_method_timings},
    };

    /// Read a graph file or stdin and print its Hamiltonian and Eulerian
    /// analysis.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Input graph file path (use '-' or omit to read from stdin)
        input: Option<String>,

        /// Print the narrative of every recorded tour-building step
        #[arg(long)]
        steps: bool,

        /// Max number of steps to record per trace
        #[arg(long, default_value_t = MAX_RECORDED_STEPS)]
        max_steps: usize,

        /// Print the time spent in each algorithm
        #[arg(long)]
        timings: bool,
    }

    pub fn run() {
        let args = Args::parse();
        if args.timings {
            reset_method_timings();
        }

        let result = match args.input.as_deref() {
            Some("-") | None => GraphDocument::read_from(io::stdin().lock()),
            Some(path) => GraphDocument::load(path),
        };
        let document = match result {
            Ok(document) => document,
            Err(err) => {
                eprintln!("Invalid graph file: {err}");
                process::exit(1);
            }
        };
        if let Err(err) = document.layout.check_unique() {
            eprintln!("Warning: {err}");
        }

        let analysis = GraphAnalysis::with_step_cap(&document.graph, args.max_steps);
        print!("{analysis}");

        if args.steps {
            if let Some(trace) = &analysis.hierholzer {
                print_steps("Hierholzer", trace);
            }
            if let Some(trace) = &analysis.fleury {
                print_steps("Fleury", trace);
            }
        }

        if args.timings {
            dump_method_timings();
        }
    }

    fn print_steps<S: Display>(name: &str, trace: &Trace<S>) {
        println!();
        println!("{name} steps:");
        for (i, step) in trace.steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
        if trace.is_truncated() {
            println!(
                "  ... {} more steps not recorded",
                trace.total_steps - trace.steps.len()
            );
        }
    }
}

fn main() {
    inner::run();
}
