use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};

use linked_list::{LinkedList, ListError, Queue, Stack};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    List,
    Queue,
    Stack,
}

/// Loads values into one of the collections, prints it, then drains it.
#[derive(Parser, Debug)]
#[command(about = "Fun with linked lists, stacks and queues")]
struct CmdOptions {
    /// "Which collection to build"
    #[arg(short, long, value_enum, default_value = "list")]
    kind: Kind,
    /// "Values to insert, in order"
    values: Vec<String>,
    /// "Also insert this many random numbers"
    #[arg(long, default_value = "0")]
    random: usize,
    /// "Seed for the random numbers (random if omitted)"
    #[arg(long)]
    seed: Option<u64>,
    /// "Print the value at this index (list only)"
    #[arg(long, allow_hyphen_values = true)]
    get: Option<f64>,
    /// "Delete the value at this index before draining (list only)"
    #[arg(long, allow_hyphen_values = true)]
    delete: Option<f64>,
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    if options.kind != Kind::List && (options.get.is_some() || options.delete.is_some()) {
        log::error!("--get and --delete only apply to --kind list");
        std::process::exit(1);
    }

    let values = collect_values(&options);
    log::info!("Building a {:?} from {} values", options.kind, values.len());

    let result = match options.kind {
        Kind::List => run_list(values, &options),
        Kind::Queue => {
            run_queue(values);
            Ok(())
        }
        Kind::Stack => {
            run_stack(values);
            Ok(())
        }
    };
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn collect_values(options: &CmdOptions) -> Vec<String> {
    let mut values = options.values.clone();
    if options.random > 0 {
        let mut rng = match options.seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };
        for _ in 0..options.random {
            values.push(rng.gen_range(0..1000).to_string());
        }
    }
    values
}

fn run_list(values: Vec<String>, options: &CmdOptions) -> Result<(), ListError> {
    let mut list: LinkedList<String> = values.into_iter().collect();
    println!("list: {}", list);
    println!("size: {}", list.get_size());

    if let Some(index) = options.get {
        println!("get({}): {}", index, list.get(index)?);
    }
    if let Some(index) = options.delete {
        let removed = list.delete(index)?;
        println!("delete({}): {}", index, removed);
        println!("list: {}", list);
    }

    for (i, value) in list.iter().enumerate() {
        println!("{}: {}", i, value);
    }
    Ok(())
}

fn run_queue(values: Vec<String>) {
    let mut queue: Queue<String> = values.into_iter().collect();
    println!("queue: {}", queue);
    if let Some(front) = queue.peek() {
        println!("front: {}", front);
    }
    while let Some(value) = queue.dequeue() {
        println!("dequeue: {}", value);
    }
    log::info!("Queue drained, size {}", queue.get_size());
}

fn run_stack(values: Vec<String>) {
    let mut stack: Stack<String> = values.into_iter().collect();
    println!("stack: {}", stack);
    if let Some(top) = stack.peek() {
        println!("top: {}", top);
    }
    while let Some(value) = stack.pop() {
        println!("pop: {}", value);
    }
    log::info!("Stack drained, size {}", stack.get_size());
}
