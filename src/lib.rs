use const_format::formatcp;
use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

pub mod hash;
pub mod table;

pub use table::{HashTable, TableError};

pub const DEFAULT_CAPACITY: usize = 2;

const HELP: &str = formatcp!(
    "commands:\n  \
     insert <key> <value>\n  \
     get <key>\n  \
     remove <key>\n  \
     resize\n  \
     capacity\n  \
     help\n  \
     quit\n\
     tables start with {} buckets unless -n is given",
    DEFAULT_CAPACITY
);

#[derive(StructOpt, Debug, Default)]
pub struct Opt {
    #[structopt(short = "n", long = "capacity")]
    pub capacity: Option<usize>,

    #[structopt(short = "i", long = "interactive")]
    pub interactive: bool,

    #[structopt(short = "t", long = "trace_operations")]
    pub trace_operations: bool,
}

impl Opt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }
}

fn trace(opt: &Opt, op: &str, key: &str, table: &HashTable) {
    if opt.trace_operations {
        println!(
            "{} {:?} -> bucket {}",
            op,
            key,
            hash::hash(key, table.capacity())
        );
    }
}

/// Replays the scripted demonstration: populate a small table past its
/// bucket count, read everything back, then double it.
pub fn run_demo(opt: &Opt) -> Result<(), TableError> {
    let mut table = HashTable::new(opt.initial_capacity())?;

    for (key, value) in [
        ("line_1", "Tiny hash table"),
        ("line_2", "Filled beyond capacity"),
        ("line_3", "Linked list saves the day!"),
        ("line_3", "new: Linked list saves the day!"),
    ] {
        trace(opt, "insert", key, &table);
        table.insert(key, value);
    }

    for key in ["line_1", "line_2", "line_3"] {
        trace(opt, "get", key, &table);
        println!("{}", table.retrieve(key).unwrap_or("(not found)"));
    }

    let old_capacity = table.capacity();
    let table = table.resize();
    println!(
        "\nResizing hash table from {} to {}.",
        old_capacity,
        table.capacity()
    );

    for key in ["line_1", "line_2", "line_3"] {
        trace(opt, "get", key, &table);
        println!("{}", table.retrieve(key).unwrap_or("(not found)"));
    }

    Ok(())
}

pub fn repl(opt: &Opt) -> Result<(), TableError> {
    let mut table = HashTable::new(opt.initial_capacity())?;
    let mut rl = Editor::<()>::new();

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => {
                eprintln!("read error: {}", err);
                return Ok(());
            }
        };
        rl.add_history_entry(line.as_str());

        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("insert") => match words.collect_tuple() {
                Some((key, value)) => {
                    trace(opt, "insert", key, &table);
                    table.insert(key, value);
                }
                None => println!("usage: insert <key> <value>"),
            },
            Some("get") => match words.collect_tuple() {
                Some((key,)) => {
                    trace(opt, "get", key, &table);
                    println!("{}", table.retrieve(key).unwrap_or("(not found)"));
                }
                None => println!("usage: get <key>"),
            },
            Some("remove") => match words.collect_tuple() {
                Some((key,)) => {
                    trace(opt, "remove", key, &table);
                    table.remove(key);
                }
                None => println!("usage: remove <key>"),
            },
            Some("resize") => {
                let old_capacity = table.capacity();
                table = table.resize();
                println!("resized from {} to {} buckets", old_capacity, table.capacity());
            }
            Some("capacity") => println!("{}", table.capacity()),
            Some("help") => println!("{}", HELP),
            Some("quit") | Some("exit") => return Ok(()),
            Some(other) => println!("unknown command {:?} (try 'help')", other),
        }
    }
}
