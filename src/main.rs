use structopt::StructOpt;

use chaintable::{repl, run_demo, Opt};

fn main() {
    let opt = Opt::from_args();

    let result = if opt.interactive {
        repl(&opt)
    } else {
        run_demo(&opt)
    };

    if let Err(err) = result {
        eprintln!("chaintable: {}", err);
        std::process::exit(64);
    }
}
