use std::io;

use plum_rules::terminal::terminal_top::run_stdio_loop;

fn main() -> io::Result<()> {
    run_stdio_loop()
}
