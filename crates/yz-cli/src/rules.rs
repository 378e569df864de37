//! The `--rules` output.

use colored::Colorize;
use yz_engine::help::{RULES, VERSION};

/// Print the rules of the game to stdout.
pub fn print() {
    println!("{}", "Rules of the Game".bold());
    println!();
    for line in RULES {
        println!("  {line}");
    }
    println!();
    println!("{}", "Keys".bold());
    println!("  a-e          mark dice to re-roll");
    println!("  1-6          score the upper section");
    println!("  t f h s l y x  score three/four of a kind, full house,");
    println!("               small/large straight, yahtzee, chance");
    println!("  space/enter  push the button");
    println!("  ?            help");
    println!();
    println!("{}", VERSION.dimmed());
}
