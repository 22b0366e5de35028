//! Interactive menus and protocol transcript printing.
//!
//! The `? - help` and `X - exit` sentinels live entirely here; the core
//! only ever sees in-domain values.

use crate::table;
use dialoguer::Select;
use fairdice_core::{
    CommitPurpose, Counterpart, DiceSet, GameError, Party, Reporter, Result, RoundEvent,
};

/// Dialoguer-backed counterpart: every core request becomes a menu.
pub struct Menus<'a> {
    dice: &'a DiceSet,
}

impl<'a> Menus<'a> {
    pub fn new(dice: &'a DiceSet) -> Self {
        Self { dice }
    }

    /// Run one menu with the help/exit sentinels appended, re-prompting
    /// after help. Returns the position of the chosen in-domain option.
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        loop {
            let mut items = options.to_vec();
            items.push("? - help".to_string());
            items.push("X - exit".to_string());

            let choice = Select::new()
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact()
                .map_err(|err| GameError::channel(err.to_string()))?;

            if choice == options.len() {
                println!("{}", table::probability_table(self.dice));
                continue;
            }
            if choice == options.len() + 1 {
                println!("Exiting the game...");
                std::process::exit(0);
            }
            return Ok(choice);
        }
    }
}

impl Counterpart for Menus<'_> {
    fn guess_coin(&mut self) -> Result<u64> {
        let options: Vec<String> = (0..2).map(|v| format!("{v} - {v}")).collect();
        let choice = self.select("Try to guess my selection.", &options)?;
        Ok(choice as u64)
    }

    fn choose_die(&mut self, available: &[usize]) -> Result<usize> {
        let options: Vec<String> = available
            .iter()
            .map(|&index| format!("{} - {}", index, self.dice[index]))
            .collect();
        let choice = self.select("Choose your dice:", &options)?;
        Ok(available[choice])
    }

    fn modulo_contribution(&mut self, modulus: u64) -> Result<u64> {
        let options: Vec<String> = (0..modulus).map(|v| format!("{v} - {v}")).collect();
        let prompt = format!("Add your number modulo {modulus}.");
        let choice = self.select(&prompt, &options)?;
        Ok(choice as u64)
    }
}

/// Prints the protocol transcript so the player can redo every check.
pub struct Printer;

impl Reporter for Printer {
    fn report(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::CommitmentPublished {
                purpose,
                modulus,
                digest,
            } => {
                match purpose {
                    CommitPurpose::FirstMover => {
                        println!("Let's determine who makes the first move.")
                    }
                    CommitPurpose::Throw(Party::Player) => println!("It's time for your throw."),
                    CommitPurpose::Throw(Party::Computer) => println!("It's time for my throw."),
                }
                println!(
                    "I selected a random value in the range 0..{}",
                    modulus.saturating_sub(1)
                );
                println!("(HMAC: {})", hex::encode(digest));
            }
            RoundEvent::SecretRevealed { revealed, .. } => {
                println!(
                    "My number is {} (KEY: {})",
                    revealed.value,
                    hex::encode(&revealed.key)
                );
                if revealed.verify() {
                    println!("HMAC check: OK");
                } else {
                    println!("HMAC check: MISMATCH - do not trust this result!");
                }
            }
            RoundEvent::FirstMoverDecided { guess, first_mover } => {
                println!("Your selection: {guess}");
                match first_mover {
                    Party::Player => println!("You make the first move."),
                    Party::Computer => println!("I make the first move."),
                }
            }
            RoundEvent::DieClaimed { party, die, .. } => match party {
                Party::Player => println!("You chose the [{die}] dice."),
                Party::Computer => println!("And I chose the [{die}] dice."),
            },
            RoundEvent::ThrowResolved {
                party,
                secret,
                open,
                modulus,
                result,
                face,
            } => {
                println!("The result is {secret} + {open} = {result} (mod {modulus}).");
                match party {
                    Party::Player => println!("Your throw is: {face}"),
                    Party::Computer => println!("My throw is: {face}"),
                }
            }
        }
    }
}
