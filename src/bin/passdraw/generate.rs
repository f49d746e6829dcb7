//! The two generation modes, which only differ in where the length comes from.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::ProgError;
use passdraw::{sample_password, AlphabetSpec};

pub(crate) fn interactive(rounds: usize, spec: AlphabetSpec) -> Result<(), ProgError> {
    let alphabet = spec.alphabet();
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for _ in 0..rounds {
        print!("Enter the length of the password : ");
        io::stdout()
            .flush()
            .context("failed to flush the prompt to stdout")?;
        let line = match lines.next() {
            Some(line) => line.context("failed to read a length from stdin")?,
            None => {
                return Err(
                    anyhow::anyhow!("stdin closed while a password length was expected").into(),
                )
            }
        };
        let length: usize = line
            .trim()
            .parse()
            .context("the password length must be a non-negative integer")?;
        let password = sample_password(&mut rng, &alphabet, length)?;
        println!(
            "Your password is : {}",
            console::style(password.as_str()).bold()
        );
    }

    Ok(())
}

pub(crate) fn batch(
    length: usize,
    count: usize,
    json: bool,
    spec: AlphabetSpec,
) -> Result<(), ProgError> {
    let alphabet = spec.alphabet();
    let mut rng = rand::thread_rng();

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(sample_password(&mut rng, &alphabet, length)?);
    }

    if json {
        {
            let stdout = io::stdout().lock();
            serde_json::to_writer(stdout, &passwords)
                .context("failed to write the batch as JSON to stdout")?;
        }
        println!();
    } else {
        for password in &passwords {
            println!("{}", password.as_str());
        }
    }

    Ok(())
}
