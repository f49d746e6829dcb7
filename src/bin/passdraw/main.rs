use std::process;

use clap::Parser;

use passdraw::AlphabetSpec;

mod generate;

#[derive(Parser)]
enum Args {
    /// Prompt for a password length and draw a password, for a fixed number
    /// of rounds.
    Interactive {
        /// How many passwords to generate before exiting.
        #[arg(long, default_value_t = 10)]
        rounds: usize,
        #[command(flatten)]
        classes: ClassArgs,
    },
    /// Draw a batch of fixed-length passwords, one per line.
    Batch {
        /// The length of each password.
        #[arg(long, default_value_t = 20)]
        length: usize,
        /// How many passwords to draw.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Print the batch as a JSON array instead of one password per line.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        classes: ClassArgs,
    },
}

#[derive(clap::Args)]
struct ClassArgs {
    /// Leave uppercase letters out of the alphabet.
    #[arg(long)]
    no_uppercase: bool,
    /// Leave lowercase letters out of the alphabet.
    #[arg(long)]
    no_lowercase: bool,
    /// Leave digits out of the alphabet.
    #[arg(long)]
    no_digits: bool,
    /// Leave symbols out of the alphabet.
    #[arg(long)]
    no_symbols: bool,
}

impl ClassArgs {
    fn apply(&self, mut spec: AlphabetSpec) -> AlphabetSpec {
        if self.no_uppercase {
            spec.uppercase = false;
        }
        if self.no_lowercase {
            spec.lowercase = false;
        }
        if self.no_digits {
            spec.digits = false;
        }
        if self.no_symbols {
            spec.symbols = false;
        }
        spec
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Interactive { rounds, classes } => {
            generate::interactive(rounds, classes.apply(AlphabetSpec::interactive()))?
        }
        Args::Batch {
            length,
            count,
            json,
            classes,
        } => generate::batch(length, count, json, classes.apply(AlphabetSpec::batch()))?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Cannot generate the password: {0}")]
    Sample(passdraw::InvalidLengthError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passdraw::InvalidLengthError> for ProgError {
    fn from(err: passdraw::InvalidLengthError) -> ProgError {
        ProgError::Sample(err)
    }
}
