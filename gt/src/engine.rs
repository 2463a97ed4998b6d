//! Randomized greeting output

use std::io::Write;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{GreetError, Result};

/// Greeting words the engine picks from
pub const GREETINGS: &[&str] = &[
    "Hello", "Hi", "Howdy", "Hola", "Ciao", "Ahoj", "Buna", "Hey", "Bonjour", "Hallo", "Salut", "Namaste", "Ola",
    "Privet",
];

/// Last line of every exchange
pub const CLOSING_LINE: &str = "I am loving it, but I wish the conference was in-person and we could all be there...";

/// Writes greetings, drawing fresh randomness for every line
pub struct GreetingEngine<'a, R: Rng> {
    rng: R,
    phrases: &'a [&'a str],
}

impl<R: Rng> GreetingEngine<'static, R> {
    /// Engine over the built-in phrase set
    pub fn new(rng: R) -> Self {
        Self { rng, phrases: GREETINGS }
    }
}

impl<'a, R: Rng> GreetingEngine<'a, R> {
    /// Engine over a caller-supplied phrase set
    ///
    /// Falls back to [`GREETINGS`] when `phrases` is empty.
    pub fn with_phrases(rng: R, phrases: &'a [&'a str]) -> Self {
        let phrases = if phrases.is_empty() { GREETINGS } else { phrases };
        Self { rng, phrases }
    }

    pub fn phrases(&self) -> &[&str] {
        self.phrases
    }

    fn phrase(&mut self) -> &'a str {
        // phrases is never empty, see with_phrases
        self.phrases.choose(&mut self.rng).copied().unwrap_or("Hello")
    }

    /// Greet one name picked at random: `"{phrase}, {name}!"`
    pub fn greet_random<S: AsRef<str>>(&mut self, names: &[S], out: &mut impl Write) -> Result<()> {
        let name = names.choose(&mut self.rng).ok_or(GreetError::EmptyInput)?;
        let phrase = self.phrase();
        debug!("greet_random: picked {} from {} names", name.as_ref(), names.len());
        writeln!(out, "{}, {}!", phrase, name.as_ref())?;
        Ok(())
    }

    /// Greet every name in order, each with its own random phrase
    pub fn greet_all<S: AsRef<str>>(&mut self, names: &[S], out: &mut impl Write) -> Result<()> {
        debug!("greet_all: greeting {} names", names.len());
        for name in names {
            let phrase = self.phrase();
            writeln!(out, "{}, {}!", phrase, name.as_ref())?;
        }
        Ok(())
    }

    /// Two distinct entries greet each other, then the closing line
    pub fn greet_each_other<S: AsRef<str>>(&mut self, names: &[S], out: &mut impl Write) -> Result<()> {
        if names.len() < 2 {
            return Err(GreetError::InsufficientInput { count: names.len() });
        }

        let pair: Vec<&S> = names.choose_multiple(&mut self.rng, 2).collect();
        let (first, second) = (pair[0].as_ref(), pair[1].as_ref());
        debug!("greet_each_other: {} and {}", first, second);

        let opening = self.phrase();
        writeln!(out, "{}: {}! How is everyone enjoying the conference?", first, opening)?;
        let reply = self.phrase();
        writeln!(out, "{}: {}! It is great so far, how about you?", second, reply)?;
        writeln!(out, "{}", CLOSING_LINE)?;
        Ok(())
    }
}
