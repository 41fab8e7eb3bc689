//! Option matching and the left-to-right parse driver.
//!
//! Each argument is classified with [`classify`] and, for option tokens,
//! matched against the descriptor slice by scan order. The first descriptor
//! that matches wins.
//!
//! A value-taking option without an embedded value consumes the next argument
//! unconditionally, even when that argument looks like another option.
//! Option tokens that match no descriptor are dropped: they are neither
//! recorded nor reported as free arguments.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::token::{ClassifiedToken, classify};
use crate::types::{FREE_ARGS_SENTINEL, OptionDescriptor, ParseOutcome, ParsedValue, ValuePolicy};

/// How a word label is compared against descriptor words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WordMatch {
    /// The label must equal the descriptor word (the default).
    #[default]
    Exact,
    /// Only the first `label.len()` bytes of the descriptor word are
    /// compared, so `--ver` matches a `verbose` descriptor and an empty
    /// label matches the first word descriptor.
    LabelPrefix,
}

/// What happens when a value-requiring option is the last argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingValue {
    /// Fail with [`ParseError::MissingValue`] (the default).
    #[default]
    Error,
    /// Mark the option seen and leave its value empty.
    Absent,
}

/// Parser behavior knobs.
///
/// # Examples
///
/// ```
/// use optscan_core::{MissingValue, ParserConfig, WordMatch};
///
/// let config = ParserConfig::default();
/// assert!(config.skip_program_name);
/// assert_eq!(config.word_match, WordMatch::Exact);
/// assert_eq!(config.missing_value, MissingValue::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Treat argument 0 as the program name and never classify it.
    pub skip_program_name: bool,
    /// Word label comparison.
    pub word_match: WordMatch,
    /// End-of-input policy for value-requiring options.
    pub missing_value: MissingValue,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_program_name: true,
            word_match: WordMatch::Exact,
            missing_value: MissingValue::Error,
        }
    }
}

/// Parses argument vectors against a fixed descriptor slice.
///
/// A parser holds no mutable state; one instance may be reused for any
/// number of parses.
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionDescriptor, Parser};
///
/// let options = [
///     OptionDescriptor::flag(Some('a'), None),
///     OptionDescriptor::with_value(Some('c'), None),
/// ];
/// let parser = Parser::new(&options);
///
/// let outcome = parser.parse(&["prog", "-c", "-a", "rest"]).unwrap();
/// // "-a" was consumed as the value of "-c".
/// assert!(!outcome.is_seen(0));
/// assert_eq!(outcome.value(1), Some("-a"));
/// assert_eq!(outcome.free_args, vec![3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'o> {
    options: &'o [OptionDescriptor],
    config: ParserConfig,
}

impl<'o> Parser<'o> {
    /// Creates a parser with the default [`ParserConfig`].
    pub fn new(options: &'o [OptionDescriptor]) -> Self {
        Self::with_config(options, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    pub fn with_config(options: &'o [OptionDescriptor], config: ParserConfig) -> Self {
        Self { options, config }
    }

    /// Returns the descriptors this parser matches against.
    pub fn options(&self) -> &'o [OptionDescriptor] {
        self.options
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses `args`, returning one [`ParsedValue`] per descriptor and the
    /// indices of every free argument.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyArguments`] or [`ParseError::NoOptions`]
    /// when either input is empty, and [`ParseError::MissingValue`] when a
    /// value-requiring option ends the input under [`MissingValue::Error`].
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseOutcome> {
        self.check_inputs(args)?;

        let mut outcome = ParseOutcome {
            values: vec![ParsedValue::default(); self.options.len()],
            free_args: Vec::new(),
        };
        self.scan(args, &mut outcome)?;
        Ok(outcome)
    }

    /// Parses `args` into caller-owned buffers.
    ///
    /// `values` must hold exactly one slot per descriptor and `free_args` at
    /// least `args.len() + 1` slots. Free-argument indices are written in
    /// order and followed by [`FREE_ARGS_SENTINEL`]. Returns the number of
    /// free arguments. On error neither buffer is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::{OptionDescriptor, ParsedValue, Parser};
    ///
    /// let options = [OptionDescriptor::flag(Some('a'), None)];
    /// let args = ["prog", "x", "-a", "y"];
    /// let mut values = vec![ParsedValue::default(); options.len()];
    /// let mut free_args = [0isize; 5];
    ///
    /// let count = Parser::new(&options)
    ///     .parse_into(&args, &mut values, &mut free_args)
    ///     .unwrap();
    /// assert_eq!(count, 2);
    /// assert_eq!(&free_args[..3], &[1, 3, -1]);
    /// assert!(values[0].seen);
    /// ```
    pub fn parse_into<S: AsRef<str>>(
        &self,
        args: &[S],
        values: &mut [ParsedValue],
        free_args: &mut [isize],
    ) -> Result<usize> {
        self.check_inputs(args)?;
        if values.len() != self.options.len() {
            return Err(ParseError::ValueBufferSize {
                expected: self.options.len(),
                actual: values.len(),
            });
        }
        let required = args.len() + 1;
        if free_args.len() < required {
            return Err(ParseError::FreeArgBufferSize {
                required,
                actual: free_args.len(),
            });
        }

        let outcome = self.parse(args)?;
        values.clone_from_slice(&outcome.values);
        let count = outcome.free_args.len();
        for (slot, &index) in free_args.iter_mut().zip(&outcome.free_args) {
            *slot = index as isize;
        }
        free_args[count] = FREE_ARGS_SENTINEL;
        Ok(count)
    }

    fn check_inputs<S: AsRef<str>>(&self, args: &[S]) -> Result<()> {
        if args.is_empty() {
            return Err(ParseError::EmptyArguments);
        }
        if self.options.is_empty() {
            return Err(ParseError::NoOptions);
        }
        Ok(())
    }

    fn scan<S: AsRef<str>>(&self, args: &[S], outcome: &mut ParseOutcome) -> Result<()> {
        let mut index = usize::from(self.config.skip_program_name);

        while index < args.len() {
            let arg = args[index].as_ref();
            let token = classify(arg);
            trace!(index, ?token, "Classified argument");

            match token {
                ClassifiedToken::Separator => {
                    debug!(index, "Separator reached, remaining arguments are free");
                    outcome.free_args.extend(index + 1..args.len());
                    return Ok(());
                }
                ClassifiedToken::Free => outcome.free_args.push(index),
                ClassifiedToken::Short { .. } | ClassifiedToken::Word { .. } => {
                    match self.find_option(&token) {
                        Some(position) => {
                            index = self.record(position, &token, args, index, outcome)?;
                        }
                        None => debug!(index, argument = arg, "Dropping unmatched option"),
                    }
                }
            }
            index += 1;
        }

        Ok(())
    }

    /// Marks the descriptor at `position` seen and stores its value.
    /// Returns the index of the last argument consumed.
    fn record<S: AsRef<str>>(
        &self,
        position: usize,
        token: &ClassifiedToken<'_>,
        args: &[S],
        index: usize,
        outcome: &mut ParseOutcome,
    ) -> Result<usize> {
        let descriptor = &self.options[position];
        let slot = &mut outcome.values[position];
        slot.seen = true;

        if !descriptor.takes_value() {
            return Ok(index);
        }
        if let Some(value) = token.embedded_value() {
            slot.value = Some(value.to_string());
            return Ok(index);
        }

        match args.get(index + 1) {
            Some(next) => {
                slot.value = Some(next.as_ref().to_string());
                Ok(index + 1)
            }
            None => match (descriptor.policy, self.config.missing_value) {
                (ValuePolicy::ValueRequired, MissingValue::Error) => {
                    Err(ParseError::MissingValue {
                        option: descriptor.display_name(),
                        index,
                    })
                }
                _ => Ok(index),
            },
        }
    }

    fn find_option(&self, token: &ClassifiedToken<'_>) -> Option<usize> {
        match *token {
            ClassifiedToken::Short { letter, .. } => {
                self.options.iter().position(|o| o.short == Some(letter))
            }
            ClassifiedToken::Word { label, .. } => self.options.iter().position(|o| {
                o.word
                    .as_deref()
                    .is_some_and(|word| self.word_matches(word, label))
            }),
            ClassifiedToken::Free | ClassifiedToken::Separator => None,
        }
    }

    fn word_matches(&self, word: &str, label: &str) -> bool {
        match self.config.word_match {
            WordMatch::Exact => word == label,
            WordMatch::LabelPrefix => word.as_bytes().starts_with(label.as_bytes()),
        }
    }
}

/// Parses `args` against `options` with the default [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionDescriptor, parse};
///
/// let options = [OptionDescriptor::flag(Some('a'), None)];
/// let outcome = parse(&["prog", "--", "-a"], &options).unwrap();
/// assert!(!outcome.is_seen(0));
/// assert_eq!(outcome.free_args, vec![2]);
/// ```
pub fn parse<S: AsRef<str>>(args: &[S], options: &[OptionDescriptor]) -> Result<ParseOutcome> {
    Parser::new(options).parse(args)
}
