//! Whitespace-separated text input.

use std::{fmt::Display, str::FromStr, str::SplitWhitespace};

use crate::error::ContainerError;

/// A cursor over the whitespace-separated tokens of some text.
///
/// The same scanner can be handed to several containers in turn, each one consuming exactly as
/// many tokens as it has elements.
#[derive(Debug)]
pub struct Scanner<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the first token of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    /// Return the number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parse the next `dst.len()` tokens into `dst`, in order.
    ///
    /// Elements are overwritten as they are parsed, so on failure the leading part of `dst` may
    /// already hold new values.
    pub fn fill<T>(&mut self, dst: &mut [T]) -> Result<(), ContainerError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let expected = dst.len();
        for (found, slot) in dst.iter_mut().enumerate() {
            let Some(token) = self.tokens.next() else {
                log::debug!("input exhausted after {} of {} tokens", found, expected);
                return Err(ContainerError::UnexpectedEnd { expected, found });
            };
            *slot = token.parse().map_err(|err: T::Err| ContainerError::Parse {
                position: self.position,
                token: token.to_string(),
                reason: err.to_string(),
            })?;
            self.position += 1;
        }
        log::trace!("read {} tokens, now at {}", expected, self.position);
        Ok(())
    }
}
