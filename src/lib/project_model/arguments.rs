//! Types and procedures that represents a compiler argument,
//! or collections of compiler arguments

use std::ops::Deref;

/// Type for represent a single line of an hxml file. It may hold a flag together
/// with its value, like `-cp src`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub value: String,
}

impl Argument {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl AsRef<str> for Argument {
    fn as_ref(&self) -> &str {
        self.value.as_str()
    }
}

/// The ordered sequence of [`Argument`] derived for a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    pub fn push<T: Into<Argument>>(&mut self, arg: T) {
        self.0.push(arg.into())
    }

    pub fn extend<I, T>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument>,
    {
        self.0.extend(iter.into_iter().map(Into::into))
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Into<Argument>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
