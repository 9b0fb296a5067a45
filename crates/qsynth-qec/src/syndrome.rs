//! Measured syndrome bit-vectors.

use std::fmt;
use std::str::FromStr;

use crate::error::{QecError, QecResult};

/// Stabilizer measurement outcomes, one bit per syndrome qubit.
///
/// Bit `i` is index-aligned with syndrome qubit `i` of a
/// [`SurfaceCodeTopology`](crate::SurfaceCodeTopology).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Syndrome {
    bits: Vec<bool>,
}

impl Syndrome {
    /// All-zero syndrome of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Syndrome from explicit bits.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Parse a string of `0` and `1` characters.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// ```rust
    /// use qsynth_qec::Syndrome;
    ///
    /// let syndrome = Syndrome::parse("0100").unwrap();
    /// assert_eq!(syndrome.flagged().collect::<Vec<_>>(), vec![1]);
    /// assert!(Syndrome::parse("01x0").is_err());
    /// ```
    pub fn parse(text: &str) -> QecResult<Self> {
        text.trim()
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(QecError::InvalidSyndrome { position, found }),
            })
            .collect::<QecResult<Vec<_>>>()
            .map(|bits| Self { bits })
    }

    /// Set bit `index`, growing the syndrome with zeros if needed.
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits[index] = value;
    }

    /// Bit at `index`; `false` past the end.
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the syndrome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Indices of set bits in ascending order.
    pub fn flagged(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Number of set bits.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl FromStr for Syndrome {
    type Err = QecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
