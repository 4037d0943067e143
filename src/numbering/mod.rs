//! Hierarchical section numbering

use crate::types::NumberingError;

/// Outline counter for one pass over a document.
///
/// The first heading fixes the baseline: whatever its marker count, it is
/// numbered as a top-level section. Every later heading is numbered relative
/// to that baseline.
///
/// # Examples
/// ```
/// use mkdtoc::numbering::SectionNumberer;
///
/// let mut numberer = SectionNumberer::new();
/// assert_eq!(numberer.number(2).unwrap(), "1");
/// assert_eq!(numberer.number(3).unwrap(), "1.1");
/// assert_eq!(numberer.number(3).unwrap(), "1.2");
/// assert_eq!(numberer.number(2).unwrap(), "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionNumberer {
    baseline: Option<usize>,
    /// `counts[k]` is the current count at relative level `k + 1`
    counts: Vec<usize>,
}

impl SectionNumberer {
    /// Create a numberer with no baseline yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute level of the first heading seen, if any
    pub fn baseline(&self) -> Option<usize> {
        self.baseline
    }

    /// Relative level of `absolute_level` against the baseline.
    ///
    /// Returns `None` before the first heading, or when the level is above
    /// the baseline.
    pub fn relative_level(&self, absolute_level: usize) -> Option<usize> {
        let baseline = self.baseline?;
        (absolute_level + 1).checked_sub(baseline).filter(|&l| l >= 1)
    }

    /// Number the next heading.
    ///
    /// On error the counters are left as they were; callers abandon the pass.
    pub fn number(&mut self, absolute_level: usize) -> Result<String, NumberingError> {
        let baseline = *self.baseline.get_or_insert(absolute_level);
        let level = self
            .relative_level(absolute_level)
            .ok_or(NumberingError::OutOfRange {
                level: absolute_level,
                baseline,
            })?;

        if level > 1 && self.count_at(level - 1) == 0 {
            return Err(NumberingError::SkipLevel {
                level,
                parent: level - 1,
            });
        }

        if self.counts.len() < level {
            self.counts.resize(level, 0);
        }
        self.counts[level - 1] += 1;
        for deeper in self.counts.iter_mut().skip(level) {
            *deeper = 0;
        }

        Ok(self.counts[..level]
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("."))
    }

    fn count_at(&self, level: usize) -> usize {
        self.counts.get(level - 1).copied().unwrap_or(0)
    }
}
