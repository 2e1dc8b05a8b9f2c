/// Per-depth step sizes: the node expanded at depth `d` offsets its children
/// by `steps[d]`. The length of the sequence bounds how deep any driver can
/// go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSequence(Vec<u32>);

impl StepSequence {
    pub fn new(steps: Vec<u32>) -> Self {
        Self(steps)
    }

    /// Step size for expansions at `depth`, or `None` past the end.
    #[inline]
    pub fn get(&self, depth: usize) -> Option<u32> {
        self.0.get(depth).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for StepSequence {
    fn from(steps: Vec<u32>) -> Self {
        Self(steps)
    }
}

impl<const N: usize> From<[u32; N]> for StepSequence {
    fn from(steps: [u32; N]) -> Self {
        Self(steps.to_vec())
    }
}

impl FromIterator<u32> for StepSequence {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_past_end_is_none() {
        let steps = StepSequence::from([9, 3]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.get(0), Some(9));
        assert_eq!(steps.get(1), Some(3));
        assert_eq!(steps.get(2), None);
    }

    #[test]
    fn empty_sequence() {
        let steps: StepSequence = std::iter::empty().collect();
        assert!(steps.is_empty());
        assert_eq!(steps.get(0), None);
    }
}
