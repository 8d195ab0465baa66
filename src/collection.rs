use crate::figure::Figure;

/// Insertion-ordered store of figures. Grows by `append`, shrinks only by
/// `remove_where`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    figures: Vec<Figure>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn count(&self) -> usize {
        self.figures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
    pub fn append(&mut self, figure: Figure) {
        self.figures.push(figure);
    }
    /// Keeps the ordered subsequence for which `predicate` is false. Each
    /// element is tested exactly once, in order. Returns how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Figure) -> bool) -> usize {
        let before = self.figures.len();
        self.figures.retain(|f| !predicate(f));
        before - self.figures.len()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Figure> {
        self.figures.iter()
    }
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Figure;
    type IntoIter = std::slice::Iter<'a, Figure>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ------------------------------- Tests ------------------------------------ //
