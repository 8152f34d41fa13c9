/// A permutation in the mathematical sense.
pub trait Permutation<T: Clone>: Clone {
    /// Permute the given input, returning the result.
    fn permute(&self, mut input: T) -> T {
        self.permute_mut(&mut input);
        input
    }

    /// Permute the given input in place.
    fn permute_mut(&self, input: &mut T);
}

/// A permutation thought to be cryptographically secure, in the sense that it is thought to be
/// difficult to distinguish (in a nontrivial way) from a random permutation.
pub trait CryptographicPermutation<T: Clone>: Permutation<T> {}
