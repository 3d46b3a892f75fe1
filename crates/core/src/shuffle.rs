use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items` (Fisher–Yates), leaving the input untouched.
#[must_use]
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = rng();
    shuffled_with(items, &mut rng)
}

/// [`shuffled`] with a caller-supplied random source.
#[must_use]
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.as_mut_slice().shuffle(rng);
    out
}
