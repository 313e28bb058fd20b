use rand::Rng;

/// A lowercase ASCII word of `min_len..=max_len` letters
pub fn random_word<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..=max_len);
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

/// Endless stream of [`random_word`]s
pub fn words<R: Rng>(
    rng: &mut R,
    min_len: usize,
    max_len: usize,
) -> impl Iterator<Item = String> + '_ {
    std::iter::repeat_with(move || random_word(&mut *rng, min_len, max_len))
}
