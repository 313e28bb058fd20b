/// Shorthand for `Entry::new(key, value)`
#[macro_export]
macro_rules! entry {
    ( $key: expr, $value: expr) => {
        $crate::Entry::new($key, $value)
    };
}
