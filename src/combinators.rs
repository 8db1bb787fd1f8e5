//! Small generic function combinators.

/// A function that ignores its argument and always returns `x`.
pub fn constant<T: Clone, K>(x: T) -> impl Fn(K) -> T {
    move |_| x.clone()
}

/// Apply `f` to `y`, then to the result.
pub fn twice<T>(f: impl Fn(T) -> T, y: T) -> T {
    f(f(y))
}
