use approx::AbsDiffEq;
use ndarray::{ArrayBase, Data, Dimension, Zip};

/// Assert that two arrays have the same shape and are element-wise equal
/// within `epsilon`.
pub fn assert_array_abs_diff_eq<A, S, D>(a: &ArrayBase<S, D>, b: &ArrayBase<S, D>, epsilon: A)
where
    A: AbsDiffEq<Epsilon = A> + std::fmt::Display + Copy,
    S: Data<Elem = A>,
    D: Dimension,
{
    assert_eq!(a.shape(), b.shape(), "arrays differ in shape");

    Zip::from(a)
        .and(b)
        .for_each(|ai, bi| {
            assert!(
                A::abs_diff_eq(ai, bi, epsilon),
                "elements differ: {} vs {}, outside tolerance {}",
                ai,
                bi,
                epsilon
            );
        });
}
