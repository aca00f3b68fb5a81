//! Splitting and reshaping arrays, plus a small printed walkthrough.

use std::io::Write;

use ndarray::{Array, Array1, ArrayD, Axis, Dimension, ErrorKind, IxDyn, ShapeError};

use crate::error::{Error, Result};

/// Split `array` into `sections` equal contiguous pieces along `axis`.
/// Negative axes count from the last one.
pub fn split<A, D>(array: &Array<A, D>, sections: usize, axis: isize) -> Result<Vec<Array<A, D>>>
where
    A: Clone,
    D: Dimension,
{
    let ndim = array.ndim() as isize;
    let resolved = if axis < 0 { axis + ndim } else { axis };
    if resolved < 0 || resolved >= ndim {
        return Err(ShapeError::from_kind(ErrorKind::OutOfBounds).into());
    }

    let axis = Axis(resolved as usize);
    let len = array.len_of(axis);
    if sections == 0 || len % sections != 0 {
        return Err(Error::InvalidSplit { len, sections });
    }
    if len == 0 {
        return Ok(vec![array.clone(); sections]);
    }

    Ok(array
        .axis_chunks_iter(axis, len / sections)
        .map(|chunk| chunk.to_owned())
        .collect())
}

/// Reinterpret `array` with a new shape of the same element count.
pub fn reshape<A, D>(array: Array<A, D>, shape: &[usize]) -> Result<ArrayD<A>>
where
    A: Clone,
    D: Dimension,
{
    let array = array.as_standard_layout().into_owned().into_dyn();
    Ok(array.into_shape(IxDyn(shape))?)
}

fn print_pieces<A, D>(out: &mut impl Write, pieces: &[Array<A, D>]) -> Result<()>
where
    A: std::fmt::Display,
    D: Dimension,
{
    let rendered: Vec<String> = pieces.iter().map(|piece| piece.to_string()).collect();
    writeln!(out, "[{}]", rendered.join(", "))?;
    Ok(())
}

/// Split `0..9` into three, reshape it to 3x3, then split the matrix into
/// three columns.
pub fn run_demo(out: &mut impl Write) -> Result<()> {
    let x: Array1<f64> = Array::range(0.0, 9.0, 1.0);

    let y = split(&x, 3, 0)?;
    print_pieces(out, &y)?;

    let z = reshape(x, &[3, 3])?;
    writeln!(out, "{}", z)?;

    let w = split(&z, 3, -1)?;
    print_pieces(out, &w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_array_abs_diff_eq;
    use ndarray::array;

    fn arange9() -> Array1<f64> {
        Array::range(0.0, 9.0, 1.0)
    }

    #[test]
    fn test_split_vector() {
        let pieces = split(&arange9(), 3, 0).unwrap();
        assert_eq!(pieces, vec![array![0., 1., 2.], array![3., 4., 5.], array![6., 7., 8.]]);
    }

    #[test]
    fn test_reshape() {
        let z = reshape(arange9(), &[3, 3]).unwrap();
        let expected = array![[0., 1., 2.], [3., 4., 5.], [6., 7., 8.]].into_dyn();
        assert_array_abs_diff_eq(&z, &expected, 0.0);
    }

    #[test]
    fn test_split_matrix_last_axis() {
        let z = reshape(arange9(), &[3, 3]).unwrap();
        let pieces = split(&z, 3, -1).unwrap();

        assert_eq!(pieces.len(), 3);
        let expected = [
            array![[0.], [3.], [6.]],
            array![[1.], [4.], [7.]],
            array![[2.], [5.], [8.]],
        ];
        for (piece, expected) in pieces.iter().zip(expected) {
            assert_eq!(piece.shape(), &[3, 1]);
            assert_array_abs_diff_eq(piece, &expected.into_dyn(), 0.0);
        }
    }

    #[test]
    fn test_uneven_split() {
        assert!(matches!(
            split(&arange9(), 4, 0),
            Err(Error::InvalidSplit { len: 9, sections: 4 })
        ));
        assert!(matches!(
            split(&arange9(), 0, 0),
            Err(Error::InvalidSplit { len: 9, sections: 0 })
        ));
    }

    #[test]
    fn test_split_axis_out_of_bounds() {
        assert!(matches!(split(&arange9(), 3, 1), Err(Error::Shape(_))));
        assert!(matches!(split(&arange9(), 3, -2), Err(Error::Shape(_))));
    }

    #[test]
    fn test_reshape_element_count_mismatch() {
        assert!(matches!(reshape(arange9(), &[2, 4]), Err(Error::Shape(_))));
    }

    #[test]
    fn test_run_demo() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().next().unwrap(), "[[0, 1, 2], [3, 4, 5], [6, 7, 8]]");
    }
}
