//! Dense vector/matrix primitives used by the power-iteration engine
//!
//! Every primitive writes into a caller-owned buffer so the engine can reuse
//! its scratch space across iterations, and hands that buffer back.

use crate::error::{AlgoError, AlgoResult};
use ndarray::{Array1, Array2, Zip};

fn check_len(len: usize, expected: usize) -> AlgoResult<()> {
    if len != expected {
        return Err(AlgoError::IndexOutOfRange {
            index: len,
            size: expected,
        });
    }
    Ok(())
}

/// `result[i] += Σ_j a[i][j] * x[j]`
///
/// Accumulates: the existing contents of `result` are kept, so callers that
/// need a plain product must zero the buffer first.
pub fn add_matrix_vector<'r>(
    a: &Array2<f64>,
    x: &Array1<f64>,
    result: &'r mut Array1<f64>,
) -> AlgoResult<&'r mut Array1<f64>> {
    let n = x.len();
    check_len(a.nrows(), n)?;
    check_len(a.ncols(), n)?;
    check_len(result.len(), n)?;

    Zip::from(&mut *result)
        .and(a.rows())
        .for_each(|r, row| *r += row.dot(x));

    Ok(result)
}

/// `result[i] = x[i] + y[i]`
pub fn add_vector_vector<'r>(
    x: &Array1<f64>,
    y: &Array1<f64>,
    result: &'r mut Array1<f64>,
) -> AlgoResult<&'r mut Array1<f64>> {
    check_len(y.len(), x.len())?;
    check_len(result.len(), x.len())?;

    Zip::from(&mut *result)
        .and(x)
        .and(y)
        .for_each(|r, &a, &b| *r = a + b);

    Ok(result)
}

/// `result[i] = x[i] + scalar`
pub fn add_vector_scalar<'r>(
    x: &Array1<f64>,
    scalar: f64,
    result: &'r mut Array1<f64>,
) -> AlgoResult<&'r mut Array1<f64>> {
    check_len(result.len(), x.len())?;

    Zip::from(&mut *result)
        .and(x)
        .for_each(|r, &a| *r = a + scalar);

    Ok(result)
}

/// `result[i] = x[i] * y[i]`
pub fn mul_vector_vector<'r>(
    x: &Array1<f64>,
    y: &Array1<f64>,
    result: &'r mut Array1<f64>,
) -> AlgoResult<&'r mut Array1<f64>> {
    check_len(y.len(), x.len())?;
    check_len(result.len(), x.len())?;

    Zip::from(&mut *result)
        .and(x)
        .and(y)
        .for_each(|r, &a, &b| *r = a * b);

    Ok(result)
}
