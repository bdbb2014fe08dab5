#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Context, Result as AnyResult};
use rand::Rng;

/// Square, row-major matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(size: usize) -> AnyResult<Self> {
        let len = cells(size)?;
        Ok(Self {
            size,
            data: vec![0.0; len],
        })
    }

    /// Every entry drawn independently and uniformly from [0, 1).
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> AnyResult<Self> {
        let len = cells(size)?;
        let data = (0..len).map(|_| rng.gen::<f64>()).collect();
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.data.get(row * self.size + col).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn multiply(&self, other: &Matrix) -> AnyResult<Matrix> {
        if self.size != other.size {
            bail!(
                "dimension mismatch: {}x{} * {}x{}",
                self.size,
                self.size,
                other.size,
                other.size
            );
        }
        let n = self.size;
        let mut out = Matrix::zeros(n)?;
        if n == 0 {
            return Ok(out);
        }
        // i-k-j order keeps the inner loop on contiguous rows of `other` and `out`.
        for (a_row, out_row) in self.data.chunks_exact(n).zip(out.data.chunks_exact_mut(n)) {
            for (&a, b_row) in a_row.iter().zip(other.data.chunks_exact(n)) {
                for (c, &b) in out_row.iter_mut().zip(b_row) {
                    *c += a * b;
                }
            }
        }
        Ok(out)
    }
}

fn cells(size: usize) -> AnyResult<usize> {
    size.checked_mul(size)
        .with_context(|| format!("matrix size {size} overflows the address space"))
}

/// One unit of load: two fresh random matrices and their product.
pub fn run_load(matrix_size: usize) -> AnyResult<Matrix> {
    let mut rng = rand::thread_rng();
    let a = Matrix::random(matrix_size, &mut rng).context("allocate matrix a")?;
    let b = Matrix::random(matrix_size, &mut rng).context("allocate matrix b")?;
    a.multiply(&b)
}
