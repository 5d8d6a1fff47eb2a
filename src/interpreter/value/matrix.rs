/// A dense matrix of `f64` stored column by column.
///
/// Element `(i, j)` is column `i`, row `j`, at buffer index `i * rows + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    cols: usize,
    rows: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `cols` × `rows` matrix filled with zeros.
    #[must_use]
    pub fn zeros(cols: usize, rows: usize) -> Self {
        Self { cols,
               rows,
               data: vec![0.0; cols * rows] }
    }

    /// Creates the `size` × `size` identity matrix.
    ///
    /// # Example
    /// ```
    /// use rcalc::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::identity(2);
    /// assert_eq!(m.get(0, 0), Some(1.0));
    /// assert_eq!(m.get(1, 0), Some(0.0));
    /// assert_eq!(m.to_string(), "1 0 \n0 1 \n");
    /// ```
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the element at column `i`, row `j`, or `None` outside the
    /// matrix.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.cols || j >= self.rows {
            return None;
        }
        self.data.get(i * self.rows + j).copied()
    }

    /// Sets the element at column `i`, row `j`.
    ///
    /// # Returns
    /// `false` if the position is outside the matrix; nothing is written.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> bool {
        if i >= self.cols || j >= self.rows {
            return false;
        }
        self.data[i * self.rows + j] = value;
        true
    }

    /// The flat column-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Applies `f` to every element, keeping the dimensions.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { cols: self.cols,
               rows: self.rows,
               data: self.data.iter().map(|&x| f(x)).collect() }
    }

    /// Multiplies the matrix by a column vector.
    ///
    /// `out[j] = Σ_i get(i, j) · v[i]`, one entry per row.
    ///
    /// # Returns
    /// `None` if the vector length differs from the number of columns.
    ///
    /// # Example
    /// ```
    /// use rcalc::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::identity(3).map(|x| x * 2.0);
    /// assert_eq!(m.mul_vector(&[1.0, 2.0, 3.0]), Some(vec![2.0, 4.0, 6.0]));
    /// assert_eq!(m.mul_vector(&[1.0]), None);
    /// ```
    #[must_use]
    pub fn mul_vector(&self, v: &[f64]) -> Option<Vec<f64>> {
        if v.len() != self.cols {
            return None;
        }

        let out: Vec<f64> = (0..self.rows).map(|j| {
                                    self.data
                                        .iter()
                                        .skip(j)
                                        .step_by(self.rows)
                                        .zip(v)
                                        .map(|(m, x)| m * x)
                                        .sum::<f64>()
                                })
                                .collect();
        Some(out)
    }
}

impl std::fmt::Display for Matrix {
    /// Row-major grid: every value followed by a space, every row by a newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for j in 0..self.rows {
            for i in 0..self.cols {
                write!(f, "{} ", self.data[i * self.rows + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
